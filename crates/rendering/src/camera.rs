use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use simulation::config::VIEWPORT_HEIGHT_FRACTION;

use crate::egui_input_guard::egui_wants_pointer;

pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.01;
pub const CAMERA_FAR: f32 = 1_000_000.0;
/// Where the camera starts, looking at the origin.
pub const INITIAL_EYE: Vec3 = Vec3::new(400.0, 80.0, 400.0);

const DAMPING_FACTOR: f32 = 0.2;
const MIN_DISTANCE: f32 = 200.0;
const MAX_DISTANCE: f32 = 700.0;
const MIN_PITCH: f32 = 0.0; // horizon
const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 1.0e-3; // just short of the zenith
/// Pending rotation below this is dropped so damping settles.
const MOMENTUM_EPSILON: f32 = 1.0e-5;

/// Marker for the scene camera.
#[derive(Component)]
pub struct SceneCamera;

/// Orbit control limits and feel.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrbitSettings {
    /// Share of the pending rotation applied each frame.
    pub damping: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Elevation above the horizon, radians.
    pub min_pitch: f32,
    pub max_pitch: f32,
    pub rotate_speed: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            damping: DAMPING_FACTOR,
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
            min_pitch: MIN_PITCH,
            max_pitch: MAX_PITCH,
            rotate_speed: 1.0,
        }
    }
}

/// Orbital camera model: camera orbits around a fixed focus point.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Point the camera looks at
    pub focus: Vec3,
    /// Horizontal rotation in radians, measured from +Z toward +X
    pub yaw: f32,
    /// Elevation angle in radians (0 = horizon)
    pub pitch: f32,
    /// Distance from focus point
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_eye(INITIAL_EYE, Vec3::ZERO)
    }
}

impl OrbitCamera {
    /// Orbit state that reproduces a camera at `eye` looking at `focus`.
    pub fn from_eye(eye: Vec3, focus: Vec3) -> Self {
        let offset = eye - focus;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return Self {
                focus,
                yaw: 0.0,
                pitch: 0.0,
                distance: 0.0,
            };
        }
        Self {
            focus,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).clamp(-1.0, 1.0).asin(),
            distance,
        }
    }

    /// Spherical to cartesian.
    pub fn eye(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.focus + Vec3::new(x, y, z)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.focus, Vec3::Y)
    }

    /// Pull pitch and distance back inside the settings' bounds.
    pub fn clamp_to(&mut self, settings: &OrbitSettings) {
        self.pitch = self.pitch.clamp(settings.min_pitch, settings.max_pitch);
        self.distance = self
            .distance
            .clamp(settings.min_distance, settings.max_distance);
    }
}

/// Rotation requested by input but not yet applied. Drained by damping.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct OrbitMomentum {
    pub yaw: f32,
    pub pitch: f32,
}

impl OrbitMomentum {
    /// Take `damping` of the pending rotation and keep the rest for later frames.
    pub fn drain(&mut self, damping: f32) -> (f32, f32) {
        let step = (self.yaw * damping, self.pitch * damping);
        self.yaw *= 1.0 - damping;
        self.pitch *= 1.0 - damping;
        if self.yaw.abs() < MOMENTUM_EPSILON {
            self.yaw = 0.0;
        }
        if self.pitch.abs() < MOMENTUM_EPSILON {
            self.pitch = 0.0;
        }
        step
    }

    pub fn is_idle(&self) -> bool {
        self.yaw == 0.0 && self.pitch == 0.0
    }
}

#[derive(Resource, Default)]
pub struct CameraOrbitDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

/// Rotation for a cursor move of `delta` logical pixels. A drag across the
/// full view height turns the camera by a full circle.
pub fn drag_rotation(delta: Vec2, view_height: f32, rotate_speed: f32) -> (f32, f32) {
    if view_height <= 0.0 {
        return (0.0, 0.0);
    }
    let scale = std::f32::consts::TAU * rotate_speed / view_height;
    (-delta.x * scale, delta.y * scale)
}

pub fn setup_camera(mut commands: Commands, orbit: Res<OrbitCamera>) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Tonemapping::AcesFitted,
        Msaa::Sample4,
        orbit.transform(),
        SceneCamera,
    ));
}

/// Left-mouse drag: queue orbit rotation (horizontal = yaw, vertical = pitch).
pub fn camera_orbit_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    settings: Res<OrbitSettings>,
    mut contexts: EguiContexts,
    mut drag: ResMut<CameraOrbitDrag>,
    mut momentum: ResMut<OrbitMomentum>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) && !egui_wants_pointer(&mut contexts) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }

    if buttons.just_released(MouseButton::Left) {
        drag.dragging = false;
    }

    if drag.dragging {
        if let Some(pos) = window.cursor_position() {
            let view_height = window.height() * VIEWPORT_HEIGHT_FRACTION;
            let (yaw, pitch) =
                drag_rotation(pos - drag.last_pos, view_height, settings.rotate_speed);
            momentum.yaw += yaw;
            momentum.pitch += pitch;
            drag.last_pos = pos;
        }
    }
}

/// System: apply one damped step of pending rotation, then clamp.
pub fn apply_orbit_damping(
    settings: Res<OrbitSettings>,
    mut momentum: ResMut<OrbitMomentum>,
    mut orbit: ResMut<OrbitCamera>,
) {
    if momentum.is_idle() {
        return;
    }
    let (yaw, pitch) = momentum.drain(settings.damping);
    let mut next = *orbit;
    next.yaw += yaw;
    next.pitch += pitch;
    next.clamp_to(&settings);
    if next != *orbit {
        *orbit = next;
    }
}

/// System: apply OrbitCamera state to the actual camera Transform each frame.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Transform, With<SceneCamera>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = orbit.transform();
}
