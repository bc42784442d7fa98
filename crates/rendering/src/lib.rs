use bevy::prelude::*;

pub mod camera;
pub mod egui_input_guard;
pub mod environment;
pub mod particle_render;
mod plugin_registration;
pub mod scene_assets;
pub mod season_render;
pub mod viewport;

use camera::{CameraOrbitDrag, OrbitCamera, OrbitMomentum, OrbitSettings};
use scene_assets::SceneAssets;
use simulation::season::{srgb_hex, Season};

/// Season shown before the first animated frame.
pub const INITIAL_SEASON: Season = Season::Autumn;

/// Background before the first animated frame (the autumn sky).
pub const INITIAL_BACKGROUND: u32 = 0xe0d5c0;

/// Sun strength in lux. White, straight down.
const SUN_ILLUMINANCE: f32 = 2_000.0;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::Srgba(srgb_hex(INITIAL_BACKGROUND))))
            .init_resource::<OrbitSettings>()
            .init_resource::<OrbitCamera>()
            .init_resource::<OrbitMomentum>()
            .init_resource::<CameraOrbitDrag>()
            .init_resource::<SceneAssets>();

        plugin_registration::register_rendering_systems(app);
    }
}

fn setup_lighting(mut commands: Commands) {
    // The environment map provides the fill light once it is loaded.
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.0,
    });

    commands.spawn((
        DirectionalLight {
            color: Color::WHITE,
            illuminance: SUN_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 1.0, 0.0).looking_at(Vec3::ZERO, Vec3::Z),
    ));
}
