//! Keeps the 3D view in the top part of the window and the projection
//! aspect in step with it. The bottom band belongs to the season HUD.

use bevy::prelude::*;
use bevy::render::camera::Viewport;
use bevy::window::{PrimaryWindow, WindowResized};

use simulation::viewport::ViewportLayout;

use crate::camera::SceneCamera;

/// Point the camera at the layout's rectangle and set its aspect.
pub fn apply_layout(layout: &ViewportLayout, camera: &mut Camera, projection: &mut Projection) {
    camera.viewport = Some(Viewport {
        physical_position: UVec2::ZERO,
        physical_size: layout.physical_size(),
        ..default()
    });
    if let Projection::Perspective(perspective) = projection {
        perspective.aspect_ratio = layout.aspect_ratio();
    }
}

/// System: resize the view to the window. Runs every frame so the first
/// frame is sized too; work is skipped while nothing changed.
pub fn fit_viewport_to_window(
    mut resized: EventReader<WindowResized>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut layout: ResMut<ViewportLayout>,
    mut cameras: Query<(&mut Camera, &mut Projection), With<SceneCamera>>,
) {
    let was_resized = resized.read().last().is_some();
    let Ok(window) = windows.get_single() else {
        return;
    };

    let next = ViewportLayout::for_window(
        window.physical_width() as f32,
        window.physical_height() as f32,
    );
    // Minimized: keep the last good viewport.
    if next.is_collapsed() {
        return;
    }

    let size = next.physical_size();
    for (mut camera, mut projection) in &mut cameras {
        let current = camera.viewport.as_ref().map(|v| v.physical_size);
        if current != Some(size) {
            apply_layout(&next, &mut camera, &mut projection);
        }
    }

    if *layout != next {
        if was_resized {
            debug!(
                "Viewport resized to {}x{} (aspect {:.3})",
                size.x,
                size.y,
                next.aspect_ratio()
            );
        }
        *layout = next;
    }
}
