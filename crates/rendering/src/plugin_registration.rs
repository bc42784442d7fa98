use bevy::prelude::*;

use simulation::readiness::apply_load_signals;
use simulation::season::SeasonFrame;
use simulation::{AppState, SceneSet};

use crate::*;

/// Register all rendering systems.
///
/// Startup builds the static scene and starts the loads. Update is split by
/// `SceneSet`: camera input, load polling, then visuals derived from the
/// animated state.
pub(crate) fn register_rendering_systems(app: &mut App) {
    app.add_systems(
        Startup,
        (
            camera::setup_camera,
            super::setup_lighting,
            scene_assets::begin_scene_loads,
        )
            .chain(),
    );
    app.add_systems(
        Startup,
        particle_render::spawn_particle_sprites.after(SceneSet::Scatter),
    );

    // Camera controls
    app.add_systems(
        Update,
        (
            camera::camera_orbit_drag,
            camera::apply_orbit_damping,
            camera::apply_orbit_camera,
        )
            .chain()
            .in_set(SceneSet::Input),
    );

    // Asset loaders report to the readiness gate in the same frame
    app.add_systems(
        Update,
        (scene_assets::poll_environment_map, scene_assets::poll_model)
            .before(apply_load_signals)
            .in_set(SceneSet::Loading),
    );

    // Visuals
    app.add_systems(
        Update,
        (
            viewport::fit_viewport_to_window,
            particle_render::sync_particle_sprites,
            season_render::apply_season_colors
                .run_if(in_state(AppState::Ready))
                .run_if(resource_changed::<SeasonFrame>),
        )
            .in_set(SceneSet::Visual),
    );
}
