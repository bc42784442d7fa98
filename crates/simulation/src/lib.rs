use bevy::prelude::*;

pub mod animation_loop;
pub mod app_state;
pub mod config;
pub mod particles;
mod plugin_registration;
pub mod readiness;
pub mod season;
pub mod sim_rng;
pub mod simulation_sets;
pub mod viewport;

#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use animation_loop::{animation_running, AnimationLoop};
pub use app_state::AppState;
pub use simulation_sets::SceneSet;

/// Headless scene state: readiness gate, season clock and particle field.
///
/// Needs `Time` and `StatesPlugin` (both part of `DefaultPlugins`, or
/// `MinimalPlugins` + `StatesPlugin` in tests). Insert a seeded
/// [`sim_rng::SimRng`] before adding this plugin to control the scatter.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<sim_rng::SimRng>()
            .init_resource::<AnimationLoop>()
            .init_resource::<viewport::ViewportLayout>();

        simulation_sets::configure_scene_sets(app);
        plugin_registration::register_feature_plugins(app);
    }
}
