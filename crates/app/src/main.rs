use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::WinitSettings;

use simulation::config::PARTICLE_SEED_VAR;
use simulation::sim_rng::{parse_seed, SimRng};

const LOG_FILTER: &str = "info,wgpu=error,naga=warn";

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Castle Seasons".to_string(),
                    resolution: (1280.0, 720.0).into(),
                    present_mode: PresentMode::AutoVsync,
                    // On the web the scene draws into the page's canvas.
                    canvas: Some("#myCanvas".to_string()),
                    fit_canvas_to_parent: true,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: LOG_FILTER.to_string(),
                ..default()
            }),
    )
    // The scene animates every frame, focused or not.
    .insert_resource(WinitSettings::game())
    .insert_resource(particle_rng())
    .add_plugins((
        simulation::SimulationPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    app.run();
}

fn particle_rng() -> SimRng {
    let raw = std::env::var(PARTICLE_SEED_VAR).ok();
    let seed = match parse_seed(raw.as_deref()) {
        Ok(Some(seed)) => {
            info!("Particle seed {seed} from {PARTICLE_SEED_VAR}");
            seed
        }
        Ok(None) => rand::random(),
        Err(value) => {
            warn!("Ignoring {PARTICLE_SEED_VAR}={value:?}: not a u64");
            rand::random()
        }
    };
    SimRng::from_seed_u64(seed)
}
