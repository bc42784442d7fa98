use bevy::prelude::*;

use crate::season::{advance_season_frame, SeasonFrame};
use crate::sim_rng::SimRng;
use crate::SceneSet;

use super::types::{ParticleField, ParticleMotion, SpawnVolume};

/// Startup: scatter the field once from the seeded RNG.
pub fn scatter_particles(
    volume: Res<SpawnVolume>,
    mut rng: ResMut<SimRng>,
    mut field: ResMut<ParticleField>,
) {
    *field = ParticleField::scatter(&volume, &mut rng.0);
    info!("Scattered {} particles", field.len());
}

/// System: one frame of sway, fall and recycling.
/// Runs after the season frame so the fall speed matches this frame's season.
pub fn animate_particles(
    time: Res<Time<Real>>,
    frame: Res<SeasonFrame>,
    motion: Res<ParticleMotion>,
    mut field: ResMut<ParticleField>,
    mut rng: ResMut<SimRng>,
) {
    let recycled = field.step(
        time.elapsed_secs_f64(),
        frame.sample.current,
        &motion,
        &mut rng.0,
    );
    if recycled > 0 {
        trace!("Recycled {recycled} particles");
    }
}

pub struct ParticlesPlugin;

impl Plugin for ParticlesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ParticleMotion>()
            .init_resource::<SpawnVolume>()
            .init_resource::<ParticleField>()
            .add_systems(Startup, scatter_particles.in_set(SceneSet::Scatter))
            .add_systems(
                Update,
                animate_particles
                    .after(advance_season_frame)
                    .in_set(SceneSet::Animate),
            );
    }
}
