//! Seasonal particle field: petals, leaves or snow drifting around the castle.

pub mod compute;
mod system;
pub mod types;


pub use compute::sway_offset;
pub use system::{animate_particles, scatter_particles, ParticlesPlugin};
pub use types::{ParticleField, ParticleMotion, SpawnVolume};
