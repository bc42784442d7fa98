//! Deterministic RNG resource for the particle field.
//!
//! Wraps `ChaCha8Rng` for cross-platform deterministic randomness.
//! Every system that scatters or recycles particles should use
//! `ResMut<SimRng>` instead of `rand::thread_rng()` so that identical seeds
//! produce identical particle motion.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Default seed used when no explicit seed is provided.
const DEFAULT_SEED: u64 = 42;

/// Deterministic RNG resource.
///
/// Systems that need randomness take `ResMut<SimRng>` and use `rng.0`
/// (which is a `ChaCha8Rng` implementing `rand::Rng`).
#[derive(Resource)]
pub struct SimRng(pub ChaCha8Rng);

impl Default for SimRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl SimRng {
    /// Create a new `SimRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Parse the value of `PARTICLE_SEED_VAR`.
///
/// `Ok(None)` when unset or blank, `Err` with the trimmed text when it is not a `u64`.
pub fn parse_seed(raw: Option<&str>) -> Result<Option<u64>, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some).map_err(|_| text.to_string()),
    }
}
