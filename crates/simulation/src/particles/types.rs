use bevy::prelude::*;
use rand::Rng;

use crate::config::{
    FALL_SPEED_OTHER, FALL_SPEED_WINTER, PARTICLE_COUNT, PARTICLE_FLOOR_Y, PARTICLE_RESET_MIN_Y,
    PARTICLE_RESET_SPAN_Y, SPAWN_HALF_EXTENT_XZ, SPAWN_MAX_Y, SWAY_SPEED,
};
use crate::season::Season;

// =============================================================================
// Tunables
// =============================================================================

/// Per-frame motion parameters. Units are world units per frame, not per
/// second: the scene moves faster on faster displays.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ParticleMotion {
    pub sway_speed: f32,
    pub fall_speed_winter: f32,
    pub fall_speed_other: f32,
    pub floor_y: f32,
    pub reset_min_y: f32,
    pub reset_span_y: f32,
}

impl Default for ParticleMotion {
    fn default() -> Self {
        Self {
            sway_speed: SWAY_SPEED,
            fall_speed_winter: FALL_SPEED_WINTER,
            fall_speed_other: FALL_SPEED_OTHER,
            floor_y: PARTICLE_FLOOR_Y,
            reset_min_y: PARTICLE_RESET_MIN_Y,
            reset_span_y: PARTICLE_RESET_SPAN_Y,
        }
    }
}

impl ParticleMotion {
    /// Snow falls faster than petals and leaves.
    pub fn fall_speed(&self, season: Season) -> f32 {
        match season {
            Season::Winter => self.fall_speed_winter,
            _ => self.fall_speed_other,
        }
    }

    /// Fresh height for a particle that dropped below the floor.
    pub fn reset_height(&self, rng: &mut impl Rng) -> f32 {
        if self.reset_span_y <= 0.0 {
            return self.reset_min_y;
        }
        rng.gen_range(self.reset_min_y..self.reset_min_y + self.reset_span_y)
    }
}

/// Box the field is scattered into at startup.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SpawnVolume {
    pub count: usize,
    pub half_extent_xz: f32,
    pub max_y: f32,
}

impl Default for SpawnVolume {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            half_extent_xz: SPAWN_HALF_EXTENT_XZ,
            max_y: SPAWN_MAX_Y,
        }
    }
}

// =============================================================================
// Field
// =============================================================================

/// Positions and fixed sway phases of every particle, index-aligned.
///
/// The count never changes after scatter. Only positions are mutated, and
/// only by [`ParticleField::step`].
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ParticleField {
    pub(super) positions: Vec<Vec3>,
    pub(super) phases: Vec<f32>,
}

impl ParticleField {
    /// Uniformly scatter `volume.count` particles.
    /// x, z in `[-half_extent, half_extent)`, y in `[0, max_y)`, phase in `[0, 2pi)`.
    pub fn scatter(volume: &SpawnVolume, rng: &mut impl Rng) -> Self {
        let mut positions = Vec::with_capacity(volume.count);
        let mut phases = Vec::with_capacity(volume.count);
        let extent = volume.half_extent_xz * 2.0;
        for _ in 0..volume.count {
            let x = (rng.gen::<f32>() - 0.5) * extent;
            let y = rng.gen::<f32>() * volume.max_y;
            let z = (rng.gen::<f32>() - 0.5) * extent;
            positions.push(Vec3::new(x, y, z));
            phases.push(rng.gen::<f32>() * std::f32::consts::TAU);
        }
        Self { positions, phases }
    }

    /// Build a field from explicit values. Extra entries in the longer
    /// slice are dropped so the two stay aligned.
    pub fn from_parts(positions: Vec<Vec3>, phases: Vec<f32>) -> Self {
        let len = positions.len().min(phases.len());
        let mut positions = positions;
        let mut phases = phases;
        positions.truncate(len);
        phases.truncate(len);
        Self { positions, phases }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn phases(&self) -> &[f32] {
        &self.phases
    }

    pub fn position(&self, index: usize) -> Option<Vec3> {
        self.positions.get(index).copied()
    }
}
