//! Pure helpers mapping elapsed time to a point in the season cycle.
//!
//! These functions are testable without ECS: they take a time and a table
//! and return new values. Nothing here mutates shared color state.

use bevy::color::Srgba;
use bevy::prelude::*;

use crate::config::{SEASON_COUNT, SEASON_DURATION_SECS};

use super::types::{Season, SeasonTable};

/// Largest f32 below 1.0. Keeps `blend` strictly under 1 after f64 -> f32 rounding.
pub(super) const BLEND_MAX: f32 = 1.0 - f32::EPSILON / 2.0;

/// Current season, the season it is heading into, and how far along it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonSample {
    pub current: Season,
    pub next: Season,
    /// In `[0, 1)`. 0 at the start of `current`.
    pub blend: f32,
}

impl SeasonSample {
    /// Start of the cycle: spring, blend 0.
    pub fn start() -> Self {
        Self {
            current: Season::Spring,
            next: Season::Summer,
            blend: 0.0,
        }
    }

    /// `current = floor((t / d) mod 4)`, `blend = (t mod d) / d`.
    ///
    /// Negative or non-finite times and non-positive durations map to the
    /// start of the cycle.
    pub fn at(elapsed_secs: f64, season_duration_secs: f64) -> Self {
        if !elapsed_secs.is_finite()
            || !season_duration_secs.is_finite()
            || season_duration_secs <= 0.0
        {
            return Self::start();
        }
        let time = elapsed_secs.max(0.0);

        let cycle = (time / season_duration_secs).rem_euclid(SEASON_COUNT as f64);
        let index = (cycle.floor() as usize).min(SEASON_COUNT - 1);
        let blend = ((time % season_duration_secs) / season_duration_secs) as f32;

        let current = Season::from_index(index);
        Self {
            current,
            next: current.next(),
            blend: blend.clamp(0.0, BLEND_MAX),
        }
    }
}

/// Linear interpolation between two f32 values.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Per-channel linear interpolation between two sRGB colors, alpha included.
/// `t = 0` returns `a` exactly.
pub fn lerp_srgba(a: Srgba, b: Srgba, t: f32) -> Srgba {
    Srgba::new(
        lerp(a.red, b.red, t),
        lerp(a.green, b.green, t),
        lerp(a.blue, b.blue, t),
        lerp(a.alpha, b.alpha, t),
    )
}

/// Colors for one frame. Recomputed from scratch every frame.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SeasonFrame {
    pub sample: SeasonSample,
    pub background: Srgba,
    pub particle: Srgba,
}

impl SeasonFrame {
    pub fn compute(table: &SeasonTable, sample: SeasonSample) -> Self {
        let from = table.colors(sample.current);
        let to = table.colors(sample.next);
        Self {
            sample,
            background: lerp_srgba(from.background, to.background, sample.blend),
            particle: lerp_srgba(from.particle, to.particle, sample.blend),
        }
    }

    pub fn at(table: &SeasonTable, elapsed_secs: f64) -> Self {
        Self::compute(table, table.sample(elapsed_secs))
    }
}

impl Default for SeasonFrame {
    fn default() -> Self {
        Self::at(&SeasonTable::default(), 0.0)
    }
}

/// Wall-clock length of one full cycle.
pub fn cycle_duration_secs() -> f64 {
    SEASON_DURATION_SECS * SEASON_COUNT as f64
}
