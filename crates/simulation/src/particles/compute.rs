//! Per-frame particle motion. Plain functions over the field so they can be
//! tested and benchmarked without an App.

use bevy::prelude::*;
use rand::Rng;

use crate::season::Season;

use super::types::{ParticleField, ParticleMotion};

/// Lateral drift for one particle at `time`: `(sin, cos)` of `time + phase`,
/// scaled by the sway speed.
pub fn sway_offset(time_secs: f64, phase: f32, sway_speed: f32) -> Vec2 {
    let angle = time_secs + phase as f64;
    Vec2::new(
        angle.sin() as f32 * sway_speed,
        angle.cos() as f32 * sway_speed,
    )
}

impl ParticleField {
    /// Advance every particle by one frame. Returns how many were recycled.
    ///
    /// Sway on x/z, fall on y by the season's speed, then any particle below
    /// the floor gets a fresh height. Recycling leaves x and z alone.
    pub fn step(
        &mut self,
        time_secs: f64,
        season: Season,
        motion: &ParticleMotion,
        rng: &mut impl Rng,
    ) -> usize {
        let fall = motion.fall_speed(season);
        let mut recycled = 0;

        for (position, &phase) in self.positions.iter_mut().zip(&self.phases) {
            let sway = sway_offset(time_secs, phase, motion.sway_speed);
            position.x += sway.x;
            position.z += sway.y;
            position.y -= fall;

            if position.y < motion.floor_y {
                position.y = motion.reset_height(rng);
                recycled += 1;
            }
        }
        recycled
    }
}
