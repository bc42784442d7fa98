//! Pushes the frame's season colors into the clear color and the shared
//! particle material.

use bevy::prelude::*;

use simulation::season::SeasonFrame;

use crate::particle_render::{particle_color, ParticleMaterial};

/// System: apply the blended background and particle colors.
/// Only runs when `SeasonFrame` was recomputed this frame.
pub fn apply_season_colors(
    frame: Res<SeasonFrame>,
    particle_material: Option<Res<ParticleMaterial>>,
    mut clear_color: ResMut<ClearColor>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    clear_color.0 = Color::Srgba(frame.background);

    let Some(particle_material) = particle_material else {
        return;
    };
    if let Some(material) = materials.get_mut(&particle_material.0) {
        material.base_color = particle_color(frame.particle);
    }
}
