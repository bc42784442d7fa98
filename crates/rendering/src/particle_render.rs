use bevy::prelude::*;

use simulation::config::{PARTICLE_OPACITY, PARTICLE_SIZE};
use simulation::particles::ParticleField;
use simulation::season::SeasonTable;

use crate::INITIAL_SEASON;

/// One rendered particle. The index points into `ParticleField`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleSprite(pub usize);

/// The single material every particle shares, so a color change is one write.
#[derive(Resource)]
pub struct ParticleMaterial(pub Handle<StandardMaterial>);

/// Low-poly sphere: particles are a few pixels across on screen.
const SPHERE_SECTORS: u32 = 6;
const SPHERE_STACKS: u32 = 4;

/// Unlit, alpha-blended, tinted with `color` at the particle opacity.
pub fn particle_material(color: Srgba) -> StandardMaterial {
    StandardMaterial {
        base_color: particle_color(color),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    }
}

pub fn particle_color(color: Srgba) -> Color {
    Color::Srgba(Srgba {
        alpha: PARTICLE_OPACITY,
        ..color
    })
}

/// Startup (after scatter): one sphere entity per particle, tinted with the
/// initial season's color until the animation takes over.
pub fn spawn_particle_sprites(
    mut commands: Commands,
    field: Res<ParticleField>,
    table: Res<SeasonTable>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(
        Sphere::new(PARTICLE_SIZE * 0.5)
            .mesh()
            .uv(SPHERE_SECTORS, SPHERE_STACKS),
    );
    let initial = table.colors(INITIAL_SEASON).particle;
    let material = materials.add(particle_material(initial));

    for (index, position) in field.positions().iter().enumerate() {
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(*position),
            ParticleSprite(index),
        ));
    }
    commands.insert_resource(ParticleMaterial(material));
}

/// System: copy field positions onto sprite transforms when the field moved.
pub fn sync_particle_sprites(
    field: Res<ParticleField>,
    mut sprites: Query<(&ParticleSprite, &mut Transform)>,
) {
    if !field.is_changed() {
        return;
    }
    for (sprite, mut transform) in &mut sprites {
        if let Some(position) = field.position(sprite.0) {
            transform.translation = position;
        }
    }
}
