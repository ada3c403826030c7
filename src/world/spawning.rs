//! Entity spawning functions for arena construction.

use bevy::prelude::*;

use super::data::{ArenaConfig, EnemySpawn};
use crate::enemies::{highlight, Enemy};

/// Spawn the ground plane and a sun.
pub fn spawn_environment(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    arena: &ArenaConfig,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(arena.ground_size, arena.ground_size))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.28, 0.27, 0.26),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::default(),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 2.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Spawn one enemy with a material of its own, so the lock-on highlight
/// recolors only this enemy.
pub fn spawn_enemy(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    spawn: &EnemySpawn,
    player: Entity,
) -> Entity {
    let enemy = if spawn.chase_player {
        Enemy::chasing(player)
    } else {
        Enemy::default()
    };

    commands
        .spawn((
            enemy,
            Mesh3d(meshes.add(Cuboid::new(0.8, 1.6, 0.8))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: highlight::highlight_color(false),
                perceptual_roughness: 0.7,
                ..default()
            })),
            Transform::from_translation(spawn.position()),
        ))
        .with_children(|parent| {
            // Nose marker on local +Z so facing is visible
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(0.2, 0.2, 0.4))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(0.1, 0.1, 0.1),
                    ..default()
                })),
                Transform::from_xyz(0.0, 0.4, 0.55),
            ));
        })
        .id()
}
