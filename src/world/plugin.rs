//! World plugin - arena loading, camera, and lighting.

use bevy::prelude::*;

use crate::player::{spawn_player, ArenaCamera};

use super::data::{load_arena_config, ArenaConfig};
use super::spawning::{spawn_enemy, spawn_environment};

/// World plugin - handles arena loading and setup.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (load_arena_config, setup_arena).chain());
    }
}

/// Build the arena from its config: ground, light, camera, player, enemies.
pub fn setup_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    arena: Res<ArenaConfig>,
) {
    spawn_environment(&mut commands, &mut meshes, &mut materials, &arena);

    commands.spawn((
        Camera3d::default(),
        ArenaCamera,
        Transform::from_translation(arena.camera_position()).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let player = spawn_player(&mut commands, &mut meshes, &mut materials, arena.player_start());

    for spawn in &arena.enemies {
        spawn_enemy(&mut commands, &mut meshes, &mut materials, spawn, player);
    }

    info!("Arena ready with {} enemies", arena.enemies.len());
}
