//! Enemy steering systems.

use bevy::prelude::*;

use super::components::{Enemy, WorldMatrix};
use super::data::SteeringConfig;
use super::steering::{steer, SteerOutcome};
use crate::player::Player;

/// Seed the world matrix of newly added enemies from their translation.
///
/// Spawn rotation and scale are discarded: every enemy starts facing +Z.
pub fn init_world_matrix(mut query: Query<(&Transform, &mut WorldMatrix), Added<Enemy>>) {
    for (transform, mut world) in query.iter_mut() {
        *world = WorldMatrix::from_translation(transform.translation);
    }
}

/// Turn toward and step after the player when it is inside the view cone.
pub fn steer_toward_target(
    config: Res<SteeringConfig>,
    player_query: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<(Entity, &Enemy, &mut WorldMatrix, &mut Transform), Without<Player>>,
) {
    for (entity, enemy, mut world, mut transform) in enemy_query.iter_mut() {
        // No target assigned, or it has been despawned
        let Some(player) = enemy.player else {
            continue;
        };
        let Ok(player_transform) = player_query.get(player) else {
            continue;
        };

        if let SteerOutcome::Chasing { yaw } =
            steer(&mut world.0, player_transform.translation, &config)
        {
            debug!(
                "Enemy {:?} turned {:.2} degrees toward {:?}",
                entity,
                yaw.to_degrees(),
                player
            );
        }

        *transform = Transform::from_matrix(world.0);
    }
}
