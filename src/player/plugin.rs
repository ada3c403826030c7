//! Player plugin - movement and lock-on targeting.

use bevy::prelude::*;

use super::components::*;
use super::movement;
use super::targeting;
use crate::core::GameState;

/// Player plugin - handles player movement and target cycling.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<PlayerConfig>()
            .init_resource::<LockOn>()
            .add_systems(
                Update,
                (
                    movement::player_movement,
                    targeting::cycle_lock_on,
                    targeting::sync_lock_on_highlight,
                )
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
