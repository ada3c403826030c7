//! Enemy plugin - registers all enemy systems.

use bevy::prelude::*;

use super::ai;
use super::data::load_steering_config;
use super::highlight;
use crate::core::GameState;

/// Enemy plugin - handles steering config, chasing and the lock-on highlight.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_systems(Startup, load_steering_config)
            // Steering runs once per frame during gameplay
            .add_systems(
                Update,
                (ai::init_world_matrix, ai::steer_toward_target)
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )
            // Highlight follows the flag even while paused
            .add_systems(Update, highlight::apply_target_highlight);
    }
}
