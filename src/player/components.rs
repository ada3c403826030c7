//! Player-related components.

use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Configuration for player movement.
#[derive(Resource)]
pub struct PlayerConfig {
    /// Movement speed in units per second
    pub move_speed: f32,
    /// Sprint speed multiplier
    pub sprint_multiplier: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 4.0,
            sprint_multiplier: 1.5,
        }
    }
}

/// The enemy the player is currently locked onto, if any.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockOn {
    pub target: Option<Entity>,
}
