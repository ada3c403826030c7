//! FOV Chase - view-cone steering for enemies in Bevy.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states and pause handling
//! - **Enemies**: Steering toward the player and the lock-on highlight
//! - **Player**: Ground movement and target cycling
//! - **World**: Arena layout, camera and lighting

pub mod core;
pub mod enemies;
pub mod player;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct FovChasePlugin;

impl Plugin for FovChasePlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Player systems
            .add_plugins(player::PlayerPlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)

            // World systems
            .add_plugins(world::WorldPlugin);
    }
}
