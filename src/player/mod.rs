//! Player module - player entity, movement, and lock-on targeting.

mod components;
mod movement;
mod plugin;
mod targeting;

pub use components::*;
pub use movement::{ground_direction, spawn_player, ArenaCamera, MoveKeys};
pub use plugin::PlayerPlugin;
pub use targeting::next_target;
