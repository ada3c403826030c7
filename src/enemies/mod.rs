//! Enemies module - view-cone steering and the lock-on highlight.

mod ai;
mod components;
pub mod data;
pub mod highlight;
mod plugin;
pub mod steering;

pub use ai::{init_world_matrix, steer_toward_target};
pub use components::*;
pub use data::SteeringConfig;
pub use highlight::apply_target_highlight;
pub use plugin::EnemyPlugin;
