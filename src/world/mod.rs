//! World module - arena layout, camera, and lighting.

mod data;
mod error;
mod plugin;
mod spawning;

pub use data::{parse_ron, read_data_file, ArenaConfig, EnemySpawn, ARENA_CONFIG_PATH};
pub use error::DataLoadError;
pub use plugin::{setup_arena, WorldPlugin};
