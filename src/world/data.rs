//! Arena layout data and shared RON loading helpers.

use bevy::prelude::*;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;

use super::error::DataLoadError;

/// Location of the arena layout file.
pub const ARENA_CONFIG_PATH: &str = "assets/data/world/arena.ron";

/// Read a data file to a string.
pub fn read_data_file(path: &str) -> Result<String, DataLoadError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound(path.to_string()),
        _ => DataLoadError::ReadError {
            path: path.to_string(),
            details: e.to_string(),
        },
    })
}

/// Parse RON text, tagging errors with the path it came from.
pub fn parse_ron<T: DeserializeOwned>(path: &str, contents: &str) -> Result<T, DataLoadError> {
    ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
        path: path.to_string(),
        details: e.to_string(),
    })
}

/// One enemy placed in the arena.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EnemySpawn {
    pub position: (f32, f32, f32),
    /// Whether this enemy is handed the player as its target.
    #[serde(default = "default_chase_player")]
    pub chase_player: bool,
}

fn default_chase_player() -> bool {
    true
}

impl EnemySpawn {
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.position.0, self.position.1, self.position.2)
    }
}

/// Arena layout loaded from assets/data/world/arena.ron.
#[derive(Resource, Debug, Clone, Deserialize, PartialEq)]
pub struct ArenaConfig {
    /// Side length of the square ground plane.
    pub ground_size: f32,
    pub player_start: (f32, f32, f32),
    /// Camera position; it always looks at the arena center.
    pub camera_position: (f32, f32, f32),
    pub enemies: Vec<EnemySpawn>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            ground_size: 30.0,
            player_start: (0.0, 0.8, 4.0),
            camera_position: (0.0, 16.0, -14.0),
            enemies: vec![
                EnemySpawn { position: (0.0, 0.8, -6.0), chase_player: true },
                EnemySpawn { position: (2.5, 0.8, -9.0), chase_player: true },
                EnemySpawn { position: (-4.0, 0.8, -3.0), chase_player: true },
                EnemySpawn { position: (6.0, 0.8, 8.0), chase_player: false },
            ],
        }
    }
}

impl ArenaConfig {
    pub fn player_start(&self) -> Vec3 {
        Vec3::new(self.player_start.0, self.player_start.1, self.player_start.2)
    }

    pub fn camera_position(&self) -> Vec3 {
        Vec3::new(
            self.camera_position.0,
            self.camera_position.1,
            self.camera_position.2,
        )
    }

    /// Parse and validate a layout from RON text.
    pub fn from_ron(path: &str, contents: &str) -> Result<Self, DataLoadError> {
        let config: Self = parse_ron(path, contents)?;
        if !(config.ground_size.is_finite() && config.ground_size > 0.0) {
            return Err(DataLoadError::InvalidValue {
                path: path.to_string(),
                field: "ground_size".to_string(),
                details: format!("{} must be positive", config.ground_size),
            });
        }
        Ok(config)
    }

    /// Load arena config from RON file, falling back to defaults.
    pub fn load() -> Self {
        let result = read_data_file(ARENA_CONFIG_PATH)
            .and_then(|contents| Self::from_ron(ARENA_CONFIG_PATH, &contents));
        match result {
            Ok(config) => {
                info!(
                    "Loaded arena from {} ({} enemies)",
                    ARENA_CONFIG_PATH,
                    config.enemies.len()
                );
                config
            }
            Err(DataLoadError::FileNotFound(path)) => {
                warn!("Could not find {}. Using default arena.", path);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using default arena.", e);
                Self::default()
            }
        }
    }
}

/// System to load the arena config at startup.
pub fn load_arena_config(mut commands: Commands) {
    commands.insert_resource(ArenaConfig::load());
}
