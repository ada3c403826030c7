//! Steering tuning loaded from RON.

use bevy::prelude::*;
use serde::Deserialize;

use crate::world::{parse_ron, read_data_file, DataLoadError};

/// Location of the steering tuning file.
pub const STEERING_CONFIG_PATH: &str = "assets/data/enemies/steering.ron";

/// View cone and movement tuning shared by every enemy.
#[derive(Resource, Clone, Debug, PartialEq, Deserialize)]
pub struct SteeringConfig {
    /// Half-angle of the view cone in degrees.
    pub view_cone_degrees: f32,
    /// Largest yaw change allowed per tick, in degrees.
    pub max_turn_degrees: f32,
    /// Distance moved along the facing each tick the target is in view.
    pub step_length: f32,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            view_cone_degrees: 20.0,
            max_turn_degrees: 10.0,
            step_length: 0.2,
        }
    }
}

impl SteeringConfig {
    /// Cosine of the view cone half-angle. A target is in view when the
    /// dot of forward and the unit to-target vector is at least this.
    pub fn view_cone_cos(&self) -> f32 {
        self.view_cone_degrees.to_radians().cos()
    }

    pub fn max_turn_radians(&self) -> f32 {
        self.max_turn_degrees.to_radians()
    }

    /// Parse and validate a config from RON text.
    pub fn from_ron(path: &str, contents: &str) -> Result<Self, DataLoadError> {
        let config: Self = parse_ron(path, contents)?;
        config.validate(path)?;
        Ok(config)
    }

    /// Load and validate the config file at `path`.
    pub fn load(path: &str) -> Result<Self, DataLoadError> {
        let contents = read_data_file(path)?;
        Self::from_ron(path, &contents)
    }

    fn validate(&self, path: &str) -> Result<(), DataLoadError> {
        let invalid = |field: &str, details: String| DataLoadError::InvalidValue {
            path: path.to_string(),
            field: field.to_string(),
            details,
        };

        if !(self.view_cone_degrees > 0.0 && self.view_cone_degrees <= 180.0) {
            return Err(invalid(
                "view_cone_degrees",
                format!("{} is not in (0, 180]", self.view_cone_degrees),
            ));
        }
        if !(self.max_turn_degrees.is_finite() && self.max_turn_degrees > 0.0) {
            return Err(invalid(
                "max_turn_degrees",
                format!("{} must be positive", self.max_turn_degrees),
            ));
        }
        if !(self.step_length.is_finite() && self.step_length > 0.0) {
            return Err(invalid(
                "step_length",
                format!("{} must be positive", self.step_length),
            ));
        }
        Ok(())
    }
}

/// Load the steering config at startup, falling back to defaults.
pub fn load_steering_config(mut commands: Commands) {
    let config = match SteeringConfig::load(STEERING_CONFIG_PATH) {
        Ok(config) => {
            info!("Loaded steering config from {}", STEERING_CONFIG_PATH);
            config
        }
        Err(DataLoadError::FileNotFound(path)) => {
            warn!("Steering config not found at {}. Using defaults.", path);
            SteeringConfig::default()
        }
        Err(e) => {
            error!("{}. Using default steering config.", e);
            SteeringConfig::default()
        }
    };
    commands.insert_resource(config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_shipped_tuning() {
        let config = SteeringConfig::default();
        assert_eq!(config.view_cone_degrees, 20.0);
        assert_eq!(config.max_turn_degrees, 10.0);
        assert_eq!(config.step_length, 0.2);
        assert!((config.view_cone_cos() - 20.0_f32.to_radians().cos()).abs() < 1e-6);
    }

    #[test]
    fn test_parses_shipped_file() {
        let contents = include_str!("../../assets/data/enemies/steering.ron");
        let config = SteeringConfig::from_ron(STEERING_CONFIG_PATH, contents).unwrap();
        assert_eq!(config, SteeringConfig::default());
    }

    #[test]
    fn test_rejects_non_positive_step() {
        let contents = "(view_cone_degrees: 20.0, max_turn_degrees: 10.0, step_length: 0.0)";
        let err = SteeringConfig::from_ron("inline", contents).unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidValue { ref field, .. } if field == "step_length"));
    }

    #[test]
    fn test_rejects_wide_cone() {
        let contents = "(view_cone_degrees: 200.0, max_turn_degrees: 10.0, step_length: 0.2)";
        let err = SteeringConfig::from_ron("inline", contents).unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidValue { ref field, .. } if field == "view_cone_degrees"));
    }

    #[test]
    fn test_reports_parse_errors() {
        let err = SteeringConfig::from_ron("inline", "(view_cone_degrees: 20.0)").unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { .. }));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = SteeringConfig::load("assets/data/enemies/does_not_exist.ron").unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound(_)));
    }
}
