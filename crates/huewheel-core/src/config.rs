//! Picker configuration.

use crate::color::hex_to_rgb;
use crate::harmony::HarmonyMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default wheel diameter in pixels.
pub const DEFAULT_DIAMETER: u32 = 300;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings for a picker instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Wheel diameter in pixels.
    pub diameter: u32,
    /// Harmony mode active on startup.
    pub initial_mode: HarmonyMode,
    /// Middle swatch on startup, as `#rrggbb`.
    pub initial_color: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            diameter: DEFAULT_DIAMETER,
            initial_mode: HarmonyMode::default(),
            initial_color: "#ffffff".to_string(),
        }
    }
}

impl PickerConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.diameter == 0 {
            return Err(ConfigError::Invalid("diameter must be positive".to_string()));
        }
        hex_to_rgb(&self.initial_color).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PickerConfig::default();
        assert_eq!(config.diameter, 300);
        assert_eq!(config.initial_mode, HarmonyMode::Analogous);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = PickerConfig {
            diameter: 180,
            initial_mode: HarmonyMode::Triadic,
            initial_color: "#336699".to_string(),
        };
        let json = config.to_json().unwrap();
        assert!(json.contains("\"triadic\""));
        assert_eq!(PickerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PickerConfig::from_json(r#"{ "initial_mode": "triadic" }"#).unwrap();
        assert_eq!(config.diameter, DEFAULT_DIAMETER);
        assert_eq!(config.initial_mode, HarmonyMode::Triadic);
        assert_eq!(config.initial_color, "#ffffff");
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            PickerConfig::from_json(r#"{ "diameter": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            PickerConfig::from_json(r##"{ "initial_color": "#abc" }"##),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            PickerConfig::from_json(r#"{ "initial_mode": "complementary" }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(PickerConfig::from_json("not json"), Err(ConfigError::Parse(_))));
    }
}
