//! Engine configuration
//!
//! Every field has a default, so an empty JSON object (or
//! [`EngineConfig::default`]) reproduces the standard Tailwind output.

use design_tokens::Rgba;
use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, Result};

fn default_frame_height() -> f64 {
    100.0
}

fn default_grid_height() -> f64 {
    800.0
}

fn default_column_count() -> u32 {
    12
}

fn default_gutter() -> f64 {
    32.0
}

fn default_section_size() -> f64 {
    64.0
}

fn default_column_color() -> Rgba {
    Rgba::new(0.2, 0.2, 0.9, 0.1)
}

fn default_margin_color() -> Rgba {
    Rgba::new(0.9, 0.2, 0.2, 0.1)
}

fn default_fill() -> Rgba {
    Rgba::new(1.0, 1.0, 1.0, 1.0)
}

fn default_success_message() -> String {
    "Generation completed!".to_string()
}

/// Container frame settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameConfig {
    /// Frame height when no grid is requested
    #[serde(default = "default_frame_height")]
    pub default_height: f64,

    /// Frame height when a grid is requested
    #[serde(default = "default_grid_height")]
    pub grid_height: f64,

    /// Number of grid columns
    #[serde(default = "default_column_count")]
    pub column_count: u32,

    /// Gutter between columns
    #[serde(default = "default_gutter")]
    pub gutter: f64,

    /// Column width and margin-grid cell size
    #[serde(default = "default_section_size")]
    pub section_size: f64,

    /// Column grid tint
    #[serde(default = "default_column_color")]
    pub column_color: Rgba,

    /// Margin grid tint
    #[serde(default = "default_margin_color")]
    pub margin_color: Rgba,

    /// Frame fill when a grid is requested
    #[serde(default = "default_fill")]
    pub fill: Rgba,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            default_height: default_frame_height(),
            grid_height: default_grid_height(),
            column_count: default_column_count(),
            gutter: default_gutter(),
            section_size: default_section_size(),
            column_color: default_column_color(),
            margin_color: default_margin_color(),
            fill: default_fill(),
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Container frame settings
    #[serde(default)]
    pub frame: FrameConfig,

    /// Notification shown after a successful request
    #[serde(default = "default_success_message")]
    pub success_message: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            frame: FrameConfig::default(),
            success_message: default_success_message(),
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GenerateError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot produce a frame
    pub fn validate(&self) -> Result<()> {
        let frame = &self.frame;
        if frame.default_height <= 0.0 || frame.grid_height <= 0.0 {
            return Err(GenerateError::Config(
                "frame heights must be positive".to_string(),
            ));
        }
        if frame.column_count == 0 {
            return Err(GenerateError::Config(
                "column count must be at least 1".to_string(),
            ));
        }
        if frame.gutter < 0.0 || frame.section_size <= 0.0 {
            return Err(GenerateError::Config(
                "gutter must be non-negative and section size positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.frame.grid_height, 800.0);
        assert_eq!(config.frame.column_count, 12);
        assert_eq!(config.frame.gutter, 32.0);
        assert_eq!(config.success_message, "Generation completed!");
    }

    #[test]
    fn test_partial_override() {
        let config = EngineConfig::from_json(
            r#"{ "frame": { "columnCount": 8, "fill": { "r": 0, "g": 0, "b": 0, "a": 1 } } }"#,
        )
        .unwrap();
        assert_eq!(config.frame.column_count, 8);
        assert_eq!(config.frame.gutter, 32.0);
        assert_eq!(config.frame.fill, Rgba::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = EngineConfig::from_json(r#"{ "frame": { "columnCount": 0 } }"#).unwrap_err();
        assert!(matches!(err, GenerateError::Config(_)));

        let err = EngineConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, GenerateError::Config(_)));
    }

    #[test]
    fn test_config_serialization() {
        let json = serde_json::to_value(EngineConfig::default()).unwrap();
        assert_eq!(json["frame"]["gridHeight"], 800.0);
        assert_eq!(json["frame"]["columnColor"]["b"], 0.9);
    }
}
