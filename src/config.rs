use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, VisualizerError};

/// Settings of the desktop app. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How often the parameter controls are checked for changes.
    pub redraw_interval_ms: u64,
    /// Put the formula on the clipboard after every redraw.
    pub copy_formula_to_clipboard: bool,
    pub drag_speed: f32,
    pub window_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            redraw_interval_ms: 200,
            copy_formula_to_clipboard: true,
            drag_speed: 0.01,
            window_title: "Tanh Network Curve".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.redraw_interval_ms == 0 {
            return Err(VisualizerError::InvalidConfig(
                "redraw_interval_ms must be positive".to_string(),
            ));
        }
        if !self.drag_speed.is_finite() || self.drag_speed <= 0.0 {
            return Err(VisualizerError::InvalidConfig(format!(
                "drag_speed must be a positive number, got {}",
                self.drag_speed
            )));
        }
        Ok(())
    }

    pub fn redraw_interval(&self) -> Duration {
        Duration::from_millis(self.redraw_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = AppConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.redraw_interval(), Duration::from_millis(200));
    }

    #[test]
    fn partial_override() {
        let config =
            AppConfig::from_json_str(r#"{"redraw_interval_ms": 50, "copy_formula_to_clipboard": false}"#)
                .unwrap();
        assert_eq!(config.redraw_interval_ms, 50);
        assert!(!config.copy_formula_to_clipboard);
        assert_eq!(config.drag_speed, 0.01);
    }

    #[test]
    fn zero_interval_rejected() {
        let err = AppConfig::from_json_str(r#"{"redraw_interval_ms": 0}"#).unwrap_err();
        assert!(matches!(err, VisualizerError::InvalidConfig(_)));
    }

    #[test]
    fn negative_drag_speed_rejected() {
        let err = AppConfig::from_json_str(r#"{"drag_speed": -1.0}"#).unwrap_err();
        assert!(err.to_string().contains("drag_speed"));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = AppConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, VisualizerError::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = AppConfig::load(Path::new("/nonexistent/nn-curve.json")).unwrap_err();
        assert!(matches!(err, VisualizerError::Io(_)));
    }
}
