//! Startup configuration for pointpad
//!
//! Read once at launch through cosmic-config. Nothing is written back.

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, CosmicConfigEntry)]
#[version = 1]
pub struct PointPadConfig {
    /// Initial main window width in logical pixels
    pub window_width: f32,
    /// Initial main window height in logical pixels
    pub window_height: f32,
    /// Whether the switch starts in the "on" position
    pub switch_default: bool,
    /// Initial slider position (0-10)
    #[serde(default = "default_slider")]
    pub slider_default: i32,
}

fn default_slider() -> i32 {
    5
}

impl PointPadConfig {
    /// Configuration ID for cosmic-config
    pub const ID: &'static str = "com.example.PointPad";

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        match cosmic_config::Config::new(Self::ID, Self::VERSION) {
            Ok(config) => match Self::get_entry(&config) {
                Ok(entry) => entry,
                Err((errs, entry)) => {
                    log::warn!("Error loading config, using defaults: {:?}", errs);
                    entry
                }
            },
            Err(err) => {
                log::warn!("Could not create config handler: {:?}", err);
                Self::default()
            }
        }
    }

    /// Initial window size, never smaller than 1x1
    pub fn window_size(&self) -> (f32, f32) {
        (self.window_width.max(1.0), self.window_height.max(1.0))
    }
}

impl Default for PointPadConfig {
    fn default() -> Self {
        Self {
            window_width: 600.0,
            window_height: 250.0,
            // The switch starts switched on
            switch_default: true,
            slider_default: default_slider(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PointPadConfig::default();
        assert_eq!(config.window_size(), (600.0, 250.0));
        assert!(config.switch_default);
        assert_eq!(config.slider_default, 5);
    }

    #[test]
    fn test_window_size_never_zero() {
        let config = PointPadConfig {
            window_width: 0.0,
            window_height: -20.0,
            ..Default::default()
        };
        assert_eq!(config.window_size(), (1.0, 1.0));
    }

    #[test]
    fn test_missing_slider_uses_default() {
        let json = r#"{"window_width":800.0,"window_height":300.0,"switch_default":false}"#;
        let config: PointPadConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.slider_default, 5);
        assert!(!config.switch_default);
    }
}
