//! Chrome configuration
//!
//! Every controller instance carries its own [`ChromeConfig`]; there is no
//! process-wide style state. Values that would produce degenerate hit
//! rectangles are rejected at construction time rather than silently clamped.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid chrome configuration
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("titlebar height must be positive, got {0}")]
    TitlebarHeight(f32),

    #[error("grip size must be positive, got {0}")]
    GripSize(f32),

    #[error("side grip margin must be non-negative, got {0}")]
    SideGripMargin(f32),
}

/// Title-bar window-button layout style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    /// Separate minimize/maximize/restore/close buttons on the right
    #[default]
    Windows,
    /// Traffic-light buttons; maximize and restore merge into one toggle
    Darwin,
}

/// Per-window chrome configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Pixel height of the draggable header region
    pub titlebar_height: f32,
    /// Pixel thickness of the resize-detection border
    pub grip_size: f32,
    /// Do-not-detect margin near the corner, keeps edge grips unambiguous
    pub side_grip_margin: f32,
    /// Whether the resize grips are active
    pub resizing_enabled: bool,
    /// Double-click on the title bar toggles maximize/restore
    pub maximize_on_double_click: bool,
    /// Evaluate edge snapping when a drag is released at a screen edge
    pub edge_snapping: bool,
    /// Window-button layout style
    pub button_style: ButtonStyle,
    /// Place the buttons at the left edge (Windows style only; Darwin
    /// buttons are always on the left)
    pub align_buttons_left: bool,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            titlebar_height: 45.0,
            grip_size: 4.0,
            side_grip_margin: 20.0,
            resizing_enabled: true,
            maximize_on_double_click: true,
            edge_snapping: true,
            button_style: ButtonStyle::Windows,
            align_buttons_left: false,
        }
    }
}

impl ChromeConfig {
    /// Check construction-time preconditions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.titlebar_height <= 0.0 {
            return Err(ConfigError::TitlebarHeight(self.titlebar_height));
        }
        if self.grip_size <= 0.0 {
            return Err(ConfigError::GripSize(self.grip_size));
        }
        if self.side_grip_margin < 0.0 {
            return Err(ConfigError::SideGripMargin(self.side_grip_margin));
        }
        Ok(())
    }

    /// Whether buttons end up on the left edge for this style
    pub fn buttons_on_left(&self) -> bool {
        matches!(self.button_style, ButtonStyle::Darwin) || self.align_buttons_left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ChromeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_grip() {
        let config = ChromeConfig {
            grip_size: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::GripSize(0.0)));
    }

    #[test]
    fn test_rejects_negative_titlebar() {
        let config = ChromeConfig {
            titlebar_height: -1.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TitlebarHeight(-1.0)));
    }

    #[test]
    fn test_rejects_negative_margin() {
        let config = ChromeConfig {
            side_grip_margin: -0.5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::SideGripMargin(-0.5)));
    }

    #[test]
    fn test_darwin_forces_left_buttons() {
        let config = ChromeConfig {
            button_style: ButtonStyle::Darwin,
            align_buttons_left: false,
            ..Default::default()
        };
        assert!(config.buttons_on_left());
    }

    #[test]
    fn test_toml_defaults_fill_missing_keys() {
        let config: ChromeConfig = toml::from_str(
            r#"
            titlebar_height = 30.0
            button_style = "darwin"
            "#,
        )
        .unwrap();
        assert_eq!(config.titlebar_height, 30.0);
        assert_eq!(config.button_style, ButtonStyle::Darwin);
        assert_eq!(config.grip_size, 4.0);
        assert!(config.edge_snapping);
    }

    #[test]
    fn test_json_round_trip() {
        let config = ChromeConfig {
            grip_size: 6.0,
            align_buttons_left: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ChromeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.grip_size, 6.0);
        assert!(back.align_buttons_left);
    }
}
