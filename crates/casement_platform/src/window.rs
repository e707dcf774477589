//! Window host contract
//!
//! A frameless window that wants Casement chrome implements [`WindowHost`]
//! and forwards its pointer events to the controller. The controller mutates
//! geometry and requests state changes exclusively through this trait, so the
//! contract is resolved at compile time instead of being discovered through
//! runtime reflection.

use casement_core::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Window manager state of a window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowState {
    #[default]
    Normal,
    Maximized,
    Minimized,
    FullScreen,
}

/// Cursor appearance requested by the chrome controller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    /// Vertical resize (bottom grip)
    ResizeNS,
    /// Horizontal resize (right grip)
    ResizeEW,
    /// Diagonal resize, north-east/south-west
    ResizeNESW,
    /// Diagonal resize, north-west/south-east (bottom-right corner grip)
    ResizeNWSE,
}

/// Initial window configuration for backends that create windows
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub resizable: bool,
    /// Frameless windows set this to false and draw their own chrome
    pub decorations: bool,
    pub transparent: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            width: 800.0,
            height: 600.0,
            resizable: true,
            decorations: false,
            transparent: false,
        }
    }
}

/// Collaborator contract the owning window provides to the chrome controller.
///
/// Position and size are in logical pixels; `position` is the screen-space
/// origin of the window. Implementations are expected to be cheap - the
/// controller calls these on every pointer event.
pub trait WindowHost {
    /// Screen-space origin of the window
    fn position(&self) -> Result<Point>;

    /// Current logical size of the window
    fn size(&self) -> Result<Size>;

    /// Move the window to a screen-space origin
    fn set_position(&mut self, position: Point) -> Result<()>;

    /// Resize the window
    fn set_size(&mut self, size: Size) -> Result<()>;

    /// Current window manager state
    fn state(&self) -> Result<WindowState>;

    /// Request a window manager state change
    fn set_state(&mut self, state: WindowState) -> Result<()>;

    /// Set the cursor shown over the window
    fn set_cursor(&mut self, cursor: Cursor) -> Result<()>;

    /// Whether the window may be resized at all (backend-level capability,
    /// independent of the chrome config's `resizing_enabled`)
    fn is_resizable(&self) -> bool {
        true
    }
}

/// Screen/workspace query used for edge-snap target sizing.
///
/// The returned rectangle is the available work area in screen coordinates,
/// ideally excluding taskbars and docks.
pub trait WorkspaceQuery {
    fn available_rect(&self) -> Result<Rect>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_state_default() {
        assert_eq!(WindowState::default(), WindowState::Normal);
    }

    #[test]
    fn test_window_config_default_is_frameless() {
        let config = WindowConfig::default();
        assert!(!config.decorations);
        assert!(config.resizable);
    }

    #[test]
    fn test_window_config_toml_defaults() {
        let config: WindowConfig = toml::from_str("title = \"demo\"").unwrap();
        assert_eq!(config.title, "demo");
        assert_eq!(config.width, 800.0);
        assert!(!config.decorations);
    }
}
