//! Casement Chrome
//!
//! Application-drawn window chrome for frameless windows:
//!
//! - **Hit-region classification**: corner, right-edge, and bottom-edge
//!   resize grips with a do-not-detect margin near the corner
//! - **Interaction state machine**: dragging, resizing, edge snapping,
//!   double-click maximize, with exactly one interaction in flight
//! - **Title-bar model**: logo/label/menu/button geometry, drag-area
//!   exclusion, maximize/restore visibility rules
//! - **Commands and events**: maximize/restore/minimize/full-screen
//!   commands, close/minimize/maximize/restore request events
//!
//! The controller drives a window through the `casement_platform` traits and
//! never holds a window reference itself.
//!
//! # Example
//!
//! ```rust,ignore
//! use casement_chrome::{ChromeConfig, ChromeEvent, FramelessController};
//!
//! let mut chrome = FramelessController::new(ChromeConfig::default())?;
//! chrome.on(ChromeEvent::CloseRequested, |_| request_shutdown());
//!
//! // In the window's pointer-event handler:
//! let consumed = chrome.handle_pointer(&mut window, &screen, &event);
//! if !consumed {
//!     forward_to_content(&event);
//! }
//! ```

pub mod config;
pub mod controller;
pub mod events;
pub mod grips;
pub mod registry;
pub mod titlebar;

pub use config::{ButtonStyle, ChromeConfig, ConfigError};
pub use controller::{FramelessController, InteractionMode};
pub use events::{ChromeEvent, ChromeEvents};
pub use grips::{GripRects, GripRegion};
pub use registry::{ChromeRegistry, ControllerId};
pub use titlebar::{TitlebarButton, TitlebarLayout};
