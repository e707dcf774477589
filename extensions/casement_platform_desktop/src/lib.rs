//! Desktop platform backend for Casement using winit
//!
//! Wraps a winit window behind the `casement_platform` traits so a
//! `FramelessController` can drive it, and translates winit input events
//! into `casement_core` pointer events.

pub mod input;
pub mod window;

pub use input::PointerTracker;
pub use window::DesktopWindow;
