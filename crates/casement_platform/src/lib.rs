//! Casement Platform
//!
//! Platform abstraction for frameless window chrome. The chrome controller
//! never talks to a windowing system directly; it drives a window through the
//! [`WindowHost`] trait and sizes edge-snap targets through [`WorkspaceQuery`].
//!
//! Both traits are deliberately small: current geometry, current state, the
//! mutations the controller performs, and the cursor. Every method returns a
//! [`Result`] so a native handle disappearing mid-interaction surfaces as a
//! recoverable error rather than a crash.

pub mod error;
pub mod window;

pub use error::{PlatformError, Result};
pub use window::{Cursor, WindowConfig, WindowHost, WindowState, WorkspaceQuery};
