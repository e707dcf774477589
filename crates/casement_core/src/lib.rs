//! Casement Core
//!
//! Foundational primitives shared by the Casement window-chrome crates:
//!
//! - **Geometry**: `Point`, `Size`, `Rect` in f32 logical pixels
//! - **Pointer input**: platform-agnostic pointer events and button masks
//!
//! # Example
//!
//! ```rust
//! use casement_core::{Point, Rect};
//!
//! let grip = Rect::new(296.0, 196.0, 4.0, 4.0);
//! assert!(grip.contains(Point::new(298.0, 198.0)));
//! ```

pub mod geometry;
pub mod pointer;

pub use geometry::{Point, Rect, Size};
pub use pointer::{PointerButton, PointerButtons, PointerEvent, PointerEventKind};
