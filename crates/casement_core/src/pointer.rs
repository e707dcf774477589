//! Pointer input model
//!
//! Platform-agnostic pointer events consumed by the chrome controller.
//! Positions come in two coordinate spaces: `local` (window-local, origin at
//! the window's top-left) and `global` (screen coordinates). The controller
//! needs both: hit testing is local, dragging and edge-snapping are global.

use crate::geometry::Point;

/// A single pointer button
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left button on a right-handed mouse
    Primary,
    /// Right button
    Secondary,
    /// Wheel button
    Middle,
}

/// Bitset of currently held pointer buttons
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerButtons {
    bits: u8,
}

impl PointerButtons {
    pub const NONE: PointerButtons = PointerButtons { bits: 0 };
    pub const PRIMARY: u8 = 0b001;
    pub const SECONDARY: u8 = 0b010;
    pub const MIDDLE: u8 = 0b100;

    /// Create a new mask from individual button states
    pub const fn new(primary: bool, secondary: bool, middle: bool) -> Self {
        let mut bits = 0;
        if primary {
            bits |= Self::PRIMARY;
        }
        if secondary {
            bits |= Self::SECONDARY;
        }
        if middle {
            bits |= Self::MIDDLE;
        }
        Self { bits }
    }

    /// Create from raw bits
    pub const fn from_bits(bits: u8) -> Self {
        Self { bits }
    }

    /// Mask with only the primary button held
    pub const fn primary_only() -> Self {
        Self {
            bits: Self::PRIMARY,
        }
    }

    /// Check if the primary button is held
    pub const fn primary(&self) -> bool {
        self.bits & Self::PRIMARY != 0
    }

    /// Check if the secondary button is held
    pub const fn secondary(&self) -> bool {
        self.bits & Self::SECONDARY != 0
    }

    /// Check if the middle button is held
    pub const fn middle(&self) -> bool {
        self.bits & Self::MIDDLE != 0
    }

    /// Check if any button is held
    pub const fn any(&self) -> bool {
        self.bits != 0
    }

    /// Check whether a specific button is held
    pub const fn holds(&self, button: PointerButton) -> bool {
        match button {
            PointerButton::Primary => self.primary(),
            PointerButton::Secondary => self.secondary(),
            PointerButton::Middle => self.middle(),
        }
    }
}

/// Kind of pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    /// A button went down
    Press,
    /// A button went up
    Release,
    /// The pointer moved
    Move,
    /// A button was double-clicked
    DoubleClick,
    /// The pointer left the window
    Leave,
}

/// A pointer event addressed to a window
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Position in window-local coordinates
    pub local: Point,
    /// Position in screen coordinates
    pub global: Point,
    /// Button that triggered a press/release/double-click; `None` for moves
    pub button: Option<PointerButton>,
    /// Buttons held at the time of the event
    pub buttons: PointerButtons,
}

impl PointerEvent {
    /// A primary-button press at the given position
    pub fn press(local: Point, global: Point) -> Self {
        Self {
            kind: PointerEventKind::Press,
            local,
            global,
            button: Some(PointerButton::Primary),
            buttons: PointerButtons::primary_only(),
        }
    }

    /// A primary-button release at the given position
    pub fn release(local: Point, global: Point) -> Self {
        Self {
            kind: PointerEventKind::Release,
            local,
            global,
            button: Some(PointerButton::Primary),
            buttons: PointerButtons::NONE,
        }
    }

    /// A move with the primary button held
    pub fn drag_move(local: Point, global: Point) -> Self {
        Self {
            kind: PointerEventKind::Move,
            local,
            global,
            button: None,
            buttons: PointerButtons::primary_only(),
        }
    }

    /// A move with no buttons held
    pub fn hover_move(local: Point, global: Point) -> Self {
        Self {
            kind: PointerEventKind::Move,
            local,
            global,
            button: None,
            buttons: PointerButtons::NONE,
        }
    }

    /// A primary-button double-click
    pub fn double_click(local: Point, global: Point) -> Self {
        Self {
            kind: PointerEventKind::DoubleClick,
            local,
            global,
            button: Some(PointerButton::Primary),
            buttons: PointerButtons::primary_only(),
        }
    }

    /// A leave event with the given held-button mask
    pub fn leave(buttons: PointerButtons) -> Self {
        Self {
            kind: PointerEventKind::Leave,
            local: Point::ZERO,
            global: Point::ZERO,
            button: None,
            buttons,
        }
    }
}
