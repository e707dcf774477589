//! Pointer event translation
//!
//! winit reports cursor positions and button changes as separate window
//! events; the chrome controller wants self-contained pointer events with a
//! held-button mask and both coordinate spaces. [`PointerTracker`]
//! accumulates the per-window input state and produces one
//! [`PointerEvent`] per winit event, synthesizing double-clicks from press
//! timing the way native title bars behave.

use std::time::{Duration, Instant};

use casement_core::{Point, PointerButton, PointerButtons, PointerEvent, PointerEventKind};
use winit::event::{ElementState, MouseButton, WindowEvent};

use crate::window::DesktopWindow;
use casement_platform::WindowHost;

/// Two primary presses within this window and radius form a double-click
const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);
const DOUBLE_CLICK_RADIUS: f32 = 4.0;

/// Map a winit mouse button to a pointer button; extra buttons are ignored
pub fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        MouseButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

/// Accumulates pointer state for one window
pub struct PointerTracker {
    local: Point,
    primary: bool,
    secondary: bool,
    middle: bool,
    last_primary_press: Option<(Instant, Point)>,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            local: Point::ZERO,
            primary: false,
            secondary: false,
            middle: false,
            last_primary_press: None,
        }
    }

    fn buttons(&self) -> PointerButtons {
        PointerButtons::new(self.primary, self.secondary, self.middle)
    }

    /// Cursor moved to a window-local position
    pub fn on_cursor_moved(&mut self, local: Point, window_origin: Point) -> PointerEvent {
        self.local = local;
        PointerEvent {
            kind: PointerEventKind::Move,
            local,
            global: local + window_origin,
            button: None,
            buttons: self.buttons(),
        }
    }

    /// A button changed state at the last known cursor position
    pub fn on_mouse_input(
        &mut self,
        state: ElementState,
        button: PointerButton,
        window_origin: Point,
    ) -> PointerEvent {
        let pressed = state == ElementState::Pressed;
        match button {
            PointerButton::Primary => self.primary = pressed,
            PointerButton::Secondary => self.secondary = pressed,
            PointerButton::Middle => self.middle = pressed,
        }

        let kind = if pressed {
            if button == PointerButton::Primary && self.is_double_click() {
                self.last_primary_press = None;
                PointerEventKind::DoubleClick
            } else {
                if button == PointerButton::Primary {
                    self.last_primary_press = Some((Instant::now(), self.local));
                }
                PointerEventKind::Press
            }
        } else {
            PointerEventKind::Release
        };

        PointerEvent {
            kind,
            local: self.local,
            global: self.local + window_origin,
            button: Some(button),
            buttons: self.buttons(),
        }
    }

    fn is_double_click(&self) -> bool {
        let Some((at, position)) = self.last_primary_press else {
            return false;
        };
        at.elapsed() <= DOUBLE_CLICK_WINDOW
            && (self.local.x - position.x).abs() <= DOUBLE_CLICK_RADIUS
            && (self.local.y - position.y).abs() <= DOUBLE_CLICK_RADIUS
    }

    /// The cursor left the window
    pub fn on_cursor_left(&mut self) -> PointerEvent {
        PointerEvent::leave(self.buttons())
    }

    /// Translate one winit window event, if it is pointer-shaped.
    ///
    /// Positions are converted to logical pixels using the window's scale
    /// factor; the global position is derived from the window's outer origin.
    pub fn translate(
        &mut self,
        event: &WindowEvent,
        window: &DesktopWindow,
    ) -> Option<PointerEvent> {
        let origin = window.position().unwrap_or(Point::ZERO);
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let scale = window.winit_window().scale_factor();
                let local = Point::new(
                    (position.x / scale) as f32,
                    (position.y / scale) as f32,
                );
                Some(self.on_cursor_moved(local, origin))
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = pointer_button(*button)?;
                Some(self.on_mouse_input(*state, button, origin))
            }
            WindowEvent::CursorLeft { .. } => Some(self.on_cursor_left()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_carries_held_buttons() {
        let mut tracker = PointerTracker::new();
        let origin = Point::new(100.0, 100.0);

        let press = tracker.on_mouse_input(ElementState::Pressed, PointerButton::Primary, origin);
        assert_eq!(press.kind, PointerEventKind::Press);
        assert!(press.buttons.primary());

        let moved = tracker.on_cursor_moved(Point::new(50.0, 10.0), origin);
        assert_eq!(moved.kind, PointerEventKind::Move);
        assert!(moved.buttons.primary());
        assert_eq!(moved.global, Point::new(150.0, 110.0));

        let release =
            tracker.on_mouse_input(ElementState::Released, PointerButton::Primary, origin);
        assert_eq!(release.kind, PointerEventKind::Release);
        assert!(!release.buttons.primary());
    }

    #[test]
    fn test_rapid_presses_form_double_click() {
        let mut tracker = PointerTracker::new();
        let origin = Point::ZERO;
        tracker.on_cursor_moved(Point::new(20.0, 10.0), origin);

        let first = tracker.on_mouse_input(ElementState::Pressed, PointerButton::Primary, origin);
        assert_eq!(first.kind, PointerEventKind::Press);
        tracker.on_mouse_input(ElementState::Released, PointerButton::Primary, origin);

        let second = tracker.on_mouse_input(ElementState::Pressed, PointerButton::Primary, origin);
        assert_eq!(second.kind, PointerEventKind::DoubleClick);

        // The pair is consumed; a third quick press is a plain press again
        tracker.on_mouse_input(ElementState::Released, PointerButton::Primary, origin);
        let third = tracker.on_mouse_input(ElementState::Pressed, PointerButton::Primary, origin);
        assert_eq!(third.kind, PointerEventKind::Press);
    }

    #[test]
    fn test_distant_presses_do_not_double_click() {
        let mut tracker = PointerTracker::new();
        let origin = Point::ZERO;

        tracker.on_cursor_moved(Point::new(20.0, 10.0), origin);
        tracker.on_mouse_input(ElementState::Pressed, PointerButton::Primary, origin);
        tracker.on_mouse_input(ElementState::Released, PointerButton::Primary, origin);

        tracker.on_cursor_moved(Point::new(80.0, 10.0), origin);
        let second = tracker.on_mouse_input(ElementState::Pressed, PointerButton::Primary, origin);
        assert_eq!(second.kind, PointerEventKind::Press);
    }

    #[test]
    fn test_leave_reports_held_buttons() {
        let mut tracker = PointerTracker::new();
        tracker.on_mouse_input(ElementState::Pressed, PointerButton::Primary, Point::ZERO);
        let leave = tracker.on_cursor_left();
        assert_eq!(leave.kind, PointerEventKind::Leave);
        assert!(leave.buttons.primary());
    }

    #[test]
    fn test_extra_buttons_ignored() {
        assert_eq!(pointer_button(MouseButton::Back), None);
        assert_eq!(
            pointer_button(MouseButton::Left),
            Some(PointerButton::Primary)
        );
    }
}
