//! Title-bar layout model
//!
//! A pure model of the custom title bar: where the logo, title label, menu
//! slots, and window buttons sit for a given window width, which of those
//! regions are draggable, and which button a point lands on. The visual
//! widgets live in the embedding application; the controller only needs the
//! geometry and the button-visibility rules.

use casement_core::{Point, Rect};
use casement_platform::WindowState;
use smallvec::SmallVec;

use crate::config::{ButtonStyle, ChromeConfig};

/// Windows-style button footprint
const WIN_BUTTON_WIDTH: f32 = 45.0;
const WIN_BUTTON_HEIGHT: f32 = 30.0;

/// Darwin-style traffic-light footprint
const DARWIN_BUTTON_SIZE: f32 = 14.0;
const DARWIN_BUTTON_SPACING: f32 = 6.0;
const DARWIN_LEFT_PADDING: f32 = 8.0;

/// App-logo slot
const LOGO_SIZE: f32 = 32.0;
const LOGO_LEFT_PADDING: f32 = 8.0;

/// A window button in the title bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitlebarButton {
    Minimize,
    Maximize,
    Restore,
    Close,
}

/// Title-bar geometry and button state for one window.
///
/// Rectangles are in window-local coordinates and recomputed per query from
/// the current window width, so the model never holds stale layout.
#[derive(Clone, Debug)]
pub struct TitlebarLayout {
    height: f32,
    button_style: ButtonStyle,
    buttons_on_left: bool,
    logo_visible: bool,
    show_minimize: bool,
    show_maximize: bool,
    show_restore: bool,
    /// Widths of registered menu slots, laid out after the logo
    menu_slots: SmallVec<[f32; 4]>,
}

impl TitlebarLayout {
    pub fn new(config: &ChromeConfig) -> Self {
        Self {
            height: config.titlebar_height,
            button_style: config.button_style,
            buttons_on_left: config.buttons_on_left(),
            // The logo column is dropped when buttons claim the left edge
            logo_visible: !config.buttons_on_left(),
            show_minimize: true,
            show_maximize: true,
            show_restore: false,
            menu_slots: SmallVec::new(),
        }
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    /// Register a menu slot of the given width; menu slots are excluded from
    /// the drag area.
    pub fn add_menu_slot(&mut self, width: f32) {
        self.menu_slots.push(width.max(0.0));
    }

    pub fn show_minimize_button(&mut self, value: bool) {
        self.show_minimize = value;
    }

    pub fn show_maximize_button(&mut self, value: bool) {
        self.show_maximize = value;
    }

    pub fn show_restore_button(&mut self, value: bool) {
        self.show_restore = value;
    }

    pub fn is_maximize_visible(&self) -> bool {
        self.show_maximize
    }

    pub fn is_restore_visible(&self) -> bool {
        self.show_restore
    }

    /// Reflect the window state into button visibility.
    ///
    /// Windows style keeps maximize and restore mutually exclusive; Darwin
    /// style has a single toggle, so restore stays hidden.
    pub fn sync_buttons(&mut self, state: WindowState) {
        match self.button_style {
            ButtonStyle::Windows => {
                let maximized = state == WindowState::Maximized;
                self.show_restore = maximized;
                self.show_maximize = !maximized;
            }
            ButtonStyle::Darwin => {
                self.show_maximize = true;
                self.show_restore = false;
            }
        }
    }

    /// The full bar rectangle
    pub fn bar_rect(&self, window_width: f32) -> Rect {
        Rect::new(0.0, 0.0, window_width, self.height)
    }

    /// The logo slot, if visible
    pub fn logo_rect(&self) -> Option<Rect> {
        if !self.logo_visible {
            return None;
        }
        let y = (self.height - LOGO_SIZE).max(0.0) / 2.0;
        Some(Rect::new(LOGO_LEFT_PADDING, y, LOGO_SIZE, LOGO_SIZE))
    }

    fn menu_rects(&self) -> SmallVec<[Rect; 4]> {
        let mut x = match self.logo_rect() {
            Some(logo) => logo.right(),
            None => self.buttons_span_end(),
        };
        let mut rects = SmallVec::new();
        for width in &self.menu_slots {
            rects.push(Rect::new(x, 0.0, *width, self.height));
            x += width;
        }
        rects
    }

    /// Where the button group ends when it is anchored to the left edge
    fn buttons_span_end(&self) -> f32 {
        match self.button_style {
            ButtonStyle::Windows => self.visible_buttons().len() as f32 * WIN_BUTTON_WIDTH,
            ButtonStyle::Darwin => {
                let count = self.visible_buttons().len() as f32;
                DARWIN_LEFT_PADDING + count * (DARWIN_BUTTON_SIZE + DARWIN_BUTTON_SPACING)
            }
        }
    }

    fn visible_buttons(&self) -> SmallVec<[TitlebarButton; 4]> {
        let mut buttons = SmallVec::new();
        match self.button_style {
            ButtonStyle::Windows => {
                if self.show_minimize {
                    buttons.push(TitlebarButton::Minimize);
                }
                if self.show_maximize {
                    buttons.push(TitlebarButton::Maximize);
                }
                if self.show_restore {
                    buttons.push(TitlebarButton::Restore);
                }
                buttons.push(TitlebarButton::Close);
            }
            ButtonStyle::Darwin => {
                buttons.push(TitlebarButton::Close);
                if self.show_minimize {
                    buttons.push(TitlebarButton::Minimize);
                }
                // Single toggle: reported as Maximize, acts on current state
                buttons.push(TitlebarButton::Maximize);
            }
        }
        buttons
    }

    /// Rectangles of the currently visible buttons
    pub fn button_rects(&self, window_width: f32) -> SmallVec<[(TitlebarButton, Rect); 4]> {
        let buttons = self.visible_buttons();
        let mut rects = SmallVec::new();
        match self.button_style {
            ButtonStyle::Windows => {
                let y = (self.height - WIN_BUTTON_HEIGHT).max(0.0) / 2.0;
                let group_width = buttons.len() as f32 * WIN_BUTTON_WIDTH;
                let start = if self.buttons_on_left {
                    0.0
                } else {
                    (window_width - group_width).max(0.0)
                };
                for (i, button) in buttons.iter().enumerate() {
                    let x = start + i as f32 * WIN_BUTTON_WIDTH;
                    rects.push((
                        *button,
                        Rect::new(x, y, WIN_BUTTON_WIDTH, WIN_BUTTON_HEIGHT),
                    ));
                }
            }
            ButtonStyle::Darwin => {
                let y = (self.height - DARWIN_BUTTON_SIZE).max(0.0) / 2.0;
                for (i, button) in buttons.iter().enumerate() {
                    let x = DARWIN_LEFT_PADDING
                        + i as f32 * (DARWIN_BUTTON_SIZE + DARWIN_BUTTON_SPACING);
                    rects.push((
                        *button,
                        Rect::new(x, y, DARWIN_BUTTON_SIZE, DARWIN_BUTTON_SIZE),
                    ));
                }
            }
        }
        rects
    }

    /// Which visible button a window-local point lands on
    pub fn button_at(&self, point: Point, window_width: f32) -> Option<TitlebarButton> {
        self.button_rects(window_width)
            .iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(button, _)| *button)
    }

    /// Whether a window-local point is in the draggable area of the bar:
    /// inside the bar but not over the logo, a menu slot, or a button.
    pub fn is_drag_area(&self, point: Point, window_width: f32) -> bool {
        if !self.bar_rect(window_width).contains(point) {
            return false;
        }
        if let Some(logo) = self.logo_rect() {
            if logo.contains(point) {
                return false;
            }
        }
        if self.menu_rects().iter().any(|rect| rect.contains(point)) {
            return false;
        }
        self.button_at(point, window_width).is_none()
    }
}
