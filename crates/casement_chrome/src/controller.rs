//! Frameless window interaction controller
//!
//! Per-window state machine that turns pointer events into window moves,
//! resizes, edge snaps, and title-bar button gestures. The controller owns
//! no window reference; the owning window passes its [`WindowHost`] into
//! every call, so the collaborator contract is enforced by the type system
//! and there is no registration to leak.
//!
//! All host calls are fallible. A platform failure mid-gesture is logged and
//! the event becomes a no-op; it never unwinds into the event loop.

use casement_core::{Point, PointerButton, PointerEvent, PointerEventKind, Size};
use casement_platform::{Cursor, Result, WindowHost, WindowState, WorkspaceQuery};

use crate::config::{ButtonStyle, ChromeConfig, ConfigError};
use crate::events::{ChromeEvent, ChromeEvents};
use crate::grips::{GripRects, GripRegion};
use crate::titlebar::{TitlebarButton, TitlebarLayout};

/// The one interaction a window can be in the middle of
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging,
    ResizingCorner,
    ResizingHorizontal,
    ResizingVertical,
}

impl InteractionMode {
    pub fn is_resizing(&self) -> bool {
        matches!(
            self,
            InteractionMode::ResizingCorner
                | InteractionMode::ResizingHorizontal
                | InteractionMode::ResizingVertical
        )
    }
}

/// Interaction controller for one frameless window.
///
/// Lives exactly as long as the window it decorates. Construction validates
/// the configuration; a degenerate grip or title-bar height is an error, not
/// a clamp.
pub struct FramelessController {
    config: ChromeConfig,
    titlebar: TitlebarLayout,
    events: ChromeEvents,
    mode: InteractionMode,
    /// Window-local cursor offset captured at drag start
    drag_offset: Point,
    /// Button under the pointer at press time, for click-on-release
    pressed_button: Option<TitlebarButton>,
}

impl FramelessController {
    pub fn new(config: ChromeConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        let titlebar = TitlebarLayout::new(&config);
        Ok(Self {
            config,
            titlebar,
            events: ChromeEvents::new(),
            mode: InteractionMode::Idle,
            drag_offset: Point::ZERO,
            pressed_button: None,
        })
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    pub fn titlebar(&self) -> &TitlebarLayout {
        &self.titlebar
    }

    pub fn titlebar_mut(&mut self) -> &mut TitlebarLayout {
        &mut self.titlebar
    }

    /// Register a handler for a chrome event
    pub fn on<F>(&mut self, event: ChromeEvent, handler: F)
    where
        F: Fn(ChromeEvent) + Send + Sync + 'static,
    {
        self.events.on(event, handler);
    }

    pub fn set_titlebar_height(&mut self, height: f32) -> std::result::Result<(), ConfigError> {
        if height <= 0.0 {
            return Err(ConfigError::TitlebarHeight(height));
        }
        self.config.titlebar_height = height;
        self.titlebar.set_height(height);
        Ok(())
    }

    pub fn set_resizing_enabled(&mut self, enabled: bool) {
        self.config.resizing_enabled = enabled;
    }

    pub fn is_resizing_enabled(&self) -> bool {
        self.config.resizing_enabled
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Maximize the window. A no-op if it is already maximized.
    pub fn maximize(&mut self, host: &mut dyn WindowHost) {
        self.run_command(host, WindowState::Maximized, ChromeEvent::MaximizeRequested);
    }

    /// Restore the window to its normal state. A no-op if already normal.
    pub fn restore(&mut self, host: &mut dyn WindowHost) {
        self.run_command(host, WindowState::Normal, ChromeEvent::RestoreRequested);
    }

    /// Minimize the window. A no-op if it is already minimized.
    pub fn minimize(&mut self, host: &mut dyn WindowHost) {
        self.run_command(host, WindowState::Minimized, ChromeEvent::MinimizeRequested);
    }

    /// Enter full screen. A no-op if already full screen.
    pub fn show_fullscreen(&mut self, host: &mut dyn WindowHost) {
        self.run_command(
            host,
            WindowState::FullScreen,
            ChromeEvent::FullScreenRequested,
        );
    }

    fn run_command(&mut self, host: &mut dyn WindowHost, target: WindowState, event: ChromeEvent) {
        if let Err(error) = self.command(host, target, event) {
            tracing::warn!(%error, ?target, "window command dropped after platform failure");
        }
    }

    fn command(
        &mut self,
        host: &mut dyn WindowHost,
        target: WindowState,
        event: ChromeEvent,
    ) -> Result<()> {
        if host.state()? == target {
            return Ok(());
        }
        host.set_state(target)?;
        self.events.emit(event);
        self.sync_buttons(host)
    }

    /// Re-read the host state into title-bar button visibility
    fn sync_buttons(&mut self, host: &mut dyn WindowHost) -> Result<()> {
        let state = host.state()?;
        self.titlebar.sync_buttons(state);
        Ok(())
    }

    // =========================================================================
    // Pointer events
    // =========================================================================

    /// Feed one pointer event through the state machine.
    ///
    /// Returns `true` when the chrome consumed the event (a drag, resize, or
    /// button gesture); `false` means the event is the content's to handle.
    /// Platform failures are logged and make the event a no-op.
    pub fn handle_pointer(
        &mut self,
        host: &mut dyn WindowHost,
        workspace: &dyn WorkspaceQuery,
        event: &PointerEvent,
    ) -> bool {
        match self.process(host, workspace, event) {
            Ok(consumed) => consumed,
            Err(error) => {
                tracing::warn!(kind = ?event.kind, %error, "pointer event dropped after platform failure");
                false
            }
        }
    }

    fn process(
        &mut self,
        host: &mut dyn WindowHost,
        workspace: &dyn WorkspaceQuery,
        event: &PointerEvent,
    ) -> Result<bool> {
        // Leave needs no host queries and must work even if the platform is
        // already on fire: it is the defensive reset for the release/leave race.
        if event.kind == PointerEventKind::Leave {
            if self.mode == InteractionMode::Dragging && !event.buttons.primary() {
                tracing::debug!("leave without held button, resetting drag");
                self.mode = InteractionMode::Idle;
            }
            return Ok(false);
        }

        let size = host.size()?;

        match event.kind {
            PointerEventKind::Press if event.button == Some(PointerButton::Primary) => {
                self.on_press(host, event, size)
            }
            PointerEventKind::DoubleClick if event.button == Some(PointerButton::Primary) => {
                self.on_double_click(host, event, size)
            }
            PointerEventKind::Move => self.on_move(host, event, size),
            PointerEventKind::Release if event.button == Some(PointerButton::Primary) => {
                self.on_release(host, workspace, event, size)
            }
            _ => Ok(false),
        }
    }

    fn on_press(
        &mut self,
        host: &mut dyn WindowHost,
        event: &PointerEvent,
        size: Size,
    ) -> Result<bool> {
        // Title-bar buttons claim the press before anything else
        if let Some(button) = self.titlebar.button_at(event.local, size.width) {
            self.pressed_button = Some(button);
            return Ok(true);
        }

        // Title-bar drag area
        if self.mode == InteractionMode::Idle && self.titlebar.is_drag_area(event.local, size.width)
        {
            self.mode = InteractionMode::Dragging;
            self.drag_offset = event.local;
            tracing::debug!(offset = ?self.drag_offset, "drag started");
            return Ok(true);
        }

        // Resize grips, gated on capability and a normal window state
        if self.mode == InteractionMode::Idle
            && self.config.resizing_enabled
            && host.is_resizable()
            && host.state()? == WindowState::Normal
        {
            let grips = GripRects::compute(size, &self.config);
            if let Some(region) = grips.region_at(event.local) {
                self.mode = match region {
                    GripRegion::Corner => InteractionMode::ResizingCorner,
                    GripRegion::Right => InteractionMode::ResizingHorizontal,
                    GripRegion::Bottom => InteractionMode::ResizingVertical,
                };
                host.set_cursor(region.cursor())?;
                tracing::debug!(mode = ?self.mode, "resize started");
                return Ok(true);
            }
        }

        Ok(false)
    }

    fn on_double_click(
        &mut self,
        host: &mut dyn WindowHost,
        event: &PointerEvent,
        size: Size,
    ) -> Result<bool> {
        if !self.config.maximize_on_double_click
            || !self.titlebar.is_drag_area(event.local, size.width)
        {
            return Ok(false);
        }
        // Short-circuits whatever gesture was in flight
        self.mode = InteractionMode::Idle;
        match host.state()? {
            WindowState::Maximized => {
                self.command(host, WindowState::Normal, ChromeEvent::RestoreRequested)?
            }
            WindowState::Normal => self.command(
                host,
                WindowState::Maximized,
                ChromeEvent::MaximizeRequested,
            )?,
            _ => {}
        }
        Ok(true)
    }

    fn on_move(
        &mut self,
        host: &mut dyn WindowHost,
        event: &PointerEvent,
        size: Size,
    ) -> Result<bool> {
        match self.mode {
            InteractionMode::Dragging if event.buttons.primary() => {
                if host.state()? == WindowState::Maximized {
                    // Un-maximize under the cursor: restore, then rescale the
                    // horizontal offset so the window doesn't jump
                    let maximized_width = size.width;
                    self.command(host, WindowState::Normal, ChromeEvent::RestoreRequested)?;
                    let restored = host.size()?;
                    if maximized_width > 0.0 {
                        self.drag_offset.x *= restored.width / maximized_width;
                    }
                }
                host.set_position(event.global - self.drag_offset)?;
                Ok(true)
            }
            InteractionMode::ResizingCorner if event.buttons.primary() => {
                host.set_cursor(Cursor::ResizeNWSE)?;
                host.set_size(Size::new(event.local.x.max(1.0), event.local.y.max(1.0)))?;
                Ok(true)
            }
            InteractionMode::ResizingHorizontal if event.buttons.primary() => {
                host.set_cursor(Cursor::ResizeEW)?;
                host.set_size(Size::new(event.local.x.max(1.0), size.height))?;
                Ok(true)
            }
            InteractionMode::ResizingVertical if event.buttons.primary() => {
                host.set_cursor(Cursor::ResizeNS)?;
                host.set_size(Size::new(size.width, event.local.y.max(1.0)))?;
                Ok(true)
            }
            InteractionMode::Idle => {
                self.hover_feedback(host, event, size)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Resize-glyph feedback while hovering a grip with nothing in flight
    fn hover_feedback(
        &self,
        host: &mut dyn WindowHost,
        event: &PointerEvent,
        size: Size,
    ) -> Result<()> {
        if !self.config.resizing_enabled
            || !host.is_resizable()
            || host.state()? != WindowState::Normal
        {
            return Ok(());
        }
        let grips = GripRects::compute(size, &self.config);
        match grips.region_at(event.local) {
            Some(region) => host.set_cursor(region.cursor()),
            None => host.set_cursor(Cursor::Default),
        }
    }

    fn on_release(
        &mut self,
        host: &mut dyn WindowHost,
        workspace: &dyn WorkspaceQuery,
        event: &PointerEvent,
        size: Size,
    ) -> Result<bool> {
        // Click = press and release over the same button
        if let Some(pressed) = self.pressed_button.take() {
            if self.titlebar.button_at(event.local, size.width) == Some(pressed) {
                self.on_button_click(host, pressed)?;
                return Ok(true);
            }
        }

        match self.mode {
            InteractionMode::Dragging => {
                self.mode = InteractionMode::Idle;
                if self.config.edge_snapping {
                    self.snap_on_release(host, workspace, event)?;
                }
                Ok(true)
            }
            mode if mode.is_resizing() => {
                self.mode = InteractionMode::Idle;
                host.set_cursor(Cursor::Default)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Edge-snap evaluation at the end of a drag
    fn snap_on_release(
        &mut self,
        host: &mut dyn WindowHost,
        workspace: &dyn WorkspaceQuery,
        event: &PointerEvent,
    ) -> Result<()> {
        let area = workspace.available_rect()?;
        let half = Size::new(area.width / 2.0, area.height);

        if event.global.y <= 0.0 {
            tracing::debug!("snap: top edge, maximizing");
            self.command(
                host,
                WindowState::Maximized,
                ChromeEvent::MaximizeRequested,
            )?;
        } else if event.global.x <= 0.0 {
            tracing::debug!("snap: left half");
            self.snap_to(host, Point::ZERO, half)?;
        } else if event.global.x + 1.0 >= area.width {
            tracing::debug!("snap: right half");
            self.snap_to(host, Point::new(area.width / 2.0, 0.0), half)?;
        } else {
            // Don't let the title bar end up above the screen
            let position = host.position()?;
            if position.y < 0.0 {
                host.set_position(Point::new(position.x, 0.0))?;
            }
        }
        Ok(())
    }

    fn snap_to(&mut self, host: &mut dyn WindowHost, origin: Point, size: Size) -> Result<()> {
        if host.state()? != WindowState::Normal {
            host.set_state(WindowState::Normal)?;
        }
        host.set_position(origin)?;
        host.set_size(size)?;
        self.sync_buttons(host)
    }

    fn on_button_click(&mut self, host: &mut dyn WindowHost, button: TitlebarButton) -> Result<()> {
        match button {
            TitlebarButton::Close => {
                self.events.emit(ChromeEvent::CloseRequested);
                Ok(())
            }
            TitlebarButton::Minimize => {
                self.command(host, WindowState::Minimized, ChromeEvent::MinimizeRequested)
            }
            TitlebarButton::Restore => {
                self.command(host, WindowState::Normal, ChromeEvent::RestoreRequested)
            }
            TitlebarButton::Maximize => {
                // Darwin's merged button toggles; the Windows button only maximizes
                if self.config.button_style == ButtonStyle::Darwin
                    && host.state()? == WindowState::Maximized
                {
                    self.command(host, WindowState::Normal, ChromeEvent::RestoreRequested)
                } else {
                    self.command(
                        host,
                        WindowState::Maximized,
                        ChromeEvent::MaximizeRequested,
                    )
                }
            }
        }
    }
}
