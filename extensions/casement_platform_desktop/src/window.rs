//! Desktop window implementation using winit

use std::sync::Arc;

use casement_core::{Point, Rect, Size};
use casement_platform::{
    Cursor, PlatformError, Result, WindowConfig, WindowHost, WindowState, WorkspaceQuery,
};
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{CursorIcon, Fullscreen, Window as WinitWindow, WindowAttributes};

/// Desktop window wrapping a winit window
pub struct DesktopWindow {
    window: Arc<WinitWindow>,
}

impl DesktopWindow {
    /// Create a new frameless desktop window
    pub fn new(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self> {
        let attrs = WindowAttributes::default()
            .with_title(&config.title)
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_resizable(config.resizable)
            .with_decorations(config.decorations)
            .with_transparent(config.transparent);

        let window = event_loop
            .create_window(attrs)
            .map_err(|e| PlatformError::WindowCreation(e.to_string()))?;

        Ok(Self {
            window: Arc::new(window),
        })
    }

    /// Wrap an existing winit window
    pub fn from_winit(window: Arc<WinitWindow>) -> Self {
        Self { window }
    }

    /// Get the underlying winit window
    pub fn winit_window(&self) -> &WinitWindow {
        &self.window
    }

    /// Get an Arc to the winit window
    pub fn winit_window_arc(&self) -> Arc<WinitWindow> {
        Arc::clone(&self.window)
    }

    fn scale(&self) -> f64 {
        self.window.scale_factor()
    }
}

impl WindowHost for DesktopWindow {
    fn position(&self) -> Result<Point> {
        let position = self
            .window
            .outer_position()
            .map_err(|e| PlatformError::GeometryQuery(e.to_string()))?;
        let scale = self.scale();
        Ok(Point::new(
            (position.x as f64 / scale) as f32,
            (position.y as f64 / scale) as f32,
        ))
    }

    fn size(&self) -> Result<Size> {
        let size = self.window.inner_size();
        let scale = self.scale();
        Ok(Size::new(
            (size.width as f64 / scale) as f32,
            (size.height as f64 / scale) as f32,
        ))
    }

    fn set_position(&mut self, position: Point) -> Result<()> {
        self.window
            .set_outer_position(LogicalPosition::new(position.x, position.y));
        Ok(())
    }

    fn set_size(&mut self, size: Size) -> Result<()> {
        let requested = self
            .window
            .request_inner_size(LogicalSize::new(size.width, size.height));
        if requested.is_none() {
            // Resize is asynchronous on this platform; the Resized event
            // will carry the final size
            tracing::debug!(?size, "inner-size request deferred by platform");
        }
        Ok(())
    }

    fn state(&self) -> Result<WindowState> {
        if self.window.fullscreen().is_some() {
            return Ok(WindowState::FullScreen);
        }
        if self.window.is_minimized().unwrap_or(false) {
            return Ok(WindowState::Minimized);
        }
        if self.window.is_maximized() {
            return Ok(WindowState::Maximized);
        }
        Ok(WindowState::Normal)
    }

    fn set_state(&mut self, state: WindowState) -> Result<()> {
        match state {
            WindowState::Normal => {
                self.window.set_fullscreen(None);
                self.window.set_minimized(false);
                self.window.set_maximized(false);
            }
            WindowState::Maximized => {
                self.window.set_fullscreen(None);
                self.window.set_maximized(true);
            }
            WindowState::Minimized => self.window.set_minimized(true),
            WindowState::FullScreen => self
                .window
                .set_fullscreen(Some(Fullscreen::Borderless(None))),
        }
        Ok(())
    }

    fn set_cursor(&mut self, cursor: Cursor) -> Result<()> {
        let icon = match cursor {
            Cursor::Default => CursorIcon::Default,
            Cursor::ResizeNS => CursorIcon::NsResize,
            Cursor::ResizeEW => CursorIcon::EwResize,
            Cursor::ResizeNESW => CursorIcon::NeswResize,
            Cursor::ResizeNWSE => CursorIcon::NwseResize,
        };
        self.window.set_cursor(icon);
        Ok(())
    }

    fn is_resizable(&self) -> bool {
        self.window.is_resizable()
    }
}

impl WorkspaceQuery for DesktopWindow {
    /// Current monitor's rectangle in logical pixels.
    ///
    /// winit does not expose the OS work area; embedders needing the
    /// taskbar-excluded rectangle can provide their own `WorkspaceQuery`.
    fn available_rect(&self) -> Result<Rect> {
        let monitor = self
            .window
            .current_monitor()
            .ok_or_else(|| PlatformError::WorkspaceQuery("no current monitor".into()))?;
        let scale = monitor.scale_factor();
        let position = monitor.position();
        let size = monitor.size();
        Ok(Rect::new(
            (position.x as f64 / scale) as f32,
            (position.y as f64 / scale) as f32,
            (size.width as f64 / scale) as f32,
            (size.height as f64 / scale) as f32,
        ))
    }
}
