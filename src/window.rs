use std::sync::Arc;

use winit::window::{CursorGrabMode, Window as WinitWindow};

use crate::core::Viewport;
use crate::traits::CursorSink;

/// Wrapper around winit Window that serves pointer capture requests
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    pub fn viewport(&self) -> Viewport {
        self.inner.inner_size().into()
    }

    pub fn show(&self) {
        self.inner.set_visible(true);
    }
}

impl CursorSink for Window {
    fn lock_cursor(&mut self) {
        // Locked is unsupported on some platforms (X11, Windows); fall back to Confined
        let grabbed = self
            .inner
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| self.inner.set_cursor_grab(CursorGrabMode::Confined));
        if let Err(e) = grabbed {
            log::warn!("Failed to grab cursor: {e}");
        }
        self.inner.set_cursor_visible(false);
    }

    fn release_cursor(&mut self) {
        if let Err(e) = self.inner.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("Failed to release cursor: {e}");
        }
        self.inner.set_cursor_visible(true);
    }
}
