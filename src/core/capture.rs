//! Pointer capture state machine
//!
//! Tracks whether mouse look is active (pointer hidden and locked) and
//! forwards lock/release requests to a [`CursorSink`] on transitions only.
//!
//! # Transitions
//!
//! - Released -> Captured: mouse button press while focused, or focus
//!   regained after capture was lost to a focus change
//! - Captured -> Released: explicit release (Escape/Quit) or focus lost
//!
//! Requesting the current state again does nothing.

use crate::traits::CursorSink;

/// Capture state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Released,
    Captured,
}

/// What a handler did, so the caller can reset its pointer reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureTransition {
    /// No change
    None,
    /// Entered Captured; the sink was asked to lock the pointer
    Captured,
    /// Entered Released; the sink was asked to free the pointer
    Released,
}

#[derive(Debug, Clone, Default)]
pub struct CaptureManager {
    state: CaptureState,
    /// Window focus seen on the previous update
    has_focus: bool,
    /// Capture was lost to a focus change and comes back with focus
    resume_on_focus: bool,
}

impl CaptureManager {
    /// Released, unfocused, no pending intent
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_captured(&self) -> bool {
        self.state == CaptureState::Captured
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Enter Captured
    pub fn capture(&mut self, sink: &mut dyn CursorSink) -> CaptureTransition {
        if self.is_captured() {
            return CaptureTransition::None;
        }
        self.state = CaptureState::Captured;
        self.resume_on_focus = false;
        sink.lock_cursor();
        log::debug!("pointer captured");
        CaptureTransition::Captured
    }

    /// Enter Released and forget any pending focus intent
    pub fn release(&mut self, sink: &mut dyn CursorSink) -> CaptureTransition {
        self.resume_on_focus = false;
        self.leave(sink)
    }

    /// Handle mouse button press
    pub fn handle_click(&mut self, sink: &mut dyn CursorSink) -> CaptureTransition {
        if self.has_focus {
            self.capture(sink)
        } else {
            CaptureTransition::None
        }
    }

    /// Handle the current focus level, acting on edges only
    pub fn handle_focus(&mut self, focused: bool, sink: &mut dyn CursorSink) -> CaptureTransition {
        if focused == self.has_focus {
            return CaptureTransition::None;
        }
        self.has_focus = focused;

        if focused {
            if self.resume_on_focus {
                self.capture(sink)
            } else {
                CaptureTransition::None
            }
        } else {
            let was_captured = self.is_captured();
            let transition = self.leave(sink);
            self.resume_on_focus = was_captured;
            transition
        }
    }

    fn leave(&mut self, sink: &mut dyn CursorSink) -> CaptureTransition {
        if !self.is_captured() {
            return CaptureTransition::None;
        }
        self.state = CaptureState::Released;
        sink.release_cursor();
        log::debug!("pointer released");
        CaptureTransition::Released
    }
}
