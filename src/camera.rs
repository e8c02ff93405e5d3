use glam::{DMat4, DVec2, DVec3};

use crate::config::FlyConfig;
use crate::core::{CaptureManager, CaptureState, CaptureTransition, InputSnapshot, Key, Viewport};
use crate::math::{look_at, perspective, Basis};
use crate::motion::{integrate, ActionSet};
use crate::orientation::{LookScheme, Orientation};
use crate::traits::{CursorSink, ViewProvider};
use crate::types::ViewUniform;

/// Key that releases the pointer
pub const RELEASE_KEY: Key = Key::Escape;
/// Key that releases the pointer and asks the host to exit
pub const QUIT_KEY: Key = Key::KeyQ;

/// Result of a tick, for the host loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// Mutable camera state, updated once per tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub position: DVec3,
    pub orientation: Orientation,
    /// Pointer sample the next displacement is measured from
    pub last_pointer: DVec2,
}

/// Free-fly camera: input snapshot + elapsed time in, view matrix out
pub struct CameraController {
    state: CameraState,
    start: CameraState,
    capture: CaptureManager,
    /// Set on capture until a finite pointer sample becomes the reference
    needs_reference: bool,
    basis: Basis,
    view: DMat4,
    scheme: LookScheme,
    sensitivity: f64,
    speed: f64,
    fov_y: f64,
    near: f64,
    far: f64,
    viewport: Viewport,
}

impl CameraController {
    pub fn new(config: &FlyConfig) -> Self {
        let start = CameraState {
            position: config.start_position(),
            orientation: config.start_orientation(),
            last_pointer: DVec2::ZERO,
        };
        let basis = start.orientation.basis();

        Self {
            state: start,
            start,
            capture: CaptureManager::new(),
            needs_reference: false,
            basis,
            view: look_at(start.position, basis.ahead, basis.up),
            scheme: config.look_scheme,
            sensitivity: config.sensitivity(),
            speed: config.move_speed,
            fov_y: config.field_of_view(),
            near: config.near,
            far: config.far,
            viewport: Viewport::new(config.window.width, config.window.height),
        }
    }

    /// Advance one frame
    ///
    /// Negative or non-finite `elapsed` is treated as 0. Keyboard movement
    /// applies whether or not the pointer is captured; looking around
    /// requires capture.
    pub fn tick(
        &mut self,
        input: &InputSnapshot,
        sink: &mut dyn CursorSink,
        elapsed: f64,
    ) -> TickOutcome {
        let elapsed = sanitize_elapsed(elapsed);

        let transition = self.capture.handle_focus(input.focused, sink);
        self.on_transition(transition);

        let outcome = if input.was_pressed(QUIT_KEY) {
            self.capture.release(sink);
            log::info!("Quit requested");
            TickOutcome::Quit
        } else {
            TickOutcome::Continue
        };

        if input.was_pressed(RELEASE_KEY) {
            self.capture.release(sink);
        } else if input.button_pressed && outcome == TickOutcome::Continue {
            let transition = self.capture.handle_click(sink);
            self.on_transition(transition);
        }

        if self.capture.is_captured() {
            self.look(input.pointer);
        }

        self.basis = self.state.orientation.basis();
        let actions = ActionSet::from_controller(input);
        let position = self.state.position + integrate(actions, &self.basis, elapsed, self.speed);
        if position.is_finite() {
            self.state.position = position;
        } else {
            log::warn!("Dropping non-finite movement to {position}");
        }
        self.view = look_at(self.state.position, self.basis.ahead, self.basis.up);

        outcome
    }

    fn on_transition(&mut self, transition: CaptureTransition) {
        if transition == CaptureTransition::Captured {
            self.needs_reference = true;
        }
    }

    fn look(&mut self, pointer: DVec2) {
        if !pointer.is_finite() {
            log::warn!("Ignoring non-finite pointer sample {pointer}");
            return;
        }

        // First finite sample after capture only sets the reference
        if self.needs_reference {
            self.state.last_pointer = pointer;
            self.needs_reference = false;
        }

        match self.scheme {
            LookScheme::Relative => {
                let delta = pointer - self.state.last_pointer;
                self.state
                    .orientation
                    .apply_delta(delta.x, delta.y, self.sensitivity);
            }
            LookScheme::Absolute => {
                self.state
                    .orientation
                    .set_absolute(pointer.x, pointer.y, self.sensitivity);
            }
        }
        self.state.last_pointer = pointer;
    }

    /// Restore the start pose; capture state is kept
    pub fn reset(&mut self) {
        let last_pointer = self.state.last_pointer;
        self.state = CameraState {
            last_pointer,
            ..self.start
        };
        self.basis = self.state.orientation.basis();
        self.view = look_at(self.state.position, self.basis.ahead, self.basis.up);
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    pub fn capture_state(&self) -> CaptureState {
        self.capture.state()
    }

    pub fn is_captured(&self) -> bool {
        self.capture.is_captured()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Perspective projection for an explicit aspect ratio
    pub fn projection_matrix_for(&self, aspect: f64) -> DMat4 {
        perspective(self.fov_y, aspect, self.near, self.far)
    }

    /// Perspective projection for the current viewport
    pub fn projection_matrix(&self) -> DMat4 {
        self.projection_matrix_for(self.viewport.aspect())
    }

    pub fn to_uniform(&self) -> ViewUniform {
        ViewUniform::new(self.view, self.projection_matrix(), self.state.position)
    }
}

impl ViewProvider for CameraController {
    fn view_matrix(&self) -> DMat4 {
        self.view
    }

    fn position(&self) -> DVec3 {
        self.state.position
    }

    fn forward(&self) -> DVec3 {
        self.basis.ahead
    }
}

fn sanitize_elapsed(elapsed: f64) -> f64 {
    if elapsed.is_finite() && elapsed >= 0.0 {
        elapsed
    } else {
        log::warn!("Clamping invalid frame time {elapsed} to 0");
        0.0
    }
}
