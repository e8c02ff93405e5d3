use glam::DVec2;
use winit::event::{DeviceEvent, ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{InputSnapshot, Key};

/// Adapter that gathers Winit events into per-tick input snapshots
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently held keys
    held: Vec<Key>,
    /// Keys pressed since the last snapshot
    pressed: Vec<Key>,
    /// Mouse button pressed since the last snapshot
    button_pressed: bool,
    /// Virtual pointer: sum of raw mouse motion, keeps moving while locked
    pointer: DVec2,
    focused: bool,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(key) = Self::keycode_to_key(keycode) {
                        self.set_key(key, event.state, event.repeat);
                    }
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                ..
            } => {
                self.button_pressed = true;
            }
            WindowEvent::Focused(focused) => {
                self.focused = *focused;
                if !focused {
                    // Release events are not delivered to unfocused windows
                    self.held.clear();
                }
            }
            _ => {}
        }
    }

    /// Process a Winit DeviceEvent (raw mouse motion)
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.add_motion(delta.0, delta.1);
        }
    }

    /// Accumulate pointer motion in pixels, screen-down positive
    pub fn add_motion(&mut self, dx: f64, dy: f64) {
        self.pointer += DVec2::new(dx, dy);
    }

    /// Record a key transition
    pub fn set_key(&mut self, key: Key, state: ElementState, repeat: bool) {
        match state {
            ElementState::Pressed => {
                if !self.held.contains(&key) {
                    self.held.push(key);
                }
                if !repeat && !self.pressed.contains(&key) {
                    self.pressed.push(key);
                }
            }
            ElementState::Released => {
                self.held.retain(|&k| k != key);
            }
        }
    }

    /// Snapshot current state and reset per-frame edges
    /// Call once per tick before handing input to the camera
    pub fn snapshot(&mut self) -> InputSnapshot {
        InputSnapshot {
            pointer: self.pointer,
            held: self.held.clone(),
            pressed: std::mem::take(&mut self.pressed),
            button_pressed: std::mem::take(&mut self.button_pressed),
            focused: self.focused,
        }
    }

    pub fn pointer(&self) -> DVec2 {
        self.pointer
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Map Winit KeyCode to Key
    fn keycode_to_key(keycode: KeyCode) -> Option<Key> {
        match keycode {
            KeyCode::KeyW => Some(Key::KeyW),
            KeyCode::KeyA => Some(Key::KeyA),
            KeyCode::KeyS => Some(Key::KeyS),
            KeyCode::KeyD => Some(Key::KeyD),
            KeyCode::KeyR => Some(Key::KeyR),
            KeyCode::KeyF => Some(Key::KeyF),
            KeyCode::KeyQ => Some(Key::KeyQ),
            KeyCode::ArrowUp => Some(Key::ArrowUp),
            KeyCode::ArrowDown => Some(Key::ArrowDown),
            KeyCode::ArrowLeft => Some(Key::ArrowLeft),
            KeyCode::ArrowRight => Some(Key::ArrowRight),
            KeyCode::Space => Some(Key::Space),
            KeyCode::ShiftLeft => Some(Key::ShiftLeft),
            KeyCode::Escape => Some(Key::Escape),
            _ => None,
        }
    }
}
