use glam::DVec2;

/// Raw key identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyR,
    KeyF,
    KeyQ,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    ShiftLeft,
    Escape,
}

/// Controller - handles key input states
pub trait Controller {
    /// Check if key is currently down
    fn is_down(&self, key: Key) -> bool;
}

/// Input device state gathered by the host once per tick
///
/// `pointer` is a position in pixels, not a delta. The camera keeps the
/// previous sample and derives displacement itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    /// Pointer position in window pixels, screen-down positive
    pub pointer: DVec2,
    /// Keys held at sampling time
    pub held: Vec<Key>,
    /// Keys that went down since the previous snapshot
    pub pressed: Vec<Key>,
    /// A mouse button went down since the previous snapshot
    pub button_pressed: bool,
    /// Window has keyboard focus
    pub focused: bool,
}

impl InputSnapshot {
    /// Focused snapshot with the pointer at `pointer` and nothing pressed
    pub fn at(pointer: DVec2) -> Self {
        Self {
            pointer,
            focused: true,
            ..Default::default()
        }
    }

    pub fn with_held(mut self, keys: &[Key]) -> Self {
        self.held.extend_from_slice(keys);
        self
    }

    pub fn with_pressed(mut self, keys: &[Key]) -> Self {
        self.pressed.extend_from_slice(keys);
        self
    }

    pub fn with_click(mut self) -> Self {
        self.button_pressed = true;
        self
    }

    pub fn unfocused(mut self) -> Self {
        self.focused = false;
        self
    }

    /// Check if key went down since the previous snapshot
    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

impl Controller for InputSnapshot {
    fn is_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}
