use glam::DVec3;

use crate::core::{Controller, Key};
use crate::math::Basis;

/// Default movement speed in world units per second
pub const DEFAULT_MOVE_SPEED: f64 = 12.0;

/// Logical movement action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveForward,
    MoveBackward,
    MoveUp,
    MoveDown,
}

impl Action {
    /// Integration order
    pub const ALL: [Action; 6] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveForward,
        Action::MoveBackward,
        Action::MoveUp,
        Action::MoveDown,
    ];

    /// Keys bound to this action
    pub const fn keys(self) -> &'static [Key] {
        match self {
            Action::MoveLeft => &[Key::KeyA, Key::ArrowLeft],
            Action::MoveRight => &[Key::KeyD, Key::ArrowRight],
            Action::MoveForward => &[Key::KeyW, Key::ArrowUp],
            Action::MoveBackward => &[Key::KeyS, Key::ArrowDown],
            Action::MoveUp => &[Key::KeyR, Key::Space],
            Action::MoveDown => &[Key::KeyF, Key::ShiftLeft],
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }

    fn direction(self, basis: &Basis) -> DVec3 {
        match self {
            Action::MoveLeft => -basis.right,
            Action::MoveRight => basis.right,
            Action::MoveForward => basis.ahead,
            Action::MoveBackward => -basis.ahead,
            Action::MoveUp => basis.up,
            Action::MoveDown => -basis.up,
        }
    }
}

/// Set of pressed movement actions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSet(u8);

impl ActionSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Resolve held keys through the binding table
    pub fn from_controller(controller: &dyn Controller) -> Self {
        Action::ALL
            .into_iter()
            .filter(|action| action.keys().iter().any(|&key| controller.is_down(key)))
            .collect()
    }

    pub fn insert(&mut self, action: Action) {
        self.0 |= action.bit();
    }

    pub const fn contains(&self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Pressed actions in integration order
    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        Action::ALL.into_iter().filter(move |action| self.contains(*action))
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut set = ActionSet::empty();
        for action in iter {
            set.insert(action);
        }
        set
    }
}

/// Position delta for one tick
///
/// The summed direction is divided by `max(1, |direction|)`, so diagonal
/// movement is no faster than movement along one axis and an empty set
/// yields zero without dividing by zero.
pub fn integrate(actions: ActionSet, basis: &Basis, elapsed: f64, speed: f64) -> DVec3 {
    let direction = actions
        .iter()
        .fold(DVec3::ZERO, |sum, action| sum + action.direction(basis));

    let length = direction.length().max(1.0);
    direction * (speed * elapsed / length)
}
