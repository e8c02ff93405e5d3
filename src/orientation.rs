use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::math::{clamp_pitch, wrap_angle, Basis};

/// Radians per pixel for a user-facing sensitivity of 1.0
pub const SENSITIVITY_SCALE: f64 = 0.001;

/// How pointer samples drive the view angles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookScheme {
    /// Displacement between samples is accumulated into the angles
    #[default]
    Relative,
    /// The pointer position is mapped directly to the angles
    Absolute,
}

/// Yaw and pitch in radians
///
/// Yaw stays in (-pi, pi] and pitch in [MIN_PITCH, MAX_PITCH] after every
/// update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    yaw: f64,
    pitch: f64,
}

impl Orientation {
    pub fn new(yaw: f64, pitch: f64) -> Self {
        Self {
            yaw: wrap_angle(yaw),
            pitch: clamp_pitch(pitch),
        }
    }

    /// Exact for multiples of 180 degrees
    pub fn from_degrees(yaw: f64, pitch: f64) -> Self {
        Self::new(yaw / 180.0 * PI, pitch / 180.0 * PI)
    }

    #[inline]
    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Accumulate a pointer displacement in pixels (screen-down positive)
    ///
    /// Moving the pointer right turns right and moving it up tilts the view
    /// up. `sensitivity` is in radians per pixel.
    ///
    /// An update that overflows is dropped and the angles are kept.
    pub fn apply_delta(&mut self, dx: f64, dy: f64, sensitivity: f64) {
        self.update(self.yaw - sensitivity * dx, self.pitch + sensitivity * dy);
    }

    /// Map an absolute pointer position directly to the angles
    pub fn set_absolute(&mut self, x: f64, y: f64, sensitivity: f64) {
        self.update(-sensitivity * x, sensitivity * y);
    }

    fn update(&mut self, yaw: f64, pitch: f64) {
        if !(yaw.is_finite() && pitch.is_finite()) {
            log::warn!("Dropping non-finite orientation update (yaw {yaw}, pitch {pitch})");
            return;
        }
        self.yaw = wrap_angle(yaw);
        self.pitch = clamp_pitch(pitch);
    }

    pub fn basis(&self) -> Basis {
        Basis::from_angles(self.yaw, self.pitch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{MAX_PITCH, MIN_PITCH};

    #[test]
    fn new_normalizes() {
        let orientation = Orientation::new(3.0 * PI, 2.0);
        assert!((orientation.yaw() - PI).abs() < 1e-12);
        assert_eq!(orientation.pitch(), MAX_PITCH);
    }

    #[test]
    fn from_degrees_half_turn_is_pi() {
        let orientation = Orientation::from_degrees(180.0, -20.0);
        assert_eq!(orientation.yaw(), PI);
        assert!((orientation.pitch() + 20.0_f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn zero_delta_keeps_angles() {
        let mut orientation = Orientation::from_degrees(180.0, 20.0);
        let before = orientation;
        orientation.apply_delta(0.0, 0.0, 0.001);
        assert_eq!(orientation, before);
    }

    #[test]
    fn pointer_right_decreases_yaw() {
        let mut orientation = Orientation::new(0.0, 0.0);
        orientation.apply_delta(100.0, 0.0, 0.002);
        assert!((orientation.yaw() + 0.2).abs() < 1e-12);
        assert_eq!(orientation.pitch(), 0.0);
    }

    #[test]
    fn pointer_up_tilts_view_up() {
        let mut orientation = Orientation::new(0.0, 0.0);
        orientation.apply_delta(0.0, -100.0, 0.002);
        assert!(orientation.basis().ahead.y > 0.0);
    }

    #[test]
    fn pitch_saturates_at_limits() {
        let mut orientation = Orientation::new(0.0, 0.0);
        orientation.apply_delta(0.0, 1.0e9, 0.002);
        assert_eq!(orientation.pitch(), MAX_PITCH);
        orientation.apply_delta(0.0, -1.0e9, 0.002);
        assert_eq!(orientation.pitch(), MIN_PITCH);
    }

    #[test]
    fn yaw_accumulates_and_wraps() {
        let mut orientation = Orientation::new(PI, 0.0);
        // Half a turn per step
        for _ in 0..7 {
            orientation.apply_delta(-PI / 0.001, 0.0, 0.001);
            assert!(orientation.yaw() > -PI && orientation.yaw() <= PI);
        }
    }

    #[test]
    fn absolute_scheme_sets_angles_directly() {
        let mut orientation = Orientation::new(1.0, 0.5);
        orientation.set_absolute(100.0, 50.0, 0.002);
        assert!((orientation.yaw() + 0.2).abs() < 1e-12);
        assert!((orientation.pitch() - 0.1).abs() < 1e-12);

        orientation.set_absolute(100.0, 50.0, 0.002);
        assert!((orientation.yaw() + 0.2).abs() < 1e-12);
    }

    #[test]
    fn absolute_scheme_is_bounded() {
        let mut orientation = Orientation::new(0.0, 0.0);
        orientation.set_absolute(1.0e6, 1.0e6, 0.002);
        assert!(orientation.yaw() > -PI && orientation.yaw() <= PI);
        assert_eq!(orientation.pitch(), MAX_PITCH);
    }

    #[test]
    fn overflowing_delta_is_dropped() {
        let mut orientation = Orientation::from_degrees(180.0, 20.0);
        let before = orientation;

        orientation.apply_delta(1.0e6, 0.0, 1.0e303);
        assert_eq!(orientation, before);

        orientation.apply_delta(f64::MAX, f64::MAX, 10.0);
        assert_eq!(orientation, before);

        orientation.set_absolute(-1.0e6, 1.0, 1.0e303);
        assert_eq!(orientation, before);
    }

    #[test]
    fn look_scheme_serializes_lowercase() {
        let json = serde_json::to_string(&LookScheme::Absolute).unwrap();
        assert_eq!(json, "\"absolute\"");
        let scheme: LookScheme = serde_json::from_str("\"relative\"").unwrap();
        assert_eq!(scheme, LookScheme::Relative);
    }
}
