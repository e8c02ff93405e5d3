use glam::DVec3;
use std::f64::consts::FRAC_PI_2;

/// Camera direction vectors derived from yaw and pitch
///
/// All three are unit length. `right` is always horizontal and `up` is the
/// fixed world up, so the camera can never roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub ahead: DVec3,
    pub right: DVec3,
    pub up: DVec3,
}

impl Basis {
    /// Build the basis for the given orientation (radians)
    ///
    /// Positive pitch looks down: `ahead.y = -sin(pitch)`.
    pub fn from_angles(yaw: f64, pitch: f64) -> Self {
        let ahead = DVec3::new(
            pitch.cos() * yaw.sin(),
            -pitch.sin(),
            pitch.cos() * yaw.cos(),
        );

        let right = DVec3::new((yaw - FRAC_PI_2).sin(), 0.0, (yaw - FRAC_PI_2).cos());

        Self {
            ahead,
            right,
            up: DVec3::Y,
        }
    }
}
