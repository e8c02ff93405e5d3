use std::f64::consts::{PI, TAU};

/// Pitch limit: +89.99 degrees in radians
pub const MAX_PITCH: f64 = 89.99 * PI / 180.0;
/// Pitch limit: -89.99 degrees in radians
pub const MIN_PITCH: f64 = -MAX_PITCH;

/// Wrap an angle into (-pi, pi]
///
/// Same result as C's `remainder(angle, 2pi)` except that the -pi endpoint
/// is reported as +pi.
pub fn wrap_angle(angle: f64) -> f64 {
    if angle > -PI && angle <= PI {
        return angle;
    }
    let wrapped = PI - (PI - angle).rem_euclid(TAU);
    // rem_euclid may round up to TAU for tiny negative inputs
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Clamp a pitch angle strictly inside +-90 degrees
pub fn clamp_pitch(pitch: f64) -> f64 {
    pitch.clamp(MIN_PITCH, MAX_PITCH)
}
