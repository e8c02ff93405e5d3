use glam::{DMat4, DVec3};

use super::angle::MAX_PITCH;

/// Smallest |cross(ahead, up)| reachable under the pitch clamp
///
/// ahead and up are unit vectors at angle (90 deg - |pitch|) >= 0.01 deg,
/// so the cross product magnitude is at least sin(0.01 deg) ~ 1.745e-4.
/// Clamping pitch at exactly 90 deg would let it reach zero and the view
/// matrix would collapse.
pub const PITCH_LIMIT_SIN_MARGIN: f64 = (std::f64::consts::FRAC_PI_2 - MAX_PITCH) * 0.999;

/// Right-handed look-at transform from `position` towards `position + ahead`
pub fn look_at(position: DVec3, ahead: DVec3, up: DVec3) -> DMat4 {
    debug_assert!(
        ahead.cross(up).length() >= PITCH_LIMIT_SIN_MARGIN,
        "view direction {ahead} is parallel to up {up}"
    );
    DMat4::look_at_rh(position, position + ahead, up)
}

/// Right-handed perspective projection with OpenGL depth range
pub fn perspective(fov_y: f64, aspect: f64, near: f64, far: f64) -> DMat4 {
    DMat4::perspective_rh_gl(fov_y, aspect, near, far)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Basis, MIN_PITCH};

    #[test]
    fn margin_is_below_sin_of_limit_gap() {
        let gap = std::f64::consts::FRAC_PI_2 - MAX_PITCH;
        assert!(PITCH_LIMIT_SIN_MARGIN < gap.sin());
        assert!(PITCH_LIMIT_SIN_MARGIN > 1.7e-4);
    }

    #[test]
    fn clamped_extremes_keep_cross_away_from_zero() {
        for pitch in [MAX_PITCH, MIN_PITCH] {
            let basis = Basis::from_angles(0.3, pitch);
            assert!(basis.ahead.cross(basis.up).length() >= PITCH_LIMIT_SIN_MARGIN);
        }
    }

    #[test]
    fn eye_maps_to_origin() {
        let eye = DVec3::new(3.0, -2.0, 7.0);
        let view = look_at(eye, DVec3::NEG_Z, DVec3::Y);
        assert!(view.transform_point3(eye).length() < 1e-12);
    }

    #[test]
    fn target_lies_on_negative_z_axis() {
        let eye = DVec3::new(1.0, 2.0, 3.0);
        let basis = Basis::from_angles(0.8, 0.4);
        let view = look_at(eye, basis.ahead, basis.up);
        let target = view.transform_point3(eye + basis.ahead);
        assert!((target - DVec3::NEG_Z).length() < 1e-9);
    }

    #[test]
    fn perspective_maps_near_plane_to_minus_one() {
        let proj = perspective(1.0, 1.5, 0.1, 100.0);
        let p = proj.project_point3(DVec3::new(0.0, 0.0, -0.1));
        assert!((p.z + 1.0).abs() < 1e-9);
    }
}
