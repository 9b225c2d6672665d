//! Spherical coordinates in the scene's Y-up frame.
//!
//! `polar` is measured from +Y, `azimuth` around +Y starting at +Z, so
//! `(r, π/2, 0)` lies on +Z.

use glam::Vec3;

#[inline]
pub fn spherical_to_cartesian(radius: f32, polar: f32, azimuth: f32) -> Vec3 {
    let (sin_p, cos_p) = polar.sin_cos();
    let (sin_a, cos_a) = azimuth.sin_cos();
    Vec3::new(
        radius * sin_p * sin_a,
        radius * cos_p,
        radius * sin_p * cos_a,
    )
}

/// Returns `(radius, polar, azimuth)`.
pub fn cartesian_to_spherical(v: Vec3) -> (f32, f32, f32) {
    let radius = v.length();
    if radius == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let polar = (v.y / radius).clamp(-1.0, 1.0).acos();
    let azimuth = v.x.atan2(v.z);
    (radius, polar, azimuth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn axes() {
        assert!(spherical_to_cartesian(1.0, FRAC_PI_2, 0.0).abs_diff_eq(Vec3::Z, 1e-6));
        assert!(spherical_to_cartesian(2.0, 0.0, 1.0).abs_diff_eq(Vec3::new(0.0, 2.0, 0.0), 1e-6));
        assert!(spherical_to_cartesian(1.0, FRAC_PI_2, FRAC_PI_2).abs_diff_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn inverse() {
        let v = spherical_to_cartesian(1.4, 2.1, -0.7 + PI);
        let (r, p, a) = cartesian_to_spherical(v);
        assert!(spherical_to_cartesian(r, p, a).abs_diff_eq(v, 1e-5));
        assert!((r - 1.4).abs() < 1e-5);
    }
}
