//! Turns catalog records into renderable markers.
//!
//! Placement is random within a shell around the reference sphere and does not
//! use the record's orbital elements.

use crate::math::spherical_to_cartesian;
use glam::Vec3;
use neo_catalog::{color_for_name, Record, RecordId};
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Render radius of a marker sphere, in Earth radii.
pub const MARKER_RADIUS: f32 = 0.01;
/// Inner radius of the placement shell.
pub const SHELL_MIN_RADIUS: f32 = 1.1;
/// Shell thickness; the outer radius is `SHELL_MIN_RADIUS + SHELL_THICKNESS`.
pub const SHELL_THICKNESS: f32 = 0.5;

/// One renderable point for one record.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// sRGB colour in `[0, 1]`.
    pub color: [f32; 3],
    /// Position in the marker container's local frame.
    pub position: Vec3,
    pub radius: f32,
    /// The source record in the full record set.
    pub record: RecordId,
}

/// Builds the marker for `record`, stored at `id` in the record set.
pub fn build_marker<R: Rng + ?Sized>(record: &Record, id: RecordId, rng: &mut R) -> Marker {
    Marker {
        color: color_for_name(record.name()),
        position: random_shell_position(rng),
        radius: MARKER_RADIUS,
        record: id,
    }
}

/// Uniform independent draws for radius, azimuth and polar angle.
pub fn random_shell_position<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let radius = SHELL_MIN_RADIUS + rng.gen::<f32>() * SHELL_THICKNESS;
    let azimuth = rng.gen::<f32>() * TAU;
    let polar = rng.gen::<f32>() * PI;
    spherical_to_cartesian(radius, polar, azimuth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_catalog::DEFAULT_COLOR;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn positions_stay_in_shell() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let r = random_shell_position(&mut rng).length();
            assert!(r >= SHELL_MIN_RADIUS - 1e-5, "radius {} below shell", r);
            assert!(r <= SHELL_MIN_RADIUS + SHELL_THICKNESS + 1e-5, "radius {} above shell", r);
        }
    }

    #[test]
    fn color_follows_name_not_position() {
        let named: Record = serde_json::from_value(serde_json::json!({ "object_name": "2023 XA" })).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let a = build_marker(&named, 0, &mut rng);
        let b = build_marker(&named, 1, &mut rng);
        assert_eq!(a.color, b.color);
        assert_ne!(a.position, b.position);
        assert_eq!((a.record, b.record), (0, 1));

        let unnamed = build_marker(&Record::default(), 2, &mut rng);
        assert_eq!(unnamed.color, DEFAULT_COLOR);
        assert_eq!(unnamed.radius, MARKER_RADIUS);
    }
}
