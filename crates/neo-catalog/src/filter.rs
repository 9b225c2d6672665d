//! The altitude filter applied by the viewer's filter panel.
//!
//! `altitude` is `sqrt(q_au_1² + q_au_2²) - 6371`. The two `q` fields are in
//! astronomical units and 6371 is Earth's radius in kilometres, so for real
//! records the result is about -6370 and the default `[0, 100000]` range keeps
//! nothing. The formula is kept as-is: its intended meaning is unknown.

use crate::record::{Record, RecordId, FIELD_Q_AU_1, FIELD_Q_AU_2};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// The placeholder "altitude" scalar of a record. NaN when either field is
/// missing or not numeric.
pub fn altitude(record: &Record) -> f64 {
    let q1 = record.number(FIELD_Q_AU_1);
    let q2 = record.number(FIELD_Q_AU_2);
    (q1.powi(2) + q2.powi(2)).sqrt() - EARTH_RADIUS_KM
}

/// Inclusive `[min, max]` bounds. No ordering is enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeRange {
    pub min: f64,
    pub max: f64,
}

impl AltitudeRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `min <= value <= max`. Always false for NaN and for inverted bounds.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Ids of the records whose altitude lies within `range`, in input order.
pub fn filter_records(records: &[Record], range: AltitudeRange) -> Vec<RecordId> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| range.contains(altitude(r)))
        .map(|(id, _)| id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn with_q(q1: serde_json::Value, q2: serde_json::Value) -> Record {
        serde_json::from_value(json!({ "q_au_1": q1, "q_au_2": q2 })).unwrap()
    }

    #[test]
    fn altitude_uses_literal_formula() {
        let r = with_q(json!("1.0"), json!("1.2"));
        let expected = (1.0f64 + 1.44).sqrt() - 6371.0;
        assert!((altitude(&r) - expected).abs() < 1e-9);

        let r = with_q(json!(3000.0), json!(4000.0));
        assert_eq!(altitude(&r), 5000.0 - 6371.0);
    }

    #[test]
    fn missing_fields_never_pass() {
        let r: Record = serde_json::from_value(json!({ "q_au_1": "1.0" })).unwrap();
        assert!(altitude(&r).is_nan());
        let everything = AltitudeRange::new(f64::NEG_INFINITY, f64::INFINITY);
        assert!(filter_records(&[r], everything).is_empty());
    }

    #[test]
    fn bounds_are_inclusive() {
        // 6371^2 + 0 -> altitude exactly 0.
        let r = with_q(json!(6371), json!(0));
        assert_eq!(filter_records(&[r.clone()], AltitudeRange::new(0.0, 0.0)), vec![0]);
        assert_eq!(filter_records(&[r], AltitudeRange::new(-1.0, 0.0)), vec![0]);
    }

    #[test]
    fn inverted_range_is_empty() {
        let records = vec![with_q(json!(7000), json!(0)), with_q(json!(8000), json!(0))];
        assert!(filter_records(&records, AltitudeRange::new(5000.0, 10.0)).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = vec![
            with_q(json!(7000), json!(0)),
            with_q(json!("1.0"), json!("1.2")),
            with_q(json!(6500), json!(100)),
            with_q(json!(50000), json!(0)),
        ];
        let range = AltitudeRange::new(0.0, 1000.0);

        let first = filter_records(&records, range);
        let second = filter_records(&records, range);
        assert_eq!(first, vec![0, 2]);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_range_on_real_data_is_empty() {
        let records = vec![with_q(json!("1.0"), json!("1.2")), with_q(json!("0.9"), json!("4.1"))];
        assert!(filter_records(&records, AltitudeRange::new(0.0, 0.0)).is_empty());
    }
}
