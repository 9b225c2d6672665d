use neo_catalog::{filter_records, AltitudeRange, Record, RecordId};
use std::ops::RangeInclusive;

/// Range offered by both altitude sliders.
pub const SLIDER_RANGE: RangeInclusive<f64> = 0.0..=100_000.0;

/// State behind the on-screen filter panel.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterPanel {
    pub min_altitude: f64,
    pub max_altitude: f64,
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self {
            min_altitude: *SLIDER_RANGE.start(),
            max_altitude: *SLIDER_RANGE.end(),
        }
    }
}

impl FilterPanel {
    pub fn range(&self) -> AltitudeRange {
        AltitudeRange::new(self.min_altitude, self.max_altitude)
    }

    /// Ids of the records the current bounds keep.
    pub fn select(&self, records: &[Record]) -> Vec<RecordId> {
        filter_records(records, self.range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_slider_range() {
        let panel = FilterPanel::default();
        assert_eq!(panel.min_altitude, 0.0);
        assert_eq!(panel.max_altitude, 100_000.0);
    }

    #[test]
    fn select_uses_current_bounds() {
        let records: Vec<Record> = [7000, 9000, 200_000]
            .iter()
            .map(|q| serde_json::from_value(serde_json::json!({ "q_au_1": q, "q_au_2": 0 })).unwrap())
            .collect();

        let mut panel = FilterPanel::default();
        assert_eq!(panel.select(&records), vec![0, 1]);

        panel.min_altitude = 1000.0;
        assert_eq!(panel.select(&records), vec![1]);

        panel.max_altitude = 500.0;
        assert!(panel.select(&records).is_empty());
    }
}
