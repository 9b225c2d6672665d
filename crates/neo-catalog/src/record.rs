//! Loosely-typed comet records.
//!
//! Records are kept as the raw JSON object the endpoint returned. Nothing is
//! validated up front; fields are looked up by name when they are needed and
//! replaced with a fallback when absent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Index of a record inside the full record set.
pub type RecordId = usize;

pub const FIELD_OBJECT_NAME: &str = "object_name";
pub const FIELD_OBJECT: &str = "object";
pub const FIELD_EPOCH_TDB: &str = "epoch_tdb";
pub const FIELD_ECCENTRICITY: &str = "e";
pub const FIELD_INCLINATION_DEG: &str = "i_deg";
pub const FIELD_Q_AU_1: &str = "q_au_1";
pub const FIELD_Q_AU_2: &str = "q_au_2";

/// Fallback shown when the object identifier is missing.
pub const UNKNOWN: &str = "unknown";
/// Fallback shown for any other missing field.
pub const UNAVAILABLE: &str = "unavailable";

/// One fetched comet entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The `object_name` field, only when it is a non-empty string.
    pub fn name(&self) -> Option<&str> {
        match self.get(FIELD_OBJECT_NAME) {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Display text of a field, or `None` when the value is missing or falsy
    /// (`null`, `false`, `0`, `""`).
    pub fn text(&self, key: &str) -> Option<String> {
        let value = self.get(key)?;
        is_truthy(value).then(|| display_value(value))
    }

    /// Display text of a field with a fallback for missing values.
    pub fn text_or(&self, key: &str, fallback: &str) -> String {
        self.text(key).unwrap_or_else(|| fallback.to_owned())
    }

    /// Numeric value of a field using loose coercion: numeric strings parse,
    /// blank strings and `null` are zero, everything unparseable is NaN.
    /// A missing field is NaN.
    pub fn number(&self, key: &str) -> f64 {
        self.get(key).map_or(f64::NAN, coerce_number)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            // Float `Display` prints integral values without ".0" or an exponent.
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => f.to_string(),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => coerce_str(s),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [single] if !single.is_array() && !single.is_object() => match single {
                Value::Null => 0.0,
                Value::String(s) => coerce_str(s),
                // Joined as "true"/"false", which does not parse.
                Value::Bool(_) => f64::NAN,
                other => coerce_number(other),
            },
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

fn coerce_str(s: &str) -> f64 {
    let t = s.trim();
    if t.is_empty() {
        return 0.0;
    }

    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        return u64::from_str_radix(hex, 16).map_or(f64::NAN, |v| v as f64);
    }

    // Rust's float parser also accepts "inf"/"nan" spellings; reject any letter
    // other than an exponent marker.
    if t.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }

    t.parse::<f64>().unwrap_or(f64::NAN)
}

/// The labelled fields shown in the detail panel for a selected marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Details {
    pub object: String,
    pub epoch_tdb: String,
    pub eccentricity: String,
    pub inclination_deg: String,
    pub semi_major_axis_au: String,
}

impl Details {
    pub fn from_record(record: &Record) -> Self {
        Self {
            object: record.text_or(FIELD_OBJECT, UNKNOWN),
            epoch_tdb: record.text_or(FIELD_EPOCH_TDB, UNAVAILABLE),
            eccentricity: record.text_or(FIELD_ECCENTRICITY, UNAVAILABLE),
            inclination_deg: record.text_or(FIELD_INCLINATION_DEG, UNAVAILABLE),
            // The panel labels q_au_2 as the semi-major axis.
            semi_major_axis_au: record.text_or(FIELD_Q_AU_2, UNAVAILABLE),
        }
    }

    pub fn heading(&self) -> String {
        format!("Object: {}", self.object)
    }

    /// Body lines below the heading, in display order.
    pub fn body_lines(&self) -> [String; 4] {
        [
            format!("Epoch (TDB): {}", self.epoch_tdb),
            format!("Eccentricity: {}", self.eccentricity),
            format!("Inclination (degrees): {}", self.inclination_deg),
            format!("Semi-major axis (AU): {}", self.semi_major_axis_au),
        ]
    }

    /// Heading followed by body lines.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.heading()];
        lines.extend(self.body_lines());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn text_falls_back_for_missing_and_falsy_values() {
        let r = record(json!({ "object": "", "e": null, "i_deg": 0, "epoch_tdb": "2460000.5" }));

        assert_eq!(r.text_or(FIELD_OBJECT, UNKNOWN), "unknown");
        assert_eq!(r.text_or(FIELD_ECCENTRICITY, UNAVAILABLE), "unavailable");
        assert_eq!(r.text_or(FIELD_INCLINATION_DEG, UNAVAILABLE), "unavailable");
        assert_eq!(r.text_or(FIELD_Q_AU_2, UNAVAILABLE), "unavailable");
        assert_eq!(r.text_or(FIELD_EPOCH_TDB, UNAVAILABLE), "2460000.5");
    }

    #[test]
    fn numbers_display_like_their_source() {
        let r = record(json!({ "e": 0.25, "i_deg": 12.0, "q_au_2": 3 }));
        assert_eq!(r.text(FIELD_ECCENTRICITY).as_deref(), Some("0.25"));
        assert_eq!(r.text(FIELD_INCLINATION_DEG).as_deref(), Some("12"));
        assert_eq!(r.text(FIELD_Q_AU_2).as_deref(), Some("3"));
    }

    #[test]
    fn large_integral_floats_display_in_full() {
        let r = record(json!({ "e": 1e20, "i_deg": 1e19, "q_au_2": -9.5e18 }));
        assert_eq!(r.text(FIELD_ECCENTRICITY).as_deref(), Some("100000000000000000000"));
        assert_eq!(r.text(FIELD_INCLINATION_DEG).as_deref(), Some("10000000000000000000"));
        assert_eq!(r.text(FIELD_Q_AU_2).as_deref(), Some("-9500000000000000000"));
    }

    #[test]
    fn single_bool_in_array_is_not_a_number() {
        let r = record(json!({ "a": [true], "b": [false], "c": [7], "d": [null] }));
        assert!(r.number("a").is_nan());
        assert!(r.number("b").is_nan());
        assert_eq!(r.number("c"), 7.0);
        assert_eq!(r.number("d"), 0.0);
    }

    #[test]
    fn name_requires_non_empty_string() {
        assert_eq!(record(json!({ "object_name": "P/2004 R1" })).name(), Some("P/2004 R1"));
        assert_eq!(record(json!({ "object_name": "" })).name(), None);
        assert_eq!(record(json!({ "object_name": 42 })).name(), None);
        assert_eq!(record(json!({})).name(), None);
    }

    #[test]
    fn numeric_coercion() {
        let r = record(json!({
            "a": "1.5", "b": " 2 ", "c": "", "d": null, "e": "abc",
            "f": "inf", "g": true, "h": ["4"], "i": {}, "j": "1e3", "k": "0x10",
        }));

        assert_eq!(r.number("a"), 1.5);
        assert_eq!(r.number("b"), 2.0);
        assert_eq!(r.number("c"), 0.0);
        assert_eq!(r.number("d"), 0.0);
        assert!(r.number("e").is_nan());
        assert!(r.number("f").is_nan());
        assert_eq!(r.number("g"), 1.0);
        assert_eq!(r.number("h"), 4.0);
        assert!(r.number("i").is_nan());
        assert_eq!(r.number("j"), 1000.0);
        assert_eq!(r.number("k"), 16.0);
        assert!(r.number("missing").is_nan());
    }

    #[test]
    fn details_lines() {
        let r = record(json!({
            "object_name": "2023 XA", "object": "XA", "epoch_tdb": "2460000.5",
            "e": "0.3", "i_deg": "12.1", "q_au_1": "1.0", "q_au_2": "1.2",
        }));

        assert_eq!(
            Details::from_record(&r).lines(),
            vec![
                "Object: XA",
                "Epoch (TDB): 2460000.5",
                "Eccentricity: 0.3",
                "Inclination (degrees): 12.1",
                "Semi-major axis (AU): 1.2",
            ]
        );
    }

    #[test]
    fn details_of_empty_record_use_fallbacks() {
        let d = Details::from_record(&Record::default());
        assert_eq!(d.heading(), "Object: unknown");
        assert!(d.body_lines().iter().all(|l| l.ends_with(": unavailable")));
    }
}
