use crate::{error::FetchError, record::Record};
use serde_json::Value;
use std::io::Read;

/// Near-Earth comets dataset (JSON array, no auth).
pub const DEFAULT_ENDPOINT: &str = "https://data.nasa.gov/resource/b67r-rgxc.json";

/// Performs a single GET against `url` and decodes the body.
///
/// There is no retry, timeout override, pagination or caching: one attempt,
/// success or failure. Non-2xx responses surface as `FetchError::Http`.
pub fn fetch_records(url: &str) -> Result<Vec<Record>, FetchError> {
    let response = ureq::get(url).call()?;

    log::debug!(
        "GET {} -> {} ({})",
        url,
        response.status(),
        response.content_type()
    );

    let mut body = Vec::new();
    response.into_reader().read_to_end(&mut body)?;

    decode_records(&body)
}

/// Decodes a JSON array of objects into records.
///
/// Elements that are not objects are skipped. An empty result, including an
/// array of only non-objects, is `FetchError::Empty`.
pub fn decode_records(body: &[u8]) -> Result<Vec<Record>, FetchError> {
    let items = match serde_json::from_slice::<Value>(body)? {
        Value::Array(items) => items,
        other => return Err(FetchError::NotAnArray(json_kind(&other))),
    };

    let total = items.len();
    let records: Vec<Record> = items
        .into_iter()
        // Only objects can carry named fields; anything else is dropped here.
        .filter_map(|item| match item {
            Value::Object(fields) => Some(Record::from(fields)),
            _ => None,
        })
        .collect();

    if records.len() != total {
        log::warn!(
            "Skipped {} non-object entries in response",
            total - records.len()
        );
    }

    if records.is_empty() {
        return Err(FetchError::Empty);
    }

    Ok(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
