//! Near-Earth comet catalog: the loosely-typed records served by the public
//! NASA dataset and the few transformations the globe viewer applies to them.
//!
//! - `record`: opaque JSON records, text fallbacks and numeric coercion.
//! - `color`: deterministic marker colour from the `object_name` field.
//! - `filter`: the placeholder "altitude" scalar and inclusive range filter.
//! - `fetch`: one unauthenticated GET, decoded into a record list.
//!
//! Expected payload (every field optional, values usually strings):
//!
//! ```text
//! [
//!   { "object_name": "2023 XA", "object": "XA", "epoch_tdb": "2460000.5",
//!     "e": "0.3", "i_deg": "12.1", "q_au_1": "1.0", "q_au_2": "1.2" },
//!   ...
//! ]
//! ```

pub mod color;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod record;

pub use color::{color_for_name, hsl_to_rgb, hue_for_name, DEFAULT_COLOR};
pub use error::FetchError;
pub use fetch::{decode_records, fetch_records, DEFAULT_ENDPOINT};
pub use filter::{altitude, filter_records, AltitudeRange, EARTH_RADIUS_KM};
pub use record::{Details, Record, RecordId};
