//! Dataset acquisition: one fetch of a JSON array of records.
//!
//! The engine never fetches on its own; hosts pick a [`DatasetSource`] and pass
//! the resulting records in.

mod file;
mod http;

pub use file::FileDatasetSource;
pub use http::{DEFAULT_DATASET_URL, HttpDatasetSource};

use tracing::debug;

use crate::core::RawRecord;
use crate::error::ScatterResult;

/// Anything that can produce the raw record array.
pub trait DatasetSource {
    fn load(&self) -> ScatterResult<Vec<RawRecord>>;

    /// Human-readable origin, used in logs and error messages.
    fn describe(&self) -> String;
}

/// Parses a JSON array of records. Unknown fields are ignored.
pub fn parse_dataset(json: &str) -> ScatterResult<Vec<RawRecord>> {
    let records: Vec<RawRecord> = serde_json::from_str(json)?;
    debug!(count = records.len(), "parsed dataset payload");
    Ok(records)
}

/// Picks an HTTP source for `http(s)://` locations and a file source otherwise.
#[must_use]
pub fn source_for_location(
    location: &str,
    load: crate::api::LoadConfig,
) -> Box<dyn DatasetSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpDatasetSource::new(location).with_load_config(load))
    } else {
        Box::new(FileDatasetSource::new(location))
    }
}
