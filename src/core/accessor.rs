use serde::{Deserialize, Serialize};

use crate::core::Record;
use crate::core::primitives::{race_time_to_unix_seconds, year_to_unix_seconds};

/// Extracts one scale input from a record.
pub type Accessor = fn(&Record) -> f64;

/// Numeric year, for linear year axes.
#[must_use]
pub fn year_value(record: &Record) -> f64 {
    f64::from(record.year())
}

/// Unix seconds of 1 January of the record's year, for time year axes.
///
/// Years are range-checked when the record is built, so the fallback is
/// unreachable for validated records.
#[must_use]
pub fn year_instant_value(record: &Record) -> f64 {
    year_to_unix_seconds(record.year()).unwrap_or(f64::NAN)
}

/// The race time as an instant on the race-time epoch.
#[must_use]
pub fn race_time_value(record: &Record) -> f64 {
    race_time_to_unix_seconds(record.time())
}

/// Race time as a plain number of seconds.
#[must_use]
pub fn race_seconds_value(record: &Record) -> f64 {
    f64::from(record.time().total_seconds())
}

/// Named record fields that can drive an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordField {
    Year,
    YearInstant,
    RaceTime,
    RaceSeconds,
}

impl RecordField {
    #[must_use]
    pub fn accessor(self) -> Accessor {
        match self {
            Self::Year => year_value,
            Self::YearInstant => year_instant_value,
            Self::RaceTime => race_time_value,
            Self::RaceSeconds => race_seconds_value,
        }
    }
}
