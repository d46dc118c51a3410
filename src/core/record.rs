use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ScatterError, ScatterResult};

/// `Year` as it appears on the wire: either a JSON number or a year string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearField {
    Number(i64),
    Text(String),
}

impl fmt::Display for YearField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// One observation exactly as deserialized from the dataset.
///
/// No validation happens here; see [`Record::from_raw`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Year")]
    pub year: YearField,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Doping", default)]
    pub doping: String,
}

impl RawRecord {
    #[must_use]
    pub fn new(year: i64, time: impl Into<String>, doping: impl Into<String>) -> Self {
        Self {
            year: YearField::Number(year),
            time: time.into(),
            doping: doping.into(),
        }
    }
}

/// Calendar day that parsed race times are anchored to.
pub const RACE_TIME_EPOCH: (i32, u32, u32) = (1900, 1, 1);

/// A "MM:SS" race duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RaceTime {
    minutes: u32,
    seconds: u32,
}

impl RaceTime {
    pub fn new(minutes: u32, seconds: u32) -> ScatterResult<Self> {
        if minutes >= 60 || seconds >= 60 {
            return Err(ScatterError::InvalidData(format!(
                "race time {minutes}:{seconds} is out of range"
            )));
        }
        Ok(Self { minutes, seconds })
    }

    /// Parses `MM:SS`, with both fields in `0..60`.
    pub fn parse(raw: &str) -> ScatterResult<Self> {
        let trimmed = raw.trim();
        let time = NaiveTime::parse_from_str(&format!("00:{trimmed}"), "%H:%M:%S").map_err(
            |err| ScatterError::InvalidData(format!("invalid race time `{raw}`: {err}")),
        )?;
        if time.nanosecond() >= 1_000_000_000 {
            return Err(ScatterError::InvalidData(format!(
                "invalid race time `{raw}`: leap second"
            )));
        }
        Self::new(time.minute(), time.second())
    }

    #[must_use]
    pub fn minutes(self) -> u32 {
        self.minutes
    }

    #[must_use]
    pub fn seconds(self) -> u32 {
        self.seconds
    }

    #[must_use]
    pub fn total_seconds(self) -> u32 {
        self.minutes * 60 + self.seconds
    }

    /// The race time as an instant on [`RACE_TIME_EPOCH`].
    #[must_use]
    pub fn to_naive_datetime(self) -> NaiveDateTime {
        let (year, month, day) = RACE_TIME_EPOCH;
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(0, self.minutes, self.seconds))
            .unwrap_or(NaiveDateTime::MIN)
    }
}

impl fmt::Display for RaceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Validated record. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    year: i32,
    time: RaceTime,
    doping: String,
}

impl Record {
    #[must_use]
    pub fn new(year: i32, time: RaceTime, doping: impl Into<String>) -> Self {
        Self {
            year,
            time,
            doping: doping.into(),
        }
    }

    pub fn from_raw(raw: &RawRecord) -> ScatterResult<Self> {
        let year = parse_year(&raw.year)?;
        let time = RaceTime::parse(&raw.time)?;
        Ok(Self::new(year, time, raw.doping.clone()))
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn time(&self) -> RaceTime {
        self.time
    }

    #[must_use]
    pub fn doping(&self) -> &str {
        &self.doping
    }

    /// `true` when the record carries no doping allegation.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.doping.is_empty()
    }
}

fn parse_year(year: &YearField) -> ScatterResult<i32> {
    let value = match year {
        YearField::Number(value) => i32::try_from(*value).ok(),
        YearField::Text(text) => text.trim().parse::<i32>().ok(),
    };
    value
        .filter(|value| NaiveDate::from_ymd_opt(*value, 1, 1).is_some())
        .ok_or_else(|| ScatterError::InvalidData(format!("invalid year `{year}`")))
}

/// What to do with records whose fields cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MalformedRecordPolicy {
    /// Drop the record and log a warning.
    #[default]
    Skip,
    /// Fail the whole dataset.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: String,
}

/// Ordered, validated dataset plus a report of the records that were dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordSet {
    records: Vec<Record>,
    skipped: Vec<SkippedRecord>,
}

impl RecordSet {
    pub fn from_raw(raw: &[RawRecord], policy: MalformedRecordPolicy) -> ScatterResult<Self> {
        let mut records = Vec::with_capacity(raw.len());
        let mut skipped = Vec::new();

        for (index, item) in raw.iter().enumerate() {
            match Record::from_raw(item) {
                Ok(record) => records.push(record),
                Err(err) => match policy {
                    MalformedRecordPolicy::Reject => {
                        return Err(ScatterError::MalformedRecord {
                            index,
                            reason: err.to_string(),
                        });
                    }
                    MalformedRecordPolicy::Skip => {
                        warn!(index, error = %err, "skipping malformed record");
                        skipped.push(SkippedRecord {
                            index,
                            reason: err.to_string(),
                        });
                    }
                },
            }
        }

        debug!(
            accepted = records.len(),
            skipped = skipped.len(),
            "validated dataset records"
        );
        Ok(Self { records, skipped })
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }

    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self {
            records,
            skipped: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RaceTime, RawRecord, Record, YearField};

    #[test]
    fn race_time_parses_minutes_and_seconds() {
        let time = RaceTime::parse("36:50").expect("valid time");
        assert_eq!(time.minutes(), 36);
        assert_eq!(time.seconds(), 50);
        assert_eq!(time.total_seconds(), 2210);
        assert_eq!(time.to_string(), "36:50");
    }

    #[test]
    fn race_time_rejects_out_of_range_seconds() {
        assert!(RaceTime::parse("36:75").is_err());
        assert!(RaceTime::parse("abc").is_err());
    }

    #[test]
    fn year_string_is_accepted() {
        let raw = RawRecord {
            year: YearField::Text("2001".to_owned()),
            time: "38:00".to_owned(),
            doping: String::new(),
        };
        let record = Record::from_raw(&raw).expect("valid record");
        assert_eq!(record.year(), 2001);
        assert!(record.is_clean());
    }
}
