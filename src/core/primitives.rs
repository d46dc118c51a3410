use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::core::record::RaceTime;
use crate::error::{ScatterError, ScatterResult};

#[must_use]
pub fn naive_to_unix_seconds(time: NaiveDateTime) -> f64 {
    time.and_utc().timestamp_millis() as f64 / 1000.0
}

/// Unix seconds of 1 January 00:00 UTC of `year`.
pub fn year_to_unix_seconds(year: i32) -> ScatterResult<f64> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(naive_to_unix_seconds)
        .ok_or_else(|| ScatterError::InvalidData(format!("year {year} is out of range")))
}

#[must_use]
pub fn race_time_to_unix_seconds(time: RaceTime) -> f64 {
    naive_to_unix_seconds(time.to_naive_datetime())
}

pub fn unix_seconds_to_datetime(seconds: f64) -> ScatterResult<DateTime<Utc>> {
    if !seconds.is_finite() {
        return Err(ScatterError::InvalidData(
            "time value must be finite".to_owned(),
        ));
    }
    DateTime::<Utc>::from_timestamp_millis((seconds * 1000.0).round() as i64).ok_or_else(|| {
        ScatterError::InvalidData(format!("time value {seconds} is out of range"))
    })
}

#[cfg(test)]
mod tests {
    use super::{race_time_to_unix_seconds, unix_seconds_to_datetime, year_to_unix_seconds};
    use crate::core::RaceTime;

    #[test]
    fn year_instant_is_first_of_january() {
        assert_eq!(year_to_unix_seconds(1970).expect("valid"), 0.0);
        assert_eq!(year_to_unix_seconds(1971).expect("valid"), 31_536_000.0);
    }

    #[test]
    fn race_times_keep_their_spacing() {
        let a = race_time_to_unix_seconds(RaceTime::new(36, 15).expect("valid"));
        let b = race_time_to_unix_seconds(RaceTime::new(36, 50).expect("valid"));
        assert_eq!(b - a, 35.0);
        let back = unix_seconds_to_datetime(a).expect("in range");
        assert_eq!(back.format("%M:%S").to_string(), "36:15");
    }
}
