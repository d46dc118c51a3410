use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::core::scale::MAX_TICKS;
use crate::core::primitives::{naive_to_unix_seconds, unix_seconds_to_datetime};
use crate::error::{ScatterError, ScatterResult};

const SECOND: u64 = 1;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;
const MONTH_APPROX: u64 = 30 * DAY;
const YEAR_APPROX: u64 = 365 * DAY;

/// Calendar interval between consecutive time ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeInterval {
    /// Fixed duration, aligned to multiples of itself since the unix epoch.
    Seconds(u64),
    /// Calendar months, aligned to months whose index is a multiple of the step.
    Months(u32),
    /// Calendar years, aligned to years that are multiples of the step.
    Years(u32),
}

impl TimeInterval {
    fn approx_seconds(self) -> f64 {
        match self {
            Self::Seconds(step) => step as f64,
            Self::Months(step) => (u64::from(step) * MONTH_APPROX) as f64,
            Self::Years(step) => (u64::from(step) * YEAR_APPROX) as f64,
        }
    }
}

const STANDARD_INTERVALS: [TimeInterval; 17] = [
    TimeInterval::Seconds(SECOND),
    TimeInterval::Seconds(5 * SECOND),
    TimeInterval::Seconds(15 * SECOND),
    TimeInterval::Seconds(30 * SECOND),
    TimeInterval::Seconds(MINUTE),
    TimeInterval::Seconds(5 * MINUTE),
    TimeInterval::Seconds(15 * MINUTE),
    TimeInterval::Seconds(30 * MINUTE),
    TimeInterval::Seconds(HOUR),
    TimeInterval::Seconds(3 * HOUR),
    TimeInterval::Seconds(6 * HOUR),
    TimeInterval::Seconds(12 * HOUR),
    TimeInterval::Seconds(DAY),
    TimeInterval::Seconds(2 * DAY),
    TimeInterval::Seconds(WEEK),
    TimeInterval::Months(1),
    TimeInterval::Months(3),
];

/// Default number of ticks requested from a time axis.
pub const DEFAULT_TIME_TICK_COUNT: usize = 10;

/// Scale over calendar instants expressed as unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ScatterResult<Self> {
        Ok(Self {
            linear: LinearScale::new(domain, range)?,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.linear.is_degenerate()
    }

    pub fn time_to_pixel(self, time: f64) -> ScatterResult<f64> {
        self.linear.map(time)
    }

    pub fn pixel_to_time(self, pixel: f64) -> ScatterResult<f64> {
        self.linear.invert(pixel)
    }

    /// Picks the standard interval whose length is closest to `span / count`.
    #[must_use]
    pub fn default_interval(self, count: usize) -> TimeInterval {
        let (start, end) = self.ordered_domain();
        let target = (end - start) / count.max(1) as f64;

        let Some(index) = STANDARD_INTERVALS
            .iter()
            .position(|interval| interval.approx_seconds() >= target)
        else {
            let start_year = year_of(start).unwrap_or(1970);
            let end_year = year_of(end).unwrap_or(start_year);
            let step = LinearScale::new((f64::from(start_year), f64::from(end_year)), (0.0, 1.0))
                .map(|scale| scale.tick_step(count))
                .unwrap_or(1.0);
            return TimeInterval::Years(step.round().max(1.0) as u32);
        };

        if index == 0 {
            return STANDARD_INTERVALS[0];
        }
        let below = STANDARD_INTERVALS[index - 1];
        let above = STANDARD_INTERVALS[index];
        if target / below.approx_seconds() < above.approx_seconds() / target {
            below
        } else {
            above
        }
    }

    /// Ticks for the default time-axis policy.
    pub fn ticks(self, count: usize) -> ScatterResult<Vec<f64>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        self.ticks_every(self.default_interval(count))
    }

    /// Every instant inside the domain that falls on `interval`.
    pub fn ticks_every(self, interval: TimeInterval) -> ScatterResult<Vec<f64>> {
        let (start, end) = self.ordered_domain();
        match interval {
            TimeInterval::Seconds(step) => fixed_step_ticks(start, end, step),
            TimeInterval::Months(step) => month_ticks(start, end, step),
            TimeInterval::Years(step) => year_ticks(start, end, step),
        }
    }

    /// Formats an instant with a `chrono` strftime pattern.
    pub fn format(self, time: f64, pattern: &str) -> ScatterResult<String> {
        Ok(unix_seconds_to_datetime(time)?.format(pattern).to_string())
    }

    fn ordered_domain(self) -> (f64, f64) {
        let (a, b) = self.domain();
        if a <= b { (a, b) } else { (b, a) }
    }
}

fn fixed_step_ticks(start: f64, end: f64, step: u64) -> ScatterResult<Vec<f64>> {
    if step == 0 {
        return Err(ScatterError::InvalidData(
            "time tick interval must be > 0".to_owned(),
        ));
    }
    let step = step as f64;
    if (end - start) / step > MAX_TICKS as f64 {
        return Err(ScatterError::InvalidData(format!(
            "time tick interval of {step}s yields more than {MAX_TICKS} ticks"
        )));
    }
    let mut ticks = Vec::new();
    let mut index = (start / step).ceil();
    while index * step <= end {
        ticks.push(index * step);
        index += 1.0;
    }
    Ok(ticks)
}

fn month_ticks(start: f64, end: f64, step: u32) -> ScatterResult<Vec<f64>> {
    if step == 0 {
        return Err(ScatterError::InvalidData(
            "month tick interval must be > 0".to_owned(),
        ));
    }
    let first = unix_seconds_to_datetime(start)?.date_naive();
    let mut cursor = NaiveDate::from_ymd_opt(first.year(), first.month(), 1)
        .ok_or_else(|| ScatterError::InvalidData("month tick start out of range".to_owned()))?;

    let mut ticks = Vec::new();
    loop {
        let instant = midnight_seconds(cursor)?;
        if instant > end {
            break;
        }
        if instant >= start && cursor.month0() % step == 0 {
            ticks.push(instant);
        }
        cursor = match cursor.checked_add_months(Months::new(1)) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(ticks)
}

fn year_ticks(start: f64, end: f64, step: u32) -> ScatterResult<Vec<f64>> {
    if step == 0 {
        return Err(ScatterError::InvalidData(
            "year tick interval must be > 0".to_owned(),
        ));
    }
    let step = i32::try_from(step).map_err(|_| {
        ScatterError::InvalidData(format!("year tick interval {step} is out of range"))
    })?;
    let first_year = unix_seconds_to_datetime(start)?.year();
    let last_year = unix_seconds_to_datetime(end)?.year();

    let mut ticks = Vec::new();
    let mut year = first_year.div_euclid(step) * step;
    while year <= last_year {
        if let Some(date) = NaiveDate::from_ymd_opt(year, 1, 1) {
            let instant = midnight_seconds(date)?;
            if instant >= start && instant <= end {
                ticks.push(instant);
            }
        }
        year = match year.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(ticks)
}

fn midnight_seconds(date: NaiveDate) -> ScatterResult<f64> {
    date.and_hms_opt(0, 0, 0)
        .map(naive_to_unix_seconds)
        .ok_or_else(|| ScatterError::InvalidData(format!("no midnight on {date}")))
}

fn year_of(seconds: f64) -> Option<i32> {
    unix_seconds_to_datetime(seconds).ok().map(|time| time.year())
}
