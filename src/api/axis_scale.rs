use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    Accessor, DEFAULT_TIME_TICK_COUNT, LinearScale, Record, TimeScale, extent,
};
use crate::error::{ScatterError, ScatterResult};

use super::{ScaleKind, TickFormat, TickPolicy};

/// One axis mapping, either linear or calendar-time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AxisScale {
    Linear(LinearScale),
    Time(TimeScale),
}

impl AxisScale {
    /// Builds a scale over the extent of `accessor` across `records`.
    pub fn from_records(
        records: &[Record],
        accessor: Accessor,
        kind: ScaleKind,
        range: (f64, f64),
    ) -> ScatterResult<Self> {
        let (min, max) =
            extent(records.iter().map(accessor)).ok_or(ScatterError::EmptyDataset)?;
        if min == max {
            debug!(value = min, "degenerate scale domain, values map to range midpoint");
        }
        Self::new(kind, (min, max), range)
    }

    pub fn new(kind: ScaleKind, domain: (f64, f64), range: (f64, f64)) -> ScatterResult<Self> {
        Ok(match kind {
            ScaleKind::Linear => Self::Linear(LinearScale::new(domain, range)?),
            ScaleKind::Time => Self::Time(TimeScale::new(domain, range)?),
        })
    }

    #[must_use]
    pub fn kind(self) -> ScaleKind {
        match self {
            Self::Linear(_) => ScaleKind::Linear,
            Self::Time(_) => ScaleKind::Time,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        match self {
            Self::Linear(scale) => scale.domain(),
            Self::Time(scale) => scale.domain(),
        }
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        match self {
            Self::Linear(scale) => scale.range(),
            Self::Time(scale) => scale.range(),
        }
    }

    pub fn map(self, value: f64) -> ScatterResult<f64> {
        match self {
            Self::Linear(scale) => scale.map(value),
            Self::Time(scale) => scale.time_to_pixel(value),
        }
    }

    pub fn invert(self, pixel: f64) -> ScatterResult<f64> {
        match self {
            Self::Linear(scale) => scale.invert(pixel),
            Self::Time(scale) => scale.pixel_to_time(pixel),
        }
    }

    /// Tick values for `policy`, in domain units.
    pub fn ticks(self, policy: TickPolicy) -> ScatterResult<Vec<f64>> {
        match (self, policy) {
            (Self::Linear(scale), TickPolicy::Count(count)) => scale.ticks(count),
            (Self::Linear(scale), TickPolicy::DefaultTime) => scale.ticks(DEFAULT_TIME_TICK_COUNT),
            (Self::Linear(_), TickPolicy::Every(_)) => Err(ScatterError::InvalidData(
                "calendar tick intervals need a time scale".to_owned(),
            )),
            (Self::Time(scale), TickPolicy::Count(count)) => scale.ticks(count),
            (Self::Time(scale), TickPolicy::DefaultTime) => scale.ticks(DEFAULT_TIME_TICK_COUNT),
            (Self::Time(scale), TickPolicy::Every(interval)) => scale.ticks_every(interval),
        }
    }

    /// Formats one tick value. `step` is the spacing between ticks and only
    /// drives the precision of plain numbers.
    pub fn format_tick(self, value: f64, format: &TickFormat, step: f64) -> ScatterResult<String> {
        match (self, format) {
            (_, TickFormat::Plain) => Ok(format_plain(value, step)),
            (Self::Linear(_), TickFormat::MinutesSeconds) => Ok(format_minutes_seconds(value)),
            (Self::Linear(_), TickFormat::Pattern(_)) => Err(ScatterError::InvalidData(
                "date patterns need a time scale".to_owned(),
            )),
            (Self::Time(scale), TickFormat::MinutesSeconds) => scale.format(value, "%M:%S"),
            (Self::Time(scale), TickFormat::Pattern(pattern)) => scale.format(value, pattern),
        }
    }
}

fn format_plain(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10()).ceil().max(0.0) as usize
    } else {
        0
    };
    let text = format!("{value:.decimals$}");
    if text.starts_with('-') && text[1..].chars().all(|ch| ch == '0' || ch == '.') {
        text[1..].to_owned()
    } else {
        text
    }
}

fn format_minutes_seconds(total_seconds: f64) -> String {
    let rounded = total_seconds.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    let abs = rounded.abs();
    format!("{sign}{}:{:02}", abs / 60, abs % 60)
}

#[cfg(test)]
mod tests {
    use super::{format_minutes_seconds, format_plain};

    #[test]
    fn plain_numbers_have_no_grouping() {
        assert_eq!(format_plain(1994.0, 2.0), "1994");
        assert_eq!(format_plain(0.25, 0.05), "0.25");
        assert_eq!(format_plain(-0.0, 1.0), "0");
    }

    #[test]
    fn seconds_are_rendered_as_minutes() {
        assert_eq!(format_minutes_seconds(2210.0), "36:50");
        assert_eq!(format_minutes_seconds(65.0), "1:05");
    }
}
