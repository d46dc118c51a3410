use serde::{Deserialize, Serialize};

use crate::error::{ScatterError, ScatterResult};

/// Upper bound on ticks generated for one axis.
pub const MAX_TICKS: usize = 10_000;

/// Linear interpolation between a numeric domain and a pixel range.
///
/// A zero-width domain is accepted: every value then maps to the middle of the
/// range instead of producing `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ScatterResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ScatterError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ScatterError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    pub fn map(self, value: f64) -> ScatterResult<f64> {
        if !value.is_finite() {
            return Err(ScatterError::InvalidData("value must be finite".to_owned()));
        }

        if self.is_degenerate() {
            return Ok(self.range_midpoint());
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn invert(self, pixel: f64) -> ScatterResult<f64> {
        if !pixel.is_finite() {
            return Err(ScatterError::InvalidData("pixel must be finite".to_owned()));
        }

        let range_span = self.range_end - self.range_start;
        if self.is_degenerate() || range_span == 0.0 {
            return Ok(self.domain_start);
        }

        let normalized = (pixel - self.range_start) / range_span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Round tick values covering the domain, approximately `count` of them.
    pub fn ticks(self, count: usize) -> ScatterResult<Vec<f64>> {
        nice_ticks(self.domain_start, self.domain_end, count)
    }

    /// Step between consecutive values returned by [`LinearScale::ticks`].
    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        let (start, stop) = ordered(self.domain_start, self.domain_end);
        match tick_spec(start, stop, count as f64) {
            Some(spec) if spec.increment < 0.0 => -1.0 / spec.increment,
            Some(spec) => spec.increment,
            None => 0.0,
        }
    }

    fn range_midpoint(self) -> f64 {
        (self.range_start + self.range_end) / 2.0
    }
}

/// Min and max of `values` in one pass, ignoring non-finite entries.
pub fn extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TickSpec {
    first: f64,
    last: f64,
    /// Positive: multiply indices. Negative: divide indices by `-increment`.
    increment: f64,
}

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = 1.414_213_562_373_095_1; // sqrt(2)

fn tick_spec(start: f64, stop: f64, count: f64) -> Option<TickSpec> {
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() {
        return None;
    }

    let step = (stop - start) / count;
    if !(step > 0.0) {
        return None;
    }

    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut first, mut last, increment);
    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        first = (start * inc).round();
        last = (stop * inc).round();
        if first / inc < start {
            first += 1.0;
        }
        if last / inc > stop {
            last -= 1.0;
        }
        increment = -inc;
    } else {
        let inc = 10f64.powf(power) * factor;
        first = (start / inc).round();
        last = (stop / inc).round();
        if first * inc < start {
            first += 1.0;
        }
        if last * inc > stop {
            last -= 1.0;
        }
        increment = inc;
    }

    if last < first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }

    Some(TickSpec {
        first,
        last,
        increment,
    })
}

pub(crate) fn nice_ticks(start: f64, stop: f64, count: usize) -> ScatterResult<Vec<f64>> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Ok(Vec::new());
    }
    if start == stop {
        return Ok(vec![start]);
    }

    let reverse = stop < start;
    let (lo, hi) = ordered(start, stop);
    let Some(spec) = tick_spec(lo, hi, count as f64) else {
        return Ok(Vec::new());
    };
    if spec.last < spec.first {
        return Ok(Vec::new());
    }

    let span = spec.last - spec.first;
    if !span.is_finite() || span >= MAX_TICKS as f64 {
        return Err(ScatterError::InvalidData(format!(
            "tick count {count} yields more than {MAX_TICKS} ticks"
        )));
    }
    let n = span as usize + 1;
    let mut ticks: Vec<f64> = (0..n)
        .map(|offset| {
            let index = spec.first + offset as f64;
            if spec.increment < 0.0 {
                index / -spec.increment
            } else {
                index * spec.increment
            }
        })
        .collect();
    if reverse {
        ticks.reverse();
    }
    Ok(ticks)
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::{LinearScale, MAX_TICKS, extent, nice_ticks};

    #[test]
    fn year_domain_gets_even_ticks() {
        let ticks = nice_ticks(1994.0, 2015.0, 12).expect("ticks");
        assert_eq!(ticks.first().copied(), Some(1994.0));
        assert_eq!(ticks.last().copied(), Some(2014.0));
        assert!(ticks.windows(2).all(|pair| pair[1] - pair[0] == 2.0));
    }

    #[test]
    fn fractional_steps_are_computed_by_division() {
        let ticks = nice_ticks(0.0, 1.0, 5).expect("ticks");
        assert_eq!(ticks, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn oversized_tick_count_is_an_error() {
        assert!(nice_ticks(1994.0, 2015.0, usize::MAX).is_err());
        assert!(nice_ticks(0.0, 1.0, MAX_TICKS * 10).is_err());
    }

    #[test]
    fn extent_skips_non_finite_values() {
        let values = [3.0, f64::NAN, -1.0, 7.5];
        assert_eq!(extent(values), Some((-1.0, 7.5)));
        assert_eq!(extent(Vec::<f64>::new()), None);
    }

    #[test]
    fn tick_step_reports_increment() {
        let scale = LinearScale::new((1994.0, 2015.0), (0.0, 400.0)).expect("valid scale");
        assert_eq!(scale.tick_step(12), 2.0);
    }
}
