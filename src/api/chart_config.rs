use serde::{Deserialize, Serialize};

use crate::core::{MAX_TICKS, Margin, MalformedRecordPolicy, RecordField, TimeInterval};
use crate::error::{ScatterError, ScatterResult};
use crate::interaction::TooltipConfig;
use crate::render::Color;

/// The two chart layouts the engine knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChartVariant {
    /// Year (linear) against race time (time scale), colored by doping, with tooltip.
    #[default]
    DopingScatter,
    /// Year instant (time scale) against race seconds (linear), constant color.
    TimeSeries,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleKind {
    Linear,
    Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickPolicy {
    /// Approximately this many round-valued ticks.
    Count(usize),
    /// One tick per calendar interval (time scales only).
    Every(TimeInterval),
    /// Standard interval closest to a tenth of the domain (time scales only).
    DefaultTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickFormat {
    /// Plain number, no grouping separators, precision from the tick step.
    Plain,
    /// `chrono` strftime pattern (time scales only).
    Pattern(String),
    /// `MM:SS` for time scales, `M:SS` from a number of seconds for linear ones.
    MinutesSeconds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub id: String,
    pub field: RecordField,
    pub scale: ScaleKind,
    pub ticks: TickPolicy,
    pub format: TickFormat,
    pub label: String,
    /// Labels closer than this along the axis are thinned out. `0.0` keeps every tick.
    pub min_tick_spacing_px: f64,
}

impl AxisConfig {
    pub fn validate(&self) -> ScatterResult<()> {
        if self.id.trim().is_empty() {
            return Err(ScatterError::InvalidData(
                "axis id must not be empty".to_owned(),
            ));
        }
        if !self.min_tick_spacing_px.is_finite() || self.min_tick_spacing_px < 0.0 {
            return Err(ScatterError::InvalidData(format!(
                "axis `{}` min tick spacing must be finite and >= 0",
                self.id
            )));
        }
        match (self.scale, self.ticks) {
            (_, TickPolicy::Count(0)) => Err(ScatterError::InvalidData(format!(
                "axis `{}` tick count must be > 0",
                self.id
            ))),
            (_, TickPolicy::Count(count)) if count > MAX_TICKS => {
                Err(ScatterError::InvalidData(format!(
                    "axis `{}` tick count must be <= {MAX_TICKS}",
                    self.id
                )))
            }
            (ScaleKind::Linear, TickPolicy::Every(_)) => Err(ScatterError::InvalidData(format!(
                "axis `{}` uses a calendar tick interval on a linear scale",
                self.id
            ))),
            (
                ScaleKind::Time,
                TickPolicy::Every(TimeInterval::Months(step) | TimeInterval::Years(step)),
            ) if step == 0 || i32::try_from(step).is_err() => {
                Err(ScatterError::InvalidData(format!(
                    "axis `{}` calendar tick step must be in 1..={}",
                    self.id,
                    i32::MAX
                )))
            }
            (ScaleKind::Time, TickPolicy::Every(TimeInterval::Seconds(0))) => {
                Err(ScatterError::InvalidData(format!(
                    "axis `{}` tick interval must be > 0",
                    self.id
                )))
            }
            _ => Ok(()),
        }?;
        if self.scale == ScaleKind::Linear && matches!(self.format, TickFormat::Pattern(_)) {
            return Err(ScatterError::InvalidData(format!(
                "axis `{}` uses a date pattern on a linear scale",
                self.id
            )));
        }
        Ok(())
    }
}

/// Marker fill rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillRule {
    /// `clean` for records without a doping allegation, `doping` otherwise.
    DopingSplit { clean: Color, doping: Color },
    Constant(Color),
}

impl FillRule {
    #[must_use]
    pub fn fill_for(self, record: &crate::core::Record) -> Color {
        match self {
            Self::DopingSplit { clean, doping } => {
                if record.is_clean() {
                    clean
                } else {
                    doping
                }
            }
            Self::Constant(color) => color,
        }
    }

    pub fn validate(self) -> ScatterResult<()> {
        match self {
            Self::DopingSplit { clean, doping } => {
                clean.validate()?;
                doping.validate()
            }
            Self::Constant(color) => color.validate(),
        }
    }
}

/// Dataset fetch behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    pub timeout_ms: u64,
    /// Extra attempts after the first failed fetch.
    pub retries: u32,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            retries: 1,
        }
    }
}

/// Text sizing shared by axes and the legend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub tick_font_px: f64,
    /// `1.4em` at a 16px root.
    pub axis_label_font_px: f64,
    pub legend_font_px: f64,
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            tick_font_px: 10.0,
            axis_label_font_px: 22.4,
            legend_font_px: 12.0,
            color: Color::BLACK,
        }
    }
}

/// Full chart configuration.
///
/// Optional sections fall back to the defaults of `variant`, so a JSON file
/// only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    pub variant: ChartVariant,
    pub margin: Margin,
    pub marker_radius: f64,
    pub fill: Option<FillRule>,
    pub x_axis: Option<AxisConfig>,
    pub y_axis: Option<AxisConfig>,
    pub tooltip: Option<TooltipConfig>,
    pub legend: Option<bool>,
    pub text: TextStyle,
    pub record_policy: MalformedRecordPolicy,
    pub load: LoadConfig,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self::for_variant(ChartVariant::default())
    }
}

impl ScatterConfig {
    #[must_use]
    pub fn for_variant(variant: ChartVariant) -> Self {
        Self {
            variant,
            margin: Margin::default(),
            marker_radius: 4.0,
            fill: None,
            x_axis: None,
            y_axis: None,
            tooltip: None,
            legend: None,
            text: TextStyle::default(),
            record_policy: MalformedRecordPolicy::default(),
            load: LoadConfig::default(),
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: FillRule) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn with_record_policy(mut self, policy: MalformedRecordPolicy) -> Self {
        self.record_policy = policy;
        self
    }

    #[must_use]
    pub fn fill_rule(&self) -> FillRule {
        self.fill.unwrap_or(match self.variant {
            ChartVariant::DopingScatter => FillRule::DopingSplit {
                clean: Color::GREEN,
                doping: Color::RED,
            },
            ChartVariant::TimeSeries => FillRule::Constant(Color::STEEL_BLUE),
        })
    }

    #[must_use]
    pub fn x_axis(&self) -> AxisConfig {
        self.x_axis.clone().unwrap_or_else(|| match self.variant {
            ChartVariant::DopingScatter => AxisConfig {
                id: "x-axis".to_owned(),
                field: RecordField::Year,
                scale: ScaleKind::Linear,
                ticks: TickPolicy::Count(12),
                format: TickFormat::Plain,
                label: "Year".to_owned(),
                min_tick_spacing_px: 0.0,
            },
            ChartVariant::TimeSeries => AxisConfig {
                id: "x-axis".to_owned(),
                field: RecordField::YearInstant,
                scale: ScaleKind::Time,
                ticks: TickPolicy::DefaultTime,
                format: TickFormat::Pattern("%Y".to_owned()),
                label: "Year".to_owned(),
                min_tick_spacing_px: 0.0,
            },
        })
    }

    #[must_use]
    pub fn y_axis(&self) -> AxisConfig {
        self.y_axis.clone().unwrap_or_else(|| match self.variant {
            ChartVariant::DopingScatter => AxisConfig {
                id: "y-axis".to_owned(),
                field: RecordField::RaceTime,
                scale: ScaleKind::Time,
                ticks: TickPolicy::Every(TimeInterval::Seconds(15)),
                format: TickFormat::MinutesSeconds,
                label: "Time In Minutes".to_owned(),
                min_tick_spacing_px: 0.0,
            },
            ChartVariant::TimeSeries => AxisConfig {
                id: "y-axis".to_owned(),
                field: RecordField::RaceSeconds,
                scale: ScaleKind::Linear,
                ticks: TickPolicy::Count(12),
                format: TickFormat::MinutesSeconds,
                label: "Time In Minutes".to_owned(),
                min_tick_spacing_px: 0.0,
            },
        })
    }

    /// Tooltip tuning, or `None` when the variant has no tooltip.
    #[must_use]
    pub fn tooltip_config(&self) -> Option<TooltipConfig> {
        match self.variant {
            ChartVariant::DopingScatter => Some(self.tooltip.unwrap_or_default()),
            ChartVariant::TimeSeries => self.tooltip,
        }
    }

    #[must_use]
    pub fn legend_enabled(&self) -> bool {
        self.legend
            .unwrap_or(self.variant == ChartVariant::DopingScatter)
    }

    pub fn validate(&self) -> ScatterResult<()> {
        if !self.marker_radius.is_finite() || self.marker_radius <= 0.0 {
            return Err(ScatterError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        for (side, value) in [
            ("top", self.margin.top),
            ("right", self.margin.right),
            ("bottom", self.margin.bottom),
            ("left", self.margin.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScatterError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("tick_font_px", self.text.tick_font_px),
            ("axis_label_font_px", self.text.axis_label_font_px),
            ("legend_font_px", self.text.legend_font_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ScatterError::InvalidData(format!(
                    "text `{name}` must be finite and > 0"
                )));
            }
        }
        if let Some(tooltip) = self.tooltip {
            if !tooltip.vertical_offset_px.is_finite() {
                return Err(ScatterError::InvalidData(
                    "tooltip offset must be finite".to_owned(),
                ));
            }
        }
        if self.load.timeout_ms == 0 {
            return Err(ScatterError::InvalidData(
                "load timeout must be > 0".to_owned(),
            ));
        }
        self.text.color.validate()?;
        self.fill_rule().validate()?;
        self.x_axis().validate()?;
        self.y_axis().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartVariant, FillRule, ScaleKind, ScatterConfig, TickPolicy};
    use crate::core::{RaceTime, Record};
    use crate::render::Color;

    #[test]
    fn doping_variant_defaults() {
        let config = ScatterConfig::default();
        assert_eq!(config.x_axis().scale, ScaleKind::Linear);
        assert_eq!(config.x_axis().ticks, TickPolicy::Count(12));
        assert_eq!(config.y_axis().scale, ScaleKind::Time);
        assert!(config.tooltip_config().is_some());
        assert!(config.legend_enabled());
        config.validate().expect("defaults are valid");
    }

    #[test]
    fn time_series_variant_defaults() {
        let config = ScatterConfig::for_variant(ChartVariant::TimeSeries);
        assert_eq!(config.x_axis().scale, ScaleKind::Time);
        assert_eq!(config.y_axis().ticks, TickPolicy::Count(12));
        assert!(config.tooltip_config().is_none());
        assert!(matches!(config.fill_rule(), FillRule::Constant(_)));
        config.validate().expect("defaults are valid");
    }

    #[test]
    fn doping_split_picks_color_by_allegation() {
        let rule = ScatterConfig::default().fill_rule();
        let time = RaceTime::new(37, 0).expect("valid");
        assert_eq!(rule.fill_for(&Record::new(2000, time, "")), Color::GREEN);
        assert_eq!(rule.fill_for(&Record::new(2000, time, "EPO")), Color::RED);
    }
}
