use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Dimensions;
use crate::error::{ScatterError, ScatterResult};
use crate::render::{CirclePrimitive, LinePrimitive, RectPrimitive, TextPrimitive};

/// One data marker plus the DOM-style metadata attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerPrimitive {
    /// Position of the source record in the dataset.
    pub index: usize,
    pub circle: CirclePrimitive,
    pub class_name: String,
    /// `IndexMap` keeps attribute order stable across renders.
    pub attributes: IndexMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrient {
    Bottom,
    Left,
}

/// Tick value, its pixel position along the axis and its formatted label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub position: f64,
    pub label: String,
}

/// Axis guide in axis-group coordinates; `offset` translates the group
/// inside the bounded area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisFrame {
    pub id: String,
    pub orient: AxisOrient,
    pub offset: (f64, f64),
    pub domain_line: LinePrimitive,
    pub ticks: Vec<AxisTick>,
    pub tick_lines: Vec<LinePrimitive>,
    pub tick_labels: Vec<TextPrimitive>,
    pub label: TextPrimitive,
}

impl AxisFrame {
    pub fn validate(&self) -> ScatterResult<()> {
        if !self.offset.0.is_finite() || !self.offset.1.is_finite() {
            return Err(ScatterError::InvalidData(format!(
                "axis `{}` offset must be finite",
                self.id
            )));
        }
        if self.tick_lines.len() != self.ticks.len() || self.tick_labels.len() != self.ticks.len()
        {
            return Err(ScatterError::InvalidData(format!(
                "axis `{}` has mismatched tick primitives",
                self.id
            )));
        }
        self.domain_line.validate()?;
        for line in &self.tick_lines {
            line.validate()?;
        }
        for text in &self.tick_labels {
            text.validate()?;
        }
        self.label.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub swatch: RectPrimitive,
    pub caption: TextPrimitive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendFrame {
    pub id: String,
    pub offset: (f64, f64),
    pub entries: Vec<LegendEntry>,
}

/// Floating tooltip placed in page coordinates, outside the chart svg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipFrame {
    pub id: String,
    pub visible: bool,
    pub left: f64,
    pub top: f64,
    pub html: String,
    pub attributes: IndexMap<String, String>,
    pub fade_ms: u64,
}

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub dimensions: Dimensions,
    pub markers: Vec<MarkerPrimitive>,
    pub axes: Vec<AxisFrame>,
    pub legend: Option<LegendFrame>,
    pub tooltip: Option<TooltipFrame>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            markers: Vec::new(),
            axes: Vec::new(),
            legend: None,
            tooltip: None,
        }
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisFrame) -> Self {
        self.axes.push(axis);
        self
    }

    #[must_use]
    pub fn axis(&self, id: &str) -> Option<&AxisFrame> {
        self.axes.iter().find(|axis| axis.id == id)
    }

    pub fn validate(&self) -> ScatterResult<()> {
        let dims = self.dimensions;
        if !dims.width.is_finite() || !dims.height.is_finite() || dims.width <= 0.0 {
            return Err(ScatterError::InvalidViewport {
                width: dims.width,
                height: dims.height,
            });
        }
        if !dims.is_drawable() {
            return Err(ScatterError::InvalidData(format!(
                "bounded area must be positive, got {}x{}",
                dims.bounded_width, dims.bounded_height
            )));
        }

        for marker in &self.markers {
            marker.circle.validate()?;
        }
        for axis in &self.axes {
            axis.validate()?;
        }
        if let Some(legend) = &self.legend {
            for entry in &legend.entries {
                entry.swatch.validate()?;
                entry.caption.validate()?;
            }
        }
        if let Some(tooltip) = &self.tooltip {
            if !tooltip.left.is_finite() || !tooltip.top.is_finite() {
                return Err(ScatterError::InvalidData(
                    "tooltip position must be finite".to_owned(),
                ));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.axes.is_empty()
    }
}
