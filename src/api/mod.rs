mod axis_builder;
mod axis_scale;
mod axis_ticks;
mod chart_config;
mod engine_init;
mod interaction_controller;
mod json_contract;
mod legend_builder;
mod marker_hit_resolver;
mod marker_projection;
mod render_frame_builder;

pub use axis_scale::AxisScale;
pub use chart_config::{
    AxisConfig, ChartVariant, FillRule, LoadConfig, ScaleKind, ScatterConfig, TextStyle,
    TickFormat, TickPolicy,
};
pub use json_contract::{
    RENDER_FRAME_JSON_SCHEMA_V1, RenderFrameJsonContractV1, SCATTER_CONFIG_JSON_SCHEMA_V1,
    ScatterConfigJsonContractV1,
};
pub use marker_projection::{MARKER_CLASS, MarkerProjection, project_markers};

use crate::core::{Dimensions, Record};
use crate::interaction::TooltipState;
use crate::render::{MarkerPrimitive, Renderer};

/// Scatter-plot engine: owns the validated records, the immutable dimensions,
/// both scales and the tooltip state, and hands frames to a `Renderer`.
pub struct ScatterChart<R: Renderer> {
    renderer: R,
    config: ScatterConfig,
    dimensions: Dimensions,
    records: Vec<Record>,
    x_axis: AxisConfig,
    y_axis: AxisConfig,
    x_scale: AxisScale,
    y_scale: AxisScale,
    markers: Vec<MarkerPrimitive>,
    tooltip: Option<TooltipState>,
}

impl<R: Renderer> ScatterChart<R> {
    #[must_use]
    pub fn config(&self) -> &ScatterConfig {
        &self.config
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn x_scale(&self) -> AxisScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> AxisScale {
        self.y_scale
    }

    /// Markers in bounded-area coordinates, in record order.
    #[must_use]
    pub fn markers(&self) -> &[MarkerPrimitive] {
        &self.markers
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
