mod frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::{
    AxisFrame, AxisOrient, AxisTick, LegendEntry, LegendFrame, MarkerPrimitive, RenderFrame,
    TooltipFrame,
};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, TextAnchor, TextPrimitive,
};
pub use svg_backend::{HtmlRenderer, SvgRenderStats, SvgRenderer};

pub(crate) use svg_backend::escape_xml;

use crate::error::ScatterResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` so serialization code
/// stays isolated from scales, records and interaction state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ScatterResult<()>;
}
