use tracing::debug;

use crate::error::ScatterResult;
use crate::render::{RenderFrame, Renderer, TooltipFrame};

use super::ScatterChart;
use super::axis_builder::{build_bottom_axis, build_left_axis};
use super::legend_builder::build_legend;

pub(super) const TOOLTIP_ID: &str = "tooltip";

impl<R: Renderer> ScatterChart<R> {
    /// Materializes the full scene: markers, both axis guides, the legend and
    /// the current tooltip state.
    pub fn build_render_frame(&self) -> ScatterResult<RenderFrame> {
        let style = self.config.text;
        let x_axis = build_bottom_axis(&self.x_axis, self.x_scale, self.dimensions, style)?;
        let y_axis = build_left_axis(&self.y_axis, self.y_scale, self.dimensions, style)?;

        let mut frame = RenderFrame::new(self.dimensions).with_axis(x_axis).with_axis(y_axis);
        frame.markers = self.markers.clone();
        if self.config.legend_enabled() {
            frame.legend = build_legend(self.config.fill_rule(), self.dimensions, style);
        }
        frame.tooltip = self.tooltip.as_ref().map(|tooltip| {
            let (left, top) = tooltip.position();
            TooltipFrame {
                id: TOOLTIP_ID.to_owned(),
                visible: tooltip.is_visible(),
                left,
                top,
                html: tooltip.html().to_owned(),
                attributes: tooltip.attributes().clone(),
                fade_ms: tooltip.config().fade_ms,
            }
        });

        Ok(frame)
    }

    /// Builds a frame and hands it to the renderer. All-or-nothing: the
    /// renderer sees nothing when any stage fails.
    pub fn render(&mut self) -> ScatterResult<()> {
        let frame = self.build_render_frame()?;
        debug!(
            markers = frame.markers.len(),
            axes = frame.axes.len(),
            "rendering frame"
        );
        self.renderer.render(&frame)
    }
}
