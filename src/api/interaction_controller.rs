use tracing::trace;

use crate::error::{ScatterError, ScatterResult};
use crate::interaction::{PointerEvent, TooltipState, TooltipVisibility};
use crate::render::Renderer;

use super::ScatterChart;

impl<R: Renderer> ScatterChart<R> {
    /// Tooltip state, or `None` when the variant has no tooltip.
    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipState> {
        self.tooltip.as_ref()
    }

    #[must_use]
    pub fn tooltip_visibility(&self) -> TooltipVisibility {
        self.tooltip
            .as_ref()
            .map_or(TooltipVisibility::Hidden, TooltipState::visibility)
    }

    /// Applies one pointer event to the tooltip machine.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> ScatterResult<()> {
        match event {
            PointerEvent::Enter {
                marker,
                page_x,
                page_y,
            } => self.pointer_enter(marker, page_x, page_y),
            PointerEvent::Leave => {
                self.pointer_leave();
                Ok(())
            }
        }
    }

    /// Pointer entered marker `marker` at page coordinates `(page_x, page_y)`.
    pub fn pointer_enter(&mut self, marker: usize, page_x: f64, page_y: f64) -> ScatterResult<()> {
        if !page_x.is_finite() || !page_y.is_finite() {
            return Err(ScatterError::InvalidData(
                "pointer position must be finite".to_owned(),
            ));
        }
        let record = self.records.get(marker).ok_or_else(|| {
            ScatterError::InvalidData(format!(
                "marker index {marker} out of range for {} records",
                self.records.len()
            ))
        })?;
        let Some(tooltip) = self.tooltip.as_mut() else {
            return Ok(());
        };

        trace!(marker, page_x, page_y, "pointer enter");
        tooltip.on_pointer_enter(marker, record, page_x, page_y);
        Ok(())
    }

    pub fn pointer_leave(&mut self) {
        if let Some(tooltip) = self.tooltip.as_mut() {
            trace!(marker = ?tooltip.hovered_marker(), "pointer leave");
            tooltip.on_pointer_leave();
        }
    }

    /// Converts raw pointer movement into enter/leave events by hit-testing
    /// markers, and returns the events that were applied.
    ///
    /// Coordinates are canvas coordinates; the tooltip is positioned with the
    /// same values, which assumes the canvas sits at the page origin.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ScatterResult<Vec<PointerEvent>> {
        let hovered = self.tooltip.as_ref().and_then(TooltipState::hovered_marker);
        let target = self.marker_at(x, y);
        if hovered == target || self.tooltip.is_none() {
            return Ok(Vec::new());
        }

        let mut events = Vec::with_capacity(2);
        if hovered.is_some() {
            events.push(PointerEvent::Leave);
        }
        if let Some(marker) = target {
            events.push(PointerEvent::Enter {
                marker,
                page_x: x,
                page_y: y,
            });
        }
        for event in &events {
            self.handle_pointer_event(*event)?;
        }
        Ok(events)
    }
}
