use crate::error::ScatterResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// without serializing a document.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_marker_count: usize,
    pub last_axis_count: usize,
    pub last_tick_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ScatterResult<()> {
        frame.validate()?;
        self.last_marker_count = frame.markers.len();
        self.last_axis_count = frame.axes.len();
        self.last_tick_count = frame.axes.iter().map(|axis| axis.ticks.len()).sum();
        self.frames_rendered += 1;
        Ok(())
    }
}
