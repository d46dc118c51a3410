use tracing::trace;

use crate::core::Dimensions;
use crate::error::ScatterResult;
use crate::render::{AxisFrame, AxisOrient, AxisTick, LinePrimitive, TextAnchor, TextPrimitive};

use super::axis_ticks::{select_ticks_with_min_spacing, tick_step_hint_from_values};
use super::{AxisConfig, AxisScale, TextStyle};

pub(super) const TICK_SIZE_PX: f64 = 6.0;
pub(super) const TICK_PADDING_PX: f64 = 3.0;
const AXIS_STROKE_PX: f64 = 1.0;
/// Baseline shift that visually centers bottom-axis labels below the tick (0.71em).
const BOTTOM_LABEL_BASELINE_EM: f64 = 0.71;
/// Baseline shift that vertically centers left-axis labels on the tick (0.32em).
const LEFT_LABEL_BASELINE_EM: f64 = 0.32;

/// Builds the bottom (x) axis guide, translated to the bottom of the bounded area.
pub(super) fn build_bottom_axis(
    config: &AxisConfig,
    scale: AxisScale,
    dims: Dimensions,
    style: TextStyle,
) -> ScatterResult<AxisFrame> {
    let ticks = resolve_ticks(config, scale)?;
    let (range_start, range_end) = scale.range();

    let mut tick_lines = Vec::with_capacity(ticks.len());
    let mut tick_labels = Vec::with_capacity(ticks.len());
    for tick in &ticks {
        tick_lines.push(LinePrimitive::new(
            tick.position,
            0.0,
            tick.position,
            TICK_SIZE_PX,
            AXIS_STROKE_PX,
            style.color,
        ));
        tick_labels.push(TextPrimitive::new(
            tick.label.clone(),
            tick.position,
            TICK_SIZE_PX + TICK_PADDING_PX + style.tick_font_px * BOTTOM_LABEL_BASELINE_EM,
            style.tick_font_px,
            style.color,
            TextAnchor::Middle,
        ));
    }

    let label = TextPrimitive::new(
        config.label.clone(),
        dims.bounded_width / 2.0,
        dims.margin.bottom - 10.0,
        style.axis_label_font_px,
        style.color,
        TextAnchor::Middle,
    );

    Ok(AxisFrame {
        id: config.id.clone(),
        orient: AxisOrient::Bottom,
        offset: (0.0, dims.bounded_height),
        domain_line: LinePrimitive::new(
            range_start,
            0.0,
            range_end,
            0.0,
            AXIS_STROKE_PX,
            style.color,
        ),
        ticks,
        tick_lines,
        tick_labels,
        label,
    })
}

/// Builds the left (y) axis guide with a label rotated -90°.
pub(super) fn build_left_axis(
    config: &AxisConfig,
    scale: AxisScale,
    dims: Dimensions,
    style: TextStyle,
) -> ScatterResult<AxisFrame> {
    let ticks = resolve_ticks(config, scale)?;
    let (range_start, range_end) = scale.range();

    let mut tick_lines = Vec::with_capacity(ticks.len());
    let mut tick_labels = Vec::with_capacity(ticks.len());
    for tick in &ticks {
        tick_lines.push(LinePrimitive::new(
            -TICK_SIZE_PX,
            tick.position,
            0.0,
            tick.position,
            AXIS_STROKE_PX,
            style.color,
        ));
        tick_labels.push(TextPrimitive::new(
            tick.label.clone(),
            -(TICK_SIZE_PX + TICK_PADDING_PX),
            tick.position + style.tick_font_px * LEFT_LABEL_BASELINE_EM,
            style.tick_font_px,
            style.color,
            TextAnchor::End,
        ));
    }

    let label = TextPrimitive::new(
        config.label.clone(),
        -dims.bounded_height / 2.0,
        -dims.margin.left + 10.0,
        style.axis_label_font_px,
        style.color,
        TextAnchor::Middle,
    )
    .rotated(-90.0);

    Ok(AxisFrame {
        id: config.id.clone(),
        orient: AxisOrient::Left,
        offset: (0.0, 0.0),
        domain_line: LinePrimitive::new(
            0.0,
            range_start,
            0.0,
            range_end,
            AXIS_STROKE_PX,
            style.color,
        ),
        ticks,
        tick_lines,
        tick_labels,
        label,
    })
}

fn resolve_ticks(config: &AxisConfig, scale: AxisScale) -> ScatterResult<Vec<AxisTick>> {
    let values = scale.ticks(config.ticks)?;
    let step = tick_step_hint_from_values(&values);

    let mut ticks = Vec::with_capacity(values.len());
    for value in values {
        ticks.push(AxisTick {
            value,
            position: scale.map(value)?,
            label: scale.format_tick(value, &config.format, step)?,
        });
    }

    let generated = ticks.len();
    let ticks = select_ticks_with_min_spacing(ticks, config.min_tick_spacing_px);
    trace!(
        axis = %config.id,
        generated,
        kept = ticks.len(),
        "resolved axis ticks"
    );
    Ok(ticks)
}
