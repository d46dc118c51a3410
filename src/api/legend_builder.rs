use crate::core::Dimensions;
use crate::render::{LegendEntry, LegendFrame, RectPrimitive, TextAnchor, TextPrimitive};

use super::{FillRule, TextStyle};

const SWATCH_PX: f64 = 12.0;
const ROW_HEIGHT_PX: f64 = 20.0;
const CAPTION_GAP_PX: f64 = 6.0;

pub(super) const CLEAN_CAPTION: &str = "No doping allegations";
pub(super) const DOPING_CAPTION: &str = "Riders with doping allegations";

/// Right-aligned legend in the top-right corner of the bounded area, one row
/// per fill category. A constant fill has nothing to explain.
pub(super) fn build_legend(
    fill: FillRule,
    dims: Dimensions,
    style: TextStyle,
) -> Option<LegendFrame> {
    let FillRule::DopingSplit { clean, doping } = fill else {
        return None;
    };

    let entries = [(clean, CLEAN_CAPTION), (doping, DOPING_CAPTION)]
        .into_iter()
        .enumerate()
        .map(|(row, (color, caption))| {
            let top = row as f64 * ROW_HEIGHT_PX;
            LegendEntry {
                swatch: RectPrimitive::new(0.0, top, SWATCH_PX, SWATCH_PX, color),
                caption: TextPrimitive::new(
                    caption,
                    -CAPTION_GAP_PX,
                    top + SWATCH_PX - 2.0,
                    style.legend_font_px,
                    style.color,
                    TextAnchor::End,
                ),
            }
        })
        .collect();

    Some(LegendFrame {
        id: "legend".to_owned(),
        offset: (dims.bounded_width - SWATCH_PX, dims.bounded_height / 2.0),
        entries,
    })
}
