use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Record;
use crate::render::escape_xml;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TooltipVisibility {
    #[default]
    Hidden,
    Visible,
}

/// Pointer events the tooltip reacts to, independent of how the host
/// delivers them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Enter {
        marker: usize,
        page_x: f64,
        page_y: f64,
    },
    Leave,
}

/// Tooltip placement and fade tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
    /// Subtracted from the pointer's y coordinate.
    pub vertical_offset_px: f64,
    pub fade_ms: u64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            vertical_offset_px: 28.0,
            fade_ms: 200,
        }
    }
}

/// Cosmetic fade recorded for the most recent transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FadeTransition {
    pub target: TooltipVisibility,
    pub duration_ms: u64,
}

/// Two-state tooltip machine: `Hidden` (initial) and `Visible`.
///
/// Events are applied one at a time; each call fully updates the state before
/// the next event is considered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipState {
    config: TooltipConfig,
    visibility: TooltipVisibility,
    hovered: Option<usize>,
    left: f64,
    top: f64,
    html: String,
    attributes: IndexMap<String, String>,
    last_transition: Option<FadeTransition>,
}

impl TooltipState {
    #[must_use]
    pub fn new(config: TooltipConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> TooltipConfig {
        self.config
    }

    #[must_use]
    pub fn visibility(&self) -> TooltipVisibility {
        self.visibility
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility == TooltipVisibility::Visible
    }

    #[must_use]
    pub fn hovered_marker(&self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.left, self.top)
    }

    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    #[must_use]
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    #[must_use]
    pub fn last_transition(&self) -> Option<FadeTransition> {
        self.last_transition
    }

    /// `hidden -> visible`: positions the tooltip at the pointer and fills it
    /// from the entered record.
    pub fn on_pointer_enter(&mut self, marker: usize, record: &Record, page_x: f64, page_y: f64) {
        self.visibility = TooltipVisibility::Visible;
        self.hovered = Some(marker);
        self.left = page_x;
        self.top = page_y - self.config.vertical_offset_px;
        self.html = format!(
            "Year: {}<br> Time: {}",
            record.year(),
            escape_xml(&record.time().to_string())
        );
        self.attributes.clear();
        self.attributes
            .insert("data-year".to_owned(), record.year().to_string());
        self.attributes
            .insert("data-yvalue".to_owned(), record.time().to_string());
        self.last_transition = Some(self.fade_to(TooltipVisibility::Visible));
    }

    /// `visible -> hidden`. Content and position are kept for the fade out.
    pub fn on_pointer_leave(&mut self) {
        self.visibility = TooltipVisibility::Hidden;
        self.hovered = None;
        self.last_transition = Some(self.fade_to(TooltipVisibility::Hidden));
    }

    fn fade_to(&self, target: TooltipVisibility) -> FadeTransition {
        FadeTransition {
            target,
            duration_ms: self.config.fade_ms,
        }
    }
}

/// ISO-8601 instant used for `data-yvalue` marker attributes.
#[must_use]
pub fn race_time_attribute(record: &Record) -> String {
    record
        .time()
        .to_naive_datetime()
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}
