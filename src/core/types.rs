use serde::{Deserialize, Serialize};

/// Host viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(10.0, 10.0, 50.0, 50.0)
    }
}

/// Share of the viewport the square canvas may occupy on each axis.
pub const VIEWPORT_FILL_RATIO: f64 = 0.9;

/// Square canvas geometry plus the bounded drawing area inside the margins.
///
/// Built once from the viewport and passed by value to every later stage;
/// there is no resize path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub bounded_width: f64,
    pub bounded_height: f64,
}

impl Dimensions {
    /// Derives a square canvas from the smaller of the two viewport sides.
    ///
    /// Near-zero viewports produce near-zero (or negative) bounded sizes; they
    /// are not clamped here and get rejected later by frame validation.
    #[must_use]
    pub fn from_viewport(viewport: Viewport) -> Self {
        Self::from_viewport_with_margin(viewport, Margin::default())
    }

    #[must_use]
    pub fn from_viewport_with_margin(viewport: Viewport, margin: Margin) -> Self {
        let side =
            (viewport.width * VIEWPORT_FILL_RATIO).min(viewport.height * VIEWPORT_FILL_RATIO);
        Self::with_margin(side, margin)
    }

    #[must_use]
    pub fn with_margin(side: f64, margin: Margin) -> Self {
        Self {
            width: side,
            height: side,
            margin,
            bounded_width: side - margin.left - margin.right,
            bounded_height: side - margin.top - margin.bottom,
        }
    }

    /// Returns `true` when the bounded area is a real, non-empty rectangle.
    #[must_use]
    pub fn is_drawable(self) -> bool {
        self.bounded_width.is_finite()
            && self.bounded_height.is_finite()
            && self.bounded_width > 0.0
            && self.bounded_height > 0.0
    }
}
