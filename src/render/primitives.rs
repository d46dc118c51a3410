use serde::{Deserialize, Serialize};

use crate::error::{ScatterError, ScatterResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// CSS `green`.
    pub const GREEN: Self = Self::rgb(0.0, 128.0 / 255.0, 0.0);
    /// CSS `red`.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// CSS `steelblue`.
    pub const STEEL_BLUE: Self = Self::rgb(70.0 / 255.0, 130.0 / 255.0, 180.0 / 255.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ScatterResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ScatterError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// CSS color string, `rgb(..)` when opaque and `rgba(..)` otherwise.
    #[must_use]
    pub fn to_css(self) -> String {
        let to_byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b) = (to_byte(self.red), to_byte(self.green), to_byte(self.blue));
        if self.alpha >= 1.0 {
            format!("rgb({r}, {g}, {b})")
        } else {
            format!("rgba({r}, {g}, {b}, {})", self.alpha.clamp(0.0, 1.0))
        }
    }
}

/// Filled circle marker in bounded-area coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64, fill: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill,
        }
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.distance_to(x, y) <= self.radius
    }

    #[must_use]
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (self.cx - x).hypot(self.cy - y)
    }

    pub fn validate(&self) -> ScatterResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(ScatterError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ScatterError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ScatterResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ScatterError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ScatterError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Axis-aligned filled rectangle, used for legend swatches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
        }
    }

    pub fn validate(self) -> ScatterResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ScatterError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 || self.height < 0.0
        {
            return Err(ScatterError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Horizontal anchor of a label relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    #[must_use]
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub anchor: TextAnchor,
    /// Rotation in degrees around the canvas origin of the enclosing group.
    pub rotation_deg: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        anchor: TextAnchor,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            anchor,
            rotation_deg: 0.0,
        }
    }

    #[must_use]
    pub fn rotated(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    pub fn validate(&self) -> ScatterResult<()> {
        if self.text.is_empty() {
            return Err(ScatterError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.rotation_deg.is_finite() {
            return Err(ScatterError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ScatterError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{CirclePrimitive, Color};

    #[test]
    fn css_names_round_to_bytes() {
        assert_eq!(Color::GREEN.to_css(), "rgb(0, 128, 0)");
        assert_eq!(Color::rgba(1.0, 0.0, 0.0, 0.5).to_css(), "rgba(255, 0, 0, 0.5)");
    }

    #[test]
    fn circle_contains_points_within_radius() {
        let circle = CirclePrimitive::new(10.0, 10.0, 4.0, Color::RED);
        assert!(circle.contains(13.0, 10.0));
        assert!(!circle.contains(15.0, 10.0));
    }
}
