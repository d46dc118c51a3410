use std::fmt::Write as _;

use crate::error::{ScatterError, ScatterResult};
use crate::render::{
    AxisFrame, LegendFrame, LinePrimitive, MarkerPrimitive, RenderFrame, Renderer, TextPrimitive,
    TooltipFrame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub markers_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Serializes frames as standalone `<svg>` documents.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document produced by the most recent render.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ScatterResult<()> {
        frame.validate()?;
        let mut stats = SvgRenderStats::default();
        let mut out = String::new();
        write_svg(&mut out, frame, &mut stats).map_err(map_fmt_error)?;
        self.document = out;
        self.last_stats = stats;
        Ok(())
    }
}

/// Serializes frames as an HTML page: the chart svg inside `#wrapper` plus
/// the floating tooltip element appended after it.
#[derive(Debug)]
pub struct HtmlRenderer {
    title: String,
    document: String,
}

impl HtmlRenderer {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            document: String::new(),
        }
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new("Scatter plot")
    }
}

impl Renderer for HtmlRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ScatterResult<()> {
        frame.validate()?;
        let mut out = String::new();
        write_html(&mut out, &self.title, frame).map_err(map_fmt_error)?;
        self.document = out;
        Ok(())
    }
}

fn write_html(out: &mut String, title: &str, frame: &RenderFrame) -> std::fmt::Result {
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    writeln!(out, "<title>{}</title>", escape_xml(title))?;
    out.push_str(concat!(
        "<style>\n",
        "#tooltip { position: absolute; padding: 4px 8px; background: rgba(255, 255, 255, 0.9);",
        " border: 1px solid #333; font: 12px sans-serif; pointer-events: none; }\n",
        "</style>\n</head>\n<body>\n<div id=\"wrapper\">\n",
    ));
    let mut stats = SvgRenderStats::default();
    write_svg(out, frame, &mut stats)?;
    out.push_str("</div>\n");
    if let Some(tooltip) = &frame.tooltip {
        write_tooltip(out, tooltip)?;
    }
    out.push_str("</body>\n</html>\n");
    Ok(())
}

fn write_tooltip(out: &mut String, tooltip: &TooltipFrame) -> std::fmt::Result {
    let visibility = if tooltip.visible { "visible" } else { "hidden" };
    write!(
        out,
        r#"<div id="{id}" style="visibility: {visibility}; left: {left}px; top: {top}px; transition: visibility {fade}ms;""#,
        id = escape_xml(&tooltip.id),
        left = fmt_num(tooltip.left),
        top = fmt_num(tooltip.top),
        fade = tooltip.fade_ms,
    )?;
    for (name, value) in &tooltip.attributes {
        write!(out, r#" {}="{}""#, escape_xml(name), escape_xml(value))?;
    }
    // Tooltip html is assembled from escaped record fields and `<br>` separators.
    writeln!(out, ">{}</div>", tooltip.html)
}

fn write_svg(out: &mut String, frame: &RenderFrame, stats: &mut SvgRenderStats) -> std::fmt::Result {
    let dims = frame.dimensions;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt_num(dims.width),
        h = fmt_num(dims.height),
    )?;
    writeln!(
        out,
        r#"<g class="bounds" transform="translate({}, {})">"#,
        fmt_num(dims.margin.left),
        fmt_num(dims.margin.top),
    )?;

    out.push_str("<g class=\"markers\">\n");
    for marker in &frame.markers {
        write_marker(out, marker)?;
        stats.markers_drawn += 1;
    }
    out.push_str("</g>\n");

    for axis in &frame.axes {
        write_axis(out, axis, stats)?;
    }

    if let Some(legend) = &frame.legend {
        write_legend(out, legend, stats)?;
    }

    out.push_str("</g>\n</svg>\n");
    Ok(())
}

fn write_marker(out: &mut String, marker: &MarkerPrimitive) -> std::fmt::Result {
    write!(out, r#"<circle class="{}""#, escape_xml(&marker.class_name))?;
    for (name, value) in &marker.attributes {
        write!(out, r#" {}="{}""#, escape_xml(name), escape_xml(value))?;
    }
    writeln!(
        out,
        r#" cx="{}" cy="{}" r="{}" fill="{}"/>"#,
        fmt_num(marker.circle.cx),
        fmt_num(marker.circle.cy),
        fmt_num(marker.circle.radius),
        marker.circle.fill.to_css(),
    )
}

fn write_axis(out: &mut String, axis: &AxisFrame, stats: &mut SvgRenderStats) -> std::fmt::Result {
    writeln!(
        out,
        r#"<g id="{}" transform="translate({}, {})" font-size="10" font-family="sans-serif">"#,
        escape_xml(&axis.id),
        fmt_num(axis.offset.0),
        fmt_num(axis.offset.1),
    )?;
    write_line(out, "domain", &axis.domain_line)?;
    stats.lines_drawn += 1;

    for (line, label) in axis.tick_lines.iter().zip(&axis.tick_labels) {
        out.push_str("<g class=\"tick\">\n");
        write_line(out, "tick-line", line)?;
        write_text(out, label)?;
        out.push_str("</g>\n");
        stats.lines_drawn += 1;
        stats.texts_drawn += 1;
    }

    write_text(out, &axis.label)?;
    stats.texts_drawn += 1;
    out.push_str("</g>\n");
    Ok(())
}

fn write_legend(
    out: &mut String,
    legend: &LegendFrame,
    stats: &mut SvgRenderStats,
) -> std::fmt::Result {
    writeln!(
        out,
        r#"<g id="{}" transform="translate({}, {})">"#,
        escape_xml(&legend.id),
        fmt_num(legend.offset.0),
        fmt_num(legend.offset.1),
    )?;
    for entry in &legend.entries {
        let swatch = entry.swatch;
        writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            fmt_num(swatch.x),
            fmt_num(swatch.y),
            fmt_num(swatch.width),
            fmt_num(swatch.height),
            swatch.fill.to_css(),
        )?;
        write_text(out, &entry.caption)?;
        stats.texts_drawn += 1;
    }
    out.push_str("</g>\n");
    Ok(())
}

fn write_line(out: &mut String, class_name: &str, line: &LinePrimitive) -> std::fmt::Result {
    writeln!(
        out,
        r#"<line class="{class_name}" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
        fmt_num(line.x1),
        fmt_num(line.y1),
        fmt_num(line.x2),
        fmt_num(line.y2),
        line.color.to_css(),
        fmt_num(line.stroke_width),
    )
}

fn write_text(out: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    write!(
        out,
        r#"<text x="{}" y="{}" fill="{}" font-size="{}" text-anchor="{}""#,
        fmt_num(text.x),
        fmt_num(text.y),
        text.color.to_css(),
        fmt_num(text.font_size_px),
        text.anchor.as_svg(),
    )?;
    if text.rotation_deg != 0.0 {
        write!(out, r#" transform="rotate({})""#, fmt_num(text.rotation_deg))?;
    }
    writeln!(out, ">{}</text>", escape_xml(&text.text))
}

/// Shortest decimal form with at most three fractional digits.
pub(crate) fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let mut text = format!("{rounded:.3}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    if text == "-0" {
        text = "0".to_owned();
    }
    text
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn map_fmt_error(err: std::fmt::Error) -> ScatterError {
    ScatterError::InvalidData(format!("failed to serialize document: {err}"))
}
