use scatter_rs::api::{ChartVariant, ScatterChart, ScatterConfig};
use scatter_rs::core::{RaceTime, Record, Viewport};
use scatter_rs::render::{HtmlRenderer, Renderer, SvgRenderer};

fn records() -> Vec<Record> {
    vec![
        Record::new(1994, RaceTime::new(36, 15).expect("valid"), ""),
        Record::new(1995, RaceTime::new(36, 50).expect("valid"), "Alleged <drug> use"),
        Record::new(2003, RaceTime::new(39, 5).expect("valid"), ""),
    ]
}

fn build<R: Renderer>(renderer: R, variant: ChartVariant) -> ScatterChart<R> {
    ScatterChart::new(
        renderer,
        ScatterConfig::for_variant(variant),
        Viewport::new(1280.0, 800.0),
        records(),
    )
    .expect("chart init")
}

#[test]
fn svg_document_contains_markers_and_axes() {
    let mut chart = build(SvgRenderer::new(), ChartVariant::DopingScatter);
    chart.render().expect("render");

    let svg = chart.renderer().document();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"720\" height=\"720\""));
    assert!(svg.contains(r#"<g class="bounds" transform="translate(50, 10)">"#));
    assert!(svg.contains(r#"<g id="x-axis" transform="translate(0, 660)""#));
    assert!(svg.contains(r#"<g id="y-axis" transform="translate(0, 0)""#));
    assert!(svg.contains(r#"<g id="legend""#));
    assert_eq!(svg.matches(r#"<circle class="dot""#).count(), 3);
    assert!(svg.contains(r#"data-xvalue="1994" data-yvalue="1900-01-01T00:36:15""#));
    assert!(svg.contains(r#"fill="rgb(0, 128, 0)""#));
    assert!(svg.contains(r#"fill="rgb(255, 0, 0)""#));
    assert!(svg.contains(r#"transform="rotate(-90)">Time In Minutes</text>"#));
    assert!(svg.trim_end().ends_with("</svg>"));

    let stats = chart.renderer().last_stats();
    assert_eq!(stats.markers_drawn, 3);
    assert!(stats.lines_drawn >= 2);
    assert!(stats.texts_drawn >= 4);
}

#[test]
fn time_series_svg_has_no_legend() {
    let mut chart = build(SvgRenderer::new(), ChartVariant::TimeSeries);
    chart.render().expect("render");

    let svg = chart.into_renderer().into_document();
    assert!(!svg.contains(r#"id="legend""#));
    assert!(svg.contains(r#"fill="rgb(70, 130, 180)""#));
}

#[test]
fn html_page_hosts_hidden_tooltip() {
    let mut chart = build(HtmlRenderer::default(), ChartVariant::DopingScatter);
    chart.render().expect("render");

    let html = chart.renderer().document();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<div id="wrapper">"#));
    assert!(html.contains(r#"<div id="tooltip" style="visibility: hidden;"#));
    assert!(html.contains("transition: visibility 200ms;"));
}

#[test]
fn html_tooltip_reflects_hovered_record() {
    let mut chart = build(HtmlRenderer::new("Doping in Professional Bicycle Racing"), ChartVariant::DopingScatter);
    chart.pointer_enter(1, 300.0, 128.0).expect("enter");
    chart.render().expect("render");

    let html = chart.renderer().document();
    assert!(html.contains("<title>Doping in Professional Bicycle Racing</title>"));
    assert!(html.contains("visibility: visible; left: 300px; top: 100px;"));
    assert!(html.contains(r#"data-year="1995" data-yvalue="36:50">Year: 1995<br> Time: 36:50</div>"#));
}

#[test]
fn failed_render_keeps_previous_document() {
    let mut chart = build(SvgRenderer::new(), ChartVariant::DopingScatter);
    chart.render().expect("first render");
    let before = chart.renderer().document().to_owned();

    chart
        .pointer_enter(0, f64::INFINITY, 0.0)
        .expect_err("non-finite pointer is rejected");
    chart.render().expect("second render");
    assert_eq!(chart.renderer().document(), before);
}
