use scatter_rs::api::{ChartVariant, ScatterChart, ScatterConfig};
use scatter_rs::core::{Margin, RaceTime, Record, Viewport};
use scatter_rs::interaction::{PointerEvent, TooltipVisibility};
use scatter_rs::render::NullRenderer;

fn chart(variant: ChartVariant) -> ScatterChart<NullRenderer> {
    let records = vec![
        Record::new(1994, RaceTime::new(36, 15).expect("valid"), ""),
        Record::new(1995, RaceTime::new(36, 50).expect("valid"), "Alleged drug use"),
    ];
    let config =
        ScatterConfig::for_variant(variant).with_margin(Margin::new(10.0, 10.0, 50.0, 40.0));
    ScatterChart::new(
        NullRenderer::default(),
        config,
        Viewport::new(500.0, 500.0),
        records,
    )
    .expect("chart init")
}

#[test]
fn tooltip_starts_hidden() {
    let chart = chart(ChartVariant::DopingScatter);
    assert_eq!(chart.tooltip_visibility(), TooltipVisibility::Hidden);
}

#[test]
fn enter_shows_tooltip_above_pointer() {
    let mut chart = chart(ChartVariant::DopingScatter);
    chart.pointer_enter(0, 150.0, 300.0).expect("enter");

    let tooltip = chart.tooltip().expect("tooltip enabled");
    assert_eq!(tooltip.visibility(), TooltipVisibility::Visible);
    assert_eq!(tooltip.position(), (150.0, 272.0));
    assert_eq!(tooltip.html(), "Year: 1994<br> Time: 36:15");
    assert_eq!(tooltip.attributes()["data-year"], "1994");
    assert_eq!(tooltip.attributes()["data-yvalue"], "36:15");

    let fade = tooltip.last_transition().expect("fade recorded");
    assert_eq!(fade.target, TooltipVisibility::Visible);
    assert_eq!(fade.duration_ms, 200);
}

#[test]
fn alternating_events_end_hidden() {
    let mut chart = chart(ChartVariant::DopingScatter);
    let events = [
        PointerEvent::Enter {
            marker: 0,
            page_x: 10.0,
            page_y: 40.0,
        },
        PointerEvent::Leave,
        PointerEvent::Enter {
            marker: 1,
            page_x: 410.0,
            page_y: 400.0,
        },
        PointerEvent::Leave,
    ];
    for event in events {
        chart.handle_pointer_event(event).expect("event applied");
    }

    let tooltip = chart.tooltip().expect("tooltip enabled");
    assert_eq!(tooltip.visibility(), TooltipVisibility::Hidden);
    assert_eq!(tooltip.hovered_marker(), None);
    // Content of the last entered record is kept for the fade out.
    assert_eq!(tooltip.attributes()["data-year"], "1995");
}

#[test]
fn enter_without_leave_stays_visible() {
    let mut chart = chart(ChartVariant::DopingScatter);
    chart.pointer_enter(1, 0.0, 0.0).expect("enter");
    assert_eq!(chart.tooltip_visibility(), TooltipVisibility::Visible);

    let frame = chart.build_render_frame().expect("frame");
    let tooltip = frame.tooltip.expect("tooltip frame");
    assert!(tooltip.visible);
    assert_eq!(tooltip.top, -28.0);
    assert_eq!(tooltip.fade_ms, 200);
}

#[test]
fn out_of_range_marker_is_rejected() {
    let mut chart = chart(ChartVariant::DopingScatter);
    assert!(chart.pointer_enter(2, 0.0, 0.0).is_err());
    assert!(chart.pointer_enter(0, f64::NAN, 0.0).is_err());
    assert_eq!(chart.tooltip_visibility(), TooltipVisibility::Hidden);
}

#[test]
fn marker_hit_test_uses_canvas_coordinates() {
    let chart = chart(ChartVariant::DopingScatter);
    // Marker 0 sits at the bounded-area origin, i.e. at the margins on canvas.
    assert_eq!(chart.marker_at(40.0, 10.0), Some(0));
    assert_eq!(chart.marker_at(43.0, 12.0), Some(0));
    assert_eq!(chart.marker_at(440.0, 400.0), Some(1));
    assert_eq!(chart.marker_at(240.0, 200.0), None);
    assert_eq!(chart.marker_at(f64::NAN, 10.0), None);
}

#[test]
fn overlapping_markers_resolve_to_topmost() {
    let records = vec![
        Record::new(1994, RaceTime::new(36, 15).expect("valid"), ""),
        Record::new(1994, RaceTime::new(36, 15).expect("valid"), "EPO"),
        Record::new(1995, RaceTime::new(36, 50).expect("valid"), ""),
    ];
    let chart = ScatterChart::new(
        NullRenderer::default(),
        ScatterConfig::default().with_margin(Margin::new(10.0, 10.0, 50.0, 40.0)),
        Viewport::new(500.0, 500.0),
        records,
    )
    .expect("chart init");

    assert_eq!(chart.marker_at(40.0, 10.0), Some(1));
}

#[test]
fn pointer_move_emits_enter_and_leave_once() {
    let mut chart = chart(ChartVariant::DopingScatter);

    let entered = chart.pointer_move(40.0, 10.0).expect("move onto marker");
    assert_eq!(
        entered,
        vec![PointerEvent::Enter {
            marker: 0,
            page_x: 40.0,
            page_y: 10.0,
        }]
    );
    assert!(chart.pointer_move(41.0, 10.0).expect("still on marker").is_empty());

    let switched = chart.pointer_move(440.0, 400.0).expect("move across");
    assert_eq!(switched.len(), 2);
    assert_eq!(switched[0], PointerEvent::Leave);
    assert_eq!(chart.tooltip().and_then(|tooltip| tooltip.hovered_marker()), Some(1));

    let left = chart.pointer_move(240.0, 200.0).expect("move off");
    assert_eq!(left, vec![PointerEvent::Leave]);
    assert_eq!(chart.tooltip_visibility(), TooltipVisibility::Hidden);
}

#[test]
fn time_series_variant_ignores_pointer_events() {
    let mut chart = chart(ChartVariant::TimeSeries);
    assert!(chart.tooltip().is_none());

    chart.pointer_enter(0, 10.0, 10.0).expect("accepted as no-op");
    assert!(chart.pointer_move(40.0, 10.0).expect("move").is_empty());
    assert_eq!(chart.tooltip_visibility(), TooltipVisibility::Hidden);
}
