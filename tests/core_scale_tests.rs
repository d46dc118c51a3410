use approx::assert_relative_eq;
use scatter_rs::core::primitives::{race_time_to_unix_seconds, year_to_unix_seconds};
use scatter_rs::core::{LinearScale, RaceTime, TimeInterval, TimeScale, extent};

#[test]
fn year_domain_maps_to_bounded_width() {
    let scale = LinearScale::new((1994.0, 1995.0), (0.0, 400.0)).expect("valid scale");

    assert_eq!(scale.map(1994.0).expect("start"), 0.0);
    assert_eq!(scale.map(1995.0).expect("end"), 400.0);
    assert_eq!(scale.map(1994.5).expect("middle"), 200.0);
}

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new((10.0, 110.0), (0.0, 660.0)).expect("valid scale");

    let original = 42.5;
    let px = scale.map(original).expect("to pixel");
    let recovered = scale.invert(px).expect("from pixel");

    assert_relative_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn values_outside_domain_extrapolate() {
    let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0)).expect("valid scale");
    assert_eq!(scale.map(12.0).expect("beyond end"), 120.0);
    assert_eq!(scale.map(-1.0).expect("before start"), -10.0);
}

#[test]
fn degenerate_domain_maps_to_range_midpoint() {
    let scale = LinearScale::new((2001.0, 2001.0), (0.0, 400.0)).expect("valid scale");

    assert!(scale.is_degenerate());
    assert_eq!(scale.map(2001.0).expect("mapped"), 200.0);
    assert_eq!(scale.map(1990.0).expect("mapped"), 200.0);
    assert_eq!(scale.ticks(12).expect("ticks"), vec![2001.0]);
}

#[test]
fn non_finite_inputs_are_rejected() {
    assert!(LinearScale::new((f64::NAN, 1.0), (0.0, 1.0)).is_err());
    assert!(LinearScale::new((0.0, 1.0), (0.0, f64::INFINITY)).is_err());

    let scale = LinearScale::new((0.0, 1.0), (0.0, 100.0)).expect("valid scale");
    assert!(scale.map(f64::NAN).is_err());
    assert!(scale.invert(f64::NEG_INFINITY).is_err());
}

#[test]
fn reversed_range_flips_direction() {
    let scale = LinearScale::new((0.0, 10.0), (300.0, 0.0)).expect("valid scale");
    assert_eq!(scale.map(0.0).expect("start"), 300.0);
    assert_eq!(scale.map(10.0).expect("end"), 0.0);
}

#[test]
fn linear_ticks_cover_domain_with_round_values() {
    let scale = LinearScale::new((1994.0, 2015.0), (0.0, 400.0)).expect("valid scale");
    let ticks = scale.ticks(12).expect("ticks");

    assert_eq!(ticks.len(), 11);
    assert!(ticks.iter().all(|tick| (1994.0..=2015.0).contains(tick)));
    assert!(ticks.iter().all(|tick| tick % 2.0 == 0.0));
}

#[test]
fn extent_reports_min_and_max() {
    assert_eq!(extent([1995.0, 1994.0, 2003.0]), Some((1994.0, 2003.0)));
    assert_eq!(extent([7.0]), Some((7.0, 7.0)));
    assert_eq!(extent(std::iter::empty::<f64>()), None);
}

#[test]
fn race_times_map_earliest_to_top() {
    let early = race_time_to_unix_seconds(RaceTime::new(36, 15).expect("valid"));
    let late = race_time_to_unix_seconds(RaceTime::new(36, 50).expect("valid"));
    let scale = TimeScale::new((early, late), (0.0, 390.0)).expect("valid scale");

    assert_eq!(scale.time_to_pixel(early).expect("top"), 0.0);
    assert_eq!(scale.time_to_pixel(late).expect("bottom"), 390.0);
}

#[test]
fn race_time_ticks_fall_on_quarter_minutes() {
    let early = race_time_to_unix_seconds(RaceTime::new(36, 15).expect("valid"));
    let late = race_time_to_unix_seconds(RaceTime::new(36, 50).expect("valid"));
    let scale = TimeScale::new((early, late), (0.0, 390.0)).expect("valid scale");

    let labels: Vec<String> = scale
        .ticks_every(TimeInterval::Seconds(15))
        .expect("ticks")
        .into_iter()
        .map(|tick| scale.format(tick, "%M:%S").expect("format"))
        .collect();
    assert_eq!(labels, vec!["36:15", "36:30", "36:45"]);
}

#[test]
fn time_scale_round_trip_within_tolerance() {
    let start = year_to_unix_seconds(1994).expect("valid");
    let end = year_to_unix_seconds(2015).expect("valid");
    let scale = TimeScale::new((start, end), (0.0, 660.0)).expect("valid scale");

    let original = year_to_unix_seconds(2004).expect("valid");
    let px = scale.time_to_pixel(original).expect("to pixel");
    let recovered = scale.pixel_to_time(px).expect("from pixel");

    assert_relative_eq!(recovered, original, max_relative = 1e-12);
}

#[test]
fn zero_interval_is_rejected() {
    let scale = TimeScale::new((0.0, 60.0), (0.0, 100.0)).expect("valid scale");
    assert!(scale.ticks_every(TimeInterval::Seconds(0)).is_err());
    assert!(scale.ticks_every(TimeInterval::Years(0)).is_err());
}

#[test]
fn runaway_tick_counts_are_rejected() {
    let start = year_to_unix_seconds(1900).expect("valid");
    let end = year_to_unix_seconds(2000).expect("valid");
    let scale = TimeScale::new((start, end), (0.0, 100.0)).expect("valid scale");
    assert!(scale.ticks_every(TimeInterval::Seconds(1)).is_err());
}

#[test]
fn huge_linear_tick_count_is_an_error() {
    let scale = LinearScale::new((1994.0, 2015.0), (0.0, 400.0)).expect("valid scale");
    assert!(scale.ticks(usize::MAX).is_err());
}

#[test]
fn year_steps_beyond_i32_are_rejected() {
    let start = year_to_unix_seconds(1994).expect("valid");
    let end = year_to_unix_seconds(2015).expect("valid");
    let scale = TimeScale::new((start, end), (0.0, 400.0)).expect("valid scale");

    assert!(scale.ticks_every(TimeInterval::Years(1 << 31)).is_err());
    let widest = scale
        .ticks_every(TimeInterval::Years(i32::MAX as u32))
        .expect("largest step in range");
    assert!(widest.is_empty());
}
