use criterion::{Criterion, criterion_group, criterion_main};
use scatter_rs::api::{ScatterChart, ScatterConfig};
use scatter_rs::core::{LinearScale, RaceTime, Record, TimeInterval, TimeScale, Viewport};
use scatter_rs::render::{NullRenderer, SvgRenderer};
use std::hint::black_box;

fn synthetic_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let year = 1990 + (i % 30) as i32;
            let total = 2100 + (i * 7 % 600) as u32;
            let time = RaceTime::new(total / 60, total % 60).expect("generated in range");
            Record::new(year, time, if i % 3 == 0 { "EPO" } else { "" })
        })
        .collect()
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new((1994.0, 2015.0), (0.0, 660.0)).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.map(black_box(2004.5)).expect("to pixel");
            let _ = scale.invert(px).expect("from pixel");
        })
    });
}

fn bench_race_time_ticks(c: &mut Criterion) {
    let scale = TimeScale::new((-2_208_986_625.0, -2_208_986_000.0), (0.0, 660.0))
        .expect("valid time scale");

    c.bench_function("race_time_ticks_every_15s", |b| {
        b.iter(|| {
            let _ = scale
                .ticks_every(black_box(TimeInterval::Seconds(15)))
                .expect("ticks");
        })
    });
}

fn bench_chart_init_10k(c: &mut Criterion) {
    let records = synthetic_records(10_000);

    c.bench_function("chart_init_10k", |b| {
        b.iter(|| {
            let _ = ScatterChart::new(
                NullRenderer::default(),
                ScatterConfig::default(),
                Viewport::new(1280.0, 800.0),
                black_box(records.clone()),
            )
            .expect("chart init");
        })
    });
}

fn bench_svg_render_10k(c: &mut Criterion) {
    let mut chart = ScatterChart::new(
        SvgRenderer::new(),
        ScatterConfig::default(),
        Viewport::new(1280.0, 800.0),
        synthetic_records(10_000),
    )
    .expect("chart init");

    c.bench_function("svg_render_10k", |b| {
        b.iter(|| {
            chart.render().expect("render");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_race_time_ticks,
    bench_chart_init_10k,
    bench_svg_render_10k
);
criterion_main!(benches);
