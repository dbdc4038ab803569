use std::f32::consts::TAU;

use brio_charts::donut::slice_sweeps;
use brio_charts::format::{format_currency, format_date, format_number};
use brio_charts::prelude::*;
use brio_paint::{PaintCommand, PaintContext};

fn series(values: &[f32]) -> Vec<DataPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| DataPoint::new(format!("p{i}"), v))
        .collect()
}

#[test]
fn mapping_stays_within_value_bounds() {
    let data = series(&[12.0, 91.0, 7.5, 44.0, 63.0]);
    let scale = Scale::from_values(data.iter().map(|d| d.value), 160.0).unwrap();
    for p in map_points(&data, 320.0, 160.0, 40.0) {
        let value = scale.value_at(p.y, 40.0, 160.0);
        assert!(value >= scale.min - 1e-3 && value <= scale.max + 1e-3);
    }
}

#[test]
fn single_point_centers_on_the_drawable_width() {
    let pts = map_points(&series(&[99.0]), 320.0, 160.0, 40.0);
    assert_eq!(pts.len(), 1);
    assert!((pts[0].x - (40.0 + 160.0)).abs() < 1e-5);
}

#[test]
fn flat_series_lands_on_the_midpoint_fallback() {
    let pts = map_points(&series(&[5.0, 5.0, 5.0, 5.0]), 320.0, 160.0, 40.0);
    for p in pts {
        assert!(p.y.is_finite());
        assert!((p.y - (40.0 + 80.0)).abs() < 1e-5);
    }
}

#[test]
fn donut_angles_sum_to_two_pi() {
    let data = series(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let sum: f32 = slice_sweeps(&data).iter().sum();
    assert!((sum - TAU).abs() < 1e-4);
}

#[test]
fn interpolation_endpoints_are_exact_and_interior_is_monotonic() {
    let a = series(&[0.1, 100.0, 7.0]);
    let b = series(&[0.3, 50.0, 7.0]);

    assert_eq!(interpolate_series(&a, &b, 0.0), series(&[0.1, 100.0, 7.0]));
    assert_eq!(interpolate_series(&a, &b, 1.0), series(&[0.3, 50.0, 7.0]));

    let mut last_distance = vec![f32::INFINITY; a.len()];
    for step in 1..10 {
        let t = step as f32 / 10.0;
        let mid = interpolate_series(&a, &b, t);
        for i in 0..a.len() {
            let distance = (mid[i].value - b[i].value).abs();
            if a[i].value != b[i].value {
                assert!(distance < last_distance[i]);
            } else {
                assert_eq!(mid[i].value, b[i].value);
            }
            last_distance[i] = distance;
        }
    }
}

#[test]
fn formatters_match_the_documented_fixtures() {
    assert_eq!(format_currency(12_345.0), "$12K");
    assert_eq!(format_number(1_500_000.0), "1.5M");
    assert_eq!(format_number(2_500.0), "2.5K");
    assert_eq!(format_number(42.0), "42");
    assert_eq!(format_date("2024-01-15"), "Jan 15, 2024");
}

#[test]
fn render_dispatch_covers_every_kind() {
    let data = series(&[10.0, 20.0, 30.0]);
    for kind in [ChartKind::Line, ChartKind::Bar, ChartKind::Donut] {
        let spec = ChartSpec::new(kind, 400.0, 240.0, 40.0);
        let mut ctx = PaintContext::new();
        render_chart(&spec, &data, &mut ctx).unwrap();
        assert!(matches!(
            ctx.commands().first(),
            Some(PaintCommand::Clear { .. })
        ));
        assert!(ctx.commands().len() > 1);
    }
}

#[test]
fn render_rejects_empty_series_for_every_kind() {
    for kind in [ChartKind::Line, ChartKind::Bar, ChartKind::Donut] {
        let spec = ChartSpec::new(kind, 400.0, 240.0, 40.0);
        let mut ctx = PaintContext::new();
        assert!(render_chart(&spec, &[], &mut ctx).is_err());
    }
}

#[test]
fn transition_drives_render_to_the_exact_target() {
    let from = series(&[10.0, 20.0]);
    let to = series(&[30.0, 5.0]);
    let mut tr = SeriesTransition::new(from, to.clone(), 1.0).unwrap();

    // Simulate the per-frame callback at ~60fps.
    let spec = ChartSpec::new(ChartKind::Line, 400.0, 240.0, 40.0);
    let mut ctx = PaintContext::new();
    while !tr.is_finished() {
        tr.step(1.0 / 60.0);
        render_chart(&spec, &tr.current(), &mut ctx).unwrap();
        ctx.take_commands();
    }
    assert_eq!(tr.current(), to);
}

#[test]
fn superseded_transition_can_be_cancelled_deterministically() {
    let mut first = SeriesTransition::new(series(&[0.0]), series(&[100.0]), 1.0).unwrap();
    let handle = first.handle();
    first.step(0.25);

    // A new snapshot arrives; the stale transition is aborted.
    handle.cancel();
    assert!(first.is_finished());
    let frozen = first.current()[0].value;
    first.step(0.5);
    assert_eq!(first.current()[0].value, frozen);

    let second = SeriesTransition::new(first.current(), series(&[42.0]), 1.0).unwrap();
    assert!(!second.is_finished());
}
