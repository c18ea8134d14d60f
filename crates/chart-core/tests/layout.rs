// File: crates/chart-core/tests/layout.rs
// Purpose: Tick selection, category padding, scale mapping and crop bounds.

use chart_core::geometry::{content_bounds, RectI32};
use chart_core::grid::{category_range, nice_step, nice_ticks};
use chart_core::scale::PlotScales;

#[test]
fn report_bounds_tick_every_five() {
    assert_eq!(nice_ticks(110.0, 135.0, 6), vec![110.0, 115.0, 120.0, 125.0, 130.0, 135.0]);
}

#[test]
fn nice_steps_follow_1_2_5_ladder() {
    let close = |a: f64, b: f64| (a - b).abs() < 1e-9 * b.abs().max(1.0);
    assert!(close(nice_step(0.0, 10.0, 5), 2.0));
    assert!(close(nice_step(0.0, 1.0, 4), 0.25));
    assert!(close(nice_step(0.0, 1000.0, 6), 200.0));
}

#[test]
fn ticks_stay_inside_bounds() {
    let t = nice_ticks(0.3, 9.7, 6);
    assert!(t.first().unwrap() >= &0.3);
    assert!(t.last().unwrap() <= &9.7);
    assert!(nice_ticks(5.0, 5.0, 6).is_empty());
}

#[test]
fn category_range_pads_five_percent() {
    let (lo, hi) = category_range(3);
    assert!((lo + 0.1).abs() < 1e-12);
    assert!((hi - 2.1).abs() < 1e-12);
    assert_eq!(category_range(1), (-0.5, 0.5));
}

#[test]
fn y_grows_downward() {
    let s = PlotScales::new((0.0, 2.0), (110.0, 135.0), 100.0, 50.0, 300.0, 250.0);
    assert_eq!(s.point(0, 110.0), (100.0, 250.0));
    assert_eq!(s.point(2, 135.0), (300.0, 50.0));
    assert!(s.y.contains(120.0));
    assert!(!s.y.contains(136.0));
}

#[test]
fn content_bounds_finds_non_background() {
    let (w, h) = (6, 4);
    let mut px = vec![255u8; w * h * 4];
    let mut set = |x: usize, y: usize| px[(y * w + x) * 4] = 0;
    set(2, 1);
    set(4, 2);
    let r = content_bounds(&px, w as i32, h as i32, [255, 255, 255, 255]).unwrap();
    assert_eq!(r, RectI32::from_ltrb(2, 1, 5, 3));
    assert_eq!(r.padded_within(2, 6, 4), RectI32::from_ltrb(0, 0, 6, 4));

    let blank = vec![255u8; w * h * 4];
    assert!(content_bounds(&blank, w as i32, h as i32, [255, 255, 255, 255]).is_none());
}
