// File: crates/chart-core/tests/chart_layout.rs
// Purpose: Geometry of the report chart: value-label placement, legend order, plot area.

mod common;

use chart_core::layout::{LABEL_OFFSET_ABOVE, LABEL_OFFSET_BELOW};
use chart_core::{ChartRenderer, ChartSpec, RenderError, Series};
use common::*;

#[test]
fn reference_scenario_has_six_labels() {
    let layout = ChartRenderer::new().layout(&finance_delivery(), &ChartSpec::default()).expect("layout");
    let texts: Vec<(usize, &str)> = layout.value_labels.iter().map(|v| (v.series, v.text.as_str())).collect();
    assert_eq!(
        texts,
        vec![
            (0, "$124.5K"),
            (0, "$131.8K"),
            (0, "$119.2K"),
            (1, "$118.2K"),
            (1, "$127.4K"),
            (1, "$115.9K"),
        ]
    );
}

#[test]
fn even_series_label_above_odd_below() {
    let layout = ChartRenderer::new().layout(&finance_delivery(), &ChartSpec::default()).expect("layout");
    for v in &layout.value_labels {
        let offset = v.baseline - v.anchor.1;
        if v.series % 2 == 0 {
            assert!(v.is_above(), "{v:?}");
            assert!((offset + LABEL_OFFSET_ABOVE).abs() < 1e-4, "{v:?}");
        } else {
            assert!(!v.is_above(), "{v:?}");
            assert!((offset - LABEL_OFFSET_BELOW).abs() < 1e-4, "{v:?}");
        }
    }
}

#[test]
fn alternation_follows_position_not_name() {
    let mut series = finance_delivery();
    series.reverse();
    let layout = ChartRenderer::new().layout(&series, &ChartSpec::default()).expect("layout");
    let delivery_first = layout.value_labels.iter().find(|v| v.text == "$118.2K").expect("delivery label");
    assert_eq!(delivery_first.series, 0);
    assert!(delivery_first.is_above());
}

#[test]
fn legend_rows_follow_supply_order() {
    let renderer = ChartRenderer::new();
    let spec = ChartSpec::default();

    let layout = renderer.layout(&finance_delivery(), &spec).expect("layout");
    let names: Vec<&str> = layout.legend.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Finance", "Delivery"]);
    assert!(layout.legend.rows[0].center_y < layout.legend.rows[1].center_y);

    let mut reversed = finance_delivery();
    reversed.reverse();
    let layout = renderer.layout(&reversed, &spec).expect("layout");
    let names: Vec<&str> = layout.legend.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Delivery", "Finance"]);
}

#[test]
fn legend_sits_upper_left_inside_plot() {
    let layout = ChartRenderer::new().layout(&finance_delivery(), &ChartSpec::default()).expect("layout");
    let (plot, frame) = (layout.plot, layout.legend.frame);
    assert!(frame.left > plot.left && frame.top > plot.top);
    assert!(frame.right < (plot.left + plot.right) * 0.5);
    assert!(frame.bottom < (plot.top + plot.bottom) * 0.5);
}

#[test]
fn ticks_span_the_fixed_bounds() {
    let spec = ChartSpec::default();
    let layout = ChartRenderer::new().layout(&finance_delivery(), &spec).expect("layout");
    let labels: Vec<String> = layout.y_ticks.iter().map(|&v| spec.tick_format.format(v)).collect();
    assert_eq!(labels, vec!["$110K", "$115K", "$120K", "$125K", "$130K", "$135K"]);
    assert_eq!(layout.categories, MONTHS.iter().map(|m| m.to_string()).collect::<Vec<_>>());
}

#[test]
fn out_of_bounds_point_gets_no_label() {
    let series = vec![
        Series::from_pairs("Finance", &MONTHS, &[124.5, 150.0, 119.2]),
        Series::from_pairs("Delivery", &MONTHS, &[118.2, 127.4, 115.9]),
    ];
    let layout = ChartRenderer::new().layout(&series, &ChartSpec::default()).expect("layout");
    assert_eq!(layout.value_labels.len(), 5);
    assert!(layout.value_labels.iter().all(|v| v.text != "$150.0K"));
}

#[test]
fn shapes_only_layout_has_no_value_labels() {
    let mut spec = ChartSpec::default();
    spec.draw_text = false;
    let layout = ChartRenderer::new().layout(&finance_delivery(), &spec).expect("layout");
    assert!(layout.value_labels.is_empty());
    assert_eq!(layout.legend.rows.len(), 2);
}

#[test]
fn tiny_figure_is_rejected_before_drawing() {
    let mut spec = ChartSpec::default();
    spec.figure_size = (1.0, 1.0);
    let err = ChartRenderer::new().layout(&finance_delivery(), &spec).unwrap_err();
    assert!(matches!(err, RenderError::InvalidInput(_)), "got {err:?}");
}
