// File: crates/chart-core/tests/spec_config.rs
// Purpose: ChartSpec defaults, JSON loading and style assignment.

use chart_core::{ChartSpec, Marker, Rgb, SeriesStyle};
use std::path::PathBuf;

#[test]
fn defaults_describe_the_report() {
    let spec = ChartSpec::default();
    assert_eq!(spec.output_path, PathBuf::from("docs/finance_vs_delivery_chart.png"));
    assert_eq!(spec.pixel_size(), (3000, 1800));
    assert_eq!(spec.value_format.format(124.5), "$124.5K");
    assert_eq!(spec.tick_format.format(120.0), "$120K");
}

#[test]
fn partial_json_keeps_defaults() {
    let spec = ChartSpec::from_json(
        r##"{"title":"Q1","y_bounds":[0.0,50.0],"dpi":150,"colors":["#112233",null]}"##,
    )
    .expect("parse spec");
    assert_eq!(spec.title, "Q1");
    assert_eq!(spec.y_bounds, (0.0, 50.0));
    assert_eq!(spec.pixel_size(), (1500, 900));
    assert_eq!(spec.x_label, "Month");
    assert_eq!(spec.colors, vec![Some(Rgb(0x11, 0x22, 0x33)), None]);
}

#[test]
fn bad_color_is_a_parse_error() {
    assert!(ChartSpec::from_json(r#"{"colors":["blue"]}"#).is_err());
}

#[test]
fn styles_are_distinct_in_supply_order() {
    let styles = ChartSpec::default().styles(2);
    assert_eq!(styles[0], SeriesStyle { color: Rgb(0x2E, 0x86, 0xAB), marker: Marker::Circle });
    assert_eq!(styles[1], SeriesStyle { color: Rgb(0xA2, 0x3B, 0x72), marker: Marker::Square });
}

#[test]
fn rgb_round_trips_as_hex() {
    let c = Rgb::parse_hex("#2e86ab").unwrap();
    assert_eq!(c.to_string(), "#2E86AB");
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#2E86AB\"");
}
