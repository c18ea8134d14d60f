// File: crates/chart-core/tests/render_report.rs
// Purpose: End-to-end renders of the Finance vs Delivery report chart.

mod common;

use chart_core::{ChartRenderer, ChartSpec};
use common::*;

#[test]
fn reference_report_writes_one_png() {
    let dir = out_dir("reference_report");
    let out = dir.join("finance_vs_delivery_chart.png");
    let spec = ChartSpec::default().with_output(&out);
    assert_eq!(spec.dpi, 300);
    assert_eq!(spec.y_bounds, (110.0, 135.0));

    let artifact = ChartRenderer::new().render(&finance_delivery(), &spec).expect("render should succeed");

    assert_eq!(artifact.path, out);
    assert_eq!(dir_entries(&dir), vec!["finance_vs_delivery_chart.png".to_string()]);

    let bytes = std::fs::read(&out).expect("output exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    assert_eq!(artifact.bytes, bytes.len() as u64);

    // Cropped to content, never larger than the 10x6in @ 300dpi canvas.
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (artifact.width, artifact.height));
    assert!(img.width() <= 3000 && img.height() <= 1800);
    assert!(img.width() > 2000 && img.height() > 1000, "plot area should survive cropping");

    // Opaque background.
    assert!(img.pixels().all(|p| p.0[3] == 255));
}

#[test]
fn second_render_overwrites_with_identical_pixels() {
    let dir = out_dir("idempotent");
    let out = dir.join("chart.png");
    let spec = small_spec(out.clone());
    let renderer = ChartRenderer::new();

    renderer.render(&finance_delivery(), &spec).expect("first render");
    let first = image::open(&out).expect("decode first").to_rgba8();
    renderer.render(&finance_delivery(), &spec).expect("second render");
    let second = image::open(&out).expect("decode second").to_rgba8();

    assert_eq!(first.dimensions(), second.dimensions());
    assert_eq!(first.as_raw(), second.as_raw());
    assert_eq!(dir_entries(&dir), vec!["chart.png".to_string()]);
}

#[test]
fn replaces_existing_file() {
    let dir = out_dir("replace_existing");
    let out = dir.join("chart.png");
    std::fs::write(&out, b"stale").unwrap();

    ChartRenderer::new().render(&finance_delivery(), &small_spec(out.clone())).expect("render");
    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn series_colors_reach_the_image() {
    let spec = small_spec("unused.png".into());
    let png = ChartRenderer::new().render_to_png_bytes(&finance_delivery(), &spec).expect("render bytes");
    let img = image::load_from_memory(&png.data).expect("decode").to_rgba8();

    let has = |rgb: [u8; 3]| img.pixels().any(|p| p.0[..3] == rgb);
    assert!(has([0x2E, 0x86, 0xAB]), "Finance line color missing");
    assert!(has([0xA2, 0x3B, 0x72]), "Delivery line color missing");
}

#[test]
fn many_series_wrap_palette_without_error() {
    let names = ["a", "b", "c", "d", "e", "f", "g", "h"];
    let series: Vec<_> = names
        .iter()
        .enumerate()
        .map(|(i, n)| chart_core::Series::from_pairs(*n, &MONTHS, &[112.0 + i as f64, 120.0, 130.0 - i as f64]))
        .collect();
    let mut spec = small_spec("unused.png".into());
    spec.draw_text = false;
    ChartRenderer::new().render_to_png_bytes(&series, &spec).expect("wrapped styles stay distinct");
}

#[test]
fn values_outside_bounds_are_clipped_not_rejected() {
    let series = vec![chart_core::Series::from_pairs("Spike", &MONTHS, &[100.0, 150.0, 120.0])];
    let spec = small_spec("unused.png".into());
    ChartRenderer::new().render_to_png_bytes(&series, &spec).expect("render");
}

#[test]
fn png_records_output_dpi() {
    let spec = small_spec("unused.png".into());
    let png = ChartRenderer::new().render_to_png_bytes(&finance_delivery(), &spec).expect("render bytes");
    let at = png.data.windows(4).position(|w| w == b"pHYs").expect("pHYs chunk present");
    let body = &png.data[at + 4..at + 13];
    let ppu = |b: &[u8]| u32::from_be_bytes([b[0], b[1], b[2], b[3]]);
    let expected = (spec.dpi as f64 / 0.0254).round() as u32;
    assert_eq!(ppu(&body[0..4]), expected);
    assert_eq!(ppu(&body[4..8]), expected);
    assert_eq!(body[8], 1, "unit should be meters");
}

#[test]
fn concurrent_renders_to_one_target_all_succeed() {
    let dir = out_dir("concurrent_target");
    let out = dir.join("chart.png");
    let mut spec = small_spec(out.clone());
    spec.dpi = 30;
    spec.draw_text = false;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let spec = spec.clone();
            std::thread::spawn(move || {
                let renderer = ChartRenderer::new();
                (0..3).map(|_| renderer.render(&finance_delivery(), &spec).map(|a| a.bytes)).collect::<Vec<_>>()
            })
        })
        .collect();
    for h in handles {
        for result in h.join().expect("render thread") {
            result.expect("every concurrent render succeeds");
        }
    }

    assert_eq!(dir_entries(&dir), vec!["chart.png".to_string()], "no temp files left behind");
    let img = image::open(&out).expect("decode final file");
    assert!(img.width() > 0 && img.height() > 0);
}
