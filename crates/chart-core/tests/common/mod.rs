// File: crates/chart-core/tests/common/mod.rs
// Purpose: Shared fixtures: the Finance vs Delivery data and per-test output dirs.

#![allow(dead_code)]

use chart_core::{ChartSpec, Series};
use std::path::PathBuf;

pub const MONTHS: [&str; 3] = ["Nov 2024", "Dec 2024", "Jan 2025"];

pub fn finance_delivery() -> Vec<Series> {
    vec![
        Series::from_pairs("Finance", &MONTHS, &[124.5, 131.8, 119.2]),
        Series::from_pairs("Delivery", &MONTHS, &[118.2, 127.4, 115.9]),
    ]
}

/// Fresh, empty directory under target/test_out for one test.
pub fn out_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create test output dir");
    dir
}

/// Reference spec at a low resolution to keep tests fast.
pub fn small_spec(path: PathBuf) -> ChartSpec {
    let mut spec = ChartSpec::default().with_output(path);
    spec.dpi = 60;
    spec
}

pub fn dir_entries(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
