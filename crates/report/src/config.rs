// File: crates/report/src/config.rs
// Summary: Report configuration: embedded reference data and JSON spec loading.

use anyhow::{Context, Result};
use chart_core::{ChartSpec, Series};
use std::path::Path;

/// Months covered by the reference report.
pub const MONTHS: [&str; 3] = ["Nov 2024", "Dec 2024", "Jan 2025"];
/// Totals in thousands USD.
pub const FINANCE_TOTALS: [f64; 3] = [124.5, 131.8, 119.2];
pub const DELIVERY_TOTALS: [f64; 3] = [118.2, 127.4, 115.9];

pub fn reference_series() -> Vec<Series> {
    vec![
        Series::from_pairs("Finance", &MONTHS, &FINANCE_TOTALS),
        Series::from_pairs("Delivery", &MONTHS, &DELIVERY_TOTALS),
    ]
}

/// Load a ChartSpec from JSON; absent fields keep the reference defaults.
pub fn load_spec(path: &Path) -> Result<ChartSpec> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    ChartSpec::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
}
