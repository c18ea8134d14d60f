// File: crates/report/src/data.rs
// Summary: Load report series from CSV: `category,<series>,<series>,...`, one row per category.

use anyhow::{bail, Context, Result};
use chart_core::Series;
use std::path::Path;
use tracing::debug;

pub fn load_series_csv(path: &Path) -> Result<Vec<Series>> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_series(rdr)
}

fn read_series<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Series>> {
    let headers = rdr.headers()?.clone();
    if headers.len() < 2 {
        bail!("expected a category column followed by at least one series column, got {:?}", headers);
    }
    debug!(?headers, "series csv headers");

    let mut series: Vec<Series> = headers.iter().skip(1).map(Series::new).collect();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("row {}", row + 2))?;
        let category = rec.get(0).unwrap_or_default();
        for (col, s) in series.iter_mut().enumerate() {
            let cell = rec.get(col + 1).unwrap_or_default();
            let value: f64 = cell
                .parse()
                .with_context(|| format!("row {}: {:?} value {cell:?} is not a number", row + 2, s.name))?;
            s.push(category, value);
        }
    }
    if series.iter().all(Series::is_empty) {
        bail!("no data rows");
    }
    Ok(series)
}
