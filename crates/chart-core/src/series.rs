// File: crates/chart-core/src/series.rs
// Summary: Named categorical series and the positional alignment check used before rendering.

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};

/// One (category, value) sample. Categories are display labels only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub category: String,
    pub value: f64,
}

impl Point {
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self { category: category.into(), value }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub points: Vec<Point>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), points: Vec::new() }
    }

    /// Build from parallel category/value slices, e.g. months and totals.
    /// Extra entries on the longer side are dropped.
    pub fn from_pairs<S: AsRef<str>>(name: impl Into<String>, categories: &[S], values: &[f64]) -> Self {
        let points = categories
            .iter()
            .zip(values)
            .map(|(c, &v)| Point::new(c.as_ref(), v))
            .collect();
        Self { name: name.into(), points }
    }

    pub fn push(&mut self, category: impl Into<String>, value: f64) {
        self.points.push(Point::new(category, value));
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }
}

/// Check that `series` can share one categorical axis and return the
/// category labels (taken from the first series).
///
/// Alignment is positional: only lengths are compared, so repeated or empty
/// labels are fine.
pub fn shared_categories(series: &[Series]) -> RenderResult<Vec<&str>> {
    let first = series
        .first()
        .ok_or_else(|| RenderError::invalid("at least one series is required"))?;
    if first.is_empty() {
        return Err(RenderError::invalid(format!("series {:?} has no points", first.name)));
    }
    for s in &series[1..] {
        if s.len() != first.len() {
            return Err(RenderError::invalid(format!(
                "series {:?} has {} points but {:?} has {}",
                s.name,
                s.len(),
                first.name,
                first.len()
            )));
        }
    }
    for s in series {
        if let Some(p) = s.points.iter().find(|p| !p.value.is_finite()) {
            return Err(RenderError::invalid(format!(
                "series {:?} has non-finite value at {:?}",
                s.name, p.category
            )));
        }
    }
    Ok(first.points.iter().map(|p| p.category.as_str()).collect())
}
