// File: crates/chart-core/src/spec.rs
// Summary: ChartSpec rendering configuration (serde-loadable) and its validation.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::{RenderError, RenderResult};
use crate::format::ValueFormat;
use crate::theme::{Rgb, SeriesStyle};
use crate::layout::MIN_PLOT_PT;
use crate::types::{Insets, FIGURE_HEIGHT_IN, FIGURE_WIDTH_IN, REPORT_DPI};

/// Everything about a render except the data.
///
/// Every field has a default, so a JSON config only needs the fields it
/// changes. The defaults describe the Finance vs Delivery report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Format of the per-point value annotations.
    pub value_format: ValueFormat,
    /// Format of the y-axis tick labels.
    pub tick_format: ValueFormat,
    /// Fixed y range `(min, max)`; never derived from the data.
    pub y_bounds: (f64, f64),
    /// Per-series color overrides by position; missing entries use the palette.
    pub colors: Vec<Option<Rgb>>,
    pub output_path: PathBuf,
    pub dpi: u32,
    /// Figure size in inches `(width, height)` before cropping.
    pub figure_size: (f32, f32),
    pub theme: String,
    /// Disable to render shapes only (pixel snapshots without font variance).
    pub draw_text: bool,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            title: "Finance vs Delivery Totals: Last 3 Months Comparison".into(),
            x_label: "Month".into(),
            y_label: "Total Value (Thousands USD)".into(),
            value_format: ValueFormat::currency_thousands(1),
            tick_format: ValueFormat::currency_thousands(0),
            y_bounds: (110.0, 135.0),
            colors: Vec::new(),
            output_path: PathBuf::from("docs/finance_vs_delivery_chart.png"),
            dpi: REPORT_DPI,
            figure_size: (FIGURE_WIDTH_IN, FIGURE_HEIGHT_IN),
            theme: "report".into(),
            draw_text: true,
        }
    }
}

impl ChartSpec {
    /// Load a spec from JSON, falling back to defaults for absent fields.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Pixel dimensions of the uncropped canvas.
    pub fn pixel_size(&self) -> (i32, i32) {
        let (w, h) = self.figure_size;
        let dpi = self.dpi as f32;
        ((w * dpi).round() as i32, (h * dpi).round() as i32)
    }

    /// Pixels per point (1/72 inch).
    pub fn scale(&self) -> f32 {
        self.dpi as f32 / 72.0
    }

    /// Styles for `count` series in supply order.
    pub fn styles(&self, count: usize) -> Vec<SeriesStyle> {
        (0..count)
            .map(|i| SeriesStyle::for_index(i, self.colors.get(i).copied().flatten()))
            .collect()
    }

    pub(crate) fn validate(&self, series_count: usize) -> RenderResult<()> {
        let (lo, hi) = self.y_bounds;
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(RenderError::invalid(format!("y bounds must satisfy min < max, got ({lo}, {hi})")));
        }
        if self.dpi == 0 {
            return Err(RenderError::invalid("dpi must be positive"));
        }
        let (w, h) = self.figure_size;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(RenderError::invalid(format!("figure size must be positive, got {w}x{h} in")));
        }
        let (pw, ph) = self.pixel_size();
        if pw < 16 || ph < 16 {
            return Err(RenderError::invalid(format!("canvas {pw}x{ph} px is too small to draw on")));
        }
        // Tick labels can only widen the left margin, so this is a lower bound.
        let insets = Insets::for_text(self.draw_text);
        let (plot_w, plot_h) = (w * 72.0 - insets.hsum(), h * 72.0 - insets.vsum());
        if plot_w < MIN_PLOT_PT || plot_h < MIN_PLOT_PT {
            return Err(RenderError::invalid(format!(
                "figure {w}x{h} in leaves no room for the plot ({plot_w:.0}x{plot_h:.0} pt after margins)"
            )));
        }
        let mut seen = HashSet::new();
        for (i, style) in self.styles(series_count).into_iter().enumerate() {
            if !seen.insert(style) {
                return Err(RenderError::invalid(format!(
                    "series #{i} repeats color {} with marker {:?}; styles must be distinct",
                    style.color, style.marker
                )));
            }
        }
        Ok(())
    }
}
