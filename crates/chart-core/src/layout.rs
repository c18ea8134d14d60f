// File: crates/chart-core/src/layout.rs
// Summary: Chart geometry in points: plot rect, scales, ticks, value-label anchors and legend rows.

use skia_safe as skia;
use tracing::debug;

use crate::error::{RenderError, RenderResult};
use crate::grid::{category_range, nice_ticks};
use crate::scale::PlotScales;
use crate::series::Series;
use crate::spec::ChartSpec;
use crate::text::{Label, TextShaper};
use crate::theme::Theme;
use crate::types::Insets;

// Sizes below are in points; the canvas is scaled by dpi/72 before drawing.
pub const TITLE_SIZE: f32 = 16.0;
pub const TITLE_PAD: f32 = 20.0;
pub const AXIS_LABEL_SIZE: f32 = 12.0;
pub const TICK_SIZE: f32 = 10.0;
pub const VALUE_LABEL_SIZE: f32 = 9.0;
pub const LEGEND_SIZE: f32 = 11.0;
/// Baseline distance above the point for even-indexed series.
pub const LABEL_OFFSET_ABOVE: f32 = 10.0;
/// Baseline distance below the point for odd-indexed series.
pub const LABEL_OFFSET_BELOW: f32 = 15.0;
/// Smallest plot area, per side, that still shows the data.
pub const MIN_PLOT_PT: f32 = 24.0;
const Y_TICK_TARGET: usize = 6;

const LEGEND_INSET: f32 = 8.0;
pub(crate) const LEGEND_PAD: f32 = 6.0;
pub(crate) const LEGEND_HANDLE: f32 = 24.0;
pub(crate) const LEGEND_GAP: f32 = 6.0;

/// Formatted annotation for one data point.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueLabel {
    /// Position of the owning series in supply order.
    pub series: usize,
    pub point: usize,
    pub text: String,
    /// Data point position in points.
    pub anchor: (f32, f32),
    /// Text baseline; the label is centered on `anchor.0`.
    pub baseline: f32,
}

impl ValueLabel {
    pub fn is_above(&self) -> bool {
        self.baseline < self.anchor.1
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    pub series: usize,
    pub name: String,
    /// Vertical center of the row in points.
    pub center_y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub frame: skia::Rect,
    pub rows: Vec<LegendRow>,
}

/// Where everything goes, computed before any pixel is touched.
#[derive(Clone, Debug)]
pub struct ChartLayout {
    pub insets: Insets,
    pub plot: skia::Rect,
    pub scales: PlotScales,
    pub y_ticks: Vec<f64>,
    pub categories: Vec<String>,
    pub value_labels: Vec<ValueLabel>,
    pub legend: Legend,
}

impl ChartLayout {
    /// Lay out `series` (already checked for alignment) on the figure `spec` describes.
    pub fn compute(spec: &ChartSpec, theme: &Theme, shaper: &TextShaper, series: &[Series]) -> RenderResult<Self> {
        let fig_w = spec.figure_size.0 * 72.0;
        let fig_h = spec.figure_size.1 * 72.0;
        let (y_min, y_max) = spec.y_bounds;
        let y_ticks = nice_ticks(y_min, y_max, Y_TICK_TARGET);
        let categories: Vec<String> = series
            .first()
            .map(|s| s.points.iter().map(|p| p.category.clone()).collect())
            .unwrap_or_default();

        let mut insets = Insets::for_text(spec.draw_text);
        if spec.draw_text {
            // Widen the left margin for long tick labels.
            let tick_label = Label::new(TICK_SIZE, theme.tick);
            let widest = y_ticks
                .iter()
                .map(|&v| shaper.measure(&spec.tick_format.format(v), &tick_label).0)
                .fold(0.0f32, f32::max);
            insets.left = insets.left.max(widest + 8.0 + AXIS_LABEL_SIZE + 24.0);
        }
        let plot_w = fig_w - insets.hsum();
        let plot_h = fig_h - insets.vsum();
        if plot_w < MIN_PLOT_PT || plot_h < MIN_PLOT_PT {
            return Err(RenderError::invalid(format!(
                "figure {:.0}x{:.0} pt leaves a {plot_w:.0}x{plot_h:.0} pt plot area after margins",
                fig_w, fig_h
            )));
        }
        let plot = skia::Rect::from_xywh(insets.left, insets.top, plot_w, plot_h);
        debug!(series = series.len(), categories = categories.len(), ?insets, "chart layout");

        let scales = PlotScales::new(
            category_range(categories.len()),
            (y_min, y_max),
            plot.left,
            plot.top,
            plot.right,
            plot.bottom,
        );

        let value_labels = if spec.draw_text { value_labels(spec, &scales, series) } else { Vec::new() };
        let legend = legend(spec, theme, shaper, plot, series);
        Ok(Self { insets, plot, scales, y_ticks, categories, value_labels, legend })
    }
}

// Even series above the point, odd series below; out-of-bounds points get no label.
fn value_labels(spec: &ChartSpec, scales: &PlotScales, series: &[Series]) -> Vec<ValueLabel> {
    let mut out = Vec::new();
    for (si, s) in series.iter().enumerate() {
        for (pi, v) in s.values().enumerate() {
            if !scales.y.contains(v) {
                continue;
            }
            let anchor = scales.point(pi, v);
            let baseline = if si % 2 == 0 { anchor.1 - LABEL_OFFSET_ABOVE } else { anchor.1 + LABEL_OFFSET_BELOW };
            out.push(ValueLabel { series: si, point: pi, text: spec.value_format.format(v), anchor, baseline });
        }
    }
    out
}

fn legend(spec: &ChartSpec, theme: &Theme, shaper: &TextShaper, plot: skia::Rect, series: &[Series]) -> Legend {
    let row_h = LEGEND_SIZE * 1.5;
    let label = Label::new(LEGEND_SIZE, theme.axis_label);
    let text_w = if spec.draw_text {
        series.iter().map(|s| shaper.measure(&s.name, &label).0).fold(0.0f32, f32::max)
    } else {
        0.0
    };
    let left = plot.left + LEGEND_INSET;
    let top = plot.top + LEGEND_INSET;
    let w = LEGEND_PAD * 2.0 + LEGEND_HANDLE + LEGEND_GAP + text_w;
    let h = LEGEND_PAD * 2.0 + row_h * series.len() as f32;
    let rows = series
        .iter()
        .enumerate()
        .map(|(i, s)| LegendRow { series: i, name: s.name.clone(), center_y: top + LEGEND_PAD + row_h * (i as f32 + 0.5) })
        .collect();
    Legend { frame: skia::Rect::from_xywh(left, top, w, h), rows }
}
