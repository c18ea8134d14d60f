// File: crates/chart-core/src/render.rs
// Summary: ChartRenderer: validates input, draws the annotated line chart on a headless
// Skia raster surface, crops to content and writes the PNG artifact.

use skia_safe as skia;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

use crate::artifact::{check_target, write_atomic, RenderedArtifact};
use crate::backend::{EncodedPng, RasterCanvas};
use crate::error::RenderResult;
use crate::geometry::content_bounds;
use crate::layout::{
    ChartLayout, AXIS_LABEL_SIZE, LEGEND_GAP, LEGEND_HANDLE, LEGEND_PAD, LEGEND_SIZE, TICK_SIZE, TITLE_PAD,
    TITLE_SIZE, VALUE_LABEL_SIZE,
};
use crate::series::{shared_categories, Series};
use crate::spec::ChartSpec;
use crate::text::{Align, Label, TextShaper};
use crate::theme::{self, Marker, Rgb, SeriesStyle, Theme, MARKERS, PALETTE};
use crate::types::CROP_PAD_IN;

const LINE_WIDTH: f32 = 2.5;
const MARKER_SIZE: f32 = 8.0;
const MARKER_EDGE: f32 = 1.5;
const GRID_WIDTH: f32 = 0.8;
const GRID_ALPHA: f32 = 0.3;

// One render per process at a time; Skia text/font caches are shared state.
static RENDER_LOCK: Mutex<()> = Mutex::new(());

fn lock_renders() -> MutexGuard<'static, ()> {
    RENDER_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Renders labelled categorical series into a single PNG file.
///
/// Each call owns its surface, shaper and paints; nothing is kept between
/// calls, so repeated renders in a long-running host do not accumulate state.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChartRenderer;

impl ChartRenderer {
    pub fn new() -> Self { Self }

    /// Render `series` with `spec` and write the image to `spec.output_path`,
    /// replacing any existing file. Nothing is written on failure.
    pub fn render(&self, series: &[Series], spec: &ChartSpec) -> RenderResult<RenderedArtifact> {
        check_target(&spec.output_path)?;
        // Held through the write so concurrent calls replace the file one at a time.
        let _guard = lock_renders();
        let png = encode_chart(series, spec)?;
        let bytes = write_atomic(&spec.output_path, &png.data)?;
        info!(path = %spec.output_path.display(), width = png.width, height = png.height, bytes, "chart written");
        Ok(RenderedArtifact {
            path: spec.output_path.clone(),
            width: png.width as u32,
            height: png.height as u32,
            bytes,
        })
    }

    /// Render to encoded PNG bytes in memory without touching the filesystem.
    pub fn render_to_png_bytes(&self, series: &[Series], spec: &ChartSpec) -> RenderResult<EncodedPng> {
        let _guard = lock_renders();
        encode_chart(series, spec)
    }

    /// Validate the input and return the geometry a render would draw, in points.
    pub fn layout(&self, series: &[Series], spec: &ChartSpec) -> RenderResult<ChartLayout> {
        shared_categories(series)?;
        spec.validate(series.len())?;
        let _guard = lock_renders();
        ChartLayout::compute(spec, &theme::find(&spec.theme), &TextShaper::new(), series)
    }
}

// Callers hold RENDER_LOCK.
fn encode_chart(series: &[Series], spec: &ChartSpec) -> RenderResult<EncodedPng> {
    shared_categories(series)?;
    spec.validate(series.len())?;
    if series.len() > PALETTE.len().min(MARKERS.len()) {
        warn!(count = series.len(), "more series than palette entries; colors/markers wrap");
    }

    let theme = theme::find(&spec.theme);
    let shaper = TextShaper::new();
    let layout = ChartLayout::compute(spec, &theme, &shaper, series)?;
    let styles = spec.styles(series.len());

    let (width, height) = spec.pixel_size();
    let mut raster = RasterCanvas::select(width, height)?;
    {
        let canvas = raster.canvas();
        canvas.clear(theme.background.to_skia());
        canvas.save();
        canvas.scale((spec.scale(), spec.scale()));
        let frame = Frame { spec, theme: &theme, shaper: &shaper, layout: &layout };
        frame.draw(canvas, series, &styles);
        canvas.restore();
    }

    let rgba = raster.read_rgba8()?;
    let bg = theme.background;
    let crop = content_bounds(&rgba.pixels, width, height, [bg.0, bg.1, bg.2, 255]).map(|r| {
        let pad = (CROP_PAD_IN * spec.dpi as f32).round() as i32;
        r.padded_within(pad, width, height)
    });
    debug!(?crop, width, height, "cropping to content");
    match crop {
        Some(r) => rgba.crop(r).encode_png(spec.dpi),
        None => rgba.encode_png(spec.dpi),
    }
    // raster surface, pixel buffers and shaper drop here on every path
}

/// Draws one laid-out chart onto a canvas already scaled to points.
struct Frame<'a> {
    spec: &'a ChartSpec,
    theme: &'a Theme,
    shaper: &'a TextShaper,
    layout: &'a ChartLayout,
}

impl<'a> Frame<'a> {
    fn draw(&self, canvas: &skia::Canvas, series: &[Series], styles: &[SeriesStyle]) {
        self.draw_plot_area(canvas);
        self.draw_grid(canvas);
        self.draw_spines(canvas);
        if self.spec.draw_text {
            self.draw_tick_labels(canvas);
            self.draw_titles(canvas);
        }

        canvas.save();
        canvas.clip_rect(self.layout.plot, skia::ClipOp::Intersect, true);
        for (s, style) in series.iter().zip(styles) {
            self.draw_series_line(canvas, s, style);
        }
        for (s, style) in series.iter().zip(styles) {
            self.draw_series_markers(canvas, s, style);
        }
        canvas.restore();

        self.draw_value_labels(canvas, styles);
        self.draw_legend(canvas, styles);
    }

    fn draw_plot_area(&self, canvas: &skia::Canvas) {
        let mut paint = skia::Paint::default();
        paint.set_color(self.theme.plot_background.to_skia());
        canvas.draw_rect(self.layout.plot, &paint);
    }

    // Dashed and faint, drawn before any series so data stays on top.
    fn draw_grid(&self, canvas: &skia::Canvas) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(GRID_WIDTH);
        paint.set_color(self.theme.grid.with_alpha(GRID_ALPHA));
        paint.set_path_effect(skia::PathEffect::dash(&[3.0, 2.0], 0.0));

        let (p, scales) = (self.layout.plot, &self.layout.scales);
        for &v in &self.layout.y_ticks {
            let y = scales.y.to_px(v);
            canvas.draw_line((p.left, y), (p.right, y), &paint);
        }
        for i in 0..self.layout.categories.len() {
            let x = scales.x.to_px(i as f64);
            canvas.draw_line((x, p.top), (x, p.bottom), &paint);
        }
    }

    fn draw_spines(&self, canvas: &skia::Canvas) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(1.0);
        paint.set_color(self.theme.axis_line.to_skia());
        canvas.draw_rect(self.layout.plot, &paint);
    }

    fn draw_tick_labels(&self, canvas: &skia::Canvas) {
        let (p, scales) = (self.layout.plot, &self.layout.scales);
        let label = Label::new(TICK_SIZE, self.theme.tick);
        for &v in &self.layout.y_ticks {
            let text = self.spec.tick_format.format(v);
            self.shaper.draw_middle(canvas, &text, p.left - 6.0, scales.y.to_px(v), &label, Align::Right);
        }
        let baseline = p.bottom + TICK_SIZE + 6.0;
        for (i, cat) in self.layout.categories.iter().enumerate() {
            self.shaper.draw(canvas, cat, scales.x.to_px(i as f64), baseline, &label, Align::Center);
        }
    }

    fn draw_titles(&self, canvas: &skia::Canvas) {
        let p = self.layout.plot;
        let cx = (p.left + p.right) * 0.5;

        let title = Label::bold(TITLE_SIZE, self.theme.title);
        self.shaper.draw(canvas, &self.spec.title, cx, p.top - TITLE_PAD, &title, Align::Center);

        let axis = Label::bold(AXIS_LABEL_SIZE, self.theme.axis_label);
        let x_baseline = p.bottom + TICK_SIZE + 6.0 + AXIS_LABEL_SIZE + 12.0;
        self.shaper.draw(canvas, &self.spec.x_label, cx, x_baseline, &axis, Align::Center);

        let tick_label = Label::new(TICK_SIZE, self.theme.tick);
        let widest_tick = self
            .layout
            .y_ticks
            .iter()
            .map(|&v| self.shaper.measure(&self.spec.tick_format.format(v), &tick_label).0)
            .fold(0.0f32, f32::max);
        let y_center = p.left - 6.0 - widest_tick - 8.0 - AXIS_LABEL_SIZE * 0.5;
        self.shaper.draw_vertical(canvas, &self.spec.y_label, y_center, (p.top + p.bottom) * 0.5, &axis);
    }

    fn draw_series_line(&self, canvas: &skia::Canvas, series: &Series, style: &SeriesStyle) {
        let mut path = skia::Path::new();
        for (i, v) in series.values().enumerate() {
            let pt = self.layout.scales.point(i, v);
            if i == 0 { path.move_to(pt); } else { path.line_to(pt); }
        }
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(LINE_WIDTH);
        stroke.set_stroke_join(skia::paint::Join::Round);
        stroke.set_stroke_cap(skia::paint::Cap::Round);
        stroke.set_color(style.color.to_skia());
        canvas.draw_path(&path, &stroke);
    }

    fn draw_series_markers(&self, canvas: &skia::Canvas, series: &Series, style: &SeriesStyle) {
        for (i, v) in series.values().enumerate() {
            draw_marker(canvas, style.marker, self.layout.scales.point(i, v), MARKER_SIZE, style.color);
        }
    }

    fn draw_value_labels(&self, canvas: &skia::Canvas, styles: &[SeriesStyle]) {
        for v in &self.layout.value_labels {
            let label = Label::bold(VALUE_LABEL_SIZE, styles[v.series].color);
            self.shaper.draw(canvas, &v.text, v.anchor.0, v.baseline, &label, Align::Center);
        }
    }

    // Upper-left, framed, with a drop shadow.
    fn draw_legend(&self, canvas: &skia::Canvas, styles: &[SeriesStyle]) {
        let legend = &self.layout.legend;
        let frame = legend.frame;

        let mut shadow = skia::Paint::default();
        shadow.set_anti_alias(true);
        shadow.set_color(skia::Color::from_argb(80, 0, 0, 0));
        canvas.draw_round_rect(frame.with_offset((2.0, 2.0)), 3.0, 3.0, &shadow);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(self.theme.legend_background.with_alpha(0.95));
        canvas.draw_round_rect(frame, 3.0, 3.0, &fill);

        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(0.8);
        border.set_color(self.theme.legend_frame.to_skia());
        canvas.draw_round_rect(frame, 3.0, 3.0, &border);

        let label = Label::new(LEGEND_SIZE, self.theme.axis_label);
        let mut line = skia::Paint::default();
        line.set_anti_alias(true);
        line.set_style(skia::paint::Style::Stroke);
        line.set_stroke_width(LINE_WIDTH);
        let x0 = frame.left + LEGEND_PAD;
        for row in &legend.rows {
            let style = styles[row.series];
            let cy = row.center_y;
            line.set_color(style.color.to_skia());
            canvas.draw_line((x0, cy), (x0 + LEGEND_HANDLE, cy), &line);
            draw_marker(canvas, style.marker, (x0 + LEGEND_HANDLE * 0.5, cy), MARKER_SIZE * 0.85, style.color);
            if self.spec.draw_text {
                self.shaper.draw_middle(canvas, &row.name, x0 + LEGEND_HANDLE + LEGEND_GAP, cy, &label, Align::Left);
            }
        }
    }
}

/// Filled marker of diameter `size` with a white edge.
fn draw_marker(canvas: &skia::Canvas, marker: Marker, (x, y): (f32, f32), size: f32, color: Rgb) {
    let r = size * 0.5;
    let shape = match marker {
        Marker::Circle => None,
        Marker::Square => Some(polygon(&[(x - r, y - r), (x + r, y - r), (x + r, y + r), (x - r, y + r)])),
        Marker::TriangleUp => Some(polygon(&[(x, y - r), (x + r, y + r), (x - r, y + r)])),
        Marker::TriangleDown => Some(polygon(&[(x - r, y - r), (x + r, y - r), (x, y + r)])),
        Marker::Diamond => Some(polygon(&[(x, y - r), (x + r, y), (x, y + r), (x - r, y)])),
    };

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(color.to_skia());
    let mut edge = skia::Paint::default();
    edge.set_anti_alias(true);
    edge.set_style(skia::paint::Style::Stroke);
    edge.set_stroke_width(MARKER_EDGE);
    edge.set_color(Rgb::WHITE.to_skia());

    match shape {
        None => {
            canvas.draw_circle((x, y), r, &fill);
            canvas.draw_circle((x, y), r, &edge);
        }
        Some(path) => {
            canvas.draw_path(&path, &fill);
            canvas.draw_path(&path, &edge);
        }
    }
}

fn polygon(points: &[(f32, f32)]) -> skia::Path {
    let mut path = skia::Path::new();
    for (i, &pt) in points.iter().enumerate() {
        if i == 0 { path.move_to(pt); } else { path.line_to(pt); }
    }
    path.close();
    path
}

/// Render with the default renderer.
pub fn render(series: &[Series], spec: &ChartSpec) -> RenderResult<RenderedArtifact> {
    ChartRenderer::new().render(series, spec)
}
