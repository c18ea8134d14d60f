// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; sizes are in points on a pre-scaled canvas.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::theme::Rgb;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Size/weight/color of one run of text.
#[derive(Clone, Copy, Debug)]
pub struct Label {
    pub size: f32,
    pub color: Rgb,
    pub bold: bool,
}

impl Label {
    pub const fn new(size: f32, color: Rgb) -> Self { Self { size, color, bold: false } }
    pub const fn bold(size: f32, color: Rgb) -> Self { Self { size, color, bold: true } }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(label: &Label) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(label.size.max(1.0));
        ts.set_color(label.color.to_skia());
        if label.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, label: &Label) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(label));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// (width, height) of the laid-out text.
    pub fn measure(&self, text: &str, label: &Label) -> (f32, f32) {
        let p = self.layout(text, label);
        (p.longest_line(), p.height())
    }

    /// Draw with the alphabetic baseline at `y`, anchored horizontally by `align`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, label: &Label, align: Align) {
        let p = self.layout(text, label);
        let top = y - p.alphabetic_baseline();
        paint_aligned(canvas, &p, x, top, align);
    }

    /// Draw vertically centred on `y` (tick labels next to their tick).
    pub fn draw_middle(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, label: &Label, align: Align) {
        let p = self.layout(text, label);
        let top = y - p.height() * 0.5;
        paint_aligned(canvas, &p, x, top, align);
    }

    /// Draw rotated 90° counter-clockwise, centred on (cx, cy).
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, label: &Label) {
        let p = self.layout(text, label);
        canvas.save();
        canvas.translate((cx, cy));
        canvas.rotate(-90.0, None);
        p.paint(canvas, (-p.longest_line() * 0.5, -p.height() * 0.5));
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

fn paint_aligned(canvas: &skia::Canvas, p: &Paragraph, x: f32, top: f32, align: Align) {
    let w = p.longest_line();
    let left = match align {
        Align::Left => x,
        Align::Center => x - w * 0.5,
        Align::Right => x - w,
    };
    p.paint(canvas, (left, top));
}
