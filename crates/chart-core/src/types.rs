// File: crates/chart-core/src/types.rs
// Summary: Shared constants (figure size, resolution) and plot margins in points.

/// Default figure width in inches.
pub const FIGURE_WIDTH_IN: f32 = 10.0;
/// Default figure height in inches.
pub const FIGURE_HEIGHT_IN: f32 = 6.0;
/// Output resolution of the recurring report.
pub const REPORT_DPI: u32 = 300;
/// Padding kept around content when cropping, in inches.
pub const CROP_PAD_IN: f32 = 0.1;

/// Plot-area margins, in points.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }

    /// Base margins: room for labels when text is drawn, a thin border otherwise.
    /// The left side may still grow to fit the widest tick label.
    pub fn for_text(draw_text: bool) -> Self {
        if draw_text { Self::default() } else { Self::new(12.0, 12.0, 12.0, 12.0) }
    }
}

impl Default for Insets {
    // Room for y tick labels + rotated axis label on the left, title on top.
    fn default() -> Self {
        Self::new(84.0, 20.0, 56.0, 52.0)
    }
}
