// File: crates/chart-core/src/theme.rs
// Summary: Report theming: figure/plot colors, the series palette and marker shapes.

use serde::{Deserialize, Serialize};
use skia_safe as skia;
use std::fmt;

/// Opaque RGB color, serialised as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() { return None; }
        let c = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgb(c(0)?, c(2)?, c(4)?))
    }

    pub fn to_skia(self) -> skia::Color {
        skia::Color::from_rgb(self.0, self.1, self.2)
    }

    /// Same color with `alpha` in [0, 1].
    pub fn with_alpha(self, alpha: f32) -> skia::Color {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        skia::Color::from_argb(a, self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Rgb::parse_hex(&s).ok_or_else(|| format!("expected #RRGGBB color, got {s:?}"))
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self { c.to_string() }
}

/// Point marker drawn at every sample of a series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    Circle,
    Square,
    TriangleUp,
    Diamond,
    TriangleDown,
}

/// Marker order for series assignment; index `i` takes `MARKERS[i % len]`.
pub const MARKERS: [Marker; 5] = [
    Marker::Circle,
    Marker::Square,
    Marker::TriangleUp,
    Marker::Diamond,
    Marker::TriangleDown,
];

/// Series palette; the first two are the Finance/Delivery report colors.
pub const PALETTE: [Rgb; 6] = [
    Rgb(0x2E, 0x86, 0xAB),
    Rgb(0xA2, 0x3B, 0x72),
    Rgb(0xF1, 0x8F, 0x01),
    Rgb(0xC7, 0x3E, 0x1D),
    Rgb(0x44, 0xBB, 0xA4),
    Rgb(0x3B, 0x1F, 0x2B),
];

/// Resolved visual style of one series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeriesStyle {
    pub color: Rgb,
    pub marker: Marker,
}

impl SeriesStyle {
    /// Deterministic style for series `index`, optionally overriding the color.
    pub fn for_index(index: usize, color_override: Option<Rgb>) -> Self {
        Self {
            color: color_override.unwrap_or(PALETTE[index % PALETTE.len()]),
            marker: MARKERS[index % MARKERS.len()],
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgb,
    pub plot_background: Rgb,
    pub grid: Rgb,
    pub axis_line: Rgb,
    pub axis_label: Rgb,
    pub title: Rgb,
    pub tick: Rgb,
    pub legend_background: Rgb,
    pub legend_frame: Rgb,
}

impl Theme {
    /// Client-facing report look: white page, soft grey plot area.
    pub fn report() -> Self {
        Self {
            name: "report",
            background: Rgb::WHITE,
            plot_background: Rgb(0xEA, 0xEA, 0xF2),
            grid: Rgb(0x4D, 0x4D, 0x4D),
            axis_line: Rgb(0xFF, 0xFF, 0xFF),
            axis_label: Rgb(0x33, 0x33, 0x33),
            title: Rgb(0x1A, 0x1A, 0x1A),
            tick: Rgb(0x33, 0x33, 0x33),
            legend_background: Rgb::WHITE,
            legend_frame: Rgb(0xCC, 0xCC, 0xCC),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgb::WHITE,
            plot_background: Rgb::WHITE,
            grid: Rgb(0xB0, 0xB0, 0xB0),
            axis_line: Rgb(0x3C, 0x3C, 0x46),
            axis_label: Rgb(0x14, 0x14, 0x1E),
            title: Rgb(0x14, 0x14, 0x1E),
            tick: Rgb(0x64, 0x64, 0x6E),
            legend_background: Rgb::WHITE,
            legend_frame: Rgb(0xCC, 0xCC, 0xCC),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgb(18, 18, 20),
            plot_background: Rgb(24, 24, 28),
            grid: Rgb(120, 120, 130),
            axis_line: Rgb(180, 180, 190),
            axis_label: Rgb(235, 235, 245),
            title: Rgb(245, 245, 250),
            tick: Rgb(150, 150, 160),
            legend_background: Rgb(32, 32, 36),
            legend_frame: Rgb(90, 90, 100),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::report() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::report(), Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to the report theme.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::report()
}
