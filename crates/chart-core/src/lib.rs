// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the report chart model and headless PNG renderer.

pub mod artifact;
pub mod backend;
pub mod contract;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod render;
pub mod scale;
pub mod series;
pub mod skills;
pub mod spec;
pub mod text;
pub mod theme;
pub mod types;

pub use artifact::RenderedArtifact;
pub use contract::{Trend, TrendReport};
pub use error::{RenderError, RenderResult, SkillError, TrendError};
pub use format::ValueFormat;
pub use layout::{ChartLayout, LegendRow, ValueLabel};
pub use render::{render, ChartRenderer};
pub use series::{Point, Series};
pub use skills::SkillCatalog;
pub use spec::ChartSpec;
pub use theme::{Marker, Rgb, SeriesStyle, Theme};
