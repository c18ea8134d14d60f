// File: crates/chart-core/src/error.rs
// Summary: Error types for rendering and the collaborator contract checks.

use std::path::PathBuf;
use thiserror::Error;

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    /// Series or spec rejected before any drawing happened.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("i/o failure at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The raster backend could not be created, read back, or encoded.
    #[error("rendering backend unavailable: {0}")]
    BackendUnavailable(String),
}

impl RenderError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

#[derive(Debug, Error)]
pub enum TrendError {
    #[error("malformed trend report: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("request_id must not be empty")]
    EmptyRequestId,

    #[error("generated_at is not an RFC 3339 timestamp: {value:?}")]
    BadTimestamp { value: String },

    #[error("trend #{index} ({topic:?}) has confidence_score {score} outside [0.0, 1.0]")]
    ConfidenceOutOfRange { index: usize, topic: String, score: f64 },
}

#[derive(Debug, Error)]
pub enum SkillError {
    #[error("cannot read skills directory {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("skills missing README.md: {}", .0.join(", "))]
    MissingReadme(Vec<String>),
}
