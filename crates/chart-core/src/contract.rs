// File: crates/chart-core/src/contract.rs
// Summary: Output contract expected from a trend fetcher: parsing and validation only.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::TrendError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub topic: String,
    /// Expected in [0.0, 1.0].
    pub confidence_score: f64,
}

/// What a trend fetcher returns. Only these fields are part of the contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub request_id: String,
    /// Timestamp string, RFC 3339.
    pub generated_at: String,
    pub trends: Vec<Trend>,
}

impl TrendReport {
    /// Parse and validate. Missing fields or a non-float-compatible
    /// `confidence_score` surface as [`TrendError::Malformed`].
    pub fn from_json(text: &str) -> Result<Self, TrendError> {
        let report: TrendReport = serde_json::from_str(text)?;
        report.validate()?;
        Ok(report)
    }

    pub fn generated_at_parsed(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.generated_at).ok()
    }

    pub fn validate(&self) -> Result<(), TrendError> {
        if self.request_id.trim().is_empty() {
            return Err(TrendError::EmptyRequestId);
        }
        if self.generated_at_parsed().is_none() {
            return Err(TrendError::BadTimestamp { value: self.generated_at.clone() });
        }
        for (index, t) in self.trends.iter().enumerate() {
            let score = t.confidence_score;
            if !(score.is_finite() && (0.0..=1.0).contains(&score)) {
                return Err(TrendError::ConfidenceOutOfRange { index, topic: t.topic.clone(), score });
            }
        }
        Ok(())
    }
}
