// File: crates/chart-core/src/format.rs
// Summary: Pure value-to-label formatters for point annotations and axis ticks.

use serde::{Deserialize, Serialize};

/// Deterministic number formatter. Serialised as a tagged object so report
/// configs can pick one, e.g. `{"kind":"currency","symbol":"$","suffix":"K","decimals":1}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueFormat {
    Currency {
        symbol: String,
        #[serde(default)]
        suffix: String,
        #[serde(default)]
        decimals: usize,
    },
    Plain {
        #[serde(default)]
        decimals: usize,
    },
    /// Fraction rendered as a percentage: `0.25 -> "25%"`.
    Percent {
        #[serde(default)]
        decimals: usize,
    },
}

impl ValueFormat {
    /// `$<value>K` with the given number of decimals.
    pub fn currency_thousands(decimals: usize) -> Self {
        Self::Currency { symbol: "$".into(), suffix: "K".into(), decimals }
    }

    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Currency { symbol, suffix, decimals } => {
                let (neg, mag) = split_sign(value, *decimals);
                format!("{}{symbol}{mag}{suffix}", if neg { "-" } else { "" })
            }
            Self::Plain { decimals } => {
                let (neg, mag) = split_sign(value, *decimals);
                format!("{}{mag}", if neg { "-" } else { "" })
            }
            Self::Percent { decimals } => {
                let (neg, mag) = split_sign(value * 100.0, *decimals);
                format!("{}{mag}%", if neg { "-" } else { "" })
            }
        }
    }
}

impl Default for ValueFormat {
    fn default() -> Self { Self::Plain { decimals: 1 } }
}

// Sign is dropped when the rounded magnitude is zero, so -0.04 at 1dp is "0.0".
fn split_sign(value: f64, decimals: usize) -> (bool, String) {
    let mag = format!("{:.*}", decimals, value.abs());
    let nonzero = mag.bytes().any(|b| (b'1'..=b'9').contains(&b));
    (value < 0.0 && nonzero, mag)
}
