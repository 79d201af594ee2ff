// ============================================================
// Layer 3 — Sentiment Domain Types
// ============================================================
// The model emits a raw logit. The predictor maps that logit to
// one of three coarse labels using two thresholds:
//
//   score >= positive  → POSITIVE
//   score <= negative  → NEGATIVE
//   otherwise          → NEUTRAL
//
// The defaults (0.5 / -1.0) do not sit on the logit's decision
// boundary at 0. They are kept so results line up with earlier
// runs of this classifier; both are configurable.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Negative => "NEGATIVE",
            Sentiment::Neutral  => "NEUTRAL",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score bands used to turn a logit into a `Sentiment`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Scores at or above this are POSITIVE
    pub positive: f32,

    /// Scores at or below this are NEGATIVE
    pub negative: f32,
}

impl Thresholds {
    pub fn new(positive: f32, negative: f32) -> Self {
        Self { positive, negative }
    }

    /// NaN falls through both comparisons and lands on NEUTRAL.
    pub fn classify(&self, score: f32) -> Sentiment {
        if score >= self.positive {
            Sentiment::Positive
        } else if score <= self.negative {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { positive: 0.5, negative: -1.0 }
    }
}

/// The result of classifying one piece of text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Raw model output (a logit, unbounded)
    pub score:     f32,
    pub sentiment: Sentiment,
}
