// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer talks to the corpus and to the trained
// classifier through these two traits only. The IMDB directory
// loader and the burn-backed predictor are the implementations
// today; a different corpus or model only has to implement the
// same trait to slot in.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::review::{RawReview, Split};
use crate::domain::sentiment::Prediction;

// ─── ReviewSource ─────────────────────────────────────────────────────────────
/// Anything that can produce the labelled reviews of one split.
///
/// Implementations:
///   - ImdbLoader → reads the aclImdb directory layout
pub trait ReviewSource {
    /// Load every review of `split`. Failing to reach the corpus is an error;
    /// there is no partial result.
    fn load_split(&self, split: Split) -> Result<Vec<RawReview>>;
}

// ─── SentimentClassifier ──────────────────────────────────────────────────────
/// Anything that can score free text.
///
/// Implementations:
///   - Predictor → embedding + pooling model trained by this crate
pub trait SentimentClassifier {
    /// Score `text`. With `pad` set, the encoded text is zero-padded to the
    /// classifier's fixed prediction length first.
    fn classify(&self, text: &str, pad: bool) -> Result<Prediction>;
}
