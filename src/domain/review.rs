// ============================================================
// Layer 3 — Review Domain Types
// ============================================================
// A review travels through two shapes on its way to the model:
//
//   RawReview      → text + label, straight off disk
//   EncodedReview  → token ids + label, after the subword encoder
//
// Labels follow the IMDB convention: 0 = negative, 1 = positive.
// Token id 0 is reserved for padding by the encoder, so an
// EncodedReview never contains a 0 produced from real text.
//
// Reference: Rust Book §5 (Structs), §6 (Enums)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of a negative review
pub const LABEL_NEGATIVE: u8 = 0;

/// Label of a positive review
pub const LABEL_POSITIVE: u8 = 1;

/// Token id used for padding. The encoder registers `<pad>` first and
/// encodes a literal "<pad>" in text as ordinary bytes, so this id
/// never collides with a real subword.
pub const PAD_ID: u32 = 0;

/// The two pre-split halves of the corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Split {
    Train,
    Test,
}

impl Split {
    /// Directory name of the split inside the dataset root
    pub fn dir_name(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// A review as read from disk, before tokenisation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawReview {
    /// File the review came from, kept for log messages
    pub source: String,

    /// Cleaned review text
    pub text: String,

    /// 0 = negative, 1 = positive
    pub label: u8,
}

impl RawReview {
    pub fn new(source: impl Into<String>, text: impl Into<String>, label: u8) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
            label,
        }
    }
}

/// One encoded training example: a variable-length token id
/// sequence plus its label. Never mutated after encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedReview {
    pub tokens: Vec<u32>,
    pub label:  u8,
}

impl EncodedReview {
    pub fn new(tokens: Vec<u32>, label: u8) -> Self {
        Self { tokens, label }
    }

    /// Number of real (unpadded) tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The first `n` token ids, used for the sample printout
    pub fn preview(&self, n: usize) -> &[u32] {
        &self.tokens[..n.min(self.tokens.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_is_clamped_to_length() {
        let review = EncodedReview::new(vec![5, 6, 7], LABEL_POSITIVE);
        assert_eq!(review.preview(11), &[5, 6, 7]);
        assert_eq!(review.preview(2), &[5, 6]);
    }

    #[test]
    fn test_split_dir_names() {
        assert_eq!(Split::Train.dir_name(), "train");
        assert_eq!(Split::Test.to_string(), "test");
    }
}
