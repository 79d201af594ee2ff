// ============================================================
// Layer 4 — Review Batcher
// ============================================================
// Implements Burn's Batcher trait to turn a Vec<EncodedReview>
// into tensors the model can consume.
//
// Reviews have different lengths, so every batch is padded
// dynamically:
//
//   Input:  N reviews, lengths L1..LN
//   Width:  W = max(L1..LN)       (this batch only, not global)
//   Output: tokens [N, W], short rows right-padded with PAD_ID
//           labels [N]
//
//   review 0:  17  403  88   9  → 17 403 88  9
//   review 1:  52   6           → 52   6  0  0
//   review 2:  71  12  30       → 71  12 30  0
//
// Padding never truncates a review and never touches labels.
// A batch of empty reviews is padded to width 1 so the model
// always has at least one position to average over.
//
// Reference: Burn Book §4 (Batcher)
//            Rust Book §8 (Vectors)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::domain::review::{EncodedReview, PAD_ID};

// ─── PaddedBatch ──────────────────────────────────────────────────────────────
/// Backend-free rectangular batch. Row-major token grid plus labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedBatch {
    pub tokens: Vec<u32>,
    pub labels: Vec<u8>,
    pub rows:   usize,
    pub width:  usize,
}

impl PaddedBatch {
    /// Token ids of row `i`, padding included
    pub fn row(&self, i: usize) -> &[u32] {
        &self.tokens[i * self.width..(i + 1) * self.width]
    }
}

/// Pad every review to the longest one in `items`.
pub fn pad_batch(items: &[EncodedReview]) -> PaddedBatch {
    let width = items.iter().map(EncodedReview::len).max().unwrap_or(0).max(1);

    let mut tokens = Vec::with_capacity(items.len() * width);
    for review in items {
        tokens.extend_from_slice(&review.tokens);
        tokens.extend(std::iter::repeat(PAD_ID).take(width - review.len()));
    }

    PaddedBatch {
        tokens,
        labels: items.iter().map(|r| r.label).collect(),
        rows:   items.len(),
        width,
    }
}

/// Right-pad `tokens` with PAD_ID up to `size`. Longer input is returned
/// as-is; nothing is cut.
pub fn pad_to_size(mut tokens: Vec<u32>, size: usize) -> Vec<u32> {
    if tokens.len() < size {
        tokens.resize(size, PAD_ID);
    }
    tokens
}

// ─── ReviewBatch ──────────────────────────────────────────────────────────────
/// A batch ready for the model forward pass.
#[derive(Debug, Clone)]
pub struct ReviewBatch<B: Backend> {
    /// Token ids — shape: [batch_size, max_len_in_batch]
    pub tokens: Tensor<B, 2, Int>,

    /// 0 / 1 labels — shape: [batch_size]
    pub labels: Tensor<B, 1, Int>,
}

impl<B: Backend> ReviewBatch<B> {
    pub fn size(&self) -> usize {
        self.labels.dims()[0]
    }
}

// ─── ReviewBatcher ────────────────────────────────────────────────────────────
/// Holds the target device so tensors land on the right CPU/GPU.
#[derive(Clone, Debug)]
pub struct ReviewBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> ReviewBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<EncodedReview, ReviewBatch<B>> for ReviewBatcher<B> {
    fn batch(&self, items: Vec<EncodedReview>) -> ReviewBatch<B> {
        let padded = pad_batch(&items);

        // Burn Int tensors are built from i64 data and converted to the
        // backend's int element on upload.
        let token_data: Vec<i64> = padded.tokens.iter().map(|&t| t as i64).collect();
        let label_data: Vec<i64> = padded.labels.iter().map(|&l| l as i64).collect();

        let tokens = Tensor::<B, 2, Int>::from_data(
            TensorData::new(token_data, [padded.rows, padded.width]),
            &self.device,
        );
        let labels = Tensor::<B, 1, Int>::from_data(
            TensorData::new(label_data, [padded.rows]),
            &self.device,
        );

        ReviewBatch { tokens, labels }
    }
}
