use burn::data::dataset::Dataset;

use crate::domain::review::{EncodedReview, LABEL_POSITIVE};

/// An encoded split held in memory. Implements burn's `Dataset`
/// so the epoch loop can walk it with `Dataset::iter`.
pub struct ReviewDataset {
    reviews: Vec<EncodedReview>,
}

impl ReviewDataset {
    pub fn new(reviews: Vec<EncodedReview>) -> Self { Self { reviews } }

    pub fn review_count(&self) -> usize { self.reviews.len() }

    /// Share of positive labels, logged after loading
    pub fn positive_fraction(&self) -> f64 {
        if self.reviews.is_empty() {
            return 0.0;
        }
        let positives = self.reviews.iter().filter(|r| r.label == LABEL_POSITIVE).count();
        positives as f64 / self.reviews.len() as f64
    }
}

impl Dataset<EncodedReview> for ReviewDataset {
    fn get(&self, index: usize) -> Option<EncodedReview> {
        self.reviews.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.reviews.len()
    }
}
