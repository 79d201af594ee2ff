// ============================================================
// Layer 3 — Training History
// ============================================================
// One EpochMetrics row is produced at the end of every epoch.
// TrainingHistory only ever grows: rows are appended in epoch
// order and never edited, so the plotter and the CSV logger
// always see the same sequence the trainer produced.
//
// NaN is a legal value here. A diverged run is recorded as-is.

use serde::{Deserialize, Serialize};

/// Scalars recorded for a single epoch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochMetrics {
    /// The epoch number (starts at 1)
    pub epoch: usize,

    /// Mean binary cross-entropy over the epoch's training batches
    pub loss: f64,

    /// Fraction of training reviews classified correctly
    pub accuracy: f64,

    /// Mean loss over the validation batches
    pub val_loss: f64,

    /// Fraction of validation reviews classified correctly
    pub val_accuracy: f64,
}

impl EpochMetrics {
    pub fn new(epoch: usize, loss: f64, accuracy: f64, val_loss: f64, val_accuracy: f64) -> Self {
        Self { epoch, loss, accuracy, val_loss, val_accuracy }
    }

    /// Returns true if this epoch improved over the previous best val_loss
    pub fn is_improvement(&self, best_val_loss: f64) -> bool {
        self.val_loss < best_val_loss
    }
}

/// Append-only per-epoch record of a training run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingHistory {
    epochs: Vec<EpochMetrics>,
}

impl TrainingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, metrics: EpochMetrics) {
        self.epochs.push(metrics);
    }

    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EpochMetrics> {
        self.epochs.iter()
    }

    pub fn last(&self) -> Option<&EpochMetrics> {
        self.epochs.last()
    }

    pub fn losses(&self) -> Vec<f64> {
        self.iter().map(|m| m.loss).collect()
    }

    pub fn accuracies(&self) -> Vec<f64> {
        self.iter().map(|m| m.accuracy).collect()
    }

    pub fn val_losses(&self) -> Vec<f64> {
        self.iter().map(|m| m.val_loss).collect()
    }

    pub fn val_accuracies(&self) -> Vec<f64> {
        self.iter().map(|m| m.val_accuracy).collect()
    }

    /// Epoch with the lowest validation loss. NaN rows never win.
    pub fn best_epoch(&self) -> Option<&EpochMetrics> {
        let mut best: Option<&EpochMetrics> = None;
        for m in &self.epochs {
            match best {
                None if !m.val_loss.is_nan() => best = Some(m),
                Some(b) if m.is_improvement(b.val_loss) => best = Some(m),
                _ => {}
            }
        }
        best
    }
}
