// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Epoch loop over the windowed-shuffled training split, Adam
// updates on binary cross-entropy, and a short validation pass
// after every epoch.
//
// Per epoch:
//   1. reshuffle the training stream (fresh seed from the run RNG)
//   2. forward + loss + backward + Adam step for every batch
//   3. validate on the first `validation_steps` test batches
//   4. record EpochMetrics, append CSV row, save checkpoint
//
// NaN loss is not intercepted. It flows into the history, the
// CSV and the plots exactly as produced.
//
// Key Burn insight:
//   - Training uses an Autodiff backend for gradients
//   - model.valid() returns the model on the inner backend, so
//     validation batches are built for that backend
//
// Reference: Burn Book §5, Kingma & Ba (2015) Adam

use anyhow::Result;
use burn::{
    data::{dataloader::batcher::Batcher, dataset::Dataset},
    module::AutodiffModule,
    optim::{AdamConfig, GradientsParams, Optimizer},
    prelude::*,
    tensor::backend::AutodiffBackend,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::application::train_use_case::TrainConfig;
use crate::data::{
    batcher::ReviewBatcher,
    dataset::ReviewDataset,
    shuffle::{Batches, ShuffleBuffer},
};
use crate::domain::history::{EpochMetrics, TrainingHistory};
use crate::infra::{checkpoint::CheckpointManager, metrics::MetricsLogger};
use crate::ml::model::{count_correct, SentimentModel, SentimentModelConfig};
use crate::ml::{InferBackend, TrainBackend};

/// Where per-epoch side effects go
pub struct TrainingArtifacts {
    pub checkpoints: CheckpointManager,
    pub metrics:     MetricsLogger,
}

pub struct TrainingOutcome<B: Backend> {
    /// Trained model on the non-autodiff backend, ready for inference
    pub model:   SentimentModel<B>,
    pub history: TrainingHistory,
}

/// Loss / accuracy over a set of batches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub loss:     f64,
    pub accuracy: f64,
}

/// Sample-weighted running means
#[derive(Default)]
struct RunningMetrics {
    loss_sum: f64,
    correct:  usize,
    samples:  usize,
}

impl RunningMetrics {
    fn update(&mut self, batch_loss: f64, correct: usize, batch_size: usize) {
        self.loss_sum += batch_loss * batch_size as f64;
        self.correct  += correct;
        self.samples  += batch_size;
    }

    fn finish(&self) -> Evaluation {
        if self.samples == 0 {
            return Evaluation { loss: f64::NAN, accuracy: 0.0 };
        }
        Evaluation {
            loss:     self.loss_sum / self.samples as f64,
            accuracy: self.correct as f64 / self.samples as f64,
        }
    }
}

/// Train on the default device of the configured backend.
pub fn run_training(
    cfg:        &TrainConfig,
    vocab_size: usize,
    train:      &ReviewDataset,
    test:       &ReviewDataset,
    artifacts:  &TrainingArtifacts,
) -> Result<TrainingOutcome<InferBackend>> {
    let device = <TrainBackend as Backend>::Device::default();
    tracing::info!("Using device: {:?}", device);
    train_loop::<TrainBackend>(cfg, vocab_size, train, test, artifacts, &device)
}

pub fn train_loop<B: AutodiffBackend>(
    cfg:        &TrainConfig,
    vocab_size: usize,
    train:      &ReviewDataset,
    test:       &ReviewDataset,
    artifacts:  &TrainingArtifacts,
    device:     &B::Device,
) -> Result<TrainingOutcome<B::InnerBackend>> {
    cfg.validate()?;

    // ── Build model ───────────────────────────────────────────────────────────
    let model_cfg = SentimentModelConfig::new(vocab_size).with_embedding_dim(cfg.embedding_dim);
    let mut model: SentimentModel<B> = model_cfg.init(device);
    tracing::info!(
        "Model ready: vocab_size={}, embedding_dim={}, params={}",
        vocab_size,
        cfg.embedding_dim,
        model.num_params()
    );

    // ── Adam optimiser ────────────────────────────────────────────────────────
    let mut optim = AdamConfig::new().with_epsilon(1e-7).init();

    let train_batcher = ReviewBatcher::<B>::new(device.clone());
    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let mut history = TrainingHistory::new();
    let mut best_val_loss = f64::INFINITY;

    for epoch in 1..=cfg.epochs {
        // ── Training phase ────────────────────────────────────────────────────
        let epoch_rng = StdRng::seed_from_u64(rng.gen());
        let stream    = ShuffleBuffer::new(train.iter(), cfg.shuffle_buffer, epoch_rng);

        let mut running = RunningMetrics::default();
        for items in Batches::new(stream, cfg.batch_size) {
            let batch      = train_batcher.batch(items);
            let batch_size = batch.size();

            let (loss, logits) = model.forward_loss(batch.tokens, batch.labels.clone());
            let correct        = count_correct(logits, batch.labels);
            let loss_val: f64  = loss.clone().into_scalar().elem::<f64>();
            running.update(loss_val, correct, batch_size);

            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optim.step(cfg.lr, model, grads);
        }
        let train_eval = running.finish();

        // ── Validation phase ──────────────────────────────────────────────────
        let model_valid = model.valid();
        let val_eval = evaluate(
            &model_valid,
            test,
            cfg.batch_size,
            Some(cfg.validation_steps),
            device,
        );

        let metrics = EpochMetrics::new(
            epoch,
            train_eval.loss,
            train_eval.accuracy,
            val_eval.loss,
            val_eval.accuracy,
        );

        println!(
            "Epoch {:>3}/{} | loss={:.4} | accuracy={:.4} | val_loss={:.4} | val_accuracy={:.4}",
            epoch, cfg.epochs, metrics.loss, metrics.accuracy, metrics.val_loss, metrics.val_accuracy,
        );
        if metrics.is_improvement(best_val_loss) {
            best_val_loss = metrics.val_loss;
            tracing::debug!("Epoch {} improved val_loss to {:.4}", epoch, best_val_loss);
        }
        if metrics.loss.is_nan() {
            tracing::warn!("Epoch {} produced a NaN training loss", epoch);
        }

        history.record(metrics);
        artifacts.metrics.log(&metrics)?;
        artifacts.checkpoints.save_model(&model, epoch)?;
    }

    tracing::info!("Training complete after {} epochs", history.len());
    Ok(TrainingOutcome { model: model.valid(), history })
}

/// Evaluate on `dataset` in order, stopping after `max_batches` if given.
pub fn evaluate<B: Backend>(
    model:       &SentimentModel<B>,
    dataset:     &ReviewDataset,
    batch_size:  usize,
    max_batches: Option<usize>,
    device:      &B::Device,
) -> Evaluation {
    let batcher = ReviewBatcher::<B>::new(device.clone());
    let limit   = max_batches.unwrap_or(usize::MAX);

    let mut running = RunningMetrics::default();
    for items in Batches::new(dataset.iter(), batch_size).take(limit) {
        let batch = batcher.batch(items);
        let rows  = batch.size();

        let (loss, logits) = model.forward_loss(batch.tokens, batch.labels.clone());
        let correct        = count_correct(logits, batch.labels);
        running.update(loss.into_scalar().elem::<f64>(), correct, rows);
    }
    running.finish()
}
