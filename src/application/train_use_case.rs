// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the full training pipeline in order:
//
//   Step 1: Load train/test reviews     (Layer 4 - data)
//   Step 2: Build / load tokenizer      (Layer 6 - infra)
//   Step 3: Encode both splits          (Layer 6 → Layer 4)
//   Step 4: Save config                 (Layer 6 - infra)
//   Step 5: Run training loop           (Layer 5 - ml)
//   Step 6: Evaluate on the test split  (Layer 5 - ml)
//   Step 7: Classify sample reviews     (Layer 5 - ml)
//   Step 8: Plot loss / accuracy        (Layer 6 - infra)
//
// Reference: Rust Book §13 (Iterators and Closures)
//            Burn Book §5 (Training)

use anyhow::{bail, Result};
use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::application::samples::SAMPLE_REVIEWS;
use crate::data::{dataset::ReviewDataset, loader::ImdbLoader};
use crate::domain::{
    history::TrainingHistory,
    review::{EncodedReview, RawReview, Split},
    sentiment::Thresholds,
    traits::{ReviewSource, SentimentClassifier},
};
use crate::infra::{
    checkpoint::CheckpointManager,
    metrics::MetricsLogger,
    plot::{render_chart, Chart, Series},
    tokenizer_store::{SubwordEncoder, TokenizerStore},
};
use crate::ml::{
    predictor::Predictor,
    trainer::{evaluate, run_training, TrainingArtifacts},
    InferBackend,
};

/// Ids shown per sample in the encoded-example printout
const PREVIEW_TOKENS: usize = 11;

// ─── Training Configuration ──────────────────────────────────────────────────
// Every knob of a run. Saved next to the checkpoints so that
// `predict` can rebuild the same model and thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub data_dir:         String,
    pub output_dir:       String,
    pub vocab_size:       usize,
    pub embedding_dim:    usize,
    pub batch_size:       usize,
    pub shuffle_buffer:   usize,
    pub epochs:           usize,
    pub validation_steps: usize,
    pub lr:               f64,
    pub seed:             Option<u64>,
    pub limit:            Option<usize>,
    pub pad_length:       usize,
    pub thresholds:       Thresholds,
    pub plot:             bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            data_dir:         "aclImdb".to_string(),
            output_dir:       "checkpoints".to_string(),
            vocab_size:       8185,
            embedding_dim:    20,
            batch_size:       38,
            shuffle_buffer:   1000,
            epochs:           15,
            validation_steps: 50,
            lr:               1e-3,
            seed:             None,
            limit:            None,
            pad_length:       64,
            thresholds:       Thresholds::default(),
            plot:             true,
        }
    }
}

impl TrainConfig {
    /// Reject settings that would make the pipeline silently do nothing.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            bail!("batch_size must be at least 1");
        }
        if self.embedding_dim == 0 {
            bail!("embedding_dim must be at least 1");
        }
        if self.thresholds.negative > self.thresholds.positive {
            bail!(
                "negative threshold ({}) is above positive threshold ({})",
                self.thresholds.negative,
                self.thresholds.positive
            );
        }
        Ok(())
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the full training pipeline end to end
    pub fn execute(&self) -> Result<TrainingHistory> {
        let cfg = &self.config;
        cfg.validate()?;

        // ── Step 1: Load both splits ──────────────────────────────────────────
        let loader      = ImdbLoader::new(&cfg.data_dir).with_limit(cfg.limit);
        let raw_train   = loader.load_split(Split::Train)?;
        let raw_test    = loader.load_split(Split::Test)?;

        // ── Step 2: Subword encoder ───────────────────────────────────────────
        let train_texts: Vec<String> = raw_train.iter().map(|r| r.text.clone()).collect();
        let encoder = TokenizerStore::new(&cfg.output_dir)
            .load_or_build(&train_texts, cfg.vocab_size)?;
        let vocab_size = encoder.vocab_size();
        println!("Vocabulary size: {vocab_size}");

        // ── Step 3: Encode ────────────────────────────────────────────────────
        let train = ReviewDataset::new(encode_all(&encoder, &raw_train)?);
        let test  = ReviewDataset::new(encode_all(&encoder, &raw_test)?);
        tracing::info!(
            "Encoded {} train ({:.1}% positive) and {} test reviews",
            train.review_count(),
            train.positive_fraction() * 100.0,
            test.review_count()
        );

        for (raw, review) in raw_train.iter().zip(train.iter()).take(2) {
            let preview = review.preview(PREVIEW_TOKENS);
            tracing::debug!("Example review from '{}'", raw.source);
            println!("Encoded text: {:?}", preview);
            println!("Decoded text: {:?}", encoder.decode(preview)?);
            println!("Label: {}", review.label);
        }

        // ── Step 4: Persist config for `predict` ──────────────────────────────
        let artifacts = TrainingArtifacts {
            checkpoints: CheckpointManager::new(&cfg.output_dir)?,
            metrics:     MetricsLogger::new(&cfg.output_dir)?,
        };
        artifacts.checkpoints.save_config(cfg)?;

        // ── Step 5: Train ─────────────────────────────────────────────────────
        let outcome = run_training(cfg, vocab_size, &train, &test, &artifacts)?;
        println!("\n{}", outcome.model.summary());

        // ── Step 6: Full test evaluation ──────────────────────────────────────
        let device = Default::default();
        let result = evaluate(&outcome.model, &test, cfg.batch_size, None, &device);
        println!("Loss: {}", result.loss);
        println!("Accuracy: {}", result.accuracy);

        if let Some(best) = outcome.history.best_epoch() {
            tracing::info!("Best validation loss {:.4} at epoch {}", best.val_loss, best.epoch);
        }

        // ── Step 7: Sample predictions ────────────────────────────────────────
        let predictor = Predictor::<InferBackend>::new(
            outcome.model,
            encoder,
            cfg.pad_length,
            cfg.thresholds,
            device,
        );
        for text in SAMPLE_REVIEWS {
            let prediction = predictor.classify(text, false)?;
            println!("Prediction Score: {:.4}", prediction.score);
            println!("{}", prediction.sentiment);
        }

        // ── Step 8: Curves ────────────────────────────────────────────────────
        if cfg.plot {
            for chart in history_charts(&outcome.history) {
                println!("\n{}", render_chart(&chart));
            }
        }

        Ok(outcome.history)
    }
}

fn encode_all(encoder: &SubwordEncoder, reviews: &[RawReview]) -> Result<Vec<EncodedReview>> {
    reviews
        .iter()
        .map(|r| Ok(EncodedReview::new(encoder.encode(&r.text)?, r.label)))
        .collect()
}

/// The loss and accuracy charts, training as dots and validation as stars.
pub fn history_charts(history: &TrainingHistory) -> [Chart; 2] {
    let loss = Chart::new("Training and validation loss", "Epoch", "Loss")
        .with_series(Series::new("Training loss", 'o', history.losses()))
        .with_series(Series::new("Validation loss", '*', history.val_losses()));
    let accuracy = Chart::new("Training and validation accuracy", "Epoch", "Accuracy")
        .with_series(Series::new("Training acc", 'o', history.accuracies()))
        .with_series(Series::new("Validation acc", '*', history.val_accuracies()));
    [loss, accuracy]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    use crate::domain::history::EpochMetrics;

    fn write_review(root: &Path, split: &str, label: &str, name: &str, text: &str) {
        let dir = root.join(split).join(label);
        fs::create_dir_all(&dir).expect("create label dir");
        fs::write(dir.join(name), text).expect("write review");
    }

    #[test]
    fn test_default_config_matches_reference_run() {
        let cfg = TrainConfig::default();
        assert_eq!(cfg.batch_size, 38);
        assert_eq!(cfg.shuffle_buffer, 1000);
        assert_eq!(cfg.epochs, 15);
        assert_eq!(cfg.validation_steps, 50);
        assert_eq!(cfg.embedding_dim, 20);
        assert_eq!(cfg.pad_length, 64);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_batch() {
        let cfg = TrainConfig { batch_size: 0, ..TrainConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_crossed_thresholds() {
        let cfg = TrainConfig {
            thresholds: Thresholds::new(-1.0, 0.5),
            ..TrainConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_history_charts_have_both_series() {
        let mut h = TrainingHistory::new();
        h.record(EpochMetrics::new(1, 0.69, 0.5, 0.68, 0.55));
        h.record(EpochMetrics::new(2, 0.55, 0.7, 0.58, 0.68));
        let [loss, accuracy] = history_charts(&h);
        assert_eq!(loss.series.len(), 2);
        assert_eq!(accuracy.series[1].values, vec![0.55, 0.68]);
    }

    #[test]
    fn test_end_to_end_on_tiny_corpus() {
        let data = TempDir::new().expect("create temp dir");
        let out  = TempDir::new().expect("create temp dir");
        let positives = ["excellent film, excellent cast", "a great and moving performance", "loved it, excellent"];
        let negatives = ["worst film, a waste of money", "dull and boring, the worst", "a waste of time"];
        for split in ["train", "test"] {
            for (i, text) in positives.iter().enumerate() {
                write_review(data.path(), split, "pos", &format!("{i}_9.txt"), text);
            }
            for (i, text) in negatives.iter().enumerate() {
                write_review(data.path(), split, "neg", &format!("{i}_1.txt"), text);
            }
        }

        let cfg = TrainConfig {
            data_dir:         data.path().display().to_string(),
            output_dir:       out.path().display().to_string(),
            vocab_size:       300,
            batch_size:       4,
            epochs:           3,
            validation_steps: 1,
            seed:             Some(5),
            plot:             false,
            ..TrainConfig::default()
        };

        let history = TrainUseCase::new(cfg).execute().expect("pipeline");
        assert_eq!(history.len(), 3);
        assert!(out.path().join("tokenizer.json").exists());
        assert!(out.path().join("train_config.json").exists());
        assert!(out.path().join("metrics.csv").exists());
    }
}
