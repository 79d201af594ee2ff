// ============================================================
// Layer 2 — Predict Use Case
// ============================================================
// Rebuilds the trained classifier from the output directory
// and scores one piece of text:
//
//   train_config.json  → embedding_dim, pad_length, thresholds
//   tokenizer.json     → subword encoder (and vocab_size)
//   model_epoch_N      → weights of the latest epoch

use anyhow::Result;

use crate::domain::{sentiment::Prediction, traits::SentimentClassifier};
use crate::infra::{checkpoint::CheckpointManager, tokenizer_store::TokenizerStore};
use crate::ml::{model::SentimentModelConfig, predictor::Predictor, InferBackend};

pub struct PredictUseCase {
    predictor: Predictor<InferBackend>,
}

impl PredictUseCase {
    pub fn new(output_dir: &str) -> Result<Self> {
        let ckpt    = CheckpointManager::new(output_dir)?;
        let cfg     = ckpt.load_config()?;
        let encoder = TokenizerStore::new(output_dir).load()?;

        let device = Default::default();
        let model  = SentimentModelConfig::new(encoder.vocab_size())
            .with_embedding_dim(cfg.embedding_dim)
            .init::<InferBackend>(&device);
        let model  = ckpt.load_model(model, &device)?;
        tracing::info!("Model loaded from '{}'", output_dir);

        let predictor = Predictor::new(model, encoder, cfg.pad_length, cfg.thresholds, device);
        Ok(Self { predictor })
    }

    pub fn predict(&self, text: &str, pad: bool) -> Result<Prediction> {
        self.predictor.classify(text, pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    use crate::application::train_use_case::{TrainConfig, TrainUseCase};

    fn trained_output() -> (TempDir, TempDir) {
        let data = TempDir::new().expect("create temp dir");
        let out  = TempDir::new().expect("create temp dir");
        let reviews = [
            ("pos", "an excellent performance, excellent cast"),
            ("pos", "great film, loved every minute"),
            ("neg", "the worst, a waste of money"),
            ("neg", "boring and dull, worst film"),
        ];
        for split in ["train", "test"] {
            for (i, (label, text)) in reviews.iter().enumerate() {
                let dir = data.path().join(split).join(label);
                fs::create_dir_all(&dir).expect("create label dir");
                fs::write(dir.join(format!("{i}_5.txt")), text).expect("write review");
            }
        }
        let cfg = TrainConfig {
            data_dir:   data.path().display().to_string(),
            output_dir: out.path().display().to_string(),
            vocab_size: 300,
            batch_size: 2,
            epochs:     2,
            pad_length: 16,
            seed:       Some(11),
            plot:       false,
            ..TrainConfig::default()
        };
        TrainUseCase::new(cfg).execute().expect("train");
        (data, out)
    }

    #[test]
    fn test_predict_after_training() {
        let (_data, out) = trained_output();
        let use_case = PredictUseCase::new(&out.path().display().to_string()).expect("load");

        let plain  = use_case.predict("What an excellent performance", false).expect("predict");
        let padded = use_case.predict("What an excellent performance", true).expect("predict");
        assert!(plain.score.is_finite());
        assert!(padded.score.is_finite());
    }

    #[test]
    fn test_predict_is_repeatable_across_loads() {
        let (_data, out) = trained_output();
        let dir    = out.path().display().to_string();
        let first  = PredictUseCase::new(&dir).expect("load").predict("dull film", false).expect("predict");
        let second = PredictUseCase::new(&dir).expect("load").predict("dull film", false).expect("predict");
        assert_eq!(first.score, second.score);
        assert_eq!(first.sentiment, second.sentiment);
    }

    #[test]
    fn test_untrained_directory_fails() {
        let out = TempDir::new().expect("create temp dir");
        assert!(PredictUseCase::new(&out.path().display().to_string()).is_err());
    }
}
