// ============================================================
// Layer 5 — Predictor
// ============================================================
// Scores free text with a trained model:
//
//   text → Preprocessor → SubwordEncoder → [pad to 64] → model → logit
//
// The logit is mapped to POSITIVE / NEGATIVE / NEUTRAL by the
// configured thresholds. Token ids stay integers all the way
// into the embedding lookup.
//
// Inference runs on the non-autodiff backend, so the same text
// with the same weights always gives the same score.

use anyhow::Result;
use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::batcher::{pad_to_size, ReviewBatcher};
use crate::data::preprocessor::Preprocessor;
use crate::domain::review::EncodedReview;
use crate::domain::sentiment::{Prediction, Thresholds};
use crate::domain::traits::SentimentClassifier;
use crate::infra::tokenizer_store::SubwordEncoder;
use crate::ml::model::SentimentModel;

pub struct Predictor<B: Backend> {
    model:        SentimentModel<B>,
    encoder:      SubwordEncoder,
    batcher:      ReviewBatcher<B>,
    preprocessor: Preprocessor,
    pad_length:   usize,
    thresholds:   Thresholds,
}

impl<B: Backend> Predictor<B> {
    pub fn new(
        model:      SentimentModel<B>,
        encoder:    SubwordEncoder,
        pad_length: usize,
        thresholds: Thresholds,
        device:     B::Device,
    ) -> Self {
        Self {
            model,
            encoder,
            batcher: ReviewBatcher::new(device),
            preprocessor: Preprocessor::new(),
            pad_length,
            thresholds,
        }
    }

    /// Token ids the model will see for `text`
    pub fn encode(&self, text: &str, pad: bool) -> Result<Vec<u32>> {
        let tokens = self.encoder.encode(&self.preprocessor.clean(text))?;
        Ok(if pad { pad_to_size(tokens, self.pad_length) } else { tokens })
    }

    /// Raw logit for `text`
    pub fn score(&self, text: &str, pad: bool) -> Result<f32> {
        let tokens = self.encode(text, pad)?;
        let batch  = self.batcher.batch(vec![EncodedReview::new(tokens, 0)]);
        Ok(self.model.forward(batch.tokens).into_scalar().elem::<f32>())
    }
}

impl<B: Backend> SentimentClassifier for Predictor<B> {
    fn classify(&self, text: &str, pad: bool) -> Result<Prediction> {
        let score = self.score(text, pad)?;
        tracing::debug!("Prediction Score: {score}");
        Ok(Prediction { score, sentiment: self.thresholds.classify(score) })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;
    use tempfile::TempDir;

    use crate::domain::review::PAD_ID;
    use crate::domain::sentiment::Sentiment;
    use crate::infra::tokenizer_store::TokenizerStore;
    use crate::ml::model::SentimentModelConfig;

    type TestBackend = NdArray;

    fn predictor(dir: &TempDir) -> Predictor<TestBackend> {
        let texts: Vec<String> = [
            "What an excellent performance, truly excellent.",
            "The performance was worst, just a waste of money.",
            "An excellent film. A moving performance.",
            "A waste of time and the worst film of the year.",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let encoder = TokenizerStore::new(dir.path())
            .load_or_build(&texts, 300)
            .expect("build tokenizer");
        let device = Default::default();
        let model  = SentimentModelConfig::new(encoder.vocab_size()).init(&device);
        Predictor::new(model, encoder, 64, Thresholds::default(), device)
    }

    #[test]
    fn test_excellent_performance_gets_a_label() {
        let dir = TempDir::new().expect("create temp dir");
        let p   = predictor(&dir);
        let prediction = p.classify("What an excellent performance", false).expect("classify");
        assert!(matches!(
            prediction.sentiment,
            Sentiment::Positive | Sentiment::Negative | Sentiment::Neutral
        ));
        assert_eq!(prediction.sentiment, Thresholds::default().classify(prediction.score));
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let dir = TempDir::new().expect("create temp dir");
        let p   = predictor(&dir);
        let text = "The performance was worst just a waste of money ";
        for pad in [false, true] {
            let a = p.classify(text, pad).expect("classify");
            let b = p.classify(text, pad).expect("classify");
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_padding_to_64() {
        let dir = TempDir::new().expect("create temp dir");
        let p   = predictor(&dir);
        let unpadded = p.encode("Moderate it was ok ok", false).expect("encode");
        let padded   = p.encode("Moderate it was ok ok", true).expect("encode");
        assert_eq!(padded.len(), 64);
        assert_eq!(&padded[..unpadded.len()], unpadded.as_slice());
        assert!(padded[unpadded.len()..].iter().all(|&t| t == PAD_ID));
    }

    #[test]
    fn test_empty_text_does_not_fail() {
        let dir = TempDir::new().expect("create temp dir");
        let p   = predictor(&dir);
        assert!(p.classify("", false).is_ok());
        assert!(p.classify("   ", true).is_ok());
    }
}
