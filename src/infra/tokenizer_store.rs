// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Owns the subword encoder: trains it on the training reviews
// the first time, saves it as tokenizer.json, and reloads it on
// every later run (and for `predict`) so ids never drift
// between training and inference.
//
// The encoder is a byte-level BPE:
//   - every byte is in the initial alphabet, so any text can be
//     encoded without an unknown token
//   - decoding maps bytes back exactly, so encode → decode
//     returns the input text
//   - `<pad>` is the first special token, which pins it to id 0
//
// Reference: Sennrich et al. (2016) BPE paper
//            HuggingFace tokenizers crate documentation

use anyhow::{anyhow, bail, Context, Result};
use std::{fs, path::PathBuf};
use tokenizers::{
    models::bpe::{BpeTrainerBuilder, BPE},
    normalizers::NormalizerWrapper,
    pre_tokenizers::byte_level::ByteLevel,
    AddedToken, Tokenizer, TokenizerBuilder, TokenizerImpl,
};

use crate::domain::review::PAD_ID;

pub const PAD_TOKEN: &str = "<pad>";

const TOKENIZER_FILE: &str = "tokenizer.json";

// ─── SubwordEncoder ───────────────────────────────────────────────────────────
/// Text ↔ token id conversion with the vocabulary used in training.
#[derive(Clone)]
pub struct SubwordEncoder {
    tokenizer: Tokenizer,
}

impl SubwordEncoder {
    /// Wrap a tokenizer, refusing one where `<pad>` is not id 0.
    ///
    /// Special tokens are encoded as plain text, so a literal "<pad>"
    /// inside a review becomes ordinary byte-level tokens and only
    /// padding ever produces PAD_ID.
    pub fn new(mut tokenizer: Tokenizer) -> Result<Self> {
        tokenizer.set_encode_special_tokens(true);
        match tokenizer.token_to_id(PAD_TOKEN) {
            Some(PAD_ID) => Ok(Self { tokenizer }),
            Some(other) => bail!(
                "Tokenizer maps '{PAD_TOKEN}' to id {other}; padding requires id {PAD_ID}"
            ),
            None => bail!("Tokenizer has no '{PAD_TOKEN}' token"),
        }
    }

    /// Vocabulary size including special tokens
    pub fn vocab_size(&self) -> usize {
        self.tokenizer.get_vocab_size(true)
    }

    pub fn encode(&self, text: &str) -> Result<Vec<u32>> {
        let encoding = self
            .tokenizer
            .encode(text, false)
            .map_err(|e| anyhow!("Tokenisation error: {e}"))?;
        Ok(encoding.get_ids().to_vec())
    }

    /// Decode ids back to text. Padding is dropped.
    pub fn decode(&self, ids: &[u32]) -> Result<String> {
        self.tokenizer
            .decode(ids, true)
            .map_err(|e| anyhow!("Decode error: {e}"))
    }
}

// ─── TokenizerStore ───────────────────────────────────────────────────────────
pub struct TokenizerStore {
    dir: PathBuf,
}

impl TokenizerStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(TOKENIZER_FILE)
    }

    /// Load the saved encoder, or train one on `texts` and save it.
    pub fn load_or_build(&self, texts: &[String], vocab_size: usize) -> Result<SubwordEncoder> {
        if self.path().exists() {
            tracing::info!("Loading existing tokenizer from '{}'", self.path().display());
            let encoder = self.load()?;
            warn_on_vocab_mismatch(&encoder, vocab_size);
            Ok(encoder)
        } else {
            tracing::info!("Training byte-level BPE tokenizer (target vocab_size={})", vocab_size);
            self.build_and_save(texts, vocab_size)
        }
    }

    /// Load a previously saved tokenizer.json
    pub fn load(&self) -> Result<SubwordEncoder> {
        let path      = self.path();
        let tokenizer = Tokenizer::from_file(&path).map_err(|e| {
            anyhow!("Cannot load tokenizer from '{}': {}", path.display(), e)
        })?;
        SubwordEncoder::new(tokenizer)
    }

    fn build_and_save(&self, texts: &[String], vocab_size: usize) -> Result<SubwordEncoder> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;

        // Special tokens are inserted before any learned merge,
        // so `<pad>` takes id 0.
        let mut trainer = BpeTrainerBuilder::new()
            .vocab_size(vocab_size)
            .min_frequency(2)
            .show_progress(false)
            .special_tokens(vec![AddedToken::from(PAD_TOKEN, true)])
            .initial_alphabet(ByteLevel::alphabet())
            .build();

        let mut tokenizer: TokenizerImpl<BPE, NormalizerWrapper, ByteLevel, ByteLevel, ByteLevel> =
            TokenizerBuilder::new()
                .with_model(BPE::default())
                .with_normalizer(None)
                .with_pre_tokenizer(Some(ByteLevel::default().add_prefix_space(false)))
                .with_post_processor(Some(ByteLevel::default().trim_offsets(false)))
                .with_decoder(Some(ByteLevel::default()))
                .build()
                .map_err(|e| anyhow!("Cannot assemble tokenizer: {e}"))?;

        tokenizer
            .train(&mut trainer, texts.iter())
            .map_err(|e| anyhow!("Tokenizer training failed: {e}"))?;

        let path = self.path();
        tokenizer
            .save(&path, true)
            .map_err(|e| anyhow!("Cannot write '{}': {e}", path.display()))?;

        // Reload through the untyped Tokenizer so training and
        // inference share exactly one code path.
        let encoder = self.load()?;
        tracing::info!(
            "Tokenizer trained: {} tokens, saved to '{}'",
            encoder.vocab_size(),
            path.display()
        );
        Ok(encoder)
    }
}

/// A reused tokenizer keeps the vocabulary it was trained with. Returns
/// true when that differs from what this run asked for.
fn warn_on_vocab_mismatch(encoder: &SubwordEncoder, requested: usize) -> bool {
    let loaded = encoder.vocab_size();
    if loaded == requested {
        return false;
    }
    tracing::warn!(
        "Reusing tokenizer with {} tokens, but vocab_size={} was requested; \
         delete tokenizer.json to retrain it",
        loaded,
        requested
    );
    true
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn corpus() -> Vec<String> {
        [
            "What an excellent performance, the cast was excellent.",
            "The performance was worst, just a waste of money.",
            "An excellent film with a moving performance.",
            "A waste of time. The worst film of the year.",
            "Moderate, it was ok. It might be good.",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    #[test]
    fn test_pad_token_is_zero() {
        let dir     = TempDir::new().expect("create temp dir");
        let encoder = TokenizerStore::new(dir.path())
            .load_or_build(&corpus(), 300)
            .expect("build tokenizer");
        assert_eq!(encoder.tokenizer.token_to_id(PAD_TOKEN), Some(PAD_ID));
        assert!(encoder.vocab_size() > 256);
    }

    #[test]
    fn test_real_text_never_encodes_to_pad() {
        let dir     = TempDir::new().expect("create temp dir");
        let encoder = TokenizerStore::new(dir.path())
            .load_or_build(&corpus(), 300)
            .expect("build tokenizer");
        let ids = encoder.encode("sorryyyyyy tmr onwards the show's gonna end").expect("encode");
        assert!(!ids.is_empty());
        assert!(ids.iter().all(|&id| id != PAD_ID));
    }

    #[test]
    fn test_literal_pad_token_in_text_is_not_padding() {
        let dir     = TempDir::new().expect("create temp dir");
        let encoder = TokenizerStore::new(dir.path())
            .load_or_build(&corpus(), 300)
            .expect("build tokenizer");
        for text in ["great film <pad> really", "<pad>", "<pad><pad> worst"] {
            let ids = encoder.encode(text).expect("encode");
            assert!(!ids.is_empty());
            assert!(ids.iter().all(|&id| id != PAD_ID), "{text:?} encoded to {ids:?}");
        }
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let dir     = TempDir::new().expect("create temp dir");
        let encoder = TokenizerStore::new(dir.path())
            .load_or_build(&corpus(), 300)
            .expect("build tokenizer");
        let text = "What an excellent performance";
        let ids  = encoder.encode(text).expect("encode");
        assert_eq!(encoder.decode(&ids).expect("decode").trim(), text);
    }

    #[test]
    fn test_saved_tokenizer_is_reused() {
        let dir   = TempDir::new().expect("create temp dir");
        let store = TokenizerStore::new(dir.path());
        let first = store.load_or_build(&corpus(), 300).expect("build tokenizer");
        // Different corpus, but the file already exists, so it is loaded.
        let second = store
            .load_or_build(&["zzz qqq".to_string()], 300)
            .expect("load tokenizer");
        let text = "excellent performance";
        assert_eq!(first.encode(text).expect("encode"), second.encode(text).expect("encode"));
    }

    #[test]
    fn test_reused_tokenizer_reports_vocab_mismatch() {
        let dir     = TempDir::new().expect("create temp dir");
        let store   = TokenizerStore::new(dir.path());
        let encoder = store.load_or_build(&corpus(), 300).expect("build tokenizer");

        let reused = store.load_or_build(&corpus(), 8185).expect("load tokenizer");
        assert_eq!(reused.vocab_size(), encoder.vocab_size());
        assert!(warn_on_vocab_mismatch(&reused, 8185));
        assert!(!warn_on_vocab_mismatch(&reused, encoder.vocab_size()));
    }

    #[test]
    fn test_load_without_file_fails() {
        let dir = TempDir::new().expect("create temp dir");
        assert!(TokenizerStore::new(dir.path()).load().is_err());
    }
}
