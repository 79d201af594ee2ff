// ============================================================
// Layer 4 — IMDB Review Loader
// ============================================================
// Reads the Large Movie Review Dataset in its published
// directory layout:
//
//   <root>/
//     train/pos/*.txt   → label 1
//     train/neg/*.txt   → label 0
//     test/pos/*.txt    → label 1
//     test/neg/*.txt    → label 0
//
// Each .txt file holds exactly one review. Files are read in
// sorted path order, and positive/negative files are
// interleaved, so a run is reproducible and a `limit` still
// yields both classes.
//
// Unlike a document crawler, a missing or empty split is not
// something to warn about and continue from: without the
// corpus there is nothing to train, so every failure here is
// fatal to the run.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{bail, Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::preprocessor::Preprocessor;
use crate::domain::review::{RawReview, Split, LABEL_NEGATIVE, LABEL_POSITIVE};
use crate::domain::traits::ReviewSource;

/// Loads labelled reviews from an aclImdb-style directory.
pub struct ImdbLoader {
    root:         PathBuf,
    /// Keep at most this many reviews per split
    limit:        Option<usize>,
    preprocessor: Preprocessor,
}

impl ImdbLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root:         root.into(),
            limit:        None,
            preprocessor: Preprocessor::new(),
        }
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}

impl ReviewSource for ImdbLoader {
    fn load_split(&self, split: Split) -> Result<Vec<RawReview>> {
        let split_dir = self.root.join(split.dir_name());
        if !split_dir.is_dir() {
            bail!(
                "Dataset split '{}' not found at '{}'. \
                 Point --data-dir at an extracted aclImdb directory.",
                split,
                split_dir.display()
            );
        }

        let positives = list_reviews(&split_dir.join("pos"))?;
        let negatives = list_reviews(&split_dir.join("neg"))?;
        tracing::debug!(
            "{}: {} positive, {} negative files",
            split,
            positives.len(),
            negatives.len()
        );

        let mut files = interleave(positives, negatives);
        if let Some(limit) = self.limit {
            files.truncate(limit);
        }

        if files.is_empty() {
            bail!("Dataset split '{}' at '{}' contains no reviews", split, split_dir.display());
        }

        let mut reviews = Vec::with_capacity(files.len());
        for (path, label) in files {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Cannot read review '{}'", path.display()))?;
            reviews.push(RawReview::new(
                path.display().to_string(),
                self.preprocessor.clean(&text),
                label,
            ));
        }

        tracing::info!("Loaded {} {} reviews", reviews.len(), split);
        Ok(reviews)
    }
}

/// Sorted `.txt` files of one label directory.
fn list_reviews(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Cannot read label directory '{}'", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("txt") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// pos[0], neg[0], pos[1], neg[1], ... then whatever remains of the longer list.
fn interleave(positives: Vec<PathBuf>, negatives: Vec<PathBuf>) -> Vec<(PathBuf, u8)> {
    let mut out = Vec::with_capacity(positives.len() + negatives.len());
    let mut pos = positives.into_iter();
    let mut neg = negatives.into_iter();
    loop {
        match (pos.next(), neg.next()) {
            (None, None) => break,
            (p, n) => {
                if let Some(p) = p {
                    out.push((p, LABEL_POSITIVE));
                }
                if let Some(n) = n {
                    out.push((n, LABEL_NEGATIVE));
                }
            }
        }
    }
    out
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_review(root: &Path, split: &str, label: &str, name: &str, text: &str) {
        let dir = root.join(split).join(label);
        fs::create_dir_all(&dir).expect("create label dir");
        fs::write(dir.join(name), text).expect("write review");
    }

    fn corpus() -> TempDir {
        let root = TempDir::new().expect("create temp dir");
        write_review(root.path(), "train", "pos", "0_9.txt", "Loved it.<br /><br />Ten stars.");
        write_review(root.path(), "train", "pos", "1_8.txt", "A joy to watch");
        write_review(root.path(), "train", "neg", "0_2.txt", "Dull   and slow");
        write_review(root.path(), "train", "neg", "notes.md", "not a review");
        write_review(root.path(), "test", "pos", "0_10.txt", "Brilliant");
        write_review(root.path(), "test", "neg", "0_1.txt", "Awful");
        root
    }

    #[test]
    fn test_reads_both_labels_and_skips_other_files() {
        let root    = corpus();
        let reviews = ImdbLoader::new(root.path()).load_split(Split::Train).expect("load train");
        assert_eq!(reviews.len(), 3);
        assert_eq!(reviews.iter().filter(|r| r.label == LABEL_POSITIVE).count(), 2);
        assert_eq!(reviews.iter().filter(|r| r.label == LABEL_NEGATIVE).count(), 1);
    }

    #[test]
    fn test_interleaves_and_cleans() {
        let root    = corpus();
        let reviews = ImdbLoader::new(root.path()).load_split(Split::Train).expect("load train");
        assert_eq!(reviews[0].text, "Loved it.\n\nTen stars.");
        assert_eq!(reviews[1].label, LABEL_NEGATIVE);
        assert_eq!(reviews[1].text, "Dull and slow");
        assert_eq!(reviews[2].text, "A joy to watch");
    }

    #[test]
    fn test_limit_keeps_both_classes() {
        let root    = corpus();
        let reviews = ImdbLoader::new(root.path())
            .with_limit(Some(2))
            .load_split(Split::Train)
            .expect("load train");
        assert_eq!(reviews.len(), 2);
        assert_ne!(reviews[0].label, reviews[1].label);
    }

    #[test]
    fn test_missing_split_is_fatal() {
        let root = TempDir::new().expect("create temp dir");
        let err  = ImdbLoader::new(root.path()).load_split(Split::Test);
        assert!(err.is_err());
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let err = ImdbLoader::new("/definitely/not/a/dataset").load_split(Split::Train);
        assert!(err.is_err());
    }
}
