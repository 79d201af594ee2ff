// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the review files on disk and the tensor
// batches the trainer consumes:
//
//   aclImdb/{train,test}/{pos,neg}/*.txt
//       │
//       ▼
//   ImdbLoader        → reads files, labels by directory
//       │
//       ▼
//   Preprocessor      → strips <br /> tags, normalises whitespace
//       │
//       ▼
//   SubwordEncoder    → text to token ids (infra layer)
//       │
//       ▼
//   ReviewDataset     → implements Burn's Dataset trait
//       │
//       ▼
//   ShuffleBuffer     → windowed shuffle (training split only)
//       │
//       ▼
//   Batches           → groups of batch_size
//       │
//       ▼
//   ReviewBatcher     → pads per batch, builds tensors
//
// Reference: Burn Book §4 (Datasets and Batchers)
//            Rust Book §13 (Iterators and Closures)

/// Reads the aclImdb directory layout
pub mod loader;

/// Cleans raw review text
pub mod preprocessor;

/// Implements Burn's Dataset trait for encoded reviews
pub mod dataset;

/// Windowed shuffle and batch grouping iterators
pub mod shuffle;

/// Dynamic padding and Burn's Batcher trait
pub mod batcher;
