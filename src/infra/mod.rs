// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns used by several layers:
//
//   tokenizer_store.rs — Subword encoder persistence
//                        Trains a byte-level BPE on the training
//                        reviews if none exists, or loads the
//                        saved tokenizer.json, so training and
//                        prediction share one vocabulary.
//
//   checkpoint.rs      — Model weights (CompactRecorder) and the
//                        run configuration (JSON).
//
//   metrics.rs         — Per-epoch metrics appended to CSV.
//
//   plot.rs            — Loss / accuracy curves drawn in the
//                        terminal.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Model checkpoint saving and loading
pub mod checkpoint;

/// Tokenizer training, saving, and loading
pub mod tokenizer_store;

/// Training metrics CSV logger
pub mod metrics;

/// Terminal charts of the training history
pub mod plot;
