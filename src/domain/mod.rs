// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums and traits describing what the
// system works with: reviews, labels, predictions and the
// per-epoch training record.
//
// Rules for this layer:
//   - NO burn types
//   - NO file I/O
//   - Only plain data and the traits other layers implement
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Raw and encoded reviews, splits, padding id
pub mod review;

// Sentiment labels, thresholds and predictions
pub mod sentiment;

// Per-epoch metrics and the append-only history
pub mod history;

// Core abstractions (traits) that other layers implement
pub mod traits;
