// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// All model math lives here:
//
//   model.rs     — Embedding → mean pooling → Linear(1)
//                  plus the BCE-with-logits loss and accuracy
//
//   trainer.rs   — The training loop
//                  Windowed shuffle, Adam, per-epoch validation,
//                  history, CSV row and checkpoint per epoch
//
//   predictor.rs — Scores new text with a trained model and
//                  maps the logit to a sentiment label
//
// Backend selection:
//   NdArray (CPU) by default, Wgpu with `--features wgpu`.
//   Training wraps the backend in Autodiff; validation and
//   prediction use the inner backend via model.valid().
//
// Reference: Burn Book §3 (Building Blocks)
//            Burn Book §5 (Training)

/// Embedding + pooling sentiment model
pub mod model;

/// Training loop with validation and checkpointing
pub mod trainer;

/// Inference on free text
pub mod predictor;

#[cfg(feature = "wgpu")]
pub type InferBackend = burn::backend::Wgpu;

#[cfg(not(feature = "wgpu"))]
pub type InferBackend = burn::backend::NdArray;

pub type TrainBackend = burn::backend::Autodiff<InferBackend>;
