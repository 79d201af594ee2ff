// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only: no model math, no file formats.
// Each use case wires the data, ml and infra layers together
// for one command.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Load → encode → train → evaluate → sample predictions → plots
pub mod train_use_case;

// Rebuild a trained classifier and score text
pub mod predict_use_case;

// Hand-written reviews scored after training
pub mod samples;
