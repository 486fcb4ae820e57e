// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// All Burn framework code lives here.
//
//   model.rs      — The loan classifier architecture
//                   (Linear → ReLU → Linear)
//
//   inferencer.rs — The inference engine
//                   Encodes applicant records, runs the
//                   classifier on CPU, and maps the arg-max
//                   class back to its label
//
// Reference: Burn Book §3 (Building Blocks)

/// Feed-forward loan classifier
pub mod model;

/// Inference engine: encodes records and predicts labels
pub mod inferencer;
