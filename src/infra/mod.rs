// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Reading the trained model from disk:
//
//   artifact.rs        — Opens the model directory, validates
//                        the manifest against the applicant
//                        schema, and restores the classifier
//                        weights with Burn's CompactRecorder.
//
//   tokenizer_store.rs — Loads the notes vocabulary used by
//                        the text feature.
//
// Reference: Rust Book §7 (Modules)
//            Burn Book §5 (Checkpointing)

/// Model manifest and weights loading
pub mod artifact;

/// Notes tokenizer loading
pub mod tokenizer_store;

/// On-disk artifacts for unit tests
#[cfg(test)]
pub mod fixtures;
