// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer talks to the model only through
// `Classifier`, so the prediction workflow can be exercised
// with a stub in tests and with the Burn model in production.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::applicant::ApplicantRecord;
use crate::domain::errors::PredictionError;

/// One model output row: the raw label and the model's
/// probability for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label:      String,
    pub confidence: f32,
}

// ─── Classifier ───────────────────────────────────────────────────────────────
/// Anything that can label a batch of applicant records.
///
/// Implementations:
///   - Inferencer → the Burn classifier loaded from disk
pub trait Classifier {
    /// Label every record in the batch, in input order.
    /// The returned Vec has the same length as `records`.
    fn classify(&self, records: &[ApplicantRecord]) -> Result<Vec<Classification>, PredictionError>;
}
