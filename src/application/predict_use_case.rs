// ============================================================
// Layer 2 — PredictUseCase
// ============================================================
// One prediction request, end to end:
//
//   Step 1: Normalise the raw form fields     (Layer 4 - data)
//   Step 2: Classify a one-row batch          (Layer 5 - ml)
//   Step 3: Take the first (only) result
//   Step 4: Map its label to a verdict        (Layer 3 - domain)
//
// `predict` never fails: any error along the way comes back as
// "Error: <message>". `assess` exposes the typed result for
// callers that want to tell the causes apart.

use std::path::Path;

use crate::data::normalizer::InputNormalizer;
use crate::domain::applicant::RawApplication;
use crate::domain::errors::{ModelLoadError, PredictionError};
use crate::domain::traits::Classifier;
use crate::domain::verdict::{LabelPolicy, Verdict};
use crate::infra::artifact::ModelArtifact;
use crate::ml::inferencer::Inferencer;

/// The outcome of a successful prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub verdict:    Verdict,
    pub label:      String,
    pub confidence: f32,
}

pub struct PredictUseCase<C: Classifier = Inferencer> {
    normalizer: InputNormalizer,
    classifier: C,
    policy:     LabelPolicy,
}

impl PredictUseCase<Inferencer> {
    /// Load the model artifact from `dir`. Any failure is fatal
    /// for the caller; there is no fallback model.
    pub fn from_model_dir(dir: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        let artifact   = ModelArtifact::open(dir)?;
        let inferencer = Inferencer::from_artifact(&artifact)?;
        let policy     = LabelPolicy::new(artifact.manifest().approved_labels.clone());

        tracing::info!("Approved labels: {:?}", policy.approved_labels());
        Ok(Self::new(inferencer, policy))
    }
}

impl<C: Classifier> PredictUseCase<C> {
    pub fn new(classifier: C, policy: LabelPolicy) -> Self {
        Self { normalizer: InputNormalizer::new(), classifier, policy }
    }

    pub fn assess(&self, raw: &RawApplication) -> Result<Assessment, PredictionError> {
        let record = self.normalizer.normalize(raw)?;

        let first = self
            .classifier
            .classify(std::slice::from_ref(&record))?
            .into_iter()
            .next()
            .ok_or_else(|| PredictionError::Inference("model returned no prediction".to_string()))?;

        let verdict = self.policy.verdict(&first.label);
        Ok(Assessment { verdict, label: first.label, confidence: first.confidence })
    }

    /// The verdict string, or "Error: <message>".
    pub fn predict(&self, raw: &RawApplication) -> String {
        match self.assess(raw) {
            Ok(assessment) => {
                tracing::info!(
                    "Label '{}' (p={:.4}) → {}",
                    assessment.label,
                    assessment.confidence,
                    assessment.verdict
                );
                assessment.verdict.to_string()
            }
            Err(e) => {
                tracing::warn!("Prediction failed: {e}");
                format!("Error: {e}")
            }
        }
    }
}
