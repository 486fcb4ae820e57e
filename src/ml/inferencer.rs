// ============================================================
// Layer 5 — Inferencer
// ============================================================
use burn::prelude::*;
use burn::backend::ndarray::NdArrayDevice;
use burn::tensor::{activation::softmax, TensorData};

use crate::data::encoder::FeatureEncoder;
use crate::domain::applicant::ApplicantRecord;
use crate::domain::errors::{ModelLoadError, PredictionError};
use crate::domain::traits::{Classification, Classifier};
use crate::infra::artifact::ModelArtifact;
use crate::ml::model::LoanClassifier;

type InferBackend = burn::backend::NdArray;

/// The loaded classifier plus everything needed to feed it.
/// Read-only after construction.
pub struct Inferencer {
    model:   LoanClassifier<InferBackend>,
    encoder: FeatureEncoder,
    labels:  Vec<String>,
    device:  NdArrayDevice,
}

impl Inferencer {
    pub fn from_artifact(artifact: &ModelArtifact) -> Result<Self, ModelLoadError> {
        let device   = NdArrayDevice::default();
        let manifest = artifact.manifest();

        let encoder = FeatureEncoder::new(manifest.schema.clone(), artifact.load_tokenizer()?)?;
        let model   = artifact.load_model::<InferBackend>(&device)?;

        tracing::info!(
            "Classifier ready: {} features → {} classes {:?}",
            encoder.width(),
            manifest.labels.len(),
            manifest.labels
        );
        Ok(Self { model, encoder, labels: manifest.labels.clone(), device })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn feature_width(&self) -> usize {
        self.encoder.width()
    }

    fn encode_batch(&self, records: &[ApplicantRecord]) -> Result<Vec<f32>, PredictionError> {
        let width = self.encoder.width();
        let mut flat = Vec::with_capacity(records.len() * width);

        for record in records {
            let row = self.encoder.encode(record)?;
            if row.len() != width {
                return Err(PredictionError::Schema(format!(
                    "encoded {} features, model expects {}",
                    row.len(),
                    width
                )));
            }
            flat.extend(row);
        }
        Ok(flat)
    }
}

impl Classifier for Inferencer {
    fn classify(&self, records: &[ApplicantRecord]) -> Result<Vec<Classification>, PredictionError> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let flat  = self.encode_batch(records)?;
        let shape = [records.len(), self.encoder.width()];
        let input = Tensor::<InferBackend, 2>::from_data(TensorData::new(flat, shape), &self.device);

        // Forward pass, then softmax over the class dimension
        let logits = self.model.forward(input);
        let probs: Vec<f32> = softmax(logits, 1)
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| PredictionError::Inference(format!("cannot read model output: {e:?}")))?;

        let classes = self.labels.len();
        if probs.len() != records.len() * classes {
            return Err(PredictionError::Schema(format!(
                "model produced {} values for {} rows of {} classes",
                probs.len(),
                records.len(),
                classes
            )));
        }

        let results: Vec<Classification> = probs
            .chunks(classes)
            .map(|row| {
                let (index, confidence) = argmax(row);
                Classification { label: self.labels[index].clone(), confidence }
            })
            .collect();

        tracing::debug!("Classified {} record(s): {:?}", records.len(), results);
        Ok(results)
    }
}

/// Index and value of the largest entry; the first one wins ties.
fn argmax(row: &[f32]) -> (usize, f32) {
    let mut best = (0, f32::NEG_INFINITY);
    for (i, &p) in row.iter().enumerate() {
        if p > best.1 {
            best = (i, p);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::nn::Initializer;
    use crate::infra::fixtures;

    fn record(income: f64, status: &str, text: &str) -> ApplicantRecord {
        ApplicantRecord {
            income,
            loan_amount:       2000.0,
            credit_score:      720.0,
            employment_status: status.to_string(),
            dti_ratio:         0.2,
            text:              text.to_string(),
        }
    }

    fn inferencer(labels: &[&str], text_buckets: usize, init: Initializer) -> (tempfile::TempDir, Inferencer) {
        let dir = tempfile::tempdir().unwrap();
        fixtures::write_artifact_with(dir.path(), labels, text_buckets, init);
        let artifact = ModelArtifact::open(dir.path()).unwrap();
        let inferencer = Inferencer::from_artifact(&artifact).unwrap();
        (dir, inferencer)
    }

    #[test]
    fn test_argmax_prefers_first_on_ties() {
        assert_eq!(argmax(&[0.5, 0.5]), (0, 0.5));
        assert_eq!(argmax(&[0.2, 0.7, 0.1]), (1, 0.7));
    }

    #[test]
    fn test_zero_model_predicts_first_label() {
        let (_dir, inf) = inferencer(&["Y", "N"], 0, Initializer::Zeros);
        let out = inf.classify(&[record(5000.0, "Salaried", "")]).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].label, "Y");
        assert!((out[0].confidence - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_batch_keeps_input_order_and_length() {
        let (_dir, inf) = inferencer(&["N", "Y", "Maybe"], 8, Initializer::Zeros);
        let batch = vec![
            record(100.0, "Student", "new business"),
            record(9000.0, "Retired", "owns home"),
            record(0.0, "Astronaut", ""),
        ];
        let out = inf.classify(&batch).unwrap();
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|c| c.label == "N"));
    }

    #[test]
    fn test_empty_batch() {
        let (_dir, inf) = inferencer(&["N", "Y"], 0, Initializer::Zeros);
        assert!(inf.classify(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_predictions_are_deterministic() {
        let init = Initializer::Uniform { min: -1.0, max: 1.0 };
        let (_dir, inf) = inferencer(&["N", "Y"], 8, init);
        let r = record(5000.0, "Salaried", "stable job");

        let first = inf.classify(&[r.clone()]).unwrap();
        for _ in 0..5 {
            assert_eq!(inf.classify(&[r.clone()]).unwrap(), first);
        }
        assert!(inf.labels().contains(&first[0].label));
    }

    #[test]
    fn test_single_row_matches_batch_row() {
        let init = Initializer::Uniform { min: -1.0, max: 1.0 };
        let (_dir, inf) = inferencer(&["N", "Y"], 0, init);
        let a = record(1000.0, "Unemployed", "");
        let b = record(8000.0, "Salaried", "");

        let batch = inf.classify(&[a.clone(), b.clone()]).unwrap();
        assert_eq!(inf.classify(&[a]).unwrap()[0].label, batch[0].label);
        assert_eq!(inf.classify(&[b]).unwrap()[0].label, batch[1].label);
    }

    #[test]
    fn test_feature_width_follows_schema() {
        let (_dir, inf) = inferencer(&["N", "Y"], 8, Initializer::Zeros);
        assert_eq!(inf.feature_width(), 4 + 5 + 8);
    }
}
