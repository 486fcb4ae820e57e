// ============================================================
// Layer 2 — Model Info
// ============================================================
// Summarises a model artifact for the `info` command. The
// weights are loaded too, so a successful summary means the
// model is ready to serve predictions.

use serde::Serialize;
use std::path::Path;

use crate::domain::errors::ModelLoadError;
use crate::infra::artifact::ModelArtifact;
use crate::ml::inferencer::Inferencer;

#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub model_dir:       String,
    pub version:         String,
    pub columns:         Vec<String>,
    pub labels:          Vec<String>,
    pub approved_labels: Vec<String>,
    pub feature_width:   usize,
    pub text_buckets:    usize,
}

pub fn describe_model(dir: impl AsRef<Path>) -> Result<ModelInfo, ModelLoadError> {
    let artifact   = ModelArtifact::open(dir)?;
    let inferencer = Inferencer::from_artifact(&artifact)?;
    let manifest   = artifact.manifest();

    Ok(ModelInfo {
        model_dir:       artifact.dir().display().to_string(),
        version:         manifest.version.clone(),
        columns:         manifest.schema.columns.clone(),
        labels:          inferencer.labels().to_vec(),
        approved_labels: manifest.approved_labels.clone(),
        feature_width:   inferencer.feature_width(),
        text_buckets:    manifest.schema.text_buckets,
    })
}
