// ============================================================
// Layer 6 — Model Artifact
// ============================================================
// Opens a trained model directory and checks it is usable
// before any request is served.
//
// Directory layout:
//   loan_model/
//     model_manifest.json  ← schema, labels, architecture
//     model.mpk            ← classifier weights (CompactRecorder)
//     tokenizer.json       ← notes vocabulary, only when
//                            text_buckets > 0
//
// Every failure here is a ModelLoadError: the caller is
// expected to stop, not to retry or fall back.
//
// Reference: Burn Book §5 (Records and Checkpointing)

use serde::{Deserialize, Deserializer, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use burn::{
    prelude::*,
    record::{CompactRecorder, FileRecorder, Recorder},
};
use tokenizers::Tokenizer;

use crate::data::encoder::FeatureSchema;
use crate::domain::errors::ModelLoadError;
use crate::domain::verdict::DEFAULT_APPROVED_LABELS;
use crate::infra::tokenizer_store::TokenizerStore;
use crate::ml::model::{LoanClassifier, LoanClassifierConfig};

pub const MANIFEST_FILE: &str = "model_manifest.json";
/// Recorder path without extension; the recorder appends its own.
pub const WEIGHTS_STEM: &str = "model";

/// Full path of the weights file CompactRecorder reads and writes.
pub fn weights_path<B: Backend>(dir: &Path) -> PathBuf {
    dir.join(WEIGHTS_STEM)
        .with_extension(<CompactRecorder as FileRecorder<B>>::file_extension())
}

/// Everything the training process hands over besides the weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelManifest {
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(flatten)]
    pub schema: FeatureSchema,

    /// Class labels, index-aligned with the classifier output.
    /// JSON strings, numbers, and booleans are all accepted.
    #[serde(deserialize_with = "labels_from_json")]
    pub labels: Vec<String>,

    #[serde(default = "default_approved_labels", deserialize_with = "labels_from_json")]
    pub approved_labels: Vec<String>,

    pub model: LoanClassifierConfig,
}

impl ModelManifest {
    pub fn validate(&self) -> Result<(), ModelLoadError> {
        self.schema.validate()?;

        if self.labels.is_empty() {
            return Err(ModelLoadError::Incompatible("manifest lists no labels".to_string()));
        }
        if self.model.num_classes != self.labels.len() {
            return Err(ModelLoadError::Incompatible(format!(
                "model has {} output classes but manifest lists {} labels",
                self.model.num_classes,
                self.labels.len()
            )));
        }
        if self.model.d_input != self.schema.width() {
            return Err(ModelLoadError::Incompatible(format!(
                "model expects {} input features, schema encodes {}",
                self.model.d_input,
                self.schema.width()
            )));
        }
        if self.model.d_hidden == 0 {
            return Err(ModelLoadError::Incompatible("hidden layer has zero units".to_string()));
        }
        Ok(())
    }
}

fn default_version() -> String {
    "unversioned".to_string()
}

fn default_approved_labels() -> Vec<String> {
    DEFAULT_APPROVED_LABELS.iter().map(|s| s.to_string()).collect()
}

fn labels_from_json<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_json::Value;

    Vec::<Value>::deserialize(deserializer)?
        .into_iter()
        .map(|value| match value {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b)   => Ok(b.to_string()),
            other            => Err(D::Error::custom(format!("unsupported label {other}"))),
        })
        .collect()
}

/// A validated model directory.
#[derive(Debug)]
pub struct ModelArtifact {
    dir:      PathBuf,
    manifest: ModelManifest,
}

impl ModelArtifact {
    /// Read and validate the manifest. Weights and tokenizer are
    /// loaded separately so the caller picks the backend.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        let dir  = dir.as_ref().to_path_buf();
        let path = dir.join(MANIFEST_FILE);

        let json = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ModelLoadError::NotFound { path: path.display().to_string() },
            _ => ModelLoadError::Unreadable { path: path.display().to_string(), reason: e.to_string() },
        })?;

        let manifest: ModelManifest = serde_json::from_str(&json).map_err(|e| {
            ModelLoadError::Unreadable { path: path.display().to_string(), reason: e.to_string() }
        })?;
        manifest.validate()?;

        tracing::info!(
            "Opened model artifact '{}' (version {}, {} labels)",
            dir.display(),
            manifest.version,
            manifest.labels.len()
        );
        Ok(Self { dir, manifest })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn manifest(&self) -> &ModelManifest {
        &self.manifest
    }

    /// Restore the classifier weights into a model of the
    /// manifest's architecture. Weights whose shapes disagree with
    /// the manifest are rejected here rather than at request time.
    pub fn load_model<B: Backend>(&self, device: &B::Device) -> Result<LoanClassifier<B>, ModelLoadError> {
        let file = weights_path::<B>(&self.dir);
        if !file.exists() {
            return Err(ModelLoadError::NotFound { path: file.display().to_string() });
        }

        let model: LoanClassifier<B> = self.manifest.model.init(device);
        let record = Recorder::<B>::load(&CompactRecorder::new(), self.dir.join(WEIGHTS_STEM), device)
            .map_err(|e| ModelLoadError::Unreadable {
                path:   file.display().to_string(),
                reason: e.to_string(),
            })?;

        let model = model.load_record(record);
        self.check_shapes(&model)?;

        tracing::debug!("Loaded classifier weights from '{}'", file.display());
        Ok(model)
    }

    fn check_shapes<B: Backend>(&self, model: &LoanClassifier<B>) -> Result<(), ModelLoadError> {
        let cfg = &self.manifest.model;
        let layers = [
            ("hidden", model.hidden.weight.val().dims(), [cfg.d_input, cfg.d_hidden]),
            ("output", model.output.weight.val().dims(), [cfg.d_hidden, cfg.num_classes]),
        ];

        for (name, found, expected) in layers {
            if found != expected {
                return Err(ModelLoadError::Incompatible(format!(
                    "{name} layer weights are {found:?}, manifest expects {expected:?}"
                )));
            }
        }
        Ok(())
    }

    /// The notes tokenizer, or None when the text feature is off.
    pub fn load_tokenizer(&self) -> Result<Option<Tokenizer>, ModelLoadError> {
        if self.manifest.schema.text_buckets == 0 {
            return Ok(None);
        }
        TokenizerStore::new(&self.dir).load().map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::fixtures;
    use burn::backend::NdArray;

    #[test]
    fn test_missing_directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = ModelArtifact::open(dir.path().join("loan_model")).unwrap_err();
        assert!(matches!(err, ModelLoadError::NotFound { .. }));
    }

    #[test]
    fn test_corrupt_manifest_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "{ not json").unwrap();
        let err = ModelArtifact::open(dir.path()).unwrap_err();
        assert!(matches!(err, ModelLoadError::Unreadable { .. }));
    }

    #[test]
    fn test_opens_fixture_artifact() {
        let dir = tempfile::tempdir().unwrap();
        fixtures::write_artifact(dir.path(), &["N", "Y"], 8);
        let artifact = ModelArtifact::open(dir.path()).unwrap();
        assert_eq!(artifact.manifest().labels, vec!["N", "Y"]);
        assert!(artifact.load_tokenizer().unwrap().is_some());
    }

    #[test]
    fn test_numeric_labels_become_strings() {
        let mut json = serde_json::to_value(fixtures::manifest(&["x"], 0)).unwrap();
        json["labels"] = serde_json::json!([0, 1]);
        json["model"]["num_classes"] = serde_json::json!(2);
        json.as_object_mut().unwrap().remove("approved_labels");

        let manifest: ModelManifest = serde_json::from_value(json).unwrap();
        assert_eq!(manifest.labels, vec!["0", "1"]);
        assert_eq!(manifest.approved_labels, vec!["Y", "1", "Approved"]);
    }

    #[test]
    fn test_label_count_must_match_model() {
        let mut manifest = fixtures::manifest(&["N", "Y"], 0);
        manifest.model.num_classes = 3;
        assert!(matches!(manifest.validate(), Err(ModelLoadError::Incompatible(_))));
    }

    #[test]
    fn test_input_width_must_match_schema() {
        let mut manifest = fixtures::manifest(&["N", "Y"], 4);
        manifest.model.d_input += 1;
        assert!(matches!(manifest.validate(), Err(ModelLoadError::Incompatible(_))));
    }

    #[test]
    fn test_missing_weights_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        fixtures::write_artifact(dir.path(), &["N", "Y"], 0);
        fs::remove_file(weights_path::<NdArray>(dir.path())).unwrap();

        let artifact = ModelArtifact::open(dir.path()).unwrap();
        let err = artifact.load_model::<NdArray>(&Default::default()).unwrap_err();
        assert!(matches!(err, ModelLoadError::NotFound { .. }));
    }

    #[test]
    fn test_weights_use_recorder_extension() {
        let dir = tempfile::tempdir().unwrap();
        fixtures::write_artifact(dir.path(), &["N", "Y"], 0);
        assert!(weights_path::<NdArray>(dir.path()).exists());

        let artifact = ModelArtifact::open(dir.path()).unwrap();
        assert!(artifact.load_model::<NdArray>(&Default::default()).is_ok());
    }

    #[test]
    fn test_corrupt_weights_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        fixtures::write_artifact(dir.path(), &["N", "Y"], 0);
        fs::write(weights_path::<NdArray>(dir.path()), b"\x00\x13not a record").unwrap();

        let artifact = ModelArtifact::open(dir.path()).unwrap();
        let err = artifact.load_model::<NdArray>(&Default::default()).unwrap_err();
        assert!(matches!(err, ModelLoadError::Unreadable { .. }));
    }

    #[test]
    fn test_weights_shape_mismatch_is_incompatible() {
        // Weights trained with 8 text buckets, manifest rewritten without them
        let dir = tempfile::tempdir().unwrap();
        fixtures::write_artifact(dir.path(), &["N", "Y"], 8);
        let narrower = fixtures::manifest(&["N", "Y"], 0);
        fs::write(dir.path().join(MANIFEST_FILE), serde_json::to_string(&narrower).unwrap()).unwrap();

        let artifact = ModelArtifact::open(dir.path()).unwrap();
        let err = artifact.load_model::<NdArray>(&Default::default()).unwrap_err();
        assert!(matches!(err, ModelLoadError::Incompatible(_)), "got {err:?}");
    }
}
