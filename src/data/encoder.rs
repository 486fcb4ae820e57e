// ============================================================
// Layer 4 — Feature Encoder
// ============================================================
// Converts one ApplicantRecord into the flat f32 row the
// classifier was trained on. The layout is fixed by the
// FeatureSchema stored in the model manifest:
//
//   [ standardised numeric columns | one-hot employment | text buckets ]
//
//   numeric    — (x - mean) / std, in manifest order
//   employment — 1.0 at the matching category, all zeros if unknown
//   text       — hashed bag of words over the cleaned notes,
//                L2-normalised; absent when text_buckets == 0

use serde::{Deserialize, Serialize};
use tokenizers::Tokenizer;

use crate::data::preprocessor::Preprocessor;
use crate::domain::applicant::{ApplicantRecord, APPLICANT_COLUMNS, NUMERIC_COLUMNS};
use crate::domain::errors::{ModelLoadError, PredictionError};

/// Standardisation parameters for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericColumn {
    pub column: String,
    pub mean:   f64,
    pub std:    f64,
}

/// Feature layout learnt at training time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSchema {
    pub columns:               Vec<String>,
    pub numeric:               Vec<NumericColumn>,
    pub employment_categories: Vec<String>,
    #[serde(default)]
    pub text_buckets:          usize,
}

impl FeatureSchema {
    /// Number of f32 values in one encoded row.
    pub fn width(&self) -> usize {
        self.numeric.len() + self.employment_categories.len() + self.text_buckets
    }

    /// Check the schema against the fixed applicant columns.
    pub fn validate(&self) -> Result<(), ModelLoadError> {
        if self.columns.iter().map(String::as_str).ne(APPLICANT_COLUMNS.iter().copied()) {
            return Err(ModelLoadError::Incompatible(format!(
                "expected columns {:?}, artifact has {:?}",
                APPLICANT_COLUMNS, self.columns
            )));
        }

        for column in NUMERIC_COLUMNS {
            let count = self.numeric.iter().filter(|n| n.column == column).count();
            if count != 1 {
                return Err(ModelLoadError::Incompatible(format!(
                    "numeric column '{column}' must be described exactly once, found {count}"
                )));
            }
        }
        if self.numeric.len() != NUMERIC_COLUMNS.len() {
            return Err(ModelLoadError::Incompatible(format!(
                "expected {} numeric columns, artifact has {}",
                NUMERIC_COLUMNS.len(),
                self.numeric.len()
            )));
        }

        if let Some(bad) = self.numeric.iter().find(|n| !n.mean.is_finite() || !n.std.is_finite()) {
            return Err(ModelLoadError::Incompatible(format!(
                "scaling for '{}' is not finite",
                bad.column
            )));
        }
        Ok(())
    }
}

pub struct FeatureEncoder {
    schema:       FeatureSchema,
    tokenizer:    Option<Tokenizer>,
    unk_id:       Option<u32>,
    preprocessor: Preprocessor,
}

impl FeatureEncoder {
    /// A tokenizer is required whenever the schema has text buckets.
    pub fn new(schema: FeatureSchema, tokenizer: Option<Tokenizer>) -> Result<Self, ModelLoadError> {
        schema.validate()?;
        if schema.text_buckets > 0 && tokenizer.is_none() {
            return Err(ModelLoadError::Incompatible(format!(
                "schema uses {} text buckets but no tokenizer was provided",
                schema.text_buckets
            )));
        }

        let unk_id = tokenizer.as_ref().and_then(|t| t.token_to_id("[UNK]"));
        Ok(Self { schema, tokenizer, unk_id, preprocessor: Preprocessor::new() })
    }

    pub fn width(&self) -> usize {
        self.schema.width()
    }

    /// Encode one record into a row of exactly `width()` values.
    pub fn encode(&self, record: &ApplicantRecord) -> Result<Vec<f32>, PredictionError> {
        let mut row = Vec::with_capacity(self.width());

        for spec in &self.schema.numeric {
            let value = record.numeric(&spec.column).ok_or_else(|| {
                PredictionError::Schema(format!("'{}' is not a numeric column", spec.column))
            })?;
            let std = if spec.std == 0.0 { 1.0 } else { spec.std };
            row.push(((value - spec.mean) / std) as f32);
        }

        let status = record.employment_status.as_str();
        let mut matched = false;
        for category in &self.schema.employment_categories {
            let hit = category == status;
            matched |= hit;
            row.push(if hit { 1.0 } else { 0.0 });
        }
        if !matched {
            tracing::warn!("Unknown employment status '{}', encoded as all zeros", status);
        }

        if self.schema.text_buckets > 0 {
            row.extend(self.encode_text(&record.text)?);
        }

        Ok(row)
    }

    fn encode_text(&self, text: &str) -> Result<Vec<f32>, PredictionError> {
        let buckets = self.schema.text_buckets;
        let mut counts = vec![0.0f32; buckets];

        let cleaned = self.preprocessor.clean(text);
        if cleaned.is_empty() {
            return Ok(counts);
        }

        let tokenizer = self.tokenizer.as_ref().ok_or_else(|| {
            PredictionError::Schema("text feature enabled without a tokenizer".to_string())
        })?;
        let encoding = tokenizer
            .encode(cleaned.as_str(), false)
            .map_err(|e| PredictionError::Inference(format!("cannot tokenise notes: {e}")))?;

        for &id in encoding.get_ids() {
            if Some(id) == self.unk_id {
                continue;
            }
            counts[id as usize % buckets] += 1.0;
        }

        let norm = counts.iter().map(|c| c * c).sum::<f32>().sqrt();
        if norm > 0.0 {
            counts.iter_mut().for_each(|c| *c /= norm);
        }

        tracing::debug!("Encoded notes into {} tokens", encoding.get_ids().len());
        Ok(counts)
    }
}
