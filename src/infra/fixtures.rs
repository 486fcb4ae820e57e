// Test-only helpers that write a complete model artifact to disk.

use burn::nn::Initializer;
use serde_json::json;
use std::{fs, path::Path};
use tokenizers::Tokenizer;

use burn::record::{CompactRecorder, Recorder};
use burn::module::Module;

use crate::data::encoder::{FeatureSchema, NumericColumn};
use crate::domain::applicant::{APPLICANT_COLUMNS, EMPLOYMENT_STATUSES};
use crate::infra::artifact::{ModelManifest, MANIFEST_FILE, WEIGHTS_STEM};
use crate::infra::tokenizer_store::TOKENIZER_FILE;
use crate::ml::model::LoanClassifierConfig;

type FixtureBackend = burn::backend::NdArray;

const NOTE_WORDS: [&str; 8] = ["stable", "job", "owns", "home", "late", "payments", "new", "business"];

pub fn schema(text_buckets: usize) -> FeatureSchema {
    let numeric = |column: &str, mean: f64, std: f64| NumericColumn { column: column.to_string(), mean, std };
    FeatureSchema {
        columns: APPLICANT_COLUMNS.iter().map(|c| c.to_string()).collect(),
        numeric: vec![
            numeric("Income", 4000.0, 1000.0),
            numeric("Loan_Amount", 2500.0, 500.0),
            numeric("Credit_Score", 650.0, 50.0),
            numeric("DTI_Ratio", 0.3, 0.1),
        ],
        employment_categories: EMPLOYMENT_STATUSES.iter().map(|c| c.to_string()).collect(),
        text_buckets,
    }
}

pub fn manifest(labels: &[&str], text_buckets: usize) -> ModelManifest {
    let schema = schema(text_buckets);
    ModelManifest {
        version:         "test".to_string(),
        model:           LoanClassifierConfig::new(schema.width(), 4, labels.len()),
        schema,
        labels:          labels.iter().map(|l| l.to_string()).collect(),
        approved_labels: vec!["Y".to_string(), "1".to_string(), "Approved".to_string()],
    }
}

/// Word-level vocabulary in HuggingFace tokenizer.json format.
pub fn write_tokenizer(dir: &Path) -> Tokenizer {
    let mut vocab = json!({ "[PAD]": 0, "[UNK]": 1 });
    for (i, word) in NOTE_WORDS.iter().enumerate() {
        vocab[*word] = json!(i + 2);
    }

    let tokenizer_json = json!({
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [
            {"id": 0, "content": "[PAD]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 1, "content": "[UNK]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true}
        ],
        "normalizer": {
            "type": "BertNormalizer",
            "clean_text": true,
            "handle_chinese_chars": true,
            "strip_accents": null,
            "lowercase": true
        },
        "pre_tokenizer": { "type": "Whitespace" },
        "post_processor": null,
        "decoder": null,
        "model": { "type": "WordLevel", "vocab": vocab, "unk_token": "[UNK]" }
    });

    let path = dir.join(TOKENIZER_FILE);
    fs::write(&path, serde_json::to_string_pretty(&tokenizer_json).unwrap()).unwrap();
    Tokenizer::from_file(&path).unwrap()
}

/// Manifest, tokenizer (when text is enabled), and all-zero weights.
/// Zero weights give equal logits, so the model always predicts
/// `labels[0]`.
pub fn write_artifact(dir: &Path, labels: &[&str], text_buckets: usize) -> ModelManifest {
    write_artifact_with(dir, labels, text_buckets, Initializer::Zeros)
}

pub fn write_artifact_with(
    dir:          &Path,
    labels:       &[&str],
    text_buckets: usize,
    initializer:  Initializer,
) -> ModelManifest {
    fs::create_dir_all(dir).unwrap();
    let manifest = manifest(labels, text_buckets);
    fs::write(dir.join(MANIFEST_FILE), serde_json::to_string_pretty(&manifest).unwrap()).unwrap();

    if text_buckets > 0 {
        write_tokenizer(dir);
    }

    let device = Default::default();
    let model = manifest.model.init_with::<FixtureBackend>(initializer, &device);
    Recorder::<FixtureBackend>::record(&CompactRecorder::new(), model.into_record(), dir.join(WEIGHTS_STEM))
        .unwrap();

    manifest
}
