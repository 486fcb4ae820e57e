// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Loads the notes vocabulary saved next to the model weights.
// The file is a HuggingFace `tokenizer.json`; any model type
// the tokenizers crate understands will do, the fixtures use
// a word-level vocabulary.

use std::path::{Path, PathBuf};
use tokenizers::Tokenizer;

use crate::domain::errors::ModelLoadError;

pub const TOKENIZER_FILE: &str = "tokenizer.json";

pub struct TokenizerStore {
    dir: PathBuf,
}

impl TokenizerStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(TOKENIZER_FILE)
    }

    /// Load a previously saved tokenizer from its JSON file
    pub fn load(&self) -> Result<Tokenizer, ModelLoadError> {
        let path = self.path();
        if !path.exists() {
            return Err(ModelLoadError::NotFound { path: path.display().to_string() });
        }

        let tokenizer = Tokenizer::from_file(&path).map_err(|e| ModelLoadError::Unreadable {
            path:   path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!(
            "Loaded notes tokenizer ({} tokens) from '{}'",
            tokenizer.get_vocab_size(true),
            path.display()
        );
        Ok(tokenizer)
    }
}
