// ============================================================
// Layer 3 — Error Types
// ============================================================
// Three families of failure:
//
//   ModelLoadError  — fatal, raised once at startup
//   ValidationError — one bad form field
//   PredictionError — anything that goes wrong for one request
//
// Per-request failures are rendered as "Error: <message>" by
// the application layer, so every message here is written to
// be shown to the user as-is.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("model file '{path}' not found. Make sure it is in the project folder.")]
    NotFound { path: String },

    #[error("error loading the model from '{path}': {reason}")]
    Unreadable { path: String, reason: String },

    #[error("model artifact does not match the applicant schema: {0}")]
    Incompatible(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("could not convert {field} to a number: '{value}'")]
    NotNumeric { field: &'static str, value: String },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min:   f64,
        max:   f64,
    },
}

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("input does not fit the model schema: {0}")]
    Schema(String),

    #[error("model inference failed: {0}")]
    Inference(String),
}
