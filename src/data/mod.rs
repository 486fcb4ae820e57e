// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// From raw form fields to a model-ready feature row:
//
//   RawApplication
//       │
//       ▼
//   InputNormalizer   → coerces numbers, checks ranges
//       │
//       ▼
//   ApplicantRecord
//       │
//       ▼
//   FeatureEncoder    → scales, one-hot encodes, hashes notes
//       │               (notes cleaned by Preprocessor first)
//       ▼
//   Vec<f32> row

/// Numeric coercion and range checks for form input
pub mod normalizer;

/// Cleans free-text notes before tokenisation
pub mod preprocessor;

/// Encodes applicant records into feature rows
pub mod encoder;
