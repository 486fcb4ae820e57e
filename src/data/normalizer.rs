// ============================================================
// Layer 4 — Input Normaliser
// ============================================================
// Turns the six raw form fields into one ApplicantRecord.
//
//   Income, Loan_Amount, Credit_Score, DTI_Ratio → f64
//   Employment_Status, Text                      → passed through
//
// Numeric coercion accepts surrounding whitespace and the usual
// float syntax ("5000", "5e3", "0.20"). NaN and infinity parse
// but are rejected, as are values outside the documented ranges.

use crate::domain::applicant::{ApplicantRecord, RawApplication};
use crate::domain::errors::ValidationError;

/// Accepted bounds for one numeric field. `max: None` means
/// the field is only bounded below.
#[derive(Debug, Clone, Copy)]
struct FieldRange {
    min: f64,
    max: Option<f64>,
}

const NON_NEGATIVE: FieldRange = FieldRange { min: 0.0, max: None };
const CREDIT_SCORE: FieldRange = FieldRange { min: 0.0, max: Some(1000.0) };
const RATIO:        FieldRange = FieldRange { min: 0.0, max: Some(1.0) };

pub struct InputNormalizer;

impl InputNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Coerce and range-check every numeric field.
    /// Fails on the first invalid field in column order.
    pub fn normalize(&self, raw: &RawApplication) -> Result<ApplicantRecord, ValidationError> {
        let record = ApplicantRecord {
            income:            parse_field("Income", &raw.income, NON_NEGATIVE)?,
            loan_amount:       parse_field("Loan_Amount", &raw.loan_amount, NON_NEGATIVE)?,
            credit_score:      parse_field("Credit_Score", &raw.credit_score, CREDIT_SCORE)?,
            employment_status: raw.employment_status.clone(),
            dti_ratio:         parse_field("DTI_Ratio", &raw.dti_ratio, RATIO)?,
            text:              raw.text.clone(),
        };

        tracing::debug!(
            "Normalised applicant: income={} loan={} score={} status='{}' dti={}",
            record.income,
            record.loan_amount,
            record.credit_score,
            record.employment_status,
            record.dti_ratio
        );
        Ok(record)
    }
}

impl Default for InputNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_field(field: &'static str, raw: &str, range: FieldRange) -> Result<f64, ValidationError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotNumeric { field, value: raw.to_string() })?;

    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }

    match range.max {
        None if value < range.min => Err(ValidationError::Negative { field, value }),
        Some(max) if value < range.min || value > max => Err(ValidationError::OutOfRange {
            field,
            value,
            min: range.min,
            max,
        }),
        _ => Ok(value),
    }
}
