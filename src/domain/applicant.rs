// ============================================================
// Layer 3 — Applicant Domain Types
// ============================================================
// Two shapes of the same applicant:
//
//   RawApplication  — the six fields exactly as the user typed them
//   ApplicantRecord — one normalised row with the fixed training
//                     columns, ready for feature encoding
//
// A record is created fresh per prediction and dropped once the
// verdict is produced. Nothing here is persisted.

use serde::Serialize;

/// Column names in the order the model was trained on.
pub const APPLICANT_COLUMNS: [&str; 6] = [
    "Income",
    "Loan_Amount",
    "Credit_Score",
    "Employment_Status",
    "DTI_Ratio",
    "Text",
];

/// The numeric subset of [`APPLICANT_COLUMNS`].
pub const NUMERIC_COLUMNS: [&str; 4] = ["Income", "Loan_Amount", "Credit_Score", "DTI_Ratio"];

/// Employment statuses offered by the input form.
/// The inference path itself accepts any string.
pub const EMPLOYMENT_STATUSES: [&str; 5] = [
    "Salaried",
    "Self-Employed",
    "Unemployed",
    "Student",
    "Retired",
];

/// Unparsed form input. Every field is kept as text so that
/// numeric coercion happens in one place with one error type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawApplication {
    pub income:            String,
    pub loan_amount:       String,
    pub credit_score:      String,
    pub employment_status: String,
    pub dti_ratio:         String,
    pub text:              String,
}

impl RawApplication {
    pub fn new(
        income:            impl Into<String>,
        loan_amount:       impl Into<String>,
        credit_score:      impl Into<String>,
        employment_status: impl Into<String>,
        dti_ratio:         impl Into<String>,
        text:              impl Into<String>,
    ) -> Self {
        Self {
            income:            income.into(),
            loan_amount:       loan_amount.into(),
            credit_score:      credit_score.into(),
            employment_status: employment_status.into(),
            dti_ratio:         dti_ratio.into(),
            text:              text.into(),
        }
    }
}

/// A single normalised row in the training schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicantRecord {
    #[serde(rename = "Income")]
    pub income:            f64,
    #[serde(rename = "Loan_Amount")]
    pub loan_amount:       f64,
    #[serde(rename = "Credit_Score")]
    pub credit_score:      f64,
    #[serde(rename = "Employment_Status")]
    pub employment_status: String,
    #[serde(rename = "DTI_Ratio")]
    pub dti_ratio:         f64,
    #[serde(rename = "Text")]
    pub text:              String,
}

impl ApplicantRecord {
    /// Look up a numeric column by its schema name.
    /// Returns None for the string columns and unknown names.
    pub fn numeric(&self, column: &str) -> Option<f64> {
        match column {
            "Income"       => Some(self.income),
            "Loan_Amount"  => Some(self.loan_amount),
            "Credit_Score" => Some(self.credit_score),
            "DTI_Ratio"    => Some(self.dti_ratio),
            _              => None,
        }
    }
}
