// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands `predict`, `about`, and `info`
// and their flags.
//
// Numeric fields are taken as plain strings on purpose: the
// application layer coerces them and reports bad input as an
// "Error: ..." result instead of a clap usage error.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{builder::PossibleValuesParser, Args, Subcommand};

use crate::domain::applicant::{RawApplication, EMPLOYMENT_STATUSES};

/// Default location of the trained model artifact
pub const DEFAULT_MODEL_DIR: &str = "loan_model";

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict whether a loan application is approved
    Predict(PredictArgs),

    /// Describe this app
    About,

    /// Show the loaded model's labels and feature layout
    Info(InfoArgs),
}

/// The six applicant fields plus where to find the model.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Directory containing model_manifest.json and model.mpk
    #[arg(long, default_value = DEFAULT_MODEL_DIR)]
    pub model_dir: String,

    /// Applicant income
    #[arg(long)]
    pub income: String,

    /// Requested loan amount
    #[arg(long)]
    pub loan_amount: String,

    /// Credit score, 0 to 1000
    #[arg(long)]
    pub credit_score: String,

    /// Employment status
    #[arg(long, value_parser = PossibleValuesParser::new(EMPLOYMENT_STATUSES))]
    pub employment_status: String,

    /// Debt-to-income ratio, 0 to 1
    #[arg(long)]
    pub dti_ratio: String,

    /// Additional notes
    #[arg(long, default_value = "")]
    pub notes: String,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Directory containing model_manifest.json and model.mpk
    #[arg(long, default_value = DEFAULT_MODEL_DIR)]
    pub model_dir: String,
}

/// Convert CLI PredictArgs into the domain-level form input.
/// The application layer never sees clap types.
impl From<&PredictArgs> for RawApplication {
    fn from(a: &PredictArgs) -> Self {
        RawApplication::new(
            &a.income,
            &a.loan_amount,
            &a.credit_score,
            &a.employment_status,
            &a.dti_ratio,
            &a.notes,
        )
    }
}
