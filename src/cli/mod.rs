// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// The entry point for all user interaction. Parses arguments
// with clap and delegates to Layer 2 (application).
//
// Commands:
//   1. `predict` — loads the model and prints a verdict
//   2. `about`   — prints what this app does
//   3. `info`    — loads the model and prints its summary

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, InfoArgs, PredictArgs};

use crate::domain::applicant::RawApplication;

pub const ABOUT_TEXT: &str = "Loan Approval Prediction App built with Rust and a trained ML model.";
pub const USAGE_HINT: &str = "Enter applicant details with `predict` to see the result.";

#[derive(Parser, Debug)]
#[command(
    name = "loan-approval",
    version,
    about = "Predict loan approval from applicant details with a pre-trained classifier."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match &self.command {
            Commands::Predict(args) => run_predict(args),
            Commands::About         => run_about(),
            Commands::Info(args)    => run_info(args),
        }
    }
}

/// Loading the model is fatal on failure; the prediction
/// itself always yields a line of output.
fn run_predict(args: &PredictArgs) -> Result<()> {
    use crate::application::predict_use_case::PredictUseCase;

    let use_case = PredictUseCase::from_model_dir(&args.model_dir)
        .with_context(|| format!("Cannot start without the model in '{}'", args.model_dir))?;

    let result = use_case.predict(&RawApplication::from(args));
    println!("The result is: {}", result);
    Ok(())
}

fn run_about() -> Result<()> {
    println!("{ABOUT_TEXT}");
    println!("{USAGE_HINT}");
    Ok(())
}

fn run_info(args: &InfoArgs) -> Result<()> {
    use crate::application::model_info::describe_model;

    let info = describe_model(&args.model_dir)
        .with_context(|| format!("Cannot load the model in '{}'", args.model_dir))?;
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
