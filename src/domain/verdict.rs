// ============================================================
// Layer 3 — Verdicts and Label Policy
// ============================================================
// The model emits a raw class label. Which labels mean
// "approved" is part of the model artifact, so the policy is
// built from the manifest rather than hard-coded here.
//
// Matching rules, in order:
//   1. exact string match against an approved label
//   2. numeric equality ("1.0" matches "1")
//   3. boolean true counts as 1

use std::fmt;

/// Approved labels assumed when the artifact does not list its own.
pub const DEFAULT_APPROVED_LABELS: [&str; 3] = ["Y", "1", "Approved"];

/// The final human-readable outcome of one prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Approved,
    Rejected,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Approved => "Loan Approved ✔",
            Verdict::Rejected => "Loan Rejected ❌",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides whether a raw model label means approval.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPolicy {
    approved: Vec<String>,
}

impl LabelPolicy {
    pub fn new<I, S>(approved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { approved: approved.into_iter().map(Into::into).collect() }
    }

    pub fn approved_labels(&self) -> &[String] {
        &self.approved
    }

    pub fn verdict(&self, label: &str) -> Verdict {
        if self.is_approved(label) {
            Verdict::Approved
        } else {
            Verdict::Rejected
        }
    }

    pub fn is_approved(&self, label: &str) -> bool {
        let label = label.trim();
        let label_num = as_number(label);

        self.approved.iter().any(|candidate| {
            if candidate == label {
                return true;
            }
            match (label_num, as_number(candidate)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            }
        })
    }
}

impl Default for LabelPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_APPROVED_LABELS)
    }
}

/// Numeric view of a label; booleans map to 0 and 1.
fn as_number(label: &str) -> Option<f64> {
    if label.eq_ignore_ascii_case("true") {
        return Some(1.0);
    }
    if label.eq_ignore_ascii_case("false") {
        return Some(0.0);
    }
    label.parse::<f64>().ok().filter(|v| v.is_finite())
}
