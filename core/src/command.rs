//! The command boundary — every request a transport layer may hand us.
//!
//! The surrounding product speaks loose JSON; here that becomes a tagged
//! union with exhaustive validation, so duck-typed field access never
//! reaches the engine. Variants are added over time — never removed or
//! reordered.

use crate::error::{EngineError, EngineResult};
use crate::facts::Report;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rejection code for boundary validation failures.
pub const INVALID_INPUT: &str = "INVALID_INPUT";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum EngineCommand {
    /// Generate a full report for one subject.
    ///
    /// `isPaid` rides along for the renderer; the report content is
    /// identical either way. Gating happens at the teaser boundary.
    #[serde(rename_all = "camelCase")]
    GenerateReport {
        #[serde(default)]
        name: Option<String>,
        birth_date: String,
        subject: String,
        #[serde(default)]
        is_paid: bool,
    },

    /// Inject teaser lock flags into a content pack.
    #[serde(rename_all = "camelCase")]
    ApplyTeaser {
        pack: Value,
        /// Falls back to the configured per-category quota when absent.
        #[serde(default)]
        unlock_count: Option<usize>,
        #[serde(default)]
        is_paid: bool,
    },
}

/// What the transport layer gets back. Serializable as-is; the caller
/// decides the transport-level status for a rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EngineResponse {
    Report { report: Report },
    Teaser { pack: Value },
    Rejected { code: String, reason: String },
}

/// Boundary validation for a generate request.
///
/// Only the shape is checked here: `birthDate` must look like
/// `YYYY-MM-DD` and `subject` must be non-empty. A well-formed but
/// impossible date (1991-02-30) is deliberately let through — the
/// assembly pipeline owns that fallback.
pub fn validate_generate(birth_date: &str, subject: &str) -> EngineResult<()> {
    if subject.trim().is_empty() {
        return Err(EngineError::InvalidInput {
            field: "subject",
            reason: "must not be empty".into(),
        });
    }
    if !is_iso_date_shape(birth_date) {
        return Err(EngineError::InvalidInput {
            field: "birthDate",
            reason: format!("'{birth_date}' does not match YYYY-MM-DD"),
        });
    }
    Ok(())
}

fn is_iso_date_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
}
