//! Diagnostic shapes consumed by the filtering engine.

use serde::{Deserialize, Serialize};

/// Severity ladder for linter messages, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Unknown,
    Info,
    Warning,
    Error,
}

/// A severity-tagged diagnostic produced by the chart linter.
///
/// `path` is a coarse hint at the offending location (`templates/`,
/// `values.yaml`); the full diagnostic text lives in `err` and is what the
/// ignore rules are matched against. Messages are read-only to this engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintMessage {
    pub severity: Severity,
    pub path: String,
    pub err: String,
}

impl LintMessage {
    pub fn new(severity: Severity, path: impl Into<String>, err: impl Into<String>) -> Self {
        Self {
            severity,
            path: path.into(),
            err: err.into(),
        }
    }
}
