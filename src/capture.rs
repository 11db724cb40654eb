//! Append-only capture of filter inputs.
//!
//! Dumps the messages and errors handed to the engine as single-line JSON
//! records, so a suppression decision can be replayed offline against a rule
//! set under development.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::IgnoreError;
use crate::types::{LintMessage, Severity};

/// Default file capture records are appended to.
pub const DEFAULT_CAPTURE_FILE_NAME: &str = "ignorer-inputs.jsonl";

#[derive(Debug, Serialize)]
struct MessageRecord<'a> {
    kind: &'static str,
    index: usize,
    severity: Severity,
    path: &'a str,
    err_text: &'a str,
}

#[derive(Debug, Serialize)]
struct ErrorRecord<'a> {
    kind: &'static str,
    index: usize,
    err_text: &'a str,
}

/// Append every message and bare error as one JSON record per line.
///
/// The file is created if absent and always appended to, so repeated lint
/// runs accumulate.
pub fn dump_inputs(
    path: &Path,
    messages: &[LintMessage],
    errors: &[String],
) -> Result<(), IgnoreError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| IgnoreError::Capture {
            path: path.to_path_buf(),
            source,
        })?;

    for (index, msg) in messages.iter().enumerate() {
        append_record(
            &mut file,
            path,
            &MessageRecord {
                kind: "message",
                index,
                severity: msg.severity,
                path: &msg.path,
                err_text: &msg.err,
            },
        )?;
    }

    for (index, err) in errors.iter().enumerate() {
        append_record(
            &mut file,
            path,
            &ErrorRecord {
                kind: "error",
                index,
                err_text: err,
            },
        )?;
    }

    Ok(())
}

fn append_record<T: Serialize>(file: &mut File, path: &Path, record: &T) -> Result<(), IgnoreError> {
    let line = serde_json::to_string(record)?;
    writeln!(file, "{line}").map_err(|source| IgnoreError::Capture {
        path: path.to_path_buf(),
        source,
    })
}
