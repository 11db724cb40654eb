use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from the fallible edges of the engine.
///
/// Filtering itself never fails: a rule that cannot extract a path from a
/// diagnostic is a non-match, and rule loaders recover from a missing ignore
/// file by falling back to an empty rule set. What remains fallible is
/// reading a file the caller named explicitly, and the capture writer.
#[derive(Debug, Error)]
pub enum IgnoreError {
    #[error("failed to read ignore file {path}: {source}")]
    ReadIgnoreFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to append capture record to {path}: {source}")]
    Capture {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode capture record: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_read_ignore_file_display() {
        let err = IgnoreError::ReadIgnoreFile {
            path: PathBuf::from("charts/gitlab/.helmlintignore"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("failed to read ignore file"));
        assert!(msg.contains("charts/gitlab/.helmlintignore"));
    }

    #[test]
    fn test_capture_display() {
        let err = IgnoreError::Capture {
            path: PathBuf::from("ignorer-inputs.jsonl"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("ignorer-inputs.jsonl"));
    }

    #[test]
    fn test_io_variants_keep_their_source() {
        let err = IgnoreError::ReadIgnoreFile {
            path: PathBuf::from("x"),
            source: io::Error::new(io::ErrorKind::Other, "root cause"),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_encode_converts_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: IgnoreError = json_err.into();
        assert!(err.to_string().contains("failed to encode capture record"));
    }
}
