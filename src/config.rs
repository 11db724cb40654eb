//! Configuration for building an [`crate::Ignorer`].

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::parser::DEFAULT_IGNORE_FILE_NAME;

/// Where the rule set for one linted chart comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnorerConfig {
    /// Directory of the chart being linted.
    pub chart_path: PathBuf,

    /// Explicit ignore-file location. When absent, the default file name is
    /// resolved relative to `chart_path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_file_path: Option<PathBuf>,
}

impl IgnorerConfig {
    pub fn new(chart_path: impl Into<PathBuf>) -> Self {
        Self {
            chart_path: chart_path.into(),
            ignore_file_path: None,
        }
    }

    pub fn with_ignore_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.ignore_file_path = Some(path.into());
        self
    }

    /// The ignore file this configuration points at.
    pub fn resolved_ignore_file(&self) -> PathBuf {
        match &self.ignore_file_path {
            Some(path) => path.clone(),
            None => self.chart_path.join(DEFAULT_IGNORE_FILE_NAME),
        }
    }
}
