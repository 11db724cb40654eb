//! Ignore-file grammar and rule loading.
//!
//! The ignore file is plain UTF-8 text, one rule per line:
//!
//! ```text
//! # comment lines and blank lines are skipped
//! error_lint_ignore=chart metadata is missing these dependencies*
//! kas/templates/serviceaccount.yaml <.Values.global.serviceAccount.enabled>
//! templates/broken.yaml
//! ```
//!
//! A line starting with `error_lint_ignore=` defines a pathless rule; any
//! other line defines a pathful rule whose first space-delimited token is the
//! path fragment. Every non-skipped line yields exactly one rule, so parsing
//! never fails.

use std::fs;
use std::path::Path;

use log::debug;

use crate::config::IgnorerConfig;
use crate::error::IgnoreError;
use crate::model::{IgnoreRule, PathfulRule, PathlessRule};

/// Name of the lint ignore file sought under the chart directory when no
/// explicit path is configured.
pub const DEFAULT_IGNORE_FILE_NAME: &str = ".helmlintignore";

/// Line prefix marking a pathless (chart-level) rule.
const PATHLESS_RULE_PREFIX: &str = "error_lint_ignore=";

/// Parse ignore-file text into an ordered rule set.
///
/// Rule order follows file order; the filtering engine treats the first
/// matching rule as sufficient to suppress a diagnostic.
pub fn parse_rules(text: &str) -> Vec<IgnoreRule> {
    let mut rules = Vec::new();

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(pattern) = line.strip_prefix(PATHLESS_RULE_PREFIX) {
            rules.push(IgnoreRule::Pathless(PathlessRule {
                rule_text: line.to_string(),
                message_text: pattern.to_string(),
            }));
        } else {
            rules.push(IgnoreRule::Pathful(pathful_from_line(line)));
        }
    }

    rules
}

/// Split a pathful line on its first space; a line with no space is a
/// path-only rule with an empty text fragment.
fn pathful_from_line(line: &str) -> PathfulRule {
    match line.split_once(' ') {
        Some((path, text)) => PathfulRule {
            rule_text: line.to_string(),
            message_path: path.to_string(),
            message_text: text.to_string(),
        },
        None => PathfulRule {
            rule_text: line.to_string(),
            message_path: line.to_string(),
            message_text: String::new(),
        },
    }
}

/// Load the rule set for a configured chart path.
///
/// A missing or unreadable ignore file is not an error: the lint run
/// proceeds with an empty rule set and nothing gets suppressed.
pub fn load_rules(config: &IgnorerConfig) -> Vec<IgnoreRule> {
    load_rules_from_path(&config.resolved_ignore_file())
}

/// Load rules from an explicit file path, degrading to an empty rule set
/// when the file cannot be read.
pub fn load_rules_from_path(path: &Path) -> Vec<IgnoreRule> {
    match read_ignore_file(path) {
        Ok(text) => parse_rules(&text),
        Err(err) => {
            debug!("no usable lint ignore file: {err}");
            Vec::new()
        }
    }
}

fn read_ignore_file(path: &Path) -> Result<String, IgnoreError> {
    fs::read_to_string(path).map_err(|source| IgnoreError::ReadIgnoreFile {
        path: path.to_path_buf(),
        source,
    })
}
