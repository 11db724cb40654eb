//! chart-lint-ignore: suppression engine for chart lint diagnostics
//!
//! Given the messages and errors produced by a chart linter and a set of
//! user-authored ignore rules, this crate decides per diagnostic whether to
//! keep or discard it. It lets an operator silence known-noisy, accepted, or
//! third-party findings (a vendored subchart's missing icon, a template error
//! in a chart they do not own) without touching the linter itself.
//!
//! The pieces:
//! - Rule grammar and parsing of the plaintext ignore file (`parser`)
//! - The two rule shapes and their matching algorithms (`model`)
//! - The filtering engine applying a rule set to diagnostics (`filter`)
//! - Structured decision events via an injectable sink (`sink`)
//! - Append-only capture of filter inputs for offline debugging (`capture`)
//!
//! # Example
//!
//! ```ignore
//! use chart_lint_ignore::{Ignorer, IgnorerConfig};
//!
//! let config = IgnorerConfig::new("charts/gitlab");
//! let ignorer = Ignorer::new(&config);
//!
//! let kept = ignorer.filter_messages(linter.messages);
//! ```

pub mod capture;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod parser;
pub mod sink;
pub mod types;

// Re-export commonly used types
pub use capture::{dump_inputs, DEFAULT_CAPTURE_FILE_NAME};
pub use config::IgnorerConfig;
pub use error::IgnoreError;
pub use filter::Ignorer;
pub use model::{IgnoreRule, PathfulRule, PathlessRule, RuleMatch};
pub use parser::{load_rules, parse_rules, DEFAULT_IGNORE_FILE_NAME};
pub use sink::{EventSink, LogSink, SuppressionEvent};
pub use types::{LintMessage, Severity};
