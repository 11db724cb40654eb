//! The filtering engine: applies a loaded rule set to lint diagnostics.

use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use crate::config::IgnorerConfig;
use crate::model::IgnoreRule;
use crate::parser;
use crate::sink::{EventSink, LogSink, SuppressionEvent};
use crate::types::LintMessage;

/// Decides, per lint diagnostic, whether to keep or discard it.
///
/// An `Ignorer` owns the ordered rule set loaded for one linted chart path.
/// The rule set is immutable after construction; linting a subchart builds
/// its own `Ignorer` from that chart's ignore file. Suppression is
/// existential: the first rule that matches a diagnostic discards it, and no
/// rule can re-admit one.
pub struct Ignorer {
    /// Chart the rules were loaded for, recorded on every decision event.
    pub chart_path: PathBuf,

    /// Ordered rule set; first match suppresses.
    pub rules: Vec<IgnoreRule>,

    sink: OnceLock<Arc<dyn EventSink>>,
}

impl Ignorer {
    /// Load the rule set for the configured chart path.
    ///
    /// A missing ignore file is not an error: the resulting `Ignorer` keeps
    /// every diagnostic.
    pub fn new(config: &IgnorerConfig) -> Self {
        Self::from_rules(config.chart_path.clone(), parser::load_rules(config))
    }

    /// Build an `Ignorer` over an already-parsed rule set.
    pub fn from_rules(chart_path: impl Into<PathBuf>, rules: Vec<IgnoreRule>) -> Self {
        Self {
            chart_path: chart_path.into(),
            rules,
            sink: OnceLock::new(),
        }
    }

    /// Parse rules from in-memory text instead of a file on disk.
    pub fn from_rule_text(chart_path: impl Into<PathBuf>, rule_text: &str) -> Self {
        Self::from_rules(chart_path, parser::parse_rules(rule_text))
    }

    /// Route decision events to `sink` instead of the log-backed default.
    ///
    /// The sink is set at most once for the lifetime of the `Ignorer`.
    pub fn with_sink(self, sink: Arc<dyn EventSink>) -> Self {
        let _ = self.sink.set(sink);
        self
    }

    /// Keep `err_text` unless a rule matches it.
    pub fn should_keep(&self, err_text: &str) -> bool {
        for rule in &self.rules {
            if let Some(found) = rule.matches(err_text) {
                self.emit(err_text, Some(&found.rule_text));
                return false;
            }
        }

        self.emit(err_text, None);
        true
    }

    /// Keep only the messages whose error text no rule matches.
    ///
    /// Relative order of the retained messages is preserved; nothing is
    /// reordered or duplicated.
    pub fn filter_messages(&self, messages: Vec<LintMessage>) -> Vec<LintMessage> {
        messages
            .into_iter()
            .filter(|msg| self.should_keep(&msg.err))
            .collect()
    }

    /// Same contract as [`Ignorer::filter_messages`], over bare error text.
    pub fn filter_errors(&self, errors: Vec<String>) -> Vec<String> {
        errors
            .into_iter()
            .filter(|err| self.should_keep(err))
            .collect()
    }

    /// Filter a full lint result, messages and bare errors, in one call.
    pub fn filter_lint_result(
        &self,
        messages: Vec<LintMessage>,
        errors: Vec<String>,
    ) -> (Vec<LintMessage>, Vec<String>) {
        (self.filter_messages(messages), self.filter_errors(errors))
    }

    fn emit(&self, err_text: &str, rule_text: Option<&str>) {
        let chart_path = self.chart_path.to_string_lossy();
        self.sink().emit(&SuppressionEvent {
            chart_path: &chart_path,
            err_text,
            rule_text,
        });
    }

    fn sink(&self) -> &Arc<dyn EventSink> {
        self.sink.get_or_init(|| Arc::new(LogSink))
    }
}

impl fmt::Debug for Ignorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ignorer")
            .field("chart_path", &self.chart_path)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}
