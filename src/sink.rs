//! Structured observability for filter decisions.
//!
//! The engine reports every keep/discard decision through an [`EventSink`]
//! instead of logging directly, so callers can route decisions to whatever
//! they run (a test collector, a tracing bridge). [`LogSink`] is the default
//! and writes JSON-encoded debug lines.

use log::debug;
use serde::Serialize;

/// One filter decision, emitted for every diagnostic the engine evaluates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuppressionEvent<'a> {
    /// Chart the diagnostic belongs to.
    pub chart_path: &'a str,

    /// Full diagnostic text that was evaluated.
    pub err_text: &'a str,

    /// Original text of the matching rule, present when the diagnostic was
    /// suppressed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_text: Option<&'a str>,
}

/// Capability for receiving [`SuppressionEvent`]s.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &SuppressionEvent<'_>);
}

/// Default sink: one `log::debug!` line per event.
#[derive(Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&self, event: &SuppressionEvent<'_>) {
        match serde_json::to_string(event) {
            Ok(payload) => debug!("lint ignore decision {payload}"),
            Err(err) => debug!("lint ignore decision could not be encoded: {err}"),
        }
    }
}
