//! Ignore rule variants and their matching algorithms.

use glob::Pattern;
use serde::{Deserialize, Serialize};

/// A successful match of an ignore rule against a diagnostic.
///
/// Carries the rule's original line and the diagnostic text so decision
/// events can report both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMatch {
    pub rule_text: String,
    pub err_text: String,
}

/// One parsed line of the ignore file.
///
/// The two shapes carry different matching semantics; the filtering engine
/// only ever calls [`IgnoreRule::matches`] and never inspects the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreRule {
    Pathful(PathfulRule),
    Pathless(PathlessRule),
}

impl IgnoreRule {
    /// Test this rule against the full text of one diagnostic.
    ///
    /// Returns a [`RuleMatch`] when the diagnostic should be suppressed.
    pub fn matches(&self, err_text: &str) -> Option<RuleMatch> {
        match self {
            IgnoreRule::Pathful(rule) => rule.matches(err_text),
            IgnoreRule::Pathless(rule) => rule.matches(err_text),
        }
    }

    /// The original ignore-file line this rule was parsed from.
    pub fn rule_text(&self) -> &str {
        match self {
            IgnoreRule::Pathful(rule) => &rule.rule_text,
            IgnoreRule::Pathless(rule) => &rule.rule_text,
        }
    }
}

/// Suppresses diagnostics whose text embeds a matching file path.
///
/// Matches template-execution shaped errors such as
/// `template: <path>:<line>:<col>: executing "...": <detail>` — the embedded
/// path must contain `message_path` and the raw text must contain
/// `message_text`. An empty `message_text` makes this a path-only rule that
/// suppresses on the path alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathfulRule {
    pub rule_text: String,
    pub message_path: String,
    pub message_text: String,
}

impl PathfulRule {
    pub fn matches(&self, err_text: &str) -> Option<RuleMatch> {
        // Diagnostics without an embedded path are never ours to suppress.
        let offending_path = extract_offending_path(err_text)?;

        if clean_path(offending_path).contains(&clean_path(&self.message_path))
            && err_text.contains(&self.message_text)
        {
            return Some(RuleMatch {
                rule_text: self.rule_text.clone(),
                err_text: err_text.to_string(),
            });
        }
        None
    }
}

/// Suppresses diagnostics with no embedded path, such as chart-metadata
/// findings (`chart metadata is missing these dependencies`).
///
/// The pattern is a shell-style glob tried twice: over the whole diagnostic
/// text, then its pre-first-colon prefix. The second tier lets a pattern end
/// in `: *` while still matching diagnostics whose trailing detail varies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathlessRule {
    pub rule_text: String,
    pub message_text: String,
}

impl PathlessRule {
    pub fn matches(&self, err_text: &str) -> Option<RuleMatch> {
        let prefix = self.message_text.split(':').next().unwrap_or_default().trim();

        if glob_matches(&self.message_text, err_text) || glob_matches(prefix, err_text) {
            return Some(RuleMatch {
                rule_text: self.rule_text.clone(),
                err_text: err_text.to_string(),
            });
        }
        None
    }
}

/// Pull the offending file path out of a diagnostic, if it embeds one.
///
/// Splitting on `:` must yield more than two parts; the path is then the
/// trimmed second part. Anything else carries no path.
fn extract_offending_path(err_text: &str) -> Option<&str> {
    let parts: Vec<&str> = err_text.split(':').collect();
    if parts.len() > 2 {
        Some(parts[1].trim())
    } else {
        None
    }
}

/// Whole-string shell-glob match; a pattern that fails to compile matches nothing.
fn glob_matches(pattern: &str, text: &str) -> bool {
    match Pattern::new(pattern) {
        Ok(glob) => glob.matches(text),
        Err(_) => false,
    }
}

/// Lexically normalize a slash-separated path: collapse repeated separators,
/// drop `.` segments, resolve `..`, strip any trailing slash. An empty result
/// becomes `.`.
fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !rooted {
                    segments.push("..");
                }
            }
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pathful(path: &str, text: &str) -> PathfulRule {
        let rule_text = if text.is_empty() {
            path.to_string()
        } else {
            format!("{path} {text}")
        };
        PathfulRule {
            rule_text,
            message_path: path.to_string(),
            message_text: text.to_string(),
        }
    }

    fn pathless(pattern: &str) -> PathlessRule {
        PathlessRule {
            rule_text: format!("error_lint_ignore={pattern}"),
            message_text: pattern.to_string(),
        }
    }

    // ==================== PathfulRule Tests ====================

    #[test]
    fn pathful_matches_template_error_for_its_path() {
        let rule = pathful(
            "kas/templates/serviceaccount.yaml",
            "<.Values.global.serviceAccount.enabled>",
        );
        let err = "template: kas/templates/serviceaccount.yaml:1:57: executing \
                   \"kas/templates/serviceaccount.yaml\" at <.Values.global.serviceAccount.enabled>: \
                   nil pointer evaluating interface {}.enabled";

        let found = rule.matches(err).expect("rule should match");
        assert_eq!(found.rule_text, rule.rule_text);
        assert_eq!(found.err_text, err);
    }

    #[test]
    fn pathful_keeps_same_error_in_other_template() {
        let rule = pathful(
            "kas/templates/serviceaccount.yaml",
            "<.Values.global.serviceAccount.enabled>",
        );
        let err = "template: kas/templates/deployment.yaml:2:2: executing \
                   \"kas/templates/deployment.yaml\" at <.Values.x>: nil pointer";

        assert!(rule.matches(err).is_none());
    }

    #[test]
    fn pathful_requires_both_path_and_text_fragment() {
        let rule = pathful("a/b/c.yaml", "substring");

        assert!(rule
            .matches("template: a/b/c.yaml:3:4: executing with substring inside")
            .is_some());
        // Right path, wrong text.
        assert!(rule
            .matches("template: a/b/c.yaml:3:4: executing something else")
            .is_none());
        // Right text, wrong path.
        assert!(rule
            .matches("template: x/y/z.yaml:3:4: executing with substring inside")
            .is_none());
    }

    #[test]
    fn pathful_with_empty_text_suppresses_on_path_alone() {
        let rule = pathful("templates/broken.yaml", "");

        assert!(rule.matches("template: templates/broken.yaml:1:1: A").is_some());
        assert!(rule.matches("template: templates/broken.yaml:9:9: B").is_some());
        assert!(rule.matches("template: templates/fine.yaml:1:1: A").is_none());
    }

    #[test]
    fn pathful_never_matches_diagnostics_without_embedded_path() {
        let rule = pathful("templates/broken.yaml", "");

        // Fewer than three colon-delimited segments: no extractable path.
        assert!(rule.matches("icon is recommended").is_none());
        assert!(rule.matches("chart metadata: bad").is_none());
    }

    #[test]
    fn pathful_path_fragments_are_cleaned_before_containment() {
        let rule = pathful("templates//broken.yaml/", "");

        assert!(rule.matches("template: templates/broken.yaml:1:1: A").is_some());
    }

    // ==================== PathlessRule Tests ====================

    #[test]
    fn pathless_glob_matches_full_text() {
        let rule = pathless("chart metadata is missing these dependencies*");

        assert!(rule
            .matches("chart metadata is missing these dependencies: foo,bar")
            .is_some());
        assert!(rule.matches("unrelated failure").is_none());
    }

    #[test]
    fn pathless_falls_back_to_pre_colon_prefix() {
        let rule = pathless("file does not exist: *");

        // The full pattern wants a trailing detail; the prefix tier still
        // catches the bare form.
        assert!(rule.matches("file does not exist").is_some());
        assert!(rule.matches("file does not exist: values.yaml").is_some());
    }

    #[test]
    fn pathless_literal_pattern_requires_whole_string() {
        let rule = pathless("icon is recommended");

        assert!(rule.matches("icon is recommended").is_some());
        assert!(rule.matches("icon is recommended for subcharts").is_none());
    }

    #[test]
    fn pathless_uncompilable_pattern_matches_nothing() {
        let rule = pathless("[");

        assert!(rule.matches("[").is_none());
        assert!(rule.matches("anything").is_none());
    }

    // ==================== IgnoreRule Tests ====================

    #[test]
    fn rule_text_is_preserved_through_the_variant() {
        let rule = IgnoreRule::Pathless(pathless("icon is recommended"));
        assert_eq!(rule.rule_text(), "error_lint_ignore=icon is recommended");

        let rule = IgnoreRule::Pathful(pathful("a/b.yaml", "boom"));
        assert_eq!(rule.rule_text(), "a/b.yaml boom");
    }

    #[test]
    fn rule_serializes_with_variant_tag() {
        let rule = IgnoreRule::Pathful(pathful("a/b.yaml", "boom"));
        let json = serde_json::to_string(&rule).unwrap();
        assert!(json.contains("Pathful"));

        let back: IgnoreRule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rule);
    }

    // ==================== clean_path Tests ====================

    #[test]
    fn clean_path_collapses_separators_and_dots() {
        assert_eq!(clean_path("a//b/./c/"), "a/b/c");
        assert_eq!(clean_path("./a/b"), "a/b");
        assert_eq!(clean_path("a/b/../c"), "a/c");
    }

    #[test]
    fn clean_path_handles_rooted_and_empty_inputs() {
        assert_eq!(clean_path("/a/../.."), "/");
        assert_eq!(clean_path("/a/b/"), "/a/b");
        assert_eq!(clean_path(""), ".");
        assert_eq!(clean_path("../a"), "../a");
    }
}
