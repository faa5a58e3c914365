// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The behaviour a lint rule provides to the engine.

use regex::Regex;
use std::borrow::Cow;

use crate::commit::normalize::{strip_hash_anchored_lines, trim_trailing_new_lines};
use crate::config::CommitRule;
use crate::error::Result;

use super::engine;
use super::pattern;
use super::report::{expected_format, COMMIT_FORMAT};

/// A rule a commit message can be linted against.
pub trait RuleRepresentable {
    /// Compile the grammar this rule accepts.
    fn compile_pattern(&self) -> Result<Regex>;

    /// Whether the (normalized) message should be linted at all.
    fn is_enabled(&self, message: &str) -> bool;

    /// Transform the raw message before it is matched.
    fn normalize<'a>(&self, message: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(message)
    }

    /// Description of the accepted format, shown when a message fails.
    fn expected_format(&self) -> String {
        COMMIT_FORMAT.to_string()
    }
}

impl RuleRepresentable for CommitRule {
    fn compile_pattern(&self) -> Result<Regex> {
        pattern::compile_rule(self)
    }

    fn is_enabled(&self, message: &str) -> bool {
        if !self.enabled {
            tracing::debug!("Rule is disabled");
            return false;
        }

        match self.ignoring_pattern.as_deref() {
            Some(ignoring) if matches_ignoring_pattern(ignoring, message) => {
                tracing::debug!("Message matches ignoring pattern '{}'", ignoring);
                false
            }
            _ => true,
        }
    }

    fn normalize<'a>(&self, message: &'a str) -> Cow<'a, str> {
        let mut message = Cow::Borrowed(message);

        if self.ignores_hash_anchored_lines {
            message = Cow::Owned(strip_hash_anchored_lines(&message));
        }

        if self.ignores_trailing_new_lines {
            message = match message {
                Cow::Borrowed(text) => Cow::Borrowed(trim_trailing_new_lines(text)),
                Cow::Owned(mut text) => {
                    let trimmed_len = trim_trailing_new_lines(&text).len();
                    text.truncate(trimmed_len);
                    Cow::Owned(text)
                }
            };
        }

        message
    }

    fn expected_format(&self) -> String {
        expected_format(self)
    }
}

/// Whether a user-supplied ignoring pattern spans the whole message.
///
/// A pattern that fails to compile never matches.
pub fn matches_ignoring_pattern(ignoring: &str, message: &str) -> bool {
    match Regex::new(ignoring) {
        Ok(regex) => engine::is_full_match(&engine::anchored_matches(&regex, message), message),
        Err(e) => {
            tracing::warn!("Invalid ignoring pattern '{}': {}", ignoring, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_rule_is_not_enabled() {
        let rule = CommitRule::disabled();
        assert!(!rule.is_enabled("feat: anything"));
        assert!(rule.compile_pattern().is_ok());
    }

    #[test]
    fn test_ignoring_pattern() {
        let rule = CommitRule {
            ignoring_pattern: Some("Merge branch '.*'".to_string()),
            ..CommitRule::default()
        };
        assert!(!rule.is_enabled("Merge branch 'main'"));
        assert!(rule.is_enabled("Merge branch 'main' into dev\nextra"));
        assert!(rule.is_enabled("feat: add parser"));
    }

    #[test]
    fn test_ignoring_pattern_must_cover_message() {
        let rule = CommitRule {
            ignoring_pattern: Some("WIP".to_string()),
            ..CommitRule::default()
        };
        assert!(!rule.is_enabled("WIP"));
        assert!(rule.is_enabled("WIP: half done"));
    }

    #[test]
    fn test_malformed_ignoring_pattern_does_not_match() {
        assert!(!matches_ignoring_pattern("(unclosed", "(unclosed"));

        let rule = CommitRule {
            ignoring_pattern: Some("(unclosed".to_string()),
            ..CommitRule::default()
        };
        assert!(rule.is_enabled("(unclosed"));
    }

    #[test]
    fn test_normalize_passthrough() {
        let rule = CommitRule::default();
        let message = "feat(S): msg\n# comment\n\n";
        assert!(matches!(rule.normalize(message), Cow::Borrowed(m) if m == message));
    }

    #[test]
    fn test_normalize_strips_then_trims() {
        let rule = CommitRule {
            ignores_hash_anchored_lines: true,
            ignores_trailing_new_lines: true,
            ..CommitRule::default()
        };
        assert_eq!(
            rule.normalize("feat(S): msg\n\nbody\n\n# Please enter a message\n# ..."),
            "feat(S): msg\n\nbody"
        );
    }

    #[test]
    fn test_normalize_trim_borrows() {
        let rule = CommitRule {
            ignores_trailing_new_lines: true,
            ..CommitRule::default()
        };
        assert!(matches!(rule.normalize("feat: x\n\n"), Cow::Borrowed("feat: x")));
    }

    #[test]
    fn test_expected_format_lists_types() {
        let rule = CommitRule {
            types: vec!["feat".to_string(), "ci".to_string()],
            ..CommitRule::default()
        };
        let format = RuleRepresentable::expected_format(&rule);
        assert!(format.contains("feat, ci"));
    }
}
