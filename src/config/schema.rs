// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the lint rule that can be loaded from `.git-commit.yml`.

use serde::{Deserialize, Deserializer, Serialize};

/// The conventional commit types accepted when none are configured.
pub const DEFAULT_TYPES: &[&str] = &["feat", "fix", "docs", "style", "refactor", "test", "chore"];

/// The rule a commit message is linted against.
///
/// Loaded once per invocation and treated as read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CommitRule {
    /// Master switch. A disabled rule accepts every message.
    pub enabled: bool,

    /// Accepted header types, joined into an alternation in this order.
    ///
    /// An empty list drops the `type: ` prefix from the header entirely.
    #[serde(deserialize_with = "deserialize_types")]
    pub types: Vec<String>,

    /// Scope configuration.
    pub scope: ScopeRule,

    /// When the whole message matches this pattern, linting is bypassed.
    pub ignoring_pattern: Option<String>,

    /// Strip lines starting with `#` before linting.
    pub ignores_hash_anchored_lines: bool,

    /// Accept `revert: <header>\n\nThis reverts commit <hash>`.
    #[serde(rename = "allows-revert", alias = "allows-reverting")]
    pub allows_reverting: bool,

    /// Trim trailing newline characters before linting.
    pub ignores_trailing_new_lines: bool,
}

impl Default for CommitRule {
    fn default() -> Self {
        Self {
            enabled: true,
            types: default_types(),
            scope: ScopeRule::default(),
            ignoring_pattern: None,
            ignores_hash_anchored_lines: false,
            allows_reverting: true,
            ignores_trailing_new_lines: false,
        }
    }
}

impl CommitRule {
    /// Load the rule from `.git-commit.yml` in the current directory,
    /// falling back to the defaults.
    pub fn current() -> Self {
        super::loader::load_current()
    }

    /// Load the rule from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// A rule with every default applied except for the master switch.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Scope configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ScopeRule {
    /// Whether a parenthesized scope is mandatory.
    pub required: bool,

    /// Whether the scope may contain ASCII punctuation.
    pub allows_ascii_punctuation: bool,
}

fn default_types() -> Vec<String> {
    DEFAULT_TYPES.iter().map(|t| t.to_string()).collect()
}

/// `types:` with no value keeps the defaults; blank or null entries are dropped.
fn deserialize_types<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Option<String>>>::deserialize(deserializer)?;
    Ok(match raw {
        Some(entries) => entries
            .into_iter()
            .flatten()
            .filter(|t| !t.trim().is_empty())
            .collect(),
        None => default_types(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule() {
        let rule = CommitRule::default();
        assert!(rule.enabled);
        assert_eq!(rule.types.len(), 7);
        assert_eq!(rule.types[0], "feat");
        assert!(!rule.scope.required);
        assert!(!rule.scope.allows_ascii_punctuation);
        assert!(rule.ignoring_pattern.is_none());
        assert!(rule.allows_reverting);
        assert!(!rule.ignores_hash_anchored_lines);
        assert!(!rule.ignores_trailing_new_lines);
    }

    #[test]
    fn test_kebab_case_keys() {
        let yaml = r#"
enabled: true
scope:
  required: true
  allows-ascii-punctuation: true
ignoring-pattern: "^WIP"
ignores-hash-anchored-lines: true
allows-revert: false
ignores-trailing-new-lines: true
"#;
        let rule: CommitRule = serde_yaml::from_str(yaml).unwrap();
        assert!(rule.scope.required);
        assert!(rule.scope.allows_ascii_punctuation);
        assert_eq!(rule.ignoring_pattern.as_deref(), Some("^WIP"));
        assert!(rule.ignores_hash_anchored_lines);
        assert!(!rule.allows_reverting);
        assert!(rule.ignores_trailing_new_lines);
        assert_eq!(rule.types, default_types());
    }

    #[test]
    fn test_null_type_entry_is_dropped() {
        let yaml = "enabled: true\ntypes:\n  -\n";
        let rule: CommitRule = serde_yaml::from_str(yaml).unwrap();
        assert!(rule.types.is_empty());
    }

    #[test]
    fn test_types_without_value_keep_defaults() {
        let yaml = "enabled: true\ntypes:\n";
        let rule: CommitRule = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rule.types, default_types());
    }

    #[test]
    fn test_custom_types_keep_order() {
        let yaml = "types:\n  - feat\n  - fix\n  - ci\n";
        let rule: CommitRule = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rule.types, vec!["feat", "fix", "ci"]);
    }

    #[test]
    fn test_disabled() {
        let rule = CommitRule::disabled();
        assert!(!rule.enabled);
        assert_eq!(rule.types, default_types());
    }
}
