// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! git-commit - Commit Message Linter
//!
//! Validates git commit messages against a configurable structure: a typed
//! header with an optional scope, an optional body, an optional footer
//! (`BREAKING CHANGE:` or `Closes`), and an optional revert form.
//!
//! # Features
//!
//! - **Single-pattern grammar**: the rule is compiled into one pattern that
//!   must match the whole message exactly once
//! - **YAML configuration**: `.git-commit.yml` with types, scope options,
//!   ignoring pattern and normalization switches
//! - **Git Hooks**: installs a `commit-msg` hook that lints every commit
//!
//! # Example
//!
//! ```
//! use git_commit::config::CommitRule;
//! use git_commit::rules::lint;
//!
//! let rule = CommitRule::default();
//! assert!(lint("feat(parser): accept empty input", &rule).unwrap());
//! assert!(!lint("accept empty input", &rule).unwrap());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod hooks;
pub mod rules;

// Re-exports for convenience
pub use commit::CommitMessage;
pub use config::CommitRule;
pub use error::{GitCommitError, Result};
pub use rules::{lint, LintOptions, RuleRepresentable};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of git-commit.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
