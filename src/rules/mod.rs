// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule module for commit validation.
//!
//! A [`CommitRule`](crate::config::CommitRule) is compiled into a single
//! pattern describing the whole commit grammar. A message passes when the
//! pattern matches it exactly once, from its first to its last byte.

pub mod charset;
mod engine;
pub mod pattern;
mod report;
mod rule;

pub use charset::CharClass;
pub use engine::{
    anchored_matches, evaluate, is_full_match, lint, lint_with_options, LintOptions, Linter,
};
pub use report::{expected_format, LintReport, COMMIT_FORMAT};
pub use rule::{matches_ignoring_pattern, RuleRepresentable};
