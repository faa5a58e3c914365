// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Match engine: runs a rule's grammar against a commit message.

use regex::{Match, Regex};
use std::sync::OnceLock;

use crate::error::Result;

use super::report::LintReport;
use super::rule::RuleRepresentable;

/// Options controlling a lint run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LintOptions {
    /// Collect the sub-matches found for diagnostic output.
    pub verbose: bool,
}

impl LintOptions {
    /// Options with verbose diagnostics enabled.
    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

/// Lints messages against one rule, compiling its pattern at most once.
///
/// The compiled pattern is read-only, so a `Linter` can be shared between
/// threads linting different messages.
pub struct Linter<'r, R: RuleRepresentable + ?Sized> {
    rule: &'r R,
    regex: OnceLock<Regex>,
}

impl<'r, R: RuleRepresentable + ?Sized> Linter<'r, R> {
    /// Create a linter for the given rule.
    pub fn new(rule: &'r R) -> Self {
        Self {
            rule,
            regex: OnceLock::new(),
        }
    }

    /// The compiled grammar, built on first use.
    pub fn regex(&self) -> Result<&Regex> {
        if let Some(regex) = self.regex.get() {
            return Ok(regex);
        }
        let regex = self.rule.compile_pattern()?;
        Ok(self.regex.get_or_init(|| regex))
    }

    /// Lint a message and describe the outcome.
    pub fn evaluate(&self, message: &str, options: LintOptions) -> Result<LintReport> {
        let normalized = self.rule.normalize(message);
        let expected_format = self.rule.expected_format();

        if !self.rule.is_enabled(&normalized) {
            return Ok(LintReport::skipped(normalized.into_owned(), expected_format));
        }

        let regex = self.regex()?;
        let matches = anchored_matches(regex, &normalized);
        tracing::debug!("Found {} anchored match(es)", matches.len());

        let passed = is_full_match(&matches, &normalized);
        let sub_matches = if options.verbose {
            matches.iter().map(|m| m.as_str().to_string()).collect()
        } else {
            Vec::new()
        };

        Ok(LintReport {
            message: normalized.into_owned(),
            passed,
            skipped: false,
            matches: sub_matches,
            expected_format,
        })
    }

    /// Lint a message.
    pub fn lint(&self, message: &str, options: LintOptions) -> Result<bool> {
        Ok(self.evaluate(message, options)?.passed)
    }
}

/// Whether `message` satisfies `rule`.
///
/// Fails only when the rule cannot be compiled into a pattern.
pub fn lint<R: RuleRepresentable + ?Sized>(message: &str, rule: &R) -> Result<bool> {
    lint_with_options(message, rule, LintOptions::default())
}

/// Same as [`lint`] with explicit options.
pub fn lint_with_options<R: RuleRepresentable + ?Sized>(
    message: &str,
    rule: &R,
    options: LintOptions,
) -> Result<bool> {
    Linter::new(rule).lint(message, options)
}

/// Lint a message and keep the details for reporting.
pub fn evaluate<R: RuleRepresentable + ?Sized>(
    message: &str,
    rule: &R,
    options: LintOptions,
) -> Result<LintReport> {
    Linter::new(rule).evaluate(message, options)
}

/// Collect consecutive matches, each starting exactly where the previous one
/// ended and the first at offset 0.
pub fn anchored_matches<'h>(regex: &Regex, haystack: &'h str) -> Vec<Match<'h>> {
    let mut matches = Vec::new();
    let mut at = 0;

    while at <= haystack.len() {
        match regex.find_at(haystack, at) {
            Some(m) if m.start() == at => {
                matches.push(m);
                if m.end() == at {
                    break;
                }
                at = m.end();
            }
            _ => break,
        }
    }

    matches
}

/// A single match covering the whole message.
pub fn is_full_match(matches: &[Match<'_>], haystack: &str) -> bool {
    matches!(matches, [only] if only.start() == 0 && only.end() == haystack.len())
}
