// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Composes the commit grammar for a rule into one pattern.
//!
//! ```text
//! header  = (type1|...|typeN) (\(scope\))? ": " subject
//! body    = (\n{1,2} line)*
//! footer  = \n\n (BREAKING CHANGE: ... | Closes ...)
//! revert  = "revert: " header \n\n "This reverts commit " hash
//! pattern = ^(revert|header body footer)$
//! ```
//!
//! The pattern is compiled multi-line and case-insensitive. Matching it is
//! left to [`super::engine`], which also requires the match to span the whole
//! message.

use regex::{Regex, RegexBuilder};

use crate::config::CommitRule;
use crate::error::{PatternError, Result};

use super::charset::CharClass;

/// The pattern of a disabled rule: blank or dot-only content.
pub const DISABLED_PATTERN: &str = r"^[\s.]*$";

/// Build the full pattern text for a rule.
pub fn compose(rule: &CommitRule) -> String {
    if !rule.enabled {
        return DISABLED_PATTERN.to_string();
    }

    let header = header(rule);
    let commit = format!("{}{}{}", header, body(), footer());

    if rule.allows_reverting {
        format!("^({}|{})$", revert(&header), commit)
    } else {
        format!("^({})$", commit)
    }
}

/// Build and compile the pattern for a rule.
pub fn compile_rule(rule: &CommitRule) -> Result<Regex> {
    let pattern = compose(rule);
    tracing::debug!("Composed commit pattern ({} bytes)", pattern.len());
    compile(&pattern)
}

/// Compile pattern text with the flags the grammar relies on.
pub fn compile(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .multi_line(true)
        .case_insensitive(true)
        .build()
        .map_err(|e| PatternError::compile(pattern, &e).into())
}

/// `(types)(\(scope\))?: (subject)`
///
/// The `": "` separator only exists when at least one type is configured.
fn header(rule: &CommitRule) -> String {
    let types = rule.types.join("|");

    let scope_content = if rule.scope.allows_ascii_punctuation {
        CharClass::AsciiPunctuationAllowed
    } else {
        CharClass::NoPunctuation
    };
    let scope = format!(r"\({}+\)", scope_content.pattern());
    let scope_quantifier = if rule.scope.required { "" } else { "?" };
    let separator = if types.is_empty() { "" } else { ": " };

    format!(
        "({})({}){}{}({}+)",
        types,
        scope,
        scope_quantifier,
        separator,
        CharClass::FullContentNoNewline.pattern()
    )
}

/// Paragraph lines, each preceded by one or two newlines.
fn body() -> String {
    format!(
        r"((\n{{1,2}}{}+)+)?",
        CharClass::FullContentNoNewline.pattern()
    )
}

fn footer() -> String {
    let breaking_change = format!(
        "(BREAKING CHANGE: {}+)",
        CharClass::FullContentWithNewline.pattern()
    );
    let closing_issue = format!("(Closes {}+)", CharClass::AsciiPunctuationAllowed.pattern());

    format!(r"(\n\n({}|{}))?", breaking_change, closing_issue)
}

fn revert(header: &str) -> String {
    format!(
        r"revert: {}\n{{2}}This reverts commit {}+",
        header,
        CharClass::CommitHash.pattern()
    )
}
