// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message source.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use crate::error::{GitCommitError, MessageError, Result};
use crate::rules::{self, LintOptions, LintReport, RuleRepresentable};

/// A raw commit message, as git hands it to the `commit-msg` hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    text: String,
}

impl CommitMessage {
    /// Create a commit message from literal text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Read a commit message file, dropping the single trailing newline
    /// editors leave behind.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(GitCommitError::Message(MessageError::InvalidPath {
                path: path.to_path_buf(),
            }));
        }

        let mut text = std::fs::read_to_string(path)?;
        if text.is_empty() {
            return Err(GitCommitError::Message(MessageError::Empty {
                path: path.to_path_buf(),
            }));
        }

        if text.ends_with('\n') {
            text.pop();
        }

        tracing::debug!("Read {} bytes of commit message from {:?}", text.len(), path);
        Ok(Self { text })
    }

    /// The message text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The message as the rule will match it.
    pub fn normalized<'a, R: RuleRepresentable + ?Sized>(&'a self, rule: &R) -> Cow<'a, str> {
        rule.normalize(&self.text)
    }

    /// Whether the message satisfies `rule`.
    pub fn lint<R: RuleRepresentable + ?Sized>(&self, rule: &R) -> Result<bool> {
        rules::lint(&self.text, rule)
    }

    /// Lint the message and keep the details for reporting.
    pub fn evaluate<R: RuleRepresentable + ?Sized>(
        &self,
        rule: &R,
        options: LintOptions,
    ) -> Result<LintReport> {
        rules::evaluate(&self.text, rule, options)
    }
}

impl From<&str> for CommitMessage {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
