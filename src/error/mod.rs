// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for git-commit.
//!
//! A message that does not follow the configured format is not an error:
//! linting reports it as `Ok(false)`. The types here cover everything that
//! prevents a verdict from being reached at all.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for git-commit operations.
#[derive(Error, Debug)]
pub enum GitCommitError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Rule pattern errors
    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),

    // Message source errors
    #[error("Message error: {0}")]
    Message(#[from] MessageError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Configuration file is empty: {path}")]
    Empty { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    Parse { message: String },
}

/// Errors raised while turning a rule into a matchable pattern.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Failed to compile pattern '{pattern}': {message}")]
    Compile { pattern: String, message: String },
}

impl PatternError {
    /// Build a compile error from the offending pattern and the regex failure.
    pub fn compile(pattern: impl Into<String>, err: &regex::Error) -> Self {
        PatternError::Compile {
            pattern: pattern.into(),
            message: err.to_string(),
        }
    }
}

/// Commit message source errors.
#[derive(Error, Debug)]
pub enum MessageError {
    #[error("Commit message file not found: {path}")]
    InvalidPath { path: PathBuf },

    #[error("There is no commit message content at '{path}'")]
    Empty { path: PathBuf },
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Not a git repository: {path}")]
    NotARepository { path: PathBuf },

    #[error("Hook '{hook}' is already installed")]
    AlreadyInstalled { hook: String },

    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },
}

/// Result type alias for git-commit operations.
pub type Result<T> = std::result::Result<T, GitCommitError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| GitCommitError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
