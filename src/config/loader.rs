// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, GitCommitError, Result};
use std::path::{Path, PathBuf};

use super::schema::CommitRule;

/// The configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = ".git-commit.yml";

/// Path of the configuration file for the current directory, if it exists.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_in(&current_dir)
}

/// Path of the configuration file in a specific directory, if it exists.
pub fn find_config_file_in(dir: &Path) -> Option<PathBuf> {
    let config_path = dir.join(CONFIG_FILE);
    config_path.is_file().then_some(config_path)
}

/// Load the rule for the current directory.
///
/// A missing file means defaults. A file that cannot be read or parsed is
/// reported and also falls back to the defaults.
pub fn load_current() -> CommitRule {
    match find_config_file() {
        Some(path) => load_config_from(&path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring {}: {}", path.display(), e);
            CommitRule::default()
        }),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            CommitRule::default()
        }
    }
}

/// Load the rule from a specific path.
pub fn load_config_from(path: &Path) -> Result<CommitRule> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(GitCommitError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        GitCommitError::Config(ConfigError::Parse {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    if content.is_empty() {
        return Err(GitCommitError::Config(ConfigError::Empty {
            path: path.to_path_buf(),
        }));
    }

    parse_config(&content)
}

/// Parse the rule from a YAML string.
///
/// A document holding nothing but comments and blank lines yields the defaults.
pub fn parse_config(content: &str) -> Result<CommitRule> {
    let has_content = content.lines().any(|line| {
        let line = line.trim();
        !line.is_empty() && !line.starts_with('#')
    });
    if !has_content {
        return Ok(CommitRule::default());
    }

    serde_yaml::from_str(content).map_err(|e| {
        GitCommitError::Config(ConfigError::Parse {
            message: format!("Failed to parse YAML: {}", e),
        })
    })
}
