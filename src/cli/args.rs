// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// git-commit - Lint git commit messages
///
/// Checks commit messages against a configurable conventional format.
#[derive(Parser, Debug)]
#[command(name = "git-commit")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Lint git commit messages", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file (defaults to ./.git-commit.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Lint a commit message file
    Lint(LintArgs),

    /// Install the commit-msg hook and create the configuration file
    Init(InitArgs),

    /// Remove the commit-msg hook
    Uninstall,

    /// Print version information
    Version,
}

/// Arguments for the lint command.
#[derive(Parser, Debug, Clone)]
pub struct LintArgs {
    /// Path of the commit message file (e.g. .git/COMMIT_EDITMSG)
    pub path: PathBuf,

    /// Print the sub-matches found and the verdict
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite an existing hook and configuration file
    #[arg(short, long, alias = "override")]
    pub force: bool,
}
