// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::commit::CommitMessage;
use crate::config::{example_config, CommitRule, CONFIG_FILE};
use crate::error::{Result, ResultExt};
use crate::hooks::HookManager;
use crate::rules::LintOptions;
use std::path::PathBuf;

use super::args::{Cli, Commands, InitArgs, LintArgs};

/// Run the CLI with the given arguments.
///
/// Returns `Ok(false)` when a commit message did not pass linting.
pub fn run(cli: Cli) -> Result<bool> {
    match cli.command.clone() {
        Commands::Lint(args) => run_lint(&cli, args),
        Commands::Init(args) => run_init(args),
        Commands::Uninstall => run_uninstall(),
        Commands::Version => run_version(),
    }
}

/// Load the rule named on the command line, or the one for the current directory.
fn load_rule(cli: &Cli) -> Result<CommitRule> {
    match &cli.config {
        Some(path) => CommitRule::load_from(path),
        None => Ok(CommitRule::current()),
    }
}

/// Run the lint command.
fn run_lint(cli: &Cli, args: LintArgs) -> Result<bool> {
    tracing::debug!("Running lint command with args: {:?}", args);

    let rule = load_rule(cli)?;
    let message = CommitMessage::from_path(&args.path)?;

    let options = if args.verbose {
        LintOptions::verbose()
    } else {
        LintOptions::default()
    };
    let report = message.evaluate(&rule, options)?;
    report.print(cli.format, args.verbose);

    Ok(report.passed)
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<bool> {
    tracing::debug!("Running init command with args: {:?}", args);

    let manager = HookManager::discover()?;
    manager.install(args.force)?;
    println!("✓ Installed commit-msg hook");

    // The hook runs from the worktree root, which is where the rule is looked up.
    let config_path = manager
        .workdir()
        .map(|root| root.join(CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    if config_path.exists() && !args.force {
        println!("✓ Keeping existing {}", CONFIG_FILE);
    } else {
        std::fs::write(&config_path, example_config())
            .context("Failed to write configuration")?;
        println!("✓ Created {}", config_path.display());
    }

    Ok(true)
}

/// Run the uninstall command.
fn run_uninstall() -> Result<bool> {
    let manager = HookManager::discover()?;
    let was_installed = manager.is_installed();
    manager.uninstall()?;

    if was_installed {
        println!("✓ Uninstalled commit-msg hook");
    } else {
        println!("No commit-msg hook from git-commit is installed");
    }
    Ok(true)
}

/// Run the version command.
fn run_version() -> Result<bool> {
    println!("git-commit {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(true)
}
