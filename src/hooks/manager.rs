// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for installing and removing the `commit-msg` hook.

use crate::error::{GitCommitError, HookError, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::templates::{commit_msg_script, is_generated, COMMIT_MSG_HOOK};

/// Manager for the repository's `commit-msg` hook.
pub struct HookManager {
    hooks_dir: PathBuf,
    workdir: Option<PathBuf>,
}

impl HookManager {
    /// Create a hook manager for the repository containing the current directory.
    pub fn discover() -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Create a hook manager for the repository containing `path`.
    pub fn discover_from(path: &Path) -> Result<Self> {
        let repo = git2::Repository::discover(path).map_err(|_| {
            GitCommitError::Hook(HookError::NotARepository {
                path: path.to_path_buf(),
            })
        })?;

        Ok(Self {
            hooks_dir: repo.path().join("hooks"),
            workdir: repo.workdir().map(Path::to_path_buf),
        })
    }

    /// Create a hook manager for an explicit hooks directory.
    pub fn new(hooks_dir: PathBuf) -> Self {
        Self {
            hooks_dir,
            workdir: None,
        }
    }

    /// Root of the repository's working tree; `None` for bare repositories
    /// and managers built with [`HookManager::new`].
    ///
    /// Git runs `commit-msg` from this directory.
    pub fn workdir(&self) -> Option<&Path> {
        self.workdir.as_deref()
    }

    /// Path of the `commit-msg` hook.
    pub fn hook_path(&self) -> PathBuf {
        self.hooks_dir.join(COMMIT_MSG_HOOK)
    }

    fn backup_path(&self) -> PathBuf {
        self.hooks_dir.join(format!("{}.backup", COMMIT_MSG_HOOK))
    }

    /// Install the `commit-msg` hook.
    ///
    /// A hook written by someone else is kept as `commit-msg.backup`, but only
    /// when `force` is set.
    pub fn install(&self, force: bool) -> Result<()> {
        let hook_path = self.hook_path();
        let script = commit_msg_script();

        if hook_path.exists() {
            let existing = fs::read_to_string(&hook_path).unwrap_or_default();

            if existing == script && !force {
                return Err(GitCommitError::Hook(HookError::AlreadyInstalled {
                    hook: COMMIT_MSG_HOOK.to_string(),
                }));
            }

            if !is_generated(&existing) {
                if !force {
                    return Err(install_failed(
                        "an existing hook was not installed by git-commit, use --force to replace it",
                    ));
                }
                fs::rename(&hook_path, self.backup_path()).map_err(|e| {
                    install_failed(format!("Failed to backup existing hook: {}", e))
                })?;
            }
        }

        if !self.hooks_dir.exists() {
            fs::create_dir_all(&self.hooks_dir)
                .map_err(|e| install_failed(format!("Failed to create hooks directory: {}", e)))?;
        }

        fs::write(&hook_path, script)
            .map_err(|e| install_failed(format!("Failed to write hook: {}", e)))?;
        make_executable(&hook_path)?;

        tracing::debug!("Installed hook at {:?}", hook_path);
        Ok(())
    }

    /// Remove the `commit-msg` hook, restoring a previous hook if one was backed up.
    pub fn uninstall(&self) -> Result<()> {
        let hook_path = self.hook_path();

        if !hook_path.exists() {
            return Ok(());
        }

        let existing = fs::read_to_string(&hook_path).unwrap_or_default();
        if !is_generated(&existing) {
            return Err(GitCommitError::Hook(HookError::RemoveFailed {
                hook: COMMIT_MSG_HOOK.to_string(),
                message: "Hook was not installed by git-commit".to_string(),
            }));
        }

        fs::remove_file(&hook_path).map_err(|e| {
            GitCommitError::Hook(HookError::RemoveFailed {
                hook: COMMIT_MSG_HOOK.to_string(),
                message: format!("Failed to remove hook: {}", e),
            })
        })?;

        let backup_path = self.backup_path();
        if backup_path.exists() {
            restore_backup(&backup_path, &hook_path)?;
        }

        Ok(())
    }

    /// Whether our hook is installed.
    pub fn is_installed(&self) -> bool {
        fs::read_to_string(self.hook_path())
            .map(|content| is_generated(&content))
            .unwrap_or(false)
    }
}

fn install_failed(message: impl Into<String>) -> GitCommitError {
    GitCommitError::Hook(HookError::InstallFailed {
        hook: COMMIT_MSG_HOOK.to_string(),
        message: message.into(),
    })
}

fn restore_backup(backup_path: &Path, hook_path: &Path) -> Result<()> {
    fs::rename(backup_path, hook_path).map_err(|e| {
        GitCommitError::Hook(HookError::RemoveFailed {
            hook: COMMIT_MSG_HOOK.to_string(),
            message: format!(
                "Failed to restore previous hook from {}: {}",
                backup_path.display(),
                e
            ),
        })
    })?;
    tracing::debug!("Restored previous hook from {:?}", backup_path);
    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .map_err(|e| install_failed(format!("Failed to get permissions: {}", e)))?
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
        .map_err(|e| install_failed(format!("Failed to set permissions: {}", e)))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
