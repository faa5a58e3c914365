// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook script templates.

/// Marker identifying hooks written by git-commit.
pub const HOOK_MARKER: &str = "# Generated by git-commit";

/// The hook git-commit installs.
pub const COMMIT_MSG_HOOK: &str = "commit-msg";

/// Generate the `commit-msg` hook script.
pub fn commit_msg_script() -> String {
    format!(
        "#!/bin/sh\n{}\n\ngit-commit lint \"$1\"\n",
        HOOK_MARKER
    )
}

/// Whether a hook script was written by git-commit.
pub fn is_generated(script: &str) -> bool {
    script.contains(HOOK_MARKER)
}
