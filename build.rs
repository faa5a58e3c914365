// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

fn main() {
    // Builds from a source tarball have no git metadata; `version_string`
    // falls back to the package version in that case.
    if let Err(e) = EmitBuilder::builder()
        .git_sha(false)
        .git_commit_date()
        .emit()
    {
        println!("cargo:warning=git-commit: git metadata unavailable: {e}");
    }
}
