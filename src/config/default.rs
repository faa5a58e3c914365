// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

/// The configuration file written by `git-commit init`.
pub fn example_config() -> &'static str {
    r#"# git-commit configuration
enabled: true
# types: # defaults using (feat|fix|docs|style|refactor|test|chore) types.
#   - feat
#   - fix
scope:
  required: false
  allows-ascii-punctuation: true
# ignoring-pattern: "^Merge branch .*" # Default is none.
# ignores-hash-anchored-lines: true # Default is false.
# allows-revert: true # Default is true.
# ignores-trailing-new-lines: true # Default is false.
"#
}
