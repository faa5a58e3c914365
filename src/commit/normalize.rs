// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Message transforms applied before matching.

/// Remove every line whose first character is `#`.
pub fn strip_hash_anchored_lines(message: &str) -> String {
    message
        .split('\n')
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove trailing newline characters.
pub fn trim_trailing_new_lines(message: &str) -> &str {
    message.trim_end_matches(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strip_hash_anchored_lines() {
        assert_eq!(strip_hash_anchored_lines("feat(S): msg\n# comment"), "feat(S): msg");
        assert_eq!(
            strip_hash_anchored_lines("# first\nfeat(S): msg\n\nbody #1\n# last"),
            "feat(S): msg\n\nbody #1"
        );
        assert_eq!(strip_hash_anchored_lines("feat: x\n # indented"), "feat: x\n # indented");
        assert_eq!(strip_hash_anchored_lines(""), "");
    }

    #[test]
    fn test_strip_leaves_blank_lines_behind() {
        let message = "feat(S): msg\n\n# Please enter the commit message\n# Lines starting with '#' are ignored\n";
        assert_eq!(strip_hash_anchored_lines(message), "feat(S): msg\n\n");
    }

    #[test]
    fn test_trim_trailing_new_lines() {
        assert_eq!(trim_trailing_new_lines("feat(S): msg\n\nbody\n\n"), "feat(S): msg\n\nbody");
        assert_eq!(trim_trailing_new_lines("\n\n"), "");
        assert_eq!(trim_trailing_new_lines("body\r\n"), "body");
        assert_eq!(trim_trailing_new_lines("body  "), "body  ");
    }

    proptest! {
        #[test]
        fn strip_is_idempotent(message in "[a-z#\n ]{0,64}") {
            let once = strip_hash_anchored_lines(&message);
            prop_assert_eq!(strip_hash_anchored_lines(&once), once.clone());
        }

        #[test]
        fn trim_is_idempotent(message in "[a-z#\n\r ]{0,64}") {
            let once = trim_trailing_new_lines(&message);
            prop_assert_eq!(trim_trailing_new_lines(once), once);
        }

        #[test]
        fn combined_is_idempotent(message in "[a-z#\n ]{0,64}") {
            let stripped = strip_hash_anchored_lines(&message);
            let once = trim_trailing_new_lines(&stripped).to_string();
            let stripped_again = strip_hash_anchored_lines(&once);
            prop_assert_eq!(trim_trailing_new_lines(&stripped_again), once.as_str());
        }
    }
}
