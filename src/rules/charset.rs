// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Character classes shared by every part of the commit grammar.

use lazy_static::lazy_static;

/// ASCII punctuation accepted in commit messages.
pub const ASCII_PUNCTUATION: &str = "`~!@#$%^&*()_+-=\\{}|;':\",./<>?[]";

/// CJK-script punctuation accepted in subjects and bodies.
pub const UNICODE_PUNCTUATION: &str = "·~！@#￥%……&*（）——+-=【】、；‘：“，。、《》？";

/// CJK unified ideographs, U+4E00 to U+9FA5.
const CJK_IDEOGRAPHS: &str = r"\x{4E00}-\x{9FA5}";

lazy_static! {
    static ref ASCII_PUNCTUATION_ESCAPED: String = escape_members(ASCII_PUNCTUATION);
    static ref UNICODE_PUNCTUATION_ESCAPED: String = escape_members(UNICODE_PUNCTUATION);

    static ref NO_PUNCTUATION: String = format!("[{}A-Za-z0-9_]", CJK_IDEOGRAPHS);
    static ref ASCII_PUNCTUATION_ALLOWED: String =
        format!(r"[A-Za-z0-9{} \t]", *ASCII_PUNCTUATION_ESCAPED);
    static ref FULL_CONTENT_NO_NEWLINE: String = format!(
        r"[{}A-Za-z0-9{}{} \t]",
        CJK_IDEOGRAPHS, *ASCII_PUNCTUATION_ESCAPED, *UNICODE_PUNCTUATION_ESCAPED
    );
    static ref FULL_CONTENT_WITH_NEWLINE: String = format!(
        r"[\n{}A-Za-z0-9{}{} \t]",
        CJK_IDEOGRAPHS, *ASCII_PUNCTUATION_ESCAPED, *UNICODE_PUNCTUATION_ESCAPED
    );
    static ref COMMIT_HASH: String = format!("[A-Za-z0-9{}]", *ASCII_PUNCTUATION_ESCAPED);
}

/// A reusable bracketed character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// CJK ideographs, ASCII letters and digits, underscore.
    NoPunctuation,
    /// ASCII letters and digits, ASCII punctuation, space and tab.
    AsciiPunctuationAllowed,
    /// Everything allowed on a single subject or body line.
    FullContentNoNewline,
    /// Same as [`CharClass::FullContentNoNewline`] plus `\n`.
    FullContentWithNewline,
    /// The hash (or any reference) following `This reverts commit `.
    CommitHash,
}

impl CharClass {
    /// The class as pattern text, brackets included.
    pub fn pattern(self) -> &'static str {
        match self {
            CharClass::NoPunctuation => NO_PUNCTUATION.as_str(),
            CharClass::AsciiPunctuationAllowed => ASCII_PUNCTUATION_ALLOWED.as_str(),
            CharClass::FullContentNoNewline => FULL_CONTENT_NO_NEWLINE.as_str(),
            CharClass::FullContentWithNewline => FULL_CONTENT_WITH_NEWLINE.as_str(),
            CharClass::CommitHash => COMMIT_HASH.as_str(),
        }
    }
}

/// Escape each character on its own so it is literal inside a `[...]` class.
fn escape_members(chars: &str) -> String {
    let mut buf = [0u8; 4];
    chars
        .chars()
        .map(|c| regex::escape(c.encode_utf8(&mut buf)))
        .collect()
}
