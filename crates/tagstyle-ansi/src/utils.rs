//! Stripping of formatter output.

use regex::Regex;
use std::sync::LazyLock;

/// Regex pattern for SGR sequences as emitted by the ANSI formatter.
pub const SGR_ESCAPE: &str = r"\x1b\[[0-9;]+m";

/// Compiled regex for SGR_ESCAPE pattern.
static SGR_ESCAPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(SGR_ESCAPE).unwrap());

/// Remove all SGR escape sequences from text.
///
/// # Example
///
/// ```
/// use tagstyle_ansi::utils::strip_sgr;
/// let text = "\x1b[31mred\x1b[0m text";
/// assert_eq!(strip_sgr(text), "red text");
/// ```
pub fn strip_sgr(text: &str) -> String {
    SGR_ESCAPE_RE.replace_all(text, "").into_owned()
}
