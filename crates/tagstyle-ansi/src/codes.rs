//! ANSI SGR code constants.
//!
//! Parameters are kept as bare strings (`"1"`, `"38;2;r;g;b"`) so that
//! several of them can be joined into one `ESC[...m` sequence.

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Reset all attributes (colors and formatting).
pub const RESET: &str = "\x1b[0m";

/// Bold parameter.
pub const BOLD: &str = "1";

/// Underline parameter.
pub const UNDERLINE: &str = "4";

/// Blink parameter.
pub const BLINK: &str = "5";

/// Reverse video parameter, used for highlighting.
pub const REVERSE: &str = "7";

/// Build an SGR sequence from its parameters.
///
/// Returns `None` when there is nothing to emit.
///
/// # Example
///
/// ```
/// use tagstyle_ansi::codes::sgr;
/// assert_eq!(sgr(&["31", "1"]), Some("\x1b[31;1m".to_string()));
/// assert_eq!(sgr::<&str>(&[]), None);
/// ```
pub fn sgr<S: AsRef<str>>(params: &[S]) -> Option<String> {
    if params.is_empty() {
        return None;
    }
    let joined = params
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(";");
    Some(format!("{}{}m", CSI, joined))
}

/// 24-bit foreground color parameter.
///
/// # Example
///
/// ```
/// use tagstyle_ansi::codes::fg_rgb;
/// assert_eq!(fg_rgb(255, 128, 0), "38;2;255;128;0");
/// ```
pub fn fg_rgb(r: u8, g: u8, b: u8) -> String {
    format!("38;2;{}", rgb_string(r, g, b))
}

/// 24-bit background color parameter.
pub fn bg_rgb(r: u8, g: u8, b: u8) -> String {
    format!("48;2;{}", rgb_string(r, g, b))
}

/// Format RGB values as semicolon-separated string.
fn rgb_string(r: u8, g: u8, b: u8) -> String {
    format!("{};{};{}", r, g, b)
}
