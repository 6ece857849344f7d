//! Color palettes and color resolution.
//!
//! A color in markup is one of:
//! - a palette name (`red`, `light_blue`, ...)
//! - one of the palette's numeric SGR codes (`31`, `104`, ...)
//! - a `#RRGGBB` hex string, emitted as 24-bit color

use crate::codes::{bg_rgb, fg_rgb};

/// Which side of the cell a color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Text color
    Foreground,
    /// Background color
    Background,
}

impl Layer {
    /// Human readable name, used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Layer::Foreground => "text",
            Layer::Background => "background",
        }
    }
}

/// Named palette: (name, foreground code, background code).
pub const PALETTE: [(&str, &str, &str); 16] = [
    ("black", "30", "40"),
    ("red", "31", "41"),
    ("green", "32", "42"),
    ("yellow", "33", "43"),
    ("blue", "34", "44"),
    ("purple", "35", "45"),
    ("cyan", "36", "46"),
    ("light_grey", "37", "47"),
    ("dark_grey", "90", "100"),
    ("light_red", "91", "101"),
    ("light_green", "92", "102"),
    ("light_yellow", "93", "103"),
    ("light_blue", "94", "104"),
    ("pink", "95", "105"),
    ("light_cyan", "96", "106"),
    ("white", "97", "107"),
];

fn code_of(entry: &(&'static str, &'static str, &'static str), layer: Layer) -> &'static str {
    match layer {
        Layer::Foreground => entry.1,
        Layer::Background => entry.2,
    }
}

/// Palette code for a color name.
///
/// # Example
///
/// ```
/// use tagstyle_ansi::color::{named_code, Layer};
/// assert_eq!(named_code("red", Layer::Foreground), Some("31"));
/// assert_eq!(named_code("red", Layer::Background), Some("41"));
/// assert_eq!(named_code("crimson", Layer::Foreground), None);
/// ```
pub fn named_code(name: &str, layer: Layer) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|entry| entry.0 == name)
        .map(|entry| code_of(entry, layer))
}

/// Whether `code` is one of the palette's codes for `layer`.
pub fn is_known_code(code: &str, layer: Layer) -> bool {
    PALETTE.iter().any(|entry| code_of(entry, layer) == code)
}

/// Parse a hex color string to RGB components.
///
/// # Arguments
///
/// * `hex` - A hex color string like "#ff0000" or "ff0000"
///
/// # Returns
///
/// RGB tuple (r, g, b) with values 0-255.
///
/// # Example
///
/// ```
/// use tagstyle_ansi::color::hex2rgb;
/// assert_eq!(hex2rgb("#ff8000"), Some((255, 128, 0)));
/// assert_eq!(hex2rgb("#fff"), None);
/// ```
pub fn hex2rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// Resolve a markup color to an SGR parameter.
///
/// Returns `None` when the color cannot be resolved for this layer:
/// an unknown name, a number that is not a palette code of the layer,
/// or a malformed hex string.
///
/// # Example
///
/// ```
/// use tagstyle_ansi::color::{resolve, Layer};
/// assert_eq!(resolve("blue", Layer::Foreground).as_deref(), Some("34"));
/// assert_eq!(resolve("41", Layer::Background).as_deref(), Some("41"));
/// assert_eq!(resolve("41", Layer::Foreground), None);
/// assert_eq!(
///     resolve("#ffffff", Layer::Foreground).as_deref(),
///     Some("38;2;255;255;255")
/// );
/// ```
pub fn resolve(color: &str, layer: Layer) -> Option<String> {
    if color.starts_with('#') {
        let (r, g, b) = hex2rgb(color)?;
        return Some(match layer {
            Layer::Foreground => fg_rgb(r, g, b),
            Layer::Background => bg_rgb(r, g, b),
        });
    }
    if !color.is_empty() && color.bytes().all(|b| b.is_ascii_digit()) {
        return is_known_code(color, layer).then(|| color.to_string());
    }
    named_code(color, layer).map(str::to_string)
}
