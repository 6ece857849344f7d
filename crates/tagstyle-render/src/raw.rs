//! Raw passthrough formatter.

use tagstyle_core::{Result, StyleLookup};

use crate::Formatter;

/// Leaves markup untouched. With a positive width the text is cut into
/// lines of that many code points, tags included.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawFormatter;

impl Formatter for RawFormatter {
    fn name(&self) -> &str {
        "raw"
    }

    fn format(&self, text: &str, width: Option<isize>, _styles: &dyn StyleLookup) -> Result<String> {
        Ok(match width {
            Some(w) if w > 0 => chunk(text, w.unsigned_abs()),
            _ => text.to_string(),
        })
    }

    fn unformat(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Join groups of `size` code points with newlines.
///
/// # Example
///
/// ```
/// use tagstyle_render::raw::chunk;
/// assert_eq!(chunk("héllo", 2), "hé\nll\no");
/// assert_eq!(chunk("", 2), "");
/// ```
pub fn chunk(text: &str, size: usize) -> String {
    if size == 0 {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(size)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
