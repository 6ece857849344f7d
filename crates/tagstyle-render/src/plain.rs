//! Plain text formatter.

use tagstyle_core::{Result, StyleLookup};
use tagstyle_parser::MarkupParser;

use crate::Formatter;

/// Drops all styling and keeps the (wrapped) text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl Formatter for PlainFormatter {
    fn name(&self) -> &str {
        "plain"
    }

    fn format(&self, text: &str, width: Option<isize>, styles: &dyn StyleLookup) -> Result<String> {
        MarkupParser::new(styles).plain(text, width)
    }

    fn unformat(&self, text: &str) -> String {
        text.to_string()
    }
}
