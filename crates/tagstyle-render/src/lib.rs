//! Tagstyle Render
//!
//! This crate turns tag markup into its final form through pluggable
//! formatters.
//!
//! # Formatters
//!
//! - **ansi** (alias `cli`) - SGR escape sequences for terminals
//! - **plain** (alias `text`) - Text only, styling dropped
//! - **raw** - Markup passed through untouched, optionally cut to width
//!
//! New formatters implement [`Formatter`] and are registered in a
//! [`FormatterRegistry`].
//!
//! # Example
//!
//! ```
//! use tagstyle_render::Styler;
//!
//! let mut styler = Styler::new();
//! styler.set_formatter("ansi").unwrap();
//!
//! let out = styler.format(r#"my <cs color="red">message</cs>"#, None).unwrap();
//! assert_eq!(out, "my \x1b[31mmessage\x1b[0m");
//! assert_eq!(styler.unformat(&out).unwrap(), "my message");
//! ```

pub mod ansi;
pub mod plain;
pub mod raw;
pub mod registry;
pub mod styler;

pub use ansi::AnsiFormatter;
pub use plain::PlainFormatter;
pub use raw::RawFormatter;
pub use registry::FormatterRegistry;
pub use styler::Styler;

use tagstyle_core::{Result, StyleLookup};

/// Output formatter trait.
///
/// A formatter receives markup, the target width and the tag styles in
/// effect, and produces its output. `unformat` reverses what `format`
/// added, as far as that is possible.
pub trait Formatter: Send + Sync {
    /// Name the formatter is registered under by default.
    fn name(&self) -> &str;

    /// Format `text` at `width` (see [`tagstyle_core::Width::lenient`]).
    fn format(&self, text: &str, width: Option<isize>, styles: &dyn StyleLookup) -> Result<String>;

    /// Remove what `format` added.
    fn unformat(&self, text: &str) -> String;
}

impl std::fmt::Debug for dyn Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Formatter({})", self.name())
    }
}
