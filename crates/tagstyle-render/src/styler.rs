//! The user-facing styling object.

use log::debug;
use std::sync::Arc;
use tagstyle_config::{Config, StyleRegistry};
use tagstyle_core::{Result, StyleAttributes, StyleLookup, StyledTextNode, TagstyleError};
use tagstyle_parser::{MarkupParser, SplitOptions, TagSplitter};

use crate::raw::chunk;
use crate::{Formatter, FormatterRegistry};

/// Tag styles, formatters and the selected formatter in one place.
///
/// # Example
///
/// ```
/// use tagstyle_render::Styler;
///
/// let mut styler = Styler::new();
/// styler.set_formatter("ansi").unwrap();
/// styler.build_tag_style("title").unwrap().set_bold(true);
///
/// assert_eq!(styler.format("<title>Hi</title>", None).unwrap(), "\x1b[1mHi\x1b[0m");
/// assert_eq!(styler.plain("<title>Hi</title> there", None).unwrap(), "Hi there");
/// ```
#[derive(Debug, Clone)]
pub struct Styler {
    styles: StyleRegistry,
    formatters: FormatterRegistry,
    formatter: Option<Arc<dyn Formatter>>,
}

impl Default for Styler {
    fn default() -> Self {
        Self::new()
    }
}

impl Styler {
    /// Default tag styles, built-in formatters, no formatter selected.
    pub fn new() -> Self {
        Self {
            styles: StyleRegistry::with_defaults(),
            formatters: FormatterRegistry::with_builtins(),
            formatter: None,
        }
    }

    /// Styler set up from a configuration: its tag styles and its
    /// formatter.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut styler = Self {
            styles: config.style_registry()?,
            ..Self::new()
        };
        styler.set_formatter(config.output.formatter())?;
        Ok(styler)
    }

    /// Select the formatter registered (or aliased) as `name`.
    pub fn set_formatter(&mut self, name: &str) -> Result<&mut Self> {
        let formatter = self.formatters.resolve(name)?;
        debug!("using formatter '{}'", formatter.name());
        self.formatter = Some(formatter);
        Ok(self)
    }

    /// The selected formatter.
    pub fn formatter(&self) -> Option<&dyn Formatter> {
        self.formatter.as_deref()
    }

    fn selected(&self) -> Result<&dyn Formatter> {
        self.formatter().ok_or_else(|| {
            TagstyleError::Precondition("no formatter selected: call set_formatter first".into())
        })
    }

    /// Format with the selected formatter.
    ///
    /// # Errors
    ///
    /// [`TagstyleError::Precondition`] when no formatter is selected,
    /// otherwise whatever the formatter reports.
    pub fn format(&self, text: &str, width: Option<isize>) -> Result<String> {
        self.selected()?.format(text, width, &self.styles)
    }

    /// Undo the selected formatter's styling.
    pub fn unformat(&self, text: &str) -> Result<String> {
        Ok(self.selected()?.unformat(text))
    }

    pub fn parse(&self, text: &str, width: Option<isize>) -> Result<StyledTextNode> {
        MarkupParser::new(&self.styles).parse(text, width)
    }

    pub fn split(&self, text: &str, width: Option<isize>) -> String {
        TagSplitter::new(&self.styles).split(text, width)
    }

    pub fn split_with(&self, text: &str, options: SplitOptions) -> String {
        TagSplitter::new(&self.styles).split_with(text, options)
    }

    /// Text without style tags.
    pub fn plain(&self, text: &str, width: Option<isize>) -> Result<String> {
        MarkupParser::new(&self.styles).plain(text, width)
    }

    /// The text as is, cut into lines when `width` is positive.
    pub fn raw(&self, text: &str, width: Option<isize>) -> String {
        match width {
            Some(w) if w > 0 => chunk(text, w.unsigned_abs()),
            _ => text.to_string(),
        }
    }

    pub fn build_tag_style(&mut self, name: &str) -> Result<&mut StyleAttributes> {
        self.styles.build_tag_style(name)
    }

    pub fn set_tag_style(&mut self, name: &str, style: StyleAttributes) -> Result<()> {
        self.styles.set_tag_style(name, style)
    }

    pub fn tag_style(&self, name: &str) -> Option<&StyleAttributes> {
        self.styles.tag_style(name)
    }

    pub fn remove_tag_style(&mut self, name: &str) -> Option<StyleAttributes> {
        self.styles.remove_tag_style(name)
    }

    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    pub fn formatters(&self) -> &FormatterRegistry {
        &self.formatters
    }

    /// Registry to add formatters to before selecting one.
    pub fn formatters_mut(&mut self) -> &mut FormatterRegistry {
        &mut self.formatters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_needs_formatter() {
        let styler = Styler::new();
        assert!(matches!(styler.format("x", None), Err(TagstyleError::Precondition(_))));
        assert!(matches!(styler.unformat("x"), Err(TagstyleError::Precondition(_))));
    }

    #[test]
    fn test_unknown_formatter() {
        let mut styler = Styler::new();
        let err = styler.set_formatter("html").err().unwrap();
        assert!(err.is_invalid_argument());
        assert!(styler.formatter().is_none());
    }

    #[test]
    fn test_default_tags() {
        let mut styler = Styler::new();
        styler.set_formatter("cli").unwrap();
        assert_eq!(
            styler.format("<warning>careful</warning>", None).unwrap(),
            "\x1b[97;43mcareful\x1b[0m"
        );
    }

    #[test]
    fn test_removed_tag_becomes_text() {
        let mut styler = Styler::new();
        styler.remove_tag_style("info");
        assert_eq!(styler.plain("<info>x</info>", None).unwrap(), "<info>x</info>");
    }

    #[test]
    fn test_raw() {
        let styler = Styler::new();
        assert_eq!(styler.raw("abcdef", Some(4)), "abcd\nef");
        assert_eq!(styler.raw("abcdef", None), "abcdef");
        assert_eq!(styler.raw("abcdef", Some(0)), "abcdef");
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.output.formatter = Some("text".into());
        config.tags.insert("note".into(), StyleAttributes::new().bold());
        let styler = Styler::from_config(&config).unwrap();
        assert_eq!(styler.formatter().unwrap().name(), "plain");
        assert!(styler.tag_style("note").unwrap().bold);
        assert!(styler.tag_style("warning").is_some());
        assert_eq!(styler.format("<note>n</note>", None).unwrap(), "n");
    }
}
