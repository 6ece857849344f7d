//! Style attributes attached to tags and text nodes.

use serde::{Deserialize, Serialize};

/// The six style attributes a tag can carry.
///
/// Colors are kept as the raw strings found in the markup (a palette
/// name, a numeric code or `#RRGGBB`). They are only resolved, and
/// validated, by a formatter that needs them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StyleAttributes {
    /// Foreground color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Bold text
    pub bold: bool,
    /// Underlined text
    pub underline: bool,
    /// Blinking text
    pub blink: bool,
    /// Reverse video
    pub highlight: bool,
}

impl StyleAttributes {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the background color.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Make the text bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Make the text underlined.
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Make the text blink.
    pub fn blink(mut self) -> Self {
        self.blink = true;
        self
    }

    /// Reverse foreground and background.
    pub fn highlight(mut self) -> Self {
        self.highlight = true;
        self
    }

    pub fn set_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.color = Some(color.into());
        self
    }

    pub fn set_background_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn set_bold(&mut self, on: bool) -> &mut Self {
        self.bold = on;
        self
    }

    pub fn set_underline(&mut self, on: bool) -> &mut Self {
        self.underline = on;
        self
    }

    pub fn set_blink(&mut self, on: bool) -> &mut Self {
        self.blink = on;
        self
    }

    pub fn set_highlight(&mut self, on: bool) -> &mut Self {
        self.highlight = on;
        self
    }

    /// True when no attribute is set.
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// Lookup of named tag styles.
///
/// The splitter and the markup parser only need to ask whether a tag
/// name has a style, and which one. Registries implement this.
pub trait StyleLookup {
    /// Style registered under `name`, if any. Names are case-sensitive.
    fn tag_style(&self, name: &str) -> Option<&StyleAttributes>;

    /// Whether `name` is a registered tag.
    fn has_tag_style(&self, name: &str) -> bool {
        self.tag_style(name).is_some()
    }
}

impl StyleLookup for std::collections::HashMap<String, StyleAttributes> {
    fn tag_style(&self, name: &str) -> Option<&StyleAttributes> {
        self.get(name)
    }
}

/// A lookup with no registered tags; only `cs` is structural.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStyles;

impl StyleLookup for NoStyles {
    fn tag_style(&self, _name: &str) -> Option<&StyleAttributes> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_builder() {
        let style = StyleAttributes::new()
            .with_color("red")
            .with_background_color("blue")
            .bold()
            .underline()
            .blink()
            .highlight();
        assert_eq!(style.color.as_deref(), Some("red"));
        assert_eq!(style.background_color.as_deref(), Some("blue"));
        assert!(style.bold && style.underline && style.blink && style.highlight);
        assert!(!style.is_plain());
    }

    #[test]
    fn test_setters_chain() {
        let mut style = StyleAttributes::default();
        style.set_color("white").set_background_color("yellow").set_bold(true);
        assert_eq!(style.color.as_deref(), Some("white"));
        assert!(style.bold);
        style.set_bold(false);
        assert!(!style.bold);
    }

    #[test]
    fn test_default_is_plain() {
        assert!(StyleAttributes::default().is_plain());
    }

    #[test]
    fn test_hashmap_lookup() {
        let mut map = HashMap::new();
        map.insert("info".to_string(), StyleAttributes::new().with_color("blue"));
        assert!(map.has_tag_style("info"));
        assert!(!map.has_tag_style("Info"));
        assert!(!NoStyles.has_tag_style("info"));
    }
}
