//! Named tag styles.

use log::debug;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tagstyle_core::{Result, StyleAttributes, StyleLookup, TagstyleError, INLINE_TAG};

/// Names both the tag grammar and the XML reader accept.
static TAG_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9]*$").unwrap());

/// Table of tag name to style.
///
/// Tags with a style here become structural for the splitter and get
/// a copy of the style when parsed. Names are case-sensitive and the
/// last registration wins.
///
/// # Example
///
/// ```
/// use tagstyle_config::StyleRegistry;
/// use tagstyle_core::StyleLookup;
///
/// let mut styles = StyleRegistry::with_defaults();
/// styles.build_tag_style("notice").unwrap().set_color("cyan").set_bold(true);
///
/// assert!(styles.has_tag_style("notice"));
/// assert_eq!(styles.tag_style("error").unwrap().background_color.as_deref(), Some("red"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRegistry {
    styles: BTreeMap<String, StyleAttributes>,
}

impl StyleRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `warning`, `error`, `success` and `info`, each
    /// white text on a yellow, red, green or blue background.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (name, background) in [
            ("warning", "yellow"),
            ("error", "red"),
            ("success", "green"),
            ("info", "blue"),
        ] {
            registry.styles.insert(
                name.to_string(),
                StyleAttributes::new()
                    .with_color("white")
                    .with_background_color(background),
            );
        }
        registry
    }

    /// Register an empty style under `name`, replacing any previous
    /// one, and return it for setup.
    pub fn build_tag_style(&mut self, name: &str) -> Result<&mut StyleAttributes> {
        validate_name(name)?;
        debug!("building tag style '{}'", name);
        let slot = self.styles.entry(name.to_string()).or_default();
        *slot = StyleAttributes::default();
        Ok(slot)
    }

    /// Register `style` under `name`, replacing any previous one.
    pub fn set_tag_style(&mut self, name: &str, style: StyleAttributes) -> Result<()> {
        validate_name(name)?;
        debug!("setting tag style '{}'", name);
        self.styles.insert(name.to_string(), style);
        Ok(())
    }

    /// Remove the style of `name`, returning it.
    pub fn remove_tag_style(&mut self, name: &str) -> Option<StyleAttributes> {
        self.styles.remove(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Add every style of `other`, replacing styles of the same name.
    pub fn merge(&mut self, other: &StyleRegistry) {
        for (name, style) in &other.styles {
            self.styles.insert(name.clone(), style.clone());
        }
    }
}

impl StyleLookup for StyleRegistry {
    fn tag_style(&self, name: &str) -> Option<&StyleAttributes> {
        self.styles.get(name)
    }
}

/// Check that `name` can be registered as a tag.
///
/// # Errors
///
/// [`TagstyleError::InvalidArgument`] for `cs` and for names the tag
/// grammar or the markup reader cannot match, such as `404`.
pub fn validate_name(name: &str) -> Result<()> {
    if name == INLINE_TAG {
        return Err(TagstyleError::invalid(format!(
            "\"{INLINE_TAG}\" is reserved for inline styles"
        )));
    }
    if !TAG_NAME_RE.is_match(name) {
        return Err(TagstyleError::invalid(format!(
            "invalid tag name \"{name}\": expected a letter followed by letters and digits"
        )));
    }
    Ok(())
}
