//! Markup to styled tree.

use log::debug;
use std::fmt::Write;
use std::str::FromStr;
use tagstyle_core::{Result, StyleAttributes, StyleLookup, StyledTextNode, TagstyleError, INLINE_TAG};

use crate::splitter::TagSplitter;
use crate::xml::{parse_document, XmlElement, XmlNode};

/// Name of the element the markup is wrapped in before reading.
const ROOT_ELEMENT: &str = "node";

/// Attribute keys understood on `cs` and registered tags, and inside
/// a `style="..."` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKey {
    Color,
    BackgroundColor,
    Bold,
    Underline,
    Blink,
    Highlight,
}

impl FromStr for StyleKey {
    type Err = TagstyleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "color" => Ok(Self::Color),
            "background-color" => Ok(Self::BackgroundColor),
            "bold" => Ok(Self::Bold),
            "underline" => Ok(Self::Underline),
            "blink" => Ok(Self::Blink),
            "highlight" => Ok(Self::Highlight),
            _ => Err(TagstyleError::invalid(format!("Undefined style \"{s}\""))),
        }
    }
}

impl StyleKey {
    /// Apply `value` to `style`. A missing value means `true` for flags.
    pub fn apply(self, style: &mut StyleAttributes, value: Option<&str>) -> Result<()> {
        match self {
            Self::Color | Self::BackgroundColor => {
                let color = value.ok_or_else(|| {
                    TagstyleError::invalid(format!("Style \"{}\" needs a value", self.as_str()))
                })?;
                if self == Self::Color {
                    style.set_color(color);
                } else {
                    style.set_background_color(color);
                }
            }
            Self::Bold => {
                style.set_bold(flag(value)?);
            }
            Self::Underline => {
                style.set_underline(flag(value)?);
            }
            Self::Blink => {
                style.set_blink(flag(value)?);
            }
            Self::Highlight => {
                style.set_highlight(flag(value)?);
            }
        }
        Ok(())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::BackgroundColor => "background-color",
            Self::Bold => "bold",
            Self::Underline => "underline",
            Self::Blink => "blink",
            Self::Highlight => "highlight",
        }
    }
}

/// Parse a boolean attribute value.
///
/// # Example
///
/// ```
/// use tagstyle_parser::markup::parse_bool;
/// assert_eq!(parse_bool("TRUE").unwrap(), true);
/// assert_eq!(parse_bool("off").unwrap(), false);
/// assert!(parse_bool("maybe").is_err());
/// ```
pub fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(TagstyleError::invalid(format!(
            "Invalid boolean \"{value}\": expected true or false"
        ))),
    }
}

fn flag(value: Option<&str>) -> Result<bool> {
    value.map_or(Ok(true), parse_bool)
}

/// Apply element attributes to a style.
///
/// Empty values are ignored. `style` holds a `;`-separated list of
/// `key:value` or bare `key` items.
pub fn apply_attributes<'v, I>(style: &mut StyleAttributes, attributes: I) -> Result<()>
where
    I: IntoIterator<Item = (&'v str, &'v str)>,
{
    for (key, value) in attributes {
        if value.is_empty() {
            continue;
        }
        if key != "style" {
            key.parse::<StyleKey>()?.apply(style, Some(value))?;
            continue;
        }
        for item in value.split(';').map(str::trim).filter(|item| !item.is_empty()) {
            let (item_key, item_value) = match item.split_once(':') {
                Some((k, v)) => (k.trim(), Some(v.trim())),
                None => (item, None),
            };
            if item_value == Some("") {
                continue;
            }
            item_key.parse::<StyleKey>()?.apply(style, item_value)?;
        }
    }
    Ok(())
}

/// Builds [`StyledTextNode`] trees from markup.
///
/// # Example
///
/// ```
/// use tagstyle_core::NoStyles;
/// use tagstyle_parser::MarkupParser;
///
/// let parser = MarkupParser::new(&NoStyles);
/// let root = parser.parse(r#"my <cs color="red" style="bold">text</cs>"#, None).unwrap();
/// let child = root.children().next().unwrap();
/// assert_eq!(child.color(), Some("red"));
/// assert!(child.is_bold());
/// assert_eq!(root.text(), "my text");
/// ```
#[derive(Debug)]
pub struct MarkupParser<'a, S: StyleLookup + ?Sized> {
    styles: &'a S,
}

impl<'a, S: StyleLookup + ?Sized> MarkupParser<'a, S> {
    pub fn new(styles: &'a S) -> Self {
        Self { styles }
    }

    /// Split `text` to `width`, then build its tree.
    pub fn parse(&self, text: &str, width: Option<isize>) -> Result<StyledTextNode> {
        let split = TagSplitter::new(self.styles).split(text, width);
        self.read(&split).map_err(|err| match err {
            TagstyleError::InvalidArgument(ref detail) if detail.starts_with(XML_PREFIX) => {
                TagstyleError::invalid(format!(
                    "Text \"{text}\" could not be parsed: text should be in XML format"
                ))
            }
            other => other,
        })
    }

    /// Build the tree of markup that is already split and encoded.
    pub fn parse_markup(&self, markup: &str) -> Result<StyledTextNode> {
        self.read(markup)
    }

    /// Text of `text` with every style tag removed.
    pub fn plain(&self, text: &str, width: Option<isize>) -> Result<String> {
        Ok(self.parse(text, width)?.text())
    }

    /// Same as [`plain`](Self::plain) with no wrapping.
    pub fn remove_style_tags(&self, text: &str) -> Result<String> {
        self.plain(text, None)
    }

    fn read(&self, markup: &str) -> Result<StyledTextNode> {
        let document = format!("<{ROOT_ELEMENT}>{markup}</{ROOT_ELEMENT}>");
        let root = parse_document(&document).map_err(|err| {
            debug!("markup rejected: {err}");
            TagstyleError::invalid(format!("{XML_PREFIX} {err}"))
        })?;
        let mut node = StyledTextNode::new();
        self.build(&root, &mut node)?;
        Ok(node)
    }

    fn build(&self, element: &XmlElement, node: &mut StyledTextNode) -> Result<()> {
        for child in &element.children {
            match child {
                XmlNode::Text(text) => {
                    node.add_content(text.as_str());
                }
                XmlNode::Element(e) if e.name == INLINE_TAG => {
                    node.add_content(self.styled(e, StyleAttributes::default())?);
                }
                XmlNode::Element(e) => match self.styles.tag_style(&e.name) {
                    Some(style) => {
                        node.add_content(self.styled(e, style.clone())?);
                    }
                    None => {
                        node.add_content(pass_through(e));
                    }
                },
            }
        }
        Ok(())
    }

    fn styled(&self, element: &XmlElement, mut style: StyleAttributes) -> Result<StyledTextNode> {
        apply_attributes(
            &mut style,
            element.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        )?;
        let mut node = StyledTextNode::with_style(style);
        self.build(element, &mut node)?;
        Ok(node)
    }
}

const XML_PREFIX: &str = "Malformed markup:";

/// An element with no style, written back as literal text. Attribute
/// values are always double-quoted, so `&` and `"` in them are escaped.
fn pass_through(element: &XmlElement) -> String {
    let mut out = format!("<{}", element.name);
    for (key, value) in &element.attributes {
        let value = value.replace('&', "&amp;").replace('"', "&quot;");
        let _ = write!(out, " {key}=\"{value}\"");
    }
    out.push('>');
    out.push_str(&element.text());
    let _ = write!(out, "</{}>", element.name);
    out
}
