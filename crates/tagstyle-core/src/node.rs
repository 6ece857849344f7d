//! Styled text tree.

use crate::style::StyleAttributes;

/// One item of a node's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Literal text
    Text(String),
    /// Nested styled node
    Node(StyledTextNode),
}

impl Content {
    /// The literal string, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(s) => Some(s),
            Content::Node(_) => None,
        }
    }

    /// The child node, if this is one.
    pub fn as_node(&self) -> Option<&StyledTextNode> {
        match self {
            Content::Node(n) => Some(n),
            Content::Text(_) => None,
        }
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::Text(s)
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Text(s.to_string())
    }
}

impl From<StyledTextNode> for Content {
    fn from(node: StyledTextNode) -> Self {
        Content::Node(node)
    }
}

/// A node of styled text: ordered content plus the style it owns.
///
/// The parser creates one root node and one node per recognised tag.
///
/// # Example
///
/// ```
/// use tagstyle_core::{StyleAttributes, StyledTextNode};
///
/// let mut root = StyledTextNode::from_text("my ");
/// let mut child = StyledTextNode::from_text("text");
/// child.set_color("red");
/// root.add_content(child);
/// assert_eq!(root.text(), "my text");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledTextNode {
    content: Vec<Content>,
    style: StyleAttributes,
}

impl StyledTextNode {
    /// Create an empty, unstyled node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unstyled node holding a single string.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text(text.into())],
            style: StyleAttributes::default(),
        }
    }

    /// Create an empty node with the given style.
    pub fn with_style(style: StyleAttributes) -> Self {
        Self {
            content: Vec::new(),
            style,
        }
    }

    /// Append text or a child node.
    pub fn add_content(&mut self, item: impl Into<Content>) -> &mut Self {
        self.content.push(item.into());
        self
    }

    /// Replace the whole content.
    pub fn set_content<I, C>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Content>,
    {
        self.content = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn content(&self) -> &[Content] {
        &self.content
    }

    /// Child nodes, skipping text.
    pub fn children(&self) -> impl Iterator<Item = &StyledTextNode> {
        self.content.iter().filter_map(Content::as_node)
    }

    /// Flattened text: every leaf string, depth first, in order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for item in &self.content {
            match item {
                Content::Text(s) => out.push_str(s),
                Content::Node(n) => n.collect_text(out),
            }
        }
    }

    pub fn style(&self) -> &StyleAttributes {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut StyleAttributes {
        &mut self.style
    }

    pub fn set_style(&mut self, style: StyleAttributes) -> &mut Self {
        self.style = style;
        self
    }

    pub fn color(&self) -> Option<&str> {
        self.style.color.as_deref()
    }

    pub fn set_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.style.set_color(color);
        self
    }

    pub fn background_color(&self) -> Option<&str> {
        self.style.background_color.as_deref()
    }

    pub fn set_background_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.style.set_background_color(color);
        self
    }

    pub fn is_bold(&self) -> bool {
        self.style.bold
    }

    pub fn set_bold(&mut self, on: bool) -> &mut Self {
        self.style.set_bold(on);
        self
    }

    pub fn is_underlined(&self) -> bool {
        self.style.underline
    }

    pub fn set_underline(&mut self, on: bool) -> &mut Self {
        self.style.set_underline(on);
        self
    }

    pub fn is_blinking(&self) -> bool {
        self.style.blink
    }

    pub fn set_blink(&mut self, on: bool) -> &mut Self {
        self.style.set_blink(on);
        self
    }

    pub fn is_highlighted(&self) -> bool {
        self.style.highlight
    }

    pub fn set_highlight(&mut self, on: bool) -> &mut Self {
        self.style.set_highlight(on);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_content() {
        let mut node = StyledTextNode::from_text("message 1");
        let child = StyledTextNode::from_text("message 2");
        node.add_content(child.clone());
        assert_eq!(
            node.content(),
            &[Content::Text("message 1".into()), Content::Node(child)]
        );
    }

    #[test]
    fn test_set_content() {
        let mut node = StyledTextNode::from_text("old");
        node.set_content(["a", "b"]);
        assert_eq!(node.content().len(), 2);
        assert_eq!(node.text(), "ab");
    }

    #[test]
    fn test_text_is_depth_first() {
        let mut inner = StyledTextNode::from_text("b");
        inner.add_content("c");
        let mut outer = StyledTextNode::from_text("a");
        outer.add_content(inner).add_content("d");
        assert_eq!(outer.text(), "abcd");
        assert_eq!(outer.children().count(), 1);
    }

    #[test]
    fn test_style_delegation() {
        let mut node = StyledTextNode::from_text("message");
        node.set_color("red")
            .set_background_color("blue")
            .set_highlight(true)
            .set_blink(true)
            .set_underline(true)
            .set_bold(true);

        assert_eq!(node.color(), Some("red"));
        assert_eq!(node.background_color(), Some("blue"));
        assert!(node.is_highlighted());
        assert!(node.is_blinking());
        assert!(node.is_underlined());
        assert!(node.is_bold());
    }

    #[test]
    fn test_styles_are_not_shared() {
        let base = StyleAttributes::new().with_color("red");
        let mut a = StyledTextNode::with_style(base.clone());
        let b = StyledTextNode::with_style(base);
        a.set_color("blue");
        assert_eq!(a.color(), Some("blue"));
        assert_eq!(b.color(), Some("red"));
    }
}
