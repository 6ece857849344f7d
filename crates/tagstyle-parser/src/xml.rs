//! Restricted XML reader.
//!
//! Reads the subset of XML that split markup is made of: elements with
//! quoted attributes, character data, predefined and numeric entities.
//! Comments, processing instructions, CDATA sections and doctypes are
//! rejected, as are characters XML does not allow (ESC, NUL, ...).

use thiserror::Error;

use crate::entities::{decode_entity, is_xml_char};

/// Deepest element nesting accepted, the root included.
pub const MAX_DEPTH: usize = 256;

/// A malformed document, with the byte offset where reading stopped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} at byte {position}")]
pub struct XmlError {
    pub position: usize,
    pub message: String,
}

/// Node of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Text(String),
    Element(XmlElement),
}

/// An element with its attributes in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    /// Value of attribute `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Character data of this element and all descendants.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                XmlNode::Text(s) => out.push_str(s),
                XmlNode::Element(e) => e.collect_text(out),
            }
        }
    }
}

/// Parse a document made of exactly one root element.
///
/// # Example
///
/// ```
/// use tagstyle_parser::xml::{parse_document, XmlNode};
///
/// let root = parse_document(r#"<node>a <cs color="red">b &amp; c</cs></node>"#).unwrap();
/// assert_eq!(root.name, "node");
/// let XmlNode::Element(cs) = &root.children[1] else { panic!() };
/// assert_eq!(cs.attribute("color"), Some("red"));
/// assert_eq!(root.text(), "a b & c");
/// ```
pub fn parse_document(input: &str) -> Result<XmlElement, XmlError> {
    let mut reader = Reader {
        src: input,
        pos: 0,
        depth: 0,
    };
    reader.skip_whitespace();
    if !reader.rest().starts_with('<') {
        return Err(reader.error("expected root element"));
    }
    let root = reader.element()?;
    reader.skip_whitespace();
    if !reader.rest().is_empty() {
        return Err(reader.error("content after root element"));
    }
    Ok(root)
}

struct Reader<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Reader<'a> {
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn error(&self, message: impl Into<String>) -> XmlError {
        XmlError {
            position: self.pos,
            message: message.into(),
        }
    }

    fn expect(&mut self, c: char) -> Result<(), XmlError> {
        match self.peek() {
            Some(found) if found == c => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(found) => Err(self.error(format!("expected '{c}', found '{found}'"))),
            None => Err(self.error(format!("expected '{c}', found end of input"))),
        }
    }

    /// Skip whitespace, returning whether there was any.
    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while matches!(self.peek(), Some(' ' | '\t' | '\n' | '\r')) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn name(&mut self) -> Result<&'a str, XmlError> {
        let start = self.pos;
        match self.peek() {
            Some(c) if c.is_alphabetic() || c == '_' || c == ':' => self.pos += c.len_utf8(),
            _ => return Err(self.error("expected a name")),
        }
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || matches!(c, '_' | ':' | '.' | '-') {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        Ok(&self.src[start..self.pos])
    }

    /// Read `&...;` and return the character it stands for.
    fn entity(&mut self) -> Result<char, XmlError> {
        let start = self.pos;
        self.expect('&')?;
        let Some(len) = self.rest().find(';') else {
            self.pos = start;
            return Err(self.error("unterminated entity"));
        };
        let body = &self.rest()[..len];
        match decode_entity(body) {
            Some(c) => {
                self.pos += len + 1;
                Ok(c)
            }
            None => {
                self.pos = start;
                Err(self.error(format!("unknown entity '&{body};'")))
            }
        }
    }

    fn element(&mut self) -> Result<XmlElement, XmlError> {
        self.expect('<')?;
        if matches!(self.peek(), Some('!' | '?')) {
            return Err(self.error("comments, declarations and instructions are not supported"));
        }
        if self.depth == MAX_DEPTH {
            return Err(self.error(format!("excessive nesting depth (more than {MAX_DEPTH})")));
        }
        let mut element = XmlElement {
            name: self.name()?.to_string(),
            ..XmlElement::default()
        };

        loop {
            let spaced = self.skip_whitespace();
            match self.peek() {
                Some('>') => {
                    self.pos += 1;
                    break;
                }
                Some('/') => {
                    self.pos += 1;
                    self.expect('>')?;
                    return Ok(element);
                }
                Some(_) if spaced => {
                    let attribute = self.attribute()?;
                    if element.attribute(&attribute.0).is_some() {
                        return Err(self.error(format!("duplicate attribute '{}'", attribute.0)));
                    }
                    element.attributes.push(attribute);
                }
                Some(_) => return Err(self.error("expected whitespace before attribute")),
                None => return Err(self.error("unterminated start tag")),
            }
        }

        self.depth += 1;
        self.content(&mut element)?;
        self.depth -= 1;
        Ok(element)
    }

    fn attribute(&mut self) -> Result<(String, String), XmlError> {
        let name = self.name()?.to_string();
        self.skip_whitespace();
        self.expect('=')?;
        self.skip_whitespace();
        let quote = match self.peek() {
            Some(q @ ('"' | '\'')) => q,
            _ => return Err(self.error(format!("value of '{name}' must be quoted"))),
        };
        self.pos += 1;

        let mut value = String::new();
        loop {
            match self.peek() {
                Some(c) if c == quote => {
                    self.pos += 1;
                    return Ok((name, value));
                }
                Some('<') => return Err(self.error("'<' in attribute value")),
                Some('&') => value.push(self.entity()?),
                Some('\t' | '\n' | '\r') => {
                    self.pos += 1;
                    value.push(' ');
                }
                Some(c) if is_xml_char(c) => {
                    self.pos += c.len_utf8();
                    value.push(c);
                }
                Some(_) => return Err(self.error("invalid character")),
                None => return Err(self.error("unterminated attribute value")),
            }
        }
    }

    fn content(&mut self, element: &mut XmlElement) -> Result<(), XmlError> {
        let mut text = String::new();
        loop {
            let rest = self.rest();
            if rest.starts_with("</") {
                flush_text(&mut text, element);
                self.pos += 2;
                let name = self.name()?;
                if name != element.name {
                    return Err(self.error(format!(
                        "closing tag '{name}' does not match '{}'",
                        element.name
                    )));
                }
                self.skip_whitespace();
                return self.expect('>');
            }
            match self.peek() {
                Some('<') => {
                    flush_text(&mut text, element);
                    let child = self.element()?;
                    element.children.push(XmlNode::Element(child));
                }
                Some('&') => text.push(self.entity()?),
                Some('\r') => {
                    self.pos += 1;
                    if self.peek() == Some('\n') {
                        self.pos += 1;
                    }
                    text.push('\n');
                }
                Some(c) if is_xml_char(c) => {
                    self.pos += c.len_utf8();
                    text.push(c);
                }
                Some(_) => return Err(self.error("invalid character")),
                None => {
                    return Err(self.error(format!("unclosed element '{}'", element.name)));
                }
            }
        }
    }
}

fn flush_text(text: &mut String, element: &mut XmlElement) {
    if !text.is_empty() {
        element.children.push(XmlNode::Text(std::mem::take(text)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(node: &XmlNode) -> &XmlElement {
        match node {
            XmlNode::Element(e) => e,
            XmlNode::Text(t) => panic!("expected element, got text {t:?}"),
        }
    }

    #[test]
    fn test_nested_elements() {
        let root = parse_document("<node>my <cs a='1'>x<b/>y</cs>z</node>").unwrap();
        assert_eq!(root.children.len(), 3);
        let cs = element(&root.children[1]);
        assert_eq!(cs.name, "cs");
        assert_eq!(cs.attribute("a"), Some("1"));
        assert_eq!(cs.children.len(), 3);
        assert!(element(&cs.children[1]).children.is_empty());
        assert_eq!(root.text(), "my xyz");
    }

    #[test]
    fn test_entities_join_text() {
        let root = parse_document("<n>a &lt;b&gt; &#039;c&#x27; &quot;</n>").unwrap();
        assert_eq!(root.children, vec![XmlNode::Text("a <b> 'c' \"".into())]);
    }

    #[test]
    fn test_attribute_whitespace_is_normalised() {
        let root = parse_document("<n a = \"x\ty\nz\" b='&amp;'/>").unwrap();
        assert_eq!(root.attribute("a"), Some("x y z"));
        assert_eq!(root.attribute("b"), Some("&"));
    }

    #[test]
    fn test_crlf_in_text() {
        let root = parse_document("<n>a\r\nb\rc</n>").unwrap();
        assert_eq!(root.text(), "a\nb\nc");
    }

    #[test]
    fn test_rejects_malformed() {
        let cases = [
            "<n>a & b</n>",
            "<n>&copy;</n>",
            "<n><a></b></n>",
            "<n><a></n>",
            "<n a=1></n>",
            "<n a='1'b='2'></n>",
            "<n a='1' a='2'></n>",
            "<n><!-- c --></n>",
            "<n><?pi?></n>",
            "<n>\x1b[31m</n>",
            "<n></n>trailing",
            "<n>",
            "<1></1>",
            "text",
        ];
        for case in cases {
            assert!(parse_document(case).is_err(), "accepted {case:?}");
        }
    }

    fn nested(depth: usize) -> String {
        format!("{}x{}", "<cs>".repeat(depth), "</cs>".repeat(depth))
    }

    #[test]
    fn test_nesting_limit() {
        assert!(parse_document(&nested(MAX_DEPTH)).is_ok());

        let err = parse_document(&nested(MAX_DEPTH + 1)).unwrap_err();
        assert!(err.message.contains("excessive nesting depth"));
        assert_eq!(err.position, MAX_DEPTH * 4 + 1);

        assert!(parse_document(&nested(5000)).is_err());
    }

    #[test]
    fn test_error_position() {
        let err = parse_document("<n>ab&</n>").unwrap_err();
        assert_eq!(err.position, 5);
    }
}
