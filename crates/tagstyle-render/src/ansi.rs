//! ANSI terminal formatter.

use tagstyle_ansi::codes::{sgr, BLINK, BOLD, RESET, REVERSE, UNDERLINE};
use tagstyle_ansi::color::{resolve, Layer};
use tagstyle_ansi::utils::strip_sgr;
use tagstyle_core::{Content, Result, StyleAttributes, StyleLookup, StyledTextNode, TagstyleError};
use tagstyle_parser::MarkupParser;

use crate::Formatter;

/// Renders styled text with SGR escape sequences.
///
/// Each styled node opens with its own sequence and closes with a
/// reset. After a nested node the parent's sequence is written again,
/// so the parent's style carries on after the child.
///
/// # Example
///
/// ```
/// use tagstyle_core::NoStyles;
/// use tagstyle_render::{AnsiFormatter, Formatter};
///
/// let out = AnsiFormatter.format(r#"<cs color="red" bold="true">hi</cs>"#, None, &NoStyles).unwrap();
/// assert_eq!(out, "\x1b[31;1mhi\x1b[0m");
/// assert_eq!(AnsiFormatter.unformat(&out), "hi");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiFormatter;

impl AnsiFormatter {
    /// Render a parsed tree.
    pub fn render(&self, node: &StyledTextNode) -> Result<String> {
        let mut out = String::new();
        render_node(node, None, &mut out)?;
        Ok(out)
    }
}

impl Formatter for AnsiFormatter {
    fn name(&self) -> &str {
        "ansi"
    }

    fn format(&self, text: &str, width: Option<isize>, styles: &dyn StyleLookup) -> Result<String> {
        let tree = MarkupParser::new(styles).parse(text, width)?;
        self.render(&tree)
    }

    fn unformat(&self, text: &str) -> String {
        strip_sgr(text)
    }
}

fn render_node(node: &StyledTextNode, parent_code: Option<&str>, out: &mut String) -> Result<()> {
    let code = style_code(node.style())?;
    if let Some(code) = &code {
        out.push_str(code);
    }
    for item in node.content() {
        match item {
            Content::Text(text) => out.push_str(text),
            Content::Node(child) => render_node(child, code.as_deref(), out)?,
        }
    }
    if code.is_some() {
        out.push_str(RESET);
    }
    if let Some(parent) = parent_code {
        out.push_str(parent);
    }
    Ok(())
}

/// The SGR sequence of a style, or `None` for a plain style.
///
/// # Errors
///
/// [`TagstyleError::InvalidArgument`] when a color cannot be resolved.
///
/// # Example
///
/// ```
/// use tagstyle_core::StyleAttributes;
/// use tagstyle_render::ansi::style_code;
///
/// let style = StyleAttributes::new().with_color("#ff0000").underline();
/// assert_eq!(style_code(&style).unwrap().as_deref(), Some("\x1b[38;2;255;0;0;4m"));
/// assert_eq!(style_code(&StyleAttributes::new()).unwrap(), None);
/// ```
pub fn style_code(style: &StyleAttributes) -> Result<Option<String>> {
    let mut params: Vec<String> = Vec::with_capacity(6);
    if let Some(color) = &style.color {
        params.push(color_code(color, Layer::Foreground)?);
    }
    if let Some(color) = &style.background_color {
        params.push(color_code(color, Layer::Background)?);
    }
    for (on, param) in [
        (style.bold, BOLD),
        (style.underline, UNDERLINE),
        (style.blink, BLINK),
        (style.highlight, REVERSE),
    ] {
        if on {
            params.push(param.to_string());
        }
    }
    Ok(sgr(&params))
}

fn color_code(color: &str, layer: Layer) -> Result<String> {
    resolve(color, layer).ok_or_else(|| {
        TagstyleError::invalid(format!("Undefined \"{}\" {} color", color, layer.label()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tagstyle_core::NoStyles;

    fn format(text: &str) -> Result<String> {
        AnsiFormatter.format(text, None, &NoStyles)
    }

    #[test]
    fn test_nested_styles() {
        let formatted = format(
            r#"my <cs color="red">message <cs color="blue" background-color="red" bold="true" blink="true" highlight="true" underline="true">style</cs></cs>"#,
        )
        .unwrap();
        assert_eq!(
            formatted,
            "my \x1b[31mmessage \x1b[0m\x1b[31m\x1b[34;41;1;4;5;7mstyle\x1b[0m\x1b[31m\x1b[0m\x1b[31m\x1b[0m"
        );
    }

    #[test]
    fn test_plain_text_has_no_codes() {
        assert_eq!(format("message").unwrap(), "message");
        assert_eq!(format("<cs>message</cs>").unwrap(), "message");
    }

    #[test]
    fn test_numeric_colors() {
        assert_eq!(
            format(r#"<cs color="32" background-color="44">x</cs>"#).unwrap(),
            "\x1b[32;44mx\x1b[0m"
        );
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(
            format(r##"<cs color="#ffffff" background-color="#999999">x</cs>"##).unwrap(),
            "\x1b[38;2;255;255;255;48;2;153;153;153mx\x1b[0m"
        );
    }

    #[test]
    fn test_undefined_colors_fail() {
        let err = format(r#"<cs color="undefined">x</cs>"#).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("\"undefined\" text color"));

        let err = format(r#"<cs background-color="undefined">x</cs>"#).unwrap_err();
        assert!(err.to_string().contains("background color"));

        // Foreground codes are not background codes
        assert!(format(r#"<cs background-color="31">x</cs>"#).is_err());
        assert!(format(r##"<cs color="#12345">x</cs>"##).is_err());
    }

    #[test]
    fn test_registered_tag() {
        let mut styles = HashMap::new();
        styles.insert(
            "error".to_string(),
            StyleAttributes::new().with_color("white").with_background_color("red"),
        );
        let out = AnsiFormatter.format("<error>boom</error>!", None, &styles).unwrap();
        assert_eq!(out, "\x1b[97;41mboom\x1b[0m!");
    }

    #[test]
    fn test_width_reopens_codes() {
        let out = AnsiFormatter
            .format(r#"<cs color="red">abcd</cs>"#, Some(2), &NoStyles)
            .unwrap();
        assert_eq!(out, "\x1b[31mab\x1b[0m\n\x1b[31mcd\x1b[0m");
    }

    #[test]
    fn test_unformat() {
        let formatted = format(r#"a <cs color="red" bold="true">b</cs> c"#).unwrap();
        assert_eq!(AnsiFormatter.unformat(&formatted), "a b c");
    }
}
