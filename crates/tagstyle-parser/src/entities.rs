//! Special character encoding and entity decoding.
//!
//! Literal text is encoded before it is handed to the XML reader, and
//! the reader decodes it again. Only the XML predefined entities and
//! numeric character references are understood.

/// Entity for a character that must not appear raw in markup text.
///
/// # Example
///
/// ```
/// use tagstyle_parser::entities::encode_char;
/// assert_eq!(encode_char('<'), Some("&lt;"));
/// assert_eq!(encode_char('a'), None);
/// ```
pub fn encode_char(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#039;"),
        _ => None,
    }
}

/// Encode `& < > " '` as entities.
///
/// # Example
///
/// ```
/// use tagstyle_parser::entities::encode_special_chars;
/// assert_eq!(encode_special_chars("a < b & c"), "a &lt; b &amp; c");
/// ```
pub fn encode_special_chars(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match encode_char(c) {
            Some(entity) => out.push_str(entity),
            None => out.push(c),
        }
    }
    out
}

/// Decode one entity body (the part between `&` and `;`).
///
/// # Example
///
/// ```
/// use tagstyle_parser::entities::decode_entity;
/// assert_eq!(decode_entity("amp"), Some('&'));
/// assert_eq!(decode_entity("#039"), Some('\''));
/// assert_eq!(decode_entity("#x41"), Some('A'));
/// assert_eq!(decode_entity("copy"), None);
/// ```
pub fn decode_entity(body: &str) -> Option<char> {
    match body {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let num = body.strip_prefix('#')?;
            let codepoint = if let Some(hex) = num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                num.parse::<u32>().ok()?
            };
            char::from_u32(codepoint).filter(|c| is_xml_char(*c))
        }
    }
}

/// Whether `c` may appear in an XML document.
pub fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
        || (c >= '\u{20}' && c != '\u{FFFE}' && c != '\u{FFFF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_all_special() {
        assert_eq!(
            encode_special_chars(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#039;&amp;&#039;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_encode_keeps_multibyte() {
        assert_eq!(encode_special_chars("héllo → <ü>"), "héllo → &lt;ü&gt;");
    }

    #[test]
    fn test_decode_numeric() {
        assert_eq!(decode_entity("#169"), Some('©'));
        assert_eq!(decode_entity("#x00A9"), Some('©'));
        assert_eq!(decode_entity("#x1b"), None);
        assert_eq!(decode_entity("#"), None);
        assert_eq!(decode_entity("#xZZ"), None);
    }

    #[test]
    fn test_xml_chars() {
        assert!(is_xml_char('a'));
        assert!(is_xml_char('\n'));
        assert!(!is_xml_char('\x1b'));
        assert!(!is_xml_char('\u{0}'));
    }
}
