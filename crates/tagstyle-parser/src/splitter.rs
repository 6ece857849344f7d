//! Tag-aware line splitting.
//!
//! The splitter rewrites markup so that every piece of text is wrapped
//! in the tags open at that point. When a width is given, text is cut
//! into lines of at most that many code points, and the open tags are
//! closed before each line break and re-opened after it:
//!
//! ```text
//! my <cs color="red">message</cs>          (width 6)
//! my <cs color="red">mes</cs>
//! <cs color="red">sage</cs>
//! ```

use log::trace;
use regex::Regex;
use std::sync::LazyLock;
use tagstyle_core::{StyleLookup, Width, INLINE_TAG};

use crate::entities::encode_char;

/// Regex for markup tags. Group 1 is the tag name, group 2 the raw
/// attribute string. A leading backslash marks an escaped tag.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\\?</?\s*([a-z0-9]+)\s*([^<>]*?)\s*>").unwrap()
});

/// A structural tag that is open at the current scan position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTag {
    /// Tag name
    pub name: String,
    /// Attribute string exactly as written, replayed when the tag is
    /// re-opened after a line break
    pub attributes: String,
}

impl OpenTag {
    pub fn new(name: impl Into<String>, attributes: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: attributes.into(),
        }
    }

    fn write_open(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        if !self.attributes.is_empty() {
            out.push(' ');
            out.push_str(&self.attributes);
        }
        out.push('>');
    }

    fn write_close(&self, out: &mut String) {
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

/// Options for [`TagSplitter::split_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOptions {
    /// Target line width
    pub width: Width,
    /// Encode `& < > " '` in literal text as entities
    pub encode_special_chars: bool,
    /// Re-escape `<` in literal text as `\<` so the output can be
    /// split again without the text being read as tags
    pub preserve_escaped_tags: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            width: Width::Unbounded,
            encode_special_chars: true,
            preserve_escaped_tags: false,
        }
    }
}

impl SplitOptions {
    /// Default options with the given width.
    pub fn with_width(width: Option<isize>) -> Self {
        Self {
            width: Width::lenient(width),
            ..Self::default()
        }
    }
}

/// Column position on the line being written. Lives for one split.
#[derive(Debug, Default)]
struct LineCursor {
    column: usize,
}

impl LineCursor {
    fn newline(&mut self, out: &mut String) {
        out.push('\n');
        self.column = 0;
    }
}

/// A line segment cut into cells. A cell is one code point of the
/// original text, or the entity that encodes it, so that an entity is
/// never split across lines.
struct Cells {
    text: String,
    bounds: Vec<usize>,
}

impl Cells {
    fn new(segment: &str, encode: bool) -> Self {
        let mut text = String::with_capacity(segment.len());
        let mut bounds = Vec::with_capacity(segment.len() + 1);
        for c in segment.chars() {
            bounds.push(text.len());
            match encode.then(|| encode_char(c)).flatten() {
                Some(entity) => text.push_str(entity),
                None => text.push(c),
            }
        }
        bounds.push(text.len());
        Self { text, bounds }
    }

    fn len(&self) -> usize {
        self.bounds.len() - 1
    }

    fn slice(&self, from: usize, to: usize) -> &str {
        &self.text[self.bounds[from]..self.bounds[to]]
    }

    fn as_str(&self) -> &str {
        &self.text
    }
}

/// Splits markup into lines, keeping tags balanced on every line.
///
/// A tag is structural when it is not escaped and either is `cs` or
/// has a style in the lookup. Closing tags are structural only when
/// they close the innermost open tag. Everything else is literal text.
///
/// # Example
///
/// ```
/// use tagstyle_core::NoStyles;
/// use tagstyle_parser::TagSplitter;
///
/// let splitter = TagSplitter::new(&NoStyles);
/// let split = splitter.split(r#"my <cs color="red" style="bold">message</cs>"#, Some(6));
/// assert_eq!(
///     split,
///     "my <cs color=\"red\" style=\"bold\">mes</cs>\n<cs color=\"red\" style=\"bold\">sage</cs>"
/// );
/// ```
#[derive(Debug)]
pub struct TagSplitter<'a, S: StyleLookup + ?Sized> {
    styles: &'a S,
}

impl<'a, S: StyleLookup + ?Sized> TagSplitter<'a, S> {
    /// Create a splitter that consults `styles` for registered tags.
    pub fn new(styles: &'a S) -> Self {
        Self { styles }
    }

    /// Split with special characters encoded and escaped tags resolved.
    ///
    /// `None` or a negative width disables wrapping, `0` wraps each text
    /// segment with its open tags without adding line breaks.
    pub fn split(&self, content: &str, width: Option<isize>) -> String {
        self.split_with(content, SplitOptions::with_width(width))
    }

    /// Split with explicit options.
    pub fn split_with(&self, content: &str, options: SplitOptions) -> String {
        let mut open_tags: Vec<OpenTag> = Vec::new();
        let mut cursor = LineCursor::default();
        let mut splitted = String::with_capacity(content.len());
        let mut text_start = 0;

        for caps in TAG_RE.captures_iter(content) {
            let Some(tag) = caps.get(0) else { continue };
            let tag_text = tag.as_str();
            let name = caps.get(1).map_or("", |m| m.as_str());
            let closing = tag_text.as_bytes().get(1) == Some(&b'/');

            if !self.is_structural(tag_text, name, closing, &open_tags) {
                continue;
            }

            let text_before = &content[text_start..tag.start()];
            splitted.push_str(&split_text(text_before, &mut cursor, &open_tags, &options));
            text_start = tag.end();

            if closing {
                open_tags.pop();
            } else {
                let attributes = caps.get(2).map_or("", |m| m.as_str());
                open_tags.push(OpenTag::new(name, attributes));
            }
        }

        let text_after = &content[text_start..];
        splitted.push_str(&split_text(text_after, &mut cursor, &open_tags, &options));

        trace!(
            "split {} bytes into {} bytes ({:?})",
            content.len(),
            splitted.len(),
            options.width
        );
        splitted
    }

    fn is_structural(&self, tag: &str, name: &str, closing: bool, open_tags: &[OpenTag]) -> bool {
        if tag.starts_with('\\') {
            return false;
        }
        if closing {
            return open_tags.last().is_some_and(|top| top.name == name);
        }
        name == INLINE_TAG || self.styles.has_tag_style(name)
    }
}

/// Wrap one run of literal text, advancing the cursor.
fn split_text(text: &str, cursor: &mut LineCursor, open_tags: &[OpenTag], options: &SplitOptions) -> String {
    let text = text.replace("\\<", "<");
    let encode = options.encode_special_chars;
    let escape = options.preserve_escaped_tags;

    let limit = match options.width {
        Width::Unbounded => {
            let cells = Cells::new(&text, encode);
            return wrap_text_with_tags(cells.as_str(), open_tags, escape);
        }
        Width::Segments if text.is_empty() => {
            return wrap_text_with_tags("", open_tags, escape);
        }
        Width::Segments => None,
        Width::Columns(n) => Some(n),
    };
    if text.is_empty() || text == "\n" {
        return text;
    }

    let mut splitted = String::new();
    let mut rest = text.as_str();

    // A single leading newline is written now. For a longer run the
    // segment pass below writes every newline of it.
    if let Some(stripped) = rest.strip_prefix('\n') {
        if !stripped.starts_with('\n') {
            cursor.newline(&mut splitted);
        }
        rest = stripped;
    }

    for (index, segment) in rest.split('\n').enumerate() {
        if segment.is_empty() {
            cursor.newline(&mut splitted);
            continue;
        }
        if index > 0 {
            cursor.newline(&mut splitted);
        }

        let cells = Cells::new(segment, encode);
        let Some(width) = limit else {
            splitted.push_str(&wrap_text_with_tags(cells.as_str(), open_tags, escape));
            continue;
        };

        // Fill up the current line first
        let mut start = 0;
        if cursor.column > 0 && cursor.column < width {
            let take = (width - cursor.column).min(cells.len());
            splitted.push_str(&wrap_text_with_tags(cells.slice(0, take), open_tags, escape));
            cursor.column += take;
            start = take;
            if start == cells.len() {
                continue;
            }
        }

        if cursor.column == width {
            cursor.newline(&mut splitted);
        }

        let line_count = (cells.len() - start).div_ceil(width);
        for line in 0..line_count {
            if line > 0 {
                cursor.newline(&mut splitted);
            }
            let from = start + line * width;
            let to = (from + width).min(cells.len());
            splitted.push_str(&wrap_text_with_tags(cells.slice(from, to), open_tags, escape));
            cursor.column = to - from;
        }
    }
    splitted
}

/// Surround `text` with the open tags, outermost first, and close them
/// innermost first.
///
/// # Example
///
/// ```
/// use tagstyle_parser::splitter::{wrap_text_with_tags, OpenTag};
///
/// let tags = [OpenTag::new("cs", "color=\"red\""), OpenTag::new("info", "")];
/// assert_eq!(
///     wrap_text_with_tags("hi", &tags, false),
///     "<cs color=\"red\"><info>hi</info></cs>"
/// );
/// ```
pub fn wrap_text_with_tags(text: &str, open_tags: &[OpenTag], escape_text_tags: bool) -> String {
    let mut tagged = String::with_capacity(text.len() + open_tags.len() * 16);
    for tag in open_tags {
        tag.write_open(&mut tagged);
    }
    if escape_text_tags {
        tagged.push_str(&text.replace('<', "\\<"));
    } else {
        tagged.push_str(text);
    }
    for tag in open_tags.iter().rev() {
        tag.write_close(&mut tagged);
    }
    tagged
}
