//! Tagstyle Parser
//!
//! Turns tag markup into styled text trees.
//!
//! # Overview
//!
//! - [`splitter`] - Tag-aware line splitting
//! - [`xml`] - The restricted XML reader split markup is read with
//! - [`markup`] - Tree construction and attribute mapping
//! - [`entities`] - Special character encoding
//!
//! # Example
//!
//! ```
//! use tagstyle_core::NoStyles;
//! use tagstyle_parser::{MarkupParser, TagSplitter};
//!
//! let split = TagSplitter::new(&NoStyles).split("<cs color=\"red\">abcdef</cs>", Some(3));
//! assert_eq!(split, "<cs color=\"red\">abc</cs>\n<cs color=\"red\">def</cs>");
//!
//! let tree = MarkupParser::new(&NoStyles).parse_markup(&split).unwrap();
//! assert_eq!(tree.text(), "abc\ndef");
//! ```

pub mod entities;
pub mod markup;
pub mod splitter;
pub mod xml;

pub use markup::{apply_attributes, parse_bool, MarkupParser, StyleKey};
pub use splitter::{wrap_text_with_tags, OpenTag, SplitOptions, TagSplitter};
pub use xml::XmlError;
