//! Tagstyle Core
//!
//! This crate provides core types, traits, and error definitions
//! for the tagstyle markup engine.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`StyleAttributes`] - The six style attributes of a tag
//! - [`StyledTextNode`], [`Content`] - The styled text tree built by the parser
//! - [`StyleLookup`] - Tag name to style lookup, implemented by registries
//! - [`Width`] - Normalised line width
//! - [`TagstyleError`] - Error types

pub mod error;
pub mod node;
pub mod style;
pub mod width;

pub use error::{Result, TagstyleError};
pub use node::{Content, StyledTextNode};
pub use style::{NoStyles, StyleAttributes, StyleLookup};
pub use width::Width;

/// Tag name that carries its style inline and never needs registration.
pub const INLINE_TAG: &str = "cs";
