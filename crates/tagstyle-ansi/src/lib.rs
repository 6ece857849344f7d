//! Tagstyle ANSI
//!
//! This crate provides the ANSI escape code tables used by the
//! terminal formatter.
//!
//! # Overview
//!
//! - [`codes`] - SGR parameter constants and sequence builders
//! - [`color`] - Named palettes, numeric codes and hex colors
//! - [`utils`] - Escape stripping
//!
//! # Example
//!
//! ```
//! use tagstyle_ansi::{codes, color, utils};
//!
//! let red = color::resolve("red", color::Layer::Foreground).unwrap();
//! let text = format!("{}red{}", codes::sgr(&[red, codes::BOLD.to_string()]).unwrap(), codes::RESET);
//! assert_eq!(utils::strip_sgr(&text), "red");
//! ```

pub mod codes;
pub mod color;
pub mod utils;

pub use codes::{sgr, RESET};
pub use color::{hex2rgb, resolve, Layer};
pub use utils::strip_sgr;
