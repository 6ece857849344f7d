//! Output configuration.
//!
//! This module contains the `OutputConfig` struct, the `[output]`
//! section of the configuration file.

use serde::{Deserialize, Serialize};
use tagstyle_core::{Result, TagstyleError, Width};

/// Formatter used when neither the configuration nor the command line
/// names one.
pub const DEFAULT_FORMATTER: &str = "ansi";

/// Output settings.
///
/// Both fields are optional so that a partial override file only
/// changes the values it sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputConfig {
    /// Formatter name, as registered in the formatter registry.
    /// Default: "ansi"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,

    /// Line width. `0` wraps segments without breaking lines.
    /// Default: unbounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<isize>,
}

impl OutputConfig {
    /// Merge another OutputConfig into this one.
    ///
    /// Only fields set in `other` are copied.
    pub fn merge(&mut self, other: &OutputConfig) {
        if other.formatter.is_some() {
            self.formatter.clone_from(&other.formatter);
        }
        if other.width.is_some() {
            self.width = other.width;
        }
    }

    /// Formatter name, falling back to [`DEFAULT_FORMATTER`].
    pub fn formatter(&self) -> &str {
        self.formatter.as_deref().unwrap_or(DEFAULT_FORMATTER)
    }

    /// Configured width.
    ///
    /// # Errors
    ///
    /// [`TagstyleError::Config`] for a negative width.
    pub fn width(&self) -> Result<Width> {
        Width::strict(self.width).map_err(|e| match e {
            TagstyleError::InvalidArgument(msg) => TagstyleError::Config(format!("[output] {msg}")),
            other => other,
        })
    }
}
