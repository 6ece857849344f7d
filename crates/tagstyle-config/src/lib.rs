//! Tagstyle Config
//!
//! This crate holds the tag style registry and handles configuration
//! loading for tagstyle, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/tagstyle/config.toml`
//! - macOS: `~/Library/Application Support/tagstyle/config.toml`
//! - Windows: `%APPDATA%\tagstyle\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use tagstyle_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! let styles = config.style_registry().unwrap();
//! ```

mod output;
mod registry;

pub use output::{OutputConfig, DEFAULT_FORMATTER};
pub use registry::{validate_name, StyleRegistry};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tagstyle_core::{Result, StyleAttributes, TagstyleError, Width};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[output]
Formatter = "ansi"

[tags.warning]
color            = "white"
background-color = "yellow"

[tags.error]
color            = "white"
background-color = "red"

[tags.success]
color            = "white"
background-color = "green"

[tags.info]
color            = "white"
background-color = "blue"
"#;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Tag styles, added to the built-in ones
    #[serde(default)]
    pub tags: BTreeMap<String, StyleAttributes>,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use tagstyle_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[output]"));
    /// assert!(toml.contains("[tags.warning]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "tagstyle")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| TagstyleError::Config(format!("Parse error in {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location. A file there
    ///    that cannot be read or parsed is logged and replaced by the
    ///    defaults.
    /// 2. If `override_config` is provided:
    ///    - If it's a path to an existing file, load and merge it
    ///    - Otherwise, treat it as a TOML string and parse it
    ///
    /// # Errors
    ///
    /// [`TagstyleError::Config`] or [`TagstyleError::Io`] when the
    /// override cannot be read or parsed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tagstyle_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[output]\nWidth = 60")).unwrap();
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load().unwrap_or_else(|e| {
            warn!("Ignoring config file: {}", e);
            Self::default()
        });

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);
            let overrides = if override_path.exists() {
                debug!("merging config from file {}", override_path.display());
                Self::load_from(override_path)?
            } else {
                debug!("merging inline config");
                Self::from_toml(override_str)?
            };
            config.merge(&overrides);
        }

        Ok(config)
    }

    /// Parse and validate a TOML string.
    ///
    /// # Example
    ///
    /// ```
    /// use tagstyle_config::Config;
    /// let config = Config::from_toml("[output]\nWidth = 60").unwrap();
    /// assert_eq!(config.output.width, Some(60));
    /// assert!(Config::from_toml("[tags.cs]").is_err());
    /// ```
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| TagstyleError::Config(format!("Parse error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Merge another config into this one.
    ///
    /// Values set in `other` take precedence; tag styles of `other`
    /// replace those of the same name.
    ///
    /// # Example
    ///
    /// ```
    /// use tagstyle_config::Config;
    ///
    /// let mut base = Config::default();
    /// let override_config: Config = toml::from_str(r#"
    ///     [output]
    ///     Formatter = "plain"
    ///     [tags.note]
    ///     underline = true
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert_eq!(base.output.formatter(), "plain");
    /// assert!(base.tags["note"].underline);
    /// assert!(base.tags.contains_key("warning"));
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.output.merge(&other.output);
        for (name, style) in &other.tags {
            self.tags.insert(name.clone(), style.clone());
        }
    }

    /// Check the width and every tag name.
    pub fn validate(&self) -> Result<()> {
        self.output.width()?;
        for name in self.tags.keys() {
            validate_name(name).map_err(|e| TagstyleError::Config(format!("[tags.{name}] {e}")))?;
        }
        Ok(())
    }

    /// Configured width.
    pub fn width(&self) -> Result<Width> {
        self.output.width()
    }

    /// Built-in tag styles plus the configured ones.
    pub fn style_registry(&self) -> Result<StyleRegistry> {
        let mut registry = StyleRegistry::with_defaults();
        for (name, style) in &self.tags {
            registry
                .set_tag_style(name, style.clone())
                .map_err(|e| TagstyleError::Config(format!("[tags.{name}] {e}")))?;
        }
        Ok(registry)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| TagstyleError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}
