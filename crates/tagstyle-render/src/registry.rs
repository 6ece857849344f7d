//! Formatter registry.

use log::debug;
use std::collections::BTreeMap;
use std::sync::Arc;
use tagstyle_core::{Result, TagstyleError};

use crate::{AnsiFormatter, Formatter, PlainFormatter, RawFormatter};

/// Registry of formatters by name.
///
/// A formatter is registered under one name and may be reached through
/// any number of aliases. Registering the same formatter (by
/// [`Formatter::name`]) under a second name is a logic error; use an
/// alias instead.
#[derive(Default, Clone)]
pub struct FormatterRegistry {
    formatters: BTreeMap<String, Arc<dyn Formatter>>,
    aliases: BTreeMap<String, String>,
}

impl std::fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatterRegistry")
            .field("formatters", &self.formatters.keys().collect::<Vec<_>>())
            .field("aliases", &self.aliases)
            .finish()
    }
}

impl FormatterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `ansi` (alias `cli`), `plain` (alias `text`) and `raw`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        let builtins: [(Arc<dyn Formatter>, Option<&str>); 3] = [
            (Arc::new(AnsiFormatter), Some("cli")),
            (Arc::new(PlainFormatter), Some("text")),
            (Arc::new(RawFormatter), None),
        ];
        for (formatter, alias) in builtins {
            let name = formatter.name().to_string();
            registry.formatters.insert(name.clone(), formatter);
            if let Some(alias) = alias {
                registry.aliases.insert(alias.to_string(), name);
            }
        }
        registry
    }

    /// Register `formatter` under `name`, replacing what was there.
    ///
    /// # Errors
    ///
    /// [`TagstyleError::Logic`] when a formatter with the same
    /// [`Formatter::name`] is already registered under another name.
    pub fn register(&mut self, name: &str, formatter: Arc<dyn Formatter>) -> Result<()> {
        if let Some((existing, _)) = self
            .formatters
            .iter()
            .find(|(key, f)| key.as_str() != name && f.name() == formatter.name())
        {
            return Err(TagstyleError::Logic(format!(
                "Formatter \"{}\" is already registered as \"{}\"",
                formatter.name(),
                existing
            )));
        }
        debug!("registering formatter '{}' as '{}'", formatter.name(), name);
        self.aliases.remove(name);
        self.formatters.insert(name.to_string(), formatter);
        Ok(())
    }

    /// Make `alias` resolve to the formatter registered as `target`.
    ///
    /// # Errors
    ///
    /// [`TagstyleError::InvalidArgument`] when `target` is not registered,
    /// [`TagstyleError::Logic`] when `alias` is itself a registered name.
    pub fn alias(&mut self, alias: &str, target: &str) -> Result<()> {
        if !self.formatters.contains_key(target) {
            return Err(unknown(target));
        }
        if self.formatters.contains_key(alias) {
            return Err(TagstyleError::Logic(format!(
                "\"{alias}\" is a formatter name, not an alias"
            )));
        }
        self.aliases.insert(alias.to_string(), target.to_string());
        Ok(())
    }

    /// Formatter registered as `name` or aliased to it.
    ///
    /// # Errors
    ///
    /// [`TagstyleError::InvalidArgument`] for an unknown name.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Formatter>> {
        let key = self.aliases.get(name).map_or(name, String::as_str);
        self.formatters.get(key).cloned().ok_or_else(|| unknown(name))
    }

    /// Remove a formatter with its aliases, or a single alias.
    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn Formatter>> {
        if self.aliases.remove(name).is_some() {
            return None;
        }
        let removed = self.formatters.remove(name)?;
        self.aliases.retain(|_, target| target != name);
        Some(removed)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.formatters.contains_key(name) || self.aliases.contains_key(name)
    }

    /// Registered names, sorted; aliases are not listed.
    pub fn names(&self) -> Vec<&str> {
        self.formatters.keys().map(String::as_str).collect()
    }

    /// `(alias, target)` pairs, sorted by alias.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, t)| (a.as_str(), t.as_str()))
    }
}

fn unknown(name: &str) -> TagstyleError {
    TagstyleError::invalid(format!("Unknown formatter \"{name}\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagstyle_core::StyleLookup;

    struct Shout;

    impl Formatter for Shout {
        fn name(&self) -> &str {
            "shout"
        }

        fn format(&self, text: &str, _width: Option<isize>, _styles: &dyn StyleLookup) -> Result<String> {
            Ok(text.to_uppercase())
        }

        fn unformat(&self, text: &str) -> String {
            text.to_lowercase()
        }
    }

    #[test]
    fn test_builtins() {
        let registry = FormatterRegistry::with_builtins();
        assert_eq!(registry.names(), vec!["ansi", "plain", "raw"]);
        assert_eq!(registry.resolve("cli").unwrap().name(), "ansi");
        assert_eq!(registry.resolve("text").unwrap().name(), "plain");
        assert_eq!(registry.resolve("raw").unwrap().name(), "raw");
    }

    #[test]
    fn test_register_and_remove() {
        let mut registry = FormatterRegistry::new();
        registry.register("formatter", Arc::new(Shout)).unwrap();
        assert_eq!(registry.resolve("formatter").unwrap().name(), "shout");
        assert!(registry.remove("formatter").is_some());
        assert!(!registry.contains("formatter"));
    }

    #[test]
    fn test_same_formatter_under_two_names_fails() {
        let mut registry = FormatterRegistry::with_builtins();
        registry.register("loud", Arc::new(Shout)).unwrap();
        let err = registry.register("louder", Arc::new(Shout)).unwrap_err();
        assert!(matches!(err, TagstyleError::Logic(_)));

        let err = registry.register("terminal", Arc::new(AnsiFormatter)).unwrap_err();
        assert!(matches!(err, TagstyleError::Logic(_)));
    }

    #[test]
    fn test_replace_under_same_name() {
        let mut registry = FormatterRegistry::with_builtins();
        registry.register("ansi", Arc::new(AnsiFormatter)).unwrap();
        registry.register("raw", Arc::new(Shout)).unwrap();
        assert_eq!(registry.resolve("raw").unwrap().name(), "shout");
    }

    #[test]
    fn test_unknown_formatter() {
        let registry = FormatterRegistry::with_builtins();
        let err = registry.resolve("html").err().unwrap();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_aliases() {
        let mut registry = FormatterRegistry::with_builtins();
        registry.alias("term", "ansi").unwrap();
        assert_eq!(registry.resolve("term").unwrap().name(), "ansi");
        assert!(registry.alias("x", "html").unwrap_err().is_invalid_argument());
        assert!(matches!(registry.alias("raw", "ansi"), Err(TagstyleError::Logic(_))));

        // Removing an alias keeps the target
        assert!(registry.remove("cli").is_none());
        assert!(registry.contains("ansi"));

        registry.remove("ansi");
        assert!(!registry.contains("term"));
        assert_eq!(registry.aliases().count(), 1);
    }
}
