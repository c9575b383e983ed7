//! Locale support for number parsing
//!
//! This module handles loading and managing the per-locale separator
//! conventions the parser validates against, keyed by BCP 47 style tags.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::types::{Grouping, LocaleNumberConfig, SeparatorToken};

/// Error type for locale table operations
#[derive(Debug, Clone, PartialEq)]
pub enum LocaleError {
    /// An error occurred while parsing locale data
    ParseError(String),
    /// A locale entry carries an unusable separator definition
    InvalidSeparator(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::ParseError(msg) => write!(f, "Error parsing locale data: {}", msg),
            LocaleError::InvalidSeparator(msg) => {
                write!(f, "Invalid separator definition: {}", msg)
            }
        }
    }
}

impl std::error::Error for LocaleError {}

type Result<T> = std::result::Result<T, LocaleError>;

/// Represents a locale manager that provides access to per-locale
/// separator configurations
pub struct LocaleManager {
    configs: HashMap<String, LocaleNumberConfig>,
}

// Global singleton for locale data
static LOCALE_MANAGER: OnceLock<LocaleManager> = OnceLock::new();

impl LocaleManager {
    /// Create a new locale manager with the default locale data
    fn new() -> Self {
        let mut manager = Self {
            configs: HashMap::new(),
        };

        // Parse and load the built-in locale data
        if let Err(e) = manager.load_embedded_data() {
            // Just log the error and continue with an empty map
            eprintln!("Failed to load embedded locale data: {}", e);
        }

        manager
    }

    /// Load the embedded locale data from the TOML file
    fn load_embedded_data(&mut self) -> Result<()> {
        let locales_toml = include_str!("locale/number_locales.toml");
        self.parse_locale_table(locales_toml)
    }

    /// Parse the locale table TOML data
    fn parse_locale_table(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Root is not a table".to_string()))?;

        for (tag, value) in table {
            let entry = value
                .as_table()
                .ok_or_else(|| LocaleError::ParseError(format!("{} is not a table", tag)))?;

            let thousands = entry
                .get("thousands")
                .and_then(|v| v.as_str())
                .ok_or_else(|| {
                    LocaleError::ParseError(format!("Missing or invalid thousands in {}", tag))
                })?;

            let decimal = entry.get("decimal").and_then(|v| v.as_str()).ok_or_else(|| {
                LocaleError::ParseError(format!("Missing or invalid decimal in {}", tag))
            })?;

            // Identical fragments would make separator cleanup ambiguous.
            if thousands == decimal {
                return Err(LocaleError::InvalidSeparator(format!(
                    "{}: thousands and decimal separators are both `{}`",
                    tag, thousands
                )));
            }

            let thousands = SeparatorToken::new(thousands)
                .map_err(|e| LocaleError::InvalidSeparator(format!("{}: {}", tag, e)))?;
            let decimal = SeparatorToken::new(decimal)
                .map_err(|e| LocaleError::InvalidSeparator(format!("{}: {}", tag, e)))?;

            let grouping = if entry.get("indian").and_then(|v| v.as_bool()).unwrap_or(false) {
                Grouping::Indian
            } else {
                Grouping::Western
            };

            self.configs.insert(
                tag.to_string(),
                LocaleNumberConfig::new(thousands, decimal).with_grouping(grouping),
            );
        }

        Ok(())
    }

    /// Get the global locale manager instance
    fn get() -> &'static Self {
        LOCALE_MANAGER.get_or_init(Self::new)
    }

    /// Get the configuration stored for a locale tag
    fn config(&self, tag: &str) -> Option<&LocaleNumberConfig> {
        self.configs.get(tag)
    }
}

/// Get the separator configuration for a locale tag (e.g. "en-IE", "fr-CH").
///
/// Underscore spellings ("en_IE") are accepted and treated as their
/// hyphenated form. Lookup is otherwise exact: there is no fallback from a
/// regional tag like "de-AT" to the bare language "de".
pub fn locale_number_config(tag: &str) -> Option<LocaleNumberConfig> {
    let normalized = tag.replace('_', "-");
    LocaleManager::get().config(&normalized).cloned()
}

/// List all locale tags with a known separator configuration
pub fn supported_locales() -> Vec<String> {
    LocaleManager::get().configs.keys().cloned().collect()
}
