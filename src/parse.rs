//! Locale-aware string to number conversion
//!
//! The entry points tie the other layers together: look up a locale's
//! separator conventions, validate the input against them, canonicalize,
//! and convert to `f64`.

use std::collections::HashMap;

use regex::Regex;

use crate::locale::locale_number_config;
use crate::normalize::normalize;
use crate::pattern::{build_extraction_regex, build_plain_regex};
use crate::types::{Grouping, LocaleNumberConfig};

/// Parse a locale-formatted string into a number.
///
/// Returns `None` when the locale has no registered separator conventions
/// or when `raw` is not a well-formed number under them. Both grouped
/// ("12,054,100.55") and ungrouped ("12054100.55") spellings are accepted.
///
/// # Arguments
///
/// * `raw` - The candidate string, exactly as the user wrote it
/// * `locale` - Locale tag identifying the separator conventions, e.g.
///   "en-IE" or "fr-CH"
///
/// # Returns
///
/// The parsed value, or `None` for unsupported locales and malformed input.
///
/// # Examples
///
/// ```
/// use number_parse::parse_number;
///
/// assert_eq!(parse_number("1,200.00", "en-IE"), Some(1200.0));
/// assert_eq!(parse_number("1 200,00", "fr-CH"), Some(1200.0));
/// assert_eq!(parse_number("12,34,567", "en-IN"), Some(1234567.0));
/// assert_eq!(parse_number("50,000.12", "pt"), None);
/// ```
pub fn parse_number(raw: &str, locale: &str) -> Option<f64> {
    let config = lookup(locale)?;
    parse_number_with(raw, &config)
}

/// Parse a string against an explicit separator configuration, bypassing
/// the locale table.
///
/// Compiles the validation patterns on every call; use [`NumberParser`]
/// when parsing many values under the same configuration.
pub fn parse_number_with(raw: &str, config: &LocaleNumberConfig) -> Option<f64> {
    let grouped = build_extraction_regex(&config.thousands, &config.decimal, config.grouping).ok()?;
    let plain = build_plain_regex(&config.decimal).ok()?;
    convert(raw, &grouped, &plain, config)
}

fn lookup(locale: &str) -> Option<LocaleNumberConfig> {
    let config = locale_number_config(locale);
    #[cfg(feature = "tracing")]
    if config.is_none() {
        tracing::warn!(locale = %locale, "no separator conventions registered for locale");
    }
    config
}

fn convert(raw: &str, grouped: &Regex, plain: &Regex, config: &LocaleNumberConfig) -> Option<f64> {
    // Grouped validation runs first; values written without any grouping
    // separator ("20000,34") fail it and get a second chance against the
    // plain form.
    let canonical = normalize(raw, grouped, config).or_else(|| normalize(raw, plain, config))?;
    canonical.parse::<f64>().ok()
}

/// A parser that caches compiled validation patterns per separator
/// configuration.
///
/// [`parse_number`] rebuilds its regexes on every call, which is wasteful
/// when converting columns of values under a handful of locales. This
/// type keeps one compiled pattern pair per distinct configuration and
/// reuses it across calls. The cache is owned by the instance; dropping
/// the parser drops the patterns.
///
/// # Examples
///
/// ```
/// use number_parse::NumberParser;
///
/// let mut parser = NumberParser::new();
/// assert_eq!(parser.parse("12 054 100,55", "fr-CH"), Some(12054100.55));
/// assert_eq!(parser.parse("873,00", "fr-CH"), Some(873.0));
/// assert_eq!(parser.cached_patterns(), 1);
/// ```
pub struct NumberParser {
    cache: HashMap<(String, String, Grouping), (Regex, Regex)>,
}

impl NumberParser {
    /// Create a parser with an empty pattern cache.
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Parse a locale-formatted string, reusing cached patterns for the
    /// locale's configuration.
    pub fn parse(&mut self, raw: &str, locale: &str) -> Option<f64> {
        let config = lookup(locale)?;
        self.parse_with(raw, &config)
    }

    /// Parse against an explicit configuration, reusing cached patterns.
    pub fn parse_with(&mut self, raw: &str, config: &LocaleNumberConfig) -> Option<f64> {
        let key = (
            config.thousands.as_fragment().to_string(),
            config.decimal.as_fragment().to_string(),
            config.grouping,
        );
        if !self.cache.contains_key(&key) {
            let grouped =
                build_extraction_regex(&config.thousands, &config.decimal, config.grouping).ok()?;
            let plain = build_plain_regex(&config.decimal).ok()?;
            self.cache.insert(key.clone(), (grouped, plain));
        }
        let (grouped, plain) = self.cache.get(&key)?;
        convert(raw, grouped, plain, config)
    }

    /// Number of distinct configurations with compiled patterns in the
    /// cache.
    pub fn cached_patterns(&self) -> usize {
        self.cache.len()
    }
}

impl Default for NumberParser {
    fn default() -> Self {
        Self::new()
    }
}
