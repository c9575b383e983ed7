//! Canonicalization of validated number strings
//!
//! Turns a locale-formatted string that already passed validation into a
//! plain decimal literal: grouping separators removed, the locale's
//! decimal separator rewritten as `.`, an explicit leading `+` dropped.

use regex::Regex;

use crate::types::LocaleNumberConfig;

/// Normalize `raw` to a canonical decimal literal, or return `None` when
/// it does not match `pattern`.
///
/// The pattern decides acceptance; the configuration's tokens drive the
/// cleanup. Callers normally build the pattern from the same
/// configuration, but the two are deliberately separate inputs: a value
/// can be validated under one set of conventions and cleaned under
/// another, and the cleanup only rewrites glyphs its own tokens match.
///
/// # Arguments
///
/// * `raw` - The candidate string, exactly as the user wrote it
/// * `pattern` - Anchored validation regex the whole string must match
/// * `config` - Separator tokens used to strip grouping and rewrite the
///   decimal glyph
///
/// # Returns
///
/// The canonical form ("1200.00" style), or `None` if `raw` fails
/// validation.
///
/// # Examples
///
/// ```
/// use number_parse::normalize::normalize;
/// use number_parse::pattern::build_extraction_regex;
/// use number_parse::types::{LocaleNumberConfig, SeparatorToken};
///
/// let config = LocaleNumberConfig::new(
///     SeparatorToken::new(r"\.").unwrap(),
///     SeparatorToken::new(r"\,").unwrap(),
/// );
/// let re =
///     build_extraction_regex(&config.thousands, &config.decimal, config.grouping).unwrap();
///
/// assert_eq!(normalize("1.200,00", &re, &config), Some("1200.00".to_string()));
/// assert_eq!(normalize("50,000.12", &re, &config), None);
/// ```
pub fn normalize(raw: &str, pattern: &Regex, config: &LocaleNumberConfig) -> Option<String> {
    if !pattern.is_match(raw) {
        return None;
    }
    // Grouping glyphs must be gone before the decimal glyph is rewritten:
    // in the Swiss apostrophe locales the decimal class also matches the
    // grouping character, and the reverse order would turn every group
    // boundary into a dot.
    let ungrouped = config.thousands.matcher().replace_all(raw, "");
    let dotted = config.decimal.matcher().replace_all(&ungrouped, ".");
    let canonical = dotted.strip_prefix('+').unwrap_or(&dotted);
    Some(canonical.to_string())
}
