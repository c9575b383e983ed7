//! Type definitions for locale-aware number parsing
//!
//! This module defines the value objects the parser works with: separator
//! tokens, grouping styles, and the per-locale separator configuration.

use std::fmt;

use regex::Regex;

/// Error raised when a separator fragment does not compile as a regular
/// expression. Surfaces at configuration time, never during a parse.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidTokenError {
    fragment: String,
    reason: String,
}

impl InvalidTokenError {
    /// The offending fragment, as supplied.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

impl fmt::Display for InvalidTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid separator token `{}`: {}",
            self.fragment, self.reason
        )
    }
}

impl std::error::Error for InvalidTokenError {}

/// A separator expressed as a regex fragment: a single escaped character
/// such as `\,`, or a character class listing every glyph a locale accepts
/// in that role (Swiss French groups with several kinds of space).
///
/// The fragment is compiled once at construction. The compiled form later
/// drives both grouping-separator removal and decimal-separator
/// substitution, so validation and cleanup always share one definition.
///
/// The fragment must stay atomic when spliced into a larger pattern: one
/// (possibly escaped) character or one bracket class. A fragment with a
/// top-level alternation compiles here but changes the meaning of the
/// assembled pattern; that is a caller error this type does not detect.
#[derive(Debug, Clone)]
pub struct SeparatorToken {
    fragment: String,
    matcher: Regex,
}

impl SeparatorToken {
    /// Compile `fragment` into a token, rejecting fragments that are not
    /// valid regular expressions.
    pub fn new(fragment: impl Into<String>) -> Result<Self, InvalidTokenError> {
        let fragment = fragment.into();
        match Regex::new(&fragment) {
            Ok(matcher) => Ok(Self { fragment, matcher }),
            Err(e) => Err(InvalidTokenError {
                fragment,
                reason: e.to_string(),
            }),
        }
    }

    /// The raw fragment, exactly as it is spliced into validation patterns.
    pub fn as_fragment(&self) -> &str {
        &self.fragment
    }

    /// The compiled fragment, used for occurrence removal and substitution.
    pub fn matcher(&self) -> &Regex {
        &self.matcher
    }
}

impl PartialEq for SeparatorToken {
    fn eq(&self, other: &Self) -> bool {
        // The compiled matcher is derived state; the fragment identifies
        // the token.
        self.fragment == other.fragment
    }
}

impl Eq for SeparatorToken {}

/// How digits are grouped in the integer part of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Grouping {
    /// Uniform groups of exactly three digits ("1,234,567").
    #[default]
    Western,
    /// A final group of three digits preceded by groups of two, with a
    /// leading group of one or two ("12,34,567").
    Indian,
}

/// The separator conventions of one locale: which glyphs group the integer
/// part, which glyph starts the fractional part, and the grouping style.
///
/// The thousands and decimal fragments must not be textually identical;
/// such a configuration makes cleanup ambiguous and is rejected by the
/// locale table loader rather than handled here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleNumberConfig {
    /// Token delimiting digit groups in the integer portion.
    pub thousands: SeparatorToken,
    /// Token delimiting the integer and fractional portions.
    pub decimal: SeparatorToken,
    /// Grouping style; western unless stated otherwise.
    pub grouping: Grouping,
}

impl LocaleNumberConfig {
    /// Build a western-grouping configuration from the two tokens.
    pub fn new(thousands: SeparatorToken, decimal: SeparatorToken) -> Self {
        Self {
            thousands,
            decimal,
            grouping: Grouping::Western,
        }
    }

    /// Override the grouping style.
    pub fn with_grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = grouping;
        self
    }
}
