//! Validation pattern assembly
//!
//! Builds the anchored regular expressions that decide whether a string is
//! a well-formed number under a locale's separator conventions. Separator
//! fragments are spliced into the pattern text verbatim, which is why
//! [`SeparatorToken`] requires them to be atomic.

use regex::Regex;

use crate::types::{Grouping, SeparatorToken};

/// Build the anchored validation regex for numbers written with grouping
/// separators.
///
/// The emitted pattern accepts an optional sign, an integer part grouped
/// according to `grouping` (or a bare `0`), and an optional fractional
/// part introduced by the decimal separator. Leading zeros are rejected:
/// the integer part is either `0` itself or starts with a nonzero digit.
///
/// # Arguments
///
/// * `thousands` - Token matching the grouping separator
/// * `decimal` - Token matching the decimal separator
/// * `grouping` - Digit grouping style for the integer part
///
/// # Returns
///
/// The compiled regex, or the compilation error if the spliced fragments
/// do not form a valid pattern.
///
/// # Examples
///
/// ```
/// use number_parse::pattern::build_extraction_regex;
/// use number_parse::types::{Grouping, SeparatorToken};
///
/// let thousands = SeparatorToken::new(r"\,").unwrap();
/// let decimal = SeparatorToken::new(r"\.").unwrap();
///
/// let western = build_extraction_regex(&thousands, &decimal, Grouping::Western).unwrap();
/// assert!(western.is_match("1,234,567.89"));
/// assert!(!western.is_match("12,34,567"));
///
/// let indian = build_extraction_regex(&thousands, &decimal, Grouping::Indian).unwrap();
/// assert!(indian.is_match("12,34,567"));
/// assert!(!indian.is_match("1,234,567"));
/// ```
pub fn build_extraction_regex(
    thousands: &SeparatorToken,
    decimal: &SeparatorToken,
    grouping: Grouping,
) -> Result<Regex, regex::Error> {
    let t = thousands.as_fragment();
    let d = decimal.as_fragment();
    // The sign class is [+|-], so a literal `|` also passes validation.
    // Numeric conversion downstream rejects it.
    let pattern = match grouping {
        Grouping::Western => {
            format!("^[+|-]?([1-9][0-9]{{0,2}}({t}[0-9]{{3}})*|0)({d}[0-9]+)?$")
        }
        // First arm: a leading group of one or two digits, further
        // two-digit groups, then the closing three-digit group. The other
        // arms admit ungrouped values below 1000.
        Grouping::Indian => format!(
            "^[+|-]?(([1-9][0-9]{{0,1}}{t})+([0-9]{{2}}{t})*[0-9]{{3}}|[1-9][0-9]{{0,2}}|0)({d}[0-9]+)?$"
        ),
    };
    Regex::new(&pattern)
}

/// Build the anchored validation regex for numbers written without any
/// grouping separator.
///
/// Grouped patterns insist on separators once the integer part exceeds
/// three digits, so "20000,34" fails them even in locales that write it
/// routinely. This pattern accepts such plain forms: an optional sign, an
/// ungrouped integer part without leading zeros, and an optional
/// fractional part.
pub fn build_plain_regex(decimal: &SeparatorToken) -> Result<Regex, regex::Error> {
    let d = decimal.as_fragment();
    Regex::new(&format!("^[+|-]?(0|[1-9][0-9]*)({d}[0-9]+)?$"))
}
