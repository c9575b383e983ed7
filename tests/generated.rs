//! Sweeps whole magnitude ranges through the parser: each case is spelled
//! the way the locale writes it (grouped) and as a bare digit run, and
//! both spellings must land on the same value.

use number_parse::parse_number;

// One integer per decade up to fourteen digits, with a cycling set of
// fractional parts.
const INT_PARTS: [u64; 21] = [
    0,
    1,
    7,
    50,
    100,
    999,
    1000,
    2050,
    20000,
    100000,
    999999,
    1000000,
    12054100,
    100000000,
    999999999,
    1000000000,
    10000000000,
    100000000000,
    1000000000000,
    10000000000000,
    99999999999999,
];

const FRACTIONS: [&str; 7] = ["", "0", "3", "45", "00", "55", "243225"];

fn cases() -> impl Iterator<Item = (String, &'static str)> {
    INT_PARTS
        .iter()
        .enumerate()
        .map(|(i, &n)| (n.to_string(), FRACTIONS[i % FRACTIONS.len()]))
}

/// Insert `sep` at three-digit group boundaries, counted from the right.
fn group_western(digits: &str, sep: &str) -> String {
    let mut out = String::new();
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(sep);
        }
        out.push(c);
    }
    out
}

/// A final group of three digits, two-digit groups before it.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut i = head.len();
    while i > 0 {
        let start = i.saturating_sub(2);
        groups.push(&head[start..i]);
        i = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(",")
}

fn with_fraction(int_spelling: String, frac: &str, dec: &str) -> String {
    if frac.is_empty() {
        int_spelling
    } else {
        format!("{int_spelling}{dec}{frac}")
    }
}

fn check(raw: &str, locale: &str, canonical: &str) {
    let expected: f64 = canonical.parse().unwrap();
    assert_eq!(
        parse_number(raw, locale),
        Some(expected),
        "input {raw:?} for {locale}"
    );
}

fn sweep_western(locale: &str, group_sep: &str, dec_sep: &str) {
    for (digits, frac) in cases() {
        let canonical = with_fraction(digits.clone(), frac, ".");
        let grouped = with_fraction(group_western(&digits, group_sep), frac, dec_sep);
        let plain = with_fraction(digits, frac, dec_sep);

        check(&grouped, locale, &canonical);
        check(&plain, locale, &canonical);
        check(&format!("+{grouped}"), locale, &canonical);
        check(&format!("-{grouped}"), locale, &format!("-{canonical}"));
    }
}

#[test]
fn test_sweep_en_ie() {
    sweep_western("en-IE", ",", ".");
}

#[test]
fn test_sweep_pt() {
    sweep_western("pt", ".", ",");
}

#[test]
fn test_sweep_fr_ch_ordinary_space() {
    sweep_western("fr-CH", " ", ",");
}

#[test]
fn test_sweep_fr_ch_narrow_no_break_space() {
    sweep_western("fr-CH", "\u{202F}", ",");
}

#[test]
fn test_sweep_de_ch() {
    sweep_western("de-CH", "'", ".");
}

#[test]
fn test_sweep_en_in() {
    for (digits, frac) in cases() {
        let canonical = with_fraction(digits.clone(), frac, ".");
        let grouped = with_fraction(group_indian(&digits), frac, ".");
        let plain = with_fraction(digits, frac, ".");

        check(&grouped, "en-IN", &canonical);
        check(&plain, "en-IN", &canonical);
        check(&format!("-{grouped}"), "en-IN", &format!("-{canonical}"));
    }
}
