//! Lenient number parsing for hand-typed invoice cells.
//!
//! Cells may carry the rupee glyph and thousands separators (`₹1,234.50`).
//! Parsing reads the longest leading decimal literal and ignores whatever
//! follows it, so `"12 pcs"` is `12`. Anything unreadable is `0`.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

/// Characters stripped before parsing
const IGNORED_CHARS: [char; 2] = ['₹', ','];

// ASCII digits only: `\d` would also accept other scripts' digits.
static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^\s*(?P<mantissa>[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+))",
        r"(?:[eE](?P<exponent>[+-]?[0-9]+))?",
    ))
    .expect("leading number pattern is valid")
});

/// Parses raw cell text into a number, yielding zero for empty or malformed input.
///
/// Absent cells are stored as empty text, so they parse to zero as well.
pub fn parse_number(raw: &str) -> Decimal {
    let cleaned: String = raw.chars().filter(|c| !IGNORED_CHARS.contains(c)).collect();

    let Some(captures) = LEADING_NUMBER.captures(&cleaned) else {
        return Decimal::ZERO;
    };
    let mantissa = normalize_mantissa(&captures["mantissa"]);

    let parsed = match captures.name("exponent") {
        Some(exponent) => Decimal::from_scientific(&format!(
            "{}e{}",
            mantissa,
            exponent.as_str().trim_start_matches('+')
        )),
        None => Decimal::from_str(&mantissa),
    };

    parsed.unwrap_or(Decimal::ZERO)
}

/// `+5` -> `5`, `-.5` -> `-0.5`, `5.` -> `5`
fn normalize_mantissa(mantissa: &str) -> String {
    let (sign, digits) = match mantissa.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", mantissa.trim_start_matches('+')),
    };
    let digits = digits.trim_end_matches('.');

    if digits.starts_with('.') {
        format!("{}0{}", sign, digits)
    } else {
        format!("{}{}", sign, digits)
    }
}
