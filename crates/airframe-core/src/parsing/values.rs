use crate::parsing::normalize::clean_text;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9][0-9,]*)").expect("valid number regex"));

/// First run of digits (thousands separators allowed) in a text fragment.
///
/// Handles formats like:
/// - "180" -> 180
/// - "Seating: 150–180" -> 150
/// - "5,765 km[4]" -> 5765
pub fn parse_number(text: &str) -> Option<Decimal> {
    let text = clean_text(text);
    let caps = FIRST_NUMBER.captures(&text)?;
    parse_decimal(caps.get(1)?.as_str())
}

/// A whole count such as crew or seats.
pub fn parse_count(text: &str) -> Option<u32> {
    parse_number(text)?.trunc().to_u32()
}

/// Parse a captured numeric token, dropping thousands separators.
///
/// A trailing full stop (sentence punctuation caught by the token pattern) is
/// ignored; anything else that is not a valid decimal is "no match".
pub fn parse_decimal(token: &str) -> Option<Decimal> {
    let normalized = token.replace(',', "");
    let normalized = normalized.trim_end_matches('.');
    if normalized.is_empty() {
        return None;
    }
    Decimal::from_str(normalized).ok()
}
