//! Numeric extraction from the device's display text.
//!
//! AiSEG2 renders values with labels, units and Japanese text around them
//! (`"123.45kWh"`, `"発電 2.5 kW"`). Values are recovered by character
//! filtering alone; no locale-aware parsing takes place.

use crate::error::ParseError;

/// Extracts a decimal number from free-form text.
///
/// Every ASCII digit and every `.` is kept in its original order and the
/// result is parsed as a base-10 `f64`. Minus signs and thousands separators
/// are dropped like any other character.
///
/// # Returns
///
/// * `Ok(0.0)` - If `input` is `None` or contains no digit or point
/// * `Ok(f64)` - The parsed value
/// * `Err(ParseError::NumberParse)` - If the filtered characters do not form
///   a number, e.g. `"1.2.3"` from two values rendered side by side
///
/// # Example
///
/// ```no_run
/// assert_eq!(parse_numeric(Some("123.45kWh"))?, 123.45);
/// assert_eq!(parse_numeric(Some("1a2b3"))?, 123.0);
/// assert_eq!(parse_numeric(None)?, 0.0);
/// ```
pub fn parse_numeric(input: Option<&str>) -> Result<f64, ParseError> {
    let Some(text) = input else {
        return Ok(0.0);
    };

    let filtered: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if filtered.is_empty() {
        return Ok(0.0);
    }

    filtered
        .parse::<f64>()
        .map_err(|e| ParseError::number_parse(text, e))
}
