//! Document queries against parsed AiSEG2 pages.
//!
//! Lookups that find nothing are not errors: they return `None`, which the
//! extractors treat as empty text (a `0` value or a skipped item).

use crate::aiseg::numeric::parse_numeric;
use crate::error::ParseError;
use scraper::{Html, Selector};

/// Creates a CSS selector from a string.
///
/// # Examples
///
/// Valid selectors:
/// - `"#g_capacity"` - ID selector
/// - `"#stage_1 > div.c_device"` - Child combinator with class
pub fn html_selector(selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|e| ParseError::invalid_selector(selector, e))
}

/// Returns the text content of the first element matching `selector`.
///
/// The text of all descendant nodes is concatenated as-is, without trimming.
///
/// # Returns
///
/// * `Ok(Some(String))` - Text of the first match (possibly empty)
/// * `Ok(None)` - If no element matches
/// * `Err` - If the selector is invalid
pub fn select_text(document: &Html, selector: &str) -> Result<Option<String>, ParseError> {
    let selector = html_selector(selector)?;
    Ok(document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>()))
}

/// Returns the text content of the element with the given `id`.
pub fn text_by_id(document: &Html, id: &str) -> Result<Option<String>, ParseError> {
    select_text(document, &format!("#{}", id))
}

/// Reads a numeric value from the first element matching `selector`.
///
/// A missing element yields `0.0`.
pub fn select_numeric(document: &Html, selector: &str) -> Result<f64, ParseError> {
    parse_numeric(select_text(document, selector)?.as_deref())
}

/// Reads a numeric value from the element with the given `id`.
pub fn numeric_by_id(document: &Html, id: &str) -> Result<f64, ParseError> {
    parse_numeric(text_by_id(document, id)?.as_deref())
}

/// Returns the text of every `<script>` element, in document order.
pub fn script_texts(document: &Html) -> Result<Vec<String>, ParseError> {
    let selector = html_selector("script")?;
    Ok(document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .collect())
}
