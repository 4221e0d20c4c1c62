//! JSON arguments embedded in inline page scripts.
//!
//! The circuit settings page does not render its circuit list as markup; it
//! passes the list as a JSON literal to an init call inside
//! `window.onload`.

use crate::aiseg::html::script_texts;
use crate::error::ParseError;
use scraper::Html;
use serde_derive::Deserialize;

/// Marker identifying the script that carries the circuit list.
pub const ONLOAD_MARKER: &str = "window.onload";

/// Returns the text of every script that contains `marker`.
pub fn find_scripts(document: &Html, marker: &str) -> Result<Vec<String>, ParseError> {
    Ok(script_texts(document)?
        .into_iter()
        .filter(|text| text.contains(marker))
        .collect())
}

/// Returns the text between the first `(` after `marker` and the last `)`.
///
/// `None` when the marker or either delimiter is missing, or when the last
/// `)` comes before the opening `(`.
pub fn extract_call_argument<'a>(script: &'a str, marker: &str) -> Option<&'a str> {
    let marker_at = script.find(marker)?;
    let open = marker_at + marker.len() + script[marker_at + marker.len()..].find('(')?;
    let close = script.rfind(')')?;
    if close <= open {
        return None;
    }
    Some(&script[open + 1..close])
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CircuitList {
    #[serde(rename = "arrayCircuitNameList")]
    pub circuits: Vec<Circuit>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Circuit {
    #[serde(rename = "strBtnType")]
    pub button_type: String,
    #[serde(rename = "strId")]
    pub id: String,
    #[serde(rename = "strCircuit")]
    pub name: String,
}

impl Circuit {
    /// Only circuits with button type `"1"` have a usage graph.
    pub fn is_measured(&self) -> bool {
        self.button_type == "1"
    }
}

impl CircuitList {
    pub fn parse(json: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Collects the measured circuits from every onload script, in source order.
///
/// Every script is parsed before anything is returned, so a single
/// malformed block fails the whole call.
pub fn measured_circuits(document: &Html) -> Result<Vec<Circuit>, ParseError> {
    let mut circuits = Vec::new();
    for script in find_scripts(document, ONLOAD_MARKER)? {
        let Some(argument) = extract_call_argument(&script, ONLOAD_MARKER) else {
            tracing::warn!("Skipping onload script without a call argument");
            continue;
        };
        let list = CircuitList::parse(argument)?;
        circuits.extend(list.circuits.into_iter().filter(Circuit::is_measured));
    }
    Ok(circuits)
}
