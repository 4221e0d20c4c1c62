//! Query blobs for AiSEG2 graph pages.
//!
//! The graph pages take a base64-encoded JSON object in their `data`
//! parameter.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::json;

/// Builds the `data` parameter selecting one circuit.
///
/// # Format
/// ```json
/// {"circuitid":"30"}
/// ```
pub fn circuit_query(circuit_id: &str) -> String {
    STANDARD.encode(json!({ "circuitid": circuit_id }).to_string())
}

/// Path of the cumulative usage page for one circuit.
pub fn circuit_total_path(circuit_id: &str) -> String {
    format!("/page/graph/584?data={}", circuit_query(circuit_id))
}
