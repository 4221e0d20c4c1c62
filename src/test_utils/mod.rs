//! Shared test helpers: configuration builders, fixtures, HTML page builders
//! and mock servers for AiSEG2 and InfluxDB.

#![cfg(test)]

pub mod html;
pub mod mocks;
