use crate::aiseg::client::Client;
use crate::aiseg::html::{numeric_by_id, text_by_id};
use crate::error::{ExtractError, ParseError};
use crate::model::{MetricSample, PowerSummary, Unit};
use scraper::Html;
use std::sync::Arc;

const PAGE: &str = "/page/electricflow/111";
const GENERATION_DETAIL_SLOTS: usize = 3;

/// Reads instantaneous generation and usage from the electricity flow page.
pub struct PowerSummaryExtractor {
    client: Arc<Client>,
}

impl PowerSummaryExtractor {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    pub async fn extract(&self) -> Result<PowerSummary, ExtractError> {
        let document = self.client.fetch_document(PAGE).await?;
        Ok(read_power_summary(&document)?)
    }
}

fn read_power_summary(document: &Html) -> Result<PowerSummary, ParseError> {
    let generation = numeric_by_id(document, "g_capacity")?;
    let usage = numeric_by_id(document, "u_capacity")?;
    let details = read_generation_details(document)?;
    Ok(PowerSummary::from_totals(generation, usage, details))
}

fn read_generation_details(document: &Html) -> Result<Vec<MetricSample>, ParseError> {
    let mut details = vec![];
    for i in 1..=GENERATION_DETAIL_SLOTS {
        let title = match text_by_id(document, &format!("g_d_{}_title", i))? {
            Some(title) if !title.is_empty() => title,
            _ => continue,
        };
        let value = numeric_by_id(document, &format!("g_d_{}_capacity", i))?;
        details.push(MetricSample::new(title, Unit::Watt, value));
    }
    Ok(details)
}
