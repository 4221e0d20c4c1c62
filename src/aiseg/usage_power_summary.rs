use crate::aiseg::client::Client;
use crate::aiseg::html::numeric_by_id;
use crate::error::ExtractError;
use crate::model::{MetricSample, Unit, UsagePowerSummary};
use std::sync::Arc;

/// Reads the cumulative energy totals from the four report pages.
pub struct UsagePowerSummaryExtractor {
    client: Arc<Client>,
}

impl UsagePowerSummaryExtractor {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    pub async fn extract(&self) -> Result<UsagePowerSummary, ExtractError> {
        Ok(UsagePowerSummary {
            total_generation: self.read_total("/page/graph/51111", "総発電電力").await?,
            total_sold: self.read_total("/page/graph/54111", "売電量").await?,
            total_purchased: self.read_total("/page/graph/53111", "買電量").await?,
            total_usage: self.read_total("/page/graph/52111", "総消費電力").await?,
        })
    }

    async fn read_total(&self, path: &str, label: &str) -> Result<MetricSample, ExtractError> {
        let value = numeric_by_id(&self.client.fetch_document(path).await?, "val_kwh")?;
        Ok(MetricSample::new(label, Unit::KiloWattHour, value))
    }
}
