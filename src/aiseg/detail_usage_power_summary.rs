use crate::aiseg::client::Client;
use crate::aiseg::embedded_json::{measured_circuits, Circuit};
use crate::aiseg::html::numeric_by_id;
use crate::aiseg::query_builder::circuit_total_path;
use crate::error::ExtractError;
use crate::model::{DetailUsagePowerSummary, MetricSample, Unit};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::sync::Arc;

const SETTINGS_PAGE: &str = "/page/setting/installation/734";

/// Reads per-circuit cumulative usage in kWh.
///
/// The circuit list comes from the settings page; each measured circuit is
/// then read from its own graph page. Up to `max_concurrent_fetches`
/// circuit pages are in flight at once and results keep the circuit order.
pub struct DetailUsagePowerSummaryExtractor {
    client: Arc<Client>,
    max_concurrent_fetches: usize,
}

impl DetailUsagePowerSummaryExtractor {
    pub fn new(client: Arc<Client>, max_concurrent_fetches: usize) -> Self {
        Self {
            client,
            max_concurrent_fetches: max_concurrent_fetches.max(1),
        }
    }

    pub async fn extract(&self) -> Result<DetailUsagePowerSummary, ExtractError> {
        let circuits = measured_circuits(&self.client.fetch_document(SETTINGS_PAGE).await?)?;
        tracing::debug!(count = circuits.len(), "Found measured circuits");

        let samples: Vec<MetricSample> = stream::iter(circuits)
            .map(|circuit| self.read_circuit(circuit))
            .buffered(self.max_concurrent_fetches)
            .try_collect()
            .await?;

        Ok(DetailUsagePowerSummary(samples))
    }

    async fn read_circuit(&self, circuit: Circuit) -> Result<MetricSample, ExtractError> {
        let path = circuit_total_path(&circuit.id);
        let value = numeric_by_id(&self.client.fetch_document(&path).await?, "val_kwh")?;
        Ok(MetricSample::new(circuit.name, Unit::KiloWattHour, value))
    }
}
