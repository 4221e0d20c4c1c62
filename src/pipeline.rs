//! One collection run over every extractor.

use crate::aiseg::{
    Client, DetailUsagePowerExtractor, DetailUsagePowerSummaryExtractor, PowerSummaryExtractor,
    UsagePowerSummaryExtractor,
};
use crate::error::ExtractError;
use crate::model::MetricsBatch;
use chrono::Local;
use std::sync::Arc;

/// An extractor that failed during a run.
#[derive(Debug)]
pub struct ExtractorFailure {
    pub extractor: &'static str,
    pub error: ExtractError,
}

/// The outcome of a run: whatever was collected plus every failure.
#[derive(Debug)]
pub struct CollectionReport {
    pub batch: MetricsBatch,
    pub failures: Vec<ExtractorFailure>,
}

impl CollectionReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    fn record<T>(&mut self, extractor: &'static str, result: Result<T, ExtractError>) -> Option<T> {
        match result {
            Ok(collection) => Some(collection),
            Err(error) => {
                tracing::error!(extractor, %error, "Extractor failed");
                self.failures.push(ExtractorFailure { extractor, error });
                None
            }
        }
    }
}

/// Runs the four extractors in sequence against one shared client.
pub struct Pipeline {
    power_summary: PowerSummaryExtractor,
    detail_usage_power: DetailUsagePowerExtractor,
    usage_power_summary: UsagePowerSummaryExtractor,
    detail_usage_power_summary: DetailUsagePowerSummaryExtractor,
}

impl Pipeline {
    pub fn new(client: Arc<Client>, max_concurrent_fetches: usize) -> Self {
        Self {
            power_summary: PowerSummaryExtractor::new(Arc::clone(&client)),
            detail_usage_power: DetailUsagePowerExtractor::new(Arc::clone(&client)),
            usage_power_summary: UsagePowerSummaryExtractor::new(Arc::clone(&client)),
            detail_usage_power_summary: DetailUsagePowerSummaryExtractor::new(
                client,
                max_concurrent_fetches,
            ),
        }
    }

    /// Runs every extractor once. A failing extractor leaves its collection
    /// empty and does not stop the others.
    pub async fn run(&self) -> CollectionReport {
        tracing::info!("Starting collection");
        let mut report = CollectionReport {
            batch: MetricsBatch::empty(Local::now()),
            failures: vec![],
        };

        let result = self.power_summary.extract().await;
        report.batch.power_summary = report.record("power_summary", result);

        let result = self.detail_usage_power.extract().await;
        report.batch.detail_usage_power = report.record("detail_usage_power", result);

        let result = self.usage_power_summary.extract().await;
        report.batch.usage_power_summary = report.record("usage_power_summary", result);

        let result = self.detail_usage_power_summary.extract().await;
        report.batch.detail_usage_power_summary =
            report.record("detail_usage_power_summary", result);

        tracing::info!(
            samples = report.batch.tagged_samples().len(),
            failures = report.failures.len(),
            "Finished collection"
        );
        report
    }
}
