//! AiSEG2 to InfluxDB2 scraper
//!
//! Scrapes power and energy figures from a Panasonic AiSEG2 controller once
//! and writes them to InfluxDB2. Scheduling is left to the caller (cron, a
//! systemd timer, a Kubernetes CronJob).
//!
//! The exit status is non-zero when any extractor or the write failed; the
//! collections that did succeed are written regardless.

mod aiseg;
mod config;
mod error;
mod influxdb;
mod model;
mod pipeline;

#[cfg(test)]
mod test_utils;

use crate::error::Result;
use crate::model::MetricsSink;
use crate::pipeline::{CollectionReport, Pipeline};
use anyhow::anyhow;
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    let app_config = config::load_app_config();
    let log_level = app_config
        .as_ref()
        .map(config::AppConfig::log_level)
        .unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt().with_max_level(log_level).init();
    if let Err(e) = app_config {
        tracing::warn!(error = %e, "Failed to load AppConfig, logging at INFO");
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Run failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let aiseg_config = config::load_aiseg_config()?;
    let influx_config = config::load_influx_config()?;

    let max_concurrent_fetches = aiseg_config.max_concurrent_fetches;
    let aiseg_client = Arc::new(aiseg::Client::new(aiseg_config)?);
    let influx_client = influxdb::Client::new(influx_config);

    let report = Pipeline::new(aiseg_client, max_concurrent_fetches)
        .run()
        .await;
    write_report(&influx_client, report).await
}

/// Writes the collected batch, then fails if any extractor failed.
async fn write_report(sink: &dyn MetricsSink, report: CollectionReport) -> Result<()> {
    sink.write(&report.batch).await?;

    if report.is_complete() {
        return Ok(());
    }
    let failed: Vec<String> = report
        .failures
        .iter()
        .map(|f| format!("{} ({})", f.extractor, f.error))
        .collect();
    Err(anyhow!("extractors failed: {}", failed.join(", ")).into())
}
