use crate::error::StorageError;
use chrono::{DateTime, Local};
use influxdb2::models::DataPoint;

use super::metrics::{
    DetailUsagePower, DetailUsagePowerSummary, PowerSummary, TaggedSample, UsagePowerSummary,
};
use super::traits::DataPointBuilder;

/// The collections gathered in one run, handed to the sink together.
///
/// A collection is `None` when its extractor failed; the others are still
/// written.
#[derive(Debug, Clone)]
pub struct MetricsBatch {
    pub collected_at: DateTime<Local>,
    pub power_summary: Option<PowerSummary>,
    pub detail_usage_power: Option<DetailUsagePower>,
    pub usage_power_summary: Option<UsagePowerSummary>,
    pub detail_usage_power_summary: Option<DetailUsagePowerSummary>,
}

impl MetricsBatch {
    pub fn empty(collected_at: DateTime<Local>) -> Self {
        Self {
            collected_at,
            power_summary: None,
            detail_usage_power: None,
            usage_power_summary: None,
            detail_usage_power_summary: None,
        }
    }

    /// Every sample in the batch with its tags, in write order.
    pub fn tagged_samples(&self) -> Vec<TaggedSample<'_>> {
        let mut samples = Vec::new();
        if let Some(summary) = &self.power_summary {
            samples.extend(summary.tagged_samples());
        }
        if let Some(summary) = &self.usage_power_summary {
            samples.extend(summary.tagged_samples());
        }
        if let Some(details) = &self.detail_usage_power {
            samples.extend(details.tagged_samples());
        }
        if let Some(details) = &self.detail_usage_power_summary {
            samples.extend(details.tagged_samples());
        }
        samples
    }

    /// Converts the batch to points stamped with `collected_at`.
    pub fn to_points(&self) -> Result<Vec<DataPoint>, StorageError> {
        let timestamp = self
            .collected_at
            .timestamp_nanos_opt()
            .ok_or_else(|| StorageError::InvalidDataPoint("Timestamp overflow".to_string()))?;

        self.tagged_samples()
            .into_iter()
            .map(|sample| sample.at(timestamp).to_point())
            .collect()
    }
}
