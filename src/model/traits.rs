use crate::error::StorageError;
use async_trait::async_trait;
use influxdb2::models::DataPoint;

use super::batch::MetricsBatch;

/// Trait for types that can be converted to InfluxDB data points.
pub trait DataPointBuilder: Send + Sync {
    /// Converts the metric into an InfluxDB DataPoint.
    ///
    /// # Returns
    /// - `Ok(DataPoint)` if conversion succeeds
    /// - `Err` if the metric data cannot be converted to a valid DataPoint
    fn to_point(&self) -> Result<DataPoint, StorageError>;
}

/// Destination for the collections gathered in one run.
///
/// The sink owns tagging, timestamping and flushing; extractors only hand
/// over typed collections.
#[async_trait]
pub trait MetricsSink: Send + Sync {
    /// Writes every collection present in `batch`.
    ///
    /// # Returns
    /// The number of points written
    async fn write(&self, batch: &MetricsBatch) -> Result<usize, StorageError>;
}
