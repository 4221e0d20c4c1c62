use crate::config::InfluxConfig;
use crate::error::StorageError;
use crate::model::{MetricsBatch, MetricsSink};
use async_trait::async_trait;
use futures::prelude::stream;
use influxdb2::models::DataPoint;

pub struct Client {
    client: influxdb2::Client,
    bucket: String,
}

impl Client {
    pub(crate) fn new(config: InfluxConfig) -> Self {
        let client = influxdb2::Client::new(config.url, config.org, config.token);
        Self {
            client,
            bucket: config.bucket,
        }
    }

    pub async fn write_points(&self, points: Vec<DataPoint>) -> Result<(), StorageError> {
        Ok(self
            .client
            .write(self.bucket.as_str(), stream::iter(points))
            .await?)
    }
}

#[async_trait]
impl MetricsSink for Client {
    async fn write(&self, batch: &MetricsBatch) -> Result<usize, StorageError> {
        let points = batch.to_points()?;
        if points.is_empty() {
            tracing::info!("No points to write");
            return Ok(0);
        }

        for point in &points {
            tracing::debug!("{:?}", point);
        }

        let count = points.len();
        self.write_points(points).await?;
        tracing::info!(count, bucket = %self.bucket, "Wrote points to InfluxDB");
        Ok(count)
    }
}
