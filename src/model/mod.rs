//! Typed metric collections scraped from AiSEG2 and their conversion to
//! InfluxDB data points.

pub mod batch;
pub mod metrics;
pub mod traits;
pub mod types;

pub use batch::MetricsBatch;
pub use metrics::{
    DetailUsagePower, DetailUsagePowerSummary, MetricSample, PowerSummary, UsagePowerSummary,
};
pub use traits::MetricsSink;
pub use types::Unit;
