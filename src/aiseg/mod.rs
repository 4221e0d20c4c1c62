mod client;
mod detail_usage_power;
mod detail_usage_power_summary;
pub mod embedded_json;
pub mod html;
pub mod numeric;
pub mod pagination;
mod power_summary;
pub mod query_builder;
mod usage_power_summary;

pub use client::Client;
pub use detail_usage_power::DetailUsagePowerExtractor;
pub use detail_usage_power_summary::DetailUsagePowerSummaryExtractor;
pub use power_summary::PowerSummaryExtractor;
pub use usage_power_summary::UsagePowerSummaryExtractor;
