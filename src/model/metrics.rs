use crate::error::StorageError;
use influxdb2::models::DataPoint;
use std::fmt;

use super::traits::DataPointBuilder;
use super::types::{DetailType, Measurement, SampleTag, Unit};

/// A single named value scraped from AiSEG2.
///
/// The name carries the physical unit, e.g. `"総発電電力(kW)"`.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    name: String,
    value: f64,
}

impl MetricSample {
    /// Creates a sample named `"<label>(<unit>)"`.
    pub fn new(label: impl fmt::Display, unit: Unit, value: f64) -> Self {
        Self {
            name: format!("{}({})", label, unit),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Instantaneous totals from the electricity flow page.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerSummary {
    /// 総発電電力(kW)
    pub total_generation: MetricSample,
    /// 総消費電力(kW)
    pub total_usage: MetricSample,
    /// 売買電力(kW), positive when exporting
    pub total_balance: MetricSample,
    /// 買電力(kW), never negative
    pub total_purchased: MetricSample,
    /// Up to three per-source generation values in W
    pub generation_details: Vec<MetricSample>,
}

impl PowerSummary {
    /// Builds the summary from the two instantaneous totals in kW.
    pub fn from_totals(
        generation_kw: f64,
        usage_kw: f64,
        generation_details: Vec<MetricSample>,
    ) -> Self {
        let balance = generation_kw - usage_kw;
        Self {
            total_generation: MetricSample::new("総発電電力", Unit::KiloWatt, generation_kw),
            total_usage: MetricSample::new("総消費電力", Unit::KiloWatt, usage_kw),
            total_balance: MetricSample::new("売買電力", Unit::KiloWatt, balance),
            total_purchased: MetricSample::new("買電力", Unit::KiloWatt, (-balance).max(0.0)),
            generation_details,
        }
    }
}

/// Per-device instantaneous usage in W, in listing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailUsagePower(pub Vec<MetricSample>);

/// Cumulative energy totals from the four report pages, in kWh.
#[derive(Debug, Clone, PartialEq)]
pub struct UsagePowerSummary {
    pub total_generation: MetricSample,
    pub total_sold: MetricSample,
    pub total_purchased: MetricSample,
    pub total_usage: MetricSample,
}

/// Per-circuit cumulative usage in kWh, in configuration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailUsagePowerSummary(pub Vec<MetricSample>);

/// A sample together with the tags it is written with.
#[derive(Debug, Clone, Copy)]
pub struct TaggedSample<'a> {
    pub measurement: &'a Measurement,
    pub tag: SampleTag,
    pub sample: &'a MetricSample,
    /// Nanoseconds since the epoch; the server time is used when absent
    pub timestamp: Option<i64>,
}

impl TaggedSample<'_> {
    pub fn at(self, timestamp: i64) -> Self {
        Self {
            timestamp: Some(timestamp),
            ..self
        }
    }
}

impl DataPointBuilder for TaggedSample<'_> {
    fn to_point(&self) -> Result<DataPoint, StorageError> {
        let builder = DataPoint::builder(self.measurement.to_string().as_str());
        let builder = match self.tag {
            SampleTag::Summary => builder.tag("summary", self.sample.name()),
            SampleTag::Detail(detail_type) => builder
                .tag("detail-type", detail_type.to_string())
                .tag("detail-section", self.sample.name()),
        };
        let builder = builder.field("value", self.sample.value());
        let builder = match self.timestamp {
            Some(timestamp) => builder.timestamp(timestamp),
            None => builder,
        };
        builder
            .build()
            .map_err(|e| {
                StorageError::InvalidDataPoint(format!(
                    "Failed to build point for {}: {}",
                    self.sample.name(),
                    e
                ))
            })
    }
}

const POWER: Measurement = Measurement::Power;

fn tagged<'a>(
    tag: SampleTag,
    samples: impl IntoIterator<Item = &'a MetricSample>,
) -> impl Iterator<Item = TaggedSample<'a>> {
    samples.into_iter().map(move |sample| TaggedSample {
        measurement: &POWER,
        tag,
        sample,
        timestamp: None,
    })
}

impl PowerSummary {
    pub fn tagged_samples(&self) -> Vec<TaggedSample<'_>> {
        tagged(
            SampleTag::Summary,
            [
                &self.total_generation,
                &self.total_usage,
                &self.total_balance,
                &self.total_purchased,
            ],
        )
        .chain(tagged(
            SampleTag::Detail(DetailType::Generation),
            &self.generation_details,
        ))
        .collect()
    }
}

impl UsagePowerSummary {
    pub fn tagged_samples(&self) -> Vec<TaggedSample<'_>> {
        tagged(
            SampleTag::Summary,
            [
                &self.total_generation,
                &self.total_sold,
                &self.total_purchased,
                &self.total_usage,
            ],
        )
        .collect()
    }
}

impl DetailUsagePower {
    pub fn tagged_samples(&self) -> Vec<TaggedSample<'_>> {
        tagged(SampleTag::Detail(DetailType::Usage), &self.0).collect()
    }
}

impl DetailUsagePowerSummary {
    pub fn tagged_samples(&self) -> Vec<TaggedSample<'_>> {
        tagged(SampleTag::Detail(DetailType::UsageSummary), &self.0).collect()
    }
}
