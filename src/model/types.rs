use std::fmt;

/// Represents the InfluxDB measurement the points are written to.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Measurement {
    /// Every power and energy figure scraped from AiSEG2
    Power,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Measurement::Power => write!(f, "power"),
        }
    }
}

/// Units of measurement used in the system.
///
/// These units are appended to metric names to provide
/// clear context about what is being measured.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Unit {
    /// Kilowatts (kW) - for instantaneous totals
    KiloWatt,
    /// Watts (W) - for instantaneous per-source and per-device power
    Watt,
    /// Kilowatt-hours (kWh) - for energy over time
    KiloWattHour,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Unit::KiloWatt => write!(f, "kW"),
            Unit::Watt => write!(f, "W"),
            Unit::KiloWattHour => write!(f, "kWh"),
        }
    }
}

/// Breakdown categories, written as the `detail-type` tag.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum DetailType {
    /// Per-source generation (solar, fuel cell, ...)
    Generation,
    /// Per-device instantaneous usage
    Usage,
    /// Per-circuit cumulative usage
    UsageSummary,
}

impl fmt::Display for DetailType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DetailType::Generation => write!(f, "generation"),
            DetailType::Usage => write!(f, "usage"),
            DetailType::UsageSummary => write!(f, "usage-summary"),
        }
    }
}

/// How a sample is tagged when written.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SampleTag {
    /// `summary=<name>`
    Summary,
    /// `detail-type=<type>`, `detail-section=<name>`
    Detail(DetailType),
}
