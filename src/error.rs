//! Error types for the AiSEG2 to InfluxDB2 scraper.
//!
//! Each stage of a run has its own error type so that callers can tell a
//! configuration problem from a failed fetch or an unparsable page.

use thiserror::Error;

/// Result type alias using our custom error types.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error type that encompasses all application errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A metric extractor failed
    #[error("extractor error: {0}")]
    Extract(#[from] ExtractError),

    /// InfluxDB storage errors
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Generic errors that don't fit other categories
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable parsing failed
    #[error("failed to parse environment variables: {0}")]
    EnvParse(String),

    /// Required configuration value is missing
    #[error("missing required configuration: {0}")]
    Missing(String),

    /// Configuration value is invalid
    #[error("invalid configuration value for {field}: {message}")]
    Invalid { field: String, message: String },
}

/// Errors raised while fetching a page from the device.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport or digest handshake failed
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// Authentication failed (401)
    #[error("authentication failed: invalid credentials")]
    AuthFailed,

    /// Device answered with a non-success status
    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The fetch did not finish in time
    #[error("request timed out after {0} seconds")]
    Timeout(u64),
}

/// Errors raised while reading values out of a fetched page.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Invalid CSS selector
    #[error("invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// Failed to parse numeric value
    #[error("failed to parse number from '{text}': {message}")]
    NumberParse { text: String, message: String },

    /// Embedded JSON document is malformed or has an unexpected shape
    #[error("failed to parse embedded JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of one metric extractor. Either a page could not be fetched or
/// its content could not be read.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),
}

/// InfluxDB storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// InfluxDB client error
    #[error("InfluxDB error: {0}")]
    Client(#[from] influxdb2::RequestError),

    /// Invalid data point
    #[error("invalid data point: {0}")]
    InvalidDataPoint(String),
}

impl ConfigError {
    /// Creates a new environment parse error.
    pub fn env_parse(err: impl std::fmt::Display) -> Self {
        Self::EnvParse(err.to_string())
    }

    /// Creates a new missing configuration error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing(field.into())
    }

    /// Creates a new invalid configuration error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl FetchError {
    /// Creates a request error for the given URL.
    pub fn request(url: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Request {
            url: url.into(),
            message: err.to_string(),
        }
    }

    /// Creates an error from a non-success HTTP status and response body.
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            Self::AuthFailed
        } else {
            Self::Status {
                status: status.as_u16(),
                body,
            }
        }
    }
}

impl ParseError {
    /// Creates an invalid selector error.
    pub fn invalid_selector(selector: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: err.to_string(),
        }
    }

    /// Creates a number parse error.
    pub fn number_parse(text: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::NumberParse {
            text: text.into(),
            message: err.to_string(),
        }
    }
}
