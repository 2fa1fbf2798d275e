//! Error types for report aggregation.

use thiserror::Error;

/// Failures raised while aggregating a report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    /// A source URL could not be parsed or carries no host.
    #[error("malformed source URL `{url}`: {reason}")]
    MalformedUrl { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, AggregationError>;
