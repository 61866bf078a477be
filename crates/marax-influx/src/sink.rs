//! The metric sink boundary.

use thiserror::Error;

use crate::batch::MetricBatch;

/// Where finished batches go.
///
/// Exactly one write per reporter per cycle; implementations neither
/// retry nor buffer, so a failure means that cycle's batch is lost and
/// the caller decides what to log.
pub trait MetricSink {
    /// Write one batch.
    fn write(&self, batch: &MetricBatch) -> Result<(), SinkError>;
}

/// Errors surfaced by a sink write.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Transport-level failure (connect, send, read).
    #[error("influxdb request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("influxdb rejected write: {status}: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body, as far as it could be read.
        body: String,
    },
}
