//! Metric batches and the InfluxDB sink.
//!
//! Reporters build one [`MetricBatch`] per poll cycle (a measurement
//! name plus a typed field set) and hand it to a [`MetricSink`]. The
//! stock sink is [`InfluxSink`], a blocking client for the InfluxDB v1
//! `/write` endpoint. There is deliberately no buffering and no retry:
//! a failed write surfaces to the caller and the batch is gone, exactly
//! one write happens per batch.

pub mod batch;
pub mod field;
pub mod influx;
pub mod sink;

pub use batch::MetricBatch;
pub use field::FieldValue;
pub use influx::{InfluxConfig, InfluxSink};
pub use sink::{MetricSink, SinkError};
