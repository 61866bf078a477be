//! The machine telemetry reporter.

use std::time::Instant;

use anyhow::Result;
use marax_influx::{MetricBatch, MetricSink};
use marax_protocol::{TelemetryRecord, parse_line};
use marax_serial::{LineSource, SerialError};
use marax_usb_reset::ResetWatchdog;
use tracing::{debug, warn};

use crate::reporter::Reporter;

const MEASUREMENT: &str = "lelit";

/// Polls the machine: watchdog tick, one line, one batch.
///
/// Decode and parse failures degrade to the `{"error": 1}` batch rather
/// than aborting the cycle, so a flaky line shows up in the database as
/// an error spike instead of taking the daemon down. Transport-level
/// serial failures do propagate, as do sink failures.
pub struct SerialTelemetryReporter<S> {
    source: S,
    watchdog: ResetWatchdog,
}

impl<S: LineSource> SerialTelemetryReporter<S> {
    /// Reporter over an open line source and a configured watchdog.
    pub fn new(source: S, watchdog: ResetWatchdog) -> Self {
        Self { source, watchdog }
    }

    fn read_record(&mut self) -> Result<TelemetryRecord, SerialError> {
        match self.source.read_line() {
            Ok(line) => Ok(parse_line(&line)),
            Err(SerialError::Decode(error)) => {
                warn!(%error, "undecodable serial frame");
                Ok(TelemetryRecord::Error)
            }
            Err(other) => Err(other),
        }
    }
}

impl<S: LineSource> Reporter for SerialTelemetryReporter<S> {
    fn name(&self) -> &'static str {
        MEASUREMENT
    }

    fn collect_and_report(&mut self, sink: &dyn MetricSink) -> Result<()> {
        self.watchdog.reset_if_needed(Instant::now());

        let record = self.read_record()?;
        let batch = to_batch(&record);
        debug!(measurement = MEASUREMENT, fields = ?batch.fields(), "sending");
        sink.write(&batch)?;
        Ok(())
    }
}

/// Flatten a record into the reported field set.
fn to_batch(record: &TelemetryRecord) -> MetricBatch {
    let mut batch = MetricBatch::new(MEASUREMENT);
    match record {
        TelemetryRecord::Valid(t) => {
            batch.insert("mode", t.mode.as_str());
            batch.insert("version", t.version.clone());
            batch.insert("actual_temp", t.actual_temp);
            batch.insert("target_temp", t.target_temp);
            batch.insert("actual_hx_temp", t.actual_hx_temp);
            batch.insert("countdown", t.countdown);
            batch.insert("heating_element_on", t.heating_element_on);
        }
        TelemetryRecord::Error => {
            batch.insert("error", 1i64);
        }
    }
    batch
}
