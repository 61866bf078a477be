//! The reporter capability.

use anyhow::Result;
use marax_influx::MetricSink;

/// One metrics producer, polled every cycle.
///
/// Implementations collect their sample, build exactly one batch and
/// write it to `sink`. Returning an error abandons only the current
/// cycle; the loop logs it and moves on.
pub trait Reporter {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Run one full collect-and-report cycle.
    fn collect_and_report(&mut self, sink: &dyn MetricSink) -> Result<()>;
}
