//! The poll loop.

use std::thread;
use std::time::Duration;

use marax_influx::MetricSink;
use tracing::error;

use crate::reporter::Reporter;

/// Run every reporter once, in order.
///
/// A failing reporter loses only its own cycle; the remaining reporters
/// still run, and so does the next cycle.
pub fn run_cycle(reporters: &mut [Box<dyn Reporter>], sink: &dyn MetricSink) {
    for reporter in reporters {
        if let Err(error) = reporter.collect_and_report(sink) {
            error!(reporter = reporter.name(), "cycle failed: {error:#}");
        }
    }
}

/// Poll forever at a fixed cadence.
///
/// Single-threaded and sequential: each reporter runs to completion
/// before the next starts, and the process owns every resource touched
/// here. Termination is the only way out.
pub fn run(mut reporters: Vec<Box<dyn Reporter>>, sink: &dyn MetricSink, interval: Duration) -> ! {
    loop {
        run_cycle(&mut reporters, sink);
        thread::sleep(interval);
    }
}
