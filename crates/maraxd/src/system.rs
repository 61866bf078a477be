//! Host system statistics.

use std::path::Path;

use anyhow::{Context, Result};
use marax_influx::{MetricBatch, MetricSink};
use sysinfo::{Disks, System};
use tracing::debug;

use crate::reporter::Reporter;

const MEASUREMENT: &str = "system";

/// Samples load averages, root-filesystem usage and memory usage.
///
/// Host sampling carries none of the serial path's failure handling: if
/// the OS cannot be sampled (no root mount visible), the cycle fails.
pub struct SystemStatsReporter {
    sys: System,
}

impl SystemStatsReporter {
    /// New reporter with its own refresh state.
    #[must_use]
    pub fn new() -> Self {
        Self { sys: System::new() }
    }

    fn sample(&mut self) -> Result<MetricBatch> {
        let mut batch = MetricBatch::new(MEASUREMENT);

        let load = System::load_average();
        batch.insert("load_1", load.one);
        batch.insert("load_5", load.five);
        batch.insert("load_15", load.fifteen);

        let disks = Disks::new_with_refreshed_list();
        let root = disks
            .list()
            .iter()
            .find(|disk| disk.mount_point() == Path::new("/"))
            .context("no disk mounted at /")?;
        let total = root.total_space();
        let free = root.available_space();
        let used = total.saturating_sub(free);
        batch.insert("disk_percent", ratio_percent(used, used + free));
        batch.insert("disk_free", free);
        batch.insert("disk_used", used);

        self.sys.refresh_memory();
        let mem_total = self.sys.total_memory();
        let mem_unavailable = mem_total.saturating_sub(self.sys.available_memory());
        batch.insert("mem_percent", ratio_percent(mem_unavailable, mem_total));
        batch.insert("mem_free", self.sys.free_memory());
        batch.insert("mem_used", self.sys.used_memory());

        Ok(batch)
    }
}

impl Default for SystemStatsReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for SystemStatsReporter {
    fn name(&self) -> &'static str {
        MEASUREMENT
    }

    fn collect_and_report(&mut self, sink: &dyn MetricSink) -> Result<()> {
        let batch = self.sample()?;
        debug!(measurement = MEASUREMENT, fields = ?batch.fields(), "sending");
        sink.write(&batch)?;
        Ok(())
    }
}

/// `part / whole` as a percentage, 0.0 when the denominator is zero.
#[allow(clippy::cast_precision_loss, reason = "metric precision is plenty")]
fn ratio_percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
