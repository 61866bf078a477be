//! maraxd: host stats and Lelit Mara X telemetry → InfluxDB.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use marax_influx::InfluxSink;
use marax_serial::{SerialSource, find_serial_device};
use marax_usb_reset::ResetWatchdog;
use maraxd::config::DaemonConfig;
use maraxd::daemon;
use maraxd::lelit::SerialTelemetryReporter;
use maraxd::reporter::Reporter;
use maraxd::system::SystemStatsReporter;

/// Forwards host stats and Lelit Mara X telemetry to InfluxDB.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the configuration file.
    #[arg(long, default_value = maraxd::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("maraxd=debug,info")),
        )
        .init();

    let args = Args::parse();
    info!(version = env!("CARGO_PKG_VERSION"), "starting maraxd");

    let config = DaemonConfig::load(&args.config)?;

    let sink =
        InfluxSink::new(config.influx.clone()).context("failed to build the influxdb client")?;

    let path = find_serial_device(&config.serial.device_dir, &config.serial.name_fragment)
        .context("serial device discovery failed")?;
    info!(path = %path.display(), baud = config.serial.baud, "opening serial port");
    let source = SerialSource::open(&path, config.serial.baud)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let watchdog =
        ResetWatchdog::with_cooldown(config.watchdog.driver.clone(), config.watchdog.cooldown());

    let reporters: Vec<Box<dyn Reporter>> = vec![
        Box::new(SystemStatsReporter::new()),
        Box::new(SerialTelemetryReporter::new(source, watchdog)),
    ];

    info!(
        interval_secs = config.poll_interval_secs,
        "entering poll loop"
    );
    daemon::run(reporters, &sink, config.poll_interval())
}
