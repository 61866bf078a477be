//! Daemon configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use marax_influx::InfluxConfig;
use serde::Deserialize;

/// Location probed when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/maraxd/config.json";

/// Top-level daemon configuration.
///
/// The `influx` section is mandatory: the daemon is pointless without a
/// sink and must not start half-configured. Everything else defaults to
/// the hardware this daemon was built around.
#[derive(Debug, Clone, Deserialize)]
pub struct DaemonConfig {
    /// Metric sink connection parameters.
    pub influx: InfluxConfig,
    /// Serial link settings.
    #[serde(default)]
    pub serial: SerialConfig,
    /// USB reset watchdog settings.
    #[serde(default)]
    pub watchdog: WatchdogConfig,
    /// Seconds slept between poll cycles.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

/// Serial link settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SerialConfig {
    /// Directory scanned for the device node.
    pub device_dir: PathBuf,
    /// Substring the device file name must contain.
    pub name_fragment: String,
    /// Line speed of the machine's service port.
    pub baud: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            device_dir: PathBuf::from("/dev"),
            name_fragment: "ttyUSB".to_owned(),
            baud: 9600,
        }
    }
}

/// USB reset watchdog settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WatchdogConfig {
    /// Driver-name substring used to find the adapter in the USB listing.
    pub driver: String,
    /// Minimum seconds between two successful resets.
    pub cooldown_secs: u64,
}

impl WatchdogConfig {
    /// Cooldown as a duration.
    #[must_use]
    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self {
            driver: "ch340".to_owned(),
            cooldown_secs: 60 * 60,
        }
    }
}

fn default_poll_interval_secs() -> u64 {
    1
}

impl DaemonConfig {
    /// Load the configuration file.
    ///
    /// Absence or malformation is fatal at startup; there is no default
    /// sink to fall back to.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Poll cadence as a duration.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const MINIMAL: &str = r#"{
        "influx": {
            "host": "127.0.0.1",
            "port": 8086,
            "username": "grafana",
            "password": "secret",
            "database": "home"
        }
    }"#;

    fn write_config(contents: &str) -> Result<tempfile::NamedTempFile, Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(contents.as_bytes())?;
        Ok(file)
    }

    #[test]
    fn minimal_config_gets_defaults() -> TestResult {
        let file = write_config(MINIMAL)?;
        let config = DaemonConfig::load(file.path())?;

        assert_eq!(config.influx.database, "home");
        assert_eq!(config.serial.device_dir, PathBuf::from("/dev"));
        assert_eq!(config.serial.name_fragment, "ttyUSB");
        assert_eq!(config.serial.baud, 9600);
        assert_eq!(config.watchdog.driver, "ch340");
        assert_eq!(config.watchdog.cooldown(), Duration::from_secs(3600));
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
        Ok(())
    }

    #[test]
    fn sections_can_be_overridden() -> TestResult {
        let file = write_config(
            r#"{
                "influx": {
                    "host": "influx.lan",
                    "port": 18086,
                    "username": "u",
                    "password": "p",
                    "database": "espresso"
                },
                "serial": { "name_fragment": "ttyACM", "baud": 115200 },
                "watchdog": { "driver": "ftdi", "cooldown_secs": 600 },
                "poll_interval_secs": 5
            }"#,
        )?;
        let config = DaemonConfig::load(file.path())?;

        assert_eq!(config.influx.port, 18086);
        assert_eq!(config.serial.name_fragment, "ttyACM");
        assert_eq!(config.serial.baud, 115_200);
        assert_eq!(config.serial.device_dir, PathBuf::from("/dev"));
        assert_eq!(config.watchdog.driver, "ftdi");
        assert_eq!(config.watchdog.cooldown(), Duration::from_secs(600));
        assert_eq!(config.poll_interval(), Duration::from_secs(5));
        Ok(())
    }

    #[test]
    fn missing_file_is_fatal() {
        let result = DaemonConfig::load(Path::new("/nonexistent/maraxd.json"));
        assert!(result.is_err());
    }

    #[test]
    fn malformed_json_is_fatal() -> TestResult {
        let file = write_config("{ not json }")?;
        assert!(DaemonConfig::load(file.path()).is_err());
        Ok(())
    }

    #[test]
    fn missing_influx_section_is_fatal() -> TestResult {
        let file = write_config(r#"{ "poll_interval_secs": 1 }"#)?;
        assert!(DaemonConfig::load(file.path()).is_err());
        Ok(())
    }
}
