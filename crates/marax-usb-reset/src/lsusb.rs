//! Locating the adapter on the USB bus via `lsusb`.

use std::fmt;
use std::process::Command;

use tracing::debug;

use crate::error::UsbResetError;

const LSUSB: &str = "lsusb";

/// Bus and device identifiers as printed by the enumeration tool
/// (zero-padded decimal strings, e.g. bus `"001"`, device `"004"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsbLocation {
    /// Bus number.
    pub bus: String,
    /// Device number on that bus.
    pub device: String,
}

impl fmt::Display for UsbLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bus {} device {}", self.bus, self.device)
    }
}

/// Resolves a driver-name substring to a bus location.
///
/// The stock implementation shells out to `lsusb`. The trait exists so
/// the watchdog's cooldown logic can be exercised without a USB stack,
/// and so the positional listing parse can later give way to a proper
/// enumeration API without touching the watchdog.
pub trait UsbEnumerator {
    /// Find the first device whose listing line mentions `driver`.
    fn locate(&self, driver: &str) -> Result<UsbLocation, UsbResetError>;
}

/// `lsusb`-backed enumerator.
#[derive(Debug, Default)]
pub struct LsusbEnumerator;

impl UsbEnumerator for LsusbEnumerator {
    fn locate(&self, driver: &str) -> Result<UsbLocation, UsbResetError> {
        let output = Command::new(LSUSB)
            .output()
            .map_err(|source| UsbResetError::Enumerate {
                tool: LSUSB,
                source,
            })?;
        if !output.status.success() {
            return Err(UsbResetError::EnumerateStatus {
                tool: LSUSB,
                status: output.status,
            });
        }
        locate_in_listing(&String::from_utf8_lossy(&output.stdout), driver)
    }
}

/// Scan a full `lsusb` listing for the first line mentioning `driver`
/// (case-insensitive) and extract its bus location.
pub fn locate_in_listing(listing: &str, driver: &str) -> Result<UsbLocation, UsbResetError> {
    let needle = driver.to_ascii_lowercase();
    let line = listing
        .lines()
        .find(|line| line.to_ascii_lowercase().contains(&needle))
        .ok_or_else(|| UsbResetError::DriverNotFound(driver.to_owned()))?;
    let location =
        parse_listing_line(line).ok_or_else(|| UsbResetError::MalformedListing(line.to_owned()))?;
    debug!(%location, driver, "located usb device");
    Ok(location)
}

/// Positional extraction from one listing line:
///
/// ```text
/// Bus 001 Device 004: ID 1a86:7523 QinHeng Electronics CH340 serial converter
/// ```
///
/// Token 1 is the bus, token 3 minus its trailing `:` the device number.
fn parse_listing_line(line: &str) -> Option<UsbLocation> {
    let mut tokens = line.split_whitespace();
    let bus = tokens.nth(1)?.to_owned();
    let device = tokens.nth(1)?.trim_end_matches(':').to_owned();
    Some(UsbLocation { bus, device })
}
