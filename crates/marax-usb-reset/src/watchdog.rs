//! The cooldown-gated reset watchdog.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::error::UsbResetError;
use crate::lsusb::{LsusbEnumerator, UsbEnumerator, UsbLocation};
use crate::reset::{BusReset, UsbdevfsReset};

/// Minimum elapsed time between two successful resets.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(60 * 60);

/// Periodically resets the serial adapter's USB device to recover from
/// bus lockups.
///
/// Invariants:
/// - a reset is attempted only when no successful reset is recorded or
///   the cooldown has elapsed since the last one;
/// - only a *successful* reset arms the cooldown; after a failed
///   attempt the next cycle tries again;
/// - no failure escapes [`ResetWatchdog::reset_if_needed`].
///
/// Recovery is heuristic: nothing verifies that the reset unwedged the
/// link. The next serial read simply proceeds and may itself fail.
pub struct ResetWatchdog {
    driver: String,
    cooldown: Duration,
    last_reset_at: Option<Instant>,
    enumerator: Box<dyn UsbEnumerator>,
    reset: Box<dyn BusReset>,
}

impl fmt::Debug for ResetWatchdog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetWatchdog")
            .field("driver", &self.driver)
            .field("cooldown", &self.cooldown)
            .field("last_reset_at", &self.last_reset_at)
            .finish_non_exhaustive()
    }
}

impl ResetWatchdog {
    /// Watchdog over `lsusb` and usbdevfs with the default cooldown.
    #[must_use]
    pub fn new(driver: impl Into<String>) -> Self {
        Self::with_cooldown(driver, DEFAULT_COOLDOWN)
    }

    /// Watchdog over `lsusb` and usbdevfs with an explicit cooldown.
    #[must_use]
    pub fn with_cooldown(driver: impl Into<String>, cooldown: Duration) -> Self {
        Self::with_backend(
            driver,
            cooldown,
            Box::new(LsusbEnumerator),
            Box::new(UsbdevfsReset::new()),
        )
    }

    /// Watchdog with an explicit backend, for tests and exotic setups.
    #[must_use]
    pub fn with_backend(
        driver: impl Into<String>,
        cooldown: Duration,
        enumerator: Box<dyn UsbEnumerator>,
        reset: Box<dyn BusReset>,
    ) -> Self {
        Self {
            driver: driver.into(),
            cooldown,
            last_reset_at: None,
            enumerator,
            reset,
        }
    }

    /// When the last successful reset happened, if ever.
    #[must_use]
    pub fn last_reset_at(&self) -> Option<Instant> {
        self.last_reset_at
    }

    /// Reset the device if the cooldown allows it.
    ///
    /// Called at the top of every poll cycle. Failures are logged and
    /// swallowed; they leave the cooldown state untouched.
    pub fn reset_if_needed(&mut self, now: Instant) {
        if !self.is_due(now) {
            return;
        }
        info!(driver = %self.driver, "resetting usb device");
        match self.try_reset() {
            Ok(location) => {
                self.last_reset_at = Some(now);
                info!(%location, "usb reset completed");
            }
            Err(error) => {
                warn!(driver = %self.driver, %error, "usb reset failed");
            }
        }
    }

    fn is_due(&self, now: Instant) -> bool {
        self.last_reset_at
            .is_none_or(|at| now.duration_since(at) > self.cooldown)
    }

    fn try_reset(&self) -> Result<UsbLocation, UsbResetError> {
        let location = self.enumerator.locate(&self.driver)?;
        self.reset.reset(&location)?;
        Ok(location)
    }
}
