//! Convenience re-exports.

pub use crate::error::UsbResetError;
pub use crate::lsusb::{LsusbEnumerator, UsbEnumerator, UsbLocation};
pub use crate::reset::{BusReset, UsbdevfsReset};
pub use crate::watchdog::{DEFAULT_COOLDOWN, ResetWatchdog};
