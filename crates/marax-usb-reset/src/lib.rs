//! USB bus reset watchdog for a wedged serial adapter.
//!
//! Cheap USB serial adapters occasionally wedge the whole bus; the only
//! reliable remedy short of replugging is a `USBDEVFS_RESET` against the
//! device node, which forces the OS to re-enumerate the device. This
//! crate provides:
//!
//! - [`UsbEnumerator`] / [`LsusbEnumerator`]: resolve a driver-name
//!   substring to a `(bus, device)` location by parsing `lsusb` output.
//!   Positional and brittle by design; isolated behind the trait so it
//!   can be swapped for a proper enumeration API later.
//! - [`BusReset`] / [`UsbdevfsReset`]: the reset primitive itself.
//! - [`ResetWatchdog`]: ties both together behind a cooldown so resets
//!   are rate-limited. Every failure is logged and swallowed: recovery
//!   is best-effort and must never take the poll loop down with it.

pub mod error;
pub mod lsusb;
pub mod prelude;
pub mod reset;
pub mod watchdog;

pub use error::UsbResetError;
pub use lsusb::{LsusbEnumerator, UsbEnumerator, UsbLocation};
pub use reset::{BusReset, UsbdevfsReset};
pub use watchdog::{DEFAULT_COOLDOWN, ResetWatchdog};
