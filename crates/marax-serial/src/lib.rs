//! Serial transport for the machine's telemetry stream.
//!
//! Two concerns live here, both resolved once at startup and then owned
//! for the process lifetime:
//!
//! - [`find_serial_device`]: scan a device directory for the USB serial
//!   adapter's node. No match is a configuration error, not something to
//!   retry per cycle.
//! - [`SerialSource`]: the open port, read one CRLF-terminated frame at a
//!   time and decoded to text. The [`LineSource`] trait is the seam that
//!   lets reporters be tested without hardware.

pub mod discover;
pub mod error;
pub mod source;

pub use discover::find_serial_device;
pub use error::SerialError;
pub use source::{LineSource, SerialSource};
