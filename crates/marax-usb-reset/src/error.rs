//! Error types for USB enumeration and reset operations.

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can occur while locating or resetting the USB device.
///
/// The watchdog treats every variant the same way: log and swallow.
/// The distinction exists for the logs, not for control flow.
#[derive(Debug, Error)]
pub enum UsbResetError {
    /// The enumeration tool could not be run at all.
    #[error("failed to run {tool}: {source}")]
    Enumerate {
        /// Name of the tool that was invoked.
        tool: &'static str,
        /// The spawn failure.
        #[source]
        source: io::Error,
    },

    /// The enumeration tool ran but exited unsuccessfully.
    #[error("{tool} exited with {status}")]
    EnumerateStatus {
        /// Name of the tool that was invoked.
        tool: &'static str,
        /// Its exit status.
        status: ExitStatus,
    },

    /// No listed device mentioned the driver name.
    #[error("no usb device matching \"{0}\"")]
    DriverNotFound(String),

    /// A matching listing line did not have the expected token layout.
    #[error("unparsable usb listing line: {0:?}")]
    MalformedListing(String),

    /// The bus device node could not be opened for writing.
    #[error("failed to open {path}: {source}")]
    OpenNode {
        /// Path of the device node.
        path: String,
        /// The open failure.
        #[source]
        source: io::Error,
    },

    /// The reset ioctl itself failed.
    #[error("usb reset ioctl failed: {0}")]
    Ioctl(#[source] io::Error),
}
