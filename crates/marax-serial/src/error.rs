//! Error types for serial discovery and reads.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while discovering or reading the serial device.
///
/// [`SerialError::Decode`] is the only per-cycle recoverable case: the
/// reporter folds it into an error record. Everything else either aborts
/// startup (`NoDevice`, `Open`) or the current cycle (`Io`).
#[derive(Debug, Error)]
pub enum SerialError {
    /// No entry in the scanned directory matched the name fragment.
    #[error("no serial device matching \"{fragment}\" under {}", .dir.display())]
    NoDevice {
        /// Directory that was scanned.
        dir: PathBuf,
        /// Fragment the file name had to contain.
        fragment: String,
    },

    /// The port could not be opened.
    #[error("failed to open serial port: {0}")]
    Open(#[from] serialport::Error),

    /// The link failed mid-read.
    #[error("serial read failed: {0}")]
    Io(#[from] io::Error),

    /// The frame was not valid UTF-8.
    #[error("frame is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}
