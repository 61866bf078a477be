//! Serial device discovery.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SerialError;

/// Find the serial device node to talk to.
///
/// Scans `dir` once and returns the first entry whose file name contains
/// `fragment`. Directory-listing order decides ties and is not guaranteed
/// stable; with a single adapter plugged in the match is exact. No match
/// means the adapter is absent and the caller should treat that as fatal
/// at startup.
pub fn find_serial_device(dir: &Path, fragment: &str) -> Result<PathBuf, SerialError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().contains(fragment) {
            let path = entry.path();
            debug!(path = %path.display(), "discovered serial device");
            return Ok(path);
        }
    }
    Err(SerialError::NoDevice {
        dir: dir.to_owned(),
        fragment: fragment.to_owned(),
    })
}
