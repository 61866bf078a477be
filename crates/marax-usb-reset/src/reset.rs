//! The usbdevfs bus reset primitive.

use std::fs::OpenOptions;
use std::io;
use std::os::fd::AsRawFd;
use std::path::PathBuf;

use tracing::debug;

use crate::error::UsbResetError;
use crate::lsusb::UsbLocation;

/// `USBDEVFS_RESET` ioctl request code.
const USBDEVFS_RESET: libc::c_ulong = 21780;

/// Issues a hardware reset against a located device.
pub trait BusReset {
    /// Force the OS to re-enumerate the device at `location`.
    fn reset(&self, location: &UsbLocation) -> Result<(), UsbResetError>;
}

/// Resets through the usbdevfs device node (`/dev/bus/usb/BBB/DDD`).
#[derive(Debug)]
pub struct UsbdevfsReset {
    bus_root: PathBuf,
}

impl UsbdevfsReset {
    /// Use the standard `/dev/bus/usb` tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bus_root: PathBuf::from("/dev/bus/usb"),
        }
    }
}

impl Default for UsbdevfsReset {
    fn default() -> Self {
        Self::new()
    }
}

impl BusReset for UsbdevfsReset {
    fn reset(&self, location: &UsbLocation) -> Result<(), UsbResetError> {
        let path = self.bus_root.join(&location.bus).join(&location.device);
        let node = OpenOptions::new()
            .write(true)
            .open(&path)
            .map_err(|source| UsbResetError::OpenNode {
                path: path.display().to_string(),
                source,
            })?;
        // SAFETY: USBDEVFS_RESET takes no argument and `node` keeps the fd
        // open until after the call returns.
        let rc = unsafe { libc::ioctl(node.as_raw_fd(), USBDEVFS_RESET) };
        if rc < 0 {
            return Err(UsbResetError::Ioctl(io::Error::last_os_error()));
        }
        debug!(%location, "usbdevfs reset issued");
        Ok(())
    }
}
