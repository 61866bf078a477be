//! The serial line source.

use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Duration;

use serialport::SerialPort;
use tracing::trace;

use crate::error::SerialError;

/// Granularity of the underlying driver timeout. Reads that time out are
/// retried, so the effective wait for a frame is unbounded; this only
/// bounds how long a single wait on the driver lasts.
const POLL_TIMEOUT: Duration = Duration::from_secs(10);

/// Something that yields one decoded telemetry line per call.
pub trait LineSource {
    /// Block until one newline-terminated frame is available, then decode
    /// it as UTF-8. The returned line still carries its terminator.
    fn read_line(&mut self) -> Result<String, SerialError>;
}

/// The open serial connection to the machine.
///
/// Opened once at startup against the discovered device node and held
/// for the process lifetime.
pub struct SerialSource {
    reader: BufReader<Box<dyn SerialPort>>,
}

impl SerialSource {
    /// Open `path` at `baud`.
    pub fn open(path: &Path, baud: u32) -> Result<Self, SerialError> {
        let port = serialport::new(path.to_string_lossy(), baud)
            .timeout(POLL_TIMEOUT)
            .open()?;
        Ok(Self {
            reader: BufReader::new(port),
        })
    }
}

impl LineSource for SerialSource {
    fn read_line(&mut self) -> Result<String, SerialError> {
        let frame = read_frame(&mut self.reader)?;
        let line = String::from_utf8(frame)?;
        trace!(len = line.len(), "read serial frame");
        Ok(line)
    }
}

/// Accumulate bytes until a `\n` arrives.
///
/// Driver-level timeouts are treated as "keep waiting": a silent machine
/// parks the poll loop here rather than producing bogus cycles. End of
/// stream before a terminator means the device went away.
fn read_frame<R: BufRead>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut frame = Vec::new();
    loop {
        match reader.read_until(b'\n', &mut frame) {
            Ok(_) if frame.ends_with(b"\n") => return Ok(frame),
            Ok(_) => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "serial stream ended mid-frame",
                ));
            }
            Err(e) if matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::Interrupted) => {}
            Err(e) => return Err(e),
        }
    }
}
