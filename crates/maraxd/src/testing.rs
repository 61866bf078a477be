//! Hand-rolled fakes shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

use marax_influx::{MetricBatch, MetricSink, SinkError};
use marax_serial::{LineSource, SerialError};
use marax_usb_reset::{BusReset, ResetWatchdog, UsbEnumerator, UsbLocation, UsbResetError};

/// Sink that remembers every batch it was handed.
#[derive(Default)]
pub struct RecordingSink {
    written: RefCell<Vec<MetricBatch>>,
}

impl RecordingSink {
    pub fn batches(&self) -> Vec<MetricBatch> {
        self.written.borrow().clone()
    }
}

impl MetricSink for RecordingSink {
    fn write(&self, batch: &MetricBatch) -> Result<(), SinkError> {
        self.written.borrow_mut().push(batch.clone());
        Ok(())
    }
}

/// Line source replaying a fixed script of read outcomes.
pub struct ScriptedSource {
    lines: VecDeque<Result<String, SerialError>>,
}

impl ScriptedSource {
    pub fn new(lines: Vec<Result<String, SerialError>>) -> Self {
        Self {
            lines: lines.into_iter().collect(),
        }
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self) -> Result<String, SerialError> {
        self.lines.pop_front().unwrap_or_else(|| {
            Err(SerialError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "script exhausted",
            )))
        })
    }
}

struct NoUsbStack;

impl UsbEnumerator for NoUsbStack {
    fn locate(&self, driver: &str) -> Result<UsbLocation, UsbResetError> {
        Err(UsbResetError::DriverNotFound(driver.to_owned()))
    }
}

impl BusReset for NoUsbStack {
    fn reset(&self, _location: &UsbLocation) -> Result<(), UsbResetError> {
        Ok(())
    }
}

/// Watchdog whose enumeration always fails, so ticks are harmless no-ops
/// (and double as coverage that a failing watchdog never breaks a cycle).
pub fn idle_watchdog() -> ResetWatchdog {
    ResetWatchdog::with_backend(
        "none",
        Duration::from_secs(3600),
        Box::new(NoUsbStack),
        Box::new(NoUsbStack),
    )
}
