//! Lelit Mara X serial status-line protocol.
//!
//! The machine's service port emits one CRLF-terminated, comma-separated
//! status line per second:
//!
//! ```text
//! C1.06,116,127,94,0026,0\r\n
//! ```
//!
//! Fields, in order:
//! - mode character + firmware version (`C` = brew priority, `V` = steam
//!   priority, immediately followed by the version string)
//! - steam boiler temperature, °C
//! - steam boiler target temperature, °C
//! - heat exchanger temperature, °C
//! - fast-heating countdown, seconds
//! - heating element state (`0`/`1`)
//!
//! This crate is intentionally I/O-free: it turns already-read text into
//! typed records and nothing else, so it can be tested without hardware.
//! Parsing is all-or-nothing: any malformation collapses into the single
//! uniform [`TelemetryRecord::Error`] outcome, never a partial record.
//!
//! # Example
//!
//! ```
//! use marax_protocol::{MachineMode, TelemetryRecord, parse_line};
//!
//! match parse_line("C1.06,93,95,88,0,1\r\n") {
//!     TelemetryRecord::Valid(t) => {
//!         assert_eq!(t.mode, MachineMode::BrewPriority);
//!         assert_eq!(t.version, "1.06");
//!         assert!(t.heating_element_on);
//!     }
//!     TelemetryRecord::Error => panic!("well-formed line"),
//! }
//! ```

pub mod parse;
pub mod record;

pub use parse::{parse, parse_line, split_frame};
pub use record::{MachineMode, Telemetry, TelemetryRecord};
