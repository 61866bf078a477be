//! Typed telemetry records decoded from the machine's status line.

use std::fmt;

/// Boiler priority mode, encoded as the first character of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineMode {
    /// `C`: coffee/brew priority.
    BrewPriority,
    /// `V`: steam priority.
    SteamPriority,
}

impl MachineMode {
    /// Decode the single-character mode code.
    ///
    /// Returns `None` for anything but the two known codes.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'C' => Some(Self::BrewPriority),
            'V' => Some(Self::SteamPriority),
            _ => None,
        }
    }

    /// The variant name as reported upstream.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BrewPriority => "BrewPriority",
            Self::SteamPriority => "SteamPriority",
        }
    }
}

impl fmt::Display for MachineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully decoded status sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Telemetry {
    /// Boiler priority mode.
    pub mode: MachineMode,
    /// Firmware version string following the mode character (may be empty).
    pub version: String,
    /// Steam boiler temperature, °C.
    pub actual_temp: i32,
    /// Steam boiler target temperature, °C.
    pub target_temp: i32,
    /// Heat exchanger temperature, °C.
    pub actual_hx_temp: i32,
    /// Fast-heating countdown, seconds.
    pub countdown: i32,
    /// Whether the heating element is currently powered.
    pub heating_element_on: bool,
}

/// Outcome of parsing one status line.
///
/// Anything malformed, from a wrong token count to a bad integer, folds
/// into [`TelemetryRecord::Error`]; downstream code cannot and should
/// not distinguish the failure cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelemetryRecord {
    /// A fully decoded sample.
    Valid(Telemetry),
    /// The line could not be decoded.
    Error,
}

impl TelemetryRecord {
    /// Whether this record carries a decoded sample.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_codes() {
        assert_eq!(MachineMode::from_code('C'), Some(MachineMode::BrewPriority));
        assert_eq!(MachineMode::from_code('V'), Some(MachineMode::SteamPriority));
        assert_eq!(MachineMode::from_code('X'), None);
        assert_eq!(MachineMode::from_code('c'), None);
    }

    #[test]
    fn mode_names() {
        assert_eq!(MachineMode::BrewPriority.as_str(), "BrewPriority");
        assert_eq!(MachineMode::SteamPriority.to_string(), "SteamPriority");
    }
}
