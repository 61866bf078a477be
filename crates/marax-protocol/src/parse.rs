//! Status-line parsing.

use crate::record::{MachineMode, Telemetry, TelemetryRecord};

/// Number of comma-separated tokens in a well-formed status line.
const FRAME_TOKENS: usize = 6;

/// Split a raw status line into its comma-separated tokens.
///
/// The split happens first; the CRLF terminator is then stripped from the
/// final token only. The order matters: a carriage return that ends up
/// inside an earlier token survives and fails integer parsing later,
/// which is exactly what the device's framing contract calls for.
#[must_use]
pub fn split_frame(line: &str) -> Vec<String> {
    let mut tokens: Vec<String> = line.split(',').map(str::to_owned).collect();
    if let Some(last) = tokens.last_mut() {
        *last = last.replace("\r\n", "");
    }
    tokens
}

/// Parse the comma-split tokens of one status line.
///
/// Token 0 is the mode character immediately followed by the firmware
/// version; tokens 1..=5 are five integers (temperatures, countdown,
/// heating element state). Exactly six tokens are required and integers
/// are parsed strictly; the heating element state coerces to a boolean
/// via nonzero→true. Anything else yields the uniform
/// [`TelemetryRecord::Error`]; this function never fails or panics.
#[must_use]
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> TelemetryRecord {
    parse_valid(tokens).map_or(TelemetryRecord::Error, TelemetryRecord::Valid)
}

/// Split and parse a raw line in one go.
#[must_use]
pub fn parse_line(line: &str) -> TelemetryRecord {
    parse(&split_frame(line))
}

fn parse_valid<S: AsRef<str>>(tokens: &[S]) -> Option<Telemetry> {
    if tokens.len() != FRAME_TOKENS {
        return None;
    }

    let mut chars = tokens.first()?.as_ref().chars();
    let mode = MachineMode::from_code(chars.next()?)?;
    let version = chars.as_str().to_owned();

    let mut numbers = tokens[1..]
        .iter()
        .map(|token| token.as_ref().parse::<i32>().ok());
    let actual_temp = numbers.next()??;
    let target_temp = numbers.next()??;
    let actual_hx_temp = numbers.next()??;
    let countdown = numbers.next()??;
    let heating_element_state = numbers.next()??;

    Some(Telemetry {
        mode,
        version,
        actual_temp,
        target_temp,
        actual_hx_temp,
        countdown,
        heating_element_on: heating_element_state != 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn expect_valid(line: &str) -> Result<Telemetry, Box<dyn std::error::Error>> {
        match parse_line(line) {
            TelemetryRecord::Valid(t) => Ok(t),
            TelemetryRecord::Error => Err(format!("line {line:?} must parse").into()),
        }
    }

    #[test]
    fn brew_priority_line_round_trips() -> TestResult {
        let t = expect_valid("C1.0,91,95,90,30,1\r\n")?;
        assert_eq!(t.mode, MachineMode::BrewPriority);
        assert_eq!(t.version, "1.0");
        assert_eq!(t.actual_temp, 91);
        assert_eq!(t.target_temp, 95);
        assert_eq!(t.actual_hx_temp, 90);
        assert_eq!(t.countdown, 30);
        assert!(t.heating_element_on);
        Ok(())
    }

    #[test]
    fn steam_priority_line_without_terminator() -> TestResult {
        let t = expect_valid("V2.3,88,90,85,0,0")?;
        assert_eq!(t.mode, MachineMode::SteamPriority);
        assert_eq!(t.version, "2.3");
        assert!(!t.heating_element_on);
        Ok(())
    }

    #[test]
    fn zero_padded_integers_parse() -> TestResult {
        let t = expect_valid("C1.06,116,127,94,0026,0\r\n")?;
        assert_eq!(t.countdown, 26);
        assert!(!t.heating_element_on);
        Ok(())
    }

    #[test]
    fn empty_version_is_valid() -> TestResult {
        let t = expect_valid("C,1,2,3,4,5\r\n")?;
        assert_eq!(t.version, "");
        Ok(())
    }

    #[test]
    fn any_nonzero_heating_state_is_on() -> TestResult {
        let t = expect_valid("C1.0,91,95,90,30,2\r\n")?;
        assert!(t.heating_element_on);
        Ok(())
    }

    #[test]
    fn unknown_mode_character_is_error() {
        assert_eq!(parse_line("X1.0,91,95,90,30,1\r\n"), TelemetryRecord::Error);
        assert_eq!(parse_line("c1.0,91,95,90,30,1\r\n"), TelemetryRecord::Error);
    }

    #[test]
    fn wrong_token_count_is_error() {
        assert_eq!(parse_line("C1.0,91,95,90,30\r\n"), TelemetryRecord::Error);
        assert_eq!(
            parse_line("C1.0,91,95,90,30,1,7\r\n"),
            TelemetryRecord::Error
        );
    }

    #[test]
    fn non_integer_token_is_error() {
        assert_eq!(
            parse_line("C1.0,91,95,ninety,30,1\r\n"),
            TelemetryRecord::Error
        );
        assert_eq!(parse_line("C1.0,91,95,90,30,\r\n"), TelemetryRecord::Error);
    }

    #[test]
    fn bare_lf_terminator_is_error() {
        // Only the CRLF pair is stripped; a lone `\n` stays on the final
        // token and fails strict integer parsing.
        assert_eq!(parse_line("C1.0,91,95,90,30,1\n"), TelemetryRecord::Error);
    }

    #[test]
    fn empty_and_garbage_lines_are_errors() {
        assert_eq!(parse_line(""), TelemetryRecord::Error);
        assert_eq!(parse_line("\r\n"), TelemetryRecord::Error);
        assert_eq!(parse_line("hello world"), TelemetryRecord::Error);
    }

    #[test]
    fn split_happens_before_terminator_strip() {
        assert_eq!(split_frame("a,b\r\n"), vec!["a", "b"]);
        // A CRLF stranded mid-token is not the frame terminator.
        assert_eq!(split_frame("a\r\nb,c"), vec!["a\r\nb", "c"]);
        assert_eq!(split_frame(""), vec![""]);
    }

    proptest! {
        #[test]
        fn well_formed_lines_round_trip(
            brew in any::<bool>(),
            version in "[0-9]\\.[0-9]{1,2}",
            actual in 0i32..200,
            target in 0i32..200,
            hx in 0i32..200,
            countdown in 0i32..10_000,
            heating in 0i32..5,
        ) {
            let code = if brew { 'C' } else { 'V' };
            let line =
                format!("{code}{version},{actual},{target},{hx},{countdown},{heating}\r\n");
            match parse_line(&line) {
                TelemetryRecord::Valid(t) => {
                    prop_assert_eq!(
                        t.mode,
                        if brew { MachineMode::BrewPriority } else { MachineMode::SteamPriority }
                    );
                    prop_assert_eq!(t.version, version);
                    prop_assert_eq!(t.actual_temp, actual);
                    prop_assert_eq!(t.target_temp, target);
                    prop_assert_eq!(t.actual_hx_temp, hx);
                    prop_assert_eq!(t.countdown, countdown);
                    prop_assert_eq!(t.heating_element_on, heating != 0);
                }
                TelemetryRecord::Error => prop_assert!(false, "well-formed line must parse"),
            }
        }

        #[test]
        fn arbitrary_input_never_panics(line in ".*") {
            let record = parse_line(&line);
            prop_assert!(record.is_valid() || record == TelemetryRecord::Error);
        }
    }
}
