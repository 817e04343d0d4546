//! Interactive BMI session
//!
//! A session reads weight then height from a [`LineSource`], validates each
//! field before moving on, and produces a [`BmiReport`]. Nothing is written
//! by the session itself; the caller decides how to emit the report.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::bmi::BmiReport;
use crate::errors::{UnknownModeError, ValidationError};
use crate::input::LineSource;
use crate::validation::{validate_height, validate_weight};

/// Session mode selected by the invocation token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SessionMode {
    /// Token `"1"`: read weight and height from the console
    #[default]
    Console,
}

impl SessionMode {
    /// Invocation token for this mode
    pub fn token(&self) -> &'static str {
        match self {
            SessionMode::Console => "1",
        }
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for SessionMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(SessionMode::Console),
            other => Err(UnknownModeError(other.to_string())),
        }
    }
}

impl TryFrom<String> for SessionMode {
    type Error = UnknownModeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SessionMode> for String {
    fn from(mode: SessionMode) -> Self {
        mode.token().to_string()
    }
}

/// Run one session in the given mode
///
/// The height line is not read until the weight line has passed
/// validation. A missing line counts as invalid input for that field.
pub fn run_interactive_session<S>(
    mode: SessionMode,
    input: &mut S,
) -> Result<BmiReport, ValidationError>
where
    S: LineSource + ?Sized,
{
    info!(mode = %mode, "Starting BMI session");

    match mode {
        SessionMode::Console => run_console(input),
    }
}

fn run_console<S>(input: &mut S) -> Result<BmiReport, ValidationError>
where
    S: LineSource + ?Sized,
{
    let weight_kg = read_field(input, validate_weight)?;
    let height_m = read_field(input, validate_height)?;

    let report = BmiReport::from_measurement(weight_kg, height_m);
    debug!(
        weight_kg,
        height_m,
        bmi = report.bmi,
        category = %report.category,
        "BMI computed"
    );

    Ok(report)
}

fn read_field<S>(
    input: &mut S,
    validate: fn(&str) -> Result<f64, ValidationError>,
) -> Result<f64, ValidationError>
where
    S: LineSource + ?Sized,
{
    let line = input.next_line().unwrap_or_default();
    validate(&line).map_err(|e| {
        warn!(field = e.field(), input = %line, "Rejected measurement");
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::BmiCategory;
    use crate::input::ReaderLines;
    use proptest::prelude::*;
    use std::collections::VecDeque;
    use std::io::Cursor;

    fn run(text: &str) -> Result<BmiReport, ValidationError> {
        let mut input = ReaderLines::new(Cursor::new(text.to_string()));
        run_interactive_session(SessionMode::Console, &mut input)
    }

    /// Source that records how many lines were requested
    struct CountingSource {
        lines: VecDeque<String>,
        reads: usize,
    }

    impl LineSource for CountingSource {
        fn next_line(&mut self) -> Option<String> {
            self.reads += 1;
            self.lines.pop_front()
        }
    }

    #[test]
    fn test_mode_tokens() {
        assert_eq!("1".parse::<SessionMode>(), Ok(SessionMode::Console));
        assert_eq!(SessionMode::Console.to_string(), "1");
        assert_eq!(
            "2".parse::<SessionMode>(),
            Err(UnknownModeError("2".to_string()))
        );
    }

    #[test]
    fn test_comma_values() {
        let report = run("95,00\n1,75\n").unwrap();
        assert_eq!(report, run("95.00\n1.75\n").unwrap());
        assert_eq!(report.category, BmiCategory::ObesidadeGrauI);
    }

    #[test]
    fn test_weight_below_minimum() {
        assert_eq!(run("0\n1.75\n"), Err(ValidationError::InvalidWeight));
    }

    #[test]
    fn test_weight_above_maximum() {
        assert_eq!(run("700,01\n1.75\n"), Err(ValidationError::InvalidWeight));
    }

    #[test]
    fn test_weight_not_numeric() {
        assert_eq!(run("100kg\n1.75\n"), Err(ValidationError::InvalidWeight));
    }

    #[test]
    fn test_height_below_minimum() {
        assert_eq!(run("100\n0,19\n"), Err(ValidationError::InvalidHeight));
    }

    #[test]
    fn test_height_above_maximum() {
        assert_eq!(run("100\n2,61\n"), Err(ValidationError::InvalidHeight));
    }

    #[test]
    fn test_height_not_numeric() {
        assert_eq!(run("100\n1,85m\n"), Err(ValidationError::InvalidHeight));
    }

    #[test]
    fn test_weight_error_wins_over_bad_height() {
        assert_eq!(run("0\nnonsense\n"), Err(ValidationError::InvalidWeight));
    }

    #[test]
    fn test_missing_lines() {
        assert_eq!(run(""), Err(ValidationError::InvalidWeight));
        assert_eq!(run("80\n"), Err(ValidationError::InvalidHeight));
    }

    #[test]
    fn test_height_not_read_after_weight_failure() {
        let mut source = CountingSource {
            lines: VecDeque::from(vec!["0".to_string(), "1.75".to_string()]),
            reads: 0,
        };
        let result = run_interactive_session(SessionMode::Console, &mut source);
        assert_eq!(result, Err(ValidationError::InvalidWeight));
        assert_eq!(source.reads, 1);
    }

    #[test]
    fn test_boundary_measurements() {
        let min = run("0,2\n0,2\n").unwrap();
        assert_eq!(min.bmi, 0.2 / (0.2 * 0.2));
        let max = run("700\n2,6\n").unwrap();
        assert_eq!(max.bmi, 700.0 / (2.6 * 2.6));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: any in-range measurement succeeds with a non-negative BMI
        #[test]
        fn prop_valid_measurements_succeed(weight in 0.2f64..=700.0, height in 0.2f64..=2.6) {
            let report = run(&format!("{}\n{}\n", weight, height));
            prop_assert!(report.is_ok());
            prop_assert!(report.unwrap().bmi >= 0.0);
        }

        /// Property: comma-formatted input gives the same report
        #[test]
        fn prop_comma_input_matches_period(weight in 0.2f64..=700.0, height in 0.2f64..=2.6) {
            let period = format!("{}\n{}\n", weight, height);
            let comma = period.replace('.', ",");
            prop_assert_eq!(run(&period), run(&comma));
        }

        /// Property: out-of-range weight fails with the weight error whatever the height
        #[test]
        fn prop_extreme_weight(
            weight in prop_oneof![-1.0e6f64..0.2, 700.000_001f64..1.0e6],
            height in -10.0f64..10.0
        ) {
            prop_assert_eq!(
                run(&format!("{}\n{}\n", weight, height)),
                Err(ValidationError::InvalidWeight)
            );
        }

        /// Property: out-of-range height fails with the height error
        #[test]
        fn prop_extreme_height(
            weight in 0.2f64..=700.0,
            height in prop_oneof![-10.0f64..0.2, 2.600_001f64..10.0]
        ) {
            prop_assert_eq!(
                run(&format!("{}\n{}\n", weight, height)),
                Err(ValidationError::InvalidHeight)
            );
        }
    }
}
