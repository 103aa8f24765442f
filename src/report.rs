use crate::check_digit::CheckDigit;
use crate::config::OutputFormat;
use crate::error::InvalidFormatError;
use crate::serial_number::SerialNumber;
use serde::Serialize;
use std::fmt;

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Must be an 11 digits long number.";

/// Result of generating the check digit of one input.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CheckDigitReport {
    pub input: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Generated {
        serial_number: SerialNumber,
        check_digit: CheckDigit,
        locomotive_number: String,
    },
    Rejected {
        reason: String,
    },
}

impl CheckDigitReport {
    pub fn new(input: &str, result: Result<SerialNumber, InvalidFormatError>) -> Self {
        let outcome = match result {
            Ok(serial_number) => Outcome::Generated {
                serial_number,
                check_digit: serial_number.check_digit(),
                locomotive_number: serial_number.locomotive_number(),
            },
            Err(err) => Outcome::Rejected {
                reason: err.to_string(),
            },
        };
        Self {
            input: input.to_owned(),
            outcome,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self.outcome, Outcome::Generated { .. })
    }

    pub fn check_digit(&self) -> Option<CheckDigit> {
        match &self.outcome {
            Outcome::Generated { check_digit, .. } => Some(*check_digit),
            Outcome::Rejected { .. } => None,
        }
    }
}

impl fmt::Display for CheckDigitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Generated {
                serial_number,
                check_digit,
                ..
            } => write!(
                f,
                "The check digit for locomotive {} is {}.",
                serial_number, check_digit
            ),
            Outcome::Rejected { .. } => f.write_str(INVALID_INPUT_MESSAGE),
        }
    }
}

/// Result of checking a complete 12-digit locomotive number.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct VerificationReport {
    pub input: String,
    pub valid: bool,
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "Locomotive number {} is valid.", self.input)
        } else {
            write!(f, "Locomotive number {} is not valid.", self.input)
        }
    }
}

/// Renders a report as a single line in the requested format.
pub fn render<T: Serialize + fmt::Display>(
    report: &T,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => serde_json::to_string(report),
    }
}
