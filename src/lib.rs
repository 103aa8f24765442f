// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod check_digit;
mod config;
mod error;
mod generator;
mod observability;
mod report;
mod serial_number;
mod stats;

#[cfg(feature = "cli")]
pub mod logger;

// This is the public API of the check digit library
pub use check_digit::{compute_check_digit, CheckDigit, LocomotiveNumberChecksum, Validator, MASK};
pub use config::{GeneratorConfig, OutputFormat};
pub use error::InvalidFormatError;
pub use generator::CheckDigitGenerator;
pub use observability::labels::Labels;
pub use report::{render, CheckDigitReport, Outcome, VerificationReport, INVALID_INPUT_MESSAGE};
pub use serial_number::{validate, SerialNumber, SERIAL_NUMBER_LENGTH};
