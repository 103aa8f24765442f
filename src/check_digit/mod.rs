mod locomotive_number_checksum;

pub use crate::check_digit::locomotive_number_checksum::LocomotiveNumberChecksum;

use crate::error::InvalidFormatError;
use crate::serial_number::{SerialNumber, SERIAL_NUMBER_LENGTH};
use serde::Serialize;
use std::fmt;

/// Weight applied to each position of the serial number, left to right.
pub const MASK: [u32; SERIAL_NUMBER_LENGTH] = [2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2];

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}

/// A single check digit, always in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CheckDigit(u8);

impl CheckDigit {
    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<CheckDigit> for u8 {
    fn from(value: CheckDigit) -> Self {
        value.0
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Computes the check digit of an 11-digit serial number.
///
/// The input is validated first, so this is safe to call on arbitrary user input: anything that
/// is not exactly 11 ASCII digits is rejected with an [InvalidFormatError].
pub fn compute_check_digit(input: &str) -> Result<CheckDigit, InvalidFormatError> {
    SerialNumber::new(input).map(|serial| serial.check_digit())
}

pub(crate) fn from_digits(digits: &[u8; SERIAL_NUMBER_LENGTH]) -> CheckDigit {
    let final_sum: u32 = digits
        .iter()
        .zip(MASK)
        .map(|(digit, weight)| sum_all_digits(*digit as u32 * weight))
        .sum();

    match final_sum % 10 {
        0 => CheckDigit(0),
        last_digit => CheckDigit((10 - last_digit) as u8),
    }
}

/// Sum all the digits from a number
#[inline]
fn sum_all_digits(digits: u32) -> u32 {
    let mut sum = 0;
    let mut num = digits;
    while num > 0 {
        sum += num % 10;
        num /= 10;
    }
    sum
}
