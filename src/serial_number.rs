use crate::check_digit::{self, CheckDigit};
use crate::error::InvalidFormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a locomotive serial number (the check digit excluded).
pub const SERIAL_NUMBER_LENGTH: usize = 11;

/// Returns true if `input` is exactly 11 ASCII digits.
///
/// No surrounding whitespace, signs or separators are tolerated, and inputs of any other length
/// are rejected rather than truncated.
pub fn validate(input: &str) -> bool {
    check_format(input).is_ok()
}

/// Same as [validate], but reports the first problem found. Length is checked before content.
pub(crate) fn check_format(input: &str) -> Result<(), InvalidFormatError> {
    let length = input.chars().count();
    if length != SERIAL_NUMBER_LENGTH {
        return Err(InvalidFormatError::InvalidLength {
            expected: SERIAL_NUMBER_LENGTH,
            actual: length,
        });
    }

    if let Some((position, character)) = input.chars().enumerate().find(|(_, c)| !c.is_ascii_digit())
    {
        return Err(InvalidFormatError::NonDigitCharacter {
            position,
            character,
        });
    }
    Ok(())
}

/// An 11-digit locomotive serial number that is known to be well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SerialNumber([u8; SERIAL_NUMBER_LENGTH]);

impl SerialNumber {
    pub fn new(input: &str) -> Result<Self, InvalidFormatError> {
        check_format(input)?;

        let mut digits = [0; SERIAL_NUMBER_LENGTH];
        for (digit, byte) in digits.iter_mut().zip(input.bytes()) {
            *digit = byte - b'0';
        }
        Ok(Self(digits))
    }

    /// The numeric value of each position, left to right.
    pub fn digits(&self) -> &[u8; SERIAL_NUMBER_LENGTH] {
        &self.0
    }

    pub fn check_digit(&self) -> CheckDigit {
        check_digit::from_digits(&self.0)
    }

    /// The full 12-digit locomotive number: the serial followed by its check digit.
    pub fn locomotive_number(&self) -> String {
        format!("{}{}", self, self.check_digit())
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.0 {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

impl FromStr for SerialNumber {
    type Err = InvalidFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for SerialNumber {
    type Error = InvalidFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for SerialNumber {
    type Error = InvalidFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<SerialNumber> for String {
    fn from(value: SerialNumber) -> Self {
        value.to_string()
    }
}
