use thiserror::Error;

/// Reason a candidate serial number was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidFormatError {
    /// The input does not have exactly the expected number of characters
    #[error("Expected {expected} characters but got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The input contains something other than an ASCII digit (`0`-`9`)
    #[error("Non-digit character {character:?} at position {position}")]
    NonDigitCharacter { position: usize, character: char },
}

impl InvalidFormatError {
    /// Short, stable identifier used as a metric label.
    pub fn reason(&self) -> &'static str {
        match self {
            InvalidFormatError::InvalidLength { .. } => "invalid_length",
            InvalidFormatError::NonDigitCharacter { .. } => "non_digit_character",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            InvalidFormatError::InvalidLength {
                expected: 11,
                actual: 10
            }
            .to_string(),
            "Expected 11 characters but got 10"
        );
        assert_eq!(
            InvalidFormatError::NonDigitCharacter {
                position: 7,
                character: 'A'
            }
            .to_string(),
            "Non-digit character 'A' at position 7"
        );
    }

    #[test]
    fn reasons_are_distinct() {
        let length = InvalidFormatError::InvalidLength {
            expected: 11,
            actual: 0,
        };
        let digit = InvalidFormatError::NonDigitCharacter {
            position: 0,
            character: ' ',
        };
        assert_ne!(length.reason(), digit.reason());
    }
}
