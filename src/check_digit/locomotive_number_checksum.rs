use crate::check_digit::{from_digits, Validator};
use crate::serial_number::SERIAL_NUMBER_LENGTH;

/// Checks a complete 12-digit locomotive number, whose last digit must be the check digit of
/// the first 11. A single space or dash may separate two digits; the number can't start or end
/// with a separator, and separators can't follow each other.
pub struct LocomotiveNumberChecksum;

const SEPARATORS: &[char] = &[' ', '-'];

impl Validator for LocomotiveNumberChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        let mut serial = [0u8; SERIAL_NUMBER_LENGTH];
        let mut checksum = None;
        let mut digit_count = 0;
        let mut previous_is_digit = false;

        for c in candidate.chars() {
            if let Some(digit) = c.to_digit(10) {
                if digit_count < SERIAL_NUMBER_LENGTH {
                    serial[digit_count] = digit as u8;
                } else if digit_count == SERIAL_NUMBER_LENGTH {
                    checksum = Some(digit);
                } else {
                    return false;
                }
                digit_count += 1;
                previous_is_digit = true;
            } else if SEPARATORS.contains(&c) && previous_is_digit {
                previous_is_digit = false;
            } else {
                return false;
            }
        }

        // A trailing separator leaves `previous_is_digit` unset
        if !previous_is_digit {
            return false;
        }

        match checksum {
            Some(checksum) => from_digits(&serial).value() as u32 == checksum,
            None => false,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::check_digit::*;

    #[test]
    fn test_valid_locomotive_numbers() {
        let valid_numbers = vec![
            "000000000000",
            "111111111113",
            "999999999991",
            "928012345676",
            // separators
            "92 80 1234 567-6",
            "9280-1234567-6",
        ];
        for number in valid_numbers {
            assert!(
                LocomotiveNumberChecksum.is_valid_match(number),
                "{number} should be valid"
            );
        }
    }

    #[test]
    fn test_invalid_locomotive_numbers() {
        let invalid_numbers = vec![
            // wrong check digit
            "111111111111",
            "928012345670",
            // too short
            "11111111111",
            "",
            "  --  ",
            // too long
            "1111111111130",
            // other characters
            "92.80.1234.567-6",
            "1111111111A3",
            // separators outside of two digits
            "-928012345676",
            "928012345676-",
            "  928012345676 ",
            " 928012345676",
            "9--2 - 8012345676",
            "92  80 1234 567-6",
            "92 -80 1234 567-6",
        ];
        for number in invalid_numbers {
            assert!(
                !LocomotiveNumberChecksum.is_valid_match(number),
                "{number} should be invalid"
            );
        }
    }

    #[test]
    fn accepts_every_generated_number() {
        for serial in ["00000000001", "12345678901", "50505050505", "92801234567"] {
            let number = crate::SerialNumber::new(serial)
                .unwrap()
                .locomotive_number();
            assert!(LocomotiveNumberChecksum.is_valid_match(&number));
        }
    }
}
