use crate::error::InvalidFormatError;
use crate::Labels;
use metrics::{counter, Counter};

pub struct GeneratorMetrics {
    pub generated: Counter,
    pub rejected_invalid_length: Counter,
    pub rejected_non_digit_character: Counter,
    pub verified_valid: Counter,
    pub verified_invalid: Counter,
}

const REASON: &str = "reason";
const RESULT: &str = "result";

impl GeneratorMetrics {
    pub fn new(labels: &Labels) -> Self {
        let rejected = |reason: &str| {
            counter!(
                "check_digit.rejected",
                labels.clone_with_labels(&[(REASON, reason)])
            )
        };
        let verified = |result: &str| {
            counter!(
                "locomotive_number.verified",
                labels.clone_with_labels(&[(RESULT, result)])
            )
        };

        GeneratorMetrics {
            generated: counter!("check_digit.generated", labels.clone()),
            rejected_invalid_length: rejected("invalid_length"),
            rejected_non_digit_character: rejected("non_digit_character"),
            verified_valid: verified("valid"),
            verified_invalid: verified("invalid"),
        }
    }

    pub fn record_rejection(&self, err: &InvalidFormatError) {
        match err {
            InvalidFormatError::InvalidLength { .. } => self.rejected_invalid_length.increment(1),
            InvalidFormatError::NonDigitCharacter { .. } => {
                self.rejected_non_digit_character.increment(1)
            }
        }
    }

    pub fn record_verification(&self, valid: bool) {
        if valid {
            self.verified_valid.increment(1);
        } else {
            self.verified_invalid.increment(1);
        }
    }
}
