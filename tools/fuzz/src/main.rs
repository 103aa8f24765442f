use afl::fuzz;
use locomotive_check_digit::{
    compute_check_digit, validate, LocomotiveNumberChecksum, SerialNumber, Validator, MASK,
};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;
    run_fuzz(input);
    Some(())
}

/// Check digit computed by writing every weighted product out as text and summing the
/// characters of the concatenation.
fn text_reference(input: &str) -> u32 {
    let concatenated: String = input
        .chars()
        .zip(MASK)
        .map(|(c, weight)| (c.to_digit(10).unwrap() * weight).to_string())
        .collect();
    let final_sum: u32 = concatenated.chars().map(|c| c.to_digit(10).unwrap()).sum();
    match final_sum % 10 {
        0 => 0,
        last_digit => 10 - last_digit,
    }
}

fn run_fuzz(input: &str) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Input len: {:?}", input.len());
    }

    let result = compute_check_digit(input);
    assert_eq!(validate(input), result.is_ok());

    if let Ok(check_digit) = result {
        assert!(check_digit.value() <= 9);
        assert_eq!(check_digit.value() as u32, text_reference(input));

        let number = SerialNumber::new(input).unwrap().locomotive_number();
        assert!(LocomotiveNumberChecksum.is_valid_match(&number));
    }

    // Anything accepted as a full number must be made of a serial and its check digit
    if LocomotiveNumberChecksum.is_valid_match(input) {
        let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
        let (serial, check_digit) = digits.split_at(11);
        assert_eq!(
            compute_check_digit(serial).unwrap().to_string(),
            check_digit
        );
    }
}
