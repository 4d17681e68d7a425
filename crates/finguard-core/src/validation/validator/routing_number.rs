use super::Validator;
use crate::{helper, validation::Rejection};

/// A validator for an ABA routing transit number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingNumberValidator;

impl Validator<str> for RoutingNumberValidator {
    type Output = ();

    fn validate(&self, data: &str) -> Result<Self::Output, Rejection> {
        let digits = helper::extract_digits(data);
        if digits.len() != 9 {
            return Err(Rejection::with_message("Routing number must be 9 digits"));
        }
        if aba_checksum(&digits) != Some(0) {
            return Err(Rejection::with_message("Invalid routing number"));
        }
        Ok(())
    }
}

/// Computes `(3(d0+d3+d6) + 7(d1+d4+d7) + (d2+d5+d8)) mod 10` for 9 ASCII digits.
///
/// Returns `None` if the input is not exactly 9 ASCII digits.
pub fn aba_checksum(digits: &str) -> Option<u32> {
    const WEIGHTS: [u32; 3] = [3, 7, 1];
    if digits.len() != 9 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let sum = digits
        .bytes()
        .enumerate()
        .map(|(index, byte)| WEIGHTS[index % 3] * u32::from(byte - b'0'))
        .sum::<u32>();
    Some(sum % 10)
}
