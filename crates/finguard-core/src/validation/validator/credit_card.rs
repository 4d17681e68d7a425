use super::Validator;
use crate::{
    helper,
    validation::{CardType, Rejection},
};

/// A validator for a payment card number.
///
/// Separators are ignored. The card type is only detected for numbers
/// passing the Luhn checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditCardValidator;

impl Validator<str> for CreditCardValidator {
    type Output = CardType;

    fn validate(&self, data: &str) -> Result<Self::Output, Rejection> {
        let digits = helper::extract_digits(data);
        if !(13..=19).contains(&digits.len()) {
            return Err(Rejection::with_message("Invalid card number length"));
        }
        if !passes_luhn(&digits) {
            return Err(Rejection::with_message("Invalid card number"));
        }
        Ok(detect_card_type(&digits))
    }
}

/// Returns `true` if the ASCII digits pass the Luhn checksum.
///
/// Starting with the rightmost digit, every second digit is doubled,
/// subtracting 9 when the result exceeds 9. Non-digit chars fail the check.
pub fn passes_luhn(digits: &str) -> bool {
    let mut sum = 0;
    for (index, byte) in digits.bytes().rev().enumerate() {
        if !byte.is_ascii_digit() {
            return false;
        }
        let mut digit = u32::from(byte - b'0');
        if index % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    !digits.is_empty() && sum % 10 == 0
}

/// Detects the card type from the prefix. The first matching family wins.
pub fn detect_card_type(digits: &str) -> CardType {
    const PREFIXES: [(CardType, &[&str]); 6] = [
        (CardType::Visa, &["4"]),
        (CardType::Mastercard, &["51", "52", "53", "54", "55"]),
        (CardType::Amex, &["34", "37"]),
        (CardType::Discover, &["6011", "65"]),
        (CardType::DinersClub, &["30", "36", "38", "39"]),
        (CardType::Jcb, &["35"]),
    ];
    PREFIXES
        .iter()
        .find(|(_, prefixes)| prefixes.iter().any(|prefix| digits.starts_with(prefix)))
        .map(|&(card_type, _)| card_type)
        .unwrap_or(CardType::Unknown)
}
