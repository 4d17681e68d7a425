use super::Validator;
use crate::{Decimal, LazyLock, validation::Rejection};
use regex::Regex;
use std::str::FromStr;

/// Maximum accepted amount: `999,999,999.99`.
pub const MAX_CURRENCY_AMOUNT: Decimal = Decimal::from_parts(0x4876_E7FF, 0x17, 0, false, 2);

/// A validator for a dollar amount such as `$1,234.56`.
///
/// The range is only checked once the format matches.
/// Negative amounts never match the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyValidator;

impl Validator<str> for CurrencyValidator {
    type Output = Decimal;

    fn validate(&self, data: &str) -> Result<Self::Output, Rejection> {
        if !CURRENCY_PATTERN.is_match(data) {
            return Err(Rejection::with_message("Invalid currency format"));
        }

        let amount = data.replace(['$', ','], "");
        match Decimal::from_str(&amount) {
            Ok(value) if !value.is_sign_negative() && value <= MAX_CURRENCY_AMOUNT => Ok(value),
            _ => Err(Rejection::with_message("Amount out of range")),
        }
    }
}

/// Regex for the amount with an optional `$`, optional thousands separators
/// and an optional two-decimal fraction.
static CURRENCY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\$?(?:[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(?:\.[0-9]{2})?$")
        .expect("fail to create a regex for the currency amount")
});
