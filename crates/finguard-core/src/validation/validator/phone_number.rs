use super::Validator;
use crate::{LazyLock, validation::Rejection};
use regex::Regex;

/// A validator for a phone number.
///
/// Accepts an optional leading `+` followed by at least 10 digits, whitespace chars,
/// hyphens or parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneNumberValidator;

impl Validator<str> for PhoneNumberValidator {
    type Output = ();

    #[inline]
    fn validate(&self, data: &str) -> Result<Self::Output, Rejection> {
        if PHONE_NUMBER_PATTERN.is_match(data) {
            Ok(())
        } else {
            Err(Rejection::with_message("Invalid phone number format"))
        }
    }
}

/// Regex for the phone number.
static PHONE_NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9\s\-()]{10,}$").expect("fail to create a regex for the phone number")
});
