use super::Validator;
use crate::{LazyLock, helper, validation::Rejection};
use regex::Regex;

/// A validator for a US Social Security Number.
///
/// The format check and the denylist check are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SsnValidator;

impl SsnValidator {
    /// Returns `true` if the digits are a single repeated digit
    /// or the number is the bare sequence `123456789`.
    pub fn is_denylisted(ssn: &str) -> bool {
        if ssn == "123456789" {
            return true;
        }
        let digits = helper::extract_digits(ssn);
        let mut chars = digits.chars();
        match chars.next() {
            Some(first) => digits.len() == 9 && chars.all(|c| c == first),
            None => false,
        }
    }
}

impl Validator<str> for SsnValidator {
    type Output = ();

    fn validate(&self, data: &str) -> Result<Self::Output, Rejection> {
        let mut rejection = Rejection::new();
        if !SSN_PATTERN.is_match(data) {
            rejection.push("Invalid SSN format");
        }
        if Self::is_denylisted(data) {
            rejection.push("Invalid SSN");
        }
        rejection.check(())
    }
}

/// Regex for the SSN with optional hyphens.
static SSN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{3}-?[0-9]{2}-?[0-9]{4}$").expect("fail to create a regex for the SSN")
});
