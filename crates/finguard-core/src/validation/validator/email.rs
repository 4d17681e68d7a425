use super::Validator;
use crate::{LazyLock, validation::Rejection};
use regex::Regex;

/// Maximum length of an email address.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// A validator for the email address.
///
/// Only the `local@domain.tld` shape is checked; the pattern and the length
/// are independent checks, so both can fail at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailValidator;

impl Validator<str> for EmailValidator {
    type Output = ();

    fn validate(&self, data: &str) -> Result<Self::Output, Rejection> {
        let mut rejection = Rejection::new();
        if !EMAIL_PATTERN.is_match(data) {
            rejection.push("Invalid email format");
        }
        if data.chars().count() > MAX_EMAIL_LENGTH {
            rejection.push("Email address is too long");
        }
        rejection.check(())
    }
}

/// Regex for the email address.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("fail to create a regex for the email address")
});
