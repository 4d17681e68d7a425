use super::Validator;
use crate::{helper, validation::Rejection};

/// A validator for a bank account number: 8 to 17 digits, separators ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankAccountValidator;

impl Validator<str> for BankAccountValidator {
    type Output = ();

    #[inline]
    fn validate(&self, data: &str) -> Result<Self::Output, Rejection> {
        let num_digits = helper::extract_digits(data).len();
        if (8..=17).contains(&num_digits) {
            Ok(())
        } else {
            Err(Rejection::with_message(
                "Bank account number must be 8-17 digits",
            ))
        }
    }
}
