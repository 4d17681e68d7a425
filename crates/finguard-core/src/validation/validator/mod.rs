//! Field validators for financial input data.

use super::Rejection;

mod age;
mod bank_account;
mod credit_card;
mod currency;
mod date;
mod email;
mod file;
mod ip_addr;
mod length;
mod password;
mod phone_number;
mod routing_number;
mod ssn;
mod uri;

pub use age::{AgeValidator, DEFAULT_MIN_AGE};
pub use bank_account::BankAccountValidator;
pub use credit_card::{CreditCardValidator, detect_card_type, passes_luhn};
pub use currency::{CurrencyValidator, MAX_CURRENCY_AMOUNT};
pub use date::DateValidator;
pub use email::{EmailValidator, MAX_EMAIL_LENGTH};
pub use file::{FileInfo, FileValidator};
pub use ip_addr::IpAddrValidator;
pub use length::LengthValidator;
pub use password::{PasswordPolicy, PasswordValidator, StrengthPolicy};
pub use phone_number::PhoneNumberValidator;
pub use routing_number::{RoutingNumberValidator, aba_checksum};
pub use ssn::SsnValidator;
pub use uri::UrlValidator;

/// A generic validator.
pub trait Validator<T: ?Sized> {
    /// The value computed from valid data.
    type Output;

    /// Validates the data, collecting every failed check into the rejection.
    fn validate(&self, data: &T) -> Result<Self::Output, Rejection>;
}
