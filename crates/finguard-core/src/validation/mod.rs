//! Field validators, result shapes and the form orchestrator.
//!
//! Every validator is a pure function of its input: invalid data is reported
//! as an ordered list of messages, never as a panic or an [`Error`](crate::error::Error).
//!
//! ```
//! use finguard_core::validation::{validate_routing_number, validate_ssn};
//!
//! assert!(validate_routing_number("021000021").is_valid());
//! assert_eq!(validate_ssn("111-11-1111").errors(), ["Invalid SSN"]);
//! ```

mod form;
mod rejection;
mod result;
mod rule;
mod validator;

pub use form::{FieldResult, FormValidationResult, FormValidator, validate_form};
pub use rejection::Rejection;
pub use result::{
    AgeResult, CardType, CreditCardResult, CurrencyResult, DateResult, IpAddressResult, IpFamily,
    Payload, ValidationOutcome, ValidationResult,
};
pub use rule::{CustomRule, FieldType, RuleSet, ValidationRule};
pub use validator::{
    AgeValidator, BankAccountValidator, CreditCardValidator, CurrencyValidator, DEFAULT_MIN_AGE,
    DateValidator, EmailValidator, FileInfo, FileValidator, IpAddrValidator, LengthValidator,
    MAX_CURRENCY_AMOUNT, MAX_EMAIL_LENGTH, PasswordPolicy, PasswordValidator,
    PhoneNumberValidator, RoutingNumberValidator, SsnValidator, StrengthPolicy, UrlValidator,
    Validator, aba_checksum, detect_card_type, passes_luhn,
};

use crate::state::DEFAULT_MAX_INPUT_LENGTH;

/// Validates an email address.
#[inline]
pub fn validate_email(email: &str) -> ValidationResult {
    EmailValidator.validate(email).into()
}

/// Validates a phone number.
#[inline]
pub fn validate_phone(phone: &str) -> ValidationResult {
    PhoneNumberValidator.validate(phone).into()
}

/// Validates a Social Security Number.
#[inline]
pub fn validate_ssn(ssn: &str) -> ValidationResult {
    SsnValidator.validate(ssn).into()
}

/// Validates a payment card number and detects the card type.
#[inline]
pub fn validate_credit_card(number: &str) -> CreditCardResult {
    CreditCardValidator.validate(number).into()
}

/// Validates a bank account number.
#[inline]
pub fn validate_bank_account(account: &str) -> ValidationResult {
    BankAccountValidator.validate(account).into()
}

/// Validates an ABA routing number.
#[inline]
pub fn validate_routing_number(routing_number: &str) -> ValidationResult {
    RoutingNumberValidator.validate(routing_number).into()
}

/// Validates a dollar amount and parses it.
#[inline]
pub fn validate_currency(amount: &str) -> CurrencyResult {
    CurrencyValidator.validate(amount).into()
}

/// Validates a password by delegating to the policy.
#[inline]
pub fn validate_password(password: &str, policy: &dyn PasswordPolicy) -> ValidationResult {
    policy.validate_password_strength(password)
}

/// Validates a date relative to the current date, with an optional format hint.
pub fn validate_date(date: &str, format: Option<&str>) -> DateResult {
    let mut validator = DateValidator::new();
    if let Some(format) = format {
        validator = validator.with_format(format);
    }
    validator.validate(date).into()
}

/// Validates a birth date against a minimum age, `18` by default.
#[inline]
pub fn validate_age(birth_date: &str, min_age: Option<u32>) -> AgeResult {
    AgeValidator::new(min_age.unwrap_or(DEFAULT_MIN_AGE))
        .validate(birth_date)
        .into()
}

/// Validates the length of a text. The maximum defaults to the default maximum input length.
#[inline]
pub fn validate_length(value: &str, min: usize, max: Option<usize>) -> ValidationResult {
    LengthValidator::new(min, max.unwrap_or(DEFAULT_MAX_INPUT_LENGTH))
        .validate(value)
        .into()
}

/// Validates an optional uploaded file.
#[inline]
pub fn validate_file(file: Option<&FileInfo>, validator: &FileValidator) -> ValidationResult {
    validator.validate_optional(file).into()
}

/// Validates an `https` URL.
#[inline]
pub fn validate_url(url: &str) -> ValidationResult {
    UrlValidator.validate(url).into()
}

/// Validates an IPv4 or IPv6 address and reports its family.
#[inline]
pub fn validate_ip_address(ip: &str) -> IpAddressResult {
    IpAddrValidator.validate(ip).into()
}
