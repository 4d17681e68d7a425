use super::Rejection;
use crate::{Decimal, SharedString};
use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// The universal result shape of a validator.
///
/// Only the errors are stored: the result is valid iff there is no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<SharedString>,
}

impl ValidationResult {
    /// Creates a valid result.
    #[inline]
    pub fn valid() -> Self {
        Self { errors: Vec::new() }
    }

    /// Creates a result with the supplied errors.
    #[inline]
    pub fn with_errors(errors: impl IntoIterator<Item = SharedString>) -> Self {
        Self {
            errors: errors.into_iter().collect(),
        }
    }

    /// Returns `true` if there is no error.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the errors in the order they were raised.
    #[inline]
    pub fn errors(&self) -> &[SharedString] {
        &self.errors
    }

    /// Consumes the result and returns the errors.
    #[inline]
    pub fn into_errors(self) -> Vec<SharedString> {
        self.errors
    }
}

impl<T> From<Result<T, Rejection>> for ValidationResult {
    #[inline]
    fn from(result: Result<T, Rejection>) -> Self {
        match result {
            Ok(_) => Self::valid(),
            Err(rejection) => Self::with_errors(rejection),
        }
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.end()
    }
}

/// A value carried by a [`ValidationOutcome`], serialized under [`Payload::FIELD`].
pub trait Payload: Serialize {
    /// Field name of the payload in the serialized result.
    const FIELD: &'static str;
}

/// A validation result which also carries the value computed from valid data.
///
/// The value is present iff the outcome is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome<T> {
    errors: Vec<SharedString>,
    value: Option<T>,
}

impl<T> ValidationOutcome<T> {
    /// Returns `true` if there is no error.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the errors in the order they were raised.
    #[inline]
    pub fn errors(&self) -> &[SharedString] {
        &self.errors
    }

    /// Returns a reference to the computed value.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consumes the outcome and returns the computed value.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Discards the computed value.
    #[inline]
    pub fn into_result(self) -> ValidationResult {
        ValidationResult {
            errors: self.errors,
        }
    }
}

impl<T> From<Result<T, Rejection>> for ValidationOutcome<T> {
    #[inline]
    fn from(result: Result<T, Rejection>) -> Self {
        match result {
            Ok(value) => Self {
                errors: Vec::new(),
                value: Some(value),
            },
            Err(rejection) => Self {
                errors: rejection.into_iter().collect(),
                value: None,
            },
        }
    }
}

impl<T: Payload> Serialize for ValidationOutcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationOutcome", 3)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.serialize_field(T::FIELD, &self.value)?;
        state.end()
    }
}

/// Kind of a payment card, detected from the number prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    /// Prefix `4`.
    Visa,
    /// Prefixes `51` to `55`.
    Mastercard,
    /// Prefixes `34` and `37`.
    Amex,
    /// Prefixes `6011` and `65`.
    Discover,
    /// Prefixes `30`, `36`, `38` and `39`.
    #[serde(rename = "dinersclub")]
    DinersClub,
    /// Prefix `35`.
    Jcb,
    /// No known prefix.
    Unknown,
}

impl CardType {
    /// Returns the lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Discover => "discover",
            Self::DinersClub => "dinersclub",
            Self::Jcb => "jcb",
            Self::Unknown => "unknown",
        }
    }
}

/// Family of an IP address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum IpFamily {
    /// A dotted-quad IPv4 address.
    IPv4,
    /// A full 8-group IPv6 address.
    IPv6,
}

impl Payload for CardType {
    const FIELD: &'static str = "cardType";
}

impl Payload for Decimal {
    const FIELD: &'static str = "numericValue";
}

impl Payload for NaiveDate {
    const FIELD: &'static str = "date";
}

impl Payload for u32 {
    const FIELD: &'static str = "age";
}

impl Payload for IpFamily {
    const FIELD: &'static str = "type";
}

/// Result of the credit card validator.
pub type CreditCardResult = ValidationOutcome<CardType>;

/// Result of the currency validator.
pub type CurrencyResult = ValidationOutcome<Decimal>;

/// Result of the date validator.
pub type DateResult = ValidationOutcome<NaiveDate>;

/// Result of the age validator.
pub type AgeResult = ValidationOutcome<u32>;

/// Result of the IP address validator.
pub type IpAddressResult = ValidationOutcome<IpFamily>;

impl CreditCardResult {
    /// Returns the detected card type.
    #[inline]
    pub fn card_type(&self) -> Option<CardType> {
        self.value
    }
}

impl CurrencyResult {
    /// Returns the parsed amount.
    #[inline]
    pub fn numeric_value(&self) -> Option<Decimal> {
        self.value
    }
}

impl DateResult {
    /// Returns the parsed date.
    #[inline]
    pub fn date(&self) -> Option<NaiveDate> {
        self.value
    }
}

impl AgeResult {
    /// Returns the age in whole years.
    #[inline]
    pub fn age(&self) -> Option<u32> {
        self.value
    }
}

impl IpAddressResult {
    /// Returns the matched address family.
    #[inline]
    pub fn ip_type(&self) -> Option<IpFamily> {
        self.value
    }
}
