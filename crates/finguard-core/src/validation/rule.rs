use crate::{JsonValue, Map, SharedString};
use serde::Deserialize;
use std::{collections::BTreeMap, fmt, sync::Arc};

/// A caller-supplied check invoked with the field value and the whole form.
///
/// Returning `Err` with an empty message falls back to a generic message.
pub type CustomRule = Arc<dyn Fn(&JsonValue, &Map) -> Result<(), SharedString> + Send + Sync>;

/// Rules keyed by the field name.
pub type RuleSet = BTreeMap<String, ValidationRule>;

/// Tag selecting the leaf validator for a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum FieldType {
    /// Email address.
    Email,
    /// Phone number.
    Phone,
    /// Social Security Number.
    Ssn,
    /// Payment card number.
    CreditCard,
    /// Bank account number.
    BankAccount,
    /// ABA routing number.
    RoutingNumber,
    /// Dollar amount.
    Currency,
    /// Password checked by the password policy.
    Password,
    /// Calendar date.
    Date,
    /// HTTPS URL.
    Url,
    /// An unrecognized tag. It always passes.
    Unknown(SharedString),
}

impl FieldType {
    /// Returns the canonical tag.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Ssn => "ssn",
            Self::CreditCard => "creditCard",
            Self::BankAccount => "bankAccount",
            Self::RoutingNumber => "routingNumber",
            Self::Currency => "currency",
            Self::Password => "password",
            Self::Date => "date",
            Self::Url => "url",
            Self::Unknown(tag) => tag.as_ref(),
        }
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        match tag {
            "email" => Self::Email,
            "phone" | "phoneNumber" | "phone-number" => Self::Phone,
            "ssn" => Self::Ssn,
            "creditCard" | "credit-card" => Self::CreditCard,
            "bankAccount" | "bank-account" => Self::BankAccount,
            "routingNumber" | "routing-number" => Self::RoutingNumber,
            "currency" => Self::Currency,
            "password" => Self::Password,
            "date" => Self::Date,
            "url" => Self::Url,
            _ => Self::Unknown(tag.to_owned().into()),
        }
    }
}

impl From<String> for FieldType {
    #[inline]
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl fmt::Display for FieldType {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation rule of a single field.
#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationRule {
    /// The value must not be blank.
    pub required: bool,
    /// Leaf validator applied to a truthy value.
    #[serde(rename = "type")]
    pub field_type: Option<FieldType>,
    /// Minimum length of a truthy value.
    #[serde(alias = "min-length")]
    pub min_length: Option<usize>,
    /// Maximum length of a truthy value.
    #[serde(alias = "max-length")]
    pub max_length: Option<usize>,
    /// Custom check.
    #[serde(skip)]
    pub custom: Option<CustomRule>,
}

impl ValidationRule {
    /// Creates an empty rule which accepts anything.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the field as required.
    #[inline]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the field type.
    #[inline]
    pub fn with_type(mut self, field_type: impl Into<FieldType>) -> Self {
        self.field_type = Some(field_type.into());
        self
    }

    /// Sets the minimum length.
    #[inline]
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Sets the maximum length.
    #[inline]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets the custom check.
    #[inline]
    pub fn custom<F>(mut self, check: F) -> Self
    where
        F: Fn(&JsonValue, &Map) -> Result<(), SharedString> + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(check));
        self
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("required", &self.required)
            .field("field_type", &self.field_type)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("custom", &self.custom.is_some())
            .finish()
    }
}
