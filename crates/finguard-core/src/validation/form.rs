use super::{
    FieldType, RuleSet, ValidationResult, ValidationRule,
    validator::{
        BankAccountValidator, CreditCardValidator, CurrencyValidator, DateValidator,
        EmailValidator, LengthValidator, PasswordPolicy, PasswordValidator, PhoneNumberValidator,
        RoutingNumberValidator, SsnValidator, StrengthPolicy, UrlValidator, Validator,
    },
};
use crate::{JsonValue, LazyLock, Map, SharedString, extension::JsonValueExt, state::SecurityConfig};
use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::BTreeMap;

/// A leaf check resolved from a [`FieldType`].
type FieldCheck = fn(&FormValidator<'_>, &str) -> ValidationResult;

/// Message used when a custom rule fails without a message.
const DEFAULT_CUSTOM_MESSAGE: &str = "Invalid value";

/// Message used when a required field is blank.
const REQUIRED_MESSAGE: &str = "This field is required";

/// Default security config shared by [`validate_form`].
static DEFAULT_SECURITY_CONFIG: LazyLock<SecurityConfig> = LazyLock::new(SecurityConfig::default);

/// Default password policy shared by [`validate_form`].
static DEFAULT_PASSWORD_POLICY: LazyLock<StrengthPolicy> =
    LazyLock::new(|| StrengthPolicy::new(DEFAULT_SECURITY_CONFIG.password));

/// Validation result of a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldResult {
    errors: Vec<SharedString>,
    warnings: Vec<SharedString>,
}

impl FieldResult {
    /// Records an error.
    #[inline]
    pub fn record(&mut self, message: impl Into<SharedString>) {
        self.errors.push(message.into());
    }

    /// Records every error of a leaf validator result.
    #[inline]
    pub fn record_fail(&mut self, result: ValidationResult) {
        self.errors.extend(result.into_errors());
    }

    /// Records a warning. Warnings never affect validity.
    #[inline]
    pub fn warn(&mut self, message: impl Into<SharedString>) {
        self.warnings.push(message.into());
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

    /// Returns the warnings.
    #[inline]
    pub fn warnings(&self) -> &[SharedString] {
        &self.warnings
    }
}

impl Serialize for FieldResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FieldResult", 3)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.serialize_field("warnings", &self.warnings)?;
        state.end()
    }
}

/// Validation result of a whole form: valid iff every field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidationResult {
    fields: BTreeMap<String, FieldResult>,
}

impl FormValidationResult {
    /// Returns `true` if every field is valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(FieldResult::is_valid)
    }

    /// Returns the result of a field.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&FieldResult> {
        self.fields.get(name)
    }

    /// Returns the results keyed by the field name.
    #[inline]
    pub fn fields(&self) -> &BTreeMap<String, FieldResult> {
        &self.fields
    }

    /// Returns the names of the invalid fields.
    pub fn invalid_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, result)| !result.is_valid())
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

impl Serialize for FormValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FormValidationResult", 2)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("fields", &self.fields)?;
        state.end()
    }
}

/// Form orchestrator applying per-field rules.
///
/// For each rule, the checks run in order: required, type, length, custom.
/// A failed check never prevents the later ones from running.
#[derive(Clone, Copy)]
pub struct FormValidator<'a> {
    /// Security policy.
    security: &'a SecurityConfig,
    /// Password policy.
    password_policy: &'a dyn PasswordPolicy,
    /// Reference date for the date validator.
    today: Option<NaiveDate>,
}

impl<'a> FormValidator<'a> {
    /// Creates a new instance with the security config and the password policy.
    #[inline]
    pub fn new(security: &'a SecurityConfig, password_policy: &'a dyn PasswordPolicy) -> Self {
        Self {
            security,
            password_policy,
            today: None,
        }
    }

    /// Sets the reference date used by date fields.
    #[inline]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Validates the form data against the rules.
    ///
    /// Every rule produces a field result, even if the field is absent from the data.
    /// Fields without a rule are skipped.
    pub fn validate(&self, form_data: &Map, rules: &RuleSet) -> FormValidationResult {
        let mut fields = BTreeMap::new();
        for (name, rule) in rules {
            let value = form_data.get(name).unwrap_or(&JsonValue::Null);
            let result = self.validate_field(value, rule, form_data);
            if !result.is_valid() {
                let num_errors = result.errors().len();
                tracing::debug!(field = name.as_str(), num_errors, "field validation failed");
            }
            fields.insert(name.clone(), result);
        }

        let result = FormValidationResult { fields };
        tracing::debug!(
            num_fields = result.fields.len(),
            valid = result.is_valid(),
            "form validated"
        );
        result
    }

    /// Validates a single value against its rule.
    pub fn validate_field(
        &self,
        value: &JsonValue,
        rule: &ValidationRule,
        form_data: &Map,
    ) -> FieldResult {
        let mut result = FieldResult::default();
        if rule.required && value.is_blank() {
            result.record(REQUIRED_MESSAGE);
        }

        let present = !value.is_falsy();
        if present && let Some(field_type) = &rule.field_type {
            if let FieldType::Unknown(tag) = field_type {
                tracing::warn!("unsupported validation type `{tag}`");
                result.warn(format!("Unsupported validation type `{tag}`"));
            }
            let check = Self::field_check(field_type);
            result.record_fail(check(self, &value.to_text()));
        }

        if present && (rule.min_length.is_some() || rule.max_length.is_some()) {
            let mut validator = LengthValidator::from_config(self.security);
            if let Some(min_length) = rule.min_length {
                validator = validator.with_min(min_length);
            }
            if let Some(max_length) = rule.max_length {
                validator = validator.with_max(max_length);
            }
            result.record_fail(validator.validate(value).into());
        }

        if let Some(custom) = &rule.custom
            && let Err(message) = custom(value, form_data)
        {
            if message.is_empty() {
                result.record(DEFAULT_CUSTOM_MESSAGE);
            } else {
                result.record(message);
            }
        }
        result
    }

    /// Dispatch table from the field type to the leaf check.
    fn field_check(field_type: &FieldType) -> FieldCheck {
        match field_type {
            FieldType::Email => |_, value| EmailValidator.validate(value).into(),
            FieldType::Phone => |_, value| PhoneNumberValidator.validate(value).into(),
            FieldType::Ssn => |_, value| SsnValidator.validate(value).into(),
            FieldType::CreditCard => |_, value| CreditCardValidator.validate(value).into(),
            FieldType::BankAccount => |_, value| BankAccountValidator.validate(value).into(),
            FieldType::RoutingNumber => |_, value| RoutingNumberValidator.validate(value).into(),
            FieldType::Currency => |_, value| CurrencyValidator.validate(value).into(),
            FieldType::Password => |form, value| {
                PasswordValidator::new(form.password_policy)
                    .validate(value)
                    .into()
            },
            FieldType::Date => |form, value| form.date_validator().validate(value).into(),
            FieldType::Url => |_, value| UrlValidator.validate(value).into(),
            FieldType::Unknown(_) => |_, _| ValidationResult::valid(),
        }
    }

    /// Returns the date validator relative to the reference date.
    fn date_validator(&self) -> DateValidator<'static> {
        match self.today {
            Some(today) => DateValidator::with_today(today),
            None => DateValidator::new(),
        }
    }
}

impl Default for FormValidator<'static> {
    #[inline]
    fn default() -> Self {
        Self::new(&DEFAULT_SECURITY_CONFIG, &*DEFAULT_PASSWORD_POLICY)
    }
}

/// Validates the form data against the rules with the default security config
/// and password policy.
#[inline]
pub fn validate_form(form_data: &Map, rules: &RuleSet) -> FormValidationResult {
    FormValidator::default().validate(form_data, rules)
}

#[cfg(test)]
mod tests {
    use super::{FormValidator, validate_form};
    use crate::{
        Map, json,
        state::SecurityConfig,
        validation::{FieldType, RuleSet, ValidationResult, ValidationRule},
    };
    use chrono::NaiveDate;

    fn form(value: crate::JsonValue) -> Map {
        value.as_object().cloned().unwrap_or_default()
    }

    fn rules(entries: Vec<(&str, ValidationRule)>) -> RuleSet {
        entries
            .into_iter()
            .map(|(name, rule)| (name.to_owned(), rule))
            .collect()
    }

    #[test]
    fn it_requires_non_blank_values() {
        let rules = rules(vec![("email", ValidationRule::new().required().with_type("email"))]);
        let result = validate_form(&form(json!({ "email": "" })), &rules);
        assert!(!result.is_valid());
        assert_eq!(result.field("email").unwrap().errors(), ["This field is required"]);

        let result = validate_form(&form(json!({ "email": "a@b.com" })), &rules);
        assert!(result.is_valid());
        assert!(result.field("email").unwrap().errors().is_empty());
    }

    #[test]
    fn it_treats_whitespace_as_blank_but_still_runs_type_check() {
        let rules = rules(vec![("email", ValidationRule::new().required().with_type("email"))]);
        let result = validate_form(&form(json!({ "email": "   " })), &rules);
        assert_eq!(
            result.field("email").unwrap().errors(),
            ["This field is required", "Invalid email format"]
        );
    }

    #[test]
    fn it_aggregates_type_and_length_errors() {
        let rules = rules(vec![(
            "card",
            ValidationRule::new().with_type(FieldType::CreditCard).max_length(12),
        )]);
        let result = validate_form(&form(json!({ "card": "4111 1111 1111 1112" })), &rules);
        assert_eq!(
            result.field("card").unwrap().errors(),
            ["Invalid card number", "Must be no more than 12 characters"]
        );
    }

    #[test]
    fn it_resolves_length_bounds_from_config() {
        let security = SecurityConfig {
            max_input_length: 4,
            ..SecurityConfig::default()
        };
        let policy = |_: &str| ValidationResult::valid();
        let validator = FormValidator::new(&security, &policy);
        let rules = rules(vec![("memo", ValidationRule::new().min_length(2))]);
        let result = validator.validate(&form(json!({ "memo": "hello" })), &rules);
        assert_eq!(
            result.field("memo").unwrap().errors(),
            ["Must be no more than 4 characters"]
        );
    }

    #[test]
    fn it_runs_custom_rules_with_the_whole_form() {
        let confirm = ValidationRule::new().custom(|value, form| {
            if Some(value) == form.get("password") {
                Ok(())
            } else {
                Err("Passwords do not match".into())
            }
        });
        let blank_message = ValidationRule::new().custom(|_, _| Err("".into()));
        let rules = rules(vec![("confirm", confirm), ("terms", blank_message)]);
        let data = form(json!({ "password": "a", "confirm": "b" }));
        let result = validate_form(&data, &rules);
        assert_eq!(result.field("confirm").unwrap().errors(), ["Passwords do not match"]);
        assert_eq!(result.field("terms").unwrap().errors(), ["Invalid value"]);
        assert_eq!(result.invalid_fields(), vec!["confirm", "terms"]);
    }

    #[test]
    fn it_skips_fields_without_rules() {
        let rules = rules(vec![("zip", ValidationRule::new())]);
        let result = validate_form(&form(json!({ "zip": "12345", "extra": "x" })), &rules);
        assert!(result.is_valid());
        assert!(result.field("extra").is_none());
        assert_eq!(result.fields().len(), 1);
    }

    #[test]
    fn it_passes_unknown_types_with_a_warning() {
        let rules = rules(vec![("nickname", ValidationRule::new().with_type("emoji"))]);
        let result = validate_form(&form(json!({ "nickname": "🦀" })), &rules);
        assert!(result.is_valid());
        assert_eq!(
            result.field("nickname").unwrap().warnings(),
            ["Unsupported validation type `emoji`"]
        );
    }

    #[test]
    fn it_skips_type_checks_for_falsy_values() {
        let rules = rules(vec![
            ("ssn", ValidationRule::new().with_type("ssn")),
            ("amount", ValidationRule::new().with_type("currency")),
        ]);
        let result = validate_form(&form(json!({ "ssn": null, "amount": 0 })), &rules);
        assert!(result.is_valid());
        let result = validate_form(&form(json!({ "amount": 12 })), &rules);
        assert!(result.is_valid());
    }

    #[test]
    fn it_injects_password_policy_and_reference_date() {
        let security = SecurityConfig::default();
        let policy = |password: &str| {
            if password.len() >= 4 {
                ValidationResult::valid()
            } else {
                ValidationResult::with_errors(["Too short".into()])
            }
        };
        let validator = FormValidator::new(&security, &policy)
            .with_today(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        let rules = rules(vec![
            ("password", ValidationRule::new().with_type("password")),
            ("opened", ValidationRule::new().with_type("date")),
        ]);
        let result = validator.validate(
            &form(json!({ "password": "abc", "opened": "2015-01-01" })),
            &rules,
        );
        assert_eq!(result.field("password").unwrap().errors(), ["Too short"]);
        assert_eq!(
            result.field("opened").unwrap().errors(),
            ["Date must be between 1900 and 2010"]
        );
    }

    #[test]
    fn it_serializes_form_results() {
        let rules = rules(vec![("email", ValidationRule::new().required())]);
        let result = validate_form(&form(json!({})), &rules);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "isValid": false,
                "fields": {
                    "email": {
                        "isValid": false,
                        "errors": ["This field is required"],
                        "warnings": [],
                    },
                },
            })
        );
    }
}
