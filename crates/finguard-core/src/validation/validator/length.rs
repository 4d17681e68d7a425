use super::Validator;
use crate::{
    JsonValue,
    extension::JsonValueExt,
    state::{DEFAULT_MAX_INPUT_LENGTH, SecurityConfig},
    validation::Rejection,
};

/// A validator for the length of an input, in chars.
///
/// The lower and upper bounds are independent checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthValidator {
    /// Minimum length.
    min: usize,
    /// Maximum length.
    max: usize,
}

impl LengthValidator {
    /// Creates a new instance with the bounds.
    #[inline]
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Creates a new instance whose upper bound is the configured maximum input length.
    #[inline]
    pub fn from_config(config: &SecurityConfig) -> Self {
        Self::new(0, config.max_input_length)
    }

    /// Sets the minimum length.
    #[inline]
    pub fn with_min(mut self, min: usize) -> Self {
        self.min = min;
        self
    }

    /// Sets the maximum length.
    #[inline]
    pub fn with_max(mut self, max: usize) -> Self {
        self.max = max;
        self
    }

    /// Checks a length against the bounds.
    pub fn check_len(&self, length: usize) -> Result<usize, Rejection> {
        let mut rejection = Rejection::new();
        let (min, max) = (self.min, self.max);
        if length < min {
            rejection.push(format!("Must be at least {min} characters"));
        }
        if length > max {
            rejection.push(format!("Must be no more than {max} characters"));
        }
        rejection.check(length)
    }
}

impl Default for LengthValidator {
    #[inline]
    fn default() -> Self {
        Self::new(0, DEFAULT_MAX_INPUT_LENGTH)
    }
}

impl Validator<str> for LengthValidator {
    type Output = usize;

    #[inline]
    fn validate(&self, data: &str) -> Result<Self::Output, Rejection> {
        self.check_len(data.chars().count())
    }
}

impl Validator<JsonValue> for LengthValidator {
    type Output = usize;

    #[inline]
    fn validate(&self, data: &JsonValue) -> Result<Self::Output, Rejection> {
        self.check_len(data.text_len())
    }
}

#[cfg(test)]
mod tests {
    use super::{LengthValidator, Validator};
    use crate::json;

    #[test]
    fn it_checks_both_bounds() {
        let validator = LengthValidator::new(2, 5);
        assert_eq!(validator.validate("abc"), Ok(3));
        assert_eq!(validator.validate("ééééé"), Ok(5));
        assert_eq!(
            validator.validate("a").unwrap_err().messages(),
            ["Must be at least 2 characters"]
        );
        assert_eq!(
            validator.validate("abcdef").unwrap_err().messages(),
            ["Must be no more than 5 characters"]
        );
    }

    #[test]
    fn it_reports_conflicting_bounds_together() {
        let validator = LengthValidator::new(10, 2);
        let rejection = validator.validate("abcd").unwrap_err();
        assert_eq!(
            rejection.messages(),
            ["Must be at least 10 characters", "Must be no more than 2 characters"]
        );
    }

    #[test]
    fn it_treats_falsy_values_as_empty() {
        let validator = LengthValidator::default().with_min(1);
        assert!(validator.validate(&json!(null)).is_err());
        assert!(validator.validate(&json!(0)).is_err());
        assert_eq!(validator.validate(&json!(["a", "b"])), Ok(2));
        assert!(LengthValidator::default().validate("x".repeat(1001).as_str()).is_err());
    }
}
