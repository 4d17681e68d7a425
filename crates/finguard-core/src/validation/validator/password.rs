use super::Validator;
use crate::{
    state::PasswordSettings,
    validation::{Rejection, ValidationResult},
};

/// A password-strength policy.
///
/// The validators only delegate to it, so tests and hosts can inject their own.
pub trait PasswordPolicy {
    /// Checks the strength of the password.
    fn validate_password_strength(&self, password: &str) -> ValidationResult;
}

impl<F> PasswordPolicy for F
where
    F: Fn(&str) -> ValidationResult,
{
    #[inline]
    fn validate_password_strength(&self, password: &str) -> ValidationResult {
        self(password)
    }
}

/// The default policy built from [`PasswordSettings`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrengthPolicy {
    settings: PasswordSettings,
}

impl StrengthPolicy {
    /// Creates a new instance with the settings.
    #[inline]
    pub fn new(settings: PasswordSettings) -> Self {
        Self { settings }
    }

    /// Returns the settings.
    #[inline]
    pub fn settings(&self) -> &PasswordSettings {
        &self.settings
    }
}

impl PasswordPolicy for StrengthPolicy {
    fn validate_password_strength(&self, password: &str) -> ValidationResult {
        let settings = &self.settings;
        let mut rejection = Rejection::new();
        let length = password.chars().count();
        if length < settings.min_length {
            let min_length = settings.min_length;
            rejection.push(format!(
                "Password must be at least {min_length} characters long"
            ));
        }
        if length > settings.max_length {
            let max_length = settings.max_length;
            rejection.push(format!(
                "Password must be no more than {max_length} characters long"
            ));
        }
        if settings.require_uppercase && !password.chars().any(char::is_uppercase) {
            rejection.push("Password must contain at least one uppercase letter");
        }
        if settings.require_lowercase && !password.chars().any(char::is_lowercase) {
            rejection.push("Password must contain at least one lowercase letter");
        }
        if settings.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            rejection.push("Password must contain at least one number");
        }
        if settings.require_special
            && !password
                .chars()
                .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
        {
            rejection.push("Password must contain at least one special character");
        }
        let lowercase = password.to_lowercase();
        if COMMON_PASSWORDS.contains(&lowercase.as_str()) {
            rejection.push("Password is too common");
        }
        ValidationResult::with_errors(rejection)
    }
}

/// A validator delegating to a [`PasswordPolicy`].
pub struct PasswordValidator<'a> {
    policy: &'a dyn PasswordPolicy,
}

impl<'a> PasswordValidator<'a> {
    /// Creates a new instance with the policy.
    #[inline]
    pub fn new(policy: &'a dyn PasswordPolicy) -> Self {
        Self { policy }
    }
}

impl Validator<str> for PasswordValidator<'_> {
    type Output = ();

    fn validate(&self, data: &str) -> Result<Self::Output, Rejection> {
        let mut rejection = Rejection::new();
        for error in self.policy.validate_password_strength(data).into_errors() {
            rejection.push(error);
        }
        rejection.check(())
    }
}

/// Passwords rejected regardless of their composition.
const COMMON_PASSWORDS: [&str; 12] = [
    "password",
    "password1",
    "password123",
    "password123!",
    "123456",
    "12345678",
    "123456789",
    "qwerty",
    "qwerty123",
    "letmein",
    "welcome1",
    "admin123",
];

#[cfg(test)]
mod tests {
    use super::{PasswordPolicy, PasswordValidator, StrengthPolicy, Validator};
    use crate::{state::PasswordSettings, validation::ValidationResult};

    #[test]
    fn it_accepts_strong_passwords() {
        let policy = StrengthPolicy::default();
        assert!(policy.validate_password_strength("C0rrect-Horse!").is_valid());
    }

    #[test]
    fn it_lists_every_unmet_requirement() {
        let policy = StrengthPolicy::default();
        let result = policy.validate_password_strength("abc");
        assert_eq!(
            result.errors(),
            [
                "Password must be at least 12 characters long",
                "Password must contain at least one uppercase letter",
                "Password must contain at least one number",
                "Password must contain at least one special character",
            ]
        );
    }

    #[test]
    fn it_rejects_common_passwords() {
        let policy = StrengthPolicy::new(PasswordSettings {
            min_length: 8,
            require_uppercase: false,
            require_special: false,
            ..PasswordSettings::default()
        });
        let result = policy.validate_password_strength("Password123");
        assert_eq!(result.errors(), ["Password is too common"]);
    }

    #[test]
    fn it_delegates_to_injected_policy() {
        let stub = |password: &str| {
            if password == "open sesame" {
                ValidationResult::valid()
            } else {
                ValidationResult::with_errors(["Wrong phrase".into()])
            }
        };
        let validator = PasswordValidator::new(&stub);
        assert!(validator.validate("open sesame").is_ok());
        assert_eq!(
            validator.validate("x").unwrap_err().messages(),
            ["Wrong phrase"]
        );
    }
}
