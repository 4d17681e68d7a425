use super::{DateValidator, Validator};
use crate::validation::Rejection;
use chrono::NaiveDate;

/// Default minimum age in years.
pub const DEFAULT_MIN_AGE: u32 = 18;

/// Average length of a year in days.
const DAYS_PER_YEAR: f64 = 365.25;

/// A validator for a birth date, requiring a minimum age in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeValidator<'a> {
    /// Minimum age.
    min_age: u32,
    /// Validator for the birth date.
    date_validator: DateValidator<'a>,
}

impl<'a> AgeValidator<'a> {
    /// Creates a new instance relative to the current local date.
    #[inline]
    pub fn new(min_age: u32) -> Self {
        Self {
            min_age,
            date_validator: DateValidator::new(),
        }
    }

    /// Creates a new instance relative to the supplied date.
    #[inline]
    pub fn with_today(min_age: u32, today: NaiveDate) -> Self {
        Self {
            min_age,
            date_validator: DateValidator::with_today(today),
        }
    }

    /// Sets the format hint for the birth date.
    #[inline]
    pub fn with_format(mut self, format: &'a str) -> Self {
        self.date_validator = self.date_validator.with_format(format);
        self
    }

    /// Returns the age in whole years at the reference date,
    /// counting a year as 365.25 days. It is negative for a birth date in the future.
    pub fn age_at(&self, birth_date: NaiveDate) -> i64 {
        let days = (self.date_validator.today() - birth_date).num_days();
        (days as f64 / DAYS_PER_YEAR).floor() as i64
    }
}

impl Default for AgeValidator<'_> {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_MIN_AGE)
    }
}

impl Validator<str> for AgeValidator<'_> {
    type Output = u32;

    fn validate(&self, data: &str) -> Result<Self::Output, Rejection> {
        let birth_date = self.date_validator.validate(data)?;
        let min_age = self.min_age;
        match u32::try_from(self.age_at(birth_date)) {
            Ok(age) if age >= min_age => Ok(age),
            _ => Err(Rejection::with_message(format!(
                "Must be at least {min_age} years old"
            ))),
        }
    }
}
