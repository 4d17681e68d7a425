use super::Validator;
use crate::validation::Rejection;
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

/// Date-only formats tried after the caller's hint.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m-%d-%Y", "%B %d, %Y"];

/// Date-time formats tried after the date-only ones.
const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// A validator for a calendar date between `1900-01-01` and
/// December 31 ten years after the current year.
///
/// The format hint is tried first, but other common formats are still accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateValidator<'a> {
    /// Optional `strftime`-style format hint.
    format: Option<&'a str>,
    /// Reference date for the upper bound.
    today: NaiveDate,
}

impl<'a> DateValidator<'a> {
    /// Creates a new instance relative to the current local date.
    #[inline]
    pub fn new() -> Self {
        Self::with_today(Local::now().date_naive())
    }

    /// Creates a new instance relative to the supplied date.
    #[inline]
    pub fn with_today(today: NaiveDate) -> Self {
        Self {
            format: None,
            today,
        }
    }

    /// Sets the format hint.
    #[inline]
    pub fn with_format(mut self, format: &'a str) -> Self {
        self.format = Some(format);
        self
    }

    /// Returns the reference date.
    #[inline]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Returns the accepted range of dates.
    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        let min_date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN);
        let max_date = NaiveDate::from_ymd_opt(self.today.year() + 10, 12, 31)
            .unwrap_or(NaiveDate::MAX);
        (min_date, max_date)
    }

    /// Parses the date-like string, ignoring any time of day.
    pub fn parse(&self, data: &str) -> Option<NaiveDate> {
        let data = data.trim();
        if data.is_empty() {
            return None;
        }
        if let Some(format) = self.format {
            if let Ok(date) = NaiveDate::parse_from_str(data, format) {
                return Some(date);
            }
            if let Ok(dt) = NaiveDateTime::parse_from_str(data, format) {
                return Some(dt.date());
            }
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(data) {
            return Some(dt.date_naive());
        }
        if let Some(date) = DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(data, format).ok())
        {
            return Some(date);
        }
        if let Some(dt) = DATE_TIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(data, format).ok())
        {
            return Some(dt.date());
        }
        DateTime::parse_from_rfc2822(data)
            .ok()
            .map(|dt| dt.date_naive())
    }
}

impl Default for DateValidator<'_> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Validator<str> for DateValidator<'_> {
    type Output = NaiveDate;

    fn validate(&self, data: &str) -> Result<Self::Output, Rejection> {
        let date = self
            .parse(data)
            .ok_or_else(|| Rejection::with_message("Invalid date"))?;
        let (min_date, max_date) = self.bounds();
        if date < min_date || date > max_date {
            let max_year = max_date.year();
            return Err(Rejection::with_message(format!(
                "Date must be between 1900 and {max_year}"
            )));
        }
        Ok(date)
    }
}
