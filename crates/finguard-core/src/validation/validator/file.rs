use super::Validator;
use crate::{LazyLock, state::SecurityConfig, validation::Rejection};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Metadata of an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// File name including the extension.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
}

impl FileInfo {
    /// Creates a new instance.
    #[inline]
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Returns the lowercased suffix after the last `.`,
    /// or the whole lowercased name if there is no `.`.
    #[inline]
    pub fn extension(&self) -> String {
        self.name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }
}

/// A validator for an uploaded file: extension allow-list, maximum size
/// and a denylist of executable extensions. All three checks are independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileValidator {
    /// Lowercase extensions without the leading `.`.
    allowed_types: Vec<String>,
    /// Maximum size in bytes.
    max_size: u64,
}

impl FileValidator {
    /// Creates a new instance from the security config.
    pub fn from_config(config: &SecurityConfig) -> Self {
        Self {
            allowed_types: config.allowed_file_types.clone(),
            max_size: config.max_file_size,
        }
    }

    /// Overrides the allowed extensions.
    pub fn with_allowed_types<T: AsRef<str>>(mut self, allowed_types: &[T]) -> Self {
        self.allowed_types = allowed_types
            .iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    /// Overrides the maximum size in bytes.
    #[inline]
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    /// Validates an optional file. A missing file is rejected without further checks.
    pub fn validate_optional(&self, file: Option<&FileInfo>) -> Result<(), Rejection> {
        match file {
            Some(file) => self.validate(file),
            None => Err(Rejection::with_message("No file provided")),
        }
    }
}

impl Default for FileValidator {
    #[inline]
    fn default() -> Self {
        Self::from_config(&SecurityConfig::default())
    }
}

impl Validator<FileInfo> for FileValidator {
    type Output = ();

    fn validate(&self, data: &FileInfo) -> Result<Self::Output, Rejection> {
        let mut rejection = Rejection::new();
        let extension = data.extension();
        if !self.allowed_types.contains(&extension) {
            let allowed_types = self.allowed_types.join(", ");
            rejection.push(format!(
                "File type not allowed. Allowed types: {allowed_types}"
            ));
        }
        if data.size > self.max_size {
            let max_size_mb = format_megabytes(self.max_size);
            rejection.push(format!("File size exceeds maximum of {max_size_mb}MB"));
        }
        if EXECUTABLE_FILE_PATTERN.is_match(&data.name) {
            rejection.push("Executable files are not allowed");
        }
        rejection.check(())
    }
}

/// Formats bytes as megabytes with at most two decimals.
fn format_megabytes(bytes: u64) -> String {
    let megabytes = bytes as f64 / (1024.0 * 1024.0);
    let rounded = (megabytes * 100.0).round() / 100.0;
    rounded.to_string()
}

/// Regex for executable-style file names.
static EXECUTABLE_FILE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(?:exe|bat|cmd|scr|vbs|js|jar|php)$")
        .expect("fail to create a regex for the executable file names")
});

#[cfg(test)]
mod tests {
    use super::{FileInfo, FileValidator, Validator};

    #[test]
    fn it_accepts_allowed_files() {
        let validator = FileValidator::default();
        assert!(validator.validate(&FileInfo::new("statement.PDF", 1024)).is_ok());
        assert!(validator.validate(&FileInfo::new("scan.2024.png", 0)).is_ok());
    }

    #[test]
    fn it_rejects_missing_file_immediately() {
        let rejection = FileValidator::default().validate_optional(None).unwrap_err();
        assert_eq!(rejection.messages(), ["No file provided"]);
    }

    #[test]
    fn it_reports_independent_failures() {
        let validator = FileValidator::default()
            .with_allowed_types(&["pdf", ".JS"])
            .with_max_size(1024 * 1024);
        let rejection = validator
            .validate(&FileInfo::new("payload.exe", 2 * 1024 * 1024))
            .unwrap_err();
        assert_eq!(
            rejection.messages(),
            [
                "File type not allowed. Allowed types: pdf, js",
                "File size exceeds maximum of 1MB",
                "Executable files are not allowed",
            ]
        );

        let rejection = validator.validate(&FileInfo::new("app.Js", 10)).unwrap_err();
        assert_eq!(rejection.messages(), ["Executable files are not allowed"]);
    }

    #[test]
    fn it_uses_whole_name_without_dot() {
        assert_eq!(FileInfo::new("README", 1).extension(), "readme");
        assert!(FileValidator::default().validate(&FileInfo::new("README", 1)).is_err());
        assert!(FileValidator::default().validate(&FileInfo::new("pdf", 1)).is_ok());
    }
}
