use crate::extension::TomlTableExt;
use toml::value::Table;

/// Default maximum number of chars accepted for a free-text input.
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 1000;

/// Default maximum size of an uploaded file in bytes (10 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Security policy data consumed by the validators and the sanitizer.
///
/// All fields are read-only inputs; validators never mutate the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityConfig {
    /// Default upper bound for the length validator.
    pub max_input_length: usize,
    /// Lowercase file extensions accepted for uploads.
    pub allowed_file_types: Vec<String>,
    /// Maximum upload size in bytes.
    pub max_file_size: u64,
    /// HTML tags retained by the sanitizer.
    pub allowed_tags: Vec<String>,
    /// HTML attributes retained by the sanitizer.
    pub allowed_attributes: Vec<String>,
    /// Whether `data-*` attributes are retained by the sanitizer.
    pub allow_data_attr: bool,
    /// Password strength requirements.
    pub password: PasswordSettings,
}

impl SecurityConfig {
    /// Builds the config from the `[security]` table,
    /// falling back to the default for each missing key.
    pub fn from_table(table: &Table) -> Self {
        let mut config = Self::default();
        if let Some(max_input_length) = table.get_usize("max-input-length") {
            config.max_input_length = max_input_length;
        }
        if let Some(file_types) = table.get_str_array("allowed-file-types") {
            config.allowed_file_types = file_types
                .into_iter()
                .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
                .collect();
        }
        if let Some(max_file_size) = table.get_u64("max-file-size") {
            config.max_file_size = max_file_size;
        }
        if let Some(tags) = table.get_str_array("allowed-tags") {
            config.allowed_tags = tags.into_iter().map(|s| s.to_ascii_lowercase()).collect();
        }
        if let Some(attributes) = table.get_str_array("allowed-attributes") {
            config.allowed_attributes = attributes
                .into_iter()
                .map(|s| s.to_ascii_lowercase())
                .collect();
        }
        if let Some(allow_data_attr) = table.get_bool("allow-data-attr") {
            config.allow_data_attr = allow_data_attr;
        }
        if let Some(password) = table.get_table("password") {
            config.password = PasswordSettings::from_table(password);
        }
        config
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        let to_strings = |values: &[&str]| values.iter().map(|&s| s.to_owned()).collect();
        Self {
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            allowed_file_types: to_strings(&[
                "jpg", "jpeg", "png", "gif", "pdf", "doc", "docx", "xls", "xlsx", "csv", "txt",
            ]),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            allowed_tags: to_strings(&[
                "b", "i", "em", "strong", "p", "br", "ul", "ol", "li", "a", "span",
            ]),
            allowed_attributes: to_strings(&["href", "title", "class"]),
            allow_data_attr: false,
            password: PasswordSettings::default(),
        }
    }
}

/// Password strength requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordSettings {
    /// Minimum number of chars.
    pub min_length: usize,
    /// Maximum number of chars.
    pub max_length: usize,
    /// Requires at least one uppercase letter.
    pub require_uppercase: bool,
    /// Requires at least one lowercase letter.
    pub require_lowercase: bool,
    /// Requires at least one decimal digit.
    pub require_digit: bool,
    /// Requires at least one char which is neither alphanumeric nor whitespace.
    pub require_special: bool,
}

impl PasswordSettings {
    /// Builds the settings from the `[security.password]` table.
    pub fn from_table(table: &Table) -> Self {
        let defaults = Self::default();
        Self {
            min_length: table.get_usize("min-length").unwrap_or(defaults.min_length),
            max_length: table.get_usize("max-length").unwrap_or(defaults.max_length),
            require_uppercase: table
                .get_bool("require-uppercase")
                .unwrap_or(defaults.require_uppercase),
            require_lowercase: table
                .get_bool("require-lowercase")
                .unwrap_or(defaults.require_lowercase),
            require_digit: table
                .get_bool("require-digit")
                .unwrap_or(defaults.require_digit),
            require_special: table
                .get_bool("require-special")
                .unwrap_or(defaults.require_special),
        }
    }
}

impl Default for PasswordSettings {
    fn default() -> Self {
        Self {
            min_length: 12,
            max_length: 128,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_special: true,
        }
    }
}
