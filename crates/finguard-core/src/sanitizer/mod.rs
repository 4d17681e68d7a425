//! HTML sanitization driven by allow-lists.
//!
//! The markup cleaning itself is delegated to an [`HtmlSanitizer`] engine;
//! this module only assembles its options from the security config and
//! per-call overrides.

use crate::{JsonValue, LazyLock, state::SecurityConfig};

mod allow_list;

pub use allow_list::AllowListSanitizer;

/// Default engine shared by [`sanitize_input`] and [`sanitize_str`].
static DEFAULT_SANITIZER: LazyLock<AllowListSanitizer> = LazyLock::new(AllowListSanitizer::new);

/// An engine which removes markup not permitted by the options.
pub trait HtmlSanitizer {
    /// Cleans the input.
    fn sanitize(&self, input: &str, options: &SanitizeOptions) -> String;
}

/// Options passed to the sanitization engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizeOptions {
    /// Lowercase tag names retained.
    pub allowed_tags: Vec<String>,
    /// Lowercase attribute names retained.
    pub allowed_attributes: Vec<String>,
    /// Whether `data-*` attributes are retained.
    pub allow_data_attributes: bool,
}

impl SanitizeOptions {
    /// Creates the options from the security config.
    pub fn from_config(config: &SecurityConfig) -> Self {
        Self {
            allowed_tags: config.allowed_tags.clone(),
            allowed_attributes: config.allowed_attributes.clone(),
            allow_data_attributes: config.allow_data_attr,
        }
    }

    /// Merges the overrides on top of `self`.
    pub fn merge(mut self, overrides: SanitizeOverrides) -> Self {
        if let Some(tags) = overrides.allowed_tags {
            self.allowed_tags = tags.iter().map(|s| s.to_ascii_lowercase()).collect();
        }
        if let Some(attributes) = overrides.allowed_attributes {
            self.allowed_attributes = attributes.iter().map(|s| s.to_ascii_lowercase()).collect();
        }
        if let Some(allow_data_attributes) = overrides.allow_data_attributes {
            self.allow_data_attributes = allow_data_attributes;
        }
        self
    }

    /// Returns `true` if the tag is allowed.
    #[inline]
    pub fn allows_tag(&self, tag: &str) -> bool {
        self.allowed_tags.iter().any(|s| s.eq_ignore_ascii_case(tag))
    }

    /// Returns `true` if the attribute is allowed.
    pub fn allows_attribute(&self, attribute: &str) -> bool {
        let is_data_attribute = attribute
            .get(..5)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("data-"));
        (is_data_attribute && self.allow_data_attributes)
            || self
                .allowed_attributes
                .iter()
                .any(|s| s.eq_ignore_ascii_case(attribute))
    }
}

/// Per-call overrides. Each `Some` field replaces the configured value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizeOverrides {
    /// Replacement tag allow-list.
    pub allowed_tags: Option<Vec<String>>,
    /// Replacement attribute allow-list.
    pub allowed_attributes: Option<Vec<String>>,
    /// Replacement `data-*` flag.
    pub allow_data_attributes: Option<bool>,
}

/// Sanitizes a string with the default engine.
#[inline]
pub fn sanitize_str(input: &str, config: &SecurityConfig, overrides: SanitizeOverrides) -> String {
    sanitize_str_with(&*DEFAULT_SANITIZER, input, config, overrides)
}

/// Sanitizes a string with the supplied engine.
pub fn sanitize_str_with(
    engine: &dyn HtmlSanitizer,
    input: &str,
    config: &SecurityConfig,
    overrides: SanitizeOverrides,
) -> String {
    let options = SanitizeOptions::from_config(config).merge(overrides);
    engine.sanitize(input, &options)
}

/// Sanitizes a string value with the default engine.
/// Other values are returned unchanged.
#[inline]
pub fn sanitize_input(
    value: JsonValue,
    config: &SecurityConfig,
    overrides: SanitizeOverrides,
) -> JsonValue {
    sanitize_input_with(&*DEFAULT_SANITIZER, value, config, overrides)
}

/// Sanitizes a string value with the supplied engine.
/// Other values are returned unchanged.
pub fn sanitize_input_with(
    engine: &dyn HtmlSanitizer,
    value: JsonValue,
    config: &SecurityConfig,
    overrides: SanitizeOverrides,
) -> JsonValue {
    match value {
        JsonValue::String(s) => JsonValue::String(sanitize_str_with(engine, &s, config, overrides)),
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        HtmlSanitizer, SanitizeOptions, SanitizeOverrides, sanitize_input, sanitize_input_with,
    };
    use crate::{json, state::SecurityConfig};
    use std::cell::RefCell;

    struct RecordingSanitizer {
        options: RefCell<Option<SanitizeOptions>>,
    }

    impl HtmlSanitizer for RecordingSanitizer {
        fn sanitize(&self, input: &str, options: &SanitizeOptions) -> String {
            self.options.replace(Some(options.clone()));
            input.to_uppercase()
        }
    }

    #[test]
    fn it_merges_overrides_over_config() {
        let engine = RecordingSanitizer {
            options: RefCell::new(None),
        };
        let overrides = SanitizeOverrides {
            allowed_tags: Some(vec!["B".to_owned()]),
            allow_data_attributes: Some(true),
            ..SanitizeOverrides::default()
        };
        let config = SecurityConfig::default();
        let value = sanitize_input_with(&engine, json!("hi"), &config, overrides);
        assert_eq!(value, json!("HI"));

        let options = engine.options.take().unwrap();
        assert_eq!(options.allowed_tags, vec!["b"]);
        assert_eq!(options.allowed_attributes, config.allowed_attributes);
        assert!(options.allow_data_attributes);
    }

    #[test]
    fn it_passes_non_strings_through() {
        let config = SecurityConfig::default();
        for value in [json!(42), json!(null), json!(["<b>x</b>"]), json!({ "a": 1 })] {
            let sanitized = sanitize_input(value.clone(), &config, SanitizeOverrides::default());
            assert_eq!(sanitized, value);
        }
    }

    #[test]
    fn it_matches_data_attributes() {
        let options = SanitizeOptions {
            allowed_attributes: vec!["title".to_owned()],
            allow_data_attributes: true,
            ..SanitizeOptions::default()
        };
        assert!(options.allows_attribute("data-id"));
        assert!(options.allows_attribute("TITLE"));
        assert!(!options.allows_attribute("data"));
        assert!(!options.allows_attribute("onclick"));
    }
}
