use crate::JsonValue;
use std::borrow::Cow;

/// Extension trait for [`serde_json::Value`] as a submitted form value.
pub trait JsonValueExt {
    /// Returns `true` if the value is falsy: `null`, `false`, `0`, `NaN` or an empty string.
    fn is_falsy(&self) -> bool;

    /// Returns `true` if the value is `null` or a whitespace-only text once stringified.
    fn is_blank(&self) -> bool;

    /// Stringifies the value. Strings are borrowed, `null` becomes an empty string.
    fn to_text(&self) -> Cow<'_, str>;

    /// Returns the length of a truthy value, or `0` for a falsy one.
    /// Arrays count their elements; other values count the chars of their text.
    fn text_len(&self) -> usize;
}

impl JsonValueExt for JsonValue {
    fn is_falsy(&self) -> bool {
        match self {
            JsonValue::Null => true,
            JsonValue::Bool(b) => !b,
            JsonValue::Number(n) => n.as_f64().is_none_or(|f| f == 0.0 || f.is_nan()),
            JsonValue::String(s) => s.is_empty(),
            _ => false,
        }
    }

    #[inline]
    fn is_blank(&self) -> bool {
        self.is_null() || self.to_text().trim().is_empty()
    }

    fn to_text(&self) -> Cow<'_, str> {
        match self {
            JsonValue::Null => Cow::Borrowed(""),
            JsonValue::String(s) => Cow::Borrowed(s),
            JsonValue::Array(vec) => {
                let texts = vec.iter().map(|v| v.to_text()).collect::<Vec<_>>();
                Cow::Owned(texts.join(","))
            }
            _ => Cow::Owned(self.to_string()),
        }
    }

    fn text_len(&self) -> usize {
        if self.is_falsy() {
            return 0;
        }
        match self {
            JsonValue::Array(vec) => vec.len(),
            _ => self.to_text().chars().count(),
        }
    }
}
