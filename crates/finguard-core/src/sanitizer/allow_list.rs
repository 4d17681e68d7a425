use super::{HtmlSanitizer, SanitizeOptions};
use crate::LazyLock;
use regex::Regex;

/// Elements which are never retained, even if allow-listed.
const REMOVED_ELEMENTS: [&str; 5] = ["script", "style", "iframe", "object", "embed"];

/// URL schemes which are dropped from attribute values.
const UNSAFE_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Attributes whose values are navigated to or fetched as URLs.
const URL_ATTRIBUTES: [&str; 7] = [
    "href",
    "src",
    "action",
    "formaction",
    "cite",
    "poster",
    "background",
];

/// Schemes permitted in URL attributes. Relative URLs carry no scheme.
const URL_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Comment pattern. An unterminated comment runs to the end of input.
static COMMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?(?:-->|\z)").expect("fail to create a regex for the HTML comment")
});

/// Patterns for the elements removed with their content.
static CONTENT_ELEMENT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ["script", "style", "iframe", "object"]
        .into_iter()
        .map(|tag| {
            let pattern = format!(r"(?is)<{tag}\b[^>]*>.*?(?:</{tag}\s*>|\z)");
            Regex::new(&pattern).expect("fail to create a regex for the removed element")
        })
        .collect()
});

/// Start or end tag pattern. Quoted attribute values may contain `>`.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(/?)([A-Za-z][A-Za-z0-9-]*)((?:[^>"']|"[^"]*"|'[^']*')*)>"#)
        .expect("fail to create a regex for the HTML tag")
});

/// Attribute pattern inside a tag.
static ATTRIBUTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'<>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("fail to create a regex for the HTML attribute")
});

/// Character reference pattern. The trailing semicolon is optional
/// as browsers decode legacy references without it.
static CHARACTER_REFERENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[A-Za-z]+);?")
        .expect("fail to create a regex for the character reference")
});

/// A regex-driven sanitizer which rebuilds allow-listed tags
/// and escapes everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowListSanitizer;

impl AllowListSanitizer {
    /// Creates a new instance.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl HtmlSanitizer for AllowListSanitizer {
    fn sanitize(&self, input: &str, options: &SanitizeOptions) -> String {
        let mut text = COMMENT_PATTERN.replace_all(input, "").into_owned();
        for pattern in CONTENT_ELEMENT_PATTERNS.iter() {
            text = pattern.replace_all(&text, "").into_owned();
        }

        let mut output = String::with_capacity(text.len());
        let mut last_end = 0;
        for captures in TAG_PATTERN.captures_iter(&text) {
            let Some(tag) = captures.get(0) else {
                continue;
            };
            push_escaped_text(&mut output, &text[last_end..tag.start()]);
            last_end = tag.end();

            let name = captures[2].to_ascii_lowercase();
            if REMOVED_ELEMENTS.contains(&name.as_str()) || !options.allows_tag(&name) {
                continue;
            }
            if &captures[1] == "/" {
                output.push_str("</");
                output.push_str(&name);
                output.push('>');
                continue;
            }
            output.push('<');
            output.push_str(&name);
            for attribute in ATTRIBUTE_PATTERN.captures_iter(&captures[3]) {
                let attribute_name = attribute[1].to_ascii_lowercase();
                if attribute_name.starts_with("on") || !options.allows_attribute(&attribute_name) {
                    continue;
                }
                let value = attribute
                    .get(2)
                    .or_else(|| attribute.get(3))
                    .or_else(|| attribute.get(4))
                    .map(|m| decode_character_references(m.as_str()));
                if value
                    .as_deref()
                    .is_some_and(|value| !is_safe_value(&attribute_name, value))
                {
                    continue;
                }
                output.push(' ');
                output.push_str(&attribute_name);
                if let Some(value) = value {
                    output.push_str("=\"");
                    push_escaped_attribute(&mut output, &value);
                    output.push('"');
                }
            }
            output.push('>');
        }
        push_escaped_text(&mut output, &text[last_end..]);
        output
    }
}

/// Decodes numeric and common named character references the way
/// a browser does before interpreting an attribute value.
/// Unknown names are kept as they are.
fn decode_character_references(value: &str) -> String {
    if !value.contains('&') {
        return value.to_owned();
    }
    CHARACTER_REFERENCE_PATTERN
        .replace_all(value, |captures: &regex::Captures<'_>| {
            let reference = &captures[1];
            let decoded = if let Some(hex) = reference
                .strip_prefix("#x")
                .or_else(|| reference.strip_prefix("#X"))
            {
                Some(decode_code_point(u32::from_str_radix(hex, 16).ok()))
            } else if let Some(decimal) = reference.strip_prefix('#') {
                Some(decode_code_point(decimal.parse().ok()))
            } else {
                match reference {
                    "amp" | "AMP" => Some('&'),
                    "lt" | "LT" => Some('<'),
                    "gt" | "GT" => Some('>'),
                    "quot" | "QUOT" => Some('"'),
                    "apos" => Some('\''),
                    "colon" => Some(':'),
                    "Tab" => Some('\t'),
                    "NewLine" => Some('\n'),
                    "nbsp" => Some('\u{a0}'),
                    _ => None,
                }
            };
            match decoded {
                Some(c) => c.to_string(),
                None => captures[0].to_owned(),
            }
        })
        .into_owned()
}

/// Maps a numeric reference to a char. Null, surrogates and
/// out-of-range values become the replacement char.
fn decode_code_point(code_point: Option<u32>) -> char {
    code_point
        .filter(|&code_point| code_point != 0)
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Returns `true` if the decoded attribute value may be kept.
///
/// URL attributes accept relative URLs and the schemes in [`URL_SCHEMES`].
/// Other attributes are only checked against [`UNSAFE_SCHEMES`].
fn is_safe_value(name: &str, value: &str) -> bool {
    let normalized = value
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    if UNSAFE_SCHEMES
        .iter()
        .any(|scheme| normalized.starts_with(scheme))
    {
        return false;
    }
    if !URL_ATTRIBUTES.contains(&name) {
        return true;
    }
    match url_scheme(&normalized) {
        Some(scheme) => URL_SCHEMES.contains(&scheme),
        None => true,
    }
}

/// Returns the scheme of an absolute URL, or `None` for a relative one.
fn url_scheme(url: &str) -> Option<&str> {
    let end = url.find([':', '/', '?', '#'])?;
    url[end..].starts_with(':').then(|| &url[..end])
}

fn push_escaped_text(output: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

fn push_escaped_attribute(output: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}
