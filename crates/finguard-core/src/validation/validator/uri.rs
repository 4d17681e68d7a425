use super::Validator;
use crate::validation::Rejection;
use url::Url;

/// A validator for a well-formed `https` URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlValidator;

impl Validator<str> for UrlValidator {
    type Output = Url;

    fn validate(&self, data: &str) -> Result<Self::Output, Rejection> {
        let url = Url::parse(data).map_err(|_| Rejection::with_message("Invalid URL format"))?;
        if url.scheme() != "https" {
            return Err(Rejection::with_message("Only HTTPS URLs are allowed"));
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::{UrlValidator, Validator};

    #[test]
    fn it_requires_https() {
        assert!(UrlValidator.validate("https://bank.example.com/login?next=/").is_ok());
        assert_eq!(
            UrlValidator.validate("http://bank.example.com").unwrap_err().messages(),
            ["Only HTTPS URLs are allowed"]
        );
        assert_eq!(
            UrlValidator.validate("javascript:alert(1)").unwrap_err().messages(),
            ["Only HTTPS URLs are allowed"]
        );
    }

    #[test]
    fn it_rejects_malformed_urls() {
        for input in ["", "bank.example.com", "https://", "://missing-scheme"] {
            let rejection = UrlValidator.validate(input).unwrap_err();
            assert_eq!(rejection.messages(), ["Invalid URL format"], "{input}");
        }
    }
}
