use super::Validator;
use crate::{
    LazyLock,
    validation::{IpFamily, Rejection},
};
use regex::Regex;

/// A validator for a strict dotted-quad IPv4 or a full 8-group IPv6 address.
///
/// Compressed IPv6 forms such as `::1` are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpAddrValidator;

impl Validator<str> for IpAddrValidator {
    type Output = IpFamily;

    fn validate(&self, data: &str) -> Result<Self::Output, Rejection> {
        if IPV4_PATTERN.is_match(data) {
            Ok(IpFamily::IPv4)
        } else if IPV6_PATTERN.is_match(data) {
            Ok(IpFamily::IPv6)
        } else {
            Err(Rejection::with_message("Invalid IP address"))
        }
    }
}

/// Regex for the IPv4 address.
static IPV4_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
    )
    .expect("fail to create a regex for the IPv4 address")
});

/// Regex for the IPv6 address.
static IPV6_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}$")
        .expect("fail to create a regex for the IPv6 address")
});

#[cfg(test)]
mod tests {
    use super::{IpAddrValidator, IpFamily, Validator};

    #[test]
    fn it_detects_address_family() {
        assert_eq!(IpAddrValidator.validate("192.168.0.1"), Ok(IpFamily::IPv4));
        assert_eq!(IpAddrValidator.validate("255.255.255.255"), Ok(IpFamily::IPv4));
        assert_eq!(
            IpAddrValidator.validate("2001:0db8:85a3:0000:0000:8a2e:0370:7334"),
            Ok(IpFamily::IPv6)
        );
        assert_eq!(IpAddrValidator.validate("2001:db8:0:0:0:0:0:1"), Ok(IpFamily::IPv6));
    }

    #[test]
    fn it_rejects_loose_forms() {
        for input in ["256.1.1.1", "1.2.3", "1.2.3.4.5", "::1", "2001:db8::1", "", "localhost"] {
            let rejection = IpAddrValidator.validate(input).unwrap_err();
            assert_eq!(rejection.messages(), ["Invalid IP address"], "{input}");
        }
    }
}
