use finguard_core::{
    Decimal, json,
    validation::{self, CardType, IpFamily, aba_checksum, passes_luhn},
};
use std::str::FromStr;

const LUHN_VALID_NUMBERS: [&str; 6] = [
    "4111111111111111",
    "5555555555554444",
    "378282246310005",
    "6011111111111117",
    "30569309025904",
    "3530111333300000",
];

#[test]
fn it_accepts_luhn_valid_numbers() {
    for number in LUHN_VALID_NUMBERS {
        assert!(passes_luhn(number), "{number}");
        assert!(validation::validate_credit_card(number).is_valid(), "{number}");
    }
}

#[test]
fn it_detects_single_digit_mutations() {
    for number in LUHN_VALID_NUMBERS {
        let digits = number.as_bytes();
        for index in 0..digits.len() {
            for digit in b'0'..=b'9' {
                if digit == digits[index] {
                    continue;
                }
                let mut mutated = digits.to_vec();
                mutated[index] = digit;
                let mutated = String::from_utf8(mutated).unwrap();
                let result = validation::validate_credit_card(&mutated);
                assert!(!result.is_valid(), "{mutated}");
                assert_eq!(result.errors(), ["Invalid card number"]);
                assert_eq!(result.card_type(), None);
            }
        }
    }
}

#[test]
fn it_classifies_card_families() {
    let cases = [
        ("4111 1111 1111 1111", CardType::Visa),
        ("5105-1051-0510-5100", CardType::Mastercard),
        ("5555555555554444", CardType::Mastercard),
        ("378282246310005", CardType::Amex),
        ("371449635398431", CardType::Amex),
        ("6011111111111117", CardType::Discover),
        ("30569309025904", CardType::DinersClub),
        ("3530111333300000", CardType::Jcb),
    ];
    for (number, card_type) in cases {
        let result = validation::validate_credit_card(number);
        assert_eq!(result.card_type(), Some(card_type), "{number}");
    }
}

#[test]
fn it_serializes_card_results() {
    let valid = serde_json::to_value(validation::validate_credit_card("4111111111111111")).unwrap();
    assert_eq!(
        valid,
        json!({ "isValid": true, "errors": [], "cardType": "visa" })
    );

    let invalid = serde_json::to_value(validation::validate_credit_card("4111")).unwrap();
    assert_eq!(
        invalid,
        json!({
            "isValid": false,
            "errors": ["Invalid card number length"],
            "cardType": null,
        })
    );
}

#[test]
fn it_checks_routing_numbers_exactly() {
    assert!(validation::validate_routing_number("021000021").is_valid());
    assert_eq!(
        validation::validate_routing_number("021000020").errors(),
        ["Invalid routing number"]
    );
    for length in [0, 1, 8, 10, 12] {
        let number = "1".repeat(length);
        assert_eq!(
            validation::validate_routing_number(&number).errors(),
            ["Routing number must be 9 digits"],
            "{number}"
        );
    }
    for suffix in 0..1000 {
        let number = format!("021000{suffix:03}");
        let expected = aba_checksum(&number) == Some(0);
        assert_eq!(
            validation::validate_routing_number(&number).is_valid(),
            expected,
            "{number}"
        );
    }
}

#[test]
fn it_rejects_denylisted_ssns() {
    for digit in '0'..='9' {
        let ssn = digit.to_string().repeat(9);
        let result = validation::validate_ssn(&ssn);
        assert!(result.errors().iter().any(|e| e == "Invalid SSN"), "{ssn}");
    }
    assert_eq!(validation::validate_ssn("123456789").errors(), ["Invalid SSN"]);
    assert!(validation::validate_ssn("123-45-6789").is_valid());
    assert_eq!(validation::validate_ssn("111-11-1111").errors(), ["Invalid SSN"]);
    assert!(validation::validate_ssn("078-05-1120").is_valid());
}

#[test]
fn it_bounds_currency_amounts() {
    let result = validation::validate_currency("999999999.99");
    assert!(result.is_valid());
    assert_eq!(
        result.numeric_value(),
        Some(Decimal::from_str("999999999.99").unwrap())
    );

    let result = validation::validate_currency("1000000000.00");
    assert_eq!(result.errors(), ["Amount out of range"]);
    assert_eq!(result.numeric_value(), None);

    let result = validation::validate_currency("-5.00");
    assert_eq!(result.errors(), ["Invalid currency format"]);

    let result = validation::validate_currency("$1,234.50");
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({ "isValid": true, "errors": [], "numericValue": 1234.5 })
    );
}

#[test]
fn it_reports_ip_families() {
    let result = validation::validate_ip_address("192.168.0.1");
    assert_eq!(result.ip_type(), Some(IpFamily::IPv4));
    let result = validation::validate_ip_address("2001:0db8:85a3:0000:0000:8a2e:0370:7334");
    assert_eq!(result.ip_type(), Some(IpFamily::IPv6));
    let result = validation::validate_ip_address("2001:db8::1");
    assert_eq!(result.errors(), ["Invalid IP address"]);
    assert_eq!(
        serde_json::to_value(validation::validate_ip_address("10.0.0.1")).unwrap(),
        json!({ "isValid": true, "errors": [], "type": "IPv4" })
    );
}

#[test]
fn it_returns_identical_results_on_repeated_calls() {
    let inputs = [
        "",
        "   ",
        "alice@example.com",
        "not an email",
        "4111111111111111",
        "021000021",
        "$1,000.00",
        "1990-01-01",
        "http://example.com",
        "256.1.1.1",
    ];
    for input in inputs {
        assert_eq!(validation::validate_email(input), validation::validate_email(input));
        assert_eq!(validation::validate_phone(input), validation::validate_phone(input));
        assert_eq!(validation::validate_ssn(input), validation::validate_ssn(input));
        assert_eq!(
            validation::validate_credit_card(input),
            validation::validate_credit_card(input)
        );
        assert_eq!(
            validation::validate_bank_account(input),
            validation::validate_bank_account(input)
        );
        assert_eq!(
            validation::validate_routing_number(input),
            validation::validate_routing_number(input)
        );
        assert_eq!(
            validation::validate_currency(input),
            validation::validate_currency(input)
        );
        assert_eq!(
            validation::validate_date(input, None),
            validation::validate_date(input, None)
        );
        assert_eq!(validation::validate_url(input), validation::validate_url(input));
        assert_eq!(
            validation::validate_ip_address(input),
            validation::validate_ip_address(input)
        );
        assert_eq!(
            validation::validate_length(input, 2, Some(8)),
            validation::validate_length(input, 2, Some(8))
        );
    }
}
