mod mask_text;

pub(crate) use mask_text::mask_text;

/// Masks a card number, keeping only the last four digits visible.
///
/// Non-digit separators are dropped before masking.
pub fn mask_card_number(number: &str) -> String {
    let digits = extract_digits(number);
    mask_text(&digits, 0, 4)
}

/// Masks a bank account or routing number, keeping only the last four digits visible.
pub fn mask_account_number(number: &str) -> String {
    let digits = extract_digits(number);
    mask_text(&digits, 0, 4)
}

/// Strips every non-digit character.
pub(crate) fn extract_digits(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::{extract_digits, mask_card_number};

    #[test]
    fn it_extracts_digits() {
        assert_eq!(extract_digits("123-45-6789"), "123456789");
        assert_eq!(extract_digits("(555) 010-9999 x"), "5550109999");
        assert_eq!(extract_digits("٣٤"), "");
    }

    #[test]
    fn it_masks_card_numbers() {
        assert_eq!(mask_card_number("4111 1111 1111 1111"), "************1111");
        assert_eq!(mask_card_number("123"), "123");
    }
}
