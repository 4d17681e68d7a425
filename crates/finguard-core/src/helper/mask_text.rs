/// Masks the chars of `text` between the first `num_prefix_chars`
/// and the last `num_suffix_chars`.
pub(crate) fn mask_text(text: &str, num_prefix_chars: usize, num_suffix_chars: usize) -> String {
    let length = text.chars().count();
    let suffix_index = length.saturating_sub(num_suffix_chars);
    let mut masked_text = String::with_capacity(length);
    for (i, c) in text.chars().enumerate() {
        if i < num_prefix_chars || i >= suffix_index {
            masked_text.push(c);
        } else {
            masked_text.push('*');
        }
    }
    masked_text
}
