//! Shared normalization helpers used by both identifier kinds.

/// Removes every occurrence of the given mask punctuation characters.
pub(crate) fn strip_punctuation(input: &str, punctuation: &[char]) -> String {
    input.chars().filter(|c| !punctuation.contains(c)).collect()
}

/// Returns true when every character equals the first one.
pub(crate) fn all_chars_equal(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => true,
    }
}
