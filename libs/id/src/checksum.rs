//! Weighted modulo-11 check-digit arithmetic shared by both identifier kinds.
//!
//! Character values are raw byte offsets from `'0'`: in the alphanumeric
//! CNPJ body a letter such as `A` contributes 17, not a decimal digit. The
//! official scheme is defined over these offsets, so the same sums run
//! unchanged for the numeric and the lettered form.

/// CPF weight vector, consumed from index 0 for the first check digit.
pub(crate) const CPF_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ weight vector. The first check digit consumes it from index 1; the
/// offset is a fixed protocol detail, not an artifact.
pub(crate) const CNPJ_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weighted sum of character values against a weight slice.
///
/// `chars` must already be normalized to `[0-9A-Z]` and have the same length
/// as `weights`.
pub(crate) fn weighted_sum(chars: &[u8], weights: &[u32]) -> u32 {
    debug_assert_eq!(chars.len(), weights.len());
    chars
        .iter()
        .zip(weights)
        .map(|(&c, &w)| u32::from(c - b'0') * w)
        .sum()
}

/// Modulo-11 reduction: remainders 0 and 1 collapse to check digit 0, every
/// other remainder `r` yields `11 - r`.
pub(crate) fn check_digit(sum: u32) -> u8 {
    let rest = sum % 11;
    if rest < 2 {
        0
    } else {
        (11 - rest) as u8
    }
}
