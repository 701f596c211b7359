//! Entity identifier (CNPJ): fourteen characters, a twelve-character body
//! plus two check digits, displayed as `DD.DDD.DDD/DDDD-CC`.
//!
//! The legacy form is all-numeric; the newer form admits uppercase letters
//! in the body. The check digits are decimal in both forms, and the
//! arithmetic runs over raw `'0'`-offsets either way, so letters feed the
//! sums without any special casing.

use rand::Rng;

use crate::checksum::{check_digit, weighted_sum, CNPJ_WEIGHTS};
use crate::define_document;
use crate::error::ParseError;
use crate::normalize::{all_chars_equal, strip_punctuation};

/// Canonical (unmasked) length: twelve body characters plus two check digits.
pub const UNMASKED_LEN: usize = 14;

/// Maximum input length with mask punctuation (`DD.DDD.DDD/DDDD-CC`).
pub const MASKED_LEN: usize = 18;

const PUNCTUATION: &[char] = &['.', '-', '/'];

const DIGITS: &[u8] = b"0123456789";
const DIGITS_AND_LETTERS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A validated CNPJ in canonical (unmasked, uppercase) form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cnpj(String);

define_document!(Cnpj);

impl Cnpj {
    /// Parses and fully validates a CNPJ, masked or unmasked, legacy or
    /// alphanumeric. Lowercase letters are accepted and canonicalized.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let cleaned = clean(input)?;
        if all_chars_equal(&cleaned) {
            return Err(ParseError::Repeated);
        }
        verify_check_digits(&cleaned)?;
        Ok(Self(cleaned))
    }

    /// Generates a random valid CNPJ, drawing the body from the numeric
    /// alphabet or, when `use_letters` is set, the full alphanumeric one.
    #[must_use]
    pub fn generate(use_letters: bool) -> Self {
        let mut rng = rand::rng();
        let alphabet = if use_letters { DIGITS_AND_LETTERS } else { DIGITS };
        let mut body: String = (0..UNMASKED_LEN - 2)
            .map(|_| char::from(alphabet[rng.random_range(0..alphabet.len())]))
            .collect();
        push_check_digits(&mut body);
        Self(body)
    }

    /// The canonical unmasked string, e.g. `96624359844781`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The masked display form, e.g. `96.624.359/8447-81`.
    #[must_use]
    pub fn formatted(&self) -> String {
        mask(&self.0)
    }

    /// Whether the body uses the newer lettered form.
    #[must_use]
    pub fn is_alphanumeric(&self) -> bool {
        self.0.bytes().any(|b| b.is_ascii_uppercase())
    }
}

/// Whether the input is a well-formed CNPJ with matching check digits.
pub fn is_valid(input: &str) -> bool {
    Cnpj::parse(input).is_ok()
}

/// Inserts the display mask, or returns the input unchanged when it does not
/// normalize to fourteen characters.
///
/// Only the normalizer gates this; check digits are not consulted, so a
/// well-shaped input with wrong check digits is still masked.
pub fn format(input: &str) -> String {
    match clean(input) {
        Ok(cleaned) => mask(&cleaned),
        Err(_) => input.to_string(),
    }
}

/// Generates a random valid CNPJ string, optionally masked.
#[must_use]
pub fn generate(masked: bool, use_letters: bool) -> String {
    let cnpj = Cnpj::generate(use_letters);
    if masked {
        cnpj.formatted()
    } else {
        cnpj.0
    }
}

/// Normalizer: ordered hard gates, each failing fast.
fn clean(input: &str) -> Result<String, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    if input.len() < UNMASKED_LEN || input.len() > MASKED_LEN {
        return Err(ParseError::Length {
            min: UNMASKED_LEN,
            max: MASKED_LEN,
            actual: input.len(),
        });
    }

    let unmasked = strip_punctuation(input, PUNCTUATION);
    if unmasked.len() != UNMASKED_LEN {
        return Err(ParseError::UnmaskedLength {
            expected: UNMASKED_LEN,
            actual: unmasked.len(),
        });
    }

    let unmasked = unmasked.to_ascii_uppercase();
    if !unmasked
        .bytes()
        .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
    {
        return Err(ParseError::IllegalCharacter);
    }

    // Letters never occupy check-digit positions, even in the new form.
    let bytes = unmasked.as_bytes();
    if !bytes[UNMASKED_LEN - 2].is_ascii_digit() || !bytes[UNMASKED_LEN - 1].is_ascii_digit() {
        return Err(ParseError::CheckDigitNotNumeric);
    }

    Ok(unmasked)
}

fn verify_check_digits(cleaned: &str) -> Result<(), ParseError> {
    let bytes = cleaned.as_bytes();
    // The first digit consumes the weight vector from index 1.
    let first = check_digit(weighted_sum(&bytes[..12], &CNPJ_WEIGHTS[1..]));
    let second = check_digit(weighted_sum(&bytes[..13], &CNPJ_WEIGHTS));
    if bytes[12] - b'0' == first && bytes[13] - b'0' == second {
        Ok(())
    } else {
        Err(ParseError::CheckDigitMismatch)
    }
}

fn push_check_digits(body: &mut String) {
    let first = check_digit(weighted_sum(&body.as_bytes()[..12], &CNPJ_WEIGHTS[1..]));
    body.push(char::from(b'0' + first));
    let second = check_digit(weighted_sum(&body.as_bytes()[..13], &CNPJ_WEIGHTS));
    body.push(char::from(b'0' + second));
}

fn mask(cleaned: &str) -> String {
    format!(
        "{}.{}.{}/{}-{}",
        &cleaned[..2],
        &cleaned[2..5],
        &cleaned[5..8],
        &cleaned[8..12],
        &cleaned[12..]
    )
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_valid_unmasked_cnpj() {
        assert!(is_valid("96624359844781"));
    }

    #[test]
    fn test_valid_masked_cnpj() {
        assert!(is_valid("96.624.359/8447-81"));
    }

    #[test]
    fn test_valid_alphanumeric_cnpj() {
        assert!(is_valid("6NGW14SDXK7F25"));
        assert!(is_valid("6N.GW1.4SD/XK7F-25"));
    }

    #[test]
    fn test_lowercase_letters_are_canonicalized() {
        assert!(is_valid("6ngw14sdxk7f25"));
        let cnpj = Cnpj::parse("6ngw14sdxk7f25").unwrap();
        assert_eq!(cnpj.as_str(), "6NGW14SDXK7F25");
    }

    #[test]
    fn test_wrong_check_digits_are_invalid() {
        assert!(!is_valid("29.304.376/0001-27"));
        assert!(!is_valid("29304376000128"));
    }

    #[test]
    fn test_empty_is_invalid() {
        assert!(!is_valid(""));
        assert!(!is_valid("   "));
    }

    #[test]
    fn test_too_short_is_invalid() {
        assert!(!is_valid("1"));
        assert!(!is_valid("123"));
    }

    #[test]
    fn test_too_long_is_invalid() {
        assert!(!is_valid("1234567890123456789"));
    }

    #[test]
    fn test_repeated_characters_are_invalid() {
        assert!(!is_valid("11.111.111/1111-11"));
        assert!(!is_valid("00000000000000"));
    }

    #[test]
    fn test_parse_error_variants() {
        assert_eq!(Cnpj::parse(""), Err(ParseError::Empty));
        assert_eq!(
            Cnpj::parse("123"),
            Err(ParseError::Length {
                min: 14,
                max: 18,
                actual: 3
            })
        );
        assert_eq!(
            Cnpj::parse("293043760001281"),
            Err(ParseError::UnmaskedLength {
                expected: 14,
                actual: 15
            })
        );
        assert_eq!(
            Cnpj::parse("2930437600012!"),
            Err(ParseError::IllegalCharacter)
        );
        assert_eq!(
            Cnpj::parse("2930437600012A"),
            Err(ParseError::CheckDigitNotNumeric)
        );
        assert_eq!(
            Cnpj::parse("11.111.111/1111-11"),
            Err(ParseError::Repeated)
        );
        assert_eq!(
            Cnpj::parse("29.304.376/0001-27"),
            Err(ParseError::CheckDigitMismatch)
        );
    }

    #[test]
    fn test_format_inserts_mask() {
        assert_eq!(format("29304376000128"), "29.304.376/0001-28");
        assert_eq!(format("6NGW14SDXK7F25"), "6N.GW1.4SD/XK7F-25");
    }

    #[test]
    fn test_format_is_passthrough_on_bad_input() {
        assert_eq!(format("293043760001281"), "293043760001281");
        assert_eq!(format(""), "");
        assert_eq!(format("2930437600012A"), "2930437600012A");
        assert_eq!(format("29.304.376/0001-2"), "29.304.376/0001-2");
    }

    #[test]
    fn test_format_is_idempotent_on_valid_input() {
        let once = format("96624359844781");
        assert_eq!(format(&once), once);
    }

    #[test]
    fn test_typed_accessors() {
        let cnpj = Cnpj::parse("96.624.359/8447-81").unwrap();
        assert_eq!(cnpj.as_str(), "96624359844781");
        assert_eq!(cnpj.to_string(), "96624359844781");
        assert_eq!(cnpj.formatted(), "96.624.359/8447-81");
        assert!(!cnpj.is_alphanumeric());

        let lettered = Cnpj::parse("6NGW14SDXK7F25").unwrap();
        assert!(lettered.is_alphanumeric());
    }

    #[test]
    fn test_from_str_roundtrip() {
        let cnpj: Cnpj = "96624359844781".parse().unwrap();
        let reparsed: Cnpj = cnpj.to_string().parse().unwrap();
        assert_eq!(cnpj, reparsed);
    }

    #[test]
    fn test_generate_is_valid() {
        let cnpj = generate(false, false);
        assert_eq!(cnpj.len(), UNMASKED_LEN);
        assert!(is_valid(&cnpj));
    }

    #[test]
    fn test_generate_with_letters_is_valid() {
        let cnpj = generate(false, true);
        assert!(is_valid(&cnpj));
        // Check digits stay numeric regardless of the body alphabet.
        let bytes = cnpj.as_bytes();
        assert!(bytes[12].is_ascii_digit());
        assert!(bytes[13].is_ascii_digit());
    }

    #[test]
    fn test_generate_masked_shape() {
        let cnpj = generate(true, false);
        assert_eq!(cnpj.len(), MASKED_LEN);
        assert!(is_valid(&cnpj));
        let bytes = cnpj.as_bytes();
        assert_eq!(bytes[2], b'.');
        assert_eq!(bytes[6], b'.');
        assert_eq!(bytes[10], b'/');
        assert_eq!(bytes[15], b'-');
    }

    #[test]
    fn test_serde_roundtrip() {
        let cnpj = Cnpj::parse("96624359844781").unwrap();
        let json = serde_json::to_string(&cnpj).unwrap();
        assert_eq!(json, "\"96624359844781\"");
        let parsed: Cnpj = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cnpj);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        assert!(serde_json::from_str::<Cnpj>("\"29.304.376/0001-27\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_generated_cnpjs_validate(masked: bool, use_letters: bool) {
            let cnpj = generate(masked, use_letters);
            prop_assert!(is_valid(&cnpj));
        }

        #[test]
        fn prop_format_is_passthrough_or_mask(input in "\\PC*") {
            let out = format(&input);
            prop_assert!(out == input || out.len() == MASKED_LEN);
        }

        #[test]
        fn prop_format_idempotent_on_generated(masked: bool, use_letters: bool) {
            let once = format(&generate(masked, use_letters));
            prop_assert_eq!(format(&once), once);
        }
    }
}
