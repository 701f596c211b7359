//! Person identifier (CPF): eleven decimal digits, a nine-digit body plus
//! two check digits, displayed as `DDD.DDD.DDD-CC`.
//!
//! The ninth body digit encodes the fiscal region the identifier was issued
//! in, which is why generation can pin it.

use rand::Rng;

use crate::checksum::{check_digit, weighted_sum, CPF_WEIGHTS};
use crate::define_document;
use crate::error::{GenerateError, ParseError};
use crate::normalize::{all_chars_equal, strip_punctuation};

/// Canonical (unmasked) length: nine body digits plus two check digits.
pub const UNMASKED_LEN: usize = 11;

/// Maximum input length with mask punctuation (`DDD.DDD.DDD-CC`).
pub const MASKED_LEN: usize = 14;

const PUNCTUATION: &[char] = &['.', '-'];

/// A validated CPF in canonical (unmasked) form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cpf(String);

define_document!(Cpf);

impl Cpf {
    /// Parses and fully validates a CPF, masked or unmasked.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let cleaned = clean(input)?;
        if all_chars_equal(&cleaned) {
            return Err(ParseError::Repeated);
        }
        verify_check_digits(&cleaned)?;
        Ok(Self(cleaned))
    }

    /// Generates a random valid CPF.
    ///
    /// A region digit in `1..=9` pins the ninth body digit. `Some(0)` reads
    /// as "no region", matching the reference behavior where a zero region
    /// means unspecified. Regions above 9 are a caller error.
    pub fn generate(region: Option<u8>) -> Result<Self, GenerateError> {
        let mut rng = rand::rng();
        let mut body = match region {
            Some(r) if r > 9 => return Err(GenerateError::InvalidRegion(r)),
            Some(r) if r > 0 => {
                format!("{}{r}", rng.random_range(10_000_000..=99_999_999u32))
            }
            _ => rng.random_range(100_000_000..=999_999_999u32).to_string(),
        };
        push_check_digits(&mut body);
        Ok(Self(body))
    }

    /// The canonical unmasked string, e.g. `29304376696`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The masked display form, e.g. `293.043.766-96`.
    #[must_use]
    pub fn formatted(&self) -> String {
        mask(&self.0)
    }

    /// The fiscal-region digit (ninth body digit).
    #[must_use]
    pub fn region_digit(&self) -> u8 {
        self.0.as_bytes()[8] - b'0'
    }
}

/// Whether the input is a well-formed CPF with matching check digits.
pub fn is_valid(input: &str) -> bool {
    Cpf::parse(input).is_ok()
}

/// Inserts the display mask, or returns the input unchanged when it does not
/// normalize to eleven digits.
///
/// Only the normalizer gates this; check digits are not consulted, so a
/// well-shaped input with wrong check digits is still masked.
pub fn format(input: &str) -> String {
    match clean(input) {
        Ok(cleaned) => mask(&cleaned),
        Err(_) => input.to_string(),
    }
}

/// Generates a random valid CPF string, optionally masked and optionally
/// pinned to a fiscal region.
pub fn generate(masked: bool, region: Option<u8>) -> Result<String, GenerateError> {
    let cpf = Cpf::generate(region)?;
    Ok(if masked { cpf.formatted() } else { cpf.0 })
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

    if !unmasked.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::IllegalCharacter);
    }

    Ok(unmasked)
}

fn verify_check_digits(cleaned: &str) -> Result<(), ParseError> {
    let bytes = cleaned.as_bytes();
    let first = check_digit(weighted_sum(&bytes[..9], &CPF_WEIGHTS));
    // The second digit sums positions 1..10, which include the first check
    // digit as carried by the input itself.
    let second = check_digit(weighted_sum(&bytes[1..10], &CPF_WEIGHTS));
    if bytes[9] - b'0' == first && bytes[10] - b'0' == second {
        Ok(())
    } else {
        Err(ParseError::CheckDigitMismatch)
    }
}

fn push_check_digits(body: &mut String) {
    let first = check_digit(weighted_sum(&body.as_bytes()[..9], &CPF_WEIGHTS));
    body.push(char::from(b'0' + first));
    let second = check_digit(weighted_sum(&body.as_bytes()[1..10], &CPF_WEIGHTS));
    body.push(char::from(b'0' + second));
}

fn mask(cleaned: &str) -> String {
    format!(
        "{}.{}.{}-{}",
        &cleaned[..3],
        &cleaned[3..6],
        &cleaned[6..9],
        &cleaned[9..]
    )
}
