//! # cadastro-id
//!
//! Validation, formatting, and generation for Brazilian registry
//! identifiers: CPF (natural persons) and CNPJ (legal entities).
//!
//! ## Design Principles
//!
//! - Pure, synchronous, stateless: every operation is a function over an
//!   in-memory string; the process-wide RNG is the only ambient dependency
//! - Untrusted input never raises: validation answers with a boolean and
//!   formatting passes malformed input through unchanged
//! - Caller contract violations (an out-of-range generation region) are
//!   reported as errors, never swallowed
//! - Strict typed values ([`Cpf`], [`Cnpj`]) with roundtrip serialization
//!   (parse → format → parse) for code that wants more than booleans
//!
//! ## Identifier shapes
//!
//! | Kind | Canonical | Display mask |
//! |------|-----------|--------------|
//! | CPF  | 11 digits | `DDD.DDD.DDD-CC` |
//! | CNPJ | 14 chars, digits or digits + uppercase letters | `DD.DDD.DDD/DDDD-CC` |
//!
//! The two trailing characters are always decimal check digits, computed by
//! a weighted modulo-11 scheme shared by both kinds.
//!
//! ```
//! use cadastro_id::{cnpj, cpf};
//!
//! assert!(cpf::is_valid("293.043.766-96"));
//! assert_eq!(cnpj::format("29304376000128"), "29.304.376/0001-28");
//!
//! let generated = cnpj::generate(true, false);
//! assert!(cnpj::is_valid(&generated));
//! ```

mod checksum;
mod error;
mod macros;
mod normalize;

pub mod cnpj;
pub mod cpf;

pub use cnpj::Cnpj;
pub use cpf::Cpf;
pub use error::{GenerateError, ParseError};
