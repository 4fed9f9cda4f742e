//! High-level encoding facade.
//!
//! Core API: `encode(&password, plaintext, &format)?` (random salt).
//! Deterministic variant: `encode_with_salt` for fixtures and test vectors.

pub(crate) mod cbc;
pub(crate) mod encrypt;

pub use cbc::encrypt_cbc_in_place;
#[cfg(feature = "rand")]
pub use encrypt::encode;
pub use encrypt::encode_with_salt;
