//! # Key Derivation Functions (KDF)
//!
//! Wallet keys are derived with PBKDF2-HMAC-SHA256 over the caller's password
//! and the 16-byte salt stored in the file.
//!
//! ## Modules
//!
//! - [`pbkdf2`] - PBKDF2-HMAC-SHA256, 16-byte output
//!
//! ## Usage
//!
//! For most use cases, use the high-level [`decode`](crate::decode) and
//! [`encode`](crate::encode) functions, which derive keys automatically.
//! This function is exposed for custom flows and for test vectors.

pub mod pbkdf2;
