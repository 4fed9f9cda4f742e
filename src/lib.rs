// src/lib.rs

//! # openwallet
//!
//! Decoder for password-protected wallet containers.
//!
//! ```text
//! ┌──────────────────────┬──────────┬─────────────────────────────────────────────┐
//! │ format marker (64 B) │ salt (16)│ AES-128-CBC( password marker (26) ‖ payload ) │
//! └──────────────────────┴──────────┴─────────────────────────────────────────────┘
//! key = PBKDF2-HMAC-SHA256(password, salt, 500 000 iterations, 16 bytes), IV = salt
//! ```
//!
//! [`decode`] checks the cleartext format marker, derives the key, decrypts
//! in place and checks the decrypted password marker. A wrong password is
//! reported as [`WalletError::IncorrectPassword`], distinct from a malformed
//! file, so callers can re-prompt.
//!
//! ## Known limitation
//!
//! The format carries no MAC. The password marker tells a wrong password
//! from a right one, but it does not detect tampering with the ciphertext
//! beyond the first blocks. This crate keeps the format as it is.

pub mod aliases;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod header;
pub mod kdf;
pub mod utils;
pub mod validate;

// High-level API
pub use decryptor::{decode, decode_in_place, decode_reader};
#[cfg(feature = "rand")]
pub use encryptor::encode;
pub use encryptor::encode_with_salt;
pub use error::WalletError;

pub use aliases::{PasswordString, PlainText, Salt16};
pub use builders::{Padding, Pbkdf2Builder, WalletFormat};
pub use header::{is_wallet, parse_wallet, WalletLayout};

// Low-level building blocks for custom flows and test vectors
pub use decryptor::decrypt_cbc_in_place;
pub use encryptor::encrypt_cbc_in_place;
pub use kdf::pbkdf2::derive_wallet_key;
