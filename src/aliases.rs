//! # Secure-Gate Type Aliases
//!
//! Type aliases for secure memory management using [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! All types in this module zeroize on drop and require an explicit
//! `.expose_secret()` / `.expose_secret_mut()` to reach the bytes.
//!
//! ## Type Categories
//!
//! ### HMAC Primitive
//! - [`HmacSha256`] - PRF used by PBKDF2
//!
//! ### Fixed-Size Secrets
//! - [`SpanBuffer<N>`] - generic secure stack buffer
//! - [`Block16`] - one AES block (CBC chaining state, scratch)
//! - [`Salt16`] - wallet salt, also the CBC IV
//! - [`WalletKey16`] - derived AES-128 key
//!
//! ### Dynamic Secrets
//! - [`PasswordString`] - caller-supplied password
//! - [`PlainText`] - recovered payload

use hmac::Hmac;
use secure_gate::{Dynamic, Fixed};
use sha2::Sha256;

pub type HmacSha256 = Hmac<Sha256>;

pub type SpanBuffer<const N: usize> = Fixed<[u8; N]>;

pub type Block16 = SpanBuffer<16>; // one AES block
pub type Salt16 = SpanBuffer<16>; // PBKDF2 salt + CBC IV
pub type WalletKey16 = SpanBuffer<16>; // AES-128 key

pub type PasswordString = Dynamic<String>;
pub type PlainText = Dynamic<Vec<u8>>;
