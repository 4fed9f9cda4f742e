//! # Builders
//!
//! Fluent configuration types with the wallet format's defaults.
//!
//! ## Modules
//!
//! - [`pbkdf2_builder`] - PBKDF2-HMAC-SHA256 key derivation (salt + iterations)
//! - [`wallet_format`] - format parameters for encode/decode (markers, cost, padding)

pub mod pbkdf2_builder;
pub mod wallet_format;

pub use pbkdf2_builder::Pbkdf2Builder;
pub use wallet_format::{Padding, WalletFormat};
