// src/crypto/mod.rs

//! Low-level crypto helpers.
//!
//! Randomness for fresh salts; KDFs live in [`crate::kdf`].

#[cfg(feature = "rand")]
pub mod rng;
