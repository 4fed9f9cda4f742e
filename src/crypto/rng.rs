// src/crypto/rng.rs
//! OS-backed randomness for fixed-size secrets
//!
//! Adds `T::random()` to every `Fixed<[u8; N]>` alias (`Salt16`, `Block16`, …)
//! using a thread-local `OsRng`.

use crate::error::WalletError;
use rand::{rngs::OsRng, TryRngCore};
use secure_gate::Fixed;
use std::cell::RefCell;
use secure_gate::RevealSecretMut;

/// Extension trait – gives `.random()` to all fixed-size secret types
pub trait SecureRandomExt: Sized {
    /// Generate a cryptographically secure random instance of this type
    fn random() -> Result<Self, WalletError>;
}

thread_local! {
    static RNG: RefCell<OsRng> = const { RefCell::new(OsRng) };
}

impl<const N: usize> SecureRandomExt for Fixed<[u8; N]> {
    #[inline(always)]
    fn random() -> Result<Self, WalletError> {
        RNG.with(|rng_cell| {
            let mut bytes = Fixed::new([0u8; N]);
            rng_cell
                .borrow_mut()
                .try_fill_bytes(bytes.expose_secret_mut())
                .map_err(|e| WalletError::Rng(e.to_string()))?;
            Ok(bytes)
        })
    }
}
