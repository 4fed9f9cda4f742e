//! src/builders/pbkdf2_builder.rs
//! PBKDF2-HMAC-SHA256 builder for wallet keys

use crate::aliases::{PasswordString, Salt16, WalletKey16};
use crate::consts::{SALT_LEN, WALLET_KEY_LEN, WALLET_PBKDF2_ITERATIONS};
use crate::error::WalletError;
use crate::kdf::pbkdf2::derive_wallet_key;
use secure_gate::RevealSecret;

/// PBKDF2-HMAC-SHA256 key derivation builder
///
/// Defaults: the wallet format's 500,000 iterations and an all-zero salt.
/// Decoding always sets the salt read from the file; encoding sets a fresh
/// random one.
pub struct Pbkdf2Builder {
    iterations: u32,
    salt: Salt16,
}

impl Pbkdf2Builder {
    /// Create builder with the wallet format's iteration count
    #[must_use]
    pub fn new() -> Self {
        Self {
            iterations: WALLET_PBKDF2_ITERATIONS,
            salt: Salt16::new([0u8; SALT_LEN]),
        }
    }

    /// Set custom iteration count.
    ///
    /// Out-of-range values are not clamped; derivation reports them.
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set salt from raw bytes
    #[must_use]
    pub fn with_salt(mut self, salt: [u8; SALT_LEN]) -> Self {
        self.salt = Salt16::new(salt);
        self
    }

    /// Set salt from an existing secure buffer
    #[must_use]
    pub fn with_secure_salt(mut self, salt: &Salt16) -> Self {
        self.salt = Salt16::new(*salt.expose_secret());
        self
    }

    /// Current salt as raw 16-byte array (for serialization)
    #[must_use]
    pub fn salt(&self) -> &[u8; SALT_LEN] {
        self.salt.expose_secret()
    }

    /// Current iteration count
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Derive key directly into caller-provided secure buffer
    #[inline(always)]
    pub fn derive_secure(
        &self,
        password: &PasswordString,
        out_key: &mut WalletKey16,
    ) -> Result<(), WalletError> {
        derive_wallet_key(password, &self.salt, self.iterations, out_key)
    }

    /// Convenience: derive and return a fresh secure key
    #[inline(always)]
    pub fn derive_secure_new(&self, password: &PasswordString) -> Result<WalletKey16, WalletError> {
        let mut key = WalletKey16::new([0u8; WALLET_KEY_LEN]);
        self.derive_secure(password, &mut key)?;
        Ok(key)
    }
}

impl Default for Pbkdf2Builder {
    fn default() -> Self {
        Self::new()
    }
}
