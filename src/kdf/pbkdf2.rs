//! src/kdf/pbkdf2.rs

use crate::aliases::{HmacSha256, PasswordString, Salt16, WalletKey16};
use crate::consts::{PBKDF2_MAX_ITER, PBKDF2_MIN_ITER};
use crate::error::WalletError;

use pbkdf2::pbkdf2;
use tracing::debug;
use secure_gate::{RevealSecret, RevealSecretMut};

/// Derive PBKDF2-HMAC-SHA256 directly into a [`WalletKey16`] buffer.
///
/// Deterministic: the same `(password, salt, iterations)` always yields the
/// same key. The password bytes are its UTF-8 encoding, unmodified.
///
/// # Security
/// - Output buffer is zeroized on drop
/// - Password never leaves its secure wrapper except for the HMAC key schedule
///
/// # Errors
///
/// [`WalletError::KeyDerivation`] if `iterations` is outside
/// `PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER`.
#[inline(always)]
pub fn derive_wallet_key(
    password: &PasswordString,
    salt: &Salt16,
    iterations: u32,
    out_key: &mut WalletKey16,
) -> Result<(), WalletError> {
    if !(PBKDF2_MIN_ITER..=PBKDF2_MAX_ITER).contains(&iterations) {
        return Err(WalletError::KeyDerivation(format!(
            "PBKDF2 iterations must be within {PBKDF2_MIN_ITER}..={PBKDF2_MAX_ITER}, got {iterations}"
        )));
    }

    debug!(iterations, "deriving wallet key");
    pbkdf2::<HmacSha256>(
        password.expose_secret().as_bytes(),
        salt.expose_secret(),
        iterations,
        out_key.expose_secret_mut(),
    )
    .map_err(|e| WalletError::KeyDerivation(format!("PBKDF2 failed: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(password: &str, salt: [u8; 16], iterations: u32) -> [u8; 16] {
        let password = PasswordString::new(password.to_string());
        let mut key = WalletKey16::new([0u8; 16]);
        derive_wallet_key(&password, &Salt16::new(salt), iterations, &mut key).unwrap();
        *key.expose_secret()
    }

    #[test]
    fn single_iteration_vector() {
        let expected = hex::decode("1fefe125ab13dd2c06db86711ec448e9").unwrap();
        assert_eq!(derive("password", [0u8; 16], 1).as_slice(), expected.as_slice());
    }

    #[test]
    fn deterministic() {
        assert_eq!(derive("hunter2", [3u8; 16], 5), derive("hunter2", [3u8; 16], 5));
    }

    #[test]
    fn salt_and_password_change_key() {
        let base = derive("hunter2", [3u8; 16], 5);
        assert_ne!(base, derive("hunter2", [4u8; 16], 5));
        assert_ne!(base, derive("hunter3", [3u8; 16], 5));
        assert_ne!(base, derive("hunter2", [3u8; 16], 6));
    }

    #[test]
    fn rejects_out_of_range_iterations() {
        let password = PasswordString::new("x".to_string());
        let salt = Salt16::new([0u8; 16]);
        for iterations in [0, PBKDF2_MAX_ITER + 1] {
            let mut key = WalletKey16::new([0u8; 16]);
            let err = derive_wallet_key(&password, &salt, iterations, &mut key).unwrap_err();
            assert!(matches!(err, WalletError::KeyDerivation(_)));
        }
    }
}
