//! src/encryptor/encrypt.rs
//! Wallet encoding, the inverse of `decode`

use crate::aliases::{PasswordString, PlainText, Salt16};
use crate::builders::{Padding, Pbkdf2Builder, WalletFormat};
use crate::consts::{AES_BLOCK_LEN, SALT_LEN};
use crate::encryptor::cbc::encrypt_cbc_in_place;
use crate::error::WalletError;
use crate::utils::pad_pkcs7;
use tracing::debug;
use secure_gate::{RevealSecret, RevealSecretMut};

/// Encode `plaintext` into a wallet using the given salt.
///
/// Output layout: `format marker || salt || AES-128-CBC(password marker || plaintext || padding)`,
/// keyed with PBKDF2-HMAC-SHA256 over `password` and `salt`, IV = `salt`.
///
/// Deterministic for a fixed salt, which is what test vectors need. Use
/// [`encode`](crate::encode) for real files.
///
/// # Errors
///
/// - [`WalletError::KeyDerivation`] - empty password, or iteration count out of range
/// - [`WalletError::InvalidBlockAlignment`] - [`Padding::None`] with unaligned input
pub fn encode_with_salt(
    password: &PasswordString,
    salt: &Salt16,
    plaintext: &[u8],
    format: &WalletFormat,
) -> Result<Vec<u8>, WalletError> {
    if password.expose_secret().is_empty() {
        return Err(WalletError::KeyDerivation("empty password".into()));
    }

    let password_marker = format.password_marker();
    let mut body = PlainText::new(Vec::with_capacity(
        password_marker.len() + plaintext.len() + SALT_LEN,
    ));
    body.expose_secret_mut().extend_from_slice(password_marker);
    body.expose_secret_mut().extend_from_slice(plaintext);
    if format.padding() == Padding::Pkcs7 {
        pad_pkcs7(body.expose_secret_mut());
    } else if body.expose_secret().len() % AES_BLOCK_LEN != 0 {
        return Err(WalletError::InvalidBlockAlignment {
            len: body.expose_secret().len(),
        });
    }

    let key = Pbkdf2Builder::new()
        .with_iterations(format.kdf_iterations())
        .with_secure_salt(salt)
        .derive_secure_new(password)?;

    encrypt_cbc_in_place(key.expose_secret(), salt, body.expose_secret_mut())?;

    let format_marker = format.format_marker();
    let ciphertext = body.expose_secret();
    let mut output = Vec::with_capacity(format_marker.len() + SALT_LEN + ciphertext.len());
    output.extend_from_slice(format_marker);
    output.extend_from_slice(salt.expose_secret());
    output.extend_from_slice(ciphertext);

    debug!(len = output.len(), "wallet encoded");
    Ok(output)
}

/// Encode `plaintext` into a wallet with a fresh random salt.
#[cfg(feature = "rand")]
pub fn encode(
    password: &PasswordString,
    plaintext: &[u8],
    format: &WalletFormat,
) -> Result<Vec<u8>, WalletError> {
    use crate::crypto::rng::SecureRandomExt;

    let salt = Salt16::random()?;
    encode_with_salt(password, &salt, plaintext, format)
}
