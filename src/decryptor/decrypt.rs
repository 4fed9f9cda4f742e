//! src/decryptor/decrypt.rs
//! Wallet decoding pipeline
//!
//! ```text
//! parse + format marker ─► PBKDF2 ─► AES-128-CBC (in place) ─► password marker ─► padding
//! ```
//!
//! Every structural check runs before the key derivation, so malformed input
//! never pays the 500k-iteration cost.

use crate::aliases::{PasswordString, PlainText};
use crate::builders::{Padding, Pbkdf2Builder, WalletFormat};
use crate::consts::SALT_LEN;
use crate::decryptor::cbc::decrypt_cbc_in_place;
use crate::error::WalletError;
use crate::header::{parse_wallet, WalletLayout};
use crate::utils::unpad_pkcs7;
use crate::validate::verify_password_marker;
use std::io::Read;
use std::ops::Range;
use tracing::debug;
use secure_gate::{RevealSecret, RevealSecretMut};

/// Run the pipeline over `buffer` and return the plaintext range within it.
fn decode_range(
    buffer: &mut [u8],
    password: &PasswordString,
    format: &WalletFormat,
) -> Result<Range<usize>, WalletError> {
    let ciphertext_offset = format.format_marker().len() + SALT_LEN;
    let WalletLayout { salt, ciphertext } = parse_wallet(buffer, format.format_marker())?;

    let password_marker = format.password_marker();
    // Too short to hold the password marker: no password could ever open it.
    if ciphertext.len() < password_marker.len() {
        return Err(WalletError::InvalidFormat(format!(
            "ciphertext of {} bytes cannot hold the {}-byte password marker",
            ciphertext.len(),
            password_marker.len()
        )));
    }

    let key = Pbkdf2Builder::new()
        .with_iterations(format.kdf_iterations())
        .with_secure_salt(&salt)
        .derive_secure_new(password)?;

    decrypt_cbc_in_place(key.expose_secret(), &salt, ciphertext)?;

    if let Err(e) = verify_password_marker(ciphertext, password_marker) {
        debug!("password marker mismatch");
        return Err(e);
    }

    let end = match format.padding() {
        Padding::Pkcs7 => unpad_pkcs7(ciphertext)?,
        Padding::None => ciphertext.len(),
    };
    // Padding may not eat into the password marker.
    if end < password_marker.len() {
        return Err(WalletError::InvalidPadding);
    }

    debug!(
        plaintext_len = end - password_marker.len(),
        "wallet decoded"
    );
    Ok(ciphertext_offset + password_marker.len()..ciphertext_offset + end)
}

/// Decode a wallet held in a caller-owned buffer.
///
/// The buffer is borrowed exclusively and **overwritten**: after the call it
/// holds decrypted bytes (or, on a wrong password, noise). The returned slice
/// points at the plaintext inside it.
///
/// # Errors
///
/// - [`WalletError::InvalidFormat`] - not a wallet, or malformed layout (no KDF work done)
/// - [`WalletError::KeyDerivation`] - iteration count out of range
/// - [`WalletError::IncorrectPassword`] - password marker mismatch (retryable)
/// - [`WalletError::InvalidPadding`] - correct password, corrupt padding
pub fn decode_in_place<'a>(
    buffer: &'a mut [u8],
    password: &PasswordString,
    format: &WalletFormat,
) -> Result<&'a [u8], WalletError> {
    let range = decode_range(buffer, password, format)?;
    Ok(&buffer[range])
}

/// Decode a wallet, taking ownership of its bytes.
///
/// The buffer moves into a zeroizing [`PlainText`] before decryption starts,
/// is decrypted in place and trimmed down to the payload. Nothing else can
/// alias it during the call.
///
/// # Example
///
/// ```
/// use openwallet::aliases::PasswordString;
/// use openwallet::{decode, encode_with_salt, Salt16, WalletFormat};
/// use secure_gate::RevealSecret;
///
/// // Low iteration count to keep the example fast; real files use the default.
/// let format = WalletFormat::default().with_kdf_iterations(10);
/// let password = PasswordString::new("password".to_string());
///
/// let file = encode_with_salt(&password, &Salt16::new([7u8; 16]), b"{\"balance\":0}", &format)?;
/// let plaintext = decode(file, &password, &format)?;
/// assert_eq!(plaintext.expose_secret().as_slice(), b"{\"balance\":0}");
///
/// let wrong = PasswordString::new("wrong".to_string());
/// let file = encode_with_salt(&password, &Salt16::new([7u8; 16]), b"x", &format)?;
/// assert!(decode(file, &wrong, &format).unwrap_err().is_incorrect_password());
/// # Ok::<(), openwallet::WalletError>(())
/// ```
pub fn decode(
    buffer: Vec<u8>,
    password: &PasswordString,
    format: &WalletFormat,
) -> Result<PlainText, WalletError> {
    let mut secure = PlainText::new(buffer);
    let range = decode_range(secure.expose_secret_mut(), password, format)?;

    let bytes = secure.expose_secret_mut();
    bytes.truncate(range.end);
    bytes.drain(..range.start);
    Ok(secure)
}

/// Read an entire wallet from `reader`, then [`decode`] it.
///
/// Read failures surface as [`WalletError::Io`] before the pipeline starts.
pub fn decode_reader<R: Read>(
    mut reader: R,
    password: &PasswordString,
    format: &WalletFormat,
) -> Result<PlainText, WalletError> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    debug!(len = buffer.len(), "wallet bytes read");
    decode(buffer, password, format)
}
