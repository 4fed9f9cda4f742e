//! # Header Parsing
//!
//! Splits a raw wallet buffer into its three regions:
//!
//! | Field         | Length        | Constraint                      |
//! |---------------|---------------|---------------------------------|
//! | format marker | marker length | must equal the format marker    |
//! | salt          | 16 bytes      | also used as the CBC IV         |
//! | ciphertext    | N bytes       | `N > 0`, `N % 16 == 0`          |
//!
//! All structural checks happen here, before the expensive key derivation.

use crate::aliases::Salt16;
use crate::consts::{AES_BLOCK_LEN, SALT_LEN, WALLET_FORMAT_MARKER};
use crate::error::WalletError;
use crate::validate::verify_format_marker;
use std::ops::Range;
use tracing::debug;
use secure_gate::RevealSecretMut;

/// A parsed wallet buffer.
///
/// `ciphertext` is an exclusive borrow of the caller's buffer: the decryptor
/// overwrites it with plaintext, so nothing else may observe it meanwhile.
pub struct WalletLayout<'a> {
    pub salt: Salt16,
    pub ciphertext: &'a mut [u8],
}

/// Quick probe: does `bytes` look like a wallet container?
///
/// Runs the format-marker check and the length checks only. No key
/// derivation, so it is cheap enough for directory scans.
///
/// # Example
///
/// ```
/// use openwallet::consts::WALLET_FORMAT_MARKER;
/// use openwallet::is_wallet;
///
/// let mut file = WALLET_FORMAT_MARKER.to_vec();
/// file.extend_from_slice(&[0u8; 16 + 32]); // salt + two blocks
/// assert!(is_wallet(&file));
///
/// assert!(!is_wallet(b"AES\x03\x00"));
/// ```
pub fn is_wallet(bytes: &[u8]) -> bool {
    ciphertext_range(bytes, &WALLET_FORMAT_MARKER).is_ok()
}

/// Validate the layout of `buffer` and return the byte range of the ciphertext.
///
/// # Errors
///
/// [`WalletError::InvalidFormat`] when the marker does not match, fewer than
/// 16 salt bytes follow it, or the ciphertext is empty or not block aligned.
pub fn ciphertext_range(buffer: &[u8], format_marker: &[u8]) -> Result<Range<usize>, WalletError> {
    verify_format_marker(buffer, format_marker)?;

    let salt_start = format_marker.len();
    let remaining = buffer.len() - salt_start;
    if remaining < SALT_LEN {
        return Err(WalletError::InvalidFormat(format!(
            "missing salt: only {remaining} bytes after format marker"
        )));
    }

    let ciphertext_start = salt_start + SALT_LEN;
    let ciphertext_len = buffer.len() - ciphertext_start;
    if ciphertext_len == 0 {
        return Err(WalletError::InvalidFormat("no ciphertext after salt".into()));
    }
    if ciphertext_len % AES_BLOCK_LEN != 0 {
        return Err(WalletError::InvalidFormat(format!(
            "ciphertext length {ciphertext_len} is not a multiple of {AES_BLOCK_LEN}"
        )));
    }

    Ok(ciphertext_start..buffer.len())
}

/// Parse `buffer` into salt and ciphertext.
///
/// The salt is copied into a zeroizing [`Salt16`]; the ciphertext stays in
/// place and is handed out as a mutable sub-slice.
pub fn parse_wallet<'a>(
    buffer: &'a mut [u8],
    format_marker: &[u8],
) -> Result<WalletLayout<'a>, WalletError> {
    let range = ciphertext_range(buffer, format_marker)?;

    let (head, ciphertext) = buffer.split_at_mut(range.start);
    let mut salt = Salt16::new([0u8; SALT_LEN]);
    salt.expose_secret_mut()
        .copy_from_slice(&head[format_marker.len()..]);

    debug!(
        ciphertext_len = ciphertext.len(),
        blocks = ciphertext.len() / AES_BLOCK_LEN,
        "wallet layout parsed"
    );

    Ok(WalletLayout { salt, ciphertext })
}

#[cfg(test)]
mod tests {
    use super::*;
    use secure_gate::RevealSecret;

    fn wallet_with(salt: [u8; 16], ciphertext_len: usize) -> Vec<u8> {
        let mut data = WALLET_FORMAT_MARKER.to_vec();
        data.extend_from_slice(&salt);
        data.extend((0..ciphertext_len).map(|i| i as u8));
        data
    }

    #[test]
    fn splits_salt_and_ciphertext() {
        let salt: [u8; 16] = core::array::from_fn(|i| 0xf0 | i as u8);
        let mut data = wallet_with(salt, 48);
        let layout = parse_wallet(&mut data, &WALLET_FORMAT_MARKER).unwrap();
        assert_eq!(layout.salt.expose_secret(), &salt);
        assert_eq!(layout.ciphertext.len(), 48);
        assert_eq!(layout.ciphertext[0], 0);
        assert_eq!(layout.ciphertext[47], 47);
    }

    #[test]
    fn rejects_bad_lengths() {
        let cases = [
            (WALLET_FORMAT_MARKER[..40].to_vec(), "shorter than marker"),
            (WALLET_FORMAT_MARKER.to_vec(), "marker only"),
            (
                {
                    let mut d = WALLET_FORMAT_MARKER.to_vec();
                    d.extend_from_slice(&[0u8; 15]);
                    d
                },
                "truncated salt",
            ),
            (wallet_with([0u8; 16], 0), "no ciphertext"),
            (wallet_with([0u8; 16], 5), "5 byte ciphertext"),
            (wallet_with([0u8; 16], 33), "33 byte ciphertext"),
        ];

        for (mut data, desc) in cases {
            let result = parse_wallet(&mut data, &WALLET_FORMAT_MARKER);
            assert!(
                matches!(result, Err(WalletError::InvalidFormat(_))),
                "{desc} should be rejected"
            );
        }
    }

    #[test]
    fn custom_marker_length() {
        let mut data = b"MAGIC-A".to_vec();
        data.extend_from_slice(&[0u8; 16 + 16]);
        let range = ciphertext_range(&data, b"MAGIC-A").unwrap();
        assert_eq!(range, 23..39);
    }

    #[test]
    fn is_wallet_probe() {
        assert!(is_wallet(&wallet_with([7u8; 16], 16)));
        assert!(!is_wallet(&wallet_with([7u8; 16], 17)));
        assert!(!is_wallet(b""));
    }
}
