//! # Marker Validation
//!
//! Both checks compare a known-length prefix byte for byte. They differ in
//! what a mismatch means:
//!
//! - **stage 1** ([`verify_format_marker`]) runs on the raw file before any key
//!   derivation. A mismatch is fatal: the input is not a wallet.
//! - **stage 2** ([`verify_password_marker`]) runs on freshly decrypted bytes.
//!   A mismatch means the derived key was wrong, reported as the soft
//!   [`WalletError::IncorrectPassword`].
//!
//! Stage 2 is the only password oracle the format has. CBC decryption with a
//! wrong key still "succeeds", so without the marker garbage would be handed
//! back as plaintext.

use crate::error::WalletError;
use tracing::trace;

/// `true` when `data` starts with exactly `marker`.
#[inline]
pub fn has_marker_prefix(data: &[u8], marker: &[u8]) -> bool {
    data.len() >= marker.len() && data[..marker.len()] == *marker
}

/// Stage 1: the buffer must begin with the format marker.
pub fn verify_format_marker(data: &[u8], marker: &[u8]) -> Result<(), WalletError> {
    if data.len() < marker.len() {
        return Err(WalletError::InvalidFormat(format!(
            "file too short for format marker: {} < {} bytes",
            data.len(),
            marker.len()
        )));
    }
    if !has_marker_prefix(data, marker) {
        return Err(WalletError::InvalidFormat(
            "not a wallet file: format marker mismatch".into(),
        ));
    }
    trace!(marker_len = marker.len(), "format marker verified");
    Ok(())
}

/// Stage 2: the decrypted bytes must begin with the password marker.
pub fn verify_password_marker(decrypted: &[u8], marker: &[u8]) -> Result<(), WalletError> {
    if !has_marker_prefix(decrypted, marker) {
        return Err(WalletError::IncorrectPassword);
    }
    trace!(marker_len = marker.len(), "password marker verified");
    Ok(())
}
