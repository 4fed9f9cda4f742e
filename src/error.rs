//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, WalletError>`](WalletError).

use thiserror::Error;

/// The error type for all wallet operations.
///
/// Every variant is fatal except [`WalletError::IncorrectPassword`], which
/// means the file itself is valid and the caller may retry with another
/// password. Use [`WalletError::is_incorrect_password`] to branch on it.
#[derive(Error, Debug)]
pub enum WalletError {
    /// I/O error while reading the source or writing the result.
    ///
    /// Raised before the decode pipeline starts; the pipeline itself never
    /// touches the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The buffer is not a wallet container.
    ///
    /// Used when:
    /// - the buffer is shorter than the format marker
    /// - the format marker does not match
    /// - fewer than 16 salt bytes follow the marker
    /// - the ciphertext region is empty or not a multiple of the block size
    /// - the ciphertext is too short to hold the password marker
    #[error("Invalid wallet format: {0}")]
    InvalidFormat(String),

    /// Data handed to the block cipher is not a multiple of 16 bytes.
    #[error("Invalid block alignment: {len} bytes is not a multiple of 16")]
    InvalidBlockAlignment { len: usize },

    /// The AES key is not 16 bytes.
    #[error("Invalid key length: expected 16 bytes, got {len}")]
    InvalidKeyLength { len: usize },

    /// Key derivation could not run (bad iteration count, empty password on
    /// encode, or an unsatisfiable output length).
    #[error("Key derivation error: {0}")]
    KeyDerivation(String),

    /// The decrypted password marker did not match.
    #[error("Incorrect password")]
    IncorrectPassword,

    /// PKCS#7 padding is malformed after a successful password check.
    #[error("Invalid PKCS#7 padding")]
    InvalidPadding,

    /// The operating system RNG failed to produce a salt.
    #[error("RNG error: {0}")]
    Rng(String),
}

impl WalletError {
    /// `true` for the soft "wrong password" outcome.
    #[must_use]
    pub const fn is_incorrect_password(&self) -> bool {
        matches!(self, WalletError::IncorrectPassword)
    }

    /// `true` for every failure that retrying with another password cannot fix.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !self.is_incorrect_password()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incorrect_password_is_not_fatal() {
        assert!(WalletError::IncorrectPassword.is_incorrect_password());
        assert!(!WalletError::IncorrectPassword.is_fatal());
    }

    #[test]
    fn format_and_alignment_errors_are_fatal() {
        let cases = [
            WalletError::InvalidFormat("bad marker".into()),
            WalletError::InvalidBlockAlignment { len: 5 },
            WalletError::InvalidKeyLength { len: 32 },
            WalletError::InvalidPadding,
        ];
        for err in cases {
            assert!(err.is_fatal(), "{err} should be fatal");
        }
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            WalletError::InvalidBlockAlignment { len: 5 }.to_string(),
            "Invalid block alignment: 5 bytes is not a multiple of 16"
        );
        assert_eq!(
            WalletError::IncorrectPassword.to_string(),
            "Incorrect password"
        );
    }
}
