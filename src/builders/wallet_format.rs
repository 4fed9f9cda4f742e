//! src/builders/wallet_format.rs
//! Wallet format parameters shared by encode and decode

use crate::consts::{CORRECT_PASSWORD_MARKER, WALLET_FORMAT_MARKER, WALLET_PBKDF2_ITERATIONS};

/// What to do with trailing padding after the password check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    /// Strip (decode) or append (encode) PKCS#7 padding. Real wallet files use this.
    #[default]
    Pkcs7,
    /// Return the full decrypted length. Encoding requires aligned input.
    None,
}

/// Parameters of a wallet container.
///
/// [`WalletFormat::default()`] is the one real format: 64-byte format marker,
/// 26-byte password marker, 500,000 PBKDF2 iterations, PKCS#7 padding.
/// The `with_*` methods exist for tests, benchmarks and compatible variants.
///
/// # Example
///
/// ```
/// use openwallet::{Padding, WalletFormat};
///
/// let format = WalletFormat::default();
/// assert_eq!(format.kdf_iterations(), 500_000);
///
/// let raw = WalletFormat::default().with_padding(Padding::None);
/// assert_eq!(raw.padding(), Padding::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalletFormat {
    format_marker: &'static [u8],
    password_marker: &'static [u8],
    kdf_iterations: u32,
    padding: Padding,
}

impl WalletFormat {
    /// The standard wallet format
    #[must_use]
    pub const fn new() -> Self {
        Self {
            format_marker: &WALLET_FORMAT_MARKER,
            password_marker: &CORRECT_PASSWORD_MARKER,
            kdf_iterations: WALLET_PBKDF2_ITERATIONS,
            padding: Padding::Pkcs7,
        }
    }

    /// Replace the cleartext format-identification marker
    #[must_use]
    pub const fn with_format_marker(mut self, marker: &'static [u8]) -> Self {
        self.format_marker = marker;
        self
    }

    /// Replace the encrypted password-correctness marker
    #[must_use]
    pub const fn with_password_marker(mut self, marker: &'static [u8]) -> Self {
        self.password_marker = marker;
        self
    }

    /// Override the PBKDF2 iteration count.
    ///
    /// Files written with a non-default count can only be read back with the
    /// same count.
    #[must_use]
    pub const fn with_kdf_iterations(mut self, iterations: u32) -> Self {
        self.kdf_iterations = iterations;
        self
    }

    #[must_use]
    pub const fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub const fn format_marker(&self) -> &'static [u8] {
        self.format_marker
    }

    #[must_use]
    pub const fn password_marker(&self) -> &'static [u8] {
        self.password_marker
    }

    #[must_use]
    pub const fn kdf_iterations(&self) -> u32 {
        self.kdf_iterations
    }

    #[must_use]
    pub const fn padding(&self) -> Padding {
        self.padding
    }
}

impl Default for WalletFormat {
    fn default() -> Self {
        Self::new()
    }
}
