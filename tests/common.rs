//! tests/common.rs
//! Common constants and utilities shared across test files

use openwallet::{PasswordString, WalletFormat};

/// Fast iteration count for tests - performance testing is in benches/
pub const TEST_ITERATIONS: u32 = 5;

/// Standard test password
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &str = "password";

/// Common test payload (wallets carry JSON)
#[allow(dead_code)] // Used across multiple test files
pub const TEST_DATA: &[u8] = br#"{"walletName":"demo","balance":0}"#;

/// Standard wallet format at test cost
#[allow(dead_code)] // Used across multiple test files
pub const fn fast_format() -> WalletFormat {
    WalletFormat::new().with_kdf_iterations(TEST_ITERATIONS)
}

#[allow(dead_code)] // Used across multiple test files
pub fn password(s: &str) -> PasswordString {
    PasswordString::new(s.to_string())
}
