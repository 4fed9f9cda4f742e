//! # Constants
//!
//! This module defines the fixed parameters of the wallet container format:
//! the two marker sequences, the PBKDF2 iteration count and the buffer sizes.

/// Format-identification marker.
///
/// Stored in the clear as the first 64 bytes of every wallet file. A file that
/// does not start with exactly these bytes is not a wallet container and is
/// rejected before any key derivation takes place.
///
/// The bytes spell `"If I pull that off, will you die?\nIt would be extremely painful."`.
pub const WALLET_FORMAT_MARKER: [u8; 64] = [
    0x49, 0x66, 0x20, 0x49, 0x20, 0x70, 0x75, 0x6c, 0x6c, 0x20, 0x74, 0x68, 0x61, 0x74, 0x20, 0x6f,
    0x66, 0x66, 0x2c, 0x20, 0x77, 0x69, 0x6c, 0x6c, 0x20, 0x79, 0x6f, 0x75, 0x20, 0x64, 0x69, 0x65,
    0x3f, 0x0a, 0x49, 0x74, 0x20, 0x77, 0x6f, 0x75, 0x6c, 0x64, 0x20, 0x62, 0x65, 0x20, 0x65, 0x78,
    0x74, 0x72, 0x65, 0x6d, 0x65, 0x6c, 0x79, 0x20, 0x70, 0x61, 0x69, 0x6e, 0x66, 0x75, 0x6c, 0x2e,
];

/// Password-correctness marker.
///
/// Encrypted together with the payload; after decryption the plaintext must
/// start with these 26 bytes. A wrong key turns them into noise, so a mismatch
/// means the password was wrong. This is a heuristic, not a MAC.
///
/// The bytes spell `"You're a big guy.\nFor you."`.
pub const CORRECT_PASSWORD_MARKER: [u8; 26] = [
    0x59, 0x6f, 0x75, 0x27, 0x72, 0x65, 0x20, 0x61, 0x20, 0x62, 0x69, 0x67, 0x20, 0x67, 0x75, 0x79,
    0x2e, 0x0a, 0x46, 0x6f, 0x72, 0x20, 0x79, 0x6f, 0x75, 0x2e,
];

/// PBKDF2-HMAC-SHA256 iteration count used by every wallet file.
///
/// This is the only brake on offline password guessing. Do not lower it.
pub const WALLET_PBKDF2_ITERATIONS: u32 = 500_000;

/// Minimum allowed PBKDF2 iterations.
pub const PBKDF2_MIN_ITER: u32 = 1;

/// Maximum allowed PBKDF2 iterations (5 million).
pub const PBKDF2_MAX_ITER: u32 = 5_000_000;

/// Salt length in bytes. The salt doubles as the CBC initialization vector.
pub const SALT_LEN: usize = 16;

/// AES block length in bytes.
pub const AES_BLOCK_LEN: usize = 16;

/// Derived key length (AES-128).
pub const WALLET_KEY_LEN: usize = 16;
