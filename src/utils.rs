//! Utility functions used across the library.

use crate::consts::AES_BLOCK_LEN;
use crate::error::WalletError;

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// Used by both CBC directions to combine a cipher block with the chaining
/// value.
///
/// # Panics (by contract)
///
/// Panics if any of the three slices is shorter than 16 bytes. Callers only
/// pass AES blocks and [`Block16`](crate::aliases::Block16) contents.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < AES_BLOCK_LEN {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}

/// Appends PKCS#7 padding so that `data.len()` becomes a multiple of 16.
///
/// A full block of `0x10` is appended when the input is already aligned.
pub fn pad_pkcs7(data: &mut Vec<u8>) {
    let pad = AES_BLOCK_LEN - data.len() % AES_BLOCK_LEN;
    data.resize(data.len() + pad, pad as u8);
}

/// Returns the length of `data` with its PKCS#7 padding removed.
///
/// The padding bytes are compared without early exit.
pub fn unpad_pkcs7(data: &[u8]) -> Result<usize, WalletError> {
    let Some(&last) = data.last() else {
        return Err(WalletError::InvalidPadding);
    };

    let pad = last as usize;
    if pad == 0 || pad > AES_BLOCK_LEN || pad > data.len() {
        return Err(WalletError::InvalidPadding);
    }

    let diff = data[data.len() - pad..]
        .iter()
        .fold(0u8, |acc, &byte| acc | (byte ^ last));
    if diff != 0 {
        return Err(WalletError::InvalidPadding);
    }

    Ok(data.len() - pad)
}
