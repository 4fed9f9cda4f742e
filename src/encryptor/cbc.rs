//! src/encryptor/cbc.rs
//! AES-128-CBC encryption, in place, caller pads

use crate::aliases::{Block16, Salt16};
use crate::consts::AES_BLOCK_LEN;
use crate::error::WalletError;
use crate::utils::xor_blocks;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::Aes128Enc;
use secure_gate::{RevealSecret, RevealSecretMut};

/// Encrypt `buffer` in place with AES-128-CBC.
///
/// `C[i] = E(P[i] ^ C[i-1])`, with `C[-1] = IV`. The buffer must already be
/// block aligned.
pub fn encrypt_cbc_in_place(key: &[u8], iv: &Salt16, buffer: &mut [u8]) -> Result<(), WalletError> {
    let cipher = Aes128Enc::new_from_slice(key)
        .map_err(|_| WalletError::InvalidKeyLength { len: key.len() })?;

    if buffer.len() % AES_BLOCK_LEN != 0 {
        return Err(WalletError::InvalidBlockAlignment { len: buffer.len() });
    }

    let mut previous_block = Block16::new(*iv.expose_secret());
    let mut plaintext_block = Block16::new([0u8; AES_BLOCK_LEN]);

    for chunk in buffer.chunks_exact_mut(AES_BLOCK_LEN) {
        plaintext_block.expose_secret_mut().copy_from_slice(chunk);
        xor_blocks(
            plaintext_block.expose_secret(),
            previous_block.expose_secret(),
            chunk,
        );

        cipher.encrypt_block(GenericArray::from_mut_slice(chunk));
        previous_block.expose_secret_mut().copy_from_slice(chunk);
    }

    Ok(())
}
