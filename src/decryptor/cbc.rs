//! src/decryptor/cbc.rs
//! AES-128-CBC decryption, in place, no padding removal

use crate::aliases::{Block16, Salt16};
use crate::consts::AES_BLOCK_LEN;
use crate::error::WalletError;
use crate::utils::xor_blocks;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, KeyInit};
use aes::Aes128Dec;
use tracing::trace;
use secure_gate::{RevealSecret, RevealSecretMut};

/// Decrypt `buffer` in place with AES-128-CBC.
///
/// ```text
/// P[0] = D(C[0]) ^ IV
/// P[i] = D(C[i]) ^ C[i-1]
/// ```
///
/// The previous ciphertext block is saved before each block is overwritten,
/// so the chain survives the in-place write. The whole buffer is treated as
/// plaintext afterwards; padding is the caller's business.
///
/// # Errors
///
/// - [`WalletError::InvalidKeyLength`] if `key` is not 16 bytes
/// - [`WalletError::InvalidBlockAlignment`] if `buffer.len() % 16 != 0`
///
/// Both are checked before the buffer is touched.
pub fn decrypt_cbc_in_place(key: &[u8], iv: &Salt16, buffer: &mut [u8]) -> Result<(), WalletError> {
    let cipher = Aes128Dec::new_from_slice(key)
        .map_err(|_| WalletError::InvalidKeyLength { len: key.len() })?;

    if buffer.len() % AES_BLOCK_LEN != 0 {
        return Err(WalletError::InvalidBlockAlignment { len: buffer.len() });
    }

    let mut previous_block = Block16::new(*iv.expose_secret());
    let mut current_block = Block16::new([0u8; AES_BLOCK_LEN]);
    let mut decrypted = Block16::new([0u8; AES_BLOCK_LEN]);

    for chunk in buffer.chunks_exact_mut(AES_BLOCK_LEN) {
        current_block.expose_secret_mut().copy_from_slice(chunk);

        let aes_block = GenericArray::from_mut_slice(chunk);
        cipher.decrypt_block(aes_block);

        decrypted.expose_secret_mut().copy_from_slice(chunk);
        xor_blocks(decrypted.expose_secret(), previous_block.expose_secret(), chunk);

        core::mem::swap(&mut previous_block, &mut current_block);
    }

    trace!(blocks = buffer.len() / AES_BLOCK_LEN, "cbc decryption complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encryptor::cbc::encrypt_cbc_in_place;

    #[test]
    fn fips_197_single_block() {
        // FIPS-197 C.1 AES-128 vector; with a zero IV CBC reduces to ECB for block 0.
        let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let mut buffer = hex::decode("69c4e0d86a7b0430d8cdb78070b4c55a").unwrap();
        decrypt_cbc_in_place(&key, &Salt16::new([0u8; 16]), &mut buffer).unwrap();
        assert_eq!(hex::encode(&buffer), "00112233445566778899aabbccddeeff");
    }

    #[test]
    fn sp800_38a_cbc_vector() {
        // NIST SP 800-38A F.2.2 CBC-AES128.Decrypt
        let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
        let iv: [u8; 16] = hex::decode("000102030405060708090a0b0c0d0e0f")
            .unwrap()
            .try_into()
            .unwrap();
        let mut buffer = hex::decode(concat!(
            "7649abac8119b246cee98e9b12e9197d",
            "5086cb9b507219ee95db113a917678b2",
            "73bed6b8e3c1743b7116e69e22229516",
            "3ff1caa1681fac09120eca307586e1a7",
        ))
        .unwrap();
        decrypt_cbc_in_place(&key, &Salt16::new(iv), &mut buffer).unwrap();
        assert_eq!(
            hex::encode(&buffer),
            concat!(
                "6bc1bee22e409f96e93d7e117393172a",
                "ae2d8a571e03ac9c9eb76fac45af8e51",
                "30c81c46a35ce411e5fbc1191a0a52ef",
                "f69f2445df4f9b17ad2b417be66c3710",
            )
        );
    }

    #[test]
    fn inverts_encryption() {
        let key = [0x24u8; 16];
        let iv = Salt16::new([0x99u8; 16]);
        let original: Vec<u8> = (0u8..64).collect();
        let mut buffer = original.clone();
        encrypt_cbc_in_place(&key, &iv, &mut buffer).unwrap();
        assert_ne!(buffer, original);
        decrypt_cbc_in_place(&key, &iv, &mut buffer).unwrap();
        assert_eq!(buffer, original);
    }

    #[test]
    fn rejects_bad_key_length() {
        let mut buffer = [0u8; 16];
        let err = decrypt_cbc_in_place(&[0u8; 32], &Salt16::new([0u8; 16]), &mut buffer)
            .unwrap_err();
        assert!(matches!(err, WalletError::InvalidKeyLength { len: 32 }));
    }

    #[test]
    fn rejects_misaligned_buffer_untouched() {
        let mut buffer = [0xabu8; 20];
        let err = decrypt_cbc_in_place(&[0u8; 16], &Salt16::new([0u8; 16]), &mut buffer)
            .unwrap_err();
        assert!(matches!(err, WalletError::InvalidBlockAlignment { len: 20 }));
        assert_eq!(buffer, [0xabu8; 20]);
    }
}
