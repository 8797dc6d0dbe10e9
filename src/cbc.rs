use crate::aes;
use crate::error::{Error, Res};
use crate::xor;

pub const BLOCK_LENGTH: usize = 16;


pub fn encrypt_cbc(
    encrypt_block: impl Fn(&[u8], &[u8]) -> Res<Vec<u8>>,
    data: &[u8],
    key: &[u8],
    iv: &[u8],
) -> Res<Vec<u8>> {
    if data.len() % BLOCK_LENGTH != 0 {
        return Err(Error::InvalidLength);
    }
    if iv.len() != BLOCK_LENGTH {
        return Err(Error::LengthMismatch);
    }

    let mut encrypted_data = Vec::with_capacity(data.len());
    let mut last_encrypted_block = iv.to_vec();

    // each block depends on the previous ciphertext block, so the chain
    // has to run front to back
    for block in data.chunks(BLOCK_LENGTH) {
        let input_to_block_cipher = xor::fixed_xor(block, &last_encrypted_block);
        last_encrypted_block = encrypt_block(&input_to_block_cipher, key)?;
        encrypted_data.extend_from_slice(&last_encrypted_block);
    }

    Ok(encrypted_data)
}

pub fn decrypt_cbc(
    decrypt_block: impl Fn(&[u8], &[u8]) -> Res<Vec<u8>>,
    data: &[u8],
    key: &[u8],
    iv: &[u8],
) -> Res<Vec<u8>> {
    if data.len() % BLOCK_LENGTH != 0 {
        return Err(Error::InvalidLength);
    }
    if iv.len() != BLOCK_LENGTH {
        return Err(Error::LengthMismatch);
    }

    let mut decrypted_data = Vec::with_capacity(data.len());
    let mut last_encrypted_block: &[u8] = iv;

    for block in data.chunks(BLOCK_LENGTH) {
        let cipher_decrypted = decrypt_block(block, key)?;
        decrypted_data.extend_from_slice(&xor::fixed_xor(&cipher_decrypted, last_encrypted_block));
        last_encrypted_block = block;
    }

    Ok(decrypted_data)
}

pub fn encrypt_aes_128_cbc(data: &[u8], key: &[u8], iv: &[u8]) -> Res<Vec<u8>> {
    encrypt_cbc(aes::encrypt_aes_128_ecb, data, key, iv)
}

pub fn decrypt_aes_128_cbc(data: &[u8], key: &[u8], iv: &[u8]) -> Res<Vec<u8>> {
    decrypt_cbc(aes::decrypt_aes_128_ecb, data, key, iv)
}
