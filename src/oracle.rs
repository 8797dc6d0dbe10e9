use crate::aes;
use crate::cbc;
use crate::detect;
use crate::detect::Mode;
use crate::error::Res;
use crate::padding;
use rand::Rng;


// encrypts under a fresh random key with a coin flip between ecb and cbc,
// returning the true mode alongside the ciphertext so detection can be
// checked against it
pub fn encrypt_ecb_or_cbc<R: Rng>(rng: &mut R, plaintext: &[u8]) -> Res<(Mode, Vec<u8>)> {
    let aes_key: [u8; 16] = rng.gen();

    // n random bytes in front, 16 - n behind, so exactly one block is added
    let prefix_length = rng.gen_range(5..=10);
    let mut data_to_encrypt: Vec<u8> = (0..prefix_length).map(|_| rng.gen()).collect();
    data_to_encrypt.extend_from_slice(plaintext);
    data_to_encrypt.extend((0..cbc::BLOCK_LENGTH - prefix_length).map(|_| rng.gen::<u8>()));

    let padded = padding::pkcs7(&data_to_encrypt, cbc::BLOCK_LENGTH)?;

    if rng.gen() {
        Ok((Mode::Ecb, aes::encrypt_aes_128_ecb(&padded, &aes_key)?))
    } else {
        let iv: [u8; 16] = rng.gen();
        Ok((Mode::Cbc, cbc::encrypt_aes_128_cbc(&padded, &aes_key, &iv)?))
    }
}

// feeds the oracle four blocks of zeros and classifies the result
pub fn probe_oracle_mode<R: Rng>(rng: &mut R) -> Res<(Mode, Mode)> {
    let probe = [0u8; 4 * cbc::BLOCK_LENGTH];
    let (actual_mode, ciphertext) = encrypt_ecb_or_cbc(rng, &probe)?;

    Ok((detect::detect_ecb(&ciphertext), actual_mode))
}
