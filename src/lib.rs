pub mod aes;
pub mod breaker;
pub mod cbc;
pub mod detect;
pub mod english;
pub mod error;
pub mod oracle;
pub mod padding;
pub mod xor;

#[cfg(test)]
mod tests {
    #[test]
    fn test_break_bundled_repeating_key_ciphertext() {
        let decoded_data = base64::decode(
            include_str!("../resources/vigenere_demo.txt").replace("\n", ""),
        )
        .unwrap();

        let key = super::breaker::break_repeating_key_xor(&decoded_data).unwrap();
        assert_eq!(
            String::from_utf8(key.clone()).unwrap(),
            "THE ORCHARD WALL IS EASY SCALED"
        );

        let plaintext = super::xor::apply_repeating_xor(&decoded_data, &key).unwrap();
        assert!(String::from_utf8(plaintext)
            .unwrap()
            .starts_with("For years the old observatory on the hill"));
    }

    #[test]
    fn test_pad_encrypt_decrypt_unpad_round_trip() {
        let data = b"an arbitrary message that needs padding before cbc can touch it";
        let key = b"YELLOW SUBMARINE";
        let iv = [9u8; 16];

        let padded = super::padding::pkcs7(data, super::cbc::BLOCK_LENGTH).unwrap();
        let encrypted = super::cbc::encrypt_aes_128_cbc(&padded, key, &iv).unwrap();
        let decrypted = super::cbc::decrypt_aes_128_cbc(&encrypted, key, &iv).unwrap();
        assert_eq!(
            super::padding::remove_pkcs7(&decrypted, super::cbc::BLOCK_LENGTH).unwrap(),
            data.to_vec()
        );
    }

    #[test]
    fn test_single_byte_break_via_hex_line() {
        // a line of hex, a single unknown key byte, full recovery
        let plaintext = b"Deep in the archive a clerk files the last report of the evening.";
        let ciphertext = hex::encode(super::xor::xor_with_byte(plaintext, 0x2f));

        let result = super::breaker::break_single_byte_xor(&hex::decode(ciphertext).unwrap());
        assert_eq!(result.key, 0x2f);
        assert_eq!(result.plaintext, plaintext.to_vec());
    }
}
