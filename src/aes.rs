use crate::error::Res;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ecb_encrypt_decrypt() {
        let data = b"block number oneblock number two";
        let encrypted = encrypt_aes_128_ecb(data, b"YELLOW SUBMARINE").unwrap();
        assert_eq!(
            decrypt_aes_128_ecb(&encrypted, b"YELLOW SUBMARINE").unwrap(),
            data.to_vec()
        );
    }

    #[test]
    fn test_ecb_encrypts_equal_blocks_to_equal_blocks() {
        let data = b"YELLOW SUBMARINEYELLOW SUBMARINE";
        let encrypted = encrypt_aes_128_ecb(data, b"0123456789abcdef").unwrap();
        assert_eq!(encrypted[..16], encrypted[16..32]);
    }

    #[test]
    fn test_ecb_single_block() {
        let block = b"exactly 16 bytes";
        let encrypted = encrypt_aes_128_ecb(block, b"YELLOW SUBMARINE").unwrap();
        assert_eq!(encrypted.len(), 16);
        assert_ne!(encrypted, block.to_vec());
    }
}

pub fn decrypt_aes_128_ecb(encrypted_data: &[u8], key: &[u8]) -> Res<Vec<u8>> {
    use openssl::symm::Cipher;
    use openssl::symm::Crypter;
    use openssl::symm::Mode;

    let mut crypter = Crypter::new(Cipher::aes_128_ecb(), Mode::Decrypt, key, None)?;
    crypter.pad(false);

    let mut output = vec![0; encrypted_data.len() + 16];

    crypter.update(encrypted_data, &mut output)?;

    crypter.finalize(&mut output)?;

    Ok(output.drain(..encrypted_data.len()).collect())
}

pub fn encrypt_aes_128_ecb(data: &[u8], key: &[u8]) -> Res<Vec<u8>> {
    use openssl::symm::Cipher;
    use openssl::symm::Crypter;
    use openssl::symm::Mode;

    let mut crypter = Crypter::new(Cipher::aes_128_ecb(), Mode::Encrypt, key, None)?;
    crypter.pad(false);

    let mut output = vec![0; data.len() + 16];

    crypter.update(data, &mut output)?;

    crypter.finalize(&mut output)?;

    Ok(output.drain(..data.len()).collect())
}
