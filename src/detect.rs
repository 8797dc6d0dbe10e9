use itertools::Itertools;

pub const BLOCK_LENGTH: usize = 16;


#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Mode {
    Ecb,
    Cbc,
}

// number of unordered pairs of identical blocks; a trailing partial block
// is ignored
pub fn ecb_score(ciphertext: &[u8], block_length: usize) -> usize {
    ciphertext
        .chunks_exact(block_length)
        .tuple_combinations()
        .filter(|(first, second)| first == second)
        .count()
}

// a single duplicate pair is already overwhelming evidence for ecb, but a
// low-redundancy plaintext can still slip through as a false negative
pub fn classify_mode(score: usize) -> Mode {
    if score > 0 {
        Mode::Ecb
    } else {
        Mode::Cbc
    }
}

pub fn detect_ecb(ciphertext: &[u8]) -> Mode {
    classify_mode(ecb_score(ciphertext, BLOCK_LENGTH))
}

// indexes of the blobs that look ecb encrypted
pub fn find_ecb_ciphertexts(ciphertexts: &[&[u8]]) -> Vec<usize> {
    let mut ecb_indexes = Vec::new();

    for (i, ciphertext) in ciphertexts.iter().enumerate() {
        if ecb_score(ciphertext, BLOCK_LENGTH) > 0 {
            ecb_indexes.push(i);
        }
    }

    ecb_indexes
}
