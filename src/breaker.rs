use crate::english::Scorer;
use crate::error::{Error, Res};
use crate::xor;
use itertools::Itertools;
use std::ops::RangeInclusive;

pub const DEFAULT_MIN_KEYSIZE: usize = 2;
pub const DEFAULT_MAX_KEYSIZE: usize = 40;


#[derive(Debug, PartialEq)]
pub struct SingleByteBreak {
    pub key: u8,
    pub plaintext: Vec<u8>,
    pub score: i64,
}

pub fn break_single_byte_xor(ciphertext: &[u8]) -> SingleByteBreak {
    let scorer = Scorer::default();
    let candidate = |key: u8| {
        let plaintext = xor::xor_with_byte(ciphertext, key);
        let score = scorer.score(&plaintext);
        SingleByteBreak {
            key,
            plaintext,
            score,
        }
    };

    let mut best = candidate(0);
    for key in 1..=u8::MAX {
        let next = candidate(key);
        // strictly better only, so equal scores keep the smaller key
        if next.score < best.score {
            best = next;
        }
    }

    best
}

pub fn estimate_keysize(ciphertext: &[u8], keysizes: RangeInclusive<usize>) -> Res<usize> {
    if *keysizes.start() == 0 {
        return Err(Error::InvalidLength);
    }

    let mut best: Option<(usize, f64)> = None;

    for keysize in keysizes {
        let mut distance_sum = 0;
        let mut pair_count = 0;

        for (first, second) in ciphertext.chunks_exact(keysize).tuple_windows() {
            distance_sum += xor::hamming_distance(first, second)?;
            pair_count += 1;
        }
        if pair_count == 0 {
            return Err(Error::InsufficientData);
        }

        let normalized_distance = distance_sum as f64 / pair_count as f64 / keysize as f64;
        match best {
            Some((_, best_distance)) if normalized_distance >= best_distance => {}
            _ => best = Some((keysize, normalized_distance)),
        }
    }

    best.map(|(keysize, _)| keysize).ok_or(Error::InsufficientData)
}

pub fn break_repeating_key_xor(ciphertext: &[u8]) -> Res<Vec<u8>> {
    break_repeating_key_xor_with_range(ciphertext, DEFAULT_MIN_KEYSIZE..=DEFAULT_MAX_KEYSIZE)
}

pub fn break_repeating_key_xor_with_range(
    ciphertext: &[u8],
    keysizes: RangeInclusive<usize>,
) -> Res<Vec<u8>> {
    let keysize = estimate_keysize(ciphertext, keysizes)?;

    // every column was xored with a single key byte, so each one is an
    // independent single-byte problem
    let mut key = Vec::with_capacity(keysize);
    for n in 0..keysize {
        let column = fetch_nth_from_each_block(ciphertext, n, keysize);
        key.push(break_single_byte_xor(&column).key);
    }

    Ok(key)
}

fn fetch_nth_from_each_block(data: &[u8], n: usize, keysize: usize) -> Vec<u8> {
    data.iter().skip(n).step_by(keysize).copied().collect()
}
