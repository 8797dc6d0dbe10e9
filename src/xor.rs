use crate::error::{Error, Res};


// zip semantics - the output is as long as the shorter input
pub fn fixed_xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b).map(|(&b1, &b2)| b1 ^ b2).collect()
}

// strict variant - both inputs must have the same length
pub fn fixed_xor_strict(a: &[u8], b: &[u8]) -> Res<Vec<u8>> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch);
    }

    Ok(fixed_xor(a, b))
}

pub fn xor_with_byte(data: &[u8], key: u8) -> Vec<u8> {
    data.iter().map(|b| b ^ key).collect()
}

pub fn apply_repeating_xor(data: &[u8], key: &[u8]) -> Res<Vec<u8>> {
    if key.is_empty() {
        return Err(Error::EmptyKey);
    }

    let mut out = Vec::with_capacity(data.len());

    for (pos, b) in data.iter().enumerate() {
        let xor_byte = key[pos % key.len()];
        out.push(b ^ xor_byte);
    }

    Ok(out)
}

pub fn hamming_distance(a: &[u8], b: &[u8]) -> Res<usize> {
    use bitvec::prelude::*;

    if a.len() != b.len() {
        return Err(Error::LengthMismatch);
    }

    let bits_a = a.view_bits::<Msb0>();
    let bits_b = b.view_bits::<Msb0>();
    let mut distance = 0;

    for i in 0..bits_a.len() {
        if bits_a[i] != bits_b[i] {
            distance += 1;
        }
    }

    Ok(distance)
}
