use crate::error::{Error, Res};


// Block-aligned input gets no padding bytes at all, so padding is only
// reversible for data that does not already fill its last block.
pub fn pkcs7(data: &[u8], block_length: usize) -> Res<Vec<u8>> {
    if block_length == 0 {
        return Err(Error::InvalidLength);
    }

    let mut padded_data = data.to_vec();
    let remainder = data.len() % block_length;

    if remainder != 0 {
        let pad_length = block_length - remainder;
        if pad_length > u8::MAX as usize {
            return Err(Error::InvalidLength);
        }
        padded_data.append(&mut vec![pad_length as u8; pad_length]);
    }

    Ok(padded_data)
}

fn validate_pkcs7(data: &[u8], block_length: usize) -> Res<usize> {
    let pad_length = *data.last().ok_or(Error::InvalidPadding)? as usize;

    if pad_length == 0 || pad_length > block_length {
        return Err(Error::InvalidPadding);
    }
    if data[data.len() - pad_length..]
        .iter()
        .any(|&b| b as usize != pad_length)
    {
        return Err(Error::InvalidPadding);
    }

    Ok(pad_length)
}

pub fn remove_pkcs7(data: &[u8], block_length: usize) -> Res<Vec<u8>> {
    if block_length == 0 || data.len() % block_length != 0 {
        return Err(Error::InvalidLength);
    }

    let pad_length = validate_pkcs7(data, block_length)?;

    Ok(data[..data.len() - pad_length].to_vec())
}
