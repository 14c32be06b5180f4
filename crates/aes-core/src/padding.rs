//! PKCS#7 padding over 16-byte blocks.

use crate::block::BLOCK_SIZE;
use crate::error::{Error, Result};

/// Number of padding bytes appended to a message of `len` bytes (1..=16).
#[inline]
pub fn pad_len(len: usize) -> usize {
    BLOCK_SIZE - len % BLOCK_SIZE
}

/// Returns `data` followed by its PKCS#7 padding.
///
/// A block-aligned input gains a full block of padding. The output buffer is
/// allocated at its final size.
pub fn pad(data: &[u8]) -> Result<Vec<u8>> {
    let n = pad_len(data.len());
    let value = u8::try_from(n).map_err(|_| Error::PaddingOverflow { pad: n })?;
    let mut out = vec![value; data.len() + n];
    out[..data.len()].copy_from_slice(data);
    Ok(out)
}

/// Strips PKCS#7 padding in place.
///
/// The final byte `n` must lie in `1..=16` and the last `n` bytes must all
/// equal `n`; anything else is [`Error::InvalidPadding`] and leaves `data`
/// untouched.
pub fn unpad(data: &mut Vec<u8>) -> Result<()> {
    let n = match data.last() {
        Some(&n) => usize::from(n),
        None => return Err(Error::InvalidPadding),
    };
    if n == 0 || n > BLOCK_SIZE || n > data.len() {
        return Err(Error::InvalidPadding);
    }
    let tail = &data[data.len() - n..];
    if tail.iter().any(|&b| usize::from(b) != n) {
        return Err(Error::InvalidPadding);
    }
    data.truncate(data.len() - n);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_next_block() {
        let out = pad(b"YELLOW SUBMARINE!").unwrap();
        assert_eq!(out.len(), 32);
        assert_eq!(&out[17..], &[15u8; 15]);
    }

    #[test]
    fn aligned_input_gets_full_block() {
        let out = pad(&[0u8; 16]).unwrap();
        assert_eq!(out.len(), 32);
        assert_eq!(&out[16..], &[16u8; 16]);

        let empty = pad(&[]).unwrap();
        assert_eq!(empty, vec![16u8; 16]);
    }

    #[test]
    fn pad_len_is_between_one_and_sixteen() {
        for len in 0..100 {
            let n = pad_len(len);
            assert!((1..=16).contains(&n));
            assert_eq!((len + n) % 16, 0);
        }
    }

    #[test]
    fn unpad_strips_valid_padding() {
        let mut data = pad(b"hello").unwrap();
        unpad(&mut data).unwrap();
        assert_eq!(data, b"hello");
    }

    #[test]
    fn unpad_rejects_malformed_padding() {
        let mut zero = vec![1u8; 15];
        zero.push(0);
        assert_eq!(unpad(&mut zero), Err(Error::InvalidPadding));

        let mut too_long = vec![17u8; 32];
        assert_eq!(unpad(&mut too_long), Err(Error::InvalidPadding));

        let mut mismatched = vec![0u8; 12];
        mismatched.extend_from_slice(&[4, 4, 3, 4]);
        assert_eq!(unpad(&mut mismatched), Err(Error::InvalidPadding));
        assert_eq!(mismatched.len(), 16);

        let mut short = vec![5u8; 3];
        assert_eq!(unpad(&mut short), Err(Error::InvalidPadding));

        assert_eq!(unpad(&mut Vec::new()), Err(Error::InvalidPadding));
    }
}
