//! Cipher Block Chaining mode (NIST SP 800-38A section 6.2) with PKCS#7 padding.
//!
//! Each plaintext block is XORed with the previous ciphertext block, or with
//! the IV for the first block, before encryption. Decryption XORs each
//! deciphered block with the preceding *input* ciphertext block, so every
//! block can be deciphered without waiting on its predecessor.

use log::debug;

use crate::block::{block_to_state, state_to_block, xor_state, Block, BLOCK_SIZE};
use crate::cipher::{cipher_state, inv_cipher_state};
use crate::ecb::{check_ciphertext_len, load_block};
use crate::error::Result;
use crate::key::MasterKey;
use crate::padding::{pad, unpad};

/// Pads and encrypts `plaintext` in CBC mode under `iv`.
pub fn encrypt_cbc(plaintext: &[u8], key: &MasterKey, iv: &Block) -> Result<Vec<u8>> {
    let round_keys = key.expand();
    let mut data = pad(plaintext)?;
    debug!(
        "cbc encrypt: {} bytes, {} blocks, {:?}",
        plaintext.len(),
        data.len() / BLOCK_SIZE,
        key.size()
    );

    let mut chain = block_to_state(iv);
    for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
        let mut state = block_to_state(&load_block(chunk));
        xor_state(&mut state, &chain);
        cipher_state(&mut state, &round_keys);
        chunk.copy_from_slice(&state_to_block(&state));
        chain = state;
    }
    Ok(data)
}

/// Decrypts a CBC `ciphertext` produced under `iv` and strips the padding.
pub fn decrypt_cbc(ciphertext: &[u8], key: &MasterKey, iv: &Block) -> Result<Vec<u8>> {
    check_ciphertext_len(ciphertext.len())?;
    let round_keys = key.expand();
    debug!(
        "cbc decrypt: {} blocks, {:?}",
        ciphertext.len() / BLOCK_SIZE,
        key.size()
    );

    let mut data = vec![0u8; ciphertext.len()];
    let mut previous = block_to_state(iv);
    for (out, input) in data
        .chunks_exact_mut(BLOCK_SIZE)
        .zip(ciphertext.chunks_exact(BLOCK_SIZE))
    {
        let current = block_to_state(&load_block(input));
        let mut state = current;
        inv_cipher_state(&mut state, &round_keys);
        xor_state(&mut state, &previous);
        out.copy_from_slice(&state_to_block(&state));
        previous = current;
    }
    unpad(&mut data)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecb::encrypt_ecb;
    use crate::error::Error;

    const IV: &str = "000102030405060708090a0b0c0d0e0f";

    fn iv() -> Block {
        hex::decode(IV).unwrap().try_into().unwrap()
    }

    #[test]
    fn first_block_matches_sp800_38a_f21() {
        let key = MasterKey::from_bytes(&hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap())
            .unwrap();
        let pt = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();
        let ct = encrypt_cbc(&pt, &key, &iv()).unwrap();
        assert_eq!(ct.len(), 32);
        assert_eq!(hex::encode(&ct[..16]), "7649abac8119b246cee98e9b12e9197d");
        assert_eq!(decrypt_cbc(&ct, &key, &iv()).unwrap(), pt);
    }

    #[test]
    fn zero_iv_first_block_equals_ecb() {
        let key = MasterKey::from([9u8; 24]);
        let pt = b"sixteen byte msg";
        let cbc = encrypt_cbc(pt, &key, &[0u8; 16]).unwrap();
        let ecb = encrypt_ecb(pt, &key).unwrap();
        assert_eq!(cbc[..16], ecb[..16]);
        assert_ne!(cbc[16..], ecb[16..]);
    }

    #[test]
    fn equal_blocks_encrypt_differently() {
        let key = MasterKey::from([3u8; 16]);
        let ct = encrypt_cbc(&[0x41u8; 32], &key, &iv()).unwrap();
        assert_ne!(ct[..16], ct[16..32]);
    }

    #[test]
    fn iv_changes_every_block() {
        let key = MasterKey::from([5u8; 32]);
        let pt = [0u8; 48];
        let a = encrypt_cbc(&pt, &key, &[0u8; 16]).unwrap();
        let b = encrypt_cbc(&pt, &key, &[1u8; 16]).unwrap();
        for (x, y) in a.chunks(16).zip(b.chunks(16)) {
            assert_ne!(x, y);
        }
    }

    #[test]
    fn corrupting_a_block_only_garbles_its_neighbour() {
        let key = MasterKey::from([6u8; 16]);
        let pt: Vec<u8> = (0..64u8).collect();
        let mut ct = encrypt_cbc(&pt, &key, &iv()).unwrap();
        ct[16] ^= 0x01;
        let out = decrypt_cbc(&ct, &key, &iv()).unwrap();
        assert_eq!(out[..16], pt[..16]);
        assert_ne!(out[16..32], pt[16..32]);
        // Flipped bit propagates into the same position of the next block.
        assert_eq!(out[32], pt[32] ^ 0x01);
        assert_eq!(out[33..], pt[33..]);
    }

    #[test]
    fn rejects_unaligned_ciphertext() {
        let key = MasterKey::from([0u8; 16]);
        assert_eq!(
            decrypt_cbc(&[0u8; 31], &key, &iv()),
            Err(Error::InvalidBlockLength { len: 31 })
        );
    }
}
