//! Electronic Codebook mode with PKCS#7 padding.
//!
//! Each block is enciphered independently under the same schedule, so equal
//! plaintext blocks give equal ciphertext blocks. Prefer [`crate::encrypt_cbc`]
//! unless interoperability requires ECB.

use log::debug;

use crate::block::{block_to_state, state_to_block, Block, BLOCK_SIZE};
use crate::cipher::{cipher_state, inv_cipher_state};
use crate::error::{Error, Result};
use crate::key::MasterKey;
use crate::padding::{pad, unpad};

/// Rejects ciphertexts that are empty or not block aligned.
pub(crate) fn check_ciphertext_len(len: usize) -> Result<()> {
    if len == 0 || len % BLOCK_SIZE != 0 {
        return Err(Error::InvalidBlockLength { len });
    }
    Ok(())
}

/// Copies a `BLOCK_SIZE` chunk produced by `chunks_exact` into a block.
#[inline]
pub(crate) fn load_block(chunk: &[u8]) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(chunk);
    block
}

/// Pads and encrypts `plaintext`, one block at a time.
///
/// The output is always `len + (16 - len % 16)` bytes long.
pub fn encrypt_ecb(plaintext: &[u8], key: &MasterKey) -> Result<Vec<u8>> {
    let round_keys = key.expand();
    let mut data = pad(plaintext)?;
    debug!(
        "ecb encrypt: {} bytes, {} blocks, {:?}",
        plaintext.len(),
        data.len() / BLOCK_SIZE,
        key.size()
    );

    for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
        let mut state = block_to_state(&load_block(chunk));
        cipher_state(&mut state, &round_keys);
        chunk.copy_from_slice(&state_to_block(&state));
    }
    Ok(data)
}

/// Decrypts `ciphertext` block by block and strips the padding.
pub fn decrypt_ecb(ciphertext: &[u8], key: &MasterKey) -> Result<Vec<u8>> {
    check_ciphertext_len(ciphertext.len())?;
    let round_keys = key.expand();
    debug!(
        "ecb decrypt: {} blocks, {:?}",
        ciphertext.len() / BLOCK_SIZE,
        key.size()
    );

    let mut data = ciphertext.to_vec();
    for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
        let mut state = block_to_state(&load_block(chunk));
        inv_cipher_state(&mut state, &round_keys);
        chunk.copy_from_slice(&state_to_block(&state));
    }
    unpad(&mut data)?;
    Ok(data)
}
