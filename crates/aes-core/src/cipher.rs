//! AES key schedule and single-block encryption/decryption.

use log::trace;

use crate::block::{block_to_state, state_to_block, Block, State};
use crate::error::{Error, Result};
use crate::key::{ExpandedKey, KeySize, MasterKey, MAX_EXPANDED_WORDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::{sub_word, RCON};

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn schedule(size: KeySize, key: &[u32]) -> ExpandedKey {
    let nk = size.words();
    let mut w = [0u32; MAX_EXPANDED_WORDS];
    w[..nk].copy_from_slice(key);

    for i in nk..size.expanded_words() {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[(i / nk) - 1]) << 24);
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    trace!("expanded {:?} key into {} words", size, size.expanded_words());
    ExpandedKey::new(size, w)
}

/// Expands an `nk`-word key into `4 * (Nr + 1)` schedule words.
///
/// Fails with [`Error::InvalidKeyLength`] when `nk` is not 4, 6 or 8, or when
/// `key` does not hold exactly `nk` words.
pub fn expand_key(nk: usize, key: &[u32]) -> Result<ExpandedKey> {
    let size = KeySize::from_words(nk)?;
    if key.len() != nk {
        return Err(Error::InvalidKeyLength { words: key.len() });
    }
    Ok(schedule(size, key))
}

impl MasterKey {
    /// Expands this key. The length was validated on construction, so this
    /// cannot fail.
    pub fn expand(&self) -> ExpandedKey {
        schedule(self.size(), self.words())
    }
}

/// Runs the forward cipher over a state in place (FIPS-197 section 5.1).
pub fn cipher_state(state: &mut State, round_keys: &ExpandedKey) {
    let nr = round_keys.rounds();

    add_round_key(state, &round_keys.round_key(0));

    for round in 1..nr {
        sub_bytes(state);
        shift_rows(state);
        mix_columns(state);
        add_round_key(state, &round_keys.round_key(round));
    }

    sub_bytes(state);
    shift_rows(state);
    add_round_key(state, &round_keys.round_key(nr));
}

/// Runs the inverse cipher over a state in place (FIPS-197 section 5.3).
pub fn inv_cipher_state(state: &mut State, round_keys: &ExpandedKey) {
    let nr = round_keys.rounds();

    add_round_key(state, &round_keys.round_key(nr));
    for round in (1..nr).rev() {
        inv_shift_rows(state);
        inv_sub_bytes(state);
        add_round_key(state, &round_keys.round_key(round));
        inv_mix_columns(state);
    }
    inv_sub_bytes(state);
    inv_shift_rows(state);
    add_round_key(state, &round_keys.round_key(0));
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &ExpandedKey) -> Block {
    let mut state = block_to_state(block);
    cipher_state(&mut state, round_keys);
    state_to_block(&state)
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &ExpandedKey) -> Block {
    let mut state = block_to_state(block);
    inv_cipher_state(&mut state, round_keys);
    state_to_block(&state)
}
