//! AES round transformations over a column-word [`State`].

use crate::block::{ith_byte, word_from_bytes, xor_state, State, NB};
use crate::gf::{mul11, mul13, mul14, mul9, xtime};
use crate::sbox::{inv_sub_word, sub_word};

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for word in state.iter_mut() {
        *word = sub_word(*word);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for word in state.iter_mut() {
        *word = inv_sub_word(*word);
    }
}

/// Performs ShiftRows in place: row `i` rotates left by `i` columns.
#[inline]
pub fn shift_rows(state: &mut State) {
    let snapshot = *state;
    for (c, word) in state.iter_mut().enumerate() {
        *word = word_from_bytes(std::array::from_fn(|i| {
            ith_byte(snapshot[(c + i) % NB], i)
        }));
    }
}

/// Performs the inverse of ShiftRows in place.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    let snapshot = *state;
    for (c, word) in state.iter_mut().enumerate() {
        *word = word_from_bytes(std::array::from_fn(|i| {
            ith_byte(snapshot[(c + NB - i) % NB], i)
        }));
    }
}

fn mix_single_column(word: u32) -> u32 {
    let col = word.to_be_bytes();
    let all = col[0] ^ col[1] ^ col[2] ^ col[3];
    word_from_bytes(std::array::from_fn(|i| {
        all ^ col[i] ^ xtime(col[i] ^ col[(i + 1) % 4])
    }))
}

fn inv_mix_single_column(word: u32) -> u32 {
    let [a0, a1, a2, a3] = word.to_be_bytes();
    word_from_bytes([
        mul14(a0) ^ mul11(a1) ^ mul13(a2) ^ mul9(a3),
        mul9(a0) ^ mul14(a1) ^ mul11(a2) ^ mul13(a3),
        mul13(a0) ^ mul9(a1) ^ mul14(a2) ^ mul11(a3),
        mul11(a0) ^ mul13(a1) ^ mul9(a2) ^ mul14(a3),
    ])
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for word in state.iter_mut() {
        *word = mix_single_column(*word);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    for word in state.iter_mut() {
        *word = inv_mix_single_column(*word);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &State) {
    xor_state(state, round_key);
}
