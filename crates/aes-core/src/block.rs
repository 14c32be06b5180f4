//! Block, word and state representation helpers.

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Number of state columns (`Nb`).
pub const NB: usize = 4;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// Cipher state: four big-endian column words.
///
/// Word `c` holds column `c`; byte `i` of that word (most significant first)
/// is row `i`.
pub type State = [u32; NB];

/// Returns byte `i` of `word`, where byte 0 is the most significant.
#[inline]
pub fn ith_byte(word: u32, i: usize) -> u8 {
    (word >> (8 * (3 - i))) as u8
}

/// Packs four bytes into a word, most significant first.
#[inline]
pub fn word_from_bytes(bytes: [u8; 4]) -> u32 {
    u32::from_be_bytes(bytes)
}

/// Converts a block into a state; column `c` comes from bytes `4c..4c + 4`.
#[inline]
pub fn block_to_state(block: &Block) -> State {
    std::array::from_fn(|c| {
        word_from_bytes([
            block[4 * c],
            block[4 * c + 1],
            block[4 * c + 2],
            block[4 * c + 3],
        ])
    })
}

/// Serializes a state back into a block.
#[inline]
pub fn state_to_block(state: &State) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    for (chunk, word) in block.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    block
}

/// XORs `rhs` into `dst` column by column.
#[inline]
pub fn xor_state(dst: &mut State, rhs: &State) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
