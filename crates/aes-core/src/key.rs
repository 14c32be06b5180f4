//! Key types for AES-128, AES-192 and AES-256.

use crate::block::{State, NB};
use crate::error::{Error, Result};

/// Largest key length in words (AES-256).
pub(crate) const MAX_NK: usize = 8;

/// Largest expanded key in words: `Nb * (14 + 1)`.
pub(crate) const MAX_EXPANDED_WORDS: usize = NB * (14 + 1);

/// Supported AES key sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Maps a key length in words (`Nk`) to a key size.
    pub fn from_words(nk: usize) -> Result<Self> {
        match nk {
            4 => Ok(Self::Aes128),
            6 => Ok(Self::Aes192),
            8 => Ok(Self::Aes256),
            _ => Err(Error::InvalidKeyLength { words: nk }),
        }
    }

    /// Key length in 32-bit words (`Nk`).
    pub const fn words(self) -> usize {
        match self {
            Self::Aes128 => 4,
            Self::Aes192 => 6,
            Self::Aes256 => 8,
        }
    }

    /// Key length in bytes.
    pub const fn bytes(self) -> usize {
        self.words() * 4
    }

    /// Number of cipher rounds (`Nr`).
    pub const fn rounds(self) -> usize {
        match self {
            Self::Aes128 => 10,
            Self::Aes192 => 12,
            Self::Aes256 => 14,
        }
    }

    /// Length of the expanded key in words, `Nb * (Nr + 1)`.
    pub const fn expanded_words(self) -> usize {
        NB * (self.rounds() + 1)
    }
}

/// Master key of `Nk` words.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MasterKey {
    size: KeySize,
    words: [u32; MAX_NK],
}

impl MasterKey {
    /// Builds a key from `Nk` big-endian words.
    pub fn from_words(words: &[u32]) -> Result<Self> {
        let size = KeySize::from_words(words.len())?;
        let mut buf = [0u32; MAX_NK];
        buf[..words.len()].copy_from_slice(words);
        Ok(Self { size, words: buf })
    }

    /// Builds a key from 16, 24 or 32 raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let size = match bytes.len() {
            16 => KeySize::Aes128,
            24 => KeySize::Aes192,
            32 => KeySize::Aes256,
            len => return Err(Error::InvalidKeyBytes { len }),
        };
        Ok(Self::pack(size, bytes))
    }

    // Callers guarantee `bytes.len() == size.bytes()`.
    fn pack(size: KeySize, bytes: &[u8]) -> Self {
        let mut words = [0u32; MAX_NK];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self { size, words }
    }

    /// Key size of this key.
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// The `Nk` key words.
    pub fn words(&self) -> &[u32] {
        &self.words[..self.size.words()]
    }
}

// Key words stay out of debug output.
impl core::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MasterKey")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

macro_rules! impl_from_array {
    ($($len:literal => $size:ident),+) => {
        $(
            impl From<[u8; $len]> for MasterKey {
                fn from(value: [u8; $len]) -> Self {
                    Self::pack(KeySize::$size, &value)
                }
            }
        )+
    };
}

impl_from_array!(16 => Aes128, 24 => Aes192, 32 => Aes256);

/// Expanded key schedule: `Nb * (Nr + 1)` words.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ExpandedKey {
    size: KeySize,
    words: [u32; MAX_EXPANDED_WORDS],
}

impl ExpandedKey {
    pub(crate) fn new(size: KeySize, words: [u32; MAX_EXPANDED_WORDS]) -> Self {
        Self { size, words }
    }

    /// Key size the schedule was derived from.
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Number of rounds (`Nr`).
    pub fn rounds(&self) -> usize {
        self.size.rounds()
    }

    /// All schedule words; the length is always `4 * (Nr + 1)`.
    pub fn words(&self) -> &[u32] {
        &self.words[..self.size.expanded_words()]
    }

    /// Returns the round key at the requested index (`0..=Nr`).
    ///
    /// Panics if `round > Nr`.
    #[inline]
    pub fn round_key(&self, round: usize) -> State {
        let start = round * NB;
        let w = &self.words()[start..start + NB];
        [w[0], w[1], w[2], w[3]]
    }
}

impl core::fmt::Debug for ExpandedKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ExpandedKey")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_sizes_map_to_round_counts() {
        for (nk, nr) in [(4, 10), (6, 12), (8, 14)] {
            let size = KeySize::from_words(nk).unwrap();
            assert_eq!(size.words(), nk);
            assert_eq!(size.rounds(), nr);
            assert_eq!(size.expanded_words(), 4 * (nr + 1));
        }
    }

    #[test]
    fn rejects_unsupported_lengths() {
        for nk in [0, 1, 3, 5, 7, 9, 16] {
            assert_eq!(
                KeySize::from_words(nk),
                Err(Error::InvalidKeyLength { words: nk })
            );
        }
        assert_eq!(
            MasterKey::from_words(&[0u32; 5]),
            Err(Error::InvalidKeyLength { words: 5 })
        );
    }

    #[test]
    fn byte_key_errors_report_bytes() {
        for len in [0usize, 15, 17, 18, 20, 33] {
            let err = MasterKey::from_bytes(&vec![0u8; len]).unwrap_err();
            assert_eq!(err, Error::InvalidKeyBytes { len });
            assert_eq!(
                err.to_string(),
                format!("invalid key length: {len} bytes (expected 16, 24 or 32)")
            );
        }
    }

    #[test]
    fn array_keys_map_to_sizes() {
        assert_eq!(MasterKey::from([0u8; 16]).size(), KeySize::Aes128);
        assert_eq!(MasterKey::from([0u8; 24]).size(), KeySize::Aes192);
        assert_eq!(MasterKey::from([0u8; 32]).size(), KeySize::Aes256);
        let bytes: [u8; 32] = std::array::from_fn(|i| i as u8);
        assert_eq!(MasterKey::from(bytes), MasterKey::from_bytes(&bytes).unwrap());
    }

    #[test]
    fn round_keys_cover_every_round() {
        for size in [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256] {
            let key = MasterKey::pack(size, &vec![0x5au8; size.bytes()]).expand();
            let last = key.round_key(size.rounds());
            assert_eq!(&last[..], &key.words()[size.expanded_words() - 4..]);
        }
    }

    #[test]
    #[should_panic]
    fn round_key_past_last_round_panics() {
        let key = MasterKey::from([0u8; 16]).expand();
        key.round_key(12);
    }

    #[test]
    fn byte_and_word_constructors_agree() {
        let bytes: [u8; 24] = std::array::from_fn(|i| i as u8);
        let from_array = MasterKey::from(bytes);
        let from_slice = MasterKey::from_bytes(&bytes).unwrap();
        let from_words = MasterKey::from_words(&[
            0x00010203, 0x04050607, 0x08090a0b, 0x0c0d0e0f, 0x10111213, 0x14151617,
        ])
        .unwrap();
        assert_eq!(from_array, from_slice);
        assert_eq!(from_array, from_words);
        assert_eq!(from_array.size(), KeySize::Aes192);
        assert_eq!(from_array.words().len(), 6);
    }

    #[test]
    fn debug_hides_key_material() {
        let key = MasterKey::from([0xabu8; 16]);
        let rendered = format!("{key:?}");
        assert!(rendered.contains("Aes128"));
        assert!(!rendered.contains("abab"));
        assert!(!rendered.contains("2880154539"));
    }
}
