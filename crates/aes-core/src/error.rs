//! Error type shared by the key schedule, padding and the block modes.

use thiserror::Error;

/// Failures reported by `aes-core`.
///
/// Every variant is raised before any block is processed, except
/// [`Error::InvalidPadding`], which can only be detected once the final block
/// has been decrypted. In that case the decrypted buffer is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Key length is not 4, 6 or 8 words.
    #[error("invalid key length: {words} words (expected 4, 6 or 8)")]
    InvalidKeyLength {
        /// Key length that was supplied, in 32-bit words.
        words: usize,
    },

    /// Raw key is not 16, 24 or 32 bytes long.
    #[error("invalid key length: {len} bytes (expected 16, 24 or 32)")]
    InvalidKeyBytes {
        /// Key length that was supplied, in bytes.
        len: usize,
    },

    /// Ciphertext length is not a positive multiple of the block size.
    #[error("invalid ciphertext length: {len} bytes is not a positive multiple of 16")]
    InvalidBlockLength {
        /// Length of the rejected input in bytes.
        len: usize,
    },

    /// Computed pad length does not fit in a single byte.
    #[error("padding overflow: pad length {pad} does not fit in one byte")]
    PaddingOverflow {
        /// The offending pad length.
        pad: usize,
    },

    /// Trailing PKCS#7 padding is malformed.
    #[error("invalid PKCS#7 padding")]
    InvalidPadding,
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
