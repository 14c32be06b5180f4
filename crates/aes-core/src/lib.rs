//! AES (FIPS-197) for 128, 192 and 256-bit keys, with ECB and CBC
//! (NIST SP 800-38A) modes over PKCS#7-padded messages.
//!
//! This crate mirrors the FIPS-197 description closely and provides:
//! - Key schedule for all three key sizes.
//! - Single-block encryption and decryption on a column-word state.
//! - ECB and CBC message encryption with strict PKCS#7 unpadding.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.
//!
//! ```
//! use aes_core::{decrypt_cbc, encrypt_cbc, MasterKey};
//!
//! let key = MasterKey::from([0x2bu8; 16]);
//! let iv = [0u8; 16];
//! let ct = encrypt_cbc(b"hello, world", &key, &iv)?;
//! assert_eq!(ct.len(), 16);
//! assert_eq!(decrypt_cbc(&ct, &key, &iv)?, b"hello, world");
//! # Ok::<(), aes_core::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cbc;
mod cipher;
mod ecb;
mod error;
mod gf;
mod key;
mod padding;
mod round;
mod sbox;

pub use crate::block::{
    block_to_state, ith_byte, state_to_block, word_from_bytes, Block, State, BLOCK_SIZE,
};
pub use crate::cbc::{decrypt_cbc, encrypt_cbc};
pub use crate::cipher::{
    cipher_state, decrypt_block, encrypt_block, expand_key, inv_cipher_state,
};
pub use crate::ecb::{decrypt_ecb, encrypt_ecb};
pub use crate::error::{Error, Result};
pub use crate::gf::xtime;
pub use crate::key::{ExpandedKey, KeySize, MasterKey};
pub use crate::padding::{pad, pad_len, unpad};
pub use crate::sbox::{inv_sbox, sbox};
