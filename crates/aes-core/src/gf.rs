//! Arithmetic in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.
//!
//! Every constant multiplier used by the cipher is a chain of [`xtime`] calls
//! combined with XOR.

/// Multiplies `byte` by {02}.
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

/// Multiplies by {09} = {08} + {01}.
#[inline]
pub(crate) fn mul9(b: u8) -> u8 {
    b ^ xtime(xtime(xtime(b)))
}

/// Multiplies by {0b} = {08} + {02} + {01}.
#[inline]
pub(crate) fn mul11(b: u8) -> u8 {
    b ^ xtime(b) ^ xtime(xtime(xtime(b)))
}

/// Multiplies by {0d} = {08} + {04} + {01}.
#[inline]
pub(crate) fn mul13(b: u8) -> u8 {
    b ^ xtime(xtime(b)) ^ xtime(xtime(xtime(b)))
}

/// Multiplies by {0e} = {08} + {04} + {02}.
#[inline]
pub(crate) fn mul14(b: u8) -> u8 {
    let x1 = xtime(b);
    let x2 = xtime(x1);
    x1 ^ x2 ^ xtime(x2)
}
