//! Lookup tables between 6-bit values and alphabet characters.
//!
//! [`forward`] and [`inverse`] are the raw table lookups. [`inverse`] is total
//! and lossy: every byte outside the alphabet collapses to `0`, so callers that
//! need to know whether a byte is valid must ask [`is_valid`] or use [`sextet`].

use crate::constants::ALPHABET_BYTES;

const INVALID: u8 = 0xff;

/// Reverse lookup table over all 256 byte values.
static DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Returns the alphabet character for a 6-bit value.
///
/// Only the low six bits of `value` are used.
///
/// # Example
///
/// ```
/// use rfc4648_base64::alphabet::forward;
///
/// assert_eq!(forward(0), b'A');
/// assert_eq!(forward(62), b'+');
/// assert_eq!(forward(63), b'/');
/// ```
#[inline]
pub fn forward(value: u8) -> u8 {
    ALPHABET_BYTES[(value & 0x3f) as usize]
}

/// Returns the 6-bit value of an alphabet character, or `0` for any byte that
/// is not in the alphabet.
///
/// # Example
///
/// ```
/// use rfc4648_base64::alphabet::inverse;
///
/// assert_eq!(inverse(b'Z'), 25);
/// assert_eq!(inverse(b'/'), 63);
/// assert_eq!(inverse(b'!'), 0);
/// ```
#[inline]
pub fn inverse(byte: u8) -> u8 {
    match DECODE_TABLE[byte as usize] {
        INVALID => 0,
        value => value,
    }
}

/// Returns `true` if `byte` is one of the 64 alphabet characters.
///
/// The padding character `=` is not part of the alphabet.
#[inline]
pub fn is_valid(byte: u8) -> bool {
    DECODE_TABLE[byte as usize] != INVALID
}

/// Checked form of [`inverse`].
#[inline]
pub fn sextet(byte: u8) -> Option<u8> {
    match DECODE_TABLE[byte as usize] {
        INVALID => None,
        value => Some(value),
    }
}
