//! Unpadded base64 encoding.

use crate::alphabet::forward;
use crate::constants::ALPHABET_BYTES;
use crate::length::encoded_len;

/// Pre-computed two-character lookup table for base64 encoding.
/// Each entry holds the two characters for one 12-bit value.
static TABLE2: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 64 {
            let idx = i * 64 + j;
            table[idx][0] = ALPHABET_BYTES[i];
            table[idx][1] = ALPHABET_BYTES[j];
            j += 1;
        }
        i += 1;
    }
    table
};

/// Feeds the unpadded encoding of `uint8` to `emit`, one character at a time.
///
/// Bytes are read most-significant bit first. Whole 3-byte groups go through
/// [`TABLE2`] as two 12-bit halves; a 1- or 2-byte tail is zero-filled up to
/// the next 6-bit boundary.
pub(crate) fn encode_with(uint8: &[u8], mut emit: impl FnMut(u8)) {
    let mut groups = uint8.chunks_exact(3);

    for group in &mut groups {
        let (o1, o2, o3) = (group[0], group[1], group[2]);
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = (((o2 & 0b1111) as usize) << 8) | (o3 as usize);

        let [c1, c2] = TABLE2[v1];
        let [c3, c4] = TABLE2[v2];
        emit(c1);
        emit(c2);
        emit(c3);
        emit(c4);
    }

    match *groups.remainder() {
        [o1] => {
            let [c1, c2] = TABLE2[(o1 as usize) << 4];
            emit(c1);
            emit(c2);
        }
        [o1, o2] => {
            let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
            let [c1, c2] = TABLE2[v1];
            emit(c1);
            emit(c2);
            emit(forward((o2 & 0b1111) << 2));
        }
        _ => {}
    }
}

/// Encodes a byte slice to base64 symbols without `=` padding.
///
/// The result has exactly `ceil(8 * uint8.len() / 6)` characters.
///
/// # Example
///
/// ```
/// use rfc4648_base64::encode;
///
/// assert_eq!(encode(b"f"), "Zg");
/// assert_eq!(encode(b"foo"), "Zm9v");
/// ```
pub fn encode(uint8: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(uint8.len()));
    encode_with(uint8, |c| out.push(c as char));
    out
}
