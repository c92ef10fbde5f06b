//! Length arithmetic relating raw byte count, symbol count and padding count.

/// Number of alphabet symbols produced by encoding `byte_len` bytes without
/// padding, i.e. `ceil(8 * byte_len / 6)`.
pub const fn encoded_len(byte_len: usize) -> usize {
    byte_len / 3 * 4
        + match byte_len % 3 {
            0 => 0,
            1 => 2,
            _ => 3,
        }
}

/// Length of the padded encoding of `byte_len` bytes, i.e. `4 * ceil(byte_len / 3)`.
pub const fn padded_len(byte_len: usize) -> usize {
    byte_len.div_ceil(3) * 4
}

/// Overflow-checked form of [`padded_len`].
pub const fn checked_padded_len(byte_len: usize) -> Option<usize> {
    byte_len.div_ceil(3).checked_mul(4)
}

/// Number of `=` characters appended after `encoded_len(byte_len)` symbols.
pub const fn padding_len(byte_len: usize) -> usize {
    match byte_len % 3 {
        0 => 0,
        1 => 2,
        _ => 1,
    }
}

/// Number of bytes decoded from `symbol_len` unpadded symbols, i.e.
/// `floor((6 * symbol_len - 5) / 8) + 1`, and `0` for no symbols.
pub const fn decoded_len(symbol_len: usize) -> usize {
    symbol_len / 4 * 3
        + match symbol_len % 4 {
            0 => 0,
            1 | 2 => 1,
            _ => 2,
        }
}

/// Returns `true` if some byte count encodes to exactly `symbol_len` symbols.
pub const fn is_valid_encoded_len(symbol_len: usize) -> bool {
    symbol_len % 4 != 1
}
