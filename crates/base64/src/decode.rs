//! Unpadded base64 decoding.

use std::convert::Infallible;

use crate::alphabet::{inverse, sextet};
use crate::constants::PAD_BYTE;
use crate::length::{decoded_len, encoded_len, is_valid_encoded_len};
use crate::{rejected, Base64Error, Result};

/// Regroups the sextets of `symbols` into bytes, most-significant bit first.
///
/// Produces `decoded_len(symbols.len())` bytes. Bits past the end of the
/// symbol stream read as zero; fill bits in the last sextet are dropped.
fn repack<E>(
    symbols: &[u8],
    mut lookup: impl FnMut(usize, u8) -> std::result::Result<u8, E>,
) -> std::result::Result<Vec<u8>, E> {
    let mut buf = Vec::with_capacity(decoded_len(symbols.len()));
    let mut quartets = symbols.chunks_exact(4);
    let mut position = 0;

    for quartet in &mut quartets {
        let sextet0 = lookup(position, quartet[0])?;
        let sextet1 = lookup(position + 1, quartet[1])?;
        let sextet2 = lookup(position + 2, quartet[2])?;
        let sextet3 = lookup(position + 3, quartet[3])?;

        buf.push((sextet0 << 2) | (sextet1 >> 4));
        buf.push((sextet1 << 4) | (sextet2 >> 2));
        buf.push((sextet2 << 6) | sextet3);
        position += 4;
    }

    let tail = quartets.remainder();
    let mut sextets = [0u8; 3];
    for (i, &byte) in tail.iter().enumerate() {
        sextets[i] = lookup(position + i, byte)?;
    }
    let [sextet0, sextet1, sextet2] = sextets;

    match tail.len() {
        1 => buf.push(sextet0 << 2),
        2 => buf.push((sextet0 << 2) | (sextet1 >> 4)),
        3 => {
            buf.push((sextet0 << 2) | (sextet1 >> 4));
            buf.push((sextet1 << 4) | (sextet2 >> 2));
        }
        _ => {}
    }

    Ok(buf)
}

/// Checked sextet lookup used wherever input comes from outside the crate.
pub(crate) fn checked_sextet(position: usize, byte: u8) -> Result<u8> {
    sextet(byte).ok_or(if byte == PAD_BYTE {
        Base64Error::InvalidPadding
    } else {
        Base64Error::InvalidCharacter { position, byte }
    })
}

/// Decodes symbols that are known to contain no `=` and to have a reachable
/// length.
pub(crate) fn decode_symbols(symbols: &[u8]) -> Result<Vec<u8>> {
    repack(symbols, checked_sextet)
}

/// Rejects symbol runs whose trailing fill bits are not all zero.
///
/// Such input never comes out of an encoder, but [`decode`] accepts it.
pub(crate) fn check_canonical(symbols: &[u8]) -> Result<()> {
    let fill_mask = match symbols.len() % 4 {
        2 => 0b1111,
        3 => 0b11,
        _ => return Ok(()),
    };
    let position = symbols.len() - 1;
    if inverse(symbols[position]) & fill_mask != 0 {
        return Err(Base64Error::NonCanonical { position });
    }
    Ok(())
}

/// Decodes unpadded base64 symbols into exactly `expected_len` bytes.
///
/// The decoded length cannot be recovered from the symbol count alone in
/// general, so the caller states it. It must satisfy
/// `expected_len == floor((6 * symbols.len() - 5) / 8) + 1`.
///
/// Fill bits in the last symbol are ignored: `"/w"` and `"/x"` both decode to
/// `[0xff]`.
///
/// # Errors
///
/// * [`Base64Error::InvalidLength`] if `symbols.len()` cannot be produced by an
///   encoder, or disagrees with `expected_len`.
/// * [`Base64Error::InvalidCharacter`] for a byte outside the alphabet.
/// * [`Base64Error::InvalidPadding`] for a `=` in the input.
///
/// # Example
///
/// ```
/// use rfc4648_base64::decode;
///
/// assert_eq!(decode(b"Zm8", 2).unwrap(), b"fo");
/// assert!(decode(b"Zm8", 3).is_err());
/// ```
pub fn decode(symbols: &[u8], expected_len: usize) -> Result<Vec<u8>> {
    let length = symbols.len();
    if !is_valid_encoded_len(length) || decoded_len(length) != expected_len {
        return Err(rejected(Base64Error::InvalidLength { length }, length));
    }
    decode_symbols(symbols).map_err(|err| rejected(err, length))
}

/// Decodes base64 symbols without any validation.
///
/// Bytes outside the alphabet, `=` included, read as the value `0`. The output
/// always has `expected_len` bytes: surplus symbols are ignored and a short
/// input is zero-extended.
///
/// # Example
///
/// ```
/// use rfc4648_base64::decode_unchecked;
///
/// assert_eq!(decode_unchecked(b"Zm8", 2), b"fo");
/// assert_eq!(decode_unchecked(b"Zm8", 1), b"f");
/// assert_eq!(decode_unchecked(b"!!", 1), [0]);
/// ```
pub fn decode_unchecked(symbols: &[u8], expected_len: usize) -> Vec<u8> {
    let needed = symbols.len().min(encoded_len(expected_len));
    let lookup = |_: usize, byte: u8| Ok::<u8, Infallible>(inverse(byte));
    let mut buf = match repack(&symbols[..needed], lookup) {
        Ok(buf) => buf,
        Err(never) => match never {},
    };
    buf.resize(expected_len, 0);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode;

    #[test]
    fn test_empty() {
        assert_eq!(decode(b"", 0).unwrap(), b"");
        assert_eq!(decode_unchecked(b"", 0), b"");
    }

    #[test]
    fn test_vectors() {
        assert_eq!(decode(b"Zg", 1).unwrap(), b"f");
        assert_eq!(decode(b"Zm8", 2).unwrap(), b"fo");
        assert_eq!(decode(b"Zm9v", 3).unwrap(), b"foo");
        assert_eq!(decode(b"Zm9vYg", 4).unwrap(), b"foob");
        assert_eq!(decode(b"Zm9vYmE", 5).unwrap(), b"fooba");
        assert_eq!(decode(b"Zm9vYmFy", 6).unwrap(), b"foobar");
    }

    #[test]
    fn test_roundtrip_all_lengths() {
        let data: Vec<u8> = (0..=255).rev().collect();
        for end in 0..data.len() {
            let encoded = encode(&data[..end]);
            assert_eq!(decode(encoded.as_bytes(), end).unwrap(), &data[..end]);
        }
    }

    #[test]
    fn test_wrong_expected_len() {
        assert_eq!(
            decode(b"Zm9v", 2),
            Err(Base64Error::InvalidLength { length: 4 })
        );
        assert_eq!(
            decode(b"Zm9v", 4),
            Err(Base64Error::InvalidLength { length: 4 })
        );
    }

    #[test]
    fn test_unreachable_length() {
        assert_eq!(decode(b"Z", 1), Err(Base64Error::InvalidLength { length: 1 }));
        assert_eq!(
            decode(b"Zm9vY", 4),
            Err(Base64Error::InvalidLength { length: 5 })
        );
    }

    #[test]
    fn test_invalid_character_position() {
        assert_eq!(
            decode(b"Zm9v!mFy", 6),
            Err(Base64Error::InvalidCharacter {
                position: 4,
                byte: b'!'
            })
        );
        assert_eq!(
            decode(b"Zm-", 2),
            Err(Base64Error::InvalidCharacter {
                position: 2,
                byte: b'-'
            })
        );
    }

    #[test]
    fn test_pad_inside_core_input() {
        assert_eq!(decode(b"Zg==", 3), Err(Base64Error::InvalidPadding));
    }

    #[test]
    fn test_fill_bits_ignored() {
        assert_eq!(decode(b"+w", 1).unwrap(), [0xfb]);
        assert_eq!(decode(b"+x", 1).unwrap(), [0xfb]);
        assert_eq!(decode(b"/w", 1).unwrap(), decode(b"//", 1).unwrap());
    }

    #[test]
    fn test_unchecked_sentinel() {
        // '!' and '=' read as 'A'.
        assert_eq!(decode_unchecked(b"!!!!", 3), decode(b"AAAA", 3).unwrap());
        assert_eq!(decode_unchecked(b"Zg==", 1), b"f");
    }

    #[test]
    fn test_unchecked_short_input() {
        assert_eq!(decode_unchecked(b"Zg", 3), [b'f', 0, 0]);
        assert_eq!(decode_unchecked(b"Z", 1), [0x64]);
    }

    #[test]
    fn test_canonical() {
        assert!(check_canonical(b"Zg").is_ok());
        assert_eq!(
            check_canonical(b"Zh"),
            Err(Base64Error::NonCanonical { position: 1 })
        );
        assert!(check_canonical(b"Zm8").is_ok());
        assert_eq!(
            check_canonical(b"Zm9"),
            Err(Base64Error::NonCanonical { position: 2 })
        );
        assert!(check_canonical(b"Zm9v").is_ok());
    }
}
