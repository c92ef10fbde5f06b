//! RFC 4648 base64 with `=` padding.

use crate::config::{DecodeConfig, Padding};
use crate::constants::{PAD, PAD_BYTE};
use crate::decode::{check_canonical, decode_symbols};
use crate::encode::encode_with;
use crate::length::{is_valid_encoded_len, padded_len, padding_len};
use crate::{rejected, Base64Error, Result};

/// Encodes a byte slice to a standard base64 string.
///
/// The output is padded with `=` to a multiple of four characters.
///
/// # Example
///
/// ```
/// use rfc4648_base64::b64encode;
///
/// assert_eq!(b64encode(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn b64encode(uint8: &[u8]) -> String {
    let length = uint8.len();
    let mut out = String::with_capacity(padded_len(length));
    encode_with(uint8, |c| out.push(c as char));
    for _ in 0..padding_len(length) {
        out.push(PAD);
    }
    out
}

/// Decodes a padded base64 string.
///
/// `pad` is the number of trailing `=` characters the caller expects. Pass
/// `None` to take it from the input.
///
/// # Errors
///
/// * [`Base64Error::InvalidLength`] if the input length is not a multiple of 4.
/// * [`Base64Error::InvalidPadding`] if there are more than two trailing `=`,
///   a `=` before the end, or `pad` differs from the trailing `=` count.
/// * [`Base64Error::InvalidCharacter`] for any other byte outside the alphabet.
///
/// # Example
///
/// ```
/// use rfc4648_base64::b64decode;
///
/// assert_eq!(b64decode("Zm8=", Some(1)).unwrap(), b"fo");
/// assert_eq!(b64decode("Zm8=", None).unwrap(), b"fo");
/// assert!(b64decode("Zm8=", Some(2)).is_err());
/// ```
pub fn b64decode(encoded: &str, pad: Option<usize>) -> Result<Vec<u8>> {
    decode_padded(encoded.as_bytes(), pad, &DecodeConfig::default())
}

/// Validates and decodes a possibly padded symbol run under `config`.
pub(crate) fn decode_padded(
    encoded: &[u8],
    pad: Option<usize>,
    config: &DecodeConfig,
) -> Result<Vec<u8>> {
    let length = encoded.len();
    validate_and_decode(encoded, pad, config).map_err(|err| rejected(err, length))
}

fn validate_and_decode(
    encoded: &[u8],
    pad: Option<usize>,
    config: &DecodeConfig,
) -> Result<Vec<u8>> {
    let length = encoded.len();
    let trailing = encoded
        .iter()
        .rev()
        .take_while(|&&byte| byte == PAD_BYTE)
        .count();

    if trailing > 2 {
        return Err(Base64Error::InvalidPadding);
    }
    if let Some(pad) = pad {
        if pad != trailing {
            return Err(Base64Error::InvalidPadding);
        }
    }

    match config.padding {
        Padding::Required => {
            if length % 4 != 0 {
                return Err(Base64Error::InvalidLength { length });
            }
        }
        Padding::Optional => {
            if trailing > 0 && length % 4 != 0 {
                return Err(Base64Error::InvalidLength { length });
            }
        }
        Padding::Forbidden => {
            if trailing > 0 {
                return Err(Base64Error::InvalidPadding);
            }
        }
    }

    let symbols = &encoded[..length - trailing];
    if !is_valid_encoded_len(symbols.len()) {
        // Unpadded input such as "AAAAA".
        return Err(Base64Error::InvalidLength { length });
    }

    let buf = decode_symbols(symbols)?;
    if config.canonical {
        check_canonical(symbols)?;
    }
    Ok(buf)
}
