//! Base64 entry points that work on byte buffers.

use crate::b64::decode_padded;
use crate::config::DecodeConfig;
use crate::constants::PAD_BYTE;
use crate::encode::encode_with;
use crate::length::checked_padded_len;
use crate::{rejected, Base64Error, Result};

/// Encodes bytes with padding into `dest`, starting at `offset`.
///
/// Returns the offset just past the last byte written. If the encoding does
/// not fit, nothing is written.
///
/// # Example
///
/// ```
/// use rfc4648_base64::b64encode_into;
///
/// let mut dest = vec![0u8; 100];
/// let end = b64encode_into(b"hello", &mut dest, 10).unwrap();
/// assert_eq!(&dest[10..end], b"aGVsbG8=");
/// ```
pub fn b64encode_into(uint8: &[u8], dest: &mut [u8], offset: usize) -> Result<usize> {
    let length = uint8.len();
    let needed = checked_padded_len(length)
        .ok_or_else(|| rejected(Base64Error::InvalidLength { length }, length))?;
    let available = dest.len().saturating_sub(offset);
    if needed > available {
        return Err(rejected(
            Base64Error::BufferTooSmall { needed, available },
            length,
        ));
    }

    if needed == 0 {
        return Ok(offset);
    }

    let out = &mut dest[offset..offset + needed];
    let mut written = 0;
    encode_with(uint8, |c| {
        out[written] = c;
        written += 1;
    });
    out[written..].fill(PAD_BYTE);

    Ok(offset + needed)
}

/// Decodes padded base64 from `view[offset..offset + length]`.
///
/// Error positions are relative to `offset`.
///
/// # Example
///
/// ```
/// use rfc4648_base64::b64decode_bin;
///
/// let encoded = b"xxxxaGVsbG8=";
/// assert_eq!(b64decode_bin(encoded, 4, 8).unwrap(), b"hello");
/// ```
pub fn b64decode_bin(view: &[u8], offset: usize, length: usize) -> Result<Vec<u8>> {
    let end = offset
        .checked_add(length)
        .filter(|&end| end <= view.len())
        .ok_or_else(|| rejected(Base64Error::InvalidLength { length }, view.len()))?;
    decode_padded(&view[offset..end], None, &DecodeConfig::default())
}
