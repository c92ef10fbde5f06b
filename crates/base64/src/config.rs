//! Factory functions for creating encoders and decoders with non-default
//! padding and strictness options.

use crate::b64::{b64encode, decode_padded};
use crate::encode::encode;
use crate::Result;

/// How a decoder treats trailing `=` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    /// Input must be padded to a multiple of four characters (RFC 4648).
    #[default]
    Required,
    /// Input may be padded or unpadded. Padded input must still be complete.
    Optional,
    /// Input must not contain any `=`.
    Forbidden,
}

/// Options for [`create_b64decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeConfig {
    pub padding: Padding,
    /// Reject input whose last symbol carries non-zero fill bits, so that
    /// every accepted string is the encoding of its output.
    pub canonical: bool,
}

/// Options for [`create_b64encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeConfig {
    /// Append `=` up to a multiple of four characters.
    pub pad: bool,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self { pad: true }
    }
}

/// Creates a base64 encoder function.
///
/// # Example
///
/// ```
/// use rfc4648_base64::{create_b64encode, EncodeConfig};
///
/// let encode = create_b64encode(EncodeConfig { pad: false });
/// assert_eq!(encode(b"hello"), "aGVsbG8");
/// ```
pub fn create_b64encode(config: EncodeConfig) -> impl Fn(&[u8]) -> String {
    move |uint8: &[u8]| -> String {
        if config.pad {
            b64encode(uint8)
        } else {
            encode(uint8)
        }
    }
}

/// Creates a base64 decoder function.
///
/// # Example
///
/// ```
/// use rfc4648_base64::{create_b64decode, DecodeConfig, Padding};
///
/// let decode = create_b64decode(DecodeConfig {
///     padding: Padding::Optional,
///     canonical: false,
/// });
/// assert_eq!(decode("aGVsbG8").unwrap(), b"hello");
/// assert_eq!(decode("aGVsbG8=").unwrap(), b"hello");
/// ```
pub fn create_b64decode(config: DecodeConfig) -> impl Fn(&str) -> Result<Vec<u8>> {
    move |encoded: &str| -> Result<Vec<u8>> { decode_padded(encoded.as_bytes(), None, &config) }
}
