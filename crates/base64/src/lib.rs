//! RFC 4648 base64 encoding and decoding.
//!
//! This crate provides:
//! - Unpadded core transforms ([`encode`], [`decode`], [`decode_unchecked`])
//! - Standard padded base64 ([`b64encode`], [`b64decode`])
//! - Buffer-oriented variants ([`b64encode_into`], [`b64decode_bin`])
//! - Configurable encoder/decoder factories ([`create_b64encode`], [`create_b64decode`])
//!
//! Every decoder except [`decode_unchecked`] validates its input and reports
//! problems as a [`Base64Error`]. Rejections are also emitted as `tracing`
//! debug events.
//!
//! # Example
//!
//! ```
//! use rfc4648_base64::{b64decode, b64encode};
//!
//! let data = b"hello world";
//! let encoded = b64encode(data);
//! let decoded = b64decode(&encoded, None).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

pub mod alphabet;
mod b64;
mod bin;
mod config;
mod constants;
mod decode;
mod encode;
pub mod length;

pub use b64::{b64decode, b64encode};
pub use bin::{b64decode_bin, b64encode_into};
pub use config::{create_b64decode, create_b64encode, DecodeConfig, EncodeConfig, Padding};
pub use constants::{ALPHABET, ALPHABET_BYTES, PAD, PAD_BYTE};
pub use decode::{decode, decode_unchecked};
pub use encode::encode;

use thiserror::Error;

/// Error type for base64 operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// A byte that is neither an alphabet character nor `=`.
    #[error("invalid base64 character {byte:#04x} at position {position}")]
    InvalidCharacter { position: usize, byte: u8 },
    /// The input length cannot be produced by an encoder, or disagrees with
    /// the requested output length.
    #[error("invalid base64 length {length}")]
    InvalidLength { length: usize },
    /// `=` outside the final two positions, more than two of them, or a
    /// count that differs from what the caller stated.
    #[error("invalid base64 padding")]
    InvalidPadding,
    /// The last symbol has non-zero fill bits.
    #[error("non-canonical base64 symbol at position {position}")]
    NonCanonical { position: usize },
    #[error("base64 output needs {needed} bytes, {available} available")]
    BufferTooSmall { needed: usize, available: usize },
}

pub type Result<T, E = Base64Error> = std::result::Result<T, E>;

/// Records a rejected input and hands the error back.
pub(crate) fn rejected(err: Base64Error, input_len: usize) -> Base64Error {
    tracing::debug!(error = %err, input_len, "base64 input rejected");
    err
}
