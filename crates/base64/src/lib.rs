//! Strict base64 encoding and decoding.
//!
//! This crate provides the standard alphabet (`A-Z a-z 0-9 + /`) with `=`
//! padding and nothing else: no line wrapping, no URL-safe alphabet, no
//! tolerance for non-canonical padding.
//!
//! - [`encode`] is total over all byte sequences.
//! - [`decode`] rejects malformed input with a [`DecodeError`].
//! - [`decode_into`] decodes into a caller-provided buffer and reports
//!   whether it finished, hit invalid input, or ran out of room.
//!
//! # Example
//!
//! ```
//! use canon_base64::{decode, encode};
//!
//! let data = b"hello world";
//! let encoded = encode(data);
//! let decoded = decode(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod alphabet;
mod constants;
mod decode;
mod encode;

pub use alphabet::{AlphabetTable, Symbol};
pub use constants::{ALPHABET, ALPHABET_BYTES, LINE_TERMINATOR, PAD, PAD_BYTE};
pub use decode::{
    decode, decode_into, decoded_len_upper_bound, DecodeStatus, Decoded, Group, Groups,
};
pub use encode::{encode, encode_bounded, encode_into, encoded_len};

use thiserror::Error;

/// Malformed base64 input. Every variant carries the offset of the offending
/// character in the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A byte outside the alphabet where a data character was expected.
    #[error("invalid base64 symbol {byte:#04x} at offset {offset}")]
    InvalidSymbol { offset: usize, byte: u8 },
    /// `=` in the third position not followed by a second `=`.
    #[error("malformed padding at offset {offset}")]
    MalformedPadding { offset: usize },
    /// The bits covered by padding are not zero.
    #[error("non-canonical padding at offset {offset}")]
    NonCanonicalPadding { offset: usize },
    /// Content after a padded group.
    #[error("trailing data after padding at offset {offset}")]
    TrailingData { offset: usize },
    /// Input ended partway through the group starting at `offset`.
    #[error("incomplete group at offset {offset}")]
    IncompleteGroup { offset: usize },
}

impl DecodeError {
    /// Offset into the input this error points at.
    pub fn offset(&self) -> usize {
        match *self {
            DecodeError::InvalidSymbol { offset, .. }
            | DecodeError::MalformedPadding { offset }
            | DecodeError::NonCanonicalPadding { offset }
            | DecodeError::TrailingData { offset }
            | DecodeError::IncompleteGroup { offset } => offset,
        }
    }
}
