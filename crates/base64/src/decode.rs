//! Strict base64 decoding.
//!
//! Input is consumed in groups of four characters. Decoding ends cleanly at the
//! end of input or at a newline sitting exactly on a group boundary. A padded
//! group must be the last one: only newlines may follow it. The bits it pads
//! away must be zero.

use crate::alphabet::{AlphabetTable, Symbol};
use crate::constants::LINE_TERMINATOR;
use crate::DecodeError;

/// Upper bound on the decoded size of `n` input characters: `3 * ceil(n / 4)`.
pub const fn decoded_len_upper_bound(n: usize) -> usize {
    n.div_ceil(4) * 3
}

/// Bytes decoded from one group of four characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    bytes: [u8; 3],
    len: usize,
}

impl Group {
    /// The 1 to 3 bytes this group decoded to.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Whether this group carried padding, making it the final one.
    pub fn is_padded(&self) -> bool {
        self.len < 3
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Open,
    AfterPadding,
    Done,
}

/// Iterator over the decoded groups of a base64 text.
///
/// Yields at most one error, after which it is exhausted.
///
/// # Example
///
/// ```
/// use canon_base64::Groups;
///
/// let groups: Vec<_> = Groups::new(b"Zm9vYg==")
///     .map(|group| group.unwrap().as_bytes().to_vec())
///     .collect();
/// assert_eq!(groups, vec![b"foo".to_vec(), b"b".to_vec()]);
/// ```
#[derive(Debug, Clone)]
pub struct Groups<'a> {
    text: &'a [u8],
    pos: usize,
    state: State,
    table: &'static AlphabetTable,
}

impl<'a> Groups<'a> {
    /// Starts reading groups at the beginning of `text`.
    pub fn new(text: &'a [u8]) -> Self {
        Self {
            text,
            pos: 0,
            state: State::Open,
            table: AlphabetTable::standard(),
        }
    }

    /// Offset of the next unread character.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn at_terminator(&self) -> bool {
        match self.text.get(self.pos) {
            None => true,
            Some(&byte) => byte == LINE_TERMINATOR,
        }
    }

    fn byte_at(&self, offset: usize) -> Result<u8, DecodeError> {
        self.text
            .get(offset)
            .copied()
            .ok_or(DecodeError::IncompleteGroup { offset: self.pos })
    }

    fn sextet_at(&self, offset: usize) -> Result<u8, DecodeError> {
        let byte = self.byte_at(offset)?;
        match self.table.value_of(byte) {
            Symbol::Data(value) => Ok(value),
            Symbol::Invalid => Err(DecodeError::InvalidSymbol { offset, byte }),
        }
    }

    fn read_group(&mut self) -> Result<Group, DecodeError> {
        let start = self.pos;
        let v0 = self.sextet_at(start)?;
        let v1 = self.sextet_at(start + 1)?;

        let c2 = self.byte_at(start + 2)?;
        if self.table.is_pad(c2) {
            let c3 = self.byte_at(start + 3)?;
            if !self.table.is_pad(c3) {
                return Err(DecodeError::MalformedPadding { offset: start + 3 });
            }
            if v1 & 0x0f != 0 {
                return Err(DecodeError::NonCanonicalPadding { offset: start + 1 });
            }
            self.pos = start + 4;
            self.state = State::AfterPadding;
            return Ok(Group {
                bytes: [(v0 << 2) | (v1 >> 4), 0, 0],
                len: 1,
            });
        }

        let v2 = self.sextet_at(start + 2)?;
        let c3 = self.byte_at(start + 3)?;
        if self.table.is_pad(c3) {
            if v2 & 0x03 != 0 {
                return Err(DecodeError::NonCanonicalPadding { offset: start + 2 });
            }
            self.pos = start + 4;
            self.state = State::AfterPadding;
            return Ok(Group {
                bytes: [(v0 << 2) | (v1 >> 4), (v1 << 4) | (v2 >> 2), 0],
                len: 2,
            });
        }

        let v3 = self.sextet_at(start + 3)?;
        self.pos = start + 4;
        Ok(Group {
            bytes: [(v0 << 2) | (v1 >> 4), (v1 << 4) | (v2 >> 2), (v2 << 6) | v3],
            len: 3,
        })
    }
}

impl Iterator for Groups<'_> {
    type Item = Result<Group, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Done => None,
            State::AfterPadding => {
                self.state = State::Done;
                self.text[self.pos..]
                    .iter()
                    .position(|&byte| byte != LINE_TERMINATOR)
                    .map(|skip| Err(DecodeError::TrailingData { offset: self.pos + skip }))
            }
            _ if self.at_terminator() => {
                self.state = State::Done;
                None
            }
            State::Open => {
                let group = self.read_group();
                if group.is_err() {
                    self.state = State::Done;
                }
                Some(group)
            }
        }
    }
}

impl std::iter::FusedIterator for Groups<'_> {}

/// How a bounded decode ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeStatus {
    /// The whole input was decoded.
    Ok,
    /// Malformed input; `written` covers the groups before the bad one.
    InvalidEncoding(DecodeError),
    /// The destination filled up before the input was exhausted.
    TruncatedByCapacity,
}

/// Outcome of [`decode_into`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Number of bytes written to the destination.
    pub written: usize,
    pub status: DecodeStatus,
}

impl Decoded {
    /// Whether the whole input was decoded.
    pub fn is_ok(&self) -> bool {
        self.status == DecodeStatus::Ok
    }
}

/// Decodes `text` into `dest`, never writing past `dest.len()`.
///
/// Each group is validated before any of its bytes are written. If the
/// destination cannot hold a whole group, the bytes that fit are written and
/// the status is [`DecodeStatus::TruncatedByCapacity`].
///
/// # Example
///
/// ```
/// use canon_base64::{decode_into, DecodeStatus};
///
/// let mut dest = [0u8; 4];
/// let decoded = decode_into(b"Zm9vYmFy", &mut dest);
/// assert_eq!(decoded.written, 4);
/// assert_eq!(decoded.status, DecodeStatus::TruncatedByCapacity);
/// assert_eq!(&dest, b"foob");
/// ```
pub fn decode_into(text: &[u8], dest: &mut [u8]) -> Decoded {
    let capacity = dest.len();
    let mut written = 0;
    let mut groups = Groups::new(text);

    loop {
        if written == capacity && !groups.at_terminator() && groups.state == State::Open {
            tracing::trace!(written, offset = groups.position(), "base64 decode hit capacity");
            return Decoded {
                written,
                status: DecodeStatus::TruncatedByCapacity,
            };
        }

        let group = match groups.next() {
            None => {
                return Decoded {
                    written,
                    status: DecodeStatus::Ok,
                }
            }
            Some(Err(err)) => {
                tracing::trace!(written, %err, "base64 decode rejected input");
                return Decoded {
                    written,
                    status: DecodeStatus::InvalidEncoding(err),
                };
            }
            Some(Ok(group)) => group,
        };

        let bytes = group.as_bytes();
        let n = bytes.len().min(capacity - written);
        dest[written..written + n].copy_from_slice(&bytes[..n]);
        written += n;

        if n < bytes.len() {
            tracing::trace!(written, "base64 decode hit capacity mid-group");
            return Decoded {
                written,
                status: DecodeStatus::TruncatedByCapacity,
            };
        }
    }
}

/// Decodes a complete base64 text.
///
/// # Errors
///
/// Returns a [`DecodeError`] describing the first malformed group.
///
/// # Example
///
/// ```
/// use canon_base64::{decode, DecodeError};
///
/// assert_eq!(decode("aGVsbG8=").unwrap(), b"hello");
/// assert_eq!(decode("AA==\n").unwrap(), [0x00]);
/// assert!(matches!(decode("A!=="), Err(DecodeError::InvalidSymbol { offset: 1, .. })));
/// ```
pub fn decode(text: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    let text = text.as_ref();
    let mut out = Vec::with_capacity(decoded_len_upper_bound(text.len()));
    for group in Groups::new(text) {
        out.extend_from_slice(group?.as_bytes());
    }
    Ok(out)
}
