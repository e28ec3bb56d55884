//! Bidirectional mapping between 6-bit values and alphabet bytes.

use crate::constants::{ALPHABET_BYTES, PAD_BYTE};

/// Result of looking a byte up in the reverse index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// The byte is an alphabet character with this 6-bit value.
    Data(u8),
    /// The byte is not a data character (this includes the pad character).
    Invalid,
}

impl Symbol {
    /// Returns the 6-bit value, if any.
    pub fn value(self) -> Option<u8> {
        match self {
            Symbol::Data(value) => Some(value),
            Symbol::Invalid => None,
        }
    }
}

/// Forward and reverse lookup tables for the standard alphabet.
///
/// The table is built at compile time and never mutated, so a shared
/// reference may be read from any number of threads.
///
/// # Example
///
/// ```
/// use canon_base64::{AlphabetTable, Symbol};
///
/// let table = AlphabetTable::standard();
/// assert_eq!(table.value_of(b'/'), Symbol::Data(63));
/// assert_eq!(table.value_of(b'='), Symbol::Invalid);
/// assert_eq!(table.char_of(26), b'a');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetTable {
    forward: [u8; 64],
    reverse: [Symbol; 256],
}

static STANDARD: AlphabetTable = AlphabetTable::new();

impl AlphabetTable {
    /// Builds the table from the standard alphabet.
    pub const fn new() -> Self {
        let mut reverse = [Symbol::Invalid; 256];
        let mut i = 0;
        while i < 64 {
            reverse[ALPHABET_BYTES[i] as usize] = Symbol::Data(i as u8);
            i += 1;
        }
        Self {
            forward: *ALPHABET_BYTES,
            reverse,
        }
    }

    /// Process-wide instance.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Resolves a byte to its 6-bit value.
    #[inline]
    pub fn value_of(&self, byte: u8) -> Symbol {
        self.reverse[byte as usize]
    }

    /// Returns the alphabet byte for a 6-bit value. Bits above the low six are ignored.
    #[inline]
    pub fn char_of(&self, value: u8) -> u8 {
        self.forward[(value & 0x3f) as usize]
    }

    /// Whether `byte` is the pad character.
    #[inline]
    pub fn is_pad(&self, byte: u8) -> bool {
        byte == PAD_BYTE
    }
}

impl Default for AlphabetTable {
    fn default() -> Self {
        Self::new()
    }
}
