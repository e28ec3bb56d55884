/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array, indexed by 6-bit value.
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: char = '=';

/// Padding character as a byte.
pub const PAD_BYTE: u8 = b'=';

/// Byte that ends decoding when it appears at a group boundary.
pub const LINE_TERMINATOR: u8 = b'\n';
