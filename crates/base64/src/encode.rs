//! Standard base64 encoding.

use crate::alphabet::AlphabetTable;
use crate::constants::PAD;

/// Length of the encoded form of `n` input bytes: `4 * ceil(n / 3)`.
///
/// ```
/// use canon_base64::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(1), 4);
/// assert_eq!(encoded_len(3), 4);
/// assert_eq!(encoded_len(4), 8);
/// ```
pub const fn encoded_len(n: usize) -> usize {
    n.div_ceil(3) * 4
}

/// Encodes a byte slice to a standard base64 string with `=` padding.
///
/// Total over all inputs; the empty slice encodes to the empty string.
///
/// # Example
///
/// ```
/// use canon_base64::encode;
///
/// assert_eq!(encode(b"hello world"), "aGVsbG8gd29ybGQ=");
/// assert_eq!(encode(&[0xff, 0xff, 0xff]), "////");
/// ```
pub fn encode(input: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(input.len()));
    encode_into(input, &mut out);
    out
}

/// Encodes at most the first `max_input_len` bytes of `input`.
///
/// ```
/// use canon_base64::encode_bounded;
///
/// assert_eq!(encode_bounded(b"foobar", 4), "Zm9vYg==");
/// assert_eq!(encode_bounded(b"foo", 100), "Zm9v");
/// ```
pub fn encode_bounded(input: &[u8], max_input_len: usize) -> String {
    encode(&input[..input.len().min(max_input_len)])
}

/// Appends the base64 encoding of `input` to `out`.
pub fn encode_into(input: &[u8], out: &mut String) {
    let table = AlphabetTable::standard();
    out.reserve(encoded_len(input.len()));

    let mut groups = input.chunks_exact(3);
    for group in &mut groups {
        let (o1, o2, o3) = (group[0], group[1], group[2]);
        out.push(table.char_of(o1 >> 2) as char);
        out.push(table.char_of((o1 << 4) | (o2 >> 4)) as char);
        out.push(table.char_of((o2 << 2) | (o3 >> 6)) as char);
        out.push(table.char_of(o3) as char);
    }

    match *groups.remainder() {
        [] => {}
        [o1] => {
            out.push(table.char_of(o1 >> 2) as char);
            out.push(table.char_of(o1 << 4) as char);
            out.push(PAD);
            out.push(PAD);
        }
        [o1, o2] => {
            out.push(table.char_of(o1 >> 2) as char);
            out.push(table.char_of((o1 << 4) | (o2 >> 4)) as char);
            out.push(table.char_of(o2 << 2) as char);
            out.push(PAD);
        }
        _ => unreachable!("chunks_exact(3) remainder is shorter than 3"),
    }
}
