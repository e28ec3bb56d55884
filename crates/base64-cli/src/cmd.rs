use canon_base64::{
    decode_into, decoded_len_upper_bound, encode_bounded, DecodeStatus, LINE_TERMINATOR,
};

/// Output of a `decode` run.
#[derive(Debug, PartialEq, Eq)]
pub struct DecodeOutput {
    pub bytes: Vec<u8>,
    pub truncated: bool,
}

pub fn encode_input(input: &[u8], max_input: Option<usize>) -> String {
    encode_bounded(input, max_input.unwrap_or(input.len()))
}

/// Decodes one line of base64 text. A single trailing `\n` or `\r\n` is allowed;
/// any other newline is rejected so wrapped input is never cut short.
pub fn decode_input(input: &[u8], capacity: Option<usize>) -> eyre::Result<DecodeOutput> {
    let input = strip_line_ending(input);
    if let Some(offset) = input.iter().position(|&byte| byte == LINE_TERMINATOR) {
        eyre::bail!("input spans more than one line (newline at offset {offset})");
    }

    let capacity = capacity.unwrap_or_else(|| decoded_len_upper_bound(input.len()));
    let mut bytes = vec![0u8; capacity];
    let decoded = decode_into(input, &mut bytes);
    bytes.truncate(decoded.written);

    match decoded.status {
        DecodeStatus::Ok => Ok(DecodeOutput { bytes, truncated: false }),
        DecodeStatus::TruncatedByCapacity => Ok(DecodeOutput { bytes, truncated: true }),
        DecodeStatus::InvalidEncoding(err) => Err(err.into()),
    }
}

fn strip_line_ending(input: &[u8]) -> &[u8] {
    input
        .strip_suffix(b"\r\n")
        .or_else(|| input.strip_suffix(b"\n"))
        .unwrap_or(input)
}

/// Encodes the low `width` little-endian bytes of each counter in `0..count`.
pub fn counter_lines(count: u64, width: usize) -> impl Iterator<Item = String> {
    let width = width.clamp(1, 8);
    (0..count).map(move |i| encode_bounded(&i.to_le_bytes(), width))
}
