//! Tests for base64 decoding.

use canon_base64::{decode, encode, DecodeError};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = encode(&blob);
        assert_eq!(decode(&encoded).unwrap(), blob);
    }
}

#[test]
fn accepts_trailing_newline() {
    for _ in 0..100 {
        let blob = generate_blob();
        let line = format!("{}\n", encode(&blob));
        assert_eq!(decode(&line).unwrap(), blob);
    }
}

#[test]
fn handles_invalid_values() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = encode(&blob);
        let invalid = format!("{encoded}!!!!");
        let err = decode(&invalid).unwrap_err();
        if encoded.ends_with('=') {
            assert_eq!(err, DecodeError::TrailingData { offset: encoded.len() });
        } else {
            assert_eq!(
                err,
                DecodeError::InvalidSymbol {
                    offset: encoded.len(),
                    byte: b'!'
                }
            );
        }
    }
}

#[test]
fn rejects_tampered_padding_bits() {
    // Under "==" only second characters with zero low four bits are canonical.
    for c in canon_base64::ALPHABET.chars() {
        let text = format!("A{c}==");
        let index = canon_base64::ALPHABET.find(c).unwrap();
        let result = decode(&text);
        if index & 0x0f == 0 {
            assert_eq!(result.unwrap(), [(index >> 4) as u8]);
        } else {
            assert_eq!(result, Err(DecodeError::NonCanonicalPadding { offset: 1 }));
        }
    }
}

#[test]
fn malformed_trailing_char_after_pad() {
    assert!(matches!(
        decode("AA=X"),
        Err(DecodeError::MalformedPadding { .. })
    ));
}

#[test]
fn symbol_not_in_alphabet() {
    assert!(matches!(
        decode("A!=="),
        Err(DecodeError::InvalidSymbol { byte: b'!', .. })
    ));
}

#[test]
fn rejects_url_safe_alphabet() {
    assert!(matches!(
        decode("-_-_"),
        Err(DecodeError::InvalidSymbol { offset: 0, byte: b'-' })
    ));
}

#[test]
fn hello_world() {
    assert_eq!(decode("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
}

#[test]
fn error_messages() {
    assert_eq!(
        DecodeError::InvalidSymbol { offset: 1, byte: b'!' }.to_string(),
        "invalid base64 symbol 0x21 at offset 1"
    );
    assert_eq!(
        DecodeError::NonCanonicalPadding { offset: 2 }.to_string(),
        "non-canonical padding at offset 2"
    );
    assert_eq!(DecodeError::TrailingData { offset: 8 }.offset(), 8);
}
