//! Property tests for the codec laws.

use canon_base64::{decode, decode_into, encode, encoded_len, DecodeStatus};
use proptest::prelude::*;

proptest! {
    #[test]
    fn round_trip(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(decode(encode(&data)).unwrap(), data);
    }

    #[test]
    fn length_law(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(encode(&data).len(), encoded_len(data.len()));
    }

    #[test]
    fn bounded_decode_is_prefix(
        data in proptest::collection::vec(any::<u8>(), 0..256),
        capacity in 0usize..300,
    ) {
        let encoded = encode(&data);
        let mut dest = vec![0u8; capacity];
        let decoded = decode_into(encoded.as_bytes(), &mut dest);
        let expected = data.len().min(capacity);
        prop_assert_eq!(decoded.written, expected);
        prop_assert_eq!(&dest[..expected], &data[..expected]);
        if capacity >= data.len() {
            prop_assert_eq!(decoded.status, DecodeStatus::Ok);
        } else {
            prop_assert_eq!(decoded.status, DecodeStatus::TruncatedByCapacity);
        }
    }

    #[test]
    fn arbitrary_text_never_panics(text in proptest::collection::vec(any::<u8>(), 0..64)) {
        let _ = decode(&text);
    }
}
