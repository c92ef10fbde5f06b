//! Algebraic laws of the codec, checked with proptest.

use proptest::prelude::*;
use rfc4648_base64::alphabet::{forward, inverse, is_valid};
use rfc4648_base64::length::{decoded_len, encoded_len, padded_len, padding_len};
use rfc4648_base64::{b64decode, b64encode, decode, encode, ALPHABET_BYTES, PAD};

fn symbol() -> impl Strategy<Value = u8> {
    prop::sample::select(ALPHABET_BYTES.to_vec())
}

proptest! {
    #[test]
    fn inverse_undoes_forward(value in 0u8..64) {
        prop_assert_eq!(inverse(forward(value)), value);
    }

    #[test]
    fn forward_undoes_inverse_on_alphabet(byte in any::<u8>()) {
        if is_valid(byte) {
            prop_assert_eq!(forward(inverse(byte)), byte);
        } else {
            prop_assert_eq!(inverse(byte), 0);
        }
    }

    #[test]
    fn decode_is_left_inverse_of_encode(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encode(&data);
        prop_assert_eq!(encoded.len(), encoded_len(data.len()));
        prop_assert_eq!(decode(encoded.as_bytes(), data.len()).unwrap(), data);
    }

    #[test]
    fn b64decode_is_left_inverse_of_b64encode(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let encoded = b64encode(&data);
        let pad = encoded.chars().rev().take_while(|&c| c == PAD).count();
        prop_assert_eq!(pad, padding_len(data.len()));
        prop_assert_eq!(encoded.len(), padded_len(data.len()));
        prop_assert_eq!(b64decode(&encoded, Some(pad)).unwrap(), data);
    }

    #[test]
    fn decode_ignores_fill_bits(
        data in prop::collection::vec(any::<u8>(), 1..64),
        fill in 1u8..16,
    ) {
        prop_assume!(data.len() % 3 != 0);
        let mut symbols = encode(&data).into_bytes();
        let last = symbols.len() - 1;
        // One trailing byte leaves 4 fill bits in the last symbol, two leave 2.
        let mask = if data.len() % 3 == 1 { 0b1111 } else { 0b11 };
        let altered = forward(inverse(symbols[last]) | (fill & mask));
        prop_assume!(altered != symbols[last]);
        symbols[last] = altered;

        prop_assert_eq!(decode(&symbols, data.len()).unwrap(), data);
    }

    #[test]
    fn reachable_lengths_decode(symbols in prop::collection::vec(symbol(), 0..256)) {
        prop_assume!(symbols.len() % 4 != 1);
        let decoded = decode(&symbols, decoded_len(symbols.len())).unwrap();
        prop_assert_eq!(encode(&decoded).len(), symbols.len());
    }
}

#[test]
fn decode_is_not_injective() {
    // 62 ('+') and 63 ('/') differ only in the lowest bit, which is fill when
    // the symbol is the second of a one-byte group.
    let a = decode(b"/+", 1).unwrap();
    let b = decode(b"//", 1).unwrap();
    assert_ne!(b"/+", b"//");
    assert_eq!(a, b);
    assert_eq!(a, [0xff]);
}

#[test]
fn encode_is_not_surjective() {
    // Two symbols are a valid length for one byte, but the encoder always
    // zero-fills the low four bits of the second, so "/x" is never produced.
    let symbols = b"/x";
    let decoded = decode(symbols, 1).unwrap();
    assert_ne!(encode(&decoded).as_bytes(), symbols);
    assert!((0..=255u8).all(|b| encode(&[b]).as_bytes() != symbols));
}
