//! Integration tests: encode/decode through the public API, checked against
//! the RFC 7541 Appendix C worked examples.

use std::sync::Arc;
use std::thread;

use bytes::BytesMut;
use hpack_huffman::{
    HuffmanError, decode, decode_at, decode_to_vec, encode, encode_to_vec, encoded_len,
};

// -- Helpers --

fn hex(s: &str) -> Vec<u8> {
    let s: String = s.split_whitespace().collect();
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

fn round_trip(input: &[u8]) {
    let mut encoded = BytesMut::new();
    let n = encode(input, &mut encoded);
    assert_eq!(n, encoded_len(input));
    assert_eq!(encoded.len(), n);

    let mut decoded = BytesMut::new();
    let m = decode(&encoded, &mut decoded).unwrap();
    assert_eq!(m, input.len());
    assert_eq!(
        &decoded[..],
        input,
        "roundtrip failed for {:?}",
        String::from_utf8_lossy(input)
    );
}

/// Number of padding bits in the last byte of an encoding of `input`.
fn padding_bits(input: &[u8]) -> usize {
    let bits: usize = input
        .iter()
        .map(|&b| hpack_huffman::code_len(b) as usize)
        .sum();
    (8 - bits % 8) % 8
}

// -- RFC 7541 Appendix C vectors --

const VECTORS: &[(&[u8], &str)] = &[
    // C.4.1
    (b"www.example.com", "f1e3 c2e5 f23a 6ba0 ab90 f4ff"),
    // C.4.2
    (b"no-cache", "a8eb 1064 9cbf"),
    // C.4.3
    (b"custom-key", "25a8 49e9 5ba9 7d7f"),
    (b"custom-value", "25a8 49e9 5bb8 e8b4 bf"),
    // C.6.1
    (b"302", "6402"),
    (b"private", "aec3 771a 4b"),
    (
        b"Mon, 21 Oct 2013 20:13:21 GMT",
        "d07a be94 1054 d444 a820 0595 040b 8166 e082 a62d 1bff",
    ),
    (b"https://www.example.com", "9d29 ad17 1863 c78f 0b97 c8e9 ae82 ae43 d3"),
    // C.6.2
    (b"307", "640e ff"),
    // C.6.3
    (b"gzip", "9bd9 ab"),
    (
        b"foo=ASDJKHQKBZXOQWEOPIUAXQWEOIU; max-age=3600; version=1",
        "94e7 821d d7f2 e6c7 b335 dfdf cd5b 3960 d5af 2708 7f36 72c1 ab27 0fb5 291f 9587 3160 65c0 03ed 4ee5 b106 3d50 07",
    ),
];

#[test]
fn encode_matches_rfc_vectors() {
    for &(plain, encoded) in VECTORS {
        let mut dst = BytesMut::new();
        encode(plain, &mut dst);
        assert_eq!(
            &dst[..],
            hex(encoded).as_slice(),
            "encoding of {:?}",
            String::from_utf8_lossy(plain)
        );
    }
}

#[test]
fn decode_matches_rfc_vectors() {
    for &(plain, encoded) in VECTORS {
        let decoded = decode_to_vec(&hex(encoded)).unwrap();
        assert_eq!(decoded, plain);
    }
}

// -- Round trips --

#[test]
fn roundtrip_simple_strings() {
    let cases: &[&[u8]] = &[
        b"",
        b"a",
        b"hello",
        b"www.example.com",
        b"text/html; charset=utf-8",
        b"application/json",
        b"/index.html",
        b"Mozilla/5.0 (X11; Linux x86_64; rv:120.0) Gecko/20100101 Firefox/120.0",
    ];
    for &input in cases {
        round_trip(input);
    }
}

#[test]
fn roundtrip_every_single_byte() {
    for byte in 0..=255u8 {
        round_trip(&[byte]);
    }
}

#[test]
fn roundtrip_all_bytes() {
    let input: Vec<u8> = (0..=255).collect();
    round_trip(&input);

    let reversed: Vec<u8> = (0..=255).rev().collect();
    round_trip(&reversed);
}

#[test]
fn roundtrip_long_string() {
    let input: Vec<u8> = b"abcdefghijklmnopqrstuvwxyz0123456789-_."
        .iter()
        .cycle()
        .take(16 * 1024)
        .copied()
        .collect();
    round_trip(&input);
}

// -- Buffer management --

#[test]
fn repeated_encodes_share_one_buffer() {
    let strings: &[&[u8]] = &[b":authority", b"www.example.com", b"no-cache", b"custom-key"];

    let mut buf = BytesMut::new();
    let mut spans = Vec::new();
    for &s in strings {
        let start = buf.len();
        let n = encode(s, &mut buf);
        spans.push((start, n));
    }

    let total: usize = strings.iter().map(|s| encoded_len(s)).sum();
    assert_eq!(buf.len(), total);

    for (&s, &(start, n)) in strings.iter().zip(&spans) {
        let mut out = BytesMut::new();
        decode_at(&buf, start, n, &mut out).unwrap();
        assert_eq!(&out[..], s);
    }
}

#[test]
fn encode_into_buffer_with_dirty_spare_capacity() {
    let mut buf = BytesMut::with_capacity(256);
    buf.resize(256, 0x55);
    buf.truncate(3);

    encode(b"www.example.com", &mut buf);
    assert_eq!(&buf[..3], [0x55u8; 3]);
    assert_eq!(&buf[3..], hex("f1e3 c2e5 f23a 6ba0 ab90 f4ff").as_slice());
}

#[test]
fn encoded_len_is_stable_across_encode() {
    let input = b"Mon, 21 Oct 2013 20:13:21 GMT";
    let before = encoded_len(input);
    let mut buf = BytesMut::new();
    let n = encode(input, &mut buf);
    assert_eq!(before, n);
    assert_eq!(encoded_len(input), before);
}

// -- Padding and corruption --

#[test]
fn valid_encodings_end_accepting() {
    for byte in 0..=255u8 {
        let encoded = encode_to_vec(&[byte, b'x', byte]);
        assert!(decode_to_vec(&encoded).is_ok());
    }
}

#[test]
fn cleared_padding_bit_never_decodes_to_original() {
    for byte in 0..=255u8 {
        let input = [byte];
        let encoded = encode_to_vec(&input);
        let pad = padding_bits(&input);
        let last = encoded.len() - 1;

        for bit in 0..pad {
            let mut corrupted = encoded.clone();
            corrupted[last] &= !(1 << bit);

            let result = decode_to_vec(&corrupted);
            assert_ne!(result.as_deref(), Ok(&input[..]), "byte {byte} bit {bit}");
            // Short padding cannot complete a code (shortest is 5 bits).
            if pad <= 4 {
                assert_eq!(result, Err(HuffmanError::InvalidState), "byte {byte} bit {bit}");
            }
        }
    }
}

#[test]
fn eos_run_is_rejected() {
    let mut input = encode_to_vec(b"custom-value");
    input.extend_from_slice(&[0xff; 4]);
    assert_eq!(decode_to_vec(&input), Err(HuffmanError::InvalidState));
}

#[test]
fn decode_at_rejects_bad_range() {
    let region = hex("f1e3 c2e5 f23a 6ba0 ab90 f4ff");
    let mut out = BytesMut::new();
    let err = decode_at(&region, 8, 8, &mut out).unwrap_err();
    assert!(matches!(err, HuffmanError::OutOfBounds { available: 12, .. }));
    assert!(out.is_empty());
}

// -- Concurrency --

#[test]
fn concurrent_encode_decode() {
    let inputs: Arc<Vec<Vec<u8>>> = Arc::new(
        (0..64u32)
            .map(|i| format!("x-request-id-{i}-{}", i * 7919).into_bytes())
            .collect(),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let inputs = Arc::clone(&inputs);
            thread::spawn(move || {
                let mut enc = BytesMut::new();
                let mut dec = BytesMut::new();
                for input in inputs.iter() {
                    enc.clear();
                    dec.clear();
                    encode(input, &mut enc);
                    decode(&enc, &mut dec).unwrap();
                    assert_eq!(&dec[..], input.as_slice());
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
