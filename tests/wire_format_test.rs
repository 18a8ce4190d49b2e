//! Wire Format Test - interoperabilitas format 29 byte
//!
//! Vektor konkret harus identik byte-per-byte dengan producer/consumer lain
//! yang memakai format yang sama.
//!
//! Usage:
//!   cargo test --test wire_format_test

use proptest::prelude::*;
use tracectx::{
    decode, encode, encode_to_array, DecodeError, EncodeError, FieldTag, TraceContext,
    TraceOptions, TOTAL_LEN,
};

const VALID_DATA: [u8; TOTAL_LEN] = [
    0, 0, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 79, 1, 97, 98, 99, 100, 101,
    102, 103, 104, 2, 1,
];
const TRACE_ID: [u64; 2] = [0x4F4E4D4C4B4A4948, 0x4746454443424140];
const SPAN_ID: u64 = 0x6867666564636261;

#[test]
fn test_decode_nil_data() {
    assert_eq!(
        decode(&[]),
        Err(DecodeError::Truncated {
            needed: TOTAL_LEN,
            actual: 0
        })
    );
    assert!(TraceContext::decode(&[]).is_err());
}

#[test]
fn test_decode_short_data() {
    let data = [0, 0, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77];
    assert_eq!(
        decode(&data),
        Err(DecodeError::Truncated {
            needed: TOTAL_LEN,
            actual: 16
        })
    );
}

#[test]
fn test_decode_wrong_field_number() {
    // Bentuk prefix mirip valid, tapi tag trace-id salah dan buffer pendek
    let data = [0, 1, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77];
    assert!(decode(&data).is_err());

    // Panjang penuh dengan tag salah di offset 1
    let mut data = VALID_DATA;
    data[1] = 1;
    assert_eq!(
        decode(&data),
        Err(DecodeError::TagMismatch {
            offset: 1,
            expected: 0,
            found: 1
        })
    );
}

#[test]
fn test_decode_wrong_span_and_options_tags() {
    let mut data = VALID_DATA;
    data[FieldTag::SpanId.offset()] = 2;
    assert_eq!(
        decode(&data),
        Err(DecodeError::TagMismatch {
            offset: 18,
            expected: 1,
            found: 2
        })
    );

    let mut data = VALID_DATA;
    data[FieldTag::TraceOptions.offset()] = 0;
    assert_eq!(
        decode(&data),
        Err(DecodeError::TagMismatch {
            offset: 27,
            expected: 2,
            found: 0
        })
    );
}

#[test]
fn test_decode_wrong_version() {
    let mut data = VALID_DATA;
    data[0] = 1;
    assert_eq!(decode(&data), Err(DecodeError::UnsupportedVersion(1)));
}

#[test]
fn test_decode_valid_data() {
    let (trace_id, span_id, opts) = decode(&VALID_DATA).unwrap();
    assert_eq!(trace_id, TRACE_ID);
    assert_eq!(span_id, SPAN_ID);
    assert_eq!(opts, 1);

    let ctx = TraceContext::decode(&VALID_DATA).unwrap();
    assert!(ctx.is_sampled());
}

#[test]
fn test_decode_ignores_trailing_bytes() {
    let mut data = VALID_DATA.to_vec();
    data.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);

    assert_eq!(decode(&data), decode(&VALID_DATA));
}

#[test]
fn test_encode_short_data() {
    let mut dst: [u8; 0] = [];
    assert_eq!(
        encode(&mut dst, [5714589967255750984, 5135868584551137600], SPAN_ID, 1),
        Err(EncodeError::BufferTooSmall {
            needed: TOTAL_LEN,
            actual: 0
        })
    );
}

#[test]
fn test_encode_valid_data() {
    let mut dst = [0u8; TOTAL_LEN];
    let n = encode(&mut dst, [5714589967255750984, 5135868584551137600], SPAN_ID, 1).unwrap();

    assert_eq!(n, TOTAL_LEN);
    assert_eq!(dst, VALID_DATA);
}

#[test]
fn test_encode_leaves_tail_untouched() {
    let mut dst = [0x5Au8; 64];
    assert_eq!(encode(&mut dst, TRACE_ID, SPAN_ID, 1), Ok(TOTAL_LEN));

    assert_eq!(dst[..TOTAL_LEN], VALID_DATA);
    assert!(dst[TOTAL_LEN..].iter().all(|&b| b == 0x5A));
}

#[test]
fn test_encode_overwrites_previous_content() {
    let mut dst = [0xFFu8; TOTAL_LEN];
    encode(&mut dst, [0, 0], 0, 0).unwrap();

    let mut expected = [0u8; TOTAL_LEN];
    expected[18] = 1;
    expected[27] = 2;
    assert_eq!(dst, expected);
}

#[test]
fn test_concurrent_encode_decode() {
    // Tidak ada state bersama: setiap thread punya buffer sendiri
    std::thread::scope(|s| {
        for t in 0..8u64 {
            s.spawn(move || {
                let mut buf = [0u8; TOTAL_LEN];
                for i in 0..10_000u64 {
                    let ctx =
                        TraceContext::new([t, i], t ^ i, TraceOptions::new((i % 256) as u8));
                    ctx.encode_into(&mut buf).unwrap();
                    assert_eq!(TraceContext::decode(&buf), Ok(ctx));
                }
            });
        }
    });
}

proptest! {
    #[test]
    fn prop_roundtrip(hi in any::<u64>(), lo in any::<u64>(), span in any::<u64>(), opts in any::<u8>()) {
        let mut buf = [0u8; TOTAL_LEN];
        prop_assert_eq!(encode(&mut buf, [hi, lo], span, opts), Ok(TOTAL_LEN));
        prop_assert_eq!(decode(&buf), Ok(([hi, lo], span, opts)));
        prop_assert_eq!(encode_to_array([hi, lo], span, opts), buf);
    }

    #[test]
    fn prop_encode_rejects_short_buffer(len in 0usize..TOTAL_LEN, fill in any::<u8>()) {
        let mut buf = vec![fill; len];
        prop_assert!(encode(&mut buf, [1, 2], 3, 4).is_err());
        prop_assert!(buf.iter().all(|&b| b == fill));
    }

    #[test]
    fn prop_decode_rejects_truncated(data in proptest::collection::vec(any::<u8>(), 0..TOTAL_LEN)) {
        prop_assert!(decode(&data).is_err());
    }

    #[test]
    fn prop_corrupted_tag_fails(
        hi in any::<u64>(),
        span in any::<u64>(),
        pos in prop::sample::select(vec![0usize, 1, 18, 27]),
        delta in 1u8..=255,
    ) {
        let mut buf = encode_to_array([hi, !hi], span, 1);
        buf[pos] = buf[pos].wrapping_add(delta);
        prop_assert!(decode(&buf).is_err());
    }
}
