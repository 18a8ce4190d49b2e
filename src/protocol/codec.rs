//! Zero-Allocation Encoder/Decoder
//!
//! Encode langsung ke buffer milik caller dan decode langsung dari slice.
//! Tidak ada alokasi, tidak ada state global, aman dipanggil dari banyak
//! thread sekaligus.

use super::layout::{
    FieldTag, OPTIONS_OFFSET, SPAN_ID_LEN, SPAN_ID_OFFSET, TOTAL_LEN, TRACE_ID_LEN,
    TRACE_ID_OFFSET, VERSION, VERSION_OFFSET,
};
use crate::error::{DecodeError, EncodeError};

/// Offset word A (trace_id[1]) dan word B (trace_id[0])
const TRACE_WORD_A: usize = TRACE_ID_OFFSET;
const TRACE_WORD_B: usize = TRACE_ID_OFFSET + TRACE_ID_LEN / 2;

/// Encode trace context ke `dst`
///
/// Menulis tepat [`TOTAL_LEN`] byte pertama dan mengembalikan jumlah byte
/// yang ditulis. Byte setelah posisi itu tidak disentuh. Kalau `dst` terlalu
/// pendek, tidak ada byte yang ditulis sama sekali.
#[inline]
pub fn encode(
    dst: &mut [u8],
    trace_id: [u64; 2],
    span_id: u64,
    options: u8,
) -> Result<usize, EncodeError> {
    let actual = dst.len();
    let Some(dst) = dst.get_mut(..TOTAL_LEN) else {
        return Err(EncodeError::BufferTooSmall {
            needed: TOTAL_LEN,
            actual,
        });
    };

    dst[VERSION_OFFSET] = VERSION;
    dst[FieldTag::TraceId.offset()] = FieldTag::TraceId.as_u8();
    dst[TRACE_WORD_A..TRACE_WORD_B].copy_from_slice(&trace_id[1].to_le_bytes());
    dst[TRACE_WORD_B..TRACE_ID_OFFSET + TRACE_ID_LEN].copy_from_slice(&trace_id[0].to_le_bytes());
    dst[FieldTag::SpanId.offset()] = FieldTag::SpanId.as_u8();
    dst[SPAN_ID_OFFSET..SPAN_ID_OFFSET + SPAN_ID_LEN].copy_from_slice(&span_id.to_le_bytes());
    dst[FieldTag::TraceOptions.offset()] = FieldTag::TraceOptions.as_u8();
    dst[OPTIONS_OFFSET] = options;

    Ok(TOTAL_LEN)
}

/// Encode ke array di stack
#[inline]
pub fn encode_to_array(trace_id: [u64; 2], span_id: u64, options: u8) -> [u8; TOTAL_LEN] {
    let mut buf = [0u8; TOTAL_LEN];
    // Panjang array selalu TOTAL_LEN, jadi encode tidak mungkin gagal
    let _ = encode(&mut buf, trace_id, span_id, options);
    buf
}

/// Decode trace context dari `src`
///
/// Hanya [`TOTAL_LEN`] byte pertama yang dibaca; sisa buffer diabaikan.
/// Validasi: panjang, lalu versi, lalu setiap field tag sesuai urutan wire.
/// Kalau ada yang gagal, tidak ada hasil parsial yang dikembalikan.
#[inline]
pub fn decode(src: &[u8]) -> Result<([u64; 2], u64, u8), DecodeError> {
    let Some(src) = src.get(..TOTAL_LEN) else {
        return Err(DecodeError::Truncated {
            needed: TOTAL_LEN,
            actual: src.len(),
        });
    };

    if src[VERSION_OFFSET] != VERSION {
        return Err(DecodeError::UnsupportedVersion(src[VERSION_OFFSET]));
    }

    for tag in FieldTag::ALL {
        let found = src[tag.offset()];
        if found != tag.as_u8() {
            return Err(DecodeError::TagMismatch {
                offset: tag.offset(),
                expected: tag.as_u8(),
                found,
            });
        }
    }

    let trace_id = [read_u64_le(src, TRACE_WORD_B), read_u64_le(src, TRACE_WORD_A)];
    let span_id = read_u64_le(src, SPAN_ID_OFFSET);

    Ok((trace_id, span_id, src[OPTIONS_OFFSET]))
}

#[inline(always)]
fn read_u64_le(src: &[u8], offset: usize) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&src[offset..offset + 8]);
    u64::from_le_bytes(word)
}
