//! Fixed Wire Layout (29 bytes)
//!
//! Layout (semua integer multi-byte little-endian):
//! ┌────────┬────────┬──────────────────────────────────────────────┐
//! │ Offset │ Length │ Field                                        │
//! ├────────┼────────┼──────────────────────────────────────────────┤
//! │ 0      │ 1      │ version (0x00)                               │
//! │ 1      │ 1      │ tag trace-id (0x00)                          │
//! │ 2      │ 8      │ trace-id word A  -> trace_id[1]              │
//! │ 10     │ 8      │ trace-id word B  -> trace_id[0]              │
//! │ 18     │ 1      │ tag span-id (0x01)                           │
//! │ 19     │ 8      │ span-id                                      │
//! │ 27     │ 1      │ tag trace-options (0x02)                     │
//! │ 28     │ 1      │ trace-options                                │
//! └────────┴────────┴──────────────────────────────────────────────┘
//!
//! Semua posisi tetap, jadi encode/decode cukup index langsung ke buffer
//! tanpa parsing variabel.

/// Versi format wire
pub const VERSION: u8 = 0;

/// Panjang total satu trace context yang ter-encode
pub const TOTAL_LEN: usize = 29;

pub const VERSION_OFFSET: usize = 0;
pub const TRACE_ID_TAG_OFFSET: usize = 1;
pub const TRACE_ID_OFFSET: usize = 2;
pub const TRACE_ID_LEN: usize = 16;
pub const SPAN_ID_TAG_OFFSET: usize = 18;
pub const SPAN_ID_OFFSET: usize = 19;
pub const SPAN_ID_LEN: usize = 8;
pub const OPTIONS_TAG_OFFSET: usize = 27;
pub const OPTIONS_OFFSET: usize = 28;

/// Field tag yang menandai field berikutnya di posisi tetap
///
/// Hanya dipakai untuk validasi struktur, bukan untuk reordering.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldTag {
    /// 128-bit trace id
    TraceId = 0,
    /// 64-bit span id
    SpanId = 1,
    /// 8-bit trace options
    TraceOptions = 2,
}

impl FieldTag {
    /// Semua tag sesuai urutan kemunculan di wire
    pub const ALL: [FieldTag; 3] = [FieldTag::TraceId, FieldTag::SpanId, FieldTag::TraceOptions];

    #[inline(always)]
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::TraceId),
            1 => Some(Self::SpanId),
            2 => Some(Self::TraceOptions),
            _ => None,
        }
    }

    /// Offset byte tag ini di dalam buffer
    #[inline(always)]
    pub const fn offset(self) -> usize {
        match self {
            Self::TraceId => TRACE_ID_TAG_OFFSET,
            Self::SpanId => SPAN_ID_TAG_OFFSET,
            Self::TraceOptions => OPTIONS_TAG_OFFSET,
        }
    }

    #[inline(always)]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}
