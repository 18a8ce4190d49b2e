//! TraceContext - representasi in-memory dari trace context
//!
//! Value type `Copy` berukuran kecil. Tidak pernah disimpan oleh codec,
//! hanya dibuat dan dibuang per-call.

use std::fmt;

use crate::error::{DecodeError, EncodeError};
use crate::protocol::{self, TOTAL_LEN};

/// Flags trace-wide (8 bit)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TraceOptions(u8);

impl TraceOptions {
    /// Bit 0: trace ini di-sample
    pub const SAMPLED: u8 = 0x01;

    #[inline(always)]
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline(always)]
    pub const fn is_sampled(self) -> bool {
        self.0 & Self::SAMPLED != 0
    }

    /// Set atau clear bit sampled, bit lain tetap
    #[inline(always)]
    pub const fn with_sampled(self, sampled: bool) -> Self {
        if sampled {
            Self(self.0 | Self::SAMPLED)
        } else {
            Self(self.0 & !Self::SAMPLED)
        }
    }
}

impl From<u8> for TraceOptions {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<TraceOptions> for u8 {
    fn from(opts: TraceOptions) -> Self {
        opts.0
    }
}

/// Trace context: trace id 128-bit, span id 64-bit, options 8-bit
///
/// `trace_id[0]` adalah word tinggi (ditampilkan duluan di hex), sesuai
/// konvensi format wire yang menaruhnya di word B.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TraceContext {
    pub trace_id: [u64; 2],
    pub span_id: u64,
    pub options: TraceOptions,
}

impl TraceContext {
    #[inline(always)]
    pub const fn new(trace_id: [u64; 2], span_id: u64, options: TraceOptions) -> Self {
        Self {
            trace_id,
            span_id,
            options,
        }
    }

    /// Encode ke buffer caller (zero allocation)
    #[inline]
    pub fn encode_into(&self, dst: &mut [u8]) -> Result<usize, EncodeError> {
        protocol::encode(dst, self.trace_id, self.span_id, self.options.bits())
    }

    /// Encode ke array di stack
    #[inline]
    pub fn to_bytes(&self) -> [u8; TOTAL_LEN] {
        protocol::encode_to_array(self.trace_id, self.span_id, self.options.bits())
    }

    /// Decode dari buffer minimal 29 byte
    #[inline]
    pub fn decode(src: &[u8]) -> Result<Self, DecodeError> {
        let (trace_id, span_id, options) = protocol::decode(src)?;
        Ok(Self::new(trace_id, span_id, TraceOptions(options)))
    }

    #[inline(always)]
    pub const fn is_sampled(&self) -> bool {
        self.options.is_sampled()
    }

    /// Trace id sebagai 32 karakter hex lowercase
    pub fn trace_id_hex(&self) -> String {
        format!("{:016x}{:016x}", self.trace_id[0], self.trace_id[1])
    }

    /// Span id sebagai 16 karakter hex lowercase
    pub fn span_id_hex(&self) -> String {
        format!("{:016x}", self.span_id)
    }
}

impl TryFrom<&[u8]> for TraceContext {
    type Error = DecodeError;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::decode(src)
    }
}

impl fmt::Display for TraceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:016x}{:016x}-{:016x}-{:02x}",
            self.trace_id[0],
            self.trace_id[1],
            self.span_id,
            self.options.bits()
        )
    }
}
