//! tracectx - Zero-Allocation Trace Context Codec
//!
//! Konversi trace context (trace id 128-bit, span id 64-bit, options 8-bit)
//! ke/dari representasi wire 29 byte dengan layout tetap.
//!
//! Arsitektur:
//! - Fixed Layout: semua field di offset konstan, divalidasi lewat field tag
//! - No-Allocation: encode ke buffer milik caller
//! - Stateless: aman dipanggil konkuren tanpa lock
//!
//! ```
//! use tracectx::{TraceContext, TraceOptions};
//!
//! let ctx = TraceContext::new([1, 2], 3, TraceOptions::new(TraceOptions::SAMPLED));
//! let mut buf = [0u8; tracectx::TOTAL_LEN];
//! ctx.encode_into(&mut buf).unwrap();
//! assert_eq!(TraceContext::decode(&buf).unwrap(), ctx);
//! ```

pub mod context;
pub mod error;
pub mod protocol;

pub use context::{TraceContext, TraceOptions};
pub use error::{DecodeError, EncodeError};
pub use protocol::{decode, encode, encode_to_array, FieldTag, TOTAL_LEN};
