//! Protocol Layer: Fixed-Layout Binary Trace Context
//!
//! Prinsip desain:
//! - Fixed-size: 29 byte, semua offset konstan
//! - No allocation: encode ke buffer caller, decode langsung dari slice
//! - Stateless: tidak ada state global, reentrant

mod codec;
mod layout;

pub use codec::{decode, encode, encode_to_array};
pub use layout::{FieldTag, TOTAL_LEN, VERSION};
