//! Error types untuk codec
//!
//! Kedua error bersifat recoverable: caller yang memutuskan apakah header
//! di-drop atau context dianggap tidak ada. Codec sendiri tidak pernah log.

use thiserror::Error;

/// Gagal encode trace context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Buffer tujuan lebih pendek dari panjang wire. Tidak ada byte yang ditulis.
    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },
}

/// Gagal decode trace context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Buffer sumber kosong atau lebih pendek dari panjang wire
    #[error("truncated trace context: need {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },

    /// Byte versi di offset 0 tidak dikenal
    #[error("unsupported trace context version {0:#04x}")]
    UnsupportedVersion(u8),

    /// Field tag tidak cocok di offset tetap
    #[error("field tag mismatch at offset {offset}: expected {expected:#04x}, found {found:#04x}")]
    TagMismatch { offset: usize, expected: u8, found: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EncodeError::BufferTooSmall {
            needed: 29,
            actual: 0,
        };
        assert_eq!(err.to_string(), "buffer too small: need 29 bytes, got 0");

        let err = DecodeError::TagMismatch {
            offset: 1,
            expected: 0,
            found: 1,
        };
        assert_eq!(
            err.to_string(),
            "field tag mismatch at offset 1: expected 0x00, found 0x01"
        );

        assert_eq!(
            DecodeError::UnsupportedVersion(7).to_string(),
            "unsupported trace context version 0x07"
        );
    }
}
