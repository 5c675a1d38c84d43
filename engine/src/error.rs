//! Error types for the conversion engine.

use std::fmt;

/// Result type for engine operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Why a `convert` call stopped early.
///
/// Every variant carries the byte-exact progress made before the stop, so
/// the caller can advance its own cursors and retry losslessly. The first
/// three are the conventional conversion taxonomy; `CodecFault` is an
/// internal-contract violation and not recoverable by retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// Malformed input, or a character representable neither directly nor
    /// as the replacement character. The caller must intervene (e.g. skip
    /// a byte) before retrying at the reported position.
    IllegalSequence {
        consumed: usize,
        written: usize,
        substitutions: u32,
    },

    /// A valid prefix ended before the character did. Retry from the
    /// reported position once more input is available.
    IncompleteSequence {
        consumed: usize,
        written: usize,
        substitutions: u32,
    },

    /// The output window cannot hold the next character. Flush and retry
    /// from the reported position; the decode state was rolled back so the
    /// retry has no double effect.
    OutputFull {
        consumed: usize,
        written: usize,
        substitutions: u32,
    },

    /// A codec reported a byte count its window cannot hold (or a zero
    /// count where progress is mandatory). Cursors were not advanced.
    CodecFault { reported: usize, available: usize },
}

impl ConvertError {
    /// Returns `true` if retrying with more input or output space can
    /// succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::IncompleteSequence { .. } | Self::OutputFull { .. }
        )
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalSequence { consumed, .. } => {
                write!(f, "illegal byte sequence after {consumed} bytes consumed")
            }
            Self::IncompleteSequence { consumed, .. } => {
                write!(
                    f,
                    "incomplete sequence after {consumed} bytes consumed: need more input"
                )
            }
            Self::OutputFull { written, .. } => {
                write!(f, "output buffer full after {written} bytes written")
            }
            Self::CodecFault {
                reported,
                available,
            } => {
                write!(
                    f,
                    "codec fault: reported {reported} bytes with {available} available"
                )
            }
        }
    }
}

impl std::error::Error for ConvertError {}
