//! Encode-direction signals and their legacy integer encoding.

/// Raw return code for a code point the encoding cannot represent.
pub const RAW_ILUNI: i32 = -1;

/// Raw return code for an output window too small for the minimum encoding.
pub const RAW_TOOSMALL: i32 = -2;

/// Outcome of one encode attempt into the head of an output window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeSignal {
    /// `len` bytes (at least one) were written to the window head.
    Emitted { len: usize },

    /// The code point has no representation in this encoding. Nothing was
    /// written.
    Unrepresentable,

    /// The window cannot hold even the minimum encoding of the code point.
    /// Nothing was written.
    OutputTooSmall,
}

impl EncodeSignal {
    /// Encodes this signal as a C-style return code.
    #[must_use]
    pub const fn to_raw(self) -> i32 {
        match self {
            Self::Emitted { len } => len as i32,
            Self::Unrepresentable => RAW_ILUNI,
            Self::OutputTooSmall => RAW_TOOSMALL,
        }
    }

    /// Reconstructs a signal from a C-style return code.
    ///
    /// Returns `None` for zero (an encode never emits zero bytes) and for
    /// negative values outside the two sentinels.
    #[must_use]
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            RAW_ILUNI => Some(Self::Unrepresentable),
            RAW_TOOSMALL => Some(Self::OutputTooSmall),
            len if len > 0 => Some(Self::Emitted { len: len as usize }),
            _ => None,
        }
    }
}
