//! Per-stream conversion context.

use codecs::Encoding;
use signal::ShiftState;

/// State for one logical conversion stream.
///
/// A context pairs a source and target encoding with their per-direction
/// shift states. Create one per stream (typically per file), feed it every
/// chunk in order, and drop it when the stream ends. It is a single-writer
/// resource: the engine borrows it for the duration of one call and there
/// is no internal locking.
#[derive(Debug, Clone)]
pub struct ConversionContext {
    pub(crate) source: Encoding,
    pub(crate) target: Encoding,
    pub(crate) decode_state: ShiftState,
    pub(crate) encode_state: ShiftState,
}

impl ConversionContext {
    /// Creates a context converting from `source` to `target`.
    #[must_use]
    pub const fn new(source: Encoding, target: Encoding) -> Self {
        Self {
            source,
            target,
            decode_state: ShiftState::INITIAL,
            encode_state: ShiftState::INITIAL,
        }
    }

    /// The encoding being decoded from.
    #[must_use]
    pub const fn source(&self) -> Encoding {
        self.source
    }

    /// The encoding being encoded to.
    #[must_use]
    pub const fn target(&self) -> Encoding {
        self.target
    }

    /// The current decode-direction shift state.
    #[must_use]
    pub const fn decode_state(&self) -> ShiftState {
        self.decode_state
    }

    /// The current encode-direction shift state.
    #[must_use]
    pub const fn encode_state(&self) -> ShiftState {
        self.encode_state
    }

    /// Resets both shift states for a new stream.
    pub fn reset(&mut self) {
        self.decode_state = ShiftState::INITIAL;
        self.encode_state = ShiftState::INITIAL;
    }
}
