//! Opaque per-direction conversion state.

/// Codec-private state carried across calls within one conversion direction.
///
/// The value zero is always the valid initial state. Any other value has a
/// meaning known only to the codec that set it (a pending byte-order choice,
/// a shifted mode, ...). The engine never interprets the value; it only
/// snapshots it before a decode and restores it when a failure means the
/// decode must be replayed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ShiftState(u32);

impl ShiftState {
    /// The initial (and reset) state for every codec.
    pub const INITIAL: Self = Self(0);

    /// Creates a state from a raw codec-specific value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw codec-specific value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns `true` if this is the initial state.
    #[must_use]
    pub const fn is_initial(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for ShiftState {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<ShiftState> for u32 {
    fn from(state: ShiftState) -> Self {
        state.0
    }
}
