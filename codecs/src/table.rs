//! Opaque bidirectional double-byte lookup tables.

use std::sync::OnceLock;

use signal::CodePoint;

/// Bidirectional mapping between two-byte sequences and code points.
///
/// The decode direction is a static slice of `(packed, code_point)` pairs
/// sorted by the packed `lead << 8 | trail` key; the encode direction is
/// derived from the same pairs once, on first use. Codecs only see the two
/// lookup methods — the layout stays private so generated tables can change
/// shape without touching any codec.
pub struct DoubleByteTable {
    pairs: &'static [(u16, u16)],
    by_code_point: OnceLock<Vec<(u16, u16)>>,
}

impl DoubleByteTable {
    /// Wraps a pair slice sorted by packed byte key.
    #[must_use]
    pub const fn new(pairs: &'static [(u16, u16)]) -> Self {
        Self {
            pairs,
            by_code_point: OnceLock::new(),
        }
    }

    /// Looks up the code point for a lead/trail byte pair.
    #[must_use]
    pub fn code_point(&self, lead: u8, trail: u8) -> Option<CodePoint> {
        let key = u16::from_be_bytes([lead, trail]);
        self.pairs
            .binary_search_by_key(&key, |&(packed, _)| packed)
            .ok()
            .map(|index| CodePoint::new(u32::from(self.pairs[index].1)))
    }

    /// Looks up the two-byte sequence encoding a code point.
    #[must_use]
    pub fn bytes(&self, code_point: CodePoint) -> Option<[u8; 2]> {
        let scalar = u16::try_from(code_point.raw()).ok()?;
        let index = self.by_code_point.get_or_init(|| {
            let mut reversed: Vec<(u16, u16)> = self
                .pairs
                .iter()
                .map(|&(packed, scalar)| (scalar, packed))
                .collect();
            reversed.sort_unstable();
            reversed
        });
        index
            .binary_search_by_key(&scalar, |&(scalar, _)| scalar)
            .ok()
            .map(|found| index[found].1.to_be_bytes())
    }

    /// Number of mapped pairs.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the table maps nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl std::fmt::Debug for DoubleByteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DoubleByteTable")
            .field("pairs", &self.pairs.len())
            .finish()
    }
}
