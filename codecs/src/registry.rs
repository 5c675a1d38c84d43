//! The closed set of supported encodings.

use signal::{CodePoint, DecodeSignal, EncodeSignal, ShiftState};

use crate::table::DoubleByteTable;
use crate::{ascii, gbk, utf16, utf8};

/// A supported encoding, dispatching to its codec pair.
///
/// The set is closed on purpose: codecs are selected by matching on a
/// variant rather than through trait objects, so the conversion loop stays
/// monomorphic and a new encoding is a new variant plus two functions. The
/// one open seam is [`Encoding::DoubleByte`], which routes exactly like GBK
/// but consults a caller-supplied table — new table-driven code sets plug
/// in without touching the engine.
#[derive(Debug, Clone, Copy)]
pub enum Encoding {
    /// 7-bit US-ASCII.
    Ascii,
    /// UTF-8.
    Utf8,
    /// UTF-16 with byte-order detection from an initial BOM.
    Utf16,
    /// UTF-16, big-endian, no BOM handling.
    Utf16Be,
    /// UTF-16, little-endian, no BOM handling.
    Utf16Le,
    /// GBK (code set 0 = ASCII, code set 1 = double-byte).
    Gbk,
    /// A caller-supplied double-byte code set, lead-byte routed like GBK.
    DoubleByte(&'static DoubleByteTable),
}

impl Encoding {
    /// Every named encoding, in label order.
    pub const ALL: [Self; 6] = [
        Self::Ascii,
        Self::Gbk,
        Self::Utf16,
        Self::Utf16Be,
        Self::Utf16Le,
        Self::Utf8,
    ];

    /// The canonical label for this encoding.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Utf8 => "utf-8",
            Self::Utf16 => "utf-16",
            Self::Utf16Be => "utf-16be",
            Self::Utf16Le => "utf-16le",
            Self::Gbk => "gbk",
            Self::DoubleByte(_) => "double-byte",
        }
    }

    /// Resolves a label, case-insensitively, including common aliases.
    ///
    /// Only named encodings resolve; custom tables have no label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "ascii" | "us-ascii" => Some(Self::Ascii),
            "utf-8" | "utf8" => Some(Self::Utf8),
            "utf-16" | "utf16" => Some(Self::Utf16),
            "utf-16be" | "utf16be" => Some(Self::Utf16Be),
            "utf-16le" | "utf16le" => Some(Self::Utf16Le),
            "gbk" | "gb2312" | "cp936" | "windows-936" => Some(Self::Gbk),
            _ => None,
        }
    }

    /// Decodes one character from the window head.
    pub fn decode(self, state: &mut ShiftState, input: &[u8]) -> DecodeSignal {
        match self {
            Self::Ascii => ascii::decode(state, input),
            Self::Utf8 => utf8::decode(state, input),
            Self::Utf16 => utf16::decode_bom(state, input),
            Self::Utf16Be => utf16::decode_be(state, input),
            Self::Utf16Le => utf16::decode_le(state, input),
            Self::Gbk => gbk::decode(state, input),
            Self::DoubleByte(table) => gbk::decode_with(table, state, input),
        }
    }

    /// Encodes one code point to the window head.
    pub fn encode(
        self,
        state: &mut ShiftState,
        code_point: CodePoint,
        out: &mut [u8],
    ) -> EncodeSignal {
        match self {
            Self::Ascii => ascii::encode(state, code_point, out),
            Self::Utf8 => utf8::encode(state, code_point, out),
            Self::Utf16 => utf16::encode_bom(state, code_point, out),
            Self::Utf16Be => utf16::encode_be(state, code_point, out),
            Self::Utf16Le => utf16::encode_le(state, code_point, out),
            Self::Gbk => gbk::encode(state, code_point, out),
            Self::DoubleByte(table) => gbk::encode_with(table, state, code_point, out),
        }
    }
}

impl PartialEq for Encoding {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DoubleByte(a), Self::DoubleByte(b)) => std::ptr::eq(*a, *b),
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl Eq for Encoding {}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_roundtrip() {
        for encoding in Encoding::ALL {
            assert_eq!(Encoding::from_label(encoding.label()), Some(encoding));
        }
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(Encoding::from_label("UTF8"), Some(Encoding::Utf8));
        assert_eq!(Encoding::from_label("cp936"), Some(Encoding::Gbk));
        assert_eq!(Encoding::from_label("GB2312"), Some(Encoding::Gbk));
        assert_eq!(Encoding::from_label("US-ASCII"), Some(Encoding::Ascii));
    }

    #[test]
    fn unknown_label_is_none() {
        assert_eq!(Encoding::from_label("ebcdic"), None);
        assert_eq!(Encoding::from_label(""), None);
    }

    #[test]
    fn dispatch_decode() {
        let mut state = ShiftState::INITIAL;
        assert_eq!(
            Encoding::Gbk.decode(&mut state, &[0xD6, 0xD0]),
            DecodeSignal::Consumed {
                len: 2,
                code_point: CodePoint::new(0x4E2D)
            }
        );
    }

    #[test]
    fn dispatch_encode() {
        let mut state = ShiftState::INITIAL;
        let mut out = [0u8; 4];
        assert_eq!(
            Encoding::Utf8.encode(&mut state, CodePoint::new(0x4E2D), &mut out),
            EncodeSignal::Emitted { len: 3 }
        );
        assert_eq!(&out[..3], "中".as_bytes());
    }

    #[test]
    fn custom_table_dispatch() {
        static TINY: DoubleByteTable = DoubleByteTable::new(&[(0xB0A1, 0x554A)]);
        let custom = Encoding::DoubleByte(&TINY);
        let mut state = ShiftState::INITIAL;
        assert_eq!(
            custom.decode(&mut state, &[0xB0, 0xA1]),
            DecodeSignal::Consumed {
                len: 2,
                code_point: CodePoint::new(0x554A)
            }
        );
    }

    #[test]
    fn custom_table_identity_equality() {
        static A: DoubleByteTable = DoubleByteTable::new(&[]);
        static B: DoubleByteTable = DoubleByteTable::new(&[]);
        assert_eq!(Encoding::DoubleByte(&A), Encoding::DoubleByte(&A));
        assert_ne!(Encoding::DoubleByte(&A), Encoding::DoubleByte(&B));
        assert_ne!(Encoding::DoubleByte(&A), Encoding::Gbk);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Encoding::Utf16Be.to_string(), "utf-16be");
    }
}
