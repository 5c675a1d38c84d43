//! GBK: a lead-byte-routed composite codec.
//!
//! The first input byte picks the sub-codec: bytes below 0x80 belong to
//! code set 0 (ASCII), leads 0x81..=0xFE to code set 1 (the double-byte
//! set), and 0x80/0xFF to neither. Encoding tries the narrowest sub-codec
//! first and falls through to the table.

use signal::{CodePoint, DecodeSignal, EncodeSignal, ShiftState};

use crate::ascii;
use crate::table::DoubleByteTable;
use crate::tables;

static BUILTIN: DoubleByteTable = DoubleByteTable::new(tables::GBK_PAIRS);

/// Returns the bundled (abridged) GBK table.
#[must_use]
pub fn builtin_table() -> &'static DoubleByteTable {
    &BUILTIN
}

/// Decodes one GBK character using the bundled table.
pub fn decode(state: &mut ShiftState, input: &[u8]) -> DecodeSignal {
    decode_with(&BUILTIN, state, input)
}

/// Decodes one GBK character against a caller-supplied table.
pub fn decode_with(
    table: &DoubleByteTable,
    state: &mut ShiftState,
    input: &[u8],
) -> DecodeSignal {
    let Some(&lead) = input.first() else {
        return DecodeSignal::NeedMoreInput;
    };
    // Code set 0 (ASCII)
    if lead < 0x80 {
        return ascii::decode(state, input);
    }
    // Code set 1 (double-byte)
    if (0x81..=0xFE).contains(&lead) {
        if input.len() < 2 {
            return DecodeSignal::NeedMoreInput;
        }
        return decode_double_byte(table, lead, input[1]);
    }
    DecodeSignal::Invalid { shift_len: 0 }
}

fn decode_double_byte(table: &DoubleByteTable, lead: u8, trail: u8) -> DecodeSignal {
    if !(0x40..=0xFE).contains(&trail) || trail == 0x7F {
        return DecodeSignal::Invalid { shift_len: 0 };
    }
    match table.code_point(lead, trail) {
        Some(code_point) => DecodeSignal::Consumed {
            len: 2,
            code_point,
        },
        None => DecodeSignal::Invalid { shift_len: 0 },
    }
}

/// Encodes one code point using the bundled table.
pub fn encode(state: &mut ShiftState, code_point: CodePoint, out: &mut [u8]) -> EncodeSignal {
    encode_with(&BUILTIN, state, code_point, out)
}

/// Encodes one code point against a caller-supplied table.
pub fn encode_with(
    table: &DoubleByteTable,
    state: &mut ShiftState,
    code_point: CodePoint,
    out: &mut [u8],
) -> EncodeSignal {
    // Code set 0 first: the narrowest encoding wins.
    match ascii::encode(state, code_point, out) {
        EncodeSignal::Unrepresentable => {}
        signal => return signal,
    }
    // Code set 1.
    let Some(bytes) = table.bytes(code_point) else {
        return EncodeSignal::Unrepresentable;
    };
    if out.len() < 2 {
        return EncodeSignal::OutputTooSmall;
    }
    out[..2].copy_from_slice(&bytes);
    EncodeSignal::Emitted { len: 2 }
}
