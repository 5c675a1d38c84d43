//! 7-bit ASCII codec.

use signal::{CodePoint, DecodeSignal, EncodeSignal, ShiftState};

/// Decodes one byte below 0x80 as its own code point.
pub fn decode(_state: &mut ShiftState, input: &[u8]) -> DecodeSignal {
    let Some(&byte) = input.first() else {
        return DecodeSignal::NeedMoreInput;
    };
    if byte < 0x80 {
        DecodeSignal::Consumed {
            len: 1,
            code_point: CodePoint::new(byte.into()),
        }
    } else {
        DecodeSignal::Invalid { shift_len: 0 }
    }
}

/// Encodes a code point below 0x80 as a single byte.
pub fn encode(_state: &mut ShiftState, code_point: CodePoint, out: &mut [u8]) -> EncodeSignal {
    if code_point.raw() >= 0x80 {
        return EncodeSignal::Unrepresentable;
    }
    let Some(slot) = out.first_mut() else {
        return EncodeSignal::OutputTooSmall;
    };
    #[allow(clippy::cast_possible_truncation)]
    {
        *slot = code_point.raw() as u8;
    }
    EncodeSignal::Emitted { len: 1 }
}
