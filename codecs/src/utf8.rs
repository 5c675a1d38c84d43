//! UTF-8 codec.
//!
//! Decoding accepts exactly the well-formed sequences of RFC 3629: one to
//! four bytes, no overlong forms, no surrogates, nothing above U+10FFFF.
//! A truncated sequence whose present bytes are still plausible reports
//! `NeedMoreInput`; a byte that can no longer begin or continue a valid
//! sequence reports `Invalid` immediately.

use signal::{CodePoint, DecodeSignal, EncodeSignal, ShiftState};

/// Decodes one UTF-8 sequence from the window head.
pub fn decode(_state: &mut ShiftState, input: &[u8]) -> DecodeSignal {
    let Some(&lead) = input.first() else {
        return DecodeSignal::NeedMoreInput;
    };

    let (need, lead_bits) = match lead {
        0x00..=0x7F => {
            return DecodeSignal::Consumed {
                len: 1,
                code_point: CodePoint::new(lead.into()),
            };
        }
        0xC2..=0xDF => (2, u32::from(lead & 0x1F)),
        0xE0..=0xEF => (3, u32::from(lead & 0x0F)),
        0xF0..=0xF4 => (4, u32::from(lead & 0x07)),
        // 0x80..=0xC1 are bare continuations or overlong leads,
        // 0xF5..=0xFF can never start a scalar in range.
        _ => return DecodeSignal::Invalid { shift_len: 0 },
    };

    // Validate whatever trail bytes are present before deciding between
    // "short" and "malformed": a wrong byte is invalid even in a short
    // window.
    for (index, &byte) in input.iter().enumerate().take(need).skip(1) {
        let (lo, hi) = if index == 1 {
            first_trail_range(lead)
        } else {
            (0x80, 0xBF)
        };
        if byte < lo || byte > hi {
            return DecodeSignal::Invalid { shift_len: 0 };
        }
    }
    if input.len() < need {
        return DecodeSignal::NeedMoreInput;
    }

    let mut scalar = lead_bits;
    for &byte in &input[1..need] {
        scalar = (scalar << 6) | u32::from(byte & 0x3F);
    }
    DecodeSignal::Consumed {
        len: need,
        code_point: CodePoint::new(scalar),
    }
}

/// Bounds for the first trail byte, which carries the overlong, surrogate
/// and upper-range restrictions.
const fn first_trail_range(lead: u8) -> (u8, u8) {
    match lead {
        0xE0 => (0xA0, 0xBF),
        0xED => (0x80, 0x9F),
        0xF0 => (0x90, 0xBF),
        0xF4 => (0x80, 0x8F),
        _ => (0x80, 0xBF),
    }
}

/// Encodes one code point as one to four bytes.
#[allow(clippy::cast_possible_truncation)]
pub fn encode(_state: &mut ShiftState, code_point: CodePoint, out: &mut [u8]) -> EncodeSignal {
    let scalar = code_point.raw();
    if code_point.is_surrogate() || scalar > 0x0010_FFFF {
        return EncodeSignal::Unrepresentable;
    }
    let need = match scalar {
        0..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        _ => 4,
    };
    if out.len() < need {
        return EncodeSignal::OutputTooSmall;
    }
    match need {
        1 => out[0] = scalar as u8,
        2 => {
            out[0] = 0xC0 | (scalar >> 6) as u8;
            out[1] = 0x80 | (scalar & 0x3F) as u8;
        }
        3 => {
            out[0] = 0xE0 | (scalar >> 12) as u8;
            out[1] = 0x80 | ((scalar >> 6) & 0x3F) as u8;
            out[2] = 0x80 | (scalar & 0x3F) as u8;
        }
        _ => {
            out[0] = 0xF0 | (scalar >> 18) as u8;
            out[1] = 0x80 | ((scalar >> 12) & 0x3F) as u8;
            out[2] = 0x80 | ((scalar >> 6) & 0x3F) as u8;
            out[3] = 0x80 | (scalar & 0x3F) as u8;
        }
    }
    EncodeSignal::Emitted { len: need }
}
