//! UTF-16 codecs: fixed-order BE/LE and the BOM-sensitive variant.
//!
//! The BE and LE codecs are stateless. The BOM-sensitive variant stores its
//! byte-order decision in the shift state: an initial BOM is consumed as a
//! pure shift sequence, and a stream without one is big-endian per
//! RFC 2781. On the encode side it emits a byte-order mark ahead of the
//! first character and records that in the encode state.

use signal::{CodePoint, DecodeSignal, EncodeSignal, ShiftState};

// Decode-state values for the BOM-sensitive variant.
const STATE_UNDECIDED: u32 = 0;
const STATE_BIG_ENDIAN: u32 = 1;
const STATE_LITTLE_ENDIAN: u32 = 2;

// Encode-state values for the BOM-sensitive variant.
const STATE_BOM_PENDING: u32 = 0;
const STATE_BOM_WRITTEN: u32 = 1;

/// Decodes one big-endian UTF-16 unit or surrogate pair.
pub fn decode_be(_state: &mut ShiftState, input: &[u8]) -> DecodeSignal {
    decode_units(input, true)
}

/// Decodes one little-endian UTF-16 unit or surrogate pair.
pub fn decode_le(_state: &mut ShiftState, input: &[u8]) -> DecodeSignal {
    decode_units(input, false)
}

/// Decodes with byte-order detection from an initial BOM.
pub fn decode_bom(state: &mut ShiftState, input: &[u8]) -> DecodeSignal {
    match state.raw() {
        STATE_UNDECIDED => {
            if input.len() < 2 {
                return DecodeSignal::NeedMoreInput;
            }
            if input[0] == 0xFE && input[1] == 0xFF {
                *state = ShiftState::new(STATE_BIG_ENDIAN);
                return DecodeSignal::ShiftOnly { len: 2 };
            }
            if input[0] == 0xFF && input[1] == 0xFE {
                *state = ShiftState::new(STATE_LITTLE_ENDIAN);
                return DecodeSignal::ShiftOnly { len: 2 };
            }
            // No BOM: big-endian, and the choice is itself a state
            // transition so a rolled-back call replays it.
            *state = ShiftState::new(STATE_BIG_ENDIAN);
            decode_units(input, true)
        }
        STATE_LITTLE_ENDIAN => decode_units(input, false),
        _ => decode_units(input, true),
    }
}

fn decode_units(input: &[u8], big_endian: bool) -> DecodeSignal {
    let Some(unit) = unit_at(input, 0, big_endian) else {
        return DecodeSignal::NeedMoreInput;
    };
    match unit {
        0xD800..=0xDBFF => {
            let Some(low) = unit_at(input, 2, big_endian) else {
                return DecodeSignal::NeedMoreInput;
            };
            if !(0xDC00..=0xDFFF).contains(&low) {
                return DecodeSignal::Invalid { shift_len: 0 };
            }
            let scalar =
                0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
            DecodeSignal::Consumed {
                len: 4,
                code_point: CodePoint::new(scalar),
            }
        }
        0xDC00..=0xDFFF => DecodeSignal::Invalid { shift_len: 0 },
        _ => DecodeSignal::Consumed {
            len: 2,
            code_point: CodePoint::new(unit.into()),
        },
    }
}

fn unit_at(input: &[u8], offset: usize, big_endian: bool) -> Option<u16> {
    let bytes: [u8; 2] = input.get(offset..offset + 2)?.try_into().ok()?;
    Some(if big_endian {
        u16::from_be_bytes(bytes)
    } else {
        u16::from_le_bytes(bytes)
    })
}

/// Encodes one code point as big-endian UTF-16.
pub fn encode_be(_state: &mut ShiftState, code_point: CodePoint, out: &mut [u8]) -> EncodeSignal {
    encode_units(code_point, out, true, false)
}

/// Encodes one code point as little-endian UTF-16.
pub fn encode_le(_state: &mut ShiftState, code_point: CodePoint, out: &mut [u8]) -> EncodeSignal {
    encode_units(code_point, out, false, false)
}

/// Encodes big-endian with a BOM ahead of the first character.
pub fn encode_bom(state: &mut ShiftState, code_point: CodePoint, out: &mut [u8]) -> EncodeSignal {
    let with_bom = state.raw() == STATE_BOM_PENDING;
    let signal = encode_units(code_point, out, true, with_bom);
    if with_bom && matches!(signal, EncodeSignal::Emitted { .. }) {
        *state = ShiftState::new(STATE_BOM_WRITTEN);
    }
    signal
}

fn encode_units(code_point: CodePoint, out: &mut [u8], big_endian: bool, with_bom: bool) -> EncodeSignal {
    let scalar = code_point.raw();
    if code_point.is_surrogate() || scalar > 0x0010_FFFF {
        return EncodeSignal::Unrepresentable;
    }

    let mut units = [0u16; 3];
    let mut count = 0;
    if with_bom {
        units[count] = 0xFEFF;
        count += 1;
    }
    if scalar < 0x10000 {
        #[allow(clippy::cast_possible_truncation)]
        {
            units[count] = scalar as u16;
        }
        count += 1;
    } else {
        let offset = scalar - 0x10000;
        #[allow(clippy::cast_possible_truncation)]
        {
            units[count] = 0xD800 + (offset >> 10) as u16;
            units[count + 1] = 0xDC00 + (offset & 0x3FF) as u16;
        }
        count += 2;
    }

    let need = count * 2;
    if out.len() < need {
        return EncodeSignal::OutputTooSmall;
    }
    for (index, unit) in units[..count].iter().enumerate() {
        let bytes = if big_endian {
            unit.to_be_bytes()
        } else {
            unit.to_le_bytes()
        };
        out[index * 2..index * 2 + 2].copy_from_slice(&bytes);
    }
    EncodeSignal::Emitted { len: need }
}
