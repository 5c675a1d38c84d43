//! The conversion loop.

use signal::{CodePoint, DecodeSignal, EncodeSignal};
use tracing::trace;

use crate::context::ConversionContext;
use crate::error::{ConvertError, ConvertResult};

/// Byte-exact progress of one [`convert`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    /// Input bytes consumed.
    pub consumed: usize,
    /// Output bytes written.
    pub written: usize,
    /// Characters replaced with U+FFFD because the target encoding could
    /// not represent them.
    pub substitutions: u32,
}

/// Converts a prefix of `input` into a prefix of `output`.
///
/// Drives one decode+encode pair per character until the input is
/// exhausted or a stop condition arises. On success the returned
/// [`Progress`] covers the whole input; on failure the error carries the
/// progress made, and the context is left so that retrying from the
/// reported cursors has no double effect: any failure that consumed no
/// input also restored the decode state it snapshotted.
///
/// Characters in the language-tag block that the target cannot represent
/// are dropped silently; anything else unrepresentable becomes U+FFFD and
/// bumps the substitution count, unless the replacement itself cannot be
/// encoded, in which case the call fails as an illegal sequence.
pub fn convert(
    ctx: &mut ConversionContext,
    input: &[u8],
    output: &mut [u8],
) -> ConvertResult<Progress> {
    let mut consumed = 0usize;
    let mut written = 0usize;
    let mut substitutions = 0u32;

    while consumed < input.len() {
        let window = &input[consumed..];
        trace!(
            consumed,
            written,
            in_left = window.len(),
            out_left = output.len() - written,
            "conversion step"
        );

        let last_decode_state = ctx.decode_state;
        let (len, code_point) = match ctx.source.decode(&mut ctx.decode_state, window) {
            DecodeSignal::Invalid { shift_len } => {
                // The shift prefix stays consumed; the offending bytes are
                // left for the caller to deal with.
                if shift_len > window.len() {
                    return Err(ConvertError::CodecFault {
                        reported: shift_len,
                        available: window.len(),
                    });
                }
                consumed += shift_len;
                trace!(consumed, shift_len, "invalid input sequence");
                return Err(ConvertError::IllegalSequence {
                    consumed,
                    written,
                    substitutions,
                });
            }
            DecodeSignal::NeedMoreInput => {
                trace!(consumed, "input ends mid-character");
                return Err(ConvertError::IncompleteSequence {
                    consumed,
                    written,
                    substitutions,
                });
            }
            DecodeSignal::ShiftOnly { len } => {
                // Pure state transition; nothing to emit.
                if len == 0 || len > window.len() {
                    return Err(ConvertError::CodecFault {
                        reported: len,
                        available: window.len(),
                    });
                }
                consumed += len;
                trace!(consumed, len, "shift sequence");
                continue;
            }
            DecodeSignal::Consumed { len, code_point } => {
                if len == 0 || len > window.len() {
                    return Err(ConvertError::CodecFault {
                        reported: len,
                        available: window.len(),
                    });
                }
                (len, code_point)
            }
        };

        let out_window = &mut output[written..];
        if out_window.is_empty() {
            // Nothing will be emitted for this decode, so undo its state
            // transition and let the caller retry once output drains.
            ctx.decode_state = last_decode_state;
            trace!(consumed, written, "output exhausted before encode");
            return Err(ConvertError::OutputFull {
                consumed,
                written,
                substitutions,
            });
        }

        let emitted = match ctx.target.encode(&mut ctx.encode_state, code_point, out_window) {
            EncodeSignal::Emitted { len } => len,
            EncodeSignal::OutputTooSmall => {
                ctx.decode_state = last_decode_state;
                trace!(consumed, written, "output too small for character");
                return Err(ConvertError::OutputFull {
                    consumed,
                    written,
                    substitutions,
                });
            }
            EncodeSignal::Unrepresentable => {
                if code_point.is_tag() {
                    // Language-tag characters are invisible annotations:
                    // consume them, emit nothing, count nothing.
                    consumed += len;
                    trace!(consumed, code_point = code_point.raw(), "tag character dropped");
                    continue;
                }
                match ctx
                    .target
                    .encode(&mut ctx.encode_state, CodePoint::REPLACEMENT, out_window)
                {
                    EncodeSignal::Emitted { len } => {
                        substitutions += 1;
                        trace!(
                            consumed,
                            code_point = code_point.raw(),
                            substitutions,
                            "substituted replacement character"
                        );
                        len
                    }
                    EncodeSignal::OutputTooSmall => {
                        ctx.decode_state = last_decode_state;
                        return Err(ConvertError::OutputFull {
                            consumed,
                            written,
                            substitutions,
                        });
                    }
                    EncodeSignal::Unrepresentable => {
                        // Not even the replacement fits this encoding;
                        // nothing useful can be emitted at this position.
                        ctx.decode_state = last_decode_state;
                        trace!(code_point = code_point.raw(), "replacement unrepresentable");
                        return Err(ConvertError::IllegalSequence {
                            consumed,
                            written,
                            substitutions,
                        });
                    }
                }
            }
        };

        if emitted == 0 || emitted > out_window.len() {
            return Err(ConvertError::CodecFault {
                reported: emitted,
                available: out_window.len(),
            });
        }
        written += emitted;
        consumed += len;
    }

    Ok(Progress {
        consumed,
        written,
        substitutions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use codecs::{DoubleByteTable, Encoding};
    use signal::ShiftState;

    fn gbk_to_utf8() -> ConversionContext {
        ConversionContext::new(Encoding::Gbk, Encoding::Utf8)
    }

    #[test]
    fn ascii_passthrough() {
        let mut ctx = gbk_to_utf8();
        let mut out = [0u8; 8];
        let progress = convert(&mut ctx, &[0x41, 0x42], &mut out).unwrap();
        assert_eq!(
            progress,
            Progress {
                consumed: 2,
                written: 2,
                substitutions: 0
            }
        );
        assert_eq!(&out[..2], &[0x41, 0x42]);
    }

    #[test]
    fn demo_sentence_converts() {
        // 我是中国人, the classic smoke input.
        let gbk = [0xCEu8, 0xD2, 0xCA, 0xC7, 0xD6, 0xD0, 0xB9, 0xFA, 0xC8, 0xCB];
        let mut ctx = gbk_to_utf8();
        let mut out = [0u8; 64];
        let progress = convert(&mut ctx, &gbk, &mut out).unwrap();
        assert_eq!(progress.consumed, gbk.len());
        assert_eq!(progress.substitutions, 0);
        assert_eq!(&out[..progress.written], "我是中国人".as_bytes());
    }

    #[test]
    fn truncated_lead_reports_incomplete() {
        let mut ctx = gbk_to_utf8();
        let mut out = [0u8; 8];
        let err = convert(&mut ctx, &[0x81], &mut out).unwrap_err();
        assert_eq!(
            err,
            ConvertError::IncompleteSequence {
                consumed: 0,
                written: 0,
                substitutions: 0
            }
        );
        assert!(ctx.decode_state().is_initial());
    }

    #[test]
    fn incomplete_keeps_earlier_progress() {
        // One full character, then a dangling lead byte.
        let mut ctx = gbk_to_utf8();
        let mut out = [0u8; 8];
        let err = convert(&mut ctx, &[0xCE, 0xD2, 0xCE], &mut out).unwrap_err();
        assert_eq!(
            err,
            ConvertError::IncompleteSequence {
                consumed: 2,
                written: 3,
                substitutions: 0
            }
        );
        assert_eq!(&out[..3], "我".as_bytes());
    }

    #[test]
    fn invalid_lead_byte_reports_illegal() {
        let mut ctx = gbk_to_utf8();
        let mut out = [0u8; 8];
        let err = convert(&mut ctx, &[0xFF], &mut out).unwrap_err();
        assert_eq!(
            err,
            ConvertError::IllegalSequence {
                consumed: 0,
                written: 0,
                substitutions: 0
            }
        );
    }

    #[test]
    fn output_exhausted_restores_decode_state() {
        // 中 needs 3 UTF-8 bytes; give the encoder 2.
        let mut ctx = gbk_to_utf8();
        let mut out = [0u8; 2];
        let err = convert(&mut ctx, &[0xD6, 0xD0], &mut out).unwrap_err();
        assert_eq!(
            err,
            ConvertError::OutputFull {
                consumed: 0,
                written: 0,
                substitutions: 0
            }
        );
        assert!(ctx.decode_state().is_initial());

        // Retry with room: same context, no double effect.
        let mut out = [0u8; 8];
        let progress = convert(&mut ctx, &[0xD6, 0xD0], &mut out).unwrap();
        assert_eq!(progress.written, 3);
        assert_eq!(&out[..3], "中".as_bytes());
    }

    #[test]
    fn zero_capacity_output_is_full_not_fault() {
        let mut ctx = gbk_to_utf8();
        let err = convert(&mut ctx, &[0x41], &mut []).unwrap_err();
        assert_eq!(
            err,
            ConvertError::OutputFull {
                consumed: 0,
                written: 0,
                substitutions: 0
            }
        );
    }

    #[test]
    fn empty_input_succeeds_trivially() {
        let mut ctx = gbk_to_utf8();
        let mut out = [0u8; 4];
        assert_eq!(convert(&mut ctx, &[], &mut out), Ok(Progress::default()));
    }

    // A target whose table encodes the replacement character but little
    // else, to exercise the substitution path end to end.
    static NARROW: DoubleByteTable =
        DoubleByteTable::new(&[(0xA1A1, 0x3000), (0xA1F4, 0xFFFD)]);

    #[test]
    fn unrepresentable_substitutes_replacement() {
        let mut ctx = ConversionContext::new(Encoding::Utf8, Encoding::DoubleByte(&NARROW));
        let mut out = [0u8; 8];
        // 中 is absent from the narrow table.
        let progress = convert(&mut ctx, "中".as_bytes(), &mut out).unwrap();
        assert_eq!(
            progress,
            Progress {
                consumed: 3,
                written: 2,
                substitutions: 1
            }
        );
        assert_eq!(&out[..2], &[0xA1, 0xF4]);
    }

    #[test]
    fn substitutions_accumulate() {
        let mut ctx = ConversionContext::new(Encoding::Utf8, Encoding::DoubleByte(&NARROW));
        let mut out = [0u8; 16];
        let progress = convert(&mut ctx, "中文A".as_bytes(), &mut out).unwrap();
        assert_eq!(progress.substitutions, 2);
        assert_eq!(&out[..5], &[0xA1, 0xF4, 0xA1, 0xF4, 0x41]);
    }

    #[test]
    fn replacement_unrepresentable_degrades_to_illegal() {
        // ASCII cannot hold U+FFFD either.
        let mut ctx = ConversionContext::new(Encoding::Utf8, Encoding::Ascii);
        let mut out = [0u8; 8];
        let err = convert(&mut ctx, "中".as_bytes(), &mut out).unwrap_err();
        assert_eq!(
            err,
            ConvertError::IllegalSequence {
                consumed: 0,
                written: 0,
                substitutions: 0
            }
        );
        assert!(ctx.decode_state().is_initial());
    }

    #[test]
    fn tag_characters_dropped_silently() {
        // U+E0041 TAG LATIN CAPITAL LETTER A between two ASCII letters.
        let mut input = Vec::new();
        input.push(0x41);
        input.extend_from_slice("\u{E0041}".as_bytes());
        input.push(0x42);
        let mut ctx = ConversionContext::new(Encoding::Utf8, Encoding::Ascii);
        let mut out = [0u8; 8];
        let progress = convert(&mut ctx, &input, &mut out).unwrap();
        assert_eq!(progress.consumed, input.len());
        assert_eq!(progress.written, 2);
        assert_eq!(progress.substitutions, 0);
        assert_eq!(&out[..2], &[0x41, 0x42]);
    }

    #[test]
    fn bom_consumed_as_shift_produces_no_output() {
        let mut ctx = ConversionContext::new(Encoding::Utf16, Encoding::Utf8);
        let mut out = [0u8; 8];
        let progress = convert(&mut ctx, &[0xFE, 0xFF, 0x00, 0x41], &mut out).unwrap();
        assert_eq!(
            progress,
            Progress {
                consumed: 4,
                written: 1,
                substitutions: 0
            }
        );
        assert_eq!(out[0], 0x41);
    }

    #[test]
    fn bom_alone_is_consumed_with_empty_output() {
        // A pure shift sequence must complete even with zero output space.
        let mut ctx = ConversionContext::new(Encoding::Utf16, Encoding::Utf8);
        let progress = convert(&mut ctx, &[0xFF, 0xFE], &mut []).unwrap();
        assert_eq!(
            progress,
            Progress {
                consumed: 2,
                written: 0,
                substitutions: 0
            }
        );
        assert!(!ctx.decode_state().is_initial());
    }

    #[test]
    fn output_full_midstream_resumes_cleanly() {
        // Two hanzi into a 3-byte window: first fits, second must wait.
        let gbk = [0xCEu8, 0xD2, 0xCA, 0xC7];
        let mut ctx = gbk_to_utf8();
        let mut out = [0u8; 3];
        let err = convert(&mut ctx, &gbk, &mut out).unwrap_err();
        assert_eq!(
            err,
            ConvertError::OutputFull {
                consumed: 2,
                written: 3,
                substitutions: 0
            }
        );
        assert_eq!(&out[..3], "我".as_bytes());

        let mut out2 = [0u8; 3];
        let progress = convert(&mut ctx, &gbk[2..], &mut out2).unwrap();
        assert_eq!(progress.consumed, 2);
        assert_eq!(&out2[..3], "是".as_bytes());
    }

    #[test]
    fn utf16_target_emits_bom_once_across_calls() {
        let mut ctx = ConversionContext::new(Encoding::Utf8, Encoding::Utf16);
        let mut first = [0u8; 4];
        let progress = convert(&mut ctx, b"A", &mut first).unwrap();
        assert_eq!(progress.written, 4);
        assert_eq!(&first[..4], &[0xFE, 0xFF, 0x00, 0x41]);

        let mut second = [0u8; 4];
        let progress = convert(&mut ctx, b"B", &mut second).unwrap();
        assert_eq!(progress.written, 2);
        assert_eq!(&second[..2], &[0x00, 0x42]);
    }

    #[test]
    fn cursors_never_move_backward() {
        let gbk = [0x41u8, 0xCE, 0xD2, 0x42, 0xCA, 0xC7];
        let mut ctx = gbk_to_utf8();
        let mut out = [0u8; 32];
        // Convert byte-at-a-time growth of the window and watch progress.
        let mut last_consumed = 0;
        for end in 1..=gbk.len() {
            ctx.reset();
            match convert(&mut ctx, &gbk[..end], &mut out) {
                Ok(progress) => {
                    assert!(progress.consumed >= last_consumed);
                    last_consumed = progress.consumed;
                }
                Err(ConvertError::IncompleteSequence { consumed, .. }) => {
                    assert!(consumed >= last_consumed);
                    last_consumed = consumed;
                }
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
        assert_eq!(last_consumed, gbk.len());
    }

    #[test]
    fn rollback_state_for_utf16_bom_on_output_full() {
        // The BOM decision is a state change; an output-full stop before
        // the first character must rewind it.
        let mut ctx = ConversionContext::new(Encoding::Utf16, Encoding::Utf8);
        let mut out = [0u8; 0];
        // No BOM: the first decode both picks big-endian and produces 'A'.
        let err = convert(&mut ctx, &[0x00, 0x41], &mut out).unwrap_err();
        assert_eq!(
            err,
            ConvertError::OutputFull {
                consumed: 0,
                written: 0,
                substitutions: 0
            }
        );
        assert_eq!(ctx.decode_state(), ShiftState::INITIAL);
    }
}
