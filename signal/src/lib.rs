//! Code point, shift state and codec signal contract for the uconv converter.
//!
//! This crate defines the vocabulary shared by every codec and the conversion
//! engine: the universal [`CodePoint`] scalar, the opaque per-direction
//! [`ShiftState`], and the [`DecodeSignal`]/[`EncodeSignal`] result types that
//! every decode/encode function speaks.
//!
//! # Design Principles
//!
//! - **No domain knowledge** - This crate knows nothing about any particular
//!   encoding; it only names the outcomes a codec may report.
//! - **Explicit signals** - Every decode/encode outcome is a tagged variant,
//!   never an overloaded integer. The legacy integer protocol is still
//!   available at the boundary via `to_raw`/`from_raw`.
//! - **Copy-cheap state** - [`ShiftState`] is a plain `Copy` value so the
//!   engine can snapshot and restore it without ceremony.

mod codepoint;
mod decode;
mod encode;
mod state;

pub use codepoint::CodePoint;
pub use decode::{DecodeSignal, RAW_ILSEQ, RAW_TOOFEW};
pub use encode::{EncodeSignal, RAW_ILUNI, RAW_TOOSMALL};
pub use state::ShiftState;
