//! Concrete codecs for the uconv converter.
//!
//! Every codec here implements the same two-function contract: a decode
//! function that interprets the head of an input window as one code point,
//! and an encode function that writes one code point to the head of an
//! output window. Both report their outcome through the
//! [`signal::DecodeSignal`]/[`signal::EncodeSignal`] types and carry any
//! cross-call state in an opaque [`signal::ShiftState`].
//!
//! # Design Principles
//!
//! - **Bounded windows** - A codec never reads or writes past the slice it
//!   is handed, and never panics on malformed input.
//! - **Closed dispatch** - The supported set is the [`Encoding`] enum, not a
//!   trait object; adding an encoding means adding a variant.
//! - **Tables are opaque** - Double-byte codecs consult a
//!   [`DoubleByteTable`] through its lookup API only; table layout and
//!   generation are private concerns.

pub mod ascii;
pub mod gbk;
pub mod utf16;
pub mod utf8;

mod registry;
mod table;
mod tables;

pub use registry::Encoding;
pub use table::DoubleByteTable;
