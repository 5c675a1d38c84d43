//! Streaming decode/re-encode conversion engine.
//!
//! This is the core crate that drives one decode+encode codec pair per
//! character over caller-supplied buffers of arbitrary size. Input may be
//! chopped anywhere — including mid-character — and conversion resumes
//! losslessly from the reported cursors.
//!
//! # Design Principles
//!
//! - **Restartable by construction** - Any failing call that consumed
//!   nothing leaves the context exactly as if it had never run; the caller
//!   supplies more input or output space and retries.
//! - **No I/O, no blocking** - Both buffer-exhaustion conditions are
//!   reported to the caller, never waited out.
//! - **Caller-owned buffers** - The engine allocates nothing on the
//!   conversion path.
//!
//! # Example
//!
//! ```
//! use codecs::Encoding;
//! use engine::{convert, ConversionContext};
//!
//! let mut ctx = ConversionContext::new(Encoding::Gbk, Encoding::Utf8);
//! let mut out = [0u8; 64];
//! let progress = convert(&mut ctx, &[0xD6, 0xD0], &mut out).unwrap();
//! assert_eq!(&out[..progress.written], "中".as_bytes());
//! ```

mod context;
mod convert;
mod error;

pub use context::ConversionContext;
pub use convert::{convert, Progress};
pub use error::{ConvertError, ConvertResult};
