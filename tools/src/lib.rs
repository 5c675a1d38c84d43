//! Conversion and inspection tools for the uconv converter.
//!
//! This crate provides the pieces the `uconv-tools` binary is built from:
//!
//! - A chunked file-conversion driver over the engine
//! - A hex dump formatter for eyeballing byte streams
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to see what the converter did.

use std::fmt::Write as _;
use std::io::{Read, Write};

use anyhow::{bail, ensure, Context, Result};
use engine::{convert, ConversionContext, ConvertError};
use tracing::debug;

/// Bytes rendered per hex dump line.
const DUMP_WIDTH: usize = 16;

/// Smallest scratch buffer the driver will use; must hold the largest
/// single encoded character (a BOM plus a surrogate pair).
const SCRATCH_FLOOR: usize = 16;

/// Summary of one streamed conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertReport {
    /// Input bytes consumed.
    pub bytes_in: u64,
    /// Output bytes produced.
    pub bytes_out: u64,
    /// Characters replaced with U+FFFD.
    pub substitutions: u64,
}

/// Streams `reader` through `ctx` into `writer` in `chunk_size` reads.
///
/// Unconsumed bytes are carried across read boundaries, so chunk edges may
/// fall anywhere, including mid-character. The scratch buffer is flushed
/// and the call retried whenever the engine reports it full. Malformed
/// input, and input that ends inside a multi-byte sequence, are errors.
pub fn convert_stream(
    ctx: &mut ConversionContext,
    reader: &mut impl Read,
    writer: &mut impl Write,
    chunk_size: usize,
) -> Result<ConvertReport> {
    ensure!(chunk_size > 0, "chunk size must be non-zero");

    let mut report = ConvertReport::default();
    let mut consumed_total: u64 = 0;
    let mut pending: Vec<u8> = Vec::new();
    let mut chunk = vec![0u8; chunk_size];
    let mut scratch = vec![0u8; chunk_size.max(SCRATCH_FLOOR)];

    loop {
        let read = reader.read(&mut chunk).context("read input")?;
        if read == 0 {
            break;
        }
        report.bytes_in += read as u64;
        pending.extend_from_slice(&chunk[..read]);

        loop {
            match convert(ctx, &pending, &mut scratch) {
                Ok(progress) => {
                    writer
                        .write_all(&scratch[..progress.written])
                        .context("write output")?;
                    report.bytes_out += progress.written as u64;
                    report.substitutions += u64::from(progress.substitutions);
                    consumed_total += progress.consumed as u64;
                    pending.drain(..progress.consumed);
                    break;
                }
                Err(ConvertError::IncompleteSequence {
                    consumed,
                    written,
                    substitutions,
                }) => {
                    // The tail needs bytes from the next read.
                    writer
                        .write_all(&scratch[..written])
                        .context("write output")?;
                    report.bytes_out += written as u64;
                    report.substitutions += u64::from(substitutions);
                    consumed_total += consumed as u64;
                    pending.drain(..consumed);
                    debug!(pending = pending.len(), "carrying partial sequence");
                    break;
                }
                Err(ConvertError::OutputFull {
                    consumed,
                    written,
                    substitutions,
                }) => {
                    writer
                        .write_all(&scratch[..written])
                        .context("write output")?;
                    report.bytes_out += written as u64;
                    report.substitutions += u64::from(substitutions);
                    consumed_total += consumed as u64;
                    pending.drain(..consumed);
                    // Scratch flushed; convert the rest of this chunk.
                }
                Err(err @ ConvertError::IllegalSequence { consumed, .. }) => {
                    let position = consumed_total + consumed as u64;
                    return Err(err).with_context(|| format!("at input byte {position}"));
                }
                Err(err) => return Err(err).context("conversion engine fault"),
            }
        }
    }

    if !pending.is_empty() {
        bail!(
            "input ends inside a multi-byte sequence ({} bytes after offset {consumed_total})",
            pending.len()
        );
    }
    writer.flush().context("flush output")?;
    Ok(report)
}

/// Formats bytes as an offset + hex + printable-ASCII dump, 16 per line.
#[must_use]
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (line, row) in bytes.chunks(DUMP_WIDTH).enumerate() {
        let offset = line * DUMP_WIDTH;
        let _ = write!(out, "{offset:08X}: ");
        for index in 0..DUMP_WIDTH {
            if index % 8 == 0 {
                out.push(' ');
            }
            match row.get(index) {
                Some(byte) => {
                    let _ = write!(out, "{byte:02X} ");
                }
                None => out.push_str("   "),
            }
        }
        out.push_str(" |  ");
        for &byte in row {
            out.push(if byte.is_ascii_graphic() || byte == b' ' {
                byte as char
            } else {
                '.'
            });
        }
        out.push('\n');
    }
    out
}
