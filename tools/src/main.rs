use std::fs;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codecs::Encoding;
use engine::ConversionContext;
use tools::{convert_stream, hex_dump};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "uconv-tools",
    version,
    about = "uconv conversion and inspection tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a file between encodings.
    Convert {
        /// Path to the input bytes.
        input: PathBuf,
        /// Source encoding label.
        #[arg(long)]
        from: String,
        /// Target encoding label.
        #[arg(long)]
        to: String,
        /// Output path; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Read chunk size in bytes.
        #[arg(long, default_value_t = 64 * 1024)]
        chunk_size: usize,
    },
    /// Hex-dump a file.
    Dump {
        /// Path to the bytes to dump.
        file: PathBuf,
    },
    /// List supported encoding labels.
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Convert {
            input,
            from,
            to,
            output,
            chunk_size,
        } => {
            let source = resolve_label(&from)?;
            let target = resolve_label(&to)?;
            let mut ctx = ConversionContext::new(source, target);

            let file =
                File::open(&input).with_context(|| format!("open input {}", input.display()))?;
            let mut reader = BufReader::new(file);

            let report = match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("create output {}", path.display()))?;
                    let mut writer = BufWriter::new(file);
                    convert_stream(&mut ctx, &mut reader, &mut writer, chunk_size)?
                }
                None => {
                    let stdout = io::stdout();
                    let mut writer = BufWriter::new(stdout.lock());
                    convert_stream(&mut ctx, &mut reader, &mut writer, chunk_size)?
                }
            };
            eprintln!(
                "{source} -> {target}: {} bytes in, {} bytes out, {} substitutions",
                report.bytes_in, report.bytes_out, report.substitutions
            );
        }
        Command::Dump { file } => {
            let bytes = fs::read(&file).with_context(|| format!("read {}", file.display()))?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(hex_dump(&bytes).as_bytes())
                .context("write dump")?;
        }
        Command::List => {
            for encoding in Encoding::ALL {
                println!("{encoding}");
            }
        }
    }
    Ok(())
}

fn resolve_label(label: &str) -> Result<Encoding> {
    Encoding::from_label(label)
        .with_context(|| format!("unknown encoding label: {label} (try `uconv-tools list`)"))
}
