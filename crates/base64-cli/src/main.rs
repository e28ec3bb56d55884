//! `b64` — strict base64 encoder/decoder.
//!
//! Usage:
//!   b64 encode [--max-input N]      < raw   > text
//!   b64 decode [--capacity N]       < text  > raw
//!   b64 counters [--count N] [--width W]
//!
//! `decode` takes a single line; one trailing LF or CRLF is allowed.
//! Set `RUST_LOG=trace` to see where a decode stopped.

mod cmd;

use clap::{Parser, Subcommand};
use eyre::WrapErr;
use std::io::{self, Read, Write};

#[derive(Debug, Parser)]
#[command(name = "b64", version, about = "Strict standard-alphabet base64")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encode stdin to base64 text.
    Encode {
        /// Encode at most this many input bytes.
        #[arg(long, value_name = "BYTES")]
        max_input: Option<usize>,
    },
    /// Decode one line of base64 text from stdin.
    ///
    /// A single trailing LF or CRLF is accepted. Wrapped (multi-line) input is rejected.
    Decode {
        /// Stop after writing this many bytes.
        #[arg(long, value_name = "BYTES", env = "B64_CAPACITY")]
        capacity: Option<usize>,
    },
    /// Print the encodings of consecutive little-endian counters.
    Counters {
        /// How many counters to print.
        #[arg(long, default_value_t = 1024)]
        count: u64,
        /// Bytes of each counter to encode.
        #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(1..=8))]
        width: u8,
    },
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match cli.cmd {
        Command::Encode { max_input } => {
            let input = read_stdin()?;
            let text = cmd::encode_input(&input, max_input);
            writeln!(stdout, "{text}")?;
        }
        Command::Decode { capacity } => {
            let input = read_stdin()?;
            let decoded = cmd::decode_input(&input, capacity)?;
            if decoded.truncated {
                tracing::warn!(
                    written = decoded.bytes.len(),
                    "output capacity reached before end of input"
                );
            }
            stdout.write_all(&decoded.bytes)?;
        }
        Command::Counters { count, width } => {
            for line in cmd::counter_lines(count, width as usize) {
                writeln!(stdout, "{line}")?;
            }
        }
    }

    stdout.flush()?;
    Ok(())
}

fn read_stdin() -> eyre::Result<Vec<u8>> {
    let mut buf = Vec::new();
    io::stdin()
        .read_to_end(&mut buf)
        .wrap_err("failed to read stdin")?;
    Ok(buf)
}
