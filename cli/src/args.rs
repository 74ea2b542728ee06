use ascii85_codec::{Commit, DecodeOptions};
use clap::Parser;
use std::path::PathBuf;

/// ASCII85 encoder and decoder.
///
/// Reads raw bytes (or ASCII85 text when decoding) from standard input or a
/// file and writes the result to standard output or a file.
#[derive(Parser, Debug)]
#[command(name = "ascii85")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Encode the input (default mode)
    #[arg(short, long, conflicts_with = "decode")]
    pub encode: bool,

    /// Decode the input
    #[arg(short, long)]
    pub decode: bool,

    /// Write decoded bytes as they are produced
    ///
    /// By default nothing is written unless the whole input is valid.
    #[arg(long, requires = "decode")]
    pub incremental: bool,

    /// Accept `!!!!!` as the long form of four zero bytes
    #[arg(long, requires = "decode")]
    pub allow_degenerate_groups: bool,

    /// Input file (stdin if not specified)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.decode {
            Mode::Decode
        } else {
            Mode::Encode
        }
    }

    pub fn decode_options(&self) -> DecodeOptions {
        let commit = if self.incremental {
            Commit::Incremental
        } else {
            Commit::Atomic
        };
        DecodeOptions::new()
            .commit(commit)
            .reject_degenerate_groups(!self.allow_degenerate_groups)
    }
}
