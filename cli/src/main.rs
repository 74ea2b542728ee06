mod args;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};

use anyhow::{Context, Result};
use ascii85_codec::{decode_stream_with, encode_stream, Commit, DecodeOptions, StreamError};
use clap::Parser;

use args::{Cli, Mode};

fn open_input(cli: &Cli) -> Result<Box<dyn Read>> {
    Ok(match &cli.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    })
}

fn open_output(cli: &Cli) -> Result<Box<dyn Write>> {
    Ok(match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn decode_into<W: Write>(input: Box<dyn Read>, sink: W, options: &DecodeOptions) -> Result<()> {
    match decode_stream_with(input, sink, options) {
        Ok(_) => Ok(()),
        Err(StreamError::Decode(err)) => Err(err).context("invalid ASCII85 data for decoding"),
        Err(StreamError::Io(err)) => Err(err).context("failed to decode input"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let input = open_input(&cli)?;

    match cli.mode() {
        Mode::Encode => {
            encode_stream(input, open_output(&cli)?).context("failed to encode input")?;
        }
        Mode::Decode => {
            let options = cli.decode_options();
            match options.commit {
                // The output is only opened once the whole input decoded, so a
                // failed run leaves an existing `-o` file untouched.
                Commit::Atomic => {
                    let mut decoded = Vec::new();
                    decode_into(input, &mut decoded, &options)?;

                    let mut output = open_output(&cli)?;
                    output
                        .write_all(&decoded)
                        .and_then(|()| output.flush())
                        .context("failed to write output")?;
                }
                Commit::Incremental => {
                    let mut output = open_output(&cli)?;
                    decode_into(input, &mut output, &options)?;
                }
            }
        }
    }

    Ok(())
}
