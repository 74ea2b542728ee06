use std::io::{self, ErrorKind, Read, Write};

use log::{debug, trace};

use crate::{Commit, DecodeOptions, Decoder, EncodeWriter, StreamError, BLOCK_SIZE};

/// Encodes everything `source` yields into `sink`.
///
/// Returns the number of symbols written.
pub fn encode_stream<R: Read, W: Write>(mut source: R, sink: W) -> io::Result<u64> {
    let mut writer = EncodeWriter::new(sink);
    let read = io::copy(&mut source, &mut writer)?;
    let (_, written) = writer.finish()?;

    debug!("encoded {} bytes into {} symbols", read, written);
    Ok(written)
}

/// Decodes everything `source` yields into `sink`.
///
/// Nothing is written to `sink` unless the whole input is valid. Returns the
/// number of bytes written.
pub fn decode_stream<R: Read, W: Write>(source: R, sink: W) -> Result<u64, StreamError> {
    decode_stream_with(source, sink, &DecodeOptions::default())
}

/// Decodes `source` into `sink` with the given options.
///
/// The input is read in fixed-size blocks and never held as a whole. With
/// [`Commit::Atomic`] the decoded bytes are staged until the input is
/// exhausted; with [`Commit::Incremental`] they are written after each block.
pub fn decode_stream_with<R: Read, W: Write>(
    mut source: R,
    mut sink: W,
    options: &DecodeOptions,
) -> Result<u64, StreamError> {
    let mut decoder = Decoder::with_options(options);
    let mut block = [0; BLOCK_SIZE];
    let mut staged = Vec::with_capacity(BLOCK_SIZE);
    let mut written = 0;

    loop {
        let n = match source.read(&mut block) {
            Ok(0) => break,
            Ok(n) => n,
            Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        if let Err(err) = decoder.push_slice(&block[..n], &mut staged) {
            debug!("decode failed, {} bytes not committed: {}", staged.len(), err);
            return Err(err.into());
        }

        if options.commit == Commit::Incremental && !staged.is_empty() {
            sink.write_all(&staged)?;
            trace!("flushed {} decoded bytes", staged.len());
            written += staged.len() as u64;
            staged.clear();
        }
    }

    let consumed = decoder.offset();
    decoder.finish(&mut staged)?;
    sink.write_all(&staged)?;
    sink.flush()?;
    written += staged.len() as u64;

    debug!("decoded {} input bytes into {} bytes", consumed, written);
    Ok(written)
}
