use std::io::{self, Write};

use crate::{BLOCK_SIZE, NULL_WORD, SYM_FIRST};

fn divmod(n: u32, m: u32) -> (u32, u32) {
    (n / m, n % m)
}

fn a85(n: u32) -> u8 {
    n as u8 + SYM_FIRST
}

/// Encodes 4 bytes to 5 ASCII85 symbols, most significant digit first.
///
/// The `z` shorthand is not applied here.
pub fn encode_word(word: [u8; 4]) -> [u8; 5] {
    let n = u32::from_be_bytes(word);
    let (n, e) = divmod(n, 85);
    let (n, d) = divmod(n, 85);
    let (n, c) = divmod(n, 85);
    let (a, b) = divmod(n, 85);

    [a85(a), a85(b), a85(c), a85(d), a85(e)]
}

/// Upper bound of the encoded size of `len` input bytes.
///
/// Exact unless the input contains all-zero words, which shrink to `z`.
pub fn encoded_len(len: usize) -> usize {
    let tail = len % 4;
    len / 4 * 5 + if tail > 0 { tail + 1 } else { 0 }
}

fn push_word(word: [u8; 4], out: &mut Vec<u8>) {
    if word == [0; 4] {
        out.push(NULL_WORD);
    } else {
        out.extend_from_slice(&encode_word(word));
    }
}

/// Incremental encoder.
///
/// Input may be split at any byte; the output is the same as encoding the
/// concatenation in one go. At most 3 bytes are held between calls.
#[derive(Debug, Default, Clone)]
pub struct Encoder {
    pending: [u8; 4],
    len: usize,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bytes waiting for their group to complete.
    pub fn pending(&self) -> usize {
        self.len
    }

    /// Encodes `data`, appending every completed group to `out`.
    pub fn push_slice(&mut self, mut data: &[u8], out: &mut Vec<u8>) {
        if self.len > 0 {
            let take = (4 - self.len).min(data.len());
            self.pending[self.len..self.len + take].copy_from_slice(&data[..take]);
            self.len += take;
            data = &data[take..];

            if self.len < 4 {
                return;
            }
            push_word(self.pending, out);
            self.len = 0;
        }

        let chunks = data.chunks_exact(4);
        let remainder = chunks.remainder();
        for c in chunks {
            push_word([c[0], c[1], c[2], c[3]], out);
        }

        self.pending[..remainder.len()].copy_from_slice(remainder);
        self.len = remainder.len();
    }

    /// Flushes the partial trailing group, N bytes as N + 1 symbols.
    pub fn finish(self, out: &mut Vec<u8>) {
        if self.len > 0 {
            let mut c = [0; 4];
            c[..self.len].copy_from_slice(&self.pending[..self.len]);
            let word = encode_word(c);
            out.extend_from_slice(&word[..self.len + 1]);
        }
    }
}

/// Encodes `data` into ASCII85 symbols.
pub fn encode_to_vec(data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(encoded_len(data.len()));
    let mut encoder = Encoder::new();
    encoder.push_slice(data, &mut buf);
    encoder.finish(&mut buf);
    buf
}

/// Encodes `data` into an ASCII85 string.
///
/// Never fails; empty input gives an empty string.
pub fn encode(data: &[u8]) -> String {
    encode_to_vec(data).into_iter().map(char::from).collect()
}

/// A writer that ASCII85-encodes everything written to it into `W`.
///
/// Call [`finish`](EncodeWriter::finish) once done, otherwise the last 1 to 3
/// bytes are never written out.
///
/// Each `write` encodes at most one block. When the inner writer fails the
/// block counts as not consumed, but part of its symbols may already have
/// reached `W`; the writer should be dropped after an error.
#[derive(Debug)]
pub struct EncodeWriter<W: Write> {
    inner: W,
    encoder: Encoder,
    buf: Vec<u8>,
    written: u64,
}

impl<W: Write> EncodeWriter<W> {
    pub fn new(inner: W) -> Self {
        EncodeWriter {
            inner,
            encoder: Encoder::new(),
            buf: Vec::with_capacity(encoded_len(BLOCK_SIZE)),
            written: 0,
        }
    }

    /// Number of symbols handed to the inner writer so far.
    pub fn symbols_written(&self) -> u64 {
        self.written
    }

    /// Writes the trailing partial group and returns the inner writer and
    /// the total number of symbols written.
    pub fn finish(self) -> io::Result<(W, u64)> {
        let EncodeWriter {
            mut inner,
            encoder,
            mut buf,
            mut written,
        } = self;

        buf.clear();
        encoder.finish(&mut buf);
        inner.write_all(&buf)?;
        inner.flush()?;
        written += buf.len() as u64;

        Ok((inner, written))
    }
}

impl<W: Write> Write for EncodeWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let block = &data[..data.len().min(BLOCK_SIZE)];
        let before = self.encoder.clone();

        self.buf.clear();
        self.encoder.push_slice(block, &mut self.buf);
        if let Err(err) = self.inner.write_all(&self.buf) {
            self.encoder = before;
            return Err(err);
        }
        self.written += self.buf.len() as u64;

        Ok(block.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
