use log::warn;

use crate::{DecodeError, NULL_WORD, SYM_FIRST, SYM_LAST};

/// Digit appended to a trailing group to fill it up to 5 symbols.
const PAD_DIGIT: u8 = SYM_LAST - SYM_FIRST;

/// Maps an ASCII character to a number
const fn to_number(byte: u8) -> Option<u8> {
    match byte {
        b @ SYM_FIRST..=SYM_LAST => Some(b - SYM_FIRST),
        _ => None,
    }
}

const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Decodes 5 ASCII85 digits to 4 bytes.
///
/// Assumes that the 5 bytes are already mapped to numbers using `to_number`.
/// Groups above `u32::MAX` (e.g. `uuuuu`) wrap around.
fn decode_word([a, b, c, d, e]: [u8; 5]) -> [u8; 4] {
    let q = [b, c, d, e]
        .iter()
        .fold(a as u32, |q, &x| q.wrapping_mul(85).wrapping_add(x as u32));
    q.to_be_bytes()
}

/// When a stream decode hands its output to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// Stage all output and write it only once the whole input is valid.
    Atomic,
    /// Write output block by block; a failure may leave earlier blocks in
    /// the sink.
    Incremental,
}

impl Default for Commit {
    fn default() -> Self {
        Commit::Atomic
    }
}

/// Decoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Reject `!!!!!`, the long form of an all-zero word.
    pub reject_degenerate_groups: bool,
    /// Only used by the stream forms.
    pub commit: Commit,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            reject_degenerate_groups: true,
            commit: Commit::default(),
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject_degenerate_groups(mut self, reject: bool) -> Self {
        self.reject_degenerate_groups = reject;
        self
    }

    pub fn commit(mut self, commit: Commit) -> Self {
        self.commit = commit;
        self
    }
}

/// Incremental ASCII85 decoder.
///
/// Feed it bytes with [`push`](Decoder::push) or
/// [`push_slice`](Decoder::push_slice) and end with
/// [`finish`](Decoder::finish). It holds at most four pending symbols.
/// Once an error was returned the decoder should be dropped.
#[derive(Debug, Clone)]
pub struct Decoder {
    group: [u8; 5],
    len: usize,
    offset: u64,
    last_symbol: u64,
    reject_degenerate_groups: bool,
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder::with_options(&DecodeOptions::default())
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: &DecodeOptions) -> Self {
        Decoder {
            group: [0; 5],
            len: 0,
            offset: 0,
            last_symbol: 0,
            reject_degenerate_groups: options.reject_degenerate_groups,
        }
    }

    /// Number of symbols of the current group seen so far.
    pub fn pending(&self) -> usize {
        self.len
    }

    /// Number of input bytes consumed, whitespace included.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Consumes one input byte, appending decoded bytes to `out`.
    pub fn push(&mut self, byte: u8, out: &mut Vec<u8>) -> Result<(), DecodeError> {
        let offset = self.offset;
        self.offset += 1;

        match byte {
            b if is_whitespace(b) => Ok(()),
            NULL_WORD if self.len == 0 => {
                out.extend_from_slice(&[0; 4]);
                Ok(())
            }
            NULL_WORD => Err(DecodeError::MisplacedZeroShorthand { offset }),
            b => {
                let digit =
                    to_number(b).ok_or(DecodeError::InvalidCharacter { byte: b, offset })?;
                self.group[self.len] = digit;
                self.len += 1;
                self.last_symbol = offset;

                if self.len == 5 {
                    self.len = 0;
                    self.check_group(&self.group, offset)?;
                    out.extend_from_slice(&decode_word(self.group));
                }
                Ok(())
            }
        }
    }

    /// Consumes `data`, stopping at the first error.
    pub fn push_slice(&mut self, data: &[u8], out: &mut Vec<u8>) -> Result<(), DecodeError> {
        for &b in data {
            self.push(b, out)?;
        }
        Ok(())
    }

    /// Decodes the pending trailing group: M symbols give M - 1 bytes.
    pub fn finish(self, out: &mut Vec<u8>) -> Result<(), DecodeError> {
        match self.len {
            0 => Ok(()),
            1 => Err(DecodeError::IncompleteTrailingGroup {
                offset: self.last_symbol,
            }),
            n => {
                let mut group = [PAD_DIGIT; 5];
                group[..n].copy_from_slice(&self.group[..n]);
                self.check_group(&group, self.last_symbol)?;
                out.extend_from_slice(&decode_word(group)[..n - 1]);
                Ok(())
            }
        }
    }

    /// Only `z` may spell an all-zero word; `!!!!!` is refused.
    fn check_group(&self, group: &[u8; 5], offset: u64) -> Result<(), DecodeError> {
        if self.reject_degenerate_groups && *group == [0; 5] {
            Err(DecodeError::SuspiciousDegenerateGroup { offset })
        } else {
            Ok(())
        }
    }
}

/// Decodes ASCII85 encoded data with the given options.
pub fn decode_with(data: &[u8], options: &DecodeOptions) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity((data.len() + 4) / 5 * 4);
    let mut decoder = Decoder::with_options(options);
    decoder.push_slice(data, &mut out)?;
    decoder.finish(&mut out)?;
    Ok(out)
}

/// Decodes ASCII85 encoded data.
///
/// Whitespace is skipped anywhere in the input.
pub fn decode(data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_with(data, &DecodeOptions::default())
}

/// Like [`decode`], but invalid input yields an empty vector.
///
/// The cause is logged at `warn` level.
pub fn decode_or_empty(data: &[u8]) -> Vec<u8> {
    match decode(data) {
        Ok(out) => out,
        Err(err) => {
            warn!("discarding invalid ASCII85 input: {}", err);
            Vec::new()
        }
    }
}
