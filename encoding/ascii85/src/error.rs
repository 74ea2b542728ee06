use std::io;

use thiserror::Error;

/// Reasons an input is rejected by the decoder.
///
/// Offsets count every input byte, whitespace included, from the start of
/// the decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A byte that is neither whitespace, `z`, nor in `b'!'..=b'u'`.
    #[error("invalid ASCII85 character {byte:#04x} at offset {offset}")]
    InvalidCharacter { byte: u8, offset: u64 },

    /// `z` appeared while 1 to 4 symbols of a group were pending.
    #[error("character 'z' inside a group at offset {offset}")]
    MisplacedZeroShorthand { offset: u64 },

    /// Exactly one symbol was left over at the end of the input.
    #[error("incomplete trailing group: single symbol at offset {offset}")]
    IncompleteTrailingGroup { offset: u64 },

    /// A complete group of five `!`, the long form of `z`.
    #[error("suspicious group of five '!' characters ending at offset {offset}")]
    SuspiciousDegenerateGroup { offset: u64 },
}

impl DecodeError {
    /// Offset of the input byte the error was detected at.
    pub fn offset(&self) -> u64 {
        match *self {
            DecodeError::InvalidCharacter { offset, .. }
            | DecodeError::MisplacedZeroShorthand { offset }
            | DecodeError::IncompleteTrailingGroup { offset }
            | DecodeError::SuspiciousDegenerateGroup { offset } => offset,
        }
    }
}

/// Failure of a stream decode: either the channel or the data.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid ASCII85 data: {0}")]
    Decode(#[from] DecodeError),
}

impl StreamError {
    /// The decode error, if the data rather than the channel was at fault.
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            StreamError::Decode(err) => Some(err),
            StreamError::Io(_) => None,
        }
    }
}
