//! # ASCII85 Encoding
//!
//! ascii85-codec implements the Adobe flavour of ASCII85 encoding. Arbitrary
//! bytes are mapped to the characters in range `b'!'..=b'u'`, four input bytes
//! to five symbols. For more details on the encoding scheme refer to
//! [Wikipedia](https://en.wikipedia.org/wiki/Ascii85).
//!
//! The character `z` encodes four zero bytes and whitespace is skipped while
//! decoding. No `<~` / `~>` delimiters are written or accepted, and encoded
//! output is never line-wrapped.
//!
//! Both directions work on in-memory buffers and on `std::io` streams. The
//! stream forms keep at most one group of state between reads, so payloads of
//! any size can be piped through them.
//!
//! ## Decode Example
//!
//! ```
//! use ascii85_codec::decode;
//!
//! let decoded = decode(b"87cURD_*#4DfTZ)+T").unwrap();
//! assert_eq!(decoded, b"Hello, World!");
//! ```
//!
//! ## Encode Example
//!
//! ```
//! use ascii85_codec::encode;
//!
//! assert_eq!(encode(b"Hello, World!"), "87cURD_*#4DfTZ)+T");
//! assert_eq!(encode(&[0; 8]), "zz");
//! ```
//!
//! ## Stream Example
//!
//! ```
//! use ascii85_codec::{decode_stream, encode_stream};
//!
//! let mut encoded = Vec::new();
//! encode_stream(&b"Man is distinguished"[..], &mut encoded)?;
//!
//! let mut decoded = Vec::new();
//! decode_stream(&encoded[..], &mut decoded)?;
//! assert_eq!(decoded, b"Man is distinguished");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod decode;
mod encode;
mod error;
mod stream;

pub use decode::{decode, decode_or_empty, decode_with, Commit, DecodeOptions, Decoder};
pub use encode::{encode, encode_to_vec, encode_word, encoded_len, EncodeWriter, Encoder};
pub use error::{DecodeError, StreamError};
pub use stream::{decode_stream, decode_stream_with, encode_stream};

/// The first symbol of the alphabet, digit 0.
const SYM_FIRST: u8 = b'!';

/// The last symbol of the alphabet, digit 84. Used to pad a trailing group.
const SYM_LAST: u8 = b'u';

/// The character `z` in the ASCII table represents 4 null bytes (0x0000_0000).
const NULL_WORD: u8 = b'z';

/// Block size used by the stream drivers.
const BLOCK_SIZE: usize = 8 * 1024;
