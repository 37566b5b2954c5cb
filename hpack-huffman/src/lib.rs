//! HPACK Huffman string coding (RFC 7541 Section 5.2, Appendix B).
//!
//! This crate compresses and decompresses individual header name/value
//! strings with the fixed HPACK Huffman code. It is a sans-IO primitive: the
//! enclosing HPACK codec owns integer coding, header representations and the
//! dynamic table, and decides which strings are worth Huffman-encoding.
//!
//! # Architecture
//!
//! ```text
//!   header string bytes              Huffman string literal
//!          |                                  |
//!   +------v------+                    +------v------+
//!   | encode      |  codeword table    | decode      |  nibble transition
//!   | bit packer  |  (static)          | FSM walker  |  table (built once)
//!   +------+------+                    +------+------+
//!          |                                  |
//!   BytesMut tail (grown + zeroed)     BytesMut tail (appended)
//! ```
//!
//! Both tables are immutable after initialization and safe to share between
//! threads. Encode and decode keep no state between calls.
//!
//! # Example
//!
//! ```rust
//! use bytes::BytesMut;
//! use hpack_huffman::{decode, encode, encoded_len};
//!
//! let mut buf = BytesMut::new();
//! let n = encode(b"www.example.com", &mut buf);
//! assert_eq!(n, encoded_len(b"www.example.com"));
//! assert_eq!(&buf[..], b"\xf1\xe3\xc2\xe5\xf2\x3a\x6b\xa0\xab\x90\xf4\xff");
//!
//! let mut out = BytesMut::new();
//! decode(&buf, &mut out)?;
//! assert_eq!(&out[..], b"www.example.com");
//! # Ok::<(), hpack_huffman::HuffmanError>(())
//! ```

pub mod decode;
pub mod encode;
pub mod error;
pub mod metrics;
mod table;

pub use decode::{Decoder, decode, decode_at, decode_string, decode_to_vec, validate_utf8};
pub use encode::{encode, encode_to_vec};
pub use error::HuffmanError;
pub use table::{Codeword, EOS, code_len, codeword, encoded_len};
