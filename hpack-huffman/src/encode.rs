//! Huffman encoder: packs codewords MSB-first with no alignment between
//! symbols, then pads the final partial byte with the EOS prefix.

use bytes::BytesMut;

use crate::metrics;
use crate::table::{Codeword, codeword, encoded_len};

/// Write position inside the output region.
///
/// `remaining` is the number of free low-order bits in `out[offset]`, always
/// in `1..=8`. A value of 8 means the byte is untouched.
struct BitCursor {
    offset: usize,
    remaining: u8,
}

impl BitCursor {
    fn new() -> Self {
        Self {
            offset: 0,
            remaining: 8,
        }
    }

    /// OR `code` into `out` at the cursor. `out` must be zeroed past the cursor.
    #[inline]
    fn put(&mut self, out: &mut [u8], code: Codeword) {
        let Codeword { bits, nbits } = code;

        if nbits == self.remaining {
            out[self.offset] |= bits as u8;
            self.offset += 1;
            self.remaining = 8;
        } else if nbits < self.remaining {
            self.remaining -= nbits;
            out[self.offset] |= (bits << self.remaining) as u8;
        } else {
            // High bits finish the current byte.
            let mut left = nbits - self.remaining;
            out[self.offset] |= (bits >> left) as u8;
            self.offset += 1;

            // Whole middle bytes.
            while left >= 8 {
                left -= 8;
                out[self.offset] = (bits >> left) as u8;
                self.offset += 1;
            }

            // Low-order tail opens the next partial byte.
            if left > 0 {
                self.remaining = 8 - left;
                out[self.offset] |= (bits << self.remaining) as u8;
            } else {
                self.remaining = 8;
            }
        }
    }

    /// Fill the unused low bits of a partial final byte with ones.
    #[inline]
    fn pad(&self, out: &mut [u8]) {
        if self.remaining < 8 {
            out[self.offset] |= (1u8 << self.remaining) - 1;
        }
    }
}

/// Pack `data` into `out`, which must be exactly `encoded_len(data)` zero bytes.
fn pack(data: &[u8], out: &mut [u8]) {
    debug_assert_eq!(out.len(), encoded_len(data));

    let mut cursor = BitCursor::new();
    for &byte in data {
        cursor.put(out, codeword(byte));
    }
    cursor.pad(out);

    debug_assert_eq!(
        cursor.offset + usize::from(cursor.remaining < 8),
        out.len()
    );
}

/// Huffman-encode `data` and append it to `dst`.
///
/// Exactly `encoded_len(data)` bytes are appended and their count returned.
/// Only the newly claimed tail of `dst` is zeroed before packing; content
/// already in `dst` is left alone, so repeated encodes into one buffer stay
/// linear in the total output.
pub fn encode(data: &[u8], dst: &mut BytesMut) -> usize {
    let len = encoded_len(data);
    if len == 0 {
        return 0;
    }

    let start = dst.len();
    dst.resize(start + len, 0);
    pack(data, &mut dst[start..]);

    metrics::record_encode(data.len(), len);
    len
}

/// Huffman-encode `data` into a new vector.
pub fn encode_to_vec(data: &[u8]) -> Vec<u8> {
    let len = encoded_len(data);
    let mut out = vec![0u8; len];
    if len > 0 {
        pack(data, &mut out);
        metrics::record_encode(data.len(), len);
    }
    out
}
