//! Huffman decoder driven by a nibble transition table.
//!
//! The HPACK code tree has 256 internal nodes, so a decoder state fits in a
//! `u8`. For every (state, 4-bit input) pair the table holds the next state,
//! the symbol completed along the way (at most one, since the shortest code is
//! 5 bits) and flags. Decoding a byte is two lookups.

use std::sync::OnceLock;

use bytes::{BufMut, BytesMut};
use tracing::debug;

use crate::error::HuffmanError;
use crate::metrics;
use crate::table::{Codeword, EOS_SYMBOL, symbol};

/// A byte was completed on this transition and must be emitted.
const EMITS: u8 = 0x01;
/// The next state is a legal place for the input to end.
const ACCEPTING: u8 = 0x02;
/// The nibble cannot follow this state; the input is malformed.
const FAILURE: u8 = 0x04;

const STATES: usize = 256;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Transition {
    next: u8,
    symbol: u8,
    flags: u8,
}

struct DecodeTable {
    rows: Box<[[Transition; 16]]>,
}

static DECODE_TABLE: OnceLock<DecodeTable> = OnceLock::new();

fn decode_table() -> &'static DecodeTable {
    DECODE_TABLE.get_or_init(DecodeTable::build)
}

// -- Table construction --

#[derive(Clone, Copy)]
enum Child {
    Empty,
    Node(u8),
    Leaf(u16),
}

struct CodeTree {
    children: Vec<[Child; 2]>,
    /// For each internal node: its depth if the path from the root is all ones.
    ones_depth: Vec<Option<u8>>,
}

impl CodeTree {
    fn build() -> Self {
        let mut tree = CodeTree {
            children: vec![[Child::Empty; 2]],
            ones_depth: vec![Some(0)],
        };

        for sym in 0..=EOS_SYMBOL {
            let Codeword { bits, nbits } = symbol(sym);
            let mut node = 0usize;

            for shift in (1..nbits).rev() {
                let bit = ((bits >> shift) & 1) as usize;
                let child = tree.children[node][bit];
                node = match child {
                    Child::Node(next) => next as usize,
                    _ => tree.push_child(node, bit),
                };
            }

            tree.children[node][(bits & 1) as usize] = Child::Leaf(sym as u16);
        }

        debug_assert_eq!(tree.children.len(), STATES);
        tree
    }

    fn push_child(&mut self, parent: usize, bit: usize) -> usize {
        let idx = self.children.len();
        debug_assert!(idx < STATES, "code tree exceeds {STATES} internal nodes");

        let ones = match self.ones_depth[parent] {
            Some(depth) if bit == 1 => Some(depth + 1),
            _ => None,
        };
        self.children.push([Child::Empty; 2]);
        self.ones_depth.push(ones);
        self.children[parent][bit] = Child::Node(idx as u8);
        idx
    }

    /// Ending is legal on a symbol boundary or after 1-7 bits of EOS prefix.
    fn accepting(&self, node: usize) -> bool {
        node == 0 || matches!(self.ones_depth[node], Some(depth) if depth <= 7)
    }

    fn transition(&self, state: usize, nibble: u8) -> Transition {
        let mut node = state;
        let mut emitted = None;

        for shift in (0..4).rev() {
            let bit = ((nibble >> shift) & 1) as usize;
            match self.children[node][bit] {
                Child::Node(next) => node = next as usize,
                Child::Leaf(sym) if (sym as usize) < EOS_SYMBOL => {
                    debug_assert!(emitted.is_none());
                    emitted = Some(sym as u8);
                    node = 0;
                }
                // EOS inside a string, or a hole in the tree.
                _ => {
                    return Transition {
                        next: 0,
                        symbol: 0,
                        flags: FAILURE,
                    };
                }
            }
        }

        let mut flags = 0;
        if emitted.is_some() {
            flags |= EMITS;
        }
        if self.accepting(node) {
            flags |= ACCEPTING;
        }

        Transition {
            next: node as u8,
            symbol: emitted.unwrap_or(0),
            flags,
        }
    }
}

impl DecodeTable {
    fn build() -> Self {
        let tree = CodeTree::build();
        let rows = (0..tree.children.len())
            .map(|state| {
                let mut row = [Transition::default(); 16];
                for (nibble, entry) in row.iter_mut().enumerate() {
                    *entry = tree.transition(state, nibble as u8);
                }
                row
            })
            .collect();
        DecodeTable { rows }
    }

    #[inline]
    fn lookup(&self, state: u8, nibble: u8) -> Transition {
        self.rows[state as usize][(nibble & 0x0f) as usize]
    }
}

// -- Walker --

/// Incremental decoder state: the current table state and whether the input
/// may legally end here.
///
/// A fresh decoder is not final; an empty input is handled by the callers
/// before any nibble is fed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoder {
    state: u8,
    accepting: bool,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one 4-bit input (the high bits of `nibble` are ignored).
    ///
    /// Returns the byte completed by this nibble, if any.
    #[inline]
    pub fn decode4(&mut self, nibble: u8) -> Result<Option<u8>, HuffmanError> {
        self.step(decode_table(), nibble)
    }

    /// Returns true if the input fed so far forms a complete encoding.
    #[inline]
    pub fn is_final(&self) -> bool {
        self.accepting
    }

    #[inline]
    fn step(&mut self, table: &DecodeTable, nibble: u8) -> Result<Option<u8>, HuffmanError> {
        let t = table.lookup(self.state, nibble);
        if t.flags & FAILURE != 0 {
            return Err(HuffmanError::InvalidState);
        }
        self.state = t.next;
        self.accepting = t.flags & ACCEPTING != 0;
        Ok((t.flags & EMITS != 0).then_some(t.symbol))
    }
}

// -- Public API --

/// Decode a Huffman-encoded string and append the plain bytes to `dst`.
///
/// Returns the number of bytes appended. On error `dst` is restored to its
/// length at entry. An empty input yields `Ok(0)`.
pub fn decode(src: &[u8], dst: &mut BytesMut) -> Result<usize, HuffmanError> {
    if src.is_empty() {
        return Ok(0);
    }

    let table = decode_table();
    let start = dst.len();
    // Shortest code is 5 bits.
    dst.reserve(src.len().saturating_mul(8) / 5);

    let mut decoder = Decoder::new();
    for (offset, &byte) in src.iter().enumerate() {
        for nibble in [byte >> 4, byte & 0x0f] {
            match decoder.step(table, nibble) {
                Ok(Some(b)) => dst.put_u8(b),
                Ok(None) => {}
                Err(err) => {
                    return Err(fail(err, dst, start, src.len(), offset, "undefined code"));
                }
            }
        }
    }

    if !decoder.is_final() {
        return Err(fail(
            HuffmanError::InvalidState,
            dst,
            start,
            src.len(),
            src.len(),
            "incomplete code or invalid padding",
        ));
    }

    let produced = dst.len() - start;
    metrics::record_decode(src.len(), produced);
    Ok(produced)
}

/// Decode `len` bytes of `src` starting at `offset`, appending to `dst`.
///
/// A zero `len` returns `Ok(0)` without touching `src`.
pub fn decode_at(
    src: &[u8],
    offset: usize,
    len: usize,
    dst: &mut BytesMut,
) -> Result<usize, HuffmanError> {
    if len == 0 {
        return Ok(0);
    }

    let input = offset
        .checked_add(len)
        .and_then(|end| src.get(offset..end))
        .ok_or(HuffmanError::OutOfBounds {
            offset,
            len,
            available: src.len(),
        })?;

    decode(input, dst)
}

/// Decode a Huffman-encoded string into a new vector.
pub fn decode_to_vec(src: &[u8]) -> Result<Vec<u8>, HuffmanError> {
    let mut dst = BytesMut::new();
    decode(src, &mut dst)?;
    Ok(dst.to_vec())
}

/// Check that decoded header bytes are UTF-8.
///
/// The decode functions work on raw bytes; callers that need text run this
/// as a separate step.
pub fn validate_utf8(bytes: &[u8]) -> Result<&str, HuffmanError> {
    Ok(std::str::from_utf8(bytes)?)
}

/// Decode a Huffman-encoded string and validate the result as UTF-8.
pub fn decode_string(src: &[u8]) -> Result<String, HuffmanError> {
    let bytes = decode_to_vec(src)?;
    Ok(String::from_utf8(bytes)?)
}

fn fail(
    err: HuffmanError,
    dst: &mut BytesMut,
    start: usize,
    input_len: usize,
    offset: usize,
    reason: &'static str,
) -> HuffmanError {
    dst.truncate(start);
    metrics::record_decode_error();
    debug!(input_len, offset, reason, "huffman decode failed");
    err
}
