//! Huffman codec metrics.
//!
//! Process-wide counters for encode/decode volume and decode failures,
//! exposed through metriken when the `metrics` feature is enabled. Without
//! the feature the recording hooks compile to nothing.

#[cfg(feature = "metrics")]
use metriken::{Counter, metric};

// ── Encode ───────────────────────────────────────────────────────

#[cfg(feature = "metrics")]
#[metric(
    name = "hpack_huffman/encode/calls",
    description = "Non-empty strings Huffman-encoded"
)]
pub static ENCODE_CALLS: Counter = Counter::new();

#[cfg(feature = "metrics")]
#[metric(
    name = "hpack_huffman/encode/bytes_in",
    description = "Plain bytes consumed by the encoder"
)]
pub static ENCODE_BYTES_IN: Counter = Counter::new();

#[cfg(feature = "metrics")]
#[metric(
    name = "hpack_huffman/encode/bytes_out",
    description = "Huffman bytes produced by the encoder"
)]
pub static ENCODE_BYTES_OUT: Counter = Counter::new();

// ── Decode ───────────────────────────────────────────────────────

#[cfg(feature = "metrics")]
#[metric(
    name = "hpack_huffman/decode/calls",
    description = "Non-empty Huffman strings decoded"
)]
pub static DECODE_CALLS: Counter = Counter::new();

#[cfg(feature = "metrics")]
#[metric(
    name = "hpack_huffman/decode/bytes_in",
    description = "Huffman bytes consumed by the decoder"
)]
pub static DECODE_BYTES_IN: Counter = Counter::new();

#[cfg(feature = "metrics")]
#[metric(
    name = "hpack_huffman/decode/bytes_out",
    description = "Plain bytes produced by the decoder"
)]
pub static DECODE_BYTES_OUT: Counter = Counter::new();

#[cfg(feature = "metrics")]
#[metric(
    name = "hpack_huffman/decode/errors",
    description = "Huffman strings rejected as malformed"
)]
pub static DECODE_ERRORS: Counter = Counter::new();

// ── Recording hooks ──────────────────────────────────────────────

#[inline]
pub(crate) fn record_encode(input: usize, output: usize) {
    #[cfg(feature = "metrics")]
    {
        ENCODE_CALLS.increment();
        ENCODE_BYTES_IN.add(input as u64);
        ENCODE_BYTES_OUT.add(output as u64);
    }
    #[cfg(not(feature = "metrics"))]
    let _ = (input, output);
}

#[inline]
pub(crate) fn record_decode(input: usize, output: usize) {
    #[cfg(feature = "metrics")]
    {
        DECODE_CALLS.increment();
        DECODE_BYTES_IN.add(input as u64);
        DECODE_BYTES_OUT.add(output as u64);
    }
    #[cfg(not(feature = "metrics"))]
    let _ = (input, output);
}

#[inline]
pub(crate) fn record_decode_error() {
    #[cfg(feature = "metrics")]
    DECODE_ERRORS.increment();
}
