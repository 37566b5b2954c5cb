//! Error types for Huffman string coding.

/// Error type for Huffman decode and string validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HuffmanError {
    /// The input is not a valid Huffman encoding: an undefined bit pattern
    /// (the EOS codeword) was found, or the input ended mid-codeword or with
    /// invalid padding.
    /// Fatal for the whole header block; there is no resynchronization.
    #[error("invalid huffman state")]
    InvalidState,

    /// Decoded bytes are not valid UTF-8.
    #[error("invalid utf-8 in decoded string")]
    InvalidUtf8,

    /// The requested input range lies outside the source buffer.
    #[error("range {offset}+{len} out of bounds for {available} bytes")]
    OutOfBounds {
        offset: usize,
        len: usize,
        available: usize,
    },
}

impl HuffmanError {
    /// Returns true if the encoded input itself was malformed.
    #[inline]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, HuffmanError::InvalidState)
    }

    /// Returns true if the decoded bytes failed UTF-8 validation.
    #[inline]
    pub fn is_invalid_utf8(&self) -> bool {
        matches!(self, HuffmanError::InvalidUtf8)
    }
}

impl From<std::str::Utf8Error> for HuffmanError {
    fn from(_: std::str::Utf8Error) -> Self {
        HuffmanError::InvalidUtf8
    }
}

impl From<std::string::FromUtf8Error> for HuffmanError {
    fn from(_: std::string::FromUtf8Error) -> Self {
        HuffmanError::InvalidUtf8
    }
}
