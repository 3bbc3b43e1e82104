//! Error types for huffpack operations.
//!
//! Every failure in the engine is reported synchronously to the immediate
//! caller as one of these typed conditions. Nothing is retried internally
//! and there is no partial-success mode: an operation either fully
//! succeeds or fails with exactly one of the variants below.

use std::io;
use thiserror::Error;

/// The main error type for huffpack operations.
#[derive(Debug, Error)]
pub enum HuffpackError {
    /// I/O error from an underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No data or frequencies were given to build from.
    #[error("Empty input: nothing to build a Huffman tree from")]
    EmptyInput,

    /// A byte was encoded that has no entry in the current code table.
    ///
    /// This can only happen when the table was built from a different,
    /// incompatible input.
    #[error("Symbol {symbol} (0x{symbol:02x}) is not in the code table")]
    SymbolNotInTable {
        /// The offending byte value.
        symbol: u8,
    },

    /// The decoder was fed something other than the two valid bit values.
    #[error("Invalid bit value {value}: expected 0 or 1")]
    InvalidBit {
        /// The rejected input value.
        value: u8,
    },

    /// A tree-dependent operation was invoked before a tree was built.
    #[error("Huffman tree is not initialized")]
    UninitializedTree,

    /// Malformed, truncated, or mismatched-magic compressed container.
    #[error("Invalid container: {message}")]
    InvalidContainer {
        /// Description of the framing violation.
        message: String,
    },

    /// A bit-level read ran past the end of the input.
    #[error("Unexpected end of input: expected {expected} more bits")]
    UnexpectedEof {
        /// Number of bits that were expected but not available.
        expected: usize,
    },
}

/// Result type alias for huffpack operations.
pub type Result<T> = std::result::Result<T, HuffpackError>;

impl HuffpackError {
    /// Create a symbol-not-in-table error.
    pub fn symbol_not_in_table(symbol: u8) -> Self {
        Self::SymbolNotInTable { symbol }
    }

    /// Create an invalid bit error.
    pub fn invalid_bit(value: u8) -> Self {
        Self::InvalidBit { value }
    }

    /// Create an invalid container error.
    pub fn invalid_container(message: impl Into<String>) -> Self {
        Self::InvalidContainer {
            message: message.into(),
        }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HuffpackError::symbol_not_in_table(0x41);
        assert!(err.to_string().contains("0x41"));

        let err = HuffpackError::invalid_bit(7);
        assert!(err.to_string().contains("expected 0 or 1"));

        let err = HuffpackError::invalid_container("magic mismatch");
        assert!(err.to_string().contains("magic mismatch"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: HuffpackError = io_err.into();
        assert!(matches!(err, HuffpackError::Io(_)));
    }
}
