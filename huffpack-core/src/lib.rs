//! # Huffpack Core
//!
//! Core components for the huffpack compression library.
//!
//! This crate provides the building blocks the Huffman engine is layered
//! on top of:
//!
//! - [`bitio`]: MSB-first bit-level I/O for variable-length codes
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! Huffpack is designed as a small layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ CLI                                         │
//! │     file round-trips, table/freq inspection │
//! ├─────────────────────────────────────────────┤
//! │ Codec                                       │
//! │     tree builder, code table, encoder,      │
//! │     decoder, container format               │
//! ├─────────────────────────────────────────────┤
//! │ BitStream (this crate)                      │
//! │     BitReader/BitWriter, error types        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use huffpack_core::bitio::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b1011, 4);
//! let packed = writer.into_vec();
//!
//! let mut reader = BitReader::new(&packed);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1011);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitio;
pub mod error;

// Re-exports for convenience
pub use bitio::{BitReader, BitWriter};
pub use error::{HuffpackError, Result};
