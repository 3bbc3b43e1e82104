//! # Huffpack Codec: Byte-Oriented Huffman Compression
//!
//! This crate builds optimal prefix-free codes from byte frequencies,
//! encodes/decodes byte streams against them, and defines a
//! self-describing container that embeds the code's tree shape alongside
//! the encoded payload, so decompression needs no external side-channel.
//!
//! ## Features
//!
//! - **Pure Rust**: no C dependencies, `#![forbid(unsafe_code)]`
//! - **Deterministic**: equal-frequency ties are broken by a documented
//!   rule, so the same input always yields the same container
//! - **Self-describing containers**: magic, length-prefixed tree blob,
//!   valid-bit count, payload
//! - **Per-bit decoding**: an explicit cursor state machine, usable one
//!   bit at a time or in bulk
//!
//! ## Container format
//!
//! All multi-byte integers are big-endian:
//!
//! ```text
//! +-------+----------------+-----------+-------------------+---------+
//! | magic | tree len (u32) | tree blob | payload bits (u32)| payload |
//! +-------+----------------+-----------+-------------------+---------+
//! ```
//!
//! Both bit-packed sections are zero-padded to a byte boundary; the
//! valid-bit count tells the decoder where the payload really ends.
//!
//! ## Example
//!
//! ```rust
//! use huffpack_codec::{compress, decompress};
//!
//! let original = b"MISSISSIPPI";
//! let compressed = compress(original).unwrap();
//! let decompressed = decompress(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```
//!
//! Lower-level pieces are exposed for inspection and incremental use:
//!
//! ```rust
//! use huffpack_codec::HuffmanTree;
//!
//! let mut tree = HuffmanTree::new();
//! tree.build_from_data(b"MISSISSIPPI").unwrap();
//!
//! // The most frequent symbols get the shortest codes.
//! let table = tree.code_table();
//! assert_eq!(table.code(b'S').unwrap().len(), 1);
//! assert_eq!(table.code(b'M').unwrap().len(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod code;
mod container;
mod decoder;
mod serial;
mod tree;

pub use code::CodeTable;
pub use container::{HEADER_LEN, MAGIC, compress, decompress};
pub use decoder::Decoder;
pub use serial::{deserialize_tree, serialize_tree};
pub use tree::{FrequencyTable, HuffmanTree, Node, count_frequencies};
