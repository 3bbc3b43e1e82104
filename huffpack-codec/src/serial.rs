//! Bit-level tree shape serialization.
//!
//! The container header stores the tree as a compact pre-order encoding,
//! independent of frequencies (they are not needed to decode payload data
//! and are dropped):
//!
//! - internal node: bit `0`, then the left subtree, then the right
//! - leaf: bit `1`, then the symbol as 8 bits, most significant first
//!
//! The encoding is self-terminating: a decoder knows it is done when the
//! recursion unwinds, so no length prefix is needed to parse it. The
//! number of bits consumed is still reported, and the container stores a
//! byte length alongside for fast slicing.

use huffpack_core::bitio::{BitReader, BitWriter};
use huffpack_core::error::Result;

use crate::tree::Node;

/// Serialize a tree into zero-padded bytes plus the meaningful bit count.
///
/// The bit count is shape-determined: one bit per internal node plus nine
/// per leaf.
pub fn serialize_tree(root: &Node) -> (Vec<u8>, u64) {
    let mut writer = BitWriter::new();
    write_node(root, &mut writer);
    let bits = writer.bits_written();
    (writer.into_vec(), bits)
}

fn write_node(node: &Node, writer: &mut BitWriter) {
    if let Some(symbol) = node.symbol() {
        writer.write_bit(true);
        writer.write_bits(u32::from(symbol), 8);
    } else if let Some((left, right)) = node.children() {
        writer.write_bit(false);
        write_node(left, writer);
        write_node(right, writer);
    }
}

/// Rebuild a tree from its pre-order encoding.
///
/// Returns the root and the number of bits consumed; trailing padding
/// bits are left unread. Node frequencies come back as 0.
///
/// # Errors
///
/// [`UnexpectedEof`](huffpack_core::HuffpackError::UnexpectedEof) if the
/// blob ends mid-tree.
pub fn deserialize_tree(blob: &[u8]) -> Result<(Node, u64)> {
    let mut reader = BitReader::new(blob);
    let root = read_node(&mut reader)?;
    Ok((root, reader.bits_read()))
}

fn read_node(reader: &mut BitReader<'_>) -> Result<Node> {
    if reader.read_bit()? == 1 {
        let symbol = reader.read_bits(8)? as u8;
        Ok(Node::leaf(0, symbol))
    } else {
        let left = read_node(reader)?;
        let right = read_node(reader)?;
        Ok(Node::internal(left, right))
    }
}
