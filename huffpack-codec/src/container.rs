//! The compressed container format.
//!
//! A compressed buffer is self-describing: it embeds the tree shape next
//! to the payload, so decompression needs no side-channel. All multi-byte
//! integers are big-endian and unsigned.
//!
//! | Offset       | Size    | Field                                   |
//! |--------------|---------|-----------------------------------------|
//! | 0            | 4       | magic `b"HUF1"`                         |
//! | 4            | 4       | tree-blob length in bytes               |
//! | 8            | treeLen | serialized tree, bit-packed, zero-padded|
//! | 8 + treeLen  | 4       | number of valid payload bits            |
//! | 12 + treeLen | rest    | payload, bit-packed, zero-padded        |
//!
//! The payload-bit count is needed because the payload's last byte is
//! padded; without it the decoder could emit phantom symbols from the
//! padding bits.

use huffpack_core::bitio::{BitReader, BitWriter};
use huffpack_core::error::{HuffpackError, Result};

use crate::tree::HuffmanTree;

/// Magic bytes identifying the container format and version.
pub const MAGIC: [u8; 4] = *b"HUF1";

/// Fixed framing overhead: magic, tree-blob length, payload-bit count.
pub const HEADER_LEN: usize = 12;

fn read_u32_be(data: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Compress a byte buffer into a self-describing container.
///
/// Builds the Huffman tree from the input itself, encodes the payload,
/// serializes the tree shape, and packs both bit streams byte-aligned
/// with trailing zero padding.
///
/// # Errors
///
/// [`EmptyInput`](HuffpackError::EmptyInput) for an empty buffer,
/// [`InvalidContainer`](HuffpackError::InvalidContainer) if a section
/// exceeds the format's u32 framing fields.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Err(HuffpackError::EmptyInput);
    }

    let mut tree = HuffmanTree::new();
    tree.build_from_data(data)?;

    let bits = tree.encode_bytes(data)?;
    let payload_bits = u32::try_from(bits.len()).map_err(|_| {
        HuffpackError::invalid_container("payload exceeds the format's bit-count field")
    })?;
    let mut payload = BitWriter::new();
    for &bit in &bits {
        payload.write_bit(bit == 1);
    }
    let payload = payload.into_vec();

    let (tree_blob, _) = tree.serialize()?;
    let tree_len = u32::try_from(tree_blob.len()).map_err(|_| {
        HuffpackError::invalid_container("tree blob exceeds the format's length field")
    })?;

    let mut output = Vec::with_capacity(HEADER_LEN + tree_blob.len() + payload.len());
    output.extend_from_slice(&MAGIC);
    output.extend_from_slice(&tree_len.to_be_bytes());
    output.extend_from_slice(&tree_blob);
    output.extend_from_slice(&payload_bits.to_be_bytes());
    output.extend_from_slice(&payload);
    Ok(output)
}

/// Decompress a container produced by [`compress`].
///
/// Validates the framing, rebuilds the tree from the embedded shape blob,
/// and feeds exactly the stated number of payload bits through the
/// decoder, discarding the padding.
///
/// # Errors
///
/// [`InvalidContainer`](HuffpackError::InvalidContainer) when the buffer
/// is shorter than the fixed framing, the magic does not match, the
/// stated tree-blob length runs past the buffer end, or the payload is
/// shorter than its stated bit count requires.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < HEADER_LEN {
        return Err(HuffpackError::invalid_container(format!(
            "{} bytes is shorter than the {HEADER_LEN} byte minimum",
            data.len()
        )));
    }
    if data[..4] != MAGIC {
        return Err(HuffpackError::invalid_container(format!(
            "magic mismatch: expected {MAGIC:02x?}, found {:02x?}",
            &data[..4]
        )));
    }

    let tree_len = read_u32_be(data, 4) as usize;
    let tree_end = 8 + tree_len;
    if tree_end + 4 > data.len() {
        return Err(HuffpackError::invalid_container(
            "tree blob length runs past the buffer end",
        ));
    }
    let (tree, _) = HuffmanTree::deserialize(&data[8..tree_end])?;

    let payload_bits = read_u32_be(data, tree_end) as usize;
    let payload = &data[tree_end + 4..];
    if payload.len() * 8 < payload_bits {
        return Err(HuffpackError::invalid_container(
            "payload is shorter than its stated bit count",
        ));
    }

    let mut decoder = tree.decoder()?;
    let mut reader = BitReader::new(payload);
    let mut output = Vec::new();
    for _ in 0..payload_bits {
        if let Some(symbol) = decoder.step(reader.read_bit()?)? {
            output.push(symbol);
        }
    }
    Ok(output)
}
