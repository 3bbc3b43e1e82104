//! Stateful per-bit decoder.

use huffpack_core::error::{HuffpackError, Result};

use crate::tree::Node;

/// Bit-by-bit decoder session over a fixed tree.
///
/// The cursor starts at the root, advances left on bit 0 and right on bit
/// 1, and resets to the root each time it lands on a leaf and emits that
/// leaf's symbol. A session requires exclusive ownership (`&mut self` per
/// step), so concurrent decoding against one cursor is ruled out at
/// compile time; independent sessions over the same tree are fine.
///
/// Created via [`HuffmanTree::decoder`](crate::HuffmanTree::decoder).
#[derive(Debug)]
pub struct Decoder<'a> {
    root: &'a Node,
    cursor: &'a Node,
}

impl<'a> Decoder<'a> {
    pub(crate) fn new(root: &'a Node) -> Self {
        Self { root, cursor: root }
    }

    /// Consume one bit and advance the cursor.
    ///
    /// Returns `Some(symbol)` when the bit completes a code (the cursor
    /// has been reset to the root), `None` mid-traversal.
    ///
    /// When the root is itself a leaf (single-symbol alphabet), every
    /// valid bit emits that symbol without moving the cursor; the bit's
    /// value is deliberately not checked against the symbol's `0` code.
    ///
    /// # Errors
    ///
    /// [`InvalidBit`](HuffpackError::InvalidBit) for any value other than
    /// 0 or 1.
    pub fn step(&mut self, bit: u8) -> Result<Option<u8>> {
        if bit > 1 {
            return Err(HuffpackError::invalid_bit(bit));
        }

        if let Some(symbol) = self.root.symbol() {
            return Ok(Some(symbol));
        }

        let Some((left, right)) = self.cursor.children() else {
            // The tree is full and the cursor resets on every leaf, so it
            // only ever rests on internal nodes.
            unreachable!("decoder cursor rested on a leaf");
        };
        self.cursor = if bit == 0 { left } else { right };

        if let Some(symbol) = self.cursor.symbol() {
            self.cursor = self.root;
            return Ok(Some(symbol));
        }
        Ok(None)
    }

    /// Reset the cursor to the root, abandoning any partial traversal.
    pub fn reset(&mut self) {
        self.cursor = self.root;
    }

    /// Feed an entire bit sequence through the per-bit machine.
    ///
    /// Resets the cursor first and collects emitted symbols in order; an
    /// incomplete trailing code emits nothing.
    pub fn decode_all(&mut self, bits: &[u8]) -> Result<Vec<u8>> {
        self.reset();
        let mut output = Vec::new();
        for &bit in bits {
            if let Some(symbol) = self.step(bit)? {
                output.push(symbol);
            }
        }
        Ok(output)
    }
}
