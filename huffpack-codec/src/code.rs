//! Symbol-to-code mapping and the stream encoder.

use huffpack_core::error::{HuffpackError, Result};

use crate::tree::Node;

/// Mapping from byte value to its prefix-free code.
///
/// Codes are bit sequences (each element 0 or 1), dense-indexed by symbol.
/// The table holds exactly one non-empty code per distinct symbol of the
/// tree it was derived from, and no code is a prefix of another. The
/// degenerate single-symbol alphabet maps its symbol to the single bit `0`.
#[derive(Debug, Clone)]
pub struct CodeTable {
    /// Code per symbol; an empty entry means the symbol has no code.
    codes: Vec<Vec<u8>>,
}

impl Default for CodeTable {
    fn default() -> Self {
        Self {
            codes: vec![Vec::new(); 256],
        }
    }
}

impl CodeTable {
    /// Build the table by depth-first traversal: 0 when descending left,
    /// 1 when descending right; a leaf's accumulated path is its code.
    pub(crate) fn from_node(root: &Node) -> Self {
        let mut table = Self::default();
        Self::collect(root, Vec::new(), &mut table.codes);
        table
    }

    fn collect(node: &Node, prefix: Vec<u8>, codes: &mut [Vec<u8>]) {
        if let Some(symbol) = node.symbol() {
            // A single-leaf root has an empty path; its code is `0`.
            codes[symbol as usize] = if prefix.is_empty() { vec![0] } else { prefix };
        } else if let Some((left, right)) = node.children() {
            let mut left_prefix = prefix.clone();
            left_prefix.push(0);
            Self::collect(left, left_prefix, codes);

            let mut right_prefix = prefix;
            right_prefix.push(1);
            Self::collect(right, right_prefix, codes);
        }
    }

    /// The code for `symbol`, or `None` if it has no entry.
    pub fn code(&self, symbol: u8) -> Option<&[u8]> {
        let code = self.codes[symbol as usize].as_slice();
        if code.is_empty() { None } else { Some(code) }
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|code| !code.is_empty()).count()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|code| code.is_empty())
    }

    /// Iterate over `(symbol, code)` entries in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[u8])> {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, code)| !code.is_empty())
            .map(|(symbol, code)| (symbol as u8, code.as_slice()))
    }

    /// Encode a byte sequence as the concatenation of per-byte codes.
    ///
    /// # Errors
    ///
    /// [`SymbolNotInTable`](HuffpackError::SymbolNotInTable) if any input
    /// byte has no code. This can only happen when the table was built
    /// from a different, incompatible input.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut bits = Vec::new();
        for &byte in data {
            let code = self
                .code(byte)
                .ok_or_else(|| HuffpackError::symbol_not_in_table(byte))?;
            bits.extend_from_slice(code);
        }
        Ok(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::HuffmanTree;

    fn table_for(data: &[u8]) -> CodeTable {
        let mut tree = HuffmanTree::new();
        tree.build_from_data(data).unwrap();
        tree.code_table().clone()
    }

    #[test]
    fn test_one_entry_per_distinct_symbol() {
        let table = table_for(b"MISSISSIPPI");
        assert_eq!(table.len(), 4);
        assert!(!table.is_empty());
        assert!(table.code(b'X').is_none());
    }

    #[test]
    fn test_no_code_is_empty() {
        let table = table_for(b"MISSISSIPPI");
        for (_, code) in table.iter() {
            assert!(!code.is_empty());
        }
    }

    #[test]
    fn test_prefix_free_property() {
        let data: Vec<u8> = (0u8..=40).flat_map(|b| vec![b; b as usize + 1]).collect();
        let table = table_for(&data);

        let entries: Vec<(u8, &[u8])> = table.iter().collect();
        for (i, &(_, a)) in entries.iter().enumerate() {
            for &(_, b) in entries.iter().skip(i + 1) {
                assert!(!a.starts_with(b) && !b.starts_with(a));
            }
        }
    }

    #[test]
    fn test_encode_concatenates_in_input_order() {
        let table = table_for(b"MISSISSIPPI");
        let bits = table.encode(b"SI").unwrap();
        let mut expected = table.code(b'S').unwrap().to_vec();
        expected.extend_from_slice(table.code(b'I').unwrap());
        assert_eq!(bits, expected);
    }

    #[test]
    fn test_encode_unknown_symbol_fails() {
        let table = table_for(b"MISSISSIPPI");
        assert!(matches!(
            table.encode(b"MISSOURI"),
            Err(HuffpackError::SymbolNotInTable { symbol: b'O' })
        ));
    }

    #[test]
    fn test_iter_is_sorted_by_symbol() {
        let table = table_for(b"MISSISSIPPI");
        let symbols: Vec<u8> = table.iter().map(|(symbol, _)| symbol).collect();
        assert_eq!(symbols, vec![b'I', b'M', b'P', b'S']);
    }
}
