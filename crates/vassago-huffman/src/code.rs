//! Code table derivation.

use crate::frequency::{FrequencyTable, NUM_SYMBOLS};
use crate::tree::{HuffmanTree, Node, NodeId};

/// Widest code the table can hold.
///
/// With 32-bit counts the total weight stays below 2^40, which bounds the
/// tree depth far below this.
pub const MAX_CODE_LEN: u8 = 64;

/// Bit pattern and length for one symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Code {
    /// Code bits, right-aligned; the first bit emitted is bit `len - 1`.
    pub bits: u64,
    /// Number of bits; 0 means the symbol has no code.
    pub len: u8,
}

impl Code {
    /// True if a code is assigned.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.len > 0
    }

    /// True if `self` is a bit-prefix of `other` (or equal to it).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        if self.len > other.len {
            return false;
        }
        let shift = other.len - self.len;
        // shift can reach 64 only for an unassigned self, which prefixes everything
        other.bits.checked_shr(shift as u32).unwrap_or(0) == self.bits
    }
}

/// Per-symbol codes derived from a tree.
#[derive(Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Code; NUM_SYMBOLS],
}

impl CodeTable {
    /// Derive codes from a tree, or an empty table when there is no tree.
    pub fn from_tree(tree: Option<&HuffmanTree>) -> Self {
        let mut codes = [Code::default(); NUM_SYMBOLS];
        if let Some(tree) = tree {
            assign(tree, tree.root(), 0, 0, &mut codes);
        }
        Self { codes }
    }

    /// Code for `symbol`.
    #[inline]
    pub fn get(&self, symbol: u8) -> Code {
        self.codes[symbol as usize]
    }

    /// Assigned codes in ascending symbol order.
    pub fn iter_assigned(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, code)| code.is_assigned())
            .map(|(symbol, &code)| (symbol as u8, code))
    }

    /// Shortest assigned code length, 0 if none.
    pub fn min_len(&self) -> u8 {
        self.iter_assigned().map(|(_, c)| c.len).min().unwrap_or(0)
    }

    /// Longest assigned code length, 0 if none.
    pub fn max_len(&self) -> u8 {
        self.iter_assigned().map(|(_, c)| c.len).max().unwrap_or(0)
    }

    /// Payload size in bits for data with the given frequencies.
    pub fn encoded_bits(&self, freq: &FrequencyTable) -> u64 {
        freq.iter_nonzero()
            .map(|(symbol, count)| count as u64 * self.get(symbol).len as u64)
            .sum()
    }

    /// Check that no assigned code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let assigned: Vec<Code> = self.iter_assigned().map(|(_, c)| c).collect();
        assigned.iter().enumerate().all(|(i, a)| {
            assigned
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !a.is_prefix_of(b))
        })
    }
}

impl std::fmt::Debug for CodeTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.iter_assigned().map(|(symbol, code)| {
                let bits = format!("{:0width$b}", code.bits, width = code.len as usize);
                (symbol, bits)
            }))
            .finish()
    }
}

// Recursion depth is bounded by the tree depth, itself well under 64.
fn assign(tree: &HuffmanTree, id: NodeId, bits: u64, len: u8, codes: &mut [Code; NUM_SYMBOLS]) {
    match *tree.node(id) {
        Node::Leaf { symbol, .. } => {
            codes[symbol as usize] = Code { bits, len };
        }
        Node::Internal { left, right, .. } => {
            assign(tree, left, bits << 1, len + 1, codes);
            if let Some(right) = right {
                assign(tree, right, (bits << 1) | 1, len + 1, codes);
            }
        }
    }
}
