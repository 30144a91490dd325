//! Huffman tree construction.
//!
//! The tree is rebuilt from the stored frequency table on decode instead of
//! being transmitted, so construction must be fully deterministic: the same
//! table always yields the same shape.
//!
//! ## Tie-breaking
//!
//! Candidates are ordered by `(weight, insertion order)`. Leaves are inserted
//! in ascending symbol order, merged nodes after them in creation order, and
//! a node's arena index is exactly its insertion order. On equal weight the
//! earlier candidate is extracted first and becomes the left child.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::frequency::FrequencyTable;

/// Index of a node in the tree arena.
pub type NodeId = usize;

/// A node in the Huffman tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    /// Terminal symbol.
    Leaf { symbol: u8, weight: u64 },
    /// Branch. `right` is only absent on the synthetic root of a
    /// single-symbol tree.
    Internal {
        weight: u64,
        left: NodeId,
        right: Option<NodeId>,
    },
}

impl Node {
    /// Combined frequency of the subtree.
    #[inline]
    pub fn weight(&self) -> u64 {
        match *self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => weight,
        }
    }

    /// True for terminal nodes.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// Huffman tree stored as a flat arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build the tree for a frequency table.
    ///
    /// Returns `None` when every count is zero (empty input).
    pub fn build(freq: &FrequencyTable) -> Option<Self> {
        let leaf_count = freq.distinct_symbols();
        // n leaves need n - 1 merges; the single-leaf case needs one root
        let mut nodes: Vec<Node> = Vec::with_capacity(2 * leaf_count.max(1));
        for (symbol, count) in freq.iter_nonzero() {
            nodes.push(Node::Leaf {
                symbol,
                weight: count as u64,
            });
        }

        match nodes.len() {
            0 => return None,
            1 => {
                // A lone symbol still needs a 1-bit code, so hang it under a root
                let weight = nodes[0].weight();
                nodes.push(Node::Internal {
                    weight,
                    left: 0,
                    right: None,
                });
                return Some(Self { nodes, root: 1 });
            }
            _ => {}
        }

        let mut heap: BinaryHeap<Reverse<(u64, NodeId)>> = nodes
            .iter()
            .enumerate()
            .map(|(id, node)| Reverse((node.weight(), id)))
            .collect();

        while heap.len() > 1 {
            let (Some(Reverse((left_weight, left))), Some(Reverse((right_weight, right)))) =
                (heap.pop(), heap.pop())
            else {
                unreachable!("heap holds at least two candidates");
            };

            let weight = left_weight + right_weight;
            let id = nodes.len();
            nodes.push(Node::Internal {
                weight,
                left,
                right: Some(right),
            });
            heap.push(Reverse((weight, id)));
        }

        let Reverse((_, root)) = heap.pop()?;
        Some(Self { nodes, root })
    }

    /// Root node handle.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Node by handle.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Total weight at the root.
    pub fn weight(&self) -> u64 {
        self.nodes[self.root].weight()
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; an empty input has no tree at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Follow one bit from `id`: 0 goes left, 1 goes right.
    ///
    /// Returns `None` at a leaf or where the child is absent.
    #[inline]
    pub fn step(&self, id: NodeId, bit: bool) -> Option<NodeId> {
        match self.nodes[id] {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => {
                if bit {
                    right
                } else {
                    Some(left)
                }
            }
        }
    }

    /// Longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            match self.nodes[id] {
                Node::Leaf { .. } => max_depth = max_depth.max(depth),
                Node::Internal { left, right, .. } => {
                    stack.push((left, depth + 1));
                    if let Some(right) = right {
                        stack.push((right, depth + 1));
                    }
                }
            }
        }
        max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(u8, u32)]) -> FrequencyTable {
        let mut counts = [0u32; 256];
        for &(symbol, count) in pairs {
            counts[symbol as usize] = count;
        }
        FrequencyTable::from_counts(counts)
    }

    #[test]
    fn test_empty_has_no_tree() {
        assert!(HuffmanTree::build(&FrequencyTable::new()).is_none());
    }

    #[test]
    fn test_single_symbol_synthetic_root() {
        let tree = HuffmanTree::build(&table(&[(b'x', 9)])).unwrap();
        let root = *tree.node(tree.root());

        assert_eq!(
            root,
            Node::Internal {
                weight: 9,
                left: 0,
                right: None
            }
        );
        assert_eq!(tree.step(tree.root(), true), None);
        let leaf = tree.step(tree.root(), false).unwrap();
        assert_eq!(*tree.node(leaf), Node::Leaf { symbol: b'x', weight: 9 });
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn test_aaabc_shape() {
        let tree = HuffmanTree::build(&table(&[(b'A', 3), (b'B', 1), (b'C', 1)])).unwrap();
        assert_eq!(tree.weight(), 5);

        // B and C merge first; that pair (weight 2) is then extracted before A
        let pair = tree.step(tree.root(), false).unwrap();
        let a = tree.step(tree.root(), true).unwrap();
        assert_eq!(*tree.node(a), Node::Leaf { symbol: b'A', weight: 3 });

        let b = tree.step(pair, false).unwrap();
        let c = tree.step(pair, true).unwrap();
        assert_eq!(*tree.node(b), Node::Leaf { symbol: b'B', weight: 1 });
        assert_eq!(*tree.node(c), Node::Leaf { symbol: b'C', weight: 1 });
    }

    #[test]
    fn test_ties_prefer_earlier_insertion() {
        // All weights tie at 2 after the first merge: the merged node was
        // inserted after 'c' and 'd', so 'c' and 'd' merge next.
        let tree =
            HuffmanTree::build(&table(&[(b'a', 1), (b'b', 1), (b'c', 2), (b'd', 2)])).unwrap();

        let ab = nodes_with_weight(&tree, 2)
            .into_iter()
            .find(|&id| !tree.node(id).is_leaf())
            .unwrap();
        let cd = nodes_with_weight(&tree, 4)
            .into_iter()
            .find(|&id| !tree.node(id).is_leaf())
            .unwrap();

        assert_eq!(tree.node(tree.step(cd, false).unwrap()).weight(), 2);
        assert!(tree.node(tree.step(cd, false).unwrap()).is_leaf());
        assert!(tree.node(tree.step(cd, true).unwrap()).is_leaf());
        // root = (ab, cd): ab was created first
        assert_eq!(tree.step(tree.root(), false), Some(ab));
        assert_eq!(tree.step(tree.root(), true), Some(cd));
    }

    fn nodes_with_weight(tree: &HuffmanTree, weight: u64) -> Vec<NodeId> {
        (0..tree.len())
            .filter(|&id| tree.node(id).weight() == weight)
            .collect()
    }

    #[test]
    fn test_uniform_256_is_balanced() {
        let tree = HuffmanTree::build(&FrequencyTable::from_counts([10; 256])).unwrap();
        assert_eq!(tree.leaf_count(), 256);
        assert_eq!(tree.len(), 511);
        assert_eq!(tree.depth(), 8);
    }

    #[test]
    fn test_rebuild_is_identical() {
        let freq = FrequencyTable::from_bytes(b"the quick brown fox jumps over the lazy dog").unwrap();
        assert_eq!(HuffmanTree::build(&freq), HuffmanTree::build(&freq));
    }

    #[test]
    fn test_large_weights_do_not_overflow() {
        let tree = HuffmanTree::build(&FrequencyTable::from_counts([u32::MAX; 256])).unwrap();
        assert_eq!(tree.weight(), u32::MAX as u64 * 256);
    }
}
