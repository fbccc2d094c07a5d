//! Huffman tree construction from a frequency table.
//!
//! The builder seeds a min-priority queue with one leaf per distinct
//! symbol, then repeatedly merges the two lightest nodes under a fresh
//! internal node until a single root remains. This minimizes the weighted
//! sum of leaf depths (standard Huffman optimality).
//!
//! # Determinism
//!
//! Equal weights are tie-broken by a monotonically increasing sequence
//! number assigned at queue insertion, so identical frequency tables
//! always produce identical trees (and therefore identical codebooks and
//! containers). The queue's incidental internal ordering is never relied
//! upon.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

/// A node in the Huffman tree.
///
/// The tree is an immutable, singly-owned structure: every internal node
/// exclusively owns its two children. It is built bottom-up by the merge
/// loop and consumed top-down by the code table walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A real symbol with its aggregate weight
    Leaf { symbol: char, weight: u64 },

    /// An internal node owning exactly two children
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },

    /// Weightless placeholder child, used only when the alphabet has a
    /// single distinct symbol. Never emitted in the codebook and never
    /// matched during decoding.
    Filler,
}

impl Node {
    /// Weight of this subtree (filler nodes weigh nothing).
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
            Node::Filler => 0,
        }
    }
}

/// Queue entry: a subtree keyed by (weight, insertion sequence).
///
/// Ordering is on the key only; the subtree itself never participates
/// in comparisons.
struct HeapEntry {
    weight: u64,
    seq: u64,
    node: Node,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.weight, self.seq).cmp(&(other.weight, other.seq))
    }
}

/// Build a Huffman tree from a non-empty frequency table.
///
/// The first node popped on each merge (lowest weight, then lowest
/// sequence number) becomes the left child.
///
/// Single-distinct-symbol inputs get a synthesized internal root with a
/// [`Node::Filler`] right child, guaranteeing the real symbol a
/// root-to-leaf path of length one (code `0`).
pub fn build_tree(freqs: &BTreeMap<char, u64>) -> Node {
    debug_assert!(!freqs.is_empty(), "caller must reject empty input");

    let mut next_seq = 0u64;
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::with_capacity(freqs.len());

    for (&symbol, &weight) in freqs {
        heap.push(Reverse(HeapEntry {
            weight,
            seq: next_seq,
            node: Node::Leaf { symbol, weight },
        }));
        next_seq += 1;
    }

    if heap.len() == 1 {
        let Reverse(only) = heap.pop().unwrap();
        return Node::Internal {
            weight: only.weight,
            left: Box::new(only.node),
            right: Box::new(Node::Filler),
        };
    }

    while heap.len() > 1 {
        let Reverse(first) = heap.pop().unwrap();
        let Reverse(second) = heap.pop().unwrap();

        let weight = first.weight + second.weight;
        heap.push(Reverse(HeapEntry {
            weight,
            seq: next_seq,
            node: Node::Internal {
                weight,
                left: Box::new(first.node),
                right: Box::new(second.node),
            },
        }));
        next_seq += 1;
    }

    let Reverse(root) = heap.pop().unwrap();
    root.node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::count_frequencies;

    #[test]
    fn test_root_weight_is_input_length() {
        let freqs = count_frequencies("abracadabra").unwrap();
        let root = build_tree(&freqs);
        assert_eq!(root.weight(), 11);
    }

    #[test]
    fn test_two_symbols_deterministic_shape() {
        let freqs = count_frequencies("ab").unwrap();
        let root = build_tree(&freqs);

        // Equal weights: 'a' seeds first, so it becomes the left child.
        match root {
            Node::Internal { weight, left, right } => {
                assert_eq!(weight, 2);
                assert_eq!(*left, Node::Leaf { symbol: 'a', weight: 1 });
                assert_eq!(*right, Node::Leaf { symbol: 'b', weight: 1 });
            }
            other => panic!("expected internal root, got {other:?}"),
        }
    }

    #[test]
    fn test_single_symbol_gets_filler_sibling() {
        let freqs = count_frequencies("aaaa").unwrap();
        let root = build_tree(&freqs);

        match root {
            Node::Internal { weight, left, right } => {
                assert_eq!(weight, 4);
                assert_eq!(*left, Node::Leaf { symbol: 'a', weight: 4 });
                assert_eq!(*right, Node::Filler);
            }
            other => panic!("expected internal root, got {other:?}"),
        }
    }

    #[test]
    fn test_identical_input_identical_tree() {
        let freqs = count_frequencies("the quick brown fox").unwrap();
        let a = build_tree(&freqs);
        let b = build_tree(&freqs);
        assert_eq!(a, b);
    }

    #[test]
    fn test_skewed_weights_give_shallow_heavy_leaf() {
        // 'a' dominates: it must sit directly under the root.
        let freqs = count_frequencies(&("a".repeat(100) + "bcd")).unwrap();
        let root = build_tree(&freqs);

        let children = match &root {
            Node::Internal { left, right, .. } => [left.as_ref(), right.as_ref()],
            other => panic!("expected internal root, got {other:?}"),
        };
        assert!(children
            .iter()
            .any(|c| matches!(c, Node::Leaf { symbol: 'a', .. })));
    }
}
