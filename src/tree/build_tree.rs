use core::cmp::Ordering;
use std::collections::BinaryHeap;
use std::collections::HashMap;
use std::hash::Hash;

use log::debug;

use crate::error::HuffmanError;
use crate::tree::tree_node::Node;

/// An entry in the merge heap.
///
/// `seq` is the insertion sequence of the node. It breaks count ties, so
/// repeated builds over the same input always pop the same pair. Leafs are
/// numbered in symbol order before internal nodes get their numbers, which
/// makes the result independent of the iteration order of the input map.
struct HeapNode<S> {
    seq: u64,
    node: Node<S>,
}

impl<S> PartialEq for HeapNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.node.count() == other.node.count() && self.seq == other.seq
    }
}
impl<S> Eq for HeapNode<S> {}

impl<S> PartialOrd for HeapNode<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// The priority queue depends on `Ord`. The ordering on counts is flipped,
// so the `BinaryHeap` becomes a min-heap and pops the lowest count first.
impl<S> Ord for HeapNode<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .count()
            .cmp(&self.node.count())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Builds the Huffman merge tree over the given frequency table.
///
/// Greedy bottom-up construction: the two nodes with the lowest count are
/// merged under a new internal node until a single root remains. The
/// first-popped (smaller-or-equal) node becomes the left child. A table
/// with a single symbol yields a lone leaf root, no merge happens.
///
/// Fails with `InvalidInput` on an empty table.
pub fn build_tree<S>(frequencies: &HashMap<S, u64>) -> Result<Node<S>, HuffmanError>
where
    S: Copy + Ord + Hash,
{
    if frequencies.is_empty() {
        return Err(HuffmanError::InvalidInput);
    }

    // sort the leafs by symbol, the map iteration order is arbitrary
    let mut leafs: Vec<(S, u64)> = frequencies.iter().map(|(s, c)| (*s, *c)).collect();
    leafs.sort_by(|a, b| a.0.cmp(&b.0));

    let mut seq = 0_u64;
    let mut heap = BinaryHeap::with_capacity(leafs.len());
    for (symbol, count) in leafs {
        heap.push(HeapNode {
            seq,
            node: Node::leaf(symbol, count),
        });
        seq += 1;
    }

    debug!("building tree over {} symbols", heap.len());

    while let (Some(first), second) = (heap.pop(), heap.pop()) {
        match second {
            Some(second) => {
                // add internal node with the aggregated count
                heap.push(HeapNode {
                    seq,
                    node: Node::merge(first.node, second.node),
                });
                seq += 1;
            }
            // last node, which is the root node
            None => return Ok(first.node),
        }
    }

    Err(HuffmanError::InvalidInput)
}
