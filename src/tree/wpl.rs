use crate::tree::tree_node::Node;

/// Weighted path length of the tree, starting at the given depth.
///
/// Sum over all leafs of `count * depth_from_root`. This is the total
/// number of bits needed to code every symbol occurence with the tree's
/// prefix codes; no other full binary tree over the same counts yields a
/// smaller value. A `None` root contributes 0, so does a lone leaf root
/// at depth 0.
pub fn calculate_wpl<S>(root: Option<&Node<S>>, depth: u64) -> u64 {
    match root {
        None => 0,
        Some(Node::Leaf { count, .. }) => count * depth,
        Some(Node::Internal { left, right, .. }) => {
            calculate_wpl(Some(left), depth + 1) + calculate_wpl(Some(right), depth + 1)
        }
    }
}
