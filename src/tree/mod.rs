pub mod build_tree;
pub mod codes;
pub mod render_tree;
pub mod tree_node;
pub mod wpl;

pub use build_tree::build_tree;
pub use codes::generate_codes;
pub use tree_node::Node;
pub use wpl::calculate_wpl;

/// Minimum possible depth of a Huffman tree by its binary tree properties.
/// Symbols are always leafs (to uphold the prefix characteristic), so a
/// perfectly balanced tree holds at most 2^depth of them.
#[inline]
pub fn minimum_tree_depth(num_symbols: usize) -> usize {
    (num_symbols as f32).log(2.0).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_minimum_depth() {
        assert_eq!(minimum_tree_depth(1), 0);
        assert_eq!(minimum_tree_depth(2), 1);
        assert_eq!(minimum_tree_depth(3), 2);
        assert_eq!(minimum_tree_depth(4), 2);
        assert_eq!(minimum_tree_depth(5), 3);
        assert_eq!(minimum_tree_depth(8), 3);
        assert_eq!(minimum_tree_depth(9), 4);
    }

    #[test]
    fn longest_code_respects_the_minimum_depth() {
        let input: HashMap<u32, u64> = (0..32).map(|symbol| (symbol, 1)).collect();
        let tree = build_tree(&input).unwrap();
        let codes = generate_codes(Some(&tree)).unwrap();
        let longest = codes.values().map(|code| code.len()).max().unwrap();
        assert!(longest >= minimum_tree_depth(input.len()));
    }
}
