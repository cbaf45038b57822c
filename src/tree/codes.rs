use std::collections::HashMap;
use std::hash::Hash;

use crate::error::HuffmanError;
use crate::tree::tree_node::Node;

/// Generates the prefix code table of the tree.
///
/// Depth-first pre-order walk, left edges append '0', right edges '1'. A
/// leaf binds its symbol to the accumulated path, so codes only exist at
/// leafs and no code can be the prefix of another. The map is freshly
/// allocated on every call. A lone leaf at the root gets the empty code, a
/// `None` root yields an empty map.
///
/// Fails with `StructuralError` if a symbol is bound to more than one leaf.
pub fn generate_codes<S>(root: Option<&Node<S>>) -> Result<HashMap<S, String>, HuffmanError>
where
    S: Copy + Eq + Hash,
{
    let mut codes = HashMap::new();
    if let Some(root) = root {
        collect_codes(root, String::new(), &mut codes)?;
    }
    Ok(codes)
}

fn collect_codes<S>(
    node: &Node<S>,
    prefix: String,
    codes: &mut HashMap<S, String>,
) -> Result<(), HuffmanError>
where
    S: Copy + Eq + Hash,
{
    match node {
        Node::Leaf { symbol, .. } => {
            if codes.insert(*symbol, prefix).is_some() {
                return Err(HuffmanError::StructuralError);
            }
        }
        Node::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push('0');
            collect_codes(left, left_prefix, codes)?;

            let mut right_prefix = prefix;
            right_prefix.push('1');
            collect_codes(right, right_prefix, codes)?;
        }
    }
    Ok(())
}

/// checks the prefix property over a code table, every pair of codes must
/// be prefix-free in both directions
#[cfg(test)]
pub fn assert_prefix_property(codes: &HashMap<char, String>) {
    for (symbol_a, code_a) in codes {
        for (symbol_b, code_b) in codes {
            if symbol_a == symbol_b {
                continue;
            }
            assert!(
                !code_a.starts_with(code_b.as_str()),
                "invalid prefix detected between {:?}:{} and {:?}:{}",
                symbol_a,
                code_a,
                symbol_b,
                code_b
            );
        }
    }
}
