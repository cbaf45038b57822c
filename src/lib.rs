/*!
huffwpl builds a Huffman coding tree over a symbol frequency table and
derives two things from it: the prefix code table (symbol to '0'/'1' digit
string) and the weighted path length (WPL), the total bit cost of coding
every symbol occurence with those codes.

The tree is built bottom-up by greedily merging the two lowest-count nodes
until a single root remains, which is the classic construction minimizing
the WPL. Code generation and the WPL metric are independent traversals over
the finished tree.

This is not a compression pipeline. There is no bitstream and no decoder,
the crate stops at the code table and the metric. Rendering the tree to a
graphviz file lives in [`tree::render_tree`] and is meant for the boundary,
like the `wpl_demo` binary.

```
use huffwpl::{build_tree, calculate_wpl, generate_codes};

let frequencies = huffwpl::count_symbols("abacba");
let tree = build_tree(&frequencies).unwrap();
let codes = generate_codes(Some(&tree)).unwrap();
assert_eq!(codes[&'a'].len(), 1);
assert_eq!(calculate_wpl(Some(&tree), 0), 9);
```
*/

use std::collections::HashMap;

pub mod error;
pub mod tree;

pub use crate::error::HuffmanError;
pub use crate::tree::build_tree;
pub use crate::tree::calculate_wpl;
pub use crate::tree::generate_codes;
pub use crate::tree::Node;

/// creates a table with the counts of each char
pub fn count_symbols(input: &str) -> HashMap<char, u64> {
    let mut counts = HashMap::new();
    for ch in input.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}
