use std::collections::HashMap;
use std::fs::File;
use std::io;

use huffwpl::tree::render_tree::{render_to, TreeGraph};
use huffwpl::{build_tree, calculate_wpl, generate_codes};

fn main() -> io::Result<()> {
    env_logger::init();

    let frequencies: HashMap<char, u64> =
        vec![('A', 4), ('B', 2), ('C', 7), ('D', 11), ('E', 8), ('F', 9)]
            .into_iter()
            .collect();

    let tree = build_tree(&frequencies).expect("frequency table is not empty");
    let codes = generate_codes(Some(&tree)).expect("builder output is well formed");
    let wpl = calculate_wpl(Some(&tree), 0);

    let dot_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "huffman_tree.dot".to_string());
    let mut dot_file = File::create(&dot_path)?;
    render_to(&TreeGraph::new(&tree), &mut dot_file)?;

    let mut table: Vec<(&char, &String)> = codes.iter().collect();
    table.sort();
    println!("Huffman Codes:");
    for (symbol, code) in table {
        println!("  {}: {}", symbol, code);
    }
    println!("Weighted Path Length (WPL): {}", wpl);
    println!("tree written to {}", dot_path);

    Ok(())
}
