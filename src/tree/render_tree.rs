use std::borrow::Cow;
use std::fmt::Display;
use std::io;

use crate::tree::tree_node::Node;

type Nd = usize;
/// from, to, transition (0 or 1)
type Ed = (usize, usize, u8);

/// Flattened view of the tree for graphviz output. `dot` wants cloneable
/// node handles, so the boxed tree is collected into preorder-indexed
/// labels and edges first.
pub struct TreeGraph {
    labels: Vec<String>,
    edges: Vec<Ed>,
}

impl TreeGraph {
    pub fn new<S: Display>(root: &Node<S>) -> TreeGraph {
        let mut graph = TreeGraph {
            labels: vec![],
            edges: vec![],
        };
        graph.add_nodes(root);
        graph
    }

    fn add_nodes<S: Display>(&mut self, node: &Node<S>) -> usize {
        let id = self.labels.len();
        match node {
            Node::Leaf { symbol, count } => {
                self.labels.push(format!("{} ({})", symbol, count));
            }
            Node::Internal { count, left, right } => {
                self.labels.push(format!("({})", count));
                let left_id = self.add_nodes(left);
                self.edges.push((id, left_id, 0));
                let right_id = self.add_nodes(right);
                self.edges.push((id, right_id, 1));
            }
        }
        id
    }
}

pub fn render_to<W: io::Write>(graph: &TreeGraph, output: &mut W) -> io::Result<()> {
    dot::render(graph, output)
}

impl<'a> dot::Labeller<'a, Nd, Ed> for TreeGraph {
    fn graph_id(&'a self) -> dot::Id<'a> {
        dot::Id::new("huffman").unwrap()
    }

    fn node_id(&'a self, n: &Nd) -> dot::Id<'a> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&'a self, n: &Nd) -> dot::LabelText<'a> {
        dot::LabelText::LabelStr(self.labels[*n].clone().into())
    }

    fn edge_label(&'a self, ed: &Ed) -> dot::LabelText<'a> {
        dot::LabelText::LabelStr(ed.2.to_string().into())
    }
}

impl<'a> dot::GraphWalk<'a, Nd, Ed> for TreeGraph {
    fn nodes(&'a self) -> dot::Nodes<'a, Nd> {
        Cow::Owned((0..self.labels.len()).collect())
    }

    fn edges(&'a self) -> dot::Edges<'a, Ed> {
        Cow::Borrowed(&self.edges[..])
    }

    fn source(&self, e: &Ed) -> Nd {
        e.0
    }

    fn target(&self, e: &Ed) -> Nd {
        e.1
    }
}
