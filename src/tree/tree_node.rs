/// A node of the merge tree. Leafs carry the symbol, internal nodes only
/// the aggregated count of their subtree. The one-child state is not
/// representable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        /// the number of occurences
        count: u64,
    },
    Internal {
        /// sum of the counts of both subtrees
        count: u64,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    pub fn leaf(symbol: S, count: u64) -> Node<S> {
        Node::Leaf { symbol, count }
    }

    /// builds the parent of two subtrees, aggregating their counts
    pub fn merge(left: Node<S>, right: Node<S>) -> Node<S> {
        Node::Internal {
            count: left.count() + right.count(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn count(&self) -> u64 {
        match self {
            Node::Leaf { count, .. } => *count,
            Node::Internal { count, .. } => *count,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}
