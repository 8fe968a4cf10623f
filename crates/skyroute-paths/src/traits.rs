use skyroute_core::{Edge, Graph, NodeId};

/// Read-only view of a directed, weighted graph, as needed by the search.
///
/// Nodes are the dense handles `0..node_count()`. Edge weights must be
/// non-negative.
pub trait Network {
    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Outgoing edges of `n`.
    fn edges(&self, n: NodeId) -> &[Edge];

    /// Human-readable identifier of `n`, used in errors and logs.
    fn name(&self, n: NodeId) -> &str;
}

impl Network for Graph {
    #[inline]
    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }

    #[inline]
    fn edges(&self, n: NodeId) -> &[Edge] {
        Graph::edges(self, n)
    }

    #[inline]
    fn name(&self, n: NodeId) -> &str {
        self.label(n)
    }
}
