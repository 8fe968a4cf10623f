//! The route graph: [`NodeId`], [`Edge`] and [`Graph`].

use std::collections::HashMap;
use std::fmt;

use crate::error::GraphError;

/// Edge weight and accumulated route distance.
///
/// Weights are never negative; [`Graph::add_edge`] rejects them.
pub type Cost = i64;

// ---------------------------------------------------------------------------
// NodeId
// ---------------------------------------------------------------------------

/// Dense handle to a node, assigned in insertion order starting at 0.
///
/// Handles are only meaningful for the graph that issued them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    /// Wrap a raw index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// A directed, weighted connection stored in its source node's adjacency list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Cost,
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// A directed graph with named nodes and non-negative edge weights.
///
/// Outgoing edges of a node keep the order in which they were added. The
/// destination of an edge is never told about it.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    labels: Vec<String>,
    index: HashMap<String, NodeId>,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            labels: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Build a graph from node identifiers and `(from, to, weight)` triples.
    ///
    /// Stops at the first invalid node or edge.
    pub fn from_edges<'a, N, E>(nodes: N, edges: E) -> Result<Self, GraphError>
    where
        N: IntoIterator<Item = &'a str>,
        E: IntoIterator<Item = (&'a str, &'a str, Cost)>,
    {
        let mut g = Self::new();
        for id in nodes {
            g.add_node(id)?;
        }
        for (from, to, weight) in edges {
            g.add_edge(from, to, weight)?;
        }
        Ok(g)
    }

    /// Register a new node and return its handle.
    pub fn add_node(&mut self, id: impl Into<String>) -> Result<NodeId, GraphError> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        let n = NodeId(self.labels.len());
        self.index.insert(id.clone(), n);
        self.labels.push(id);
        self.adjacency.push(Vec::new());
        Ok(n)
    }

    /// Add a directed edge `from -> to` by node identifier.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Cost) -> Result<(), GraphError> {
        let src = self.node(from)?;
        let dst = self.node(to)?;
        self.add_edge_between(src, dst, weight)
    }

    /// Add a directed edge `from -> to` by handle.
    pub fn add_edge_between(
        &mut self,
        from: NodeId,
        to: NodeId,
        weight: Cost,
    ) -> Result<(), GraphError> {
        self.check(from)?;
        self.check(to)?;
        if weight < 0 {
            return Err(GraphError::InvalidWeight {
                from: self.labels[from.0].clone(),
                to: self.labels[to.0].clone(),
                weight,
            });
        }
        self.adjacency[from.0].push(Edge { from, to, weight });
        self.edge_count += 1;
        Ok(())
    }

    /// Look up a node handle by identifier.
    pub fn node(&self, id: &str) -> Result<NodeId, GraphError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))
    }

    /// Whether a node with this identifier exists.
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Whether `n` is a valid handle for this graph.
    #[inline]
    pub fn contains_node(&self, n: NodeId) -> bool {
        n.0 < self.labels.len()
    }

    /// Iterate over every node handle in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        (0..self.labels.len()).map(NodeId)
    }

    /// The identifier of `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` was not issued by this graph.
    #[inline]
    pub fn label(&self, n: NodeId) -> &str {
        &self.labels[n.0]
    }

    /// Outgoing edges of `n` in the order they were added. Empty for a
    /// handle this graph did not issue.
    #[inline]
    pub fn edges(&self, n: NodeId) -> &[Edge] {
        self.adjacency.get(n.0).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn check(&self, n: NodeId) -> Result<(), GraphError> {
        if self.contains_node(n) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(n.to_string()))
        }
    }
}
