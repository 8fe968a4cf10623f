//! Errors raised while building a [`Graph`](crate::Graph).

use std::fmt;

use crate::graph::Cost;

/// Errors that can occur when adding nodes or edges to a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node with this identifier is already registered.
    DuplicateNode(String),
    /// No node with this identifier (or handle) exists in the graph.
    UnknownNode(String),
    /// An edge was given a negative weight.
    InvalidWeight {
        from: String,
        to: String,
        weight: Cost,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNode(id) => write!(f, "duplicate node \u{201c}{id}\u{201d}"),
            Self::UnknownNode(id) => write!(f, "unknown node \u{201c}{id}\u{201d}"),
            Self::InvalidWeight { from, to, weight } => {
                write!(f, "edge {from}->{to} has negative weight {weight}")
            }
        }
    }
}

impl std::error::Error for GraphError {}
