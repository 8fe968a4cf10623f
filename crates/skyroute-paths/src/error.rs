use std::fmt;

use skyroute_core::GraphError;

/// Errors returned by route queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The query named a node that is not in the graph.
    UnknownNode(String),
    /// The destination cannot be reached from the source.
    NoRoute { from: String, to: String },
    /// The query's [`Context`](skyroute_core::Context) was cancelled or
    /// expired before the search finished.
    Cancelled,
    /// A route was requested before any search completed, or from a
    /// network other than the one last searched.
    NoSearch,
    /// Any other graph error.
    Graph(GraphError),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode(id) => write!(f, "unknown node \u{201c}{id}\u{201d}"),
            Self::NoRoute { from, to } => write!(f, "no route from {from} to {to}"),
            Self::Cancelled => f.write_str("search cancelled"),
            Self::NoSearch => f.write_str("no completed search to report from"),
            Self::Graph(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for RouteError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::UnknownNode(id) => Self::UnknownNode(id),
            other => Self::Graph(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn unknown_node_converts_directly() {
        let e: RouteError = GraphError::UnknownNode("x".into()).into();
        assert_eq!(e, RouteError::UnknownNode("x".into()));
        assert!(e.source().is_none());
    }

    #[test]
    fn other_graph_errors_are_wrapped() {
        let e: RouteError = GraphError::DuplicateNode("a".into()).into();
        assert!(matches!(e, RouteError::Graph(_)));
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "duplicate node \u{201c}a\u{201d}");
    }

    #[test]
    fn no_route_message() {
        let e = RouteError::NoRoute {
            from: "f".into(),
            to: "a".into(),
        };
        assert_eq!(e.to_string(), "no route from f to a");
    }
}
