//! Airport routing demo shared by the `skyroute` binary and its tests.
//!
//! Builds a small fixed network of airports and flight times and formats
//! shortest-route queries over it as console text.

use std::fmt::Write as _;

use skyroute_core::{Cost, Graph, GraphError};
use skyroute_paths::{Route, RouteError, Router};

/// Airport identifiers of the demo network.
pub const AIRPORTS: [&str; 7] = ["a", "b", "c", "d", "e", "f", "g"];

/// Flight legs of the demo network as `(from, to, time)`.
pub const FLIGHTS: [(&str, &str, Cost); 9] = [
    ("a", "c", 1),
    ("a", "d", 2),
    ("b", "c", 2),
    ("c", "d", 1),
    ("b", "f", 3),
    ("c", "e", 3),
    ("e", "f", 2),
    ("d", "g", 1),
    ("g", "f", 1),
];

/// Queries run when the binary is started without arguments.
pub const DEFAULT_QUERIES: [(&str, &str); 2] = [("a", "f"), ("b", "g")];

/// Build the demo network.
pub fn airports() -> Result<Graph, GraphError> {
    Graph::from_edges(AIRPORTS, FLIGHTS)
}

/// Run one query and return the route.
pub fn query(
    graph: &Graph,
    router: &mut Router,
    from: &str,
    to: &str,
) -> Result<Route, RouteError> {
    router.shortest_path_by_name(graph, from, to)
}

/// Format a route the way the demo prints it:
///
/// ```text
/// Shortest route from a to f:
/// a->d->g->f
/// Total distance from a to f:
/// 4
/// ```
pub fn report(graph: &Graph, from: &str, to: &str, route: &Route) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Shortest route from {from} to {to}:");
    let _ = writeln!(out, "{}", route.path_string(graph));
    let _ = writeln!(out, "Total distance from {from} to {to}:");
    let _ = writeln!(out, "{}", route.total);
    out
}
