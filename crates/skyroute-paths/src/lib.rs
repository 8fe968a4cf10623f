//! Shortest routes over directed, weighted graphs.
//!
//! This crate implements Dijkstra's algorithm on top of the
//! [`skyroute_core::Graph`] model:
//!
//! - **Point-to-point** shortest routes ([`Router::shortest_path`])
//! - **Single-source** distance maps ([`Router::distance_map`])
//! - **Route reporting** from the predecessor tree of the last run
//!   ([`Router::route_to`], [`Router::distance_at`])
//!
//! All searches run through a [`Router`], which owns the per-query state
//! (distances, predecessors, settled flags) outside of the graph. The graph
//! is only ever borrowed immutably, so any number of routers may query the
//! same graph concurrently, and one router reused across queries incurs no
//! allocations after warm-up.
//!
//! ```
//! use skyroute_core::Graph;
//!
//! let g = Graph::from_edges(["a", "b", "c"], [("a", "b", 2), ("b", "c", 3)]).unwrap();
//! let route = skyroute_paths::shortest_path(&g, "a", "c").unwrap();
//! assert_eq!(route.total, 5);
//! assert_eq!(route.path_string(&g), "a->b->c");
//! ```

mod dijkstra;
mod error;
mod route;
mod search;
mod traits;

pub use error::RouteError;
pub use route::Route;
pub use search::{Reached, Router, SearchConfig};
pub use traits::Network;

use skyroute_core::Graph;

/// Compute the shortest route between two nodes named by identifier.
///
/// Allocates a fresh [`Router`]; reuse one with
/// [`Router::shortest_path_by_name`] when running many queries.
pub fn shortest_path(graph: &Graph, from: &str, to: &str) -> Result<Route, RouteError> {
    Router::new().shortest_path_by_name(graph, from, to)
}
