//! **skyroute-core** — directed, weighted route graphs.
//!
//! This crate provides the graph model shared across the *skyroute*
//! workspace: named nodes (airports), directed weighted edges (flight legs),
//! the error type for graph construction, and a cooperative cancellation
//! [`Context`] used to bound long queries.
//!
//! Nodes are addressed by their string identifier at the edges of the API and
//! by a dense [`NodeId`] handle internally. The graph never stores per-query
//! state, so a built [`Graph`] can be shared across threads and queried
//! concurrently.

pub mod context;
pub mod error;
pub mod graph;

pub use context::Context;
pub use error::GraphError;
pub use graph::{Cost, Edge, Graph, NodeId};
