use std::collections::BinaryHeap;

use skyroute_core::{Context, Cost, NodeId};

/// A node with its shortest distance from the source, returned from
/// [`Router::distance_map`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reached {
    pub node: NodeId,
    pub cost: Cost,
}

/// Options for a single search.
#[derive(Clone, Debug, Default)]
pub struct SearchConfig {
    /// Do not expand past this cumulative cost. Nodes further away are
    /// treated as unreachable.
    pub max_cost: Option<Cost>,
    /// Checked before every node is settled; a done context aborts the
    /// search with [`RouteError::Cancelled`](crate::RouteError::Cancelled).
    pub context: Option<Context>,
}

impl SearchConfig {
    /// Bound the search to routes of at most `max_cost`.
    pub fn with_max_cost(mut self, max_cost: Cost) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    /// Gate the search on `ctx`.
    pub fn with_context(mut self, ctx: Context) -> Self {
        self.context = Some(ctx);
        self
    }

    #[inline]
    pub(crate) fn is_cancelled(&self) -> bool {
        self.context.as_ref().is_some_and(Context::is_done)
    }
}

// ---------------------------------------------------------------------------
// Per-query node state
// ---------------------------------------------------------------------------

/// Search state of one node. Only meaningful when `generation` matches the
/// router's current generation; anything else reads as "not discovered".
#[derive(Clone, Copy, Default)]
pub(crate) struct Slot {
    pub(crate) dist: Cost,
    pub(crate) parent: Option<NodeId>,
    pub(crate) generation: u32,
    pub(crate) settled: bool,
}

/// Frontier entry, ordered so `BinaryHeap` (a max-heap) pops the smallest
/// cost first, then the smallest node index.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct HeapEntry {
    pub(crate) cost: Cost,
    pub(crate) node: NodeId,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Reusable scratch space for shortest-path searches.
///
/// A `Router` holds the distance, predecessor and settled flag of every node
/// for the most recent search. Starting a search bumps a generation counter,
/// which invalidates all previous state in O(1), so results never leak from
/// one query into the next.
///
/// The graph is only borrowed for the duration of a call. A router is not
/// tied to a particular graph, but [`route_to`](Self::route_to) and
/// [`distance_at`](Self::distance_at) describe the graph of the last search.
#[derive(Default)]
pub struct Router {
    pub(crate) slots: Vec<Slot>,
    pub(crate) generation: u32,
    pub(crate) heap: BinaryHeap<HeapEntry>,
    pub(crate) settled: Vec<Reached>,
    /// Source of the last search, `None` if no search completed.
    pub(crate) source: Option<NodeId>,
    /// Node count of the network the last search ran on.
    pub(crate) node_count: usize,
}

impl Router {
    /// Create an empty router. Buffers grow on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a router pre-sized for graphs of `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            slots: vec![Slot::default(); nodes],
            heap: BinaryHeap::with_capacity(nodes),
            settled: Vec::with_capacity(nodes),
            ..Self::default()
        }
    }

    /// Source node of the last completed search.
    #[inline]
    pub fn source(&self) -> Option<NodeId> {
        self.source
    }

    /// Shortest distance to `n` found by the last completed search.
    ///
    /// Returns `None` if `n` was not settled: unreachable, beyond the
    /// search's cost bound, not examined because a point-to-point search
    /// stopped early, or no search has completed.
    pub fn distance_at(&self, n: NodeId) -> Option<Cost> {
        self.source?;
        let slot = self.slot(n)?;
        slot.settled.then_some(slot.dist)
    }

    /// Slot of `n` if it belongs to the current generation.
    #[inline]
    pub(crate) fn slot(&self, n: NodeId) -> Option<&Slot> {
        self.slots
            .get(n.index())
            .filter(|s| s.generation == self.generation)
    }

    /// Prepare for a new search over `node_count` nodes.
    pub(crate) fn begin(&mut self, node_count: usize) {
        if self.slots.len() < node_count {
            self.slots.resize(node_count, Slot::default());
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: old stamps could collide with new ones.
            for s in self.slots.iter_mut() {
                s.generation = 0;
            }
            self.generation = 1;
        }
        self.heap.clear();
        self.settled.clear();
        self.source = None;
        self.node_count = node_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_pops_lowest_cost_then_lowest_index() {
        let mut heap = BinaryHeap::new();
        for (cost, idx) in [(5, 0), (1, 3), (1, 2), (4, 1)] {
            heap.push(HeapEntry {
                cost,
                node: NodeId::new(idx),
            });
        }
        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|e| (e.cost, e.node.index()))
            .collect();
        assert_eq!(order, [(1, 2), (1, 3), (4, 1), (5, 0)]);
    }

    #[test]
    fn begin_grows_but_never_shrinks() {
        let mut r = Router::new();
        r.begin(10);
        assert_eq!(r.slots.len(), 10);
        r.begin(4);
        assert_eq!(r.slots.len(), 10);
        assert_eq!(r.node_count, 4);
        assert_eq!(r.generation, 2);
    }

    #[test]
    fn begin_invalidates_previous_state() {
        let mut r = Router::new();
        r.begin(3);
        let g = r.generation;
        r.slots[1] = Slot {
            dist: 7,
            parent: None,
            generation: g,
            settled: true,
        };
        assert!(r.slot(NodeId::new(1)).is_some());
        r.begin(3);
        assert!(r.slot(NodeId::new(1)).is_none());
    }

    #[test]
    fn generation_wrap_clears_stamps() {
        let mut r = Router::with_capacity(2);
        r.generation = u32::MAX;
        r.slots[0].generation = 1;
        r.begin(2);
        assert_eq!(r.generation, 1);
        assert!(r.slot(NodeId::new(0)).is_none());
    }

    #[test]
    fn distance_before_any_search() {
        let r = Router::new();
        assert_eq!(r.source(), None);
        assert_eq!(r.distance_at(NodeId::new(0)), None);
    }

    #[test]
    fn config_builders() {
        let cfg = SearchConfig::default().with_max_cost(9);
        assert_eq!(cfg.max_cost, Some(9));
        assert!(!cfg.is_cancelled());
        let ctx = Context::new();
        let cfg = cfg.with_context(ctx.clone());
        ctx.cancel();
        assert!(cfg.is_cancelled());
    }
}
