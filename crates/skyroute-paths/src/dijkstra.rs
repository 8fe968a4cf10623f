use log::{debug, trace};
use skyroute_core::{Graph, NodeId};

use crate::error::RouteError;
use crate::route::Route;
use crate::search::{HeapEntry, Reached, Router, SearchConfig, Slot};
use crate::traits::Network;

impl Router {
    /// Compute the shortest route from `from` to `to`.
    pub fn shortest_path<N: Network>(
        &mut self,
        net: &N,
        from: NodeId,
        to: NodeId,
    ) -> Result<Route, RouteError> {
        self.shortest_path_with(net, from, to, &SearchConfig::default())
    }

    /// Compute the shortest route from `from` to `to` under `cfg`.
    ///
    /// The search stops as soon as `to` is settled, so afterwards
    /// [`distance_at`](Self::distance_at) only knows the nodes settled before
    /// it.
    pub fn shortest_path_with<N: Network>(
        &mut self,
        net: &N,
        from: NodeId,
        to: NodeId,
        cfg: &SearchConfig,
    ) -> Result<Route, RouteError> {
        check_node(net, to)?;
        self.run(net, from, Some(to), cfg)?;
        self.route_to(net, to)
    }

    /// Like [`shortest_path`](Self::shortest_path), with nodes named by
    /// identifier.
    pub fn shortest_path_by_name(
        &mut self,
        graph: &Graph,
        from: &str,
        to: &str,
    ) -> Result<Route, RouteError> {
        let src = graph.node(from)?;
        let dst = graph.node(to)?;
        self.shortest_path(graph, src, dst)
    }

    /// Compute the shortest distance from `from` to every reachable node.
    ///
    /// Returns the reached nodes in the order they were settled, which is
    /// non-decreasing cost. The predecessor tree stays available through
    /// [`route_to`](Self::route_to) until the next search.
    pub fn distance_map<N: Network>(
        &mut self,
        net: &N,
        from: NodeId,
        cfg: &SearchConfig,
    ) -> Result<&[Reached], RouteError> {
        self.run(net, from, None, cfg)?;
        Ok(&self.settled)
    }

    /// Dijkstra with a lazy-deletion frontier: improved nodes are pushed
    /// again and stale entries are skipped when popped.
    fn run<N: Network>(
        &mut self,
        net: &N,
        from: NodeId,
        target: Option<NodeId>,
        cfg: &SearchConfig,
    ) -> Result<(), RouteError> {
        check_node(net, from)?;
        let node_count = net.node_count();
        self.begin(node_count);
        let cur_gen = self.generation;

        self.slots[from.index()] = Slot {
            dist: 0,
            parent: None,
            generation: cur_gen,
            settled: false,
        };
        self.heap.push(HeapEntry {
            cost: 0,
            node: from,
        });

        while let Some(HeapEntry { cost, node }) = self.heap.pop() {
            if cfg.is_cancelled() {
                debug!("search from {} cancelled", net.name(from));
                self.heap.clear();
                return Err(RouteError::Cancelled);
            }

            let slot = &mut self.slots[node.index()];
            if slot.settled || cost > slot.dist {
                continue;
            }
            slot.settled = true;
            debug_assert!(
                !self.settled.is_empty() || (node == from && cost == 0),
                "first settled node must be the source at distance 0"
            );
            self.settled.push(Reached { node, cost });
            trace!("settled {} at {}", net.name(node), cost);

            if target == Some(node) {
                break;
            }

            for e in net.edges(node) {
                let ni = e.to.index();
                if ni >= node_count {
                    continue;
                }
                // A route whose length overflows is treated as unreachable.
                let Some(tentative) = cost.checked_add(e.weight) else {
                    continue;
                };
                if cfg.max_cost.is_some_and(|max| tentative > max) {
                    continue;
                }

                let n = &mut self.slots[ni];
                if n.generation == cur_gen {
                    if n.settled || tentative >= n.dist {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.settled = false;
                }

                n.dist = tentative;
                n.parent = Some(node);
                self.heap.push(HeapEntry {
                    cost: tentative,
                    node: e.to,
                });
            }
        }

        self.heap.clear();
        self.source = Some(from);
        debug!(
            "search from {}: settled {} of {} nodes",
            net.name(from),
            self.settled.len(),
            node_count
        );
        Ok(())
    }
}

fn check_node<N: Network>(net: &N, n: NodeId) -> Result<(), RouteError> {
    if n.index() < net.node_count() {
        Ok(())
    } else {
        Err(RouteError::UnknownNode(n.to_string()))
    }
}
