use skyroute_core::{Cost, NodeId};

use crate::error::RouteError;
use crate::search::Router;
use crate::traits::Network;

/// A shortest route: the visited nodes from source to destination, both
/// inclusive, and the total distance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub nodes: Vec<NodeId>,
    pub total: Cost,
}

impl Route {
    /// First node of the route, `None` for an empty route.
    pub fn source(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Last node of the route, `None` for an empty route.
    pub fn destination(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Number of edges travelled.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Node identifiers in route order.
    pub fn labels<'n, N: Network>(&self, net: &'n N) -> Vec<&'n str> {
        self.nodes.iter().map(|&n| net.name(n)).collect()
    }

    /// Node identifiers joined with `->`, e.g. `a->c->e->f`.
    pub fn path_string<N: Network>(&self, net: &N) -> String {
        self.labels(net).join("->")
    }
}

impl Router {
    /// Reconstruct the route to `to` from the predecessor tree of the last
    /// completed search.
    ///
    /// Fails with [`RouteError::NoRoute`] if `to` was not settled by that
    /// search, and with [`RouteError::NoSearch`] if there is none or `net`
    /// is not the size of the network it ran on.
    pub fn route_to<N: Network>(&self, net: &N, to: NodeId) -> Result<Route, RouteError> {
        let source = self.source.ok_or(RouteError::NoSearch)?;
        if net.node_count() != self.node_count {
            return Err(RouteError::NoSearch);
        }
        if to.index() >= net.node_count() {
            return Err(RouteError::UnknownNode(to.to_string()));
        }
        let no_route = || RouteError::NoRoute {
            from: net.name(source).to_string(),
            to: net.name(to).to_string(),
        };

        let total = match self.slot(to) {
            Some(s) if s.settled => s.dist,
            _ => return Err(no_route()),
        };

        let mut nodes = vec![to];
        let mut cur = to;
        while let Some(parent) = self.slot(cur).and_then(|s| s.parent) {
            // A tree over n nodes has paths of at most n nodes.
            if nodes.len() > net.node_count() {
                return Err(no_route());
            }
            nodes.push(parent);
            cur = parent;
        }
        if cur != source {
            return Err(no_route());
        }

        nodes.reverse();
        Ok(Route { nodes, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchConfig;
    use skyroute_core::Graph;

    fn line() -> Graph {
        Graph::from_edges(
            ["s", "m", "t", "x"],
            [("s", "m", 2), ("m", "t", 5), ("x", "s", 1)],
        )
        .unwrap()
    }

    #[test]
    fn route_accessors() {
        let g = line();
        let r = Route {
            nodes: vec![NodeId::new(0), NodeId::new(1), NodeId::new(2)],
            total: 7,
        };
        assert_eq!(r.source(), Some(NodeId::new(0)));
        assert_eq!(r.destination(), Some(NodeId::new(2)));
        assert_eq!(r.hops(), 2);
        assert_eq!(r.labels(&g), ["s", "m", "t"]);
        assert_eq!(r.path_string(&g), "s->m->t");
    }

    #[test]
    fn single_node_route_has_no_arrows() {
        let g = line();
        let r = Route {
            nodes: vec![NodeId::new(3)],
            total: 0,
        };
        assert_eq!(r.hops(), 0);
        assert_eq!(r.path_string(&g), "x");
    }

    #[test]
    fn empty_route_accessors() {
        let r = Route {
            nodes: vec![],
            total: 0,
        };
        assert_eq!(r.source(), None);
        assert_eq!(r.destination(), None);
        assert_eq!(r.hops(), 0);
    }

    #[test]
    fn route_to_every_node_of_a_distance_map() {
        let g = line();
        let s = g.node("s").unwrap();
        let mut router = Router::new();
        router.distance_map(&g, s, &SearchConfig::default()).unwrap();

        assert_eq!(router.route_to(&g, s).unwrap().nodes, [s]);
        let t = router.route_to(&g, g.node("t").unwrap()).unwrap();
        assert_eq!(t.path_string(&g), "s->m->t");
        assert_eq!(t.total, 7);
    }

    #[test]
    fn route_to_unreached_node() {
        let g = line();
        let mut router = Router::new();
        router
            .distance_map(&g, g.node("s").unwrap(), &SearchConfig::default())
            .unwrap();
        assert_eq!(
            router.route_to(&g, g.node("x").unwrap()),
            Err(RouteError::NoRoute {
                from: "s".into(),
                to: "x".into()
            })
        );
        assert_eq!(
            router.route_to(&g, NodeId::new(10)),
            Err(RouteError::UnknownNode("#10".into()))
        );
    }

    #[test]
    fn route_to_before_search() {
        let g = line();
        let router = Router::new();
        assert_eq!(router.route_to(&g, NodeId::new(0)), Err(RouteError::NoSearch));
    }

    #[test]
    fn early_stop_leaves_later_nodes_unsettled() {
        let g = line();
        let mut router = Router::new();
        let s = g.node("s").unwrap();
        let m = g.node("m").unwrap();
        router.shortest_path(&g, s, m).unwrap();
        assert_eq!(router.distance_at(m), Some(2));
        // The search stopped at m before expanding it.
        assert_eq!(router.distance_at(g.node("t").unwrap()), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::Reached;

    #[test]
    fn route_round_trip() {
        let r = Route {
            nodes: vec![NodeId::new(1), NodeId::new(2), NodeId::new(6)],
            total: 4,
        };
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"nodes":[1,2,6],"total":4}"#);
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn reached_round_trip() {
        let r = Reached {
            node: NodeId::new(3),
            cost: 12,
        };
        let json = serde_json::to_string(&r).unwrap();
        let back: Reached = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
