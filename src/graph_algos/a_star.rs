use crate::config::{Rediscovery, SearchConfig};
use crate::errors::PathPlannerError;
use crate::graph::Graph;
use crate::route::Route;
use crate::collections::FxIndexMap;
use super::{shortest_path, GraphNodeMap, OpenNode, Visit, NO_PARENT};

use std::collections::BinaryHeap;
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use tracing::{debug, trace};


/// Percent inputs are scaled into the normalized [0, 1] space
const PERCENT: f64 = 0.01;


/// A* route search between two positions on a graph
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// The heuristic is the straight line distance to the end node, which is
/// admissible and consistent as long as edge costs are geometric distances.
/// Every call to `search` starts from a fresh side table, the graph is never
/// written to.
pub struct PathFinder<'g, G: Graph> {
    graph: &'g G,
    start_node: G::NodeId,
    end_node: G::NodeId,
    config: SearchConfig,
}

impl<'g, G: Graph> PathFinder<'g, G> {

    /// Resolve start and end positions (normalized space) to their closest nodes
    pub fn new(graph: &'g G, start: (G::Cost, G::Cost), end: (G::Cost, G::Cost)) -> Result<Self, PathPlannerError> {
        let start_node = graph.find_closest_node(start.0, start.1)?;
        let end_node = graph.find_closest_node(end.0, end.1)?;
        debug!(?start_node, ?end_node, "resolved route endpoints");

        Ok(Self {
            graph,
            start_node,
            end_node,
            config: SearchConfig::default(),
        })
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn start_node(&self) -> G::NodeId {
        self.start_node
    }

    pub fn end_node(&self) -> G::NodeId {
        self.end_node
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Straight line distance from a node to the end node
    pub fn heuristic(&self, node: G::NodeId) -> G::Cost {
        self.graph.distance(node, self.end_node)
    }

    /// Find the lowest cost route from the start node to the end node
    /// Returns an empty route (distance zero) when the end node is unreachable
    pub fn search(&self) -> Route<G::NodeId, G::Cost> {
        let (node_map, goal_index) = self.build_graph();

        match goal_index {
            Some(goal_index) => {
                let route = shortest_path(self.graph, &node_map, goal_index);
                debug!(nodes = route.len(), distance = ?route.distance(), "route found");
                route
            }
            None => {
                debug!(discovered = node_map.len(), "open set exhausted, no route");
                Route::empty()
            }
        }
    }

    /// Traverses the graph using A*
    /// Returns the per-search node map along with the index of the end node if it was reached
    fn build_graph(&self) -> (GraphNodeMap<G::NodeId, G::Cost>, Option<usize>) {
        // Open List
        // Discovered nodes that have not been finalized, popped lowest f_cost first
        let mut open_list: BinaryHeap<OpenNode<G::Cost>> = BinaryHeap::new();

        // Every discovered node with its (parent_index, g, h) bookkeeping
        let mut node_map: GraphNodeMap<G::NodeId, G::Cost> = FxIndexMap::default();
        let mut seq = 0;

        let h_cost = self.heuristic(self.start_node);
        let start_index = node_map.insert_full(self.start_node, Visit::new(NO_PARENT, Zero::zero(), h_cost)).0;
        open_list.push(OpenNode {
            index: start_index,
            cost: Zero::zero(),
            f_cost: h_cost,
            seq,
        });

        while let Some(OpenNode { index, cost, .. }) = open_list.pop() {

            let Some((&node, visit)) = node_map.get_index_mut(index) else {
                continue;
            };

            // Stale entry left behind by a relaxation, or a node already finalized
            if visit.closed || cost > visit.g {
                continue;
            }
            visit.closed = true;
            let g = visit.g;

            if node == self.end_node {
                return (node_map, Some(index));
            }

            trace!(?node, ?g, "expanding node");

            for &neighbor in self.graph.neighbors(node) {

                let new_cost = g + self.graph.distance(node, neighbor);

                let (neighbor_index, h_cost) = match node_map.entry(neighbor) {
                    Vacant(e) => {
                        // First discovery, this neighbor moves into the open set
                        let h_cost = self.heuristic(neighbor);
                        let neighbor_index = e.index();
                        e.insert(Visit::new(index, new_cost, h_cost));
                        (neighbor_index, h_cost)
                    }
                    Occupied(mut e) => {
                        let known = e.get_mut();
                        match self.config.rediscovery {
                            Rediscovery::Relax if !known.closed && new_cost < known.g => {
                                known.parent = index;
                                known.g = new_cost;
                                let h_cost = known.h;
                                (e.index(), h_cost)
                            }
                            _ => continue,
                        }
                    }
                };

                seq += 1;
                open_list.push(OpenNode {
                    index: neighbor_index,
                    cost: new_cost,
                    f_cost: new_cost + h_cost,
                    seq,
                });
            }
        }

        (node_map, None)
    }
}

impl<'g, G: Graph<Cost = f64>> PathFinder<'g, G> {

    /// Same as `new` with start and end given as percentages (0 - 100) of the map
    pub fn from_percent(graph: &'g G, start: (f64, f64), end: (f64, f64)) -> Result<Self, PathPlannerError> {
        Self::new(
            graph,
            (start.0 * PERCENT, start.1 * PERCENT),
            (end.0 * PERCENT, end.1 * PERCENT),
        )
    }
}
