use crate::graph::Graph;
use crate::route::Route;
use crate::collections::FxIndexMap;
use super::{shortest_path, GraphNodeMap, OpenNode, Visit, NO_PARENT};

use std::collections::BinaryHeap;
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};




/// Identify the shortest route using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start node, traverse through graph until the goal node is finalized.
/// Costs are always relaxed so the result is exact, which makes it the
/// reference to check A* routes against.
pub fn dijkstra<G: Graph>(graph: &G, start: G::NodeId, goal: G::NodeId) -> Route<G::NodeId, G::Cost> {

    // Build the graph - terminates when the goal is met
    let (node_map, goal_index) = build_dijkstra_graph(graph, start, |node| node == goal);

    match goal_index {
        Some(goal_index) => shortest_path(graph, &node_map, goal_index),
        None => Route::empty(),
    }
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns a map of nodes with their smallest costs along with the index of the goal node
fn build_dijkstra_graph<G, F>(graph: &G, start: G::NodeId, goal_fn: F) -> (GraphNodeMap<G::NodeId, G::Cost>, Option<usize>)
where
    G: Graph,
    F: Fn(G::NodeId) -> bool, // Returns true if goal is met
    {

    // Nodes to visit - binary heap pops the smallest cost from the start first
    // With no heuristic f_cost is the cost itself
    let mut nodes_to_visit: BinaryHeap<OpenNode<G::Cost>> = BinaryHeap::new();
    let mut seq = 0;

    // visited nodes and their best known (parent_index, cost)
    // for the start node, parent_index is NO_PARENT
    let mut nodes_map: GraphNodeMap<G::NodeId, G::Cost> = FxIndexMap::default();

    let start_index = nodes_map.insert_full(start, Visit::new(NO_PARENT, Zero::zero(), Zero::zero())).0;
    nodes_to_visit.push(OpenNode {
        index: start_index,
        cost: Zero::zero(),
        f_cost: Zero::zero(),
        seq,
    });

    // Loop over each node to visit, removing the smallest node
    while let Some(OpenNode { index, cost, .. }) = nodes_to_visit.pop() {

        let Some((&node, visit)) = nodes_map.get_index_mut(index) else {
            continue;
        };

        // If cost of the popped entry is higher than the best cost, skip it
        // This implies we've already found a better path to this node
        if visit.closed || cost > visit.g {
            continue;
        }
        visit.closed = true;
        let c = visit.g;

        // Check if we've reached the goal
        if goal_fn(node) {
            return (nodes_map, Some(index));
        }

        // loop over neighbors
        for &neighbor in graph.neighbors(node) {

            // new cost to reach this node = edge cost + node cost
            let new_cost = c + graph.distance(node, neighbor);

            // Check if we've found a better path to this neighbor
            let neighbor_index = match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    let neighbor_index = e.index();
                    e.insert(Visit::new(index, new_cost, Zero::zero()));
                    neighbor_index
                }
                Occupied(mut e) => {
                    let known = e.get_mut();
                    if !known.closed && new_cost < known.g {
                        // We've found a better path to this neighbor
                        known.parent = index;
                        known.g = new_cost;
                        e.index()
                    } else {
                        // The existing path is better, do nothing
                        continue;
                    }
                }
            };

            // Only add to the queue if we've found a better path
            seq += 1;
            nodes_to_visit.push(OpenNode {
                index: neighbor_index,
                cost: new_cost,
                f_cost: new_cost,
                seq,
            });
        }
    }

    (nodes_map, None)
}
