use crate::graph::Graph;
use crate::route::Route;
use super::GraphNodeMap;

use num_traits::Zero;

/// Construct the route from the goal node back to the start node
/// Returns the ordered path from start to goal along with its length,
/// summed pairwise in native units then scaled once by the graph's metric scale
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn shortest_path<G>(graph: &G, node_map: &GraphNodeMap<G::NodeId, G::Cost>, goal_index: usize) -> Route<G::NodeId, G::Cost>
where 
    G: Graph,
{

    let mut path = Vec::new();
    let mut distance = G::Cost::zero();
    let mut current_index = goal_index;

    // Trace back from goal to start, the start's parent is NO_PARENT which is never a valid index
    while let Some((&node, visit)) = node_map.get_index(current_index) {
        path.push(node);
        if let Some((&parent, _)) = node_map.get_index(visit.parent) {
            distance = distance + graph.distance(node, parent);
        }
        current_index = visit.parent;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Route::new(path, distance * graph.metric_scale())
}
