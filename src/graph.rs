use crate::errors::PathPlannerError;

use std::{fmt::Debug, hash::Hash};
use num_traits::Float;


/// Graph consumed by the path planners
///
/// Nodes are owned by the graph and referred to by `NodeId`, an index or key
/// into the graph's own storage. Search bookkeeping (costs, parents, visited
/// state) never lives on the graph, so a graph can be searched repeatedly, or
/// from several threads at once when it is `Sync`.
pub trait Graph {
    type NodeId: Copy + Eq + Hash + Debug;
    type Cost: Float + Debug;

    /// Resolve a position in normalized [0, 1] x [0, 1] space to the nearest node
    /// Positions outside the domain are rejected with `InvalidEndpoint`
    fn find_closest_node(&self, x: Self::Cost, y: Self::Cost) -> Result<Self::NodeId, PathPlannerError>;

    /// Geometric neighbors of a node, computed once and cached by the graph
    fn neighbors(&self, node: Self::NodeId) -> &[Self::NodeId];

    /// Symmetric geometric distance between two nodes, in native units
    fn distance(&self, a: Self::NodeId, b: Self::NodeId) -> Self::Cost;

    /// Factor converting native distance units into real world units
    fn metric_scale(&self) -> Self::Cost;
}
