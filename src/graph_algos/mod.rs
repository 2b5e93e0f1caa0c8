
pub mod dijkstra;
pub mod a_star;
mod shortest_path;

use shortest_path::shortest_path;

use crate::collections::FxIndexMap;

use std::cmp::Ordering;
use num_traits::Float;


/// Parent index of the start node, it has no parent
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Per-search bookkeeping for a discovered node
/// Lives in a side table allocated fresh for every search, never on the graph
#[derive(Clone, Copy, Debug)]
pub(crate) struct Visit<C> {
    pub parent: usize, // index of the parent node in the map
    pub g: C, // best known cost from the start
    pub h: C, // heuristic estimate to the goal
    pub closed: bool, // removed from the open set and finalized
}

impl<C> Visit<C> {
    pub fn new(parent: usize, g: C, h: C) -> Self {
        Self { parent, g, h, closed: false }
    }
}

/// Type alias for the node map used in path planning algorithms
/// N: Node id on the graph
/// C: Cost type of the graph
/// Map index doubles as the node's key in the search, parents refer to it
pub(crate) type GraphNodeMap<N, C> = FxIndexMap<N, Visit<C>>;


/// Open list entry
/// Ordered so the BinaryHeap pops the lowest f_cost first, ties go to the
/// earliest pushed entry which keeps selection repeatable between runs
#[derive(Debug)]
pub(crate) struct OpenNode<C> {
    pub index: usize, // index in the node map
    pub cost: C, // cost to reach this node when it was pushed
    pub f_cost: C, // cost + heuristic
    pub seq: usize, // push order
}

impl<C: Float> Ord for OpenNode<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<C: Float> PartialOrd for OpenNode<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: Float> PartialEq for OpenNode<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<C: Float> Eq for OpenNode<C> {}
