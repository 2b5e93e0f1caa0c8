use crate::errors::PathPlannerError;

use num_traits::Zero;


/// Result of a search
/// Ordered nodes from start to goal (inclusive) and the total distance in real world units
/// An empty route means no path exists
#[derive(Clone, Debug, PartialEq)]
pub struct Route<N, C> {
    nodes: Vec<N>,
    distance: C,
}

impl<N, C: Zero + Copy> Route<N, C> {

    pub(crate) fn new(nodes: Vec<N>, distance: C) -> Self {
        Self { nodes, distance }
    }

    /// Route used when the goal is unreachable
    pub fn empty() -> Self {
        Self { nodes: Vec::new(), distance: Zero::zero() }
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Total scaled distance, zero for an empty route
    pub fn distance(&self) -> C {
        self.distance
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> Option<&N> {
        self.nodes.first()
    }

    pub fn end(&self) -> Option<&N> {
        self.nodes.last()
    }

    /// Converts an empty route into `NoPathFound`
    pub fn into_result(self) -> Result<Self, PathPlannerError> {
        if self.is_empty() {
            Err(PathPlannerError::NoPathFound)
        } else {
            Ok(self)
        }
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}
