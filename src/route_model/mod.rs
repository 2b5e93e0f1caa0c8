use crate::collections::FxIndexSet;
use crate::errors::PathPlannerError;
use crate::geometry::Point;
use crate::graph::Graph;
use crate::route::Route;

use std::sync::OnceLock;

use kdtree::KdTree;
use kdtree::distance::squared_euclidean as kt_squared_euclidean;
use tracing::trace;


/// Node of a route model
/// Neighbors are derived from the ways the node sits on, the first time they are requested
#[derive(Debug, Default)]
pub struct RouteNode {
    pub point: Point,
    ways: Vec<usize>, // indices of the ways passing through this node
    neighbors: OnceLock<Vec<usize>>,
}

impl RouteNode {

    /// Indices of the ways passing through this node
    pub fn ways(&self) -> &[usize] {
        &self.ways
    }
}


/// Road network in normalized [0, 1] x [0, 1] space
///
/// Nodes are connected by ways, ordered polylines of node indices. Two nodes
/// are neighbors when they follow each other on some way, so an edge is just a
/// two node way. Nearest node lookups go through a kd-tree over node positions.
pub struct RouteModel {
    nodes: Vec<RouteNode>,
    ways: Vec<Vec<usize>>,
    tree: KdTree<f64, usize, [f64; 2]>, // stores point -> index in nodes
    metric_scale: f64,
}

impl RouteModel {

    /// Create an empty model
    /// metric_scale converts normalized distances into real world units (eg. meters)
    pub fn new(metric_scale: f64) -> Result<Self, PathPlannerError> {
        if !metric_scale.is_finite() || metric_scale <= 0.0 {
            return Err(PathPlannerError::InvalidMetricScale(metric_scale));
        }

        Ok(Self {
            nodes: Vec::new(),
            ways: Vec::new(),
            tree: KdTree::new(2),
            metric_scale,
        })
    }

    /// Add a node, returns its index
    pub fn add_node(&mut self, x: f64, y: f64) -> Result<usize, PathPlannerError> {
        let point = Point::new(x, y);
        if !point.is_normalized() {
            return Err(PathPlannerError::OutOfBounds { x, y });
        }

        let index = self.nodes.len();
        self.tree.add([x, y], index)?;
        self.nodes.push(RouteNode { point, ..Default::default() });
        Ok(index)
    }

    /// Add a way through the given nodes, returns its index
    /// Nodes on the way lose their cached neighbors so they pick up the new connections
    pub fn add_way(&mut self, way: &[usize]) -> Result<usize, PathPlannerError> {
        if let Some(&unknown) = way.iter().find(|&&idx| idx >= self.nodes.len()) {
            return Err(PathPlannerError::UnknownNode(unknown));
        }

        let way_index = self.ways.len();
        for &idx in way {
            let node = &mut self.nodes[idx];
            if !node.ways.contains(&way_index) {
                node.ways.push(way_index);
            }
            node.neighbors = OnceLock::new();
        }
        self.ways.push(way.to_vec());
        Ok(way_index)
    }

    /// Add an undirected edge between two nodes
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<usize, PathPlannerError> {
        self.add_way(&[a, b])
    }

    pub fn node(&self, index: usize) -> Option<&RouteNode> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[RouteNode] {
        &self.nodes
    }

    pub fn ways(&self) -> &[Vec<usize>] {
        &self.ways
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Positions of the nodes along a route
    pub fn positions(&self, route: &Route<usize, f64>) -> Vec<Point> {
        route.nodes()
            .iter()
            .filter_map(|&idx| self.nodes.get(idx).map(|node| node.point))
            .collect()
    }

    /// Nodes directly before or after `index` on every way through it
    fn collect_neighbors(&self, index: usize) -> Vec<usize> {
        let mut neighbors: FxIndexSet<usize> = FxIndexSet::default();

        for &way_index in &self.nodes[index].ways {
            let way = &self.ways[way_index];
            for (pos, _) in way.iter().enumerate().filter(|&(_, &idx)| idx == index) {
                if pos > 0 {
                    neighbors.insert(way[pos - 1]);
                }
                if let Some(&next) = way.get(pos + 1) {
                    neighbors.insert(next);
                }
            }
        }

        // a way may double back on itself
        neighbors.shift_remove(&index);

        trace!(node = index, count = neighbors.len(), "computed neighbors");
        neighbors.into_iter().collect()
    }
}


impl Graph for RouteModel {
    type NodeId = usize;
    type Cost = f64;

    fn find_closest_node(&self, x: f64, y: f64) -> Result<usize, PathPlannerError> {
        if !Point::new(x, y).is_normalized() {
            return Err(PathPlannerError::InvalidEndpoint { x, y });
        }

        let closest: Vec<(f64, &usize)> = self.tree.nearest(&[x, y], 1, &kt_squared_euclidean)?;
        match closest.first() {
            Some(&(_, &index)) => Ok(index),
            None => Err(PathPlannerError::NoValidPointFound),
        }
    }

    fn neighbors(&self, node: usize) -> &[usize] {
        match self.nodes.get(node) {
            Some(route_node) => route_node.neighbors.get_or_init(|| self.collect_neighbors(node)).as_slice(),
            None => &[],
        }
    }

    fn distance(&self, a: usize, b: usize) -> f64 {
        self.nodes[a].point.distance(&self.nodes[b].point)
    }

    fn metric_scale(&self) -> f64 {
        self.metric_scale
    }
}
