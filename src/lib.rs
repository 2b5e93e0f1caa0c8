//! A* route planning over 2D geometric graphs.
//!
//! A [`PathFinder`] is bound to a [`Graph`] and two positions in normalized
//! [0, 1] x [0, 1] space. The positions are resolved to their nearest nodes and
//! [`PathFinder::search`] returns the lowest cost [`Route`] between them, with
//! its length converted to real world units by the graph's metric scale.
//!
//! ```
//! use route_planner::{PathFinder, RouteModel};
//!
//! let mut model = RouteModel::new(100.0).unwrap();
//! let a = model.add_node(0.0, 0.0).unwrap();
//! let b = model.add_node(1.0, 0.0).unwrap();
//! let c = model.add_node(1.0, 1.0).unwrap();
//! model.add_way(&[a, b, c]).unwrap();
//!
//! let route = PathFinder::new(&model, (0.0, 0.0), (1.0, 1.0)).unwrap().search();
//! assert_eq!(route.nodes(), &[a, b, c]);
//! assert_eq!(route.distance(), 200.0);
//! ```
//!
//! Search bookkeeping lives in a side table owned by each call to `search`, so
//! a graph can be searched any number of times, and from several threads at
//! once, without resetting anything in between.

mod collections;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod route;
pub mod route_model;

pub use config::{Rediscovery, SearchConfig};
pub use errors::PathPlannerError;
pub use geometry::Point;
pub use graph::Graph;
pub use graph_algos::a_star::PathFinder;
pub use graph_algos::dijkstra::dijkstra;
pub use route::Route;
pub use route_model::{RouteModel, RouteNode};
