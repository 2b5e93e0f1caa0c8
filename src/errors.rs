use thiserror::Error;


#[derive(Debug, Error, PartialEq)]
pub enum PathPlannerError {
    #[error("no path found between start and goal")]
    NoPathFound, // Open set exhausted before reaching the goal
    #[error("endpoint ({x}, {y}) is outside the graph domain")]
    InvalidEndpoint { x: f64, y: f64 },
    #[error("unable to find a valid node in the graph")]
    NoValidPointFound, // Graph has no nodes to resolve against
    #[error("node position ({x}, {y}) is outside the normalized domain")]
    OutOfBounds { x: f64, y: f64 },
    #[error("unknown node index {0}")]
    UnknownNode(usize),
    #[error("metric scale must be finite and positive, got {0}")]
    InvalidMetricScale(f64),
    #[error("kd-tree error: {0}")]
    KdTreeError(String),
}


impl From<kdtree::ErrorKind> for PathPlannerError {
    fn from(error: kdtree::ErrorKind) -> Self {
        PathPlannerError::KdTreeError(error.to_string())
    }
}
