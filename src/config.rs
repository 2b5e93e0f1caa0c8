/// How the A* search treats a neighbor that was already discovered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rediscovery {
    /// First discovery wins: a discovered node is never re-examined
    #[default]
    FirstDiscovery,
    /// Update a node's cost and parent whenever a cheaper route to it is found
    Relax,
}


/// Search configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub rediscovery: Rediscovery,
}

impl SearchConfig {

    /// Standard A*, optimal for any non-negative edge costs with an admissible heuristic
    pub fn relaxed() -> Self {
        Self { rediscovery: Rediscovery::Relax }
    }
}
