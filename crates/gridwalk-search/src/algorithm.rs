use std::fmt;
use std::str::FromStr;

use crate::astar::AStar;
use crate::bfs::BreadthFirst;
use crate::config::SearchConfig;
use crate::traits::{SearchAlgorithm, SnapshotSink};

/// The available search strategies, for callers that pick one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    BreadthFirst,
    AStar,
}

impl Algorithm {
    /// Every variant, in menu order.
    pub const ALL: [Algorithm; 2] = [Algorithm::BreadthFirst, Algorithm::AStar];

    /// Human-readable name.
    pub const fn title(self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "Breadth-First Search",
            Algorithm::AStar => "A* Search",
        }
    }

    /// Build the strategy for this variant around `sink`.
    pub fn build<'a, S: SnapshotSink + 'a>(
        self,
        sink: S,
        config: SearchConfig,
    ) -> Box<dyn SearchAlgorithm + 'a> {
        match self {
            Algorithm::BreadthFirst => Box::new(BreadthFirst::with_config(sink, config)),
            Algorithm::AStar => Box::new(AStar::with_config(sink, config)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Error returned for an unrecognised algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm {:?}, expected one of: bfs, astar",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" | "breadth-first search" => Ok(Algorithm::BreadthFirst),
            "astar" | "a*" | "a-star" | "a* search" => Ok(Algorithm::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
