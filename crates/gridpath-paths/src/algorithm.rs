use std::fmt;
use std::str::FromStr;

use gridpath_core::{Grid, Pos};

use crate::astar::AStar;
use crate::dijkstra::Dijkstra;
use crate::result::PathfindingResult;
use crate::traits::SearchStrategy;

/// Caller-selectable search strategy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    AStar,
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Self; 2] = [Self::AStar, Self::Dijkstra];

    /// The strategy object behind this choice.
    pub fn strategy(self) -> &'static dyn SearchStrategy {
        match self {
            Self::AStar => &AStar,
            Self::Dijkstra => &Dijkstra,
        }
    }

    /// Cycle to the other strategy.
    pub fn next(self) -> Self {
        match self {
            Self::AStar => Self::Dijkstra,
            Self::Dijkstra => Self::AStar,
        }
    }

    pub fn find_path(self, grid: &Grid, start: Pos, end: Pos) -> PathfindingResult {
        self.strategy().find_path(grid, start, end)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.strategy().name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            "dijkstra" => Ok(Self::Dijkstra),
            _ => Err(ParseAlgorithmError(s.to_owned())),
        }
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected astar or dijkstra)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}
