//! Headless editing session: the state behind the interactive board.

use gridpath_core::{Grid, Pos};
use gridpath_maze::{MazeStats, WilsonMaze};
use gridpath_paths::{Algorithm, PathfindingResult};
use rand::rngs::SmallRng;

/// What the next primary click does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    PlaceStart,
    PlaceEnd,
    PlaceBarriers,
}

impl NextAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::PlaceStart => "Place Start",
            Self::PlaceEnd => "Place End",
            Self::PlaceBarriers => "Place Barriers",
        }
    }
}

/// A grid plus the user's start, end and algorithm choice.
pub struct Session {
    grid: Grid,
    start: Option<Pos>,
    end: Option<Pos>,
    algorithm: Algorithm,
    maze: WilsonMaze<SmallRng>,
}

impl Session {
    pub fn new(size: i32, algorithm: Algorithm, seed: Option<u64>) -> Self {
        let maze = match seed {
            Some(seed) => WilsonMaze::seeded(seed),
            None => WilsonMaze::from_entropy(),
        };
        Self {
            grid: Grid::new(size),
            start: None,
            end: None,
            algorithm,
            maze,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    pub fn end(&self) -> Option<Pos> {
        self.end
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn select(&mut self, algorithm: Algorithm) {
        log::debug!("algorithm: {algorithm}");
        self.algorithm = algorithm;
    }

    pub fn next_action(&self) -> NextAction {
        match (self.start, self.end) {
            (None, _) => NextAction::PlaceStart,
            (Some(_), None) => NextAction::PlaceEnd,
            _ => NextAction::PlaceBarriers,
        }
    }

    /// Left click: place Start, then End, then Barriers. Returns whether the
    /// cell changed.
    pub fn primary(&mut self, pos: Pos) -> bool {
        if !self.grid.contains(pos) {
            return false;
        }
        let is_start = self.start == Some(pos);
        let is_end = self.end == Some(pos);
        let cell = &mut self.grid[pos];
        if self.start.is_none() && !is_end {
            let ok = cell.set_start();
            if ok {
                self.start = Some(pos);
            }
            ok
        } else if self.end.is_none() && !is_start {
            let ok = cell.set_end();
            if ok {
                self.end = Some(pos);
            }
            ok
        } else if !is_start && !is_end {
            cell.set_barrier()
        } else {
            false
        }
    }

    /// Right click: erase the cell, forgetting it as start or end.
    pub fn secondary(&mut self, pos: Pos) -> bool {
        let Some(cell) = self.grid.get_mut(pos) else {
            return false;
        };
        cell.reset();
        if self.start == Some(pos) {
            self.start = None;
        }
        if self.end == Some(pos) {
            self.end = None;
        }
        true
    }

    /// Search from start to end with the selected algorithm and paint the
    /// outcome. `None` until both endpoints are placed.
    pub fn run(&mut self) -> Option<PathfindingResult> {
        let (start, end) = (self.start?, self.end?);
        self.grid.clear_search_marks();
        self.grid.update_all_neighbors();
        let result = self.algorithm.find_path(&self.grid, start, end);
        result.paint(&mut self.grid, start, end);
        log::debug!(
            "{}: {} visited, path {}",
            self.algorithm,
            result.visited.len(),
            result.path_len()
        );
        Some(result)
    }

    /// Empty the board.
    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
        self.grid.reset();
        self.maze.clear();
    }

    /// Replace the board with a fresh maze.
    pub fn generate_maze(&mut self) -> MazeStats {
        self.clear();
        self.maze.generate(&mut self.grid)
    }
}
