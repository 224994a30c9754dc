//! Perfect-maze generation for gridpath grids.
//!
//! [`WilsonMaze`] carves corridors with loop-erased random walks (Wilson's
//! algorithm) directly into a [`gridpath_core::Grid`], leaving every cell
//! either Empty (corridor) or Barrier (wall).
//!
//! ```
//! use gridpath_core::Grid;
//! use gridpath_maze::WilsonMaze;
//!
//! let mut grid = Grid::new(20);
//! WilsonMaze::seeded(1).generate(&mut grid);
//! assert!(grid.iter().all(|c| c.is_empty() || c.is_barrier()));
//! ```

pub mod wilson;

pub use wilson::{
    MazeStats, WALK_STEP_FACTOR, WilsonMaze, empty_neighbors, unvisited_cells,
    unvisited_neighbors,
};
