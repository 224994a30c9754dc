//! Shortest-path search over gridpath grids.
//!
//! Two interchangeable strategies share one best-first loop:
//!
//! - **A\*** ([`AStar`]): priority `g + manhattan(pos, goal)`
//! - **Dijkstra** ([`Dijkstra`]): priority `g`
//!
//! Both run over the cached neighbor lists of a [`gridpath_core::Grid`] with
//! unit step cost, break ties first-in-first-out through [`Frontier`], and
//! report their outcome as a [`PathfindingResult`]. An unreachable goal is
//! not an error: the result simply has no path.
//!
//! ```
//! use gridpath_core::{Grid, Pos};
//! use gridpath_paths::{AStar, SearchStrategy};
//!
//! let mut grid = Grid::new(10);
//! grid.update_all_neighbors();
//! let result = AStar.find_path(&grid, Pos::new(0, 0), Pos::new(9, 9));
//! assert!(result.found());
//! assert_eq!(result.path_len(), 18);
//! ```

mod algorithm;
mod astar;
mod dijkstra;
mod distance;
mod frontier;
mod result;
mod search;
mod traits;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use astar::AStar;
pub use dijkstra::Dijkstra;
pub use distance::manhattan;
pub use frontier::{Frontier, FrontierKey};
pub use result::{PathfindingResult, reconstruct_path};
pub use search::UNREACHABLE;
pub use traits::SearchStrategy;
