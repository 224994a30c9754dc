//! **gridpath-core**: cells, states and the square grid they live in.
//!
//! This crate provides the types shared by the search and maze crates:
//! positions, the validated cell state machine, and a grid arena with
//! 4-directional neighbor topology.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod neighbors;
pub mod state;
pub mod style;

pub use cell::Cell;
pub use geom::Pos;
pub use grid::Grid;
pub use neighbors::Neighbors;
pub use state::{Annotation, CellState, Terrain};
pub use style::Color;
