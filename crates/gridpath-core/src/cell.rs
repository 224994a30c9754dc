//! The [`Cell`] type: a grid position with a validated state.

use std::fmt;

use crate::geom::Pos;
use crate::state::{Annotation, CellState, Terrain};
use crate::style::Color;

/// A single grid position.
///
/// The position is fixed at construction. The state only changes through
/// [`set_state`](Cell::set_state), which rejects transitions the state table
/// does not allow; the `set_*` helpers are thin wrappers over it.
///
/// `neighbors` is a cached snapshot of walkable orthogonal neighbours, filled
/// by [`Grid::update_neighbors`](crate::Grid::update_neighbors). It is not
/// refreshed on state changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pos: Pos,
    state: CellState,
    pub(crate) neighbors: Vec<Pos>,
}

impl Cell {
    /// Create an empty cell at `pos`.
    pub fn new(pos: Pos) -> Self {
        Self {
            pos,
            state: CellState::EMPTY,
            neighbors: Vec::new(),
        }
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col
    }

    /// Position of this cell in its grid.
    #[inline]
    pub fn position(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    /// Move to `next` if the transition table allows it.
    ///
    /// Returns `false` and leaves the cell untouched otherwise.
    pub fn set_state(&mut self, next: CellState) -> bool {
        if self.state.can_transition_to(next) {
            self.state = next;
            true
        } else {
            false
        }
    }

    /// Return to [`CellState::EMPTY`]. Every state accepts this, so the
    /// result is always `true`.
    pub fn reset(&mut self) -> bool {
        let ok = self.set_state(CellState::EMPTY);
        debug_assert!(ok, "every state must accept Empty");
        ok
    }

    pub fn set_barrier(&mut self) -> bool {
        self.set_state(CellState::BARRIER)
    }

    pub fn set_start(&mut self) -> bool {
        self.set_state(CellState::START)
    }

    pub fn set_end(&mut self) -> bool {
        self.set_state(CellState::END)
    }

    pub fn set_open(&mut self) -> bool {
        self.set_state(CellState::OPEN)
    }

    pub fn set_closed(&mut self) -> bool {
        self.set_state(CellState::CLOSED)
    }

    pub fn set_path(&mut self) -> bool {
        self.set_state(CellState::PATH)
    }

    pub fn set_unvisited(&mut self) -> bool {
        self.set_state(CellState::UNVISITED)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state == CellState::EMPTY
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.state == CellState::BARRIER
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.state == CellState::START
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.state == CellState::END
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state == CellState::OPEN
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.state == CellState::CLOSED
    }

    #[inline]
    pub fn is_path(&self) -> bool {
        self.state == CellState::PATH
    }

    #[inline]
    pub fn is_unvisited(&self) -> bool {
        self.state == CellState::UNVISITED
    }

    /// Whether search may step onto this cell.
    #[inline]
    pub fn is_walkable(&self) -> bool {
        self.state.is_walkable()
    }

    /// Render colour of the current state.
    #[inline]
    pub fn color(&self) -> Color {
        self.state.color()
    }

    /// Cached walkable neighbours, as of the last neighbor update.
    #[inline]
    pub fn neighbors(&self) -> &[Pos] {
        &self.neighbors
    }

    /// Whether `pos` is in the cached neighbor list.
    pub fn is_neighbor(&self, pos: Pos) -> bool {
        self.neighbors.contains(&pos)
    }

    /// Pixel rectangle `(x, y, w, h)` of this cell on a board with square
    /// cells of side `gap`. Rows run along the x axis.
    pub fn rect(&self, gap: u32) -> (u32, u32, u32, u32) {
        let x = self.pos.row.max(0) as u32 * gap;
        let y = self.pos.col.max(0) as u32 * gap;
        (x, y, gap, gap)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            CellState::Base(Terrain::Empty) => "Empty",
            CellState::Base(Terrain::Barrier) => "Barrier",
            CellState::Base(Terrain::Start) => "Start",
            CellState::Base(Terrain::End) => "End",
            CellState::Search(Annotation::Open) => "Open",
            CellState::Search(Annotation::Closed) => "Closed",
            CellState::Search(Annotation::Path) => "Path",
            CellState::Unvisited => "Unvisited",
        };
        write!(f, "Cell({}, {}, state={state})", self.pos.row, self.pos.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell() -> Cell {
        Cell::new(Pos::new(5, 10))
    }

    #[test]
    fn starts_empty() {
        let c = cell();
        assert!(c.is_empty());
        assert!(c.is_walkable());
        assert_eq!(c.position(), Pos::new(5, 10));
        assert_eq!((c.row(), c.col()), (5, 10));
        assert!(c.neighbors().is_empty());
    }

    #[test]
    fn reset_always_succeeds() {
        for s in CellState::ALL {
            let mut c = cell();
            assert!(c.set_state(s));
            assert!(c.reset(), "{s:?}");
            assert!(c.is_empty(), "{s:?}");
            assert!(c.is_walkable());
        }
    }

    #[test]
    fn barrier_cannot_become_start() {
        let mut c = cell();
        assert!(c.set_barrier());
        assert!(!c.set_start());
        assert!(c.is_barrier());
        assert!(!c.is_walkable());
    }

    #[test]
    fn start_cannot_become_end() {
        let mut c = cell();
        assert!(c.set_start());
        assert!(!c.set_end());
        assert!(c.is_start());
    }

    #[test]
    fn end_cannot_become_start() {
        let mut c = cell();
        assert!(c.set_end());
        assert!(!c.set_state(CellState::START));
        assert!(c.is_end());
    }

    #[test]
    fn search_flow() {
        let mut c = cell();
        assert!(c.set_open());
        assert!(c.set_closed());
        assert!(c.set_path());
        assert!(c.is_path());
        assert!(!c.set_closed());
        assert!(c.is_path());
    }

    #[test]
    fn closed_may_become_barrier() {
        let mut c = cell();
        assert!(c.set_closed());
        assert!(c.set_barrier());
        assert!(c.is_barrier());
    }

    #[test]
    fn unvisited_flow() {
        let mut c = cell();
        assert!(c.set_unvisited());
        assert!(c.is_unvisited());
        assert!(!c.is_closed());
        assert!(!c.set_start());
        assert!(c.set_barrier());
        assert!(!c.set_unvisited());
    }

    #[test]
    fn rect_maps_row_to_x() {
        let c = Cell::new(Pos::new(2, 3));
        assert_eq!(c.rect(16), (32, 48, 16, 16));
    }

    #[test]
    fn display() {
        let mut c = Cell::new(Pos::new(1, 2));
        c.set_barrier();
        assert_eq!(c.to_string(), "Cell(1, 2, state=Barrier)");
    }
}
