//! The [`Grid`] type: a square arena of [`Cell`]s.
//!
//! Cells are stored by value in a flat row-major vector. Neighbor lists hold
//! [`Pos`] values, never references, so the grid is the sole owner of every
//! cell.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::cell::Cell;
use crate::geom::Pos;
use crate::neighbors::Neighbors;
use crate::state::CellState;

/// A square `size × size` grid of [`Cell`]s.
///
/// The side length is fixed for the grid's lifetime; replace the grid to
/// resize. Every cell's position matches its slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid of side `size` with every cell empty. Negative sizes
    /// yield an empty grid.
    pub fn new(size: i32) -> Self {
        let size = size.max(0);
        let mut cells = Vec::with_capacity(cell_count(size));
        for row in 0..size {
            for col in 0..size {
                cells.push(Cell::new(Pos::new(row, col)));
            }
        }
        Self { size, cells }
    }

    /// Side length (rows == cols).
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.size
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.size
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.size && p.col < self.size
    }

    /// Flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Pos) -> Option<usize> {
        if self.contains(p) {
            Some(p.row as usize * self.size as usize + p.col as usize)
        } else {
            None
        }
    }

    /// Position of flat index `i`.
    #[inline]
    pub fn pos(&self, i: usize) -> Pos {
        let size = self.size.max(1) as usize;
        Pos::new((i / size) as i32, (i % size) as i32)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Pos) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn get_mut(&mut self, p: Pos) -> Option<&mut Cell> {
        self.idx(p).map(|i| &mut self.cells[i])
    }

    /// Attempt a state transition on the cell at `p`. Returns `false` when
    /// `p` is out of bounds or the transition is rejected.
    pub fn set_state(&mut self, p: Pos, state: CellState) -> bool {
        self.get_mut(p).is_some_and(|c| c.set_state(state))
    }

    /// Row-major iterator over the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Cell> {
        self.cells.iter_mut()
    }

    /// Row-major iterator over every position.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells.iter().map(Cell::position)
    }

    /// Number of cells matching `pred`.
    pub fn count(&self, pred: impl Fn(&Cell) -> bool) -> usize {
        self.cells.iter().filter(|&c| pred(c)).count()
    }

    /// Recompute the search-neighbor list of the cell at `p`: in-bounds
    /// orthogonal neighbours that are walkable right now.
    pub fn update_neighbors(&mut self, p: Pos) {
        let mut nb = Neighbors::new();
        self.refresh_neighbors(&mut nb, p);
    }

    /// Recompute search-neighbor lists for every cell.
    ///
    /// Lists are snapshots: call this after editing barriers and before each
    /// search.
    pub fn update_all_neighbors(&mut self) {
        let mut nb = Neighbors::new();
        for i in 0..self.cells.len() {
            let p = self.pos(i);
            self.refresh_neighbors(&mut nb, p);
        }
    }

    fn refresh_neighbors(&mut self, nb: &mut Neighbors, p: Pos) {
        let Some(i) = self.idx(p) else {
            return;
        };
        let list = nb
            .cardinal(p, |n| self.get(n).is_some_and(Cell::is_walkable))
            .to_vec();
        self.cells[i].neighbors = list;
    }

    /// Return every Open, Closed or Path cell to Empty. Terrain is kept.
    pub fn clear_search_marks(&mut self) {
        for c in self.cells.iter_mut() {
            if c.state().annotation().is_some() {
                c.reset();
            }
        }
    }

    /// Return every cell to Empty.
    pub fn reset(&mut self) {
        for c in self.cells.iter_mut() {
            c.reset();
        }
    }

    /// Map a pixel position on a board `width` pixels wide, with square
    /// cells of side `gap`, to a cell position. The x axis selects the row.
    pub fn cell_at_pixel(&self, x: u32, y: u32, gap: u32, width: u32) -> Option<Pos> {
        if gap == 0 || x >= width {
            return None;
        }
        let p = Pos::new((x / gap) as i32, (y / gap) as i32);
        self.contains(p).then_some(p)
    }
}

/// Cells in a grid of side `size`, computed in `usize` so large sides do not
/// overflow `i32`.
fn cell_count(size: i32) -> usize {
    let side = size.max(0) as usize;
    side * side
}

impl Index<Pos> for Grid {
    type Output = Cell;

    /// Panics if `p` is out of bounds.
    fn index(&self, p: Pos) -> &Cell {
        match self.idx(p) {
            Some(i) => &self.cells[i],
            None => panic!("position {p} outside {0}x{0} grid", self.size),
        }
    }
}

impl IndexMut<Pos> for Grid {
    fn index_mut(&mut self, p: Pos) -> &mut Cell {
        match self.idx(p) {
            Some(i) => &mut self.cells[i],
            None => panic!("position {p} outside {0}x{0} grid", self.size),
        }
    }
}

impl fmt::Display for Grid {
    /// One line of glyphs per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1) as usize) {
            for c in row {
                write!(f, "{}", c.state().glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
