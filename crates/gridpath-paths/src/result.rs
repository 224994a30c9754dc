use std::collections::HashMap;

use gridpath_core::{Grid, Pos};

/// Outcome of a single [`find_path`](crate::SearchStrategy::find_path) call.
///
/// "No route" is an ordinary outcome: `path` is `None` and `visited` holds
/// everything that was explored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathfindingResult {
    /// Route from the cell after start up to and including end. `None` when
    /// unreachable, `Some(vec![])` when start equals end.
    pub path: Option<Vec<Pos>>,
    /// Predecessor of each reached cell on the shortest-path tree. The start
    /// cell has no entry.
    pub came_from: HashMap<Pos, Pos>,
    /// Cells expanded, in order. The goal cell is never included.
    pub visited: Vec<Pos>,
}

impl PathfindingResult {
    pub fn new(path: Option<Vec<Pos>>, came_from: HashMap<Pos, Pos>, visited: Vec<Pos>) -> Self {
        Self {
            path,
            came_from,
            visited,
        }
    }

    /// Whether a route was found.
    #[inline]
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of steps on the route, 0 when none was found.
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }

    /// Paint the result onto `grid`: expanded cells become Closed, route
    /// cells become Path. The `start` and `end` cells are left as they are.
    pub fn paint(&self, grid: &mut Grid, start: Pos, end: Pos) {
        let keep = |p: Pos| p == start || p == end;
        for &p in self.visited.iter().filter(|&&p| !keep(p)) {
            if let Some(c) = grid.get_mut(p) {
                c.set_closed();
            }
        }
        for &p in self.path.iter().flatten().filter(|&&p| !keep(p)) {
            if let Some(c) = grid.get_mut(p) {
                c.set_path();
            }
        }
    }
}

/// Walk `came_from` back from `end` until a cell with no predecessor, then
/// reverse. The root (start) is not included; `end` is.
pub fn reconstruct_path(came_from: &HashMap<Pos, Pos>, end: Pos) -> Vec<Pos> {
    let mut path = Vec::new();
    let mut current = end;
    while let Some(&prev) = came_from.get(&current) {
        path.push(current);
        current = prev;
    }
    path.reverse();
    path
}
