use gridpath_core::Pos;

use crate::traits::SearchStrategy;

/// Dijkstra (uniform-cost) search: priority is the cost so far.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Dijkstra;

impl SearchStrategy for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    #[inline]
    fn priority(&self, g: i32, _pos: Pos, _goal: Pos) -> i32 {
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Grid;

    #[test]
    fn priority_ignores_goal() {
        assert_eq!(Dijkstra.priority(4, Pos::new(0, 0), Pos::new(9, 9)), 4);
    }

    #[test]
    fn expands_in_rings() {
        let mut grid = Grid::new(7);
        grid.update_all_neighbors();
        let start = Pos::new(3, 3);
        let r = Dijkstra.find_path(&grid, start, Pos::new(0, 0));
        let dist = |p: &Pos| (p.row - start.row).abs() + (p.col - start.col).abs();
        assert!(r.visited.windows(2).all(|w| dist(&w[0]) <= dist(&w[1])));
        assert_eq!(r.path_len(), 6);
    }
}
