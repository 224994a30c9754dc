use gridpath_core::Pos;

use crate::distance::manhattan;
use crate::traits::SearchStrategy;

/// A* search: priority is cost so far plus the Manhattan distance to the
/// goal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AStar;

impl SearchStrategy for AStar {
    fn name(&self) -> &'static str {
        "A*"
    }

    #[inline]
    fn priority(&self, g: i32, pos: Pos, goal: Pos) -> i32 {
        g + manhattan(pos, goal)
    }
}
