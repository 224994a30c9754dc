use gridpath_core::{Grid, Pos};

use crate::result::PathfindingResult;
use crate::search;

/// A shortest-path strategy over a [`Grid`].
///
/// Strategies only differ in how they rank frontier entries; the search loop
/// itself is shared.
pub trait SearchStrategy {
    /// Display name, e.g. `"A*"`.
    fn name(&self) -> &'static str;

    /// Frontier priority of `pos`, reached at cost `g`, when heading for
    /// `goal`. Lower is expanded first.
    fn priority(&self, g: i32, pos: Pos, goal: Pos) -> i32;

    /// Find a shortest route from `start` to `end`.
    ///
    /// Neighbor lists must be current
    /// ([`Grid::update_all_neighbors`]); they are not refreshed here.
    fn find_path(&self, grid: &Grid, start: Pos, end: Pos) -> PathfindingResult {
        search::run(self, grid, start, end)
    }
}
