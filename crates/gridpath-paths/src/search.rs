use std::collections::HashMap;

use gridpath_core::{Grid, Pos};

use crate::frontier::Frontier;
use crate::result::{PathfindingResult, reconstruct_path};
use crate::traits::SearchStrategy;

/// Sentinel cost of a cell not reached yet.
pub const UNREACHABLE: i32 = i32::MAX;

/// Shared best-first search loop. Every step costs 1.
pub(crate) fn run<S: SearchStrategy + ?Sized>(
    strategy: &S,
    grid: &Grid,
    start: Pos,
    end: Pos,
) -> PathfindingResult {
    let mut came_from: HashMap<Pos, Pos> = HashMap::new();
    let mut visited: Vec<Pos> = Vec::new();

    let Some(start_idx) = grid.idx(start) else {
        return PathfindingResult::new(None, came_from, visited);
    };

    let mut g = vec![UNREACHABLE; grid.len()];
    g[start_idx] = 0;

    let mut frontier = Frontier::new();
    frontier.push(start, strategy.priority(0, start, end));

    while let Some((_, current)) = frontier.pop() {
        if current == end {
            let path = reconstruct_path(&came_from, end);
            log::debug!(
                "{}: {} -> {} in {} steps, {} cells expanded",
                strategy.name(),
                start,
                end,
                path.len(),
                visited.len()
            );
            return PathfindingResult::new(Some(path), came_from, visited);
        }

        visited.push(current);

        let Some(ci) = grid.idx(current) else {
            continue;
        };
        let tentative = g[ci] + 1;

        for &n in grid[current].neighbors() {
            let Some(ni) = grid.idx(n) else {
                continue;
            };
            if tentative < g[ni] {
                came_from.insert(n, current);
                g[ni] = tentative;
                frontier.push(n, strategy.priority(tentative, n, end));
            }
        }
    }

    log::debug!(
        "{}: no route {} -> {}, {} cells expanded",
        strategy.name(),
        start,
        end,
        visited.len()
    );
    PathfindingResult::new(None, came_from, visited)
}
