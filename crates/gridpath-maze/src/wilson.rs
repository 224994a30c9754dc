//! Maze carving with loop-erased random walks.
//!
//! The grid has no separate wall cells, so corridors and walls share one
//! layer: carving marks corridor cells Empty and seals every still-unvisited
//! cell beside a finished walk as a Barrier.
//!
//! Outline of [`WilsonMaze::generate`]:
//!
//! 1. Mark every cell Unvisited.
//! 2. Carve a random unvisited target.
//! 3. Walk randomly from another unvisited cell through unvisited cells,
//!    carving as it goes. Stepping back onto the walk erases the loop (those
//!    cells return to Unvisited). The walk stops when it gets stuck or hits
//!    the step cap; if it never touched carved floor the target is un-carved.
//! 4. Seal the unvisited neighbours of the walk as barriers and repeat from 2
//!    while unvisited cells remain.
//! 5. Seal whatever is still unvisited.

use gridpath_core::{Cell, Grid, Neighbors, Pos};
use rand::rngs::SmallRng;
use rand::{Rng, RngExt, SeedableRng};

/// A walk may take at most this many steps per unit of grid side.
pub const WALK_STEP_FACTOR: usize = 3;

/// Counters describing one [`WilsonMaze::generate`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MazeStats {
    /// Outer iterations (target picks).
    pub iterations: usize,
    /// Walks that did not connect to carved floor.
    pub failed_walks: usize,
    /// Loops erased across all walks.
    pub loops_erased: usize,
    /// Cells still unvisited at the end and turned into barriers.
    pub sealed: usize,
}

/// Maze generator using Wilson's algorithm on a single-layer grid.
///
/// The random source is injected so tests can seed it; the walk buffer is
/// kept between calls for inspection and emptied by [`clear`](Self::clear).
pub struct WilsonMaze<R: Rng> {
    rng: R,
    walk: Vec<Pos>,
    nb: Neighbors,
}

impl WilsonMaze<SmallRng> {
    /// A generator with a reproducible random source.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// A generator seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> WilsonMaze<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            walk: Vec::new(),
            nb: Neighbors::new(),
        }
    }

    /// The most recent walk, start cell first.
    pub fn walk(&self) -> &[Pos] {
        &self.walk
    }

    /// Drop the walk buffer. Grid contents are not touched.
    pub fn clear(&mut self) {
        self.walk.clear();
    }

    /// Turn `grid` into a maze in place. Afterwards every cell is either
    /// Empty or Barrier, whatever the grid held before.
    pub fn generate(&mut self, grid: &mut Grid) -> MazeStats {
        let mut stats = MazeStats::default();
        self.walk.clear();

        for c in grid.iter_mut() {
            c.reset();
            c.set_unvisited();
        }

        let max_steps = WALK_STEP_FACTOR * grid.size() as usize;
        let stall_limit = grid.len();
        let mut stalls = 0;
        let mut unvisited = unvisited_cells(grid);

        while !unvisited.is_empty() {
            stats.iterations += 1;
            let before = unvisited.len();

            let target = unvisited[self.rng.random_range(0..unvisited.len())];
            grid[target].reset();

            unvisited = unvisited_cells(grid);
            if unvisited.is_empty() {
                break;
            }

            let start = unvisited[self.rng.random_range(0..unvisited.len())];
            self.carve_walk(grid, target, start, max_steps, &mut stats);
            unvisited = unvisited_cells(grid);

            if unvisited.len() >= before {
                stalls += 1;
                if stalls >= stall_limit {
                    log::warn!(
                        "wilson: no progress after {stalls} iterations, sealing {} cells",
                        unvisited.len()
                    );
                    break;
                }
            }
        }

        for c in grid.iter_mut() {
            if c.is_unvisited() {
                c.set_barrier();
                stats.sealed += 1;
            }
        }

        log::debug!(
            "wilson: {0}x{0} maze in {1} iterations, {2} failed walks, {3} loops erased, {4} sealed",
            grid.size(),
            stats.iterations,
            stats.failed_walks,
            stats.loops_erased,
            stats.sealed
        );
        stats
    }

    /// One walk towards carved floor around `target`, then seal it in. A walk
    /// that never touches carved floor un-carves `target`.
    fn carve_walk(
        &mut self,
        grid: &mut Grid,
        target: Pos,
        start: Pos,
        max_steps: usize,
        stats: &mut MazeStats,
    ) -> bool {
        let reached = self.random_walk(grid, start, max_steps, stats);
        if !reached {
            stats.failed_walks += 1;
            if grid[target].is_empty() {
                grid[target].set_unvisited();
            }
        }
        self.seal_walk(grid);
        reached
    }

    /// Loop-erased random walk from `start` through unvisited cells.
    ///
    /// Returns `true` when the walk got stuck next to carved floor, `false`
    /// when it got stuck elsewhere or ran out of steps.
    fn random_walk(
        &mut self,
        grid: &mut Grid,
        start: Pos,
        max_steps: usize,
        stats: &mut MazeStats,
    ) -> bool {
        self.walk.clear();
        self.walk.push(start);
        let mut current = start;

        for _ in 0..max_steps {
            let choices = self.nb.cardinal(current, |p| cell_is(&*grid, p, Cell::is_unvisited));
            if choices.is_empty() {
                return has_neighbor(grid, current, Cell::is_empty);
            }
            let next = choices[self.rng.random_range(0..choices.len())];

            if let Some(i) = self.walk.iter().position(|&p| p == next) {
                for p in self.walk.drain(i + 1..) {
                    if grid[p].is_empty() {
                        grid[p].set_unvisited();
                    }
                }
                stats.loops_erased += 1;
                log::trace!("wilson: erased loop back to {next}, walk length {}", i + 1);
            } else {
                grid[next].reset();
                self.walk.push(next);
            }
            current = next;
        }

        log::trace!(
            "wilson: walk from {start} aborted after {max_steps} steps ({} cells)",
            self.walk.len()
        );
        false
    }

    /// Wall in the current walk: unvisited neighbours become barriers.
    fn seal_walk(&mut self, grid: &mut Grid) {
        for &p in &self.walk {
            for n in p.neighbors_4() {
                if let Some(c) = grid.get_mut(n) {
                    if c.is_unvisited() {
                        c.set_barrier();
                    }
                }
            }
        }
    }
}

#[inline]
fn cell_is(grid: &Grid, p: Pos, pred: fn(&Cell) -> bool) -> bool {
    grid.get(p).is_some_and(pred)
}

fn has_neighbor(grid: &Grid, p: Pos, pred: fn(&Cell) -> bool) -> bool {
    p.neighbors_4().into_iter().any(|n| cell_is(grid, n, pred))
}

/// In-bounds orthogonal neighbours of `pos` that are still unvisited.
pub fn unvisited_neighbors(grid: &Grid, pos: Pos) -> Vec<Pos> {
    Neighbors::new()
        .cardinal(pos, |p| cell_is(grid, p, Cell::is_unvisited))
        .to_vec()
}

/// In-bounds orthogonal neighbours of `pos` that are carved (Empty).
pub fn empty_neighbors(grid: &Grid, pos: Pos) -> Vec<Pos> {
    Neighbors::new()
        .cardinal(pos, |p| cell_is(grid, p, Cell::is_empty))
        .to_vec()
}

/// Every unvisited cell, row-major.
pub fn unvisited_cells(grid: &Grid) -> Vec<Pos> {
    grid.iter()
        .filter(|c| c.is_unvisited())
        .map(Cell::position)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::CellState;
    use gridpath_paths::{Algorithm, SearchStrategy};

    fn unvisited_grid(size: i32) -> Grid {
        let mut g = Grid::new(size);
        for c in g.iter_mut() {
            assert!(c.set_unvisited());
        }
        g
    }

    fn only_empty_or_barrier(grid: &Grid) -> bool {
        grid.iter().all(|c| c.is_empty() || c.is_barrier())
    }

    #[test]
    fn center_has_four_unvisited_neighbors() {
        let g = unvisited_grid(3);
        assert_eq!(unvisited_neighbors(&g, Pos::new(1, 1)).len(), 4);
    }

    #[test]
    fn corner_has_two_unvisited_neighbors() {
        let g = unvisited_grid(3);
        assert_eq!(unvisited_neighbors(&g, Pos::new(0, 0)).len(), 2);
        assert_eq!(unvisited_neighbors(&g, Pos::new(2, 2)).len(), 2);
        assert_eq!(unvisited_neighbors(&g, Pos::new(0, 1)).len(), 3);
    }

    #[test]
    fn maze_neighbors_ignore_walkability() {
        let mut g = unvisited_grid(3);
        g[Pos::new(0, 1)].reset();
        g[Pos::new(1, 0)].set_barrier();
        assert_eq!(empty_neighbors(&g, Pos::new(1, 1)), vec![Pos::new(0, 1)]);
        assert_eq!(
            unvisited_neighbors(&g, Pos::new(1, 1)),
            vec![Pos::new(2, 1), Pos::new(1, 2)]
        );
        // Search neighbors would include the empty and unvisited cells alike.
        g.update_all_neighbors();
        assert_eq!(g[Pos::new(1, 1)].neighbors().len(), 3);
    }

    #[test]
    fn unvisited_cells_lists_marked_cells() {
        let mut g = unvisited_grid(2);
        g[Pos::new(0, 1)].reset();
        assert_eq!(
            unvisited_cells(&g),
            vec![Pos::new(0, 0), Pos::new(1, 0), Pos::new(1, 1)]
        );
    }

    #[test]
    fn generation_leaves_only_empty_and_barrier() {
        for size in 1..=12 {
            for seed in 0..5 {
                let mut g = Grid::new(size);
                WilsonMaze::seeded(seed).generate(&mut g);
                assert!(only_empty_or_barrier(&g), "size {size}, seed {seed}:\n{g}");
            }
        }
    }

    #[test]
    fn both_states_present() {
        for size in 3..=10 {
            for seed in 0..5 {
                let mut g = Grid::new(size);
                WilsonMaze::seeded(seed).generate(&mut g);
                assert!(g.count(Cell::is_empty) > 0, "size {size}, seed {seed}");
                assert!(g.count(Cell::is_barrier) > 0, "size {size}, seed {seed}");
            }
        }
    }

    #[test]
    fn two_by_two_may_seal_everything() {
        // The walk start stays unvisited next to every other cell, so walks
        // keep erasing back to it and often hit the step cap.
        let mut all_barrier = 0;
        for seed in 0..50 {
            let mut g = Grid::new(2);
            let stats = WilsonMaze::seeded(seed).generate(&mut g);
            assert!(only_empty_or_barrier(&g), "seed {seed}:\n{g}");
            if g.count(Cell::is_barrier) == 4 {
                assert!(stats.failed_walks > 0, "seed {seed}");
                all_barrier += 1;
            }
        }
        assert!(all_barrier > 0);
    }

    fn adjacent(a: Pos, b: Pos) -> bool {
        (a.row - b.row).abs() + (a.col - b.col).abs() == 1
    }

    #[test]
    fn walk_invariants() {
        let mut reached_count = 0;
        for size in 2..=8 {
            for seed in 0..50 {
                let mut g = unvisited_grid(size);
                let start = Pos::ZERO;
                let target = Pos::new(size - 1, size - 1);
                g[target].reset();
                let mut maze = WilsonMaze::seeded(seed);
                let mut stats = MazeStats::default();
                let max_steps = WALK_STEP_FACTOR * size as usize;
                let reached = maze.random_walk(&mut g, start, max_steps, &mut stats);
                let walk = maze.walk().to_vec();
                let ctx = format!("size {size}, seed {seed}");

                assert_eq!(walk.first(), Some(&start), "{ctx}");
                assert!(g[start].is_unvisited(), "{ctx}");
                assert!(walk.len() <= max_steps + 1, "{ctx}");
                for &p in &walk[1..] {
                    assert!(g[p].is_empty(), "{ctx}: {p}");
                }
                for w in walk.windows(2) {
                    assert!(adjacent(w[0], w[1]), "{ctx}: {} {}", w[0], w[1]);
                }
                let mut sorted = walk.clone();
                sorted.sort();
                sorted.dedup();
                assert_eq!(sorted.len(), walk.len(), "{ctx}");

                for c in g.iter().filter(|c| c.is_empty()) {
                    let p = c.position();
                    assert!(p == target || walk.contains(&p), "{ctx}: stray floor {p}");
                }
                let last = *walk.last().unwrap();
                if reached {
                    reached_count += 1;
                    assert!(!empty_neighbors(&g, last).is_empty(), "{ctx}");
                }

                maze.seal_walk(&mut g);
                for &p in &walk {
                    assert!(unvisited_neighbors(&g, p).is_empty(), "{ctx}: {p}");
                }
            }
        }
        assert!(reached_count > 0);
    }

    #[test]
    fn failed_walk_uncarves_target() {
        // The target is walled off, so no walk can reach carved floor.
        let mut g = unvisited_grid(4);
        let target = Pos::new(3, 3);
        g[target].reset();
        g[Pos::new(2, 3)].set_barrier();
        g[Pos::new(3, 2)].set_barrier();
        for seed in 0..10 {
            let mut grid = g.clone();
            let mut maze = WilsonMaze::seeded(seed);
            let mut stats = MazeStats::default();
            let reached = maze.carve_walk(&mut grid, target, Pos::ZERO, 12, &mut stats);
            assert!(!reached, "seed {seed}");
            assert_eq!(stats.failed_walks, 1);
            assert!(grid[target].is_unvisited(), "seed {seed}");
            for &p in maze.walk() {
                assert!(unvisited_neighbors(&grid, p).is_empty(), "seed {seed}: {p}");
            }
        }
    }

    #[test]
    fn zero_step_walk_fails_and_seals_start() {
        let mut g = unvisited_grid(3);
        let target = Pos::new(2, 2);
        g[target].reset();
        let mut maze = WilsonMaze::seeded(1);
        let mut stats = MazeStats::default();
        assert!(!maze.carve_walk(&mut g, target, Pos::new(1, 1), 0, &mut stats));
        assert_eq!(maze.walk(), &[Pos::new(1, 1)]);
        assert!(g[target].is_unvisited());
        assert!(g[Pos::new(1, 1)].is_unvisited());
        for p in Pos::new(1, 1).neighbors_4() {
            assert!(g[p].is_barrier(), "{p}");
        }
    }

    #[test]
    fn single_cell_is_carved() {
        let mut g = Grid::new(1);
        let stats = WilsonMaze::seeded(7).generate(&mut g);
        assert!(g[Pos::ZERO].is_empty());
        assert_eq!(stats.iterations, 1);
        assert_eq!(stats.sealed, 0);
    }

    #[test]
    fn empty_grid_is_a_no_op() {
        let mut g = Grid::new(0);
        let stats = WilsonMaze::seeded(1).generate(&mut g);
        assert_eq!(stats, MazeStats::default());
    }

    #[test]
    fn same_seed_same_maze() {
        let mut a = Grid::new(15);
        let mut b = Grid::new(15);
        WilsonMaze::seeded(42).generate(&mut a);
        WilsonMaze::seeded(42).generate(&mut b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn seeds_vary_the_maze() {
        let mazes: Vec<String> = (0..5)
            .map(|seed| {
                let mut g = Grid::new(10);
                WilsonMaze::seeded(seed).generate(&mut g);
                g.to_string()
            })
            .collect();
        assert!(mazes.iter().any(|m| m != &mazes[0]));
    }

    #[test]
    fn prior_contents_are_overwritten() {
        let mut g = Grid::new(6);
        g[Pos::new(0, 0)].set_start();
        g[Pos::new(5, 5)].set_end();
        g[Pos::new(2, 2)].set_barrier();
        g[Pos::new(3, 3)].set_path();
        g[Pos::new(4, 4)].set_closed();
        WilsonMaze::seeded(3).generate(&mut g);
        assert!(only_empty_or_barrier(&g));
    }

    #[test]
    fn walk_respects_step_cap_and_clear() {
        let size = 12;
        let mut g = Grid::new(size);
        let mut maze = WilsonMaze::seeded(9);
        let stats = maze.generate(&mut g);
        assert!(stats.iterations >= 1);
        assert!(maze.walk().len() <= WALK_STEP_FACTOR * size as usize + 1);
        maze.clear();
        assert!(maze.walk().is_empty());
        // Clearing leaves the grid alone.
        assert!(only_empty_or_barrier(&g));
    }

    #[test]
    fn generator_is_reusable() {
        let mut maze = WilsonMaze::seeded(5);
        for size in [4, 8, 3] {
            let mut g = Grid::new(size);
            maze.generate(&mut g);
            assert!(only_empty_or_barrier(&g));
        }
    }

    #[test]
    fn routes_through_a_maze_avoid_barriers() {
        for seed in 0..5 {
            let mut g = Grid::new(12);
            WilsonMaze::seeded(seed).generate(&mut g);
            let open: Vec<Pos> = g.iter().filter(|c| c.is_empty()).map(Cell::position).collect();
            let (Some(&start), Some(&end)) = (open.first(), open.last()) else {
                continue;
            };
            g.update_all_neighbors();
            for alg in Algorithm::ALL {
                let r = alg.strategy().find_path(&g, start, end);
                for &p in r.path.iter().flatten() {
                    assert_ne!(g[p].state(), CellState::BARRIER, "{alg} seed {seed}");
                }
            }
        }
    }

    #[test]
    fn custom_rng_is_used() {
        let mut maze = WilsonMaze::new(SmallRng::seed_from_u64(11));
        let mut g = Grid::new(5);
        maze.generate(&mut g);
        assert!(only_empty_or_barrier(&g));
    }
}
