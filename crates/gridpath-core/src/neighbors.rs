use crate::geom::Pos;

/// Reusable 4-directional neighbor query.
///
/// Holds a small buffer so repeated queries do not allocate. Which neighbours
/// count is decided entirely by the caller's predicate: search keeps walkable
/// cells, maze carving keeps unvisited or empty ones.
pub struct Neighbors {
    buf: Vec<Pos>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the orthogonal neighbours of `p` (up, down, left, right),
    /// keeping only those for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Pos, keep: impl Fn(Pos) -> bool) -> &[Pos] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicate_filters() {
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Pos::new(0, 0), |p| p.row >= 0 && p.col >= 0);
        assert_eq!(got, &[Pos::new(1, 0), Pos::new(0, 1)]);
        let got = nb.cardinal(Pos::new(1, 1), |_| true);
        assert_eq!(got.len(), 4);
    }
}
