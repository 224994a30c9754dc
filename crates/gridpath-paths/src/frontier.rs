use std::cmp::Ordering;
use std::collections::hash_map::Entry as MapEntry;
use std::collections::{BinaryHeap, HashMap};

use gridpath_core::Pos;

/// Ordering key of a frontier entry: priority first, then insertion order.
///
/// `seq` is unique per queued position, so the key is a strict total order
/// and equal priorities are served first-inserted-first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrontierKey {
    pub priority: i32,
    pub seq: u64,
}

/// Heap entry. Ordered by `key` only, reversed so `BinaryHeap` (a max-heap)
/// pops the smallest key first.
#[derive(Clone, Copy, Debug)]
struct HeapEntry {
    key: FrontierKey,
    pos: Pos,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key.cmp(&self.key)
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of positions with O(1) membership.
///
/// A position holds at most one live entry. Lowering the priority of a
/// queued position keeps its sequence number; the superseded heap entry is
/// skipped when it surfaces.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<HeapEntry>,
    queued: HashMap<Pos, FrontierKey>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `pos` with `priority`, or lower its priority if it is already
    /// queued with a higher one. Returns the live key of `pos`.
    pub fn push(&mut self, pos: Pos, priority: i32) -> FrontierKey {
        match self.queued.entry(pos) {
            MapEntry::Occupied(mut e) => {
                let key = e.get_mut();
                if priority < key.priority {
                    key.priority = priority;
                    self.heap.push(HeapEntry { key: *key, pos });
                }
                *key
            }
            MapEntry::Vacant(e) => {
                let key = FrontierKey {
                    priority,
                    seq: self.next_seq,
                };
                self.next_seq += 1;
                e.insert(key);
                self.heap.push(HeapEntry { key, pos });
                key
            }
        }
    }

    /// Remove and return the position with the smallest key.
    pub fn pop(&mut self) -> Option<(FrontierKey, Pos)> {
        while let Some(HeapEntry { key, pos }) = self.heap.pop() {
            if self.queued.get(&pos) == Some(&key) {
                self.queued.remove(&pos);
                return Some((key, pos));
            }
        }
        None
    }

    /// Whether `pos` is currently queued.
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.queued.contains_key(&pos)
    }

    /// Number of queued positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.queued.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_priority_first() {
        let mut f = Frontier::new();
        f.push(Pos::new(0, 0), 5);
        f.push(Pos::new(0, 1), 1);
        f.push(Pos::new(0, 2), 3);
        let order: Vec<Pos> = std::iter::from_fn(|| f.pop().map(|(_, p)| p)).collect();
        assert_eq!(order, vec![Pos::new(0, 1), Pos::new(0, 2), Pos::new(0, 0)]);
    }

    #[test]
    fn ties_are_fifo() {
        let mut f = Frontier::new();
        // Inserted in reverse row-major order so position ordering would
        // disagree with insertion order.
        for col in (0..5).rev() {
            f.push(Pos::new(0, col), 7);
        }
        let order: Vec<i32> = std::iter::from_fn(|| f.pop().map(|(_, p)| p.col)).collect();
        assert_eq!(order, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn sequence_numbers_increase() {
        let mut f = Frontier::new();
        let a = f.push(Pos::new(1, 1), 0);
        let b = f.push(Pos::new(2, 2), 0);
        assert!(a.seq < b.seq);
        assert!(a < b);
    }

    #[test]
    fn membership_tracks_queue() {
        let mut f = Frontier::new();
        assert!(f.is_empty());
        f.push(Pos::new(1, 1), 2);
        assert!(f.contains(Pos::new(1, 1)));
        assert_eq!(f.len(), 1);
        f.pop();
        assert!(!f.contains(Pos::new(1, 1)));
        assert!(f.is_empty());
        assert!(f.pop().is_none());
    }

    #[test]
    fn lowering_priority_keeps_sequence() {
        let mut f = Frontier::new();
        let first = f.push(Pos::new(0, 0), 10);
        f.push(Pos::new(0, 1), 4);
        let rekeyed = f.push(Pos::new(0, 0), 4);
        assert_eq!(rekeyed.seq, first.seq);
        assert_eq!(rekeyed.priority, 4);
        assert_eq!(f.len(), 2);
        assert_eq!(f.pop().map(|(_, p)| p), Some(Pos::new(0, 0)));
        assert_eq!(f.pop().map(|(_, p)| p), Some(Pos::new(0, 1)));
        // The superseded entry is dropped, not returned.
        assert!(f.pop().is_none());
    }

    #[test]
    fn raising_priority_is_ignored() {
        let mut f = Frontier::new();
        f.push(Pos::new(0, 0), 1);
        let key = f.push(Pos::new(0, 0), 9);
        assert_eq!(key.priority, 1);
        assert_eq!(f.len(), 1);
    }
}
