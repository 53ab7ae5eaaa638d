//! Binary min-heap keyed by `f64` priority.
//!
//! `std::collections::BinaryHeap` wants `Ord` keys; search priorities are
//! floats, so the heap is hand-rolled over a `Vec` (which supplies the
//! geometric capacity growth). There is no decrease-key: cost improvements
//! push a fresh entry and stale ones are skipped at pop time via the
//! caller's closed-set check.

use jumpgrid_core::Coord;

#[derive(Debug, Clone, Copy)]
struct Entry {
    priority: f64,
    loc: Coord,
}

/// Min-heap of `(priority, location)` pairs. Duplicate locations are
/// allowed.
#[derive(Debug, Default)]
pub struct MinHeap {
    items: Vec<Entry>,
}

impl MinHeap {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the heap holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Insert an entry and restore the heap order.
    pub fn push(&mut self, priority: f64, loc: Coord) {
        self.items.push(Entry { priority, loc });
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the minimum-priority entry, or `None` when empty.
    pub fn pop(&mut self) -> Option<(f64, Coord)> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let Entry { priority, loc } = self.items.pop()?;
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Some((priority, loc))
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[index].priority < self.items[parent].priority {
                self.items.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = index * 2 + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < self.items.len()
                && self.items[left].priority < self.items[smallest].priority
            {
                smallest = left;
            }
            if right < self.items.len()
                && self.items[right].priority < self.items[smallest].priority
            {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.items.swap(index, smallest);
            index = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_ascending_priority_order() {
        let mut heap = MinHeap::new();
        for (p, x) in [(5.0, 5), (1.0, 1), (3.0, 3), (2.0, 2), (4.0, 4)] {
            heap.push(p, Coord::new(x, 0));
        }
        let mut order = Vec::new();
        while let Some((p, loc)) = heap.pop() {
            order.push((p, loc.x));
        }
        assert_eq!(
            order,
            vec![(1.0, 1), (2.0, 2), (3.0, 3), (4.0, 4), (5.0, 5)]
        );
    }

    #[test]
    fn empty_pop_is_none() {
        let mut heap = MinHeap::new();
        assert!(heap.is_empty());
        assert!(heap.pop().is_none());
    }

    #[test]
    fn duplicate_locations_are_kept() {
        let mut heap = MinHeap::new();
        let loc = Coord::new(2, 3);
        heap.push(4.0, loc);
        heap.push(1.0, loc);
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.pop(), Some((1.0, loc)));
        assert_eq!(heap.pop(), Some((4.0, loc)));
    }

    #[test]
    fn clear_empties_the_heap() {
        let mut heap = MinHeap::new();
        heap.push(1.0, Coord::ZERO);
        heap.clear();
        assert!(heap.is_empty());
        assert!(heap.pop().is_none());
    }
}
