//! Frontier implementations. Both pop the entry with the smallest `f = g + h` and, among
//! entries of equal `f`, the one enqueued last, so they can be swapped without changing which
//! cells a search visits.
use grid_util::Point;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A discovered cell waiting to be expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrontierEntry {
    pub point: Point,
    /// Number of unit moves taken from the start.
    pub g: i32,
    /// Heuristic estimate of the remaining moves.
    pub h: i32,
}

impl FrontierEntry {
    pub fn new(point: Point, g: i32, h: i32) -> FrontierEntry {
        FrontierEntry { point, g, h }
    }

    /// Saturates, so a goal far off the grid still orders correctly.
    pub fn f(&self) -> i32 {
        self.g.saturating_add(self.h)
    }
}

/// Priority structure the search expands from. Entries are handed out once and never
/// reinserted.
pub trait Frontier: Default {
    fn push(&mut self, entry: FrontierEntry);
    fn pop_best(&mut self) -> Option<FrontierEntry>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Selects a [Frontier] implementation at runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrontierKind {
    /// [SortedFrontier], the reference ordering.
    #[default]
    Sorted,
    /// [HeapFrontier].
    Heap,
}

/// Keeps entries in a plain vector which is re-sorted by descending `f` before every pop, the
/// best entry then sitting at the tail. The sort is stable, so equal-`f` entries keep their
/// insertion order and the newest of them is popped first.
#[derive(Clone, Debug, Default)]
pub struct SortedFrontier {
    entries: Vec<FrontierEntry>,
}

impl Frontier for SortedFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.entries.push(entry);
    }

    fn pop_best(&mut self) -> Option<FrontierEntry> {
        self.entries.sort_by(|a, b| b.f().cmp(&a.f()));
        self.entries.pop()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug)]
struct SmallestCostHolder {
    estimated_cost: i32,
    sequence: usize,
    entry: FrontierEntry,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost == other.estimated_cost && self.sequence == other.sequence
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first, then the most recent insertion, which is the order a
        // stable descending sort popped from the tail produces.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.sequence.cmp(&other.sequence),
            s => s,
        }
    }
}

/// [BinaryHeap] backed frontier with `O(log n)` push and pop. Pops in exactly the same order as
/// [SortedFrontier].
#[derive(Debug, Default)]
pub struct HeapFrontier {
    heap: BinaryHeap<SmallestCostHolder>,
    next_sequence: usize,
}

impl Frontier for HeapFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.heap.push(SmallestCostHolder {
            estimated_cost: entry.f(),
            sequence: self.next_sequence,
            entry,
        });
        self.next_sequence += 1;
    }

    fn pop_best(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|holder| holder.entry)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(x: i32, g: i32, h: i32) -> FrontierEntry {
        FrontierEntry::new(Point::new(x, 0), g, h)
    }

    fn drain<F: Frontier>(mut frontier: F) -> Vec<i32> {
        let mut order = Vec::new();
        while let Some(e) = frontier.pop_best() {
            order.push(e.point.x);
        }
        order
    }

    fn fill<F: Frontier>(entries: &[FrontierEntry]) -> F {
        let mut frontier = F::default();
        for e in entries {
            frontier.push(*e);
        }
        frontier
    }

    #[test]
    fn smallest_f_is_popped_first() {
        let entries = [entry(0, 2, 5), entry(1, 1, 1), entry(2, 0, 4), entry(3, 3, 3)];
        assert_eq!(drain(fill::<SortedFrontier>(&entries)), vec![1, 2, 3, 0]);
        assert_eq!(drain(fill::<HeapFrontier>(&entries)), vec![1, 2, 3, 0]);
    }

    #[test]
    fn ties_pop_newest_first() {
        // g and h differ but f is equal, only insertion order may decide.
        let entries = [entry(0, 1, 3), entry(1, 4, 0), entry(2, 2, 2), entry(3, 0, 4)];
        assert_eq!(drain(fill::<SortedFrontier>(&entries)), vec![3, 2, 1, 0]);
        assert_eq!(drain(fill::<HeapFrontier>(&entries)), vec![3, 2, 1, 0]);
    }

    #[test]
    fn interleaved_push_and_pop_agree() {
        let mut sorted = SortedFrontier::default();
        let mut heap = HeapFrontier::default();
        let batches: [&[FrontierEntry]; 3] = [
            &[entry(0, 0, 4)],
            &[entry(1, 1, 3), entry(2, 1, 3), entry(3, 1, 5)],
            &[entry(4, 2, 2), entry(5, 2, 4)],
        ];
        let mut sorted_order = Vec::new();
        let mut heap_order = Vec::new();
        for batch in batches {
            for e in batch {
                sorted.push(*e);
                heap.push(*e);
            }
            sorted_order.push(sorted.pop_best().map(|e| e.point.x));
            heap_order.push(heap.pop_best().map(|e| e.point.x));
        }
        sorted_order.extend(drain(sorted).into_iter().map(Some));
        heap_order.extend(drain(heap).into_iter().map(Some));
        assert_eq!(sorted_order, heap_order);
        assert_eq!(sorted_order[..3], [Some(0), Some(2), Some(4)]);
    }

    #[test]
    fn saturated_estimates_still_pop() {
        let entries = [entry(0, 3, i32::MAX), entry(1, 0, i32::MAX), entry(2, 1, 5)];
        assert_eq!(entries[0].f(), i32::MAX);
        assert_eq!(drain(fill::<SortedFrontier>(&entries)), vec![2, 1, 0]);
        assert_eq!(drain(fill::<HeapFrontier>(&entries)), vec![2, 1, 0]);
        assert!(format!("{:?}", HeapFrontier::default()).starts_with("HeapFrontier"));
    }

    #[test]
    fn empty_frontier_pops_nothing() {
        let mut frontier = HeapFrontier::default();
        assert!(frontier.is_empty());
        assert!(frontier.pop_best().is_none());
        frontier.push(entry(0, 0, 0));
        assert_eq!(frontier.len(), 1);
    }
}
