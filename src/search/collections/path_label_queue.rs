use std::{cmp::Ordering, collections::BinaryHeap};

use crate::graphs::Cost;

/// A candidate path ending at `airport`. The flights taken so far are stored
/// in the search's `LabelTrail`; `trail` points at the last of them and is
/// `None` for the label of the origin.
#[derive(Clone, Copy, Debug)]
pub struct PathLabel<'g> {
    pub cost: Cost,
    pub airport: &'g str,
    pub trail: Option<usize>,
    sequence: u64,
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl Ord for PathLabel<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Costs are flipped. Ties go to the label that was pushed first.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for PathLabel<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PathLabel<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PathLabel<'_> {}

/// Frontier of a label-setting search. Labels are never updated in place; a
/// cheaper path to an airport is simply pushed as another label and stale
/// ones are skipped when popped.
#[derive(Default)]
pub struct PathLabelQueue<'g> {
    heap: BinaryHeap<PathLabel<'g>>,
    pushed: u64,
}

impl<'g> PathLabelQueue<'g> {
    pub fn new() -> Self {
        PathLabelQueue {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    pub fn push(&mut self, cost: Cost, airport: &'g str, trail: Option<usize>) {
        let label = PathLabel {
            cost,
            airport,
            trail,
            sequence: self.pushed,
        };
        self.pushed += 1;
        self.heap.push(label);
    }

    /// Removes and returns the cheapest label.
    pub fn pop(&mut self) -> Option<PathLabel<'g>> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of labels pushed since creation.
    pub fn number_of_pushes(&self) -> u64 {
        self.pushed
    }
}
