use std::cmp::Ordering;

use crate::{graphs::Weight, search::candidate::CandidateId};

pub mod heap_queue;

/// Entry of the open queue. `sequence` records insertion order and breaks ties
/// between equal weights, so that the search is deterministic for a fixed
/// order of relaxations.
#[derive(Copy, Clone, Debug)]
pub struct DijkstraQueueElement {
    pub weight: Weight,
    pub sequence: u64,
    pub candidate: CandidateId,
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl Ord for DijkstraQueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip both comparisons: smaller weight first, then earlier insertion.
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for DijkstraQueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DijkstraQueueElement {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DijkstraQueueElement {}

impl DijkstraQueueElement {
    pub fn new(weight: Weight, sequence: u64, candidate: CandidateId) -> DijkstraQueueElement {
        DijkstraQueueElement {
            weight,
            sequence,
            candidate,
        }
    }
}
