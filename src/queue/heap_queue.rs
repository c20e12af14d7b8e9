use std::collections::BinaryHeap;

use super::DijkstraQueueElement;
use crate::graphs::Weight;

/// Binary heap without decrease-key. Outdated entries stay in the heap and have
/// to be skipped by the caller.
#[derive(Clone, Default)]
pub struct HeapQueue {
    queue: BinaryHeap<DijkstraQueueElement>,
}

impl HeapQueue {
    pub fn new() -> HeapQueue {
        HeapQueue {
            queue: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, state: DijkstraQueueElement) {
        self.queue.push(state)
    }

    pub fn pop(&mut self) -> Option<DijkstraQueueElement> {
        self.queue.pop()
    }

    pub fn peek(&self) -> Option<&DijkstraQueueElement> {
        self.queue.peek()
    }

    pub fn peek_weight(&self) -> Option<Weight> {
        self.queue.peek().map(|state| state.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_by_weight_then_insertion_order() {
        let mut queue = HeapQueue::new();
        queue.push(DijkstraQueueElement::new(2.0, 0, 10));
        queue.push(DijkstraQueueElement::new(1.0, 1, 11));
        queue.push(DijkstraQueueElement::new(1.0, 2, 12));
        queue.push(DijkstraQueueElement::new(0.5, 3, 13));

        assert_eq!(queue.peek_weight(), Some(0.5));
        let order: Vec<_> = std::iter::from_fn(|| queue.pop())
            .map(|state| state.candidate)
            .collect();
        assert_eq!(order, vec![13, 11, 12, 10]);
        assert_eq!(queue.peek(), None);
    }
}
