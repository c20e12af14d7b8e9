use ahash::{HashMap, HashMapExt};

use super::{
    candidate::{Candidate, CandidateId, CandidateTree},
    SearchError,
};
use crate::{
    graphs::{Connection, NodeId, Weight},
    queue::{heap_queue::HeapQueue, DijkstraQueueElement},
};

/// Open and closed sets of one search direction.
///
/// Every node has at most one open and at most one closed candidate. Improving
/// an open node creates a new candidate; the queue entry of the old one is left
/// behind and skipped once it surfaces.
pub struct Frontier {
    tree: CandidateTree,
    queue: HeapQueue,
    open: HashMap<NodeId, CandidateId>,
    closed: HashMap<NodeId, CandidateId>,
    sequence: u64,
}

impl Frontier {
    pub fn new(root: &str) -> Frontier {
        let tree = CandidateTree::new(root);
        let mut open = HashMap::new();
        open.insert(root.to_string(), CandidateTree::ROOT);
        let mut queue = HeapQueue::new();
        queue.push(DijkstraQueueElement::new(0.0, 0, CandidateTree::ROOT));

        Frontier {
            tree,
            queue,
            open,
            closed: HashMap::new(),
            sequence: 1,
        }
    }

    /// Removes the open candidate with the smallest weight from the queue. The
    /// candidate stays open until it is passed to [`Frontier::close`].
    pub fn pop(&mut self) -> Result<CandidateId, SearchError> {
        self.discard_stale();
        let state = self.queue.pop().ok_or(SearchError::EmptyFrontier)?;
        Ok(state.candidate)
    }

    /// Smallest weight of any open candidate, `None` once the direction is
    /// exhausted.
    pub fn peek_weight(&mut self) -> Option<Weight> {
        self.discard_stale();
        self.queue.peek_weight()
    }

    pub fn close(&mut self, candidate: CandidateId) {
        let node = self.tree.get(candidate).node.clone();
        self.open.remove(&node);
        self.closed.insert(node, candidate);
    }

    /// Offers the path `via -> connection.destination`. Returns the new
    /// candidate if it was an improvement.
    pub fn relax(&mut self, via: CandidateId, connection: &Connection) -> Option<CandidateId> {
        if self.closed.contains_key(&connection.destination) {
            return None;
        }

        let weight = self.tree.get(via).weight + connection.weight;
        if let Some(&current) = self.open.get(&connection.destination) {
            if weight >= self.tree.get(current).weight {
                return None;
            }
        }

        let candidate = self.tree.push(&connection.destination, weight, via);
        self.open.insert(connection.destination.clone(), candidate);
        self.queue
            .push(DijkstraQueueElement::new(weight, self.sequence, candidate));
        self.sequence += 1;

        Some(candidate)
    }

    pub fn candidate(&self, candidate: CandidateId) -> &Candidate {
        self.tree.get(candidate)
    }

    /// Best candidate known for `node`, closed or still open.
    pub fn label(&self, node: &str) -> Option<CandidateId> {
        self.closed
            .get(node)
            .or_else(|| self.open.get(node))
            .copied()
    }

    /// Number of closed nodes.
    pub fn search_space_size(&self) -> usize {
        self.closed.len()
    }

    pub fn into_tree(self) -> CandidateTree {
        self.tree
    }

    fn discard_stale(&mut self) {
        while let Some(&state) = self.queue.peek() {
            let node = &self.tree.get(state.candidate).node;
            if self.open.get(node) == Some(&state.candidate) {
                break;
            }
            self.queue.pop();
        }
    }
}
