use clap::ValueEnum;
use thiserror::Error;

use crate::{
    graphs::{Graph, NodeId, Weight},
    path::Path,
};

pub mod bidirectional;
pub mod candidate;
pub mod dijkstra;
pub mod frontier;

use bidirectional::BidirectionalDijkstra;
use candidate::{Candidate, CandidateId, CandidateTree};
use dijkstra::Dijkstra;

#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    /// A search direction ran out of open candidates. Only used to steer the
    /// search engines.
    #[error("frontier is exhausted")]
    EmptyFrontier,
    #[error("no path from {from} to {to}")]
    Unreachable { from: NodeId, to: NodeId },
}

impl SearchError {
    pub(crate) fn unreachable(source: &str, destination: &str) -> SearchError {
        SearchError::Unreachable {
            from: source.to_string(),
            to: destination.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SearchMode {
    /// Plain Dijkstra from the source.
    Vanilla,
    /// Dijkstra from both endpoints at once.
    Bidirectional,
}

/// Result of a search before it is turned into a [`Path`]: the meeting
/// candidate of the source-rooted tree and of the destination-rooted tree.
///
/// A single-direction search uses a backward tree that only consists of its
/// zero-weight root at the destination.
#[derive(Clone, Debug)]
pub struct CandidateSolution {
    pub forward_tree: CandidateTree,
    pub forward: CandidateId,
    pub backward_tree: CandidateTree,
    pub backward: CandidateId,
}

impl CandidateSolution {
    pub fn unidirectional(forward_tree: CandidateTree, forward: CandidateId) -> CandidateSolution {
        let backward_tree = CandidateTree::new(&forward_tree.get(forward).node);
        CandidateSolution {
            forward_tree,
            forward,
            backward_tree,
            backward: CandidateTree::ROOT,
        }
    }

    pub fn forward_candidate(&self) -> &Candidate {
        self.forward_tree.get(self.forward)
    }

    pub fn backward_candidate(&self) -> &Candidate {
        self.backward_tree.get(self.backward)
    }

    pub fn weight(&self) -> Weight {
        self.forward_candidate().weight + self.backward_candidate().weight
    }
}

pub trait PathFinding {
    fn shortest_path(&self, source: &str, destination: &str) -> Option<Path>;

    fn shortest_path_weight(&self, source: &str, destination: &str) -> Option<Weight> {
        self.shortest_path(source, destination)
            .map(|path| path.weight())
    }
}

/// Shortest path from `source` to `destination`, `None` if there is none.
pub fn search(graph: &dyn Graph, source: &str, destination: &str, mode: SearchMode) -> Option<Path> {
    match mode {
        SearchMode::Vanilla => Dijkstra { graph }.shortest_path(source, destination),
        SearchMode::Bidirectional => {
            BidirectionalDijkstra { graph }.shortest_path(source, destination)
        }
    }
}
