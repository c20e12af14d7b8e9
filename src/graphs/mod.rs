use std::path::PathBuf;

use thiserror::Error;

pub mod edge;
pub mod graph_factory;
pub mod graph_functions;
pub mod hash_graph;

pub use edge::{Connection, DirectedWeightedEdge};

pub type NodeId = String;
pub type Weight = f64;

/// Read-only view of a directed, weighted graph as consumed by the searches.
///
/// Neither `successors` nor `predecessors` promise any particular order of the
/// returned connections.
pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32;

    /// Outgoing edges of `node`. The connection's destination is the head of
    /// the edge.
    fn successors(&self, node: &str) -> Box<dyn ExactSizeIterator<Item = Connection> + Send + '_>;

    /// Incoming edges of `node`. The connection's destination is the tail of
    /// the edge, its weight is the weight of `tail -> node`.
    fn predecessors(
        &self,
        node: &str,
    ) -> Box<dyn ExactSizeIterator<Item = Connection> + Send + '_>;

    fn edge_weight(&self, tail: &str, head: &str) -> Option<Weight>;
}

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("unable to read graph file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed json graph: {0}")]
    Json(#[from] serde_json::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("edge {tail} -> {head} has invalid weight {weight}")]
    InvalidWeight {
        tail: NodeId,
        head: NodeId,
        weight: Weight,
    },
    #[error("unknown graph file format {0:?}")]
    UnknownFormat(PathBuf),
}
