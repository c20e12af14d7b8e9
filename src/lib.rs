pub mod graphs;
pub mod path;
pub mod queue;
pub mod search;
pub mod utility;

pub use graphs::{hash_graph::ReversibleHashGraph, Connection, Graph, NodeId, Weight};
pub use path::{Path, PathElement};
pub use search::{search, PathFinding, SearchMode};
