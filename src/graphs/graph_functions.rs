use itertools::Itertools;
use rand::prelude::*;
use thiserror::Error;

use super::{Graph, NodeId, Weight};
use crate::path::Path;

/// Absolute tolerance for weights of unit size, scaled up for larger weights.
pub const WEIGHT_TOLERANCE: Weight = 1e-9;

pub fn weights_match(a: Weight, b: Weight) -> bool {
    (a - b).abs() <= WEIGHT_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// Represents a request for finding a shortest path in a graph.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPathRequest {
    pub source: NodeId,
    pub destination: NodeId,
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("path starts at {found} instead of {expected}")]
    WrongStart { expected: NodeId, found: NodeId },
    #[error("path ends at {found} instead of {expected}")]
    WrongEnd { expected: NodeId, found: NodeId },
    #[error("path does not start with weight 0 but {0}")]
    NonZeroStart(Weight),
    #[error("no edge between {tail} and {head} found")]
    MissingEdge { tail: NodeId, head: NodeId },
    #[error("step {tail} -> {head} weighs {found}, the edge weighs {expected}")]
    WrongStepWeight {
        tail: NodeId,
        head: NodeId,
        expected: Weight,
        found: Weight,
    },
    #[error("path weight {found} differs from the sum of its edges {expected}")]
    WrongTotalWeight { expected: Weight, found: Weight },
}

/// Checks that `path` is a walk through `graph` whose cumulative weights are
/// exactly the sums of the edges taken.
pub fn validate_path(graph: &dyn Graph, path: &Path) -> Result<(), ValidationError> {
    let first = path.first_element();
    let last = path.last_element();

    // Ensure first and last node of the path are its endpoints.
    if first.node != path.start_node() {
        return Err(ValidationError::WrongStart {
            expected: path.start_node().to_string(),
            found: first.node.clone(),
        });
    }
    if last.node != path.end_node() {
        return Err(ValidationError::WrongEnd {
            expected: path.end_node().to_string(),
            found: last.node.clone(),
        });
    }
    if !weights_match(first.weight, 0.0) {
        return Err(ValidationError::NonZeroStart(first.weight));
    }

    // check if there is an edge between consecutive path vertices.
    let mut true_weight = 0.0;
    for (tail, head) in path.elements().iter().tuple_windows() {
        let edge_weight = graph
            .edge_weight(&tail.node, &head.node)
            .ok_or_else(|| ValidationError::MissingEdge {
                tail: tail.node.clone(),
                head: head.node.clone(),
            })?;
        let step = head.weight - tail.weight;
        if !weights_match(step, edge_weight) {
            return Err(ValidationError::WrongStepWeight {
                tail: tail.node.clone(),
                head: head.node.clone(),
                expected: edge_weight,
                found: step,
            });
        }
        true_weight += edge_weight;
    }

    // check if total weight of path is correct.
    if !weights_match(path.weight(), true_weight) {
        return Err(ValidationError::WrongTotalWeight {
            expected: true_weight,
            found: path.weight(),
        });
    }

    Ok(())
}

/// Draws `number_of_requests` requests with distinct endpoints out of
/// `vertices`. Needs at least two vertices.
pub fn random_requests(
    vertices: &[NodeId],
    number_of_requests: usize,
    rng: &mut impl Rng,
) -> Vec<ShortestPathRequest> {
    if vertices.len() <= 1 {
        // not enough vertices to get a request with source != destination
        return Vec::new();
    }

    (0..number_of_requests)
        .filter_map(|_| {
            let mut endpoints = vertices.choose_multiple(&mut *rng, 2);
            Some(ShortestPathRequest {
                source: endpoints.next()?.clone(),
                destination: endpoints.next()?.clone(),
            })
        })
        .collect()
}
