use serde::Deserialize;

use super::{GraphError, NodeId, Weight};

/// Edge as seen from one of its endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    pub destination: NodeId,
    pub weight: Weight,
}

impl Connection {
    pub fn new(destination: impl Into<NodeId>, weight: Weight) -> Connection {
        Connection {
            destination: destination.into(),
            weight,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DirectedWeightedEdge {
    tail: NodeId,
    head: NodeId,
    #[serde(default = "default_weight")]
    weight: Weight,
}

fn default_weight() -> Weight {
    1.0
}

impl DirectedWeightedEdge {
    pub fn new(
        tail: impl Into<NodeId>,
        head: impl Into<NodeId>,
        weight: Weight,
    ) -> Result<DirectedWeightedEdge, GraphError> {
        DirectedWeightedEdge {
            tail: tail.into(),
            head: head.into(),
            weight,
        }
        .validated()
    }

    /// Rejects weights the searches cannot handle: negative, NaN or infinite.
    pub fn validated(self) -> Result<DirectedWeightedEdge, GraphError> {
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                tail: self.tail,
                head: self.head,
                weight: self.weight,
            });
        }

        Ok(self)
    }

    pub fn tail(&self) -> &str {
        &self.tail
    }

    pub fn head(&self) -> &str {
        &self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}
