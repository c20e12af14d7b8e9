use serde::Serialize;

use crate::graphs::{NodeId, Weight};

pub mod builder;

/// A node on a path together with the cumulative weight from the path's start.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PathElement {
    pub node: NodeId,
    pub weight: Weight,
}

/// Represents a path in a graph.
///
/// The elements are never empty, start with `start_node` and end with
/// `end_node`, and their weights never decrease. The weight of the path is the
/// weight of its last element. Operations that combine or cut paths return new
/// values and recompute the weights they touch.
#[derive(Clone, Debug, Serialize)]
pub struct Path {
    elements: Vec<PathElement>,
    weight: Weight,
    start_node: NodeId,
    end_node: NodeId,
}

impl Path {
    /// Builds a path from `elements`, `None` if there are none.
    pub fn new(elements: Vec<PathElement>) -> Option<Path> {
        let start = elements.first()?.node.clone();
        let end = elements.last()?.node.clone();
        Some(Path::from_elements(elements, &start, &end))
    }

    pub(crate) fn from_elements(elements: Vec<PathElement>, start: &str, end: &str) -> Path {
        let weight = elements.last().map_or(0.0, |element| element.weight);
        Path {
            elements,
            weight,
            start_node: start.to_string(),
            end_node: end.to_string(),
        }
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn start_node(&self) -> &str {
        &self.start_node
    }

    pub fn end_node(&self) -> &str {
        &self.end_node
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn first_element(&self) -> &PathElement {
        &self.elements[0]
    }

    pub fn last_element(&self) -> &PathElement {
        &self.elements[self.elements.len() - 1]
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.elements.iter().map(|element| element.node.as_str())
    }

    /// Two paths are equal if they visit the same nodes in the same order.
    /// Weights are not compared.
    pub fn is_equal(&self, other: &Path) -> bool {
        self.len() == other.len() && self.nodes().eq(other.nodes())
    }

    /// Every proper prefix of the path, shortest first. Each prefix ends at its
    /// own last node and weighs as much as that node.
    pub fn root_paths(&self) -> Vec<Path> {
        (1..self.len())
            .map(|length| {
                let elements = self.elements[..length].to_vec();
                let end = elements[length - 1].node.clone();
                Path::from_elements(elements, &self.start_node, &end)
            })
            .collect()
    }

    /// Whether the nodes of `sub` are a prefix of the nodes of this path.
    pub fn includes(&self, sub: &Path) -> bool {
        sub.len() <= self.len() && self.nodes().zip(sub.nodes()).all(|(a, b)| a == b)
    }

    /// The edge leaving the prefix `sub` along this path. `None` if `sub` is not
    /// a prefix or already covers the whole path.
    pub fn outgoing_edge(&self, sub: &Path) -> Option<(&str, &str)> {
        if !self.includes(sub) || sub.is_empty() {
            return None;
        }

        let tail = self.elements.get(sub.len() - 1)?;
        let head = self.elements.get(sub.len())?;
        Some((tail.node.as_str(), head.node.as_str()))
    }

    /// Appends `other` to this path. A node shared by the end of this path and
    /// the start of `other` appears once. The weights of `other` are shifted so
    /// that they continue from this path's weight.
    pub fn merge(&self, other: &Path) -> Path {
        let mut elements = self.elements.clone();
        let offset = self.last_element().weight;
        let origin = other.first_element().weight;

        let skip = usize::from(self.last_element().node == other.first_element().node);
        elements.extend(other.elements.iter().skip(skip).map(|element| PathElement {
            node: element.node.clone(),
            weight: offset + (element.weight - origin),
        }));

        Path::from_elements(elements, &self.start_node, &other.end_node)
    }
}
