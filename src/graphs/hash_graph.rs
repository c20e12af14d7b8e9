use std::collections::hash_map::{
    Entry::{Occupied, Vacant},
    Iter,
};

use ahash::{HashMap, HashMapExt};

use super::{edge::DirectedWeightedEdge, Connection, Graph, NodeId, Weight};

/// Adjacency maps in both directions, keyed by node name.
///
/// Every node known to the graph has an entry in both maps, even if it has no
/// edges at all.
#[derive(Clone, Debug)]
pub struct ReversibleHashGraph {
    out_edges: HashMap<NodeId, HashMap<NodeId, Weight>>,
    in_edges: HashMap<NodeId, HashMap<NodeId, Weight>>,
}

impl Default for ReversibleHashGraph {
    fn default() -> Self {
        Self::new()
    }
}

// Define a struct for iterating over the neighbours of a single node. A missing
// node simply yields nothing.
struct ConnectionIterator<'a> {
    neighbours: Option<Iter<'a, NodeId, Weight>>,
}

impl<'a> Iterator for ConnectionIterator<'a> {
    type Item = Connection;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, &weight) = self.neighbours.as_mut()?.next()?;
        Some(Connection::new(node.clone(), weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.neighbours
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<'a> ExactSizeIterator for ConnectionIterator<'a> {}

impl Graph for ReversibleHashGraph {
    fn number_of_vertices(&self) -> u32 {
        self.out_edges.len() as u32
    }

    fn number_of_edges(&self) -> u32 {
        self.out_edges.values().map(HashMap::len).sum::<usize>() as u32
    }

    fn successors(&self, node: &str) -> Box<dyn ExactSizeIterator<Item = Connection> + Send + '_> {
        Box::new(ConnectionIterator {
            neighbours: self.out_edges.get(node).map(HashMap::iter),
        })
    }

    fn predecessors(
        &self,
        node: &str,
    ) -> Box<dyn ExactSizeIterator<Item = Connection> + Send + '_> {
        Box::new(ConnectionIterator {
            neighbours: self.in_edges.get(node).map(HashMap::iter),
        })
    }

    fn edge_weight(&self, tail: &str, head: &str) -> Option<Weight> {
        self.out_edges.get(tail)?.get(head).copied()
    }
}

impl ReversibleHashGraph {
    pub fn new() -> Self {
        ReversibleHashGraph {
            out_edges: HashMap::new(),
            in_edges: HashMap::new(),
        }
    }

    pub fn from_edges(edges: &[DirectedWeightedEdge]) -> ReversibleHashGraph {
        let mut graph = ReversibleHashGraph::new();
        edges.iter().for_each(|edge| {
            graph.set_edge(edge);
        });
        graph
    }

    /// Registers a node without touching its edges.
    pub fn add_vertex(&mut self, node: &str) {
        if !self.out_edges.contains_key(node) {
            self.out_edges.insert(node.to_string(), HashMap::new());
        }
        if !self.in_edges.contains_key(node) {
            self.in_edges.insert(node.to_string(), HashMap::new());
        }
    }

    /// Inserts `edge`. A parallel edge only survives if it is cheaper than the
    /// one already stored.
    pub fn set_edge(&mut self, edge: &DirectedWeightedEdge) {
        self.add_vertex(edge.tail());
        self.add_vertex(edge.head());
        insert_min(&mut self.out_edges, edge.tail(), edge.head(), edge.weight());
        insert_min(&mut self.in_edges, edge.head(), edge.tail(), edge.weight());
    }

    /// All node names in lexicographic order.
    pub fn vertices(&self) -> Vec<NodeId> {
        let mut vertices: Vec<NodeId> = self.out_edges.keys().cloned().collect();
        vertices.sort_unstable();
        vertices
    }
}

fn insert_min(
    adjacency: &mut HashMap<NodeId, HashMap<NodeId, Weight>>,
    from: &str,
    to: &str,
    weight: Weight,
) {
    let Some(neighbours) = adjacency.get_mut(from) else {
        return;
    };

    match neighbours.entry(to.to_string()) {
        Occupied(mut o) => {
            let current_weight = o.get_mut();
            if weight < *current_weight {
                *current_weight = weight;
            }
        }
        Vacant(v) => {
            v.insert(weight);
        }
    }
}
