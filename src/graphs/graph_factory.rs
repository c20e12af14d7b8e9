use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use serde::Deserialize;

use super::{edge::DirectedWeightedEdge, hash_graph::ReversibleHashGraph, GraphError, NodeId, Weight};

/// Layout of a `.json` graph file. Nodes only need to be listed if they have
/// no edges.
#[derive(Deserialize)]
struct JsonGraph {
    #[serde(default)]
    nodes: Vec<NodeId>,
    edges: Vec<DirectedWeightedEdge>,
}

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    pub fn from_file(path: &Path) -> Result<ReversibleHashGraph, GraphError> {
        let file_extension = path.extension().and_then(|extension| extension.to_str());
        match file_extension {
            Some("json") => Self::from_json_file(path),
            Some("txt") | Some("edges") => Self::from_edge_list_file(path),
            _ => Err(GraphError::UnknownFormat(path.to_path_buf())),
        }
    }

    pub fn from_json_file(path: &Path) -> Result<ReversibleHashGraph, GraphError> {
        let reader = BufReader::new(File::open(path)?);
        let json_graph: JsonGraph = serde_json::from_reader(reader)?;
        Self::from_json_graph(json_graph)
    }

    pub fn from_json_str(json: &str) -> Result<ReversibleHashGraph, GraphError> {
        let json_graph: JsonGraph = serde_json::from_str(json)?;
        Self::from_json_graph(json_graph)
    }

    fn from_json_graph(json_graph: JsonGraph) -> Result<ReversibleHashGraph, GraphError> {
        let mut graph = ReversibleHashGraph::new();
        for node in &json_graph.nodes {
            graph.add_vertex(node);
        }
        for edge in json_graph.edges {
            graph.set_edge(&edge.validated()?);
        }
        Ok(graph)
    }

    pub fn from_edge_list_file(path: &Path) -> Result<ReversibleHashGraph, GraphError> {
        let reader = BufReader::new(File::open(path)?);
        Self::from_edge_list(reader)
    }

    /// Reads lines of the form `tail head [weight]`. A missing weight counts as
    /// 1, a line with a single name declares an isolated node and lines
    /// starting with `#` are skipped.
    pub fn from_edge_list(reader: impl BufRead) -> Result<ReversibleHashGraph, GraphError> {
        let mut graph = ReversibleHashGraph::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let values: Vec<&str> = trimmed.split_whitespace().collect();
            match values.as_slice() {
                [node] => graph.add_vertex(node),
                [tail, head] => graph.set_edge(&DirectedWeightedEdge::new(*tail, *head, 1.0)?),
                [tail, head, weight] => {
                    let weight = weight.parse::<Weight>().map_err(|_| GraphError::Parse {
                        line: line_number,
                        message: format!("unable to parse weight {:?}", weight),
                    })?;
                    graph.set_edge(&DirectedWeightedEdge::new(*tail, *head, weight)?);
                }
                _ => {
                    return Err(GraphError::Parse {
                        line: line_number,
                        message: format!("expected `tail head [weight]`, got {:?}", trimmed),
                    })
                }
            }
        }

        Ok(graph)
    }
}
