//! Property tests on small random graphs.

use bidir_paths::{
    graphs::{
        graph_functions::validate_path, hash_graph::ReversibleHashGraph, DirectedWeightedEdge,
    },
    search::{search, SearchMode},
    Weight,
};
use proptest::{collection::vec, prelude::*};

const MAX_VERTICES: usize = 10;

fn vertex(index: usize) -> String {
    format!("v{}", index)
}

fn build_graph(number_of_vertices: usize, edges: &[(usize, usize, Weight)]) -> ReversibleHashGraph {
    let mut graph = ReversibleHashGraph::new();
    for index in 0..number_of_vertices {
        graph.add_vertex(&vertex(index));
    }
    for &(tail, head, weight) in edges {
        let edge = DirectedWeightedEdge::new(
            vertex(tail % number_of_vertices),
            vertex(head % number_of_vertices),
            weight,
        )
        .unwrap();
        graph.set_edge(&edge);
    }
    graph
}

/// Exact distances from `source` by Bellman-Ford, `None` for unreachable
/// vertices.
fn reference_distances(
    number_of_vertices: usize,
    edges: &[(usize, usize, Weight)],
    source: usize,
) -> Vec<Option<Weight>> {
    let mut distances = vec![None; number_of_vertices];
    distances[source] = Some(0.0);
    for _ in 0..number_of_vertices {
        for &(tail, head, weight) in edges {
            let (tail, head) = (tail % number_of_vertices, head % number_of_vertices);
            if let Some(tail_distance) = distances[tail] {
                let alternative: Weight = tail_distance + weight;
                if distances[head].map_or(true, |current| alternative < current) {
                    distances[head] = Some(alternative);
                }
            }
        }
    }
    distances
}

fn integer_weighted_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, Weight)>)> {
    (
        2..=MAX_VERTICES,
        vec((0..MAX_VERTICES, 0..MAX_VERTICES, (0u32..20).prop_map(Weight::from)), 0..30),
    )
}

proptest! {
    /// Both modes find exactly the reference distance, or both find nothing.
    #[test]
    fn both_modes_find_the_shortest_distance((number_of_vertices, edges) in integer_weighted_graph()) {
        let graph = build_graph(number_of_vertices, &edges);

        for source in 0..number_of_vertices {
            let distances = reference_distances(number_of_vertices, &edges, source);
            for target in 0..number_of_vertices {
                let vanilla = search(&graph, &vertex(source), &vertex(target), SearchMode::Vanilla);
                let bidirectional =
                    search(&graph, &vertex(source), &vertex(target), SearchMode::Bidirectional);

                prop_assert_eq!(vanilla.as_ref().map(|path| path.weight()), distances[target]);
                prop_assert_eq!(bidirectional.as_ref().map(|path| path.weight()), distances[target]);

                for path in vanilla.iter().chain(bidirectional.iter()) {
                    prop_assert_eq!(validate_path(&graph, path), Ok(()));
                    prop_assert_eq!(path.start_node(), vertex(source));
                    prop_assert_eq!(path.end_node(), vertex(target));
                }
            }
        }
    }

    /// With edge weights that are distinct powers of two every shortest path
    /// is unique, so both modes have to take the same route.
    #[test]
    fn both_modes_take_the_same_route_on_unique_shortest_paths(
        number_of_vertices in 2..=MAX_VERTICES,
        endpoints in vec((0..MAX_VERTICES, 0..MAX_VERTICES), 0..30),
    ) {
        let edges: Vec<_> = endpoints
            .iter()
            .enumerate()
            .map(|(index, &(tail, head))| (tail, head, f64::from(1u32 << index)))
            .collect();
        let graph = build_graph(number_of_vertices, &edges);

        for source in 0..number_of_vertices {
            for target in 0..number_of_vertices {
                let vanilla = search(&graph, &vertex(source), &vertex(target), SearchMode::Vanilla);
                let bidirectional =
                    search(&graph, &vertex(source), &vertex(target), SearchMode::Bidirectional);
                match (vanilla, bidirectional) {
                    (Some(vanilla), Some(bidirectional)) => {
                        prop_assert!(vanilla.is_equal(&bidirectional));
                        prop_assert_eq!(vanilla.elements(), bidirectional.elements());
                    }
                    (None, None) => {}
                    _ => prop_assert!(false, "modes disagree on reachability"),
                }
            }
        }
    }

    /// Every prefix of a found path is included in it and merges with the
    /// remainder back into the path it was cut from.
    #[test]
    fn root_paths_merge_back((number_of_vertices, edges) in integer_weighted_graph()) {
        let graph = build_graph(number_of_vertices, &edges);

        for target in 1..number_of_vertices {
            let Some(path) = search(&graph, &vertex(0), &vertex(target), SearchMode::Bidirectional) else {
                continue;
            };

            let roots = path.root_paths();
            prop_assert_eq!(roots.len(), path.len() - 1);
            for root in roots {
                prop_assert!(path.includes(&root));
                prop_assert_eq!(root.weight(), root.last_element().weight);

                let (tail, _) = path.outgoing_edge(&root).unwrap();
                let remainder = bidir_paths::Path::new(path.elements()[root.len() - 1..].to_vec()).unwrap();
                prop_assert_eq!(remainder.first_element().node.as_str(), tail);

                let merged = root.merge(&remainder);
                prop_assert!(merged.is_equal(&path));
                prop_assert_eq!(merged.elements(), path.elements());
                prop_assert_eq!(merged.weight(), path.weight());
            }
        }
    }
}
