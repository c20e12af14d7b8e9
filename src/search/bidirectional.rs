use log::{debug, trace};

use super::{
    candidate::CandidateId, frontier::Frontier, CandidateSolution, PathFinding, SearchError,
};
use crate::{
    graphs::{Graph, Weight},
    path::Path,
};

#[derive(Clone, Copy, Debug)]
enum Direction {
    Forward,
    Backward,
}

/// A pair of candidates, one per direction, sitting on the same node.
#[derive(Clone, Copy, Debug)]
struct Meeting {
    forward: CandidateId,
    backward: CandidateId,
    weight: Weight,
}

/// Dijkstra from the source over successors and from the destination over
/// predecessors, always advancing the side with the smaller open weight.
///
/// A meeting is recorded whenever a node that is closed or relaxed in one
/// direction already carries a label in the other. The search stops once the
/// two smallest open weights add up to at least the best meeting, so a meeting
/// found early can still be replaced by a cheaper one.
pub struct BidirectionalDijkstra<'a> {
    pub graph: &'a dyn Graph,
}

impl<'a> PathFinding for BidirectionalDijkstra<'a> {
    fn shortest_path(&self, source: &str, destination: &str) -> Option<Path> {
        match self.solve(source, destination) {
            Ok(solution) => Some(Path::from_candidate_solution(
                &solution,
                source,
                destination,
            )),
            Err(error) => {
                debug!("{}", error);
                None
            }
        }
    }
}

impl<'a> BidirectionalDijkstra<'a> {
    pub fn solve(&self, source: &str, destination: &str) -> Result<CandidateSolution, SearchError> {
        let mut forward = Frontier::new(source);
        let mut backward = Frontier::new(destination);
        let mut meeting: Option<Meeting> = None;

        loop {
            let forward_weight = forward.peek_weight();
            let backward_weight = backward.peek_weight();

            match &meeting {
                Some(best) => {
                    // An exhausted direction can not contribute anything anymore.
                    let bound = forward_weight.unwrap_or(Weight::INFINITY)
                        + backward_weight.unwrap_or(Weight::INFINITY);
                    if bound >= best.weight {
                        break;
                    }
                }
                None => {
                    if forward_weight.is_none() || backward_weight.is_none() {
                        return Err(SearchError::unreachable(source, destination));
                    }
                }
            }

            let expand_forward = match (forward_weight, backward_weight) {
                (Some(f), Some(b)) => f <= b,
                (Some(_), None) => true,
                _ => false,
            };

            if expand_forward {
                self.expand(Direction::Forward, &mut forward, &backward, &mut meeting)?;
            } else {
                self.expand(Direction::Backward, &mut backward, &forward, &mut meeting)?;
            }
        }

        let meeting = meeting.ok_or_else(|| SearchError::unreachable(source, destination))?;
        debug!(
            "bidirectional dijkstra {} -> {}: weight {} meeting at {}, {} + {} nodes expanded",
            source,
            destination,
            meeting.weight,
            forward.candidate(meeting.forward).node,
            forward.search_space_size(),
            backward.search_space_size()
        );

        Ok(CandidateSolution {
            forward_tree: forward.into_tree(),
            forward: meeting.forward,
            backward_tree: backward.into_tree(),
            backward: meeting.backward,
        })
    }

    fn expand(
        &self,
        direction: Direction,
        own: &mut Frontier,
        other: &Frontier,
        meeting: &mut Option<Meeting>,
    ) -> Result<(), SearchError> {
        let candidate = own.pop()?;
        own.close(candidate);

        let node = own.candidate(candidate).node.clone();
        trace!(
            "{:?} expands {} at {}",
            direction,
            node,
            own.candidate(candidate).weight
        );
        record_meeting(direction, own, candidate, other, meeting);

        let connections = match direction {
            Direction::Forward => self.graph.successors(&node),
            Direction::Backward => self.graph.predecessors(&node),
        };
        for connection in connections {
            if let Some(relaxed) = own.relax(candidate, &connection) {
                record_meeting(direction, own, relaxed, other, meeting);
            }
        }

        Ok(())
    }
}

fn record_meeting(
    direction: Direction,
    own: &Frontier,
    candidate: CandidateId,
    other: &Frontier,
    best: &mut Option<Meeting>,
) {
    let own_candidate = own.candidate(candidate);
    let Some(other_candidate) = other.label(&own_candidate.node) else {
        return;
    };

    let weight = own_candidate.weight + other.candidate(other_candidate).weight;
    if best.as_ref().is_some_and(|best| best.weight <= weight) {
        return;
    }

    let (forward, backward) = match direction {
        Direction::Forward => (candidate, other_candidate),
        Direction::Backward => (other_candidate, candidate),
    };
    trace!("meeting at {} with weight {}", own_candidate.node, weight);
    *best = Some(Meeting {
        forward,
        backward,
        weight,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graphs::{hash_graph::ReversibleHashGraph, DirectedWeightedEdge},
        search::dijkstra::Dijkstra,
    };

    fn graph(edges: &[(&str, &str, f64)]) -> ReversibleHashGraph {
        let edges: Vec<_> = edges
            .iter()
            .map(|&(tail, head, weight)| DirectedWeightedEdge::new(tail, head, weight).unwrap())
            .collect();
        ReversibleHashGraph::from_edges(&edges)
    }

    fn nodes(path: &Path) -> Vec<&str> {
        path.nodes().collect()
    }

    #[test]
    fn first_meeting_is_not_final() {
        // `m` is the first node both sides close. The cheaper route only
        // shows up as an open label on `w`.
        let graph = graph(&[
            ("s", "v", 1.0),
            ("v", "w", 10.0),
            ("w", "t", 1.0),
            ("s", "m", 7.0),
            ("m", "t", 7.0),
        ]);
        let search = BidirectionalDijkstra { graph: &graph };

        let solution = search.solve("s", "t").unwrap();
        assert_eq!(solution.weight(), 12.0);

        let path = search.shortest_path("s", "t").unwrap();
        assert_eq!(nodes(&path), vec!["s", "v", "w", "t"]);
        assert_eq!(path.weight(), 12.0);
    }

    #[test]
    fn relaxing_onto_a_labelled_node_records_a_meeting() {
        let graph = graph(&[("s", "a", 1.0), ("a", "t", 1.0)]);
        let search = BidirectionalDijkstra { graph: &graph };
        let mut forward = Frontier::new("s");
        let mut backward = Frontier::new("t");
        let mut meeting = None;

        search
            .expand(Direction::Backward, &mut backward, &forward, &mut meeting)
            .unwrap();
        assert!(meeting.is_none());

        // `a` is only open on both sides, neither close has seen it
        search
            .expand(Direction::Forward, &mut forward, &backward, &mut meeting)
            .unwrap();
        let meeting = meeting.unwrap();
        assert_eq!(meeting.weight, 2.0);
        assert_eq!(forward.candidate(meeting.forward).node, "a");
        assert_eq!(backward.candidate(meeting.backward).node, "a");
    }

    #[test]
    fn meeting_candidates_sit_on_the_same_node() {
        let graph = graph(&[("s", "a", 1.0), ("a", "b", 2.0), ("b", "t", 1.0)]);
        let solution = BidirectionalDijkstra { graph: &graph }
            .solve("s", "t")
            .unwrap();

        assert_eq!(
            solution.forward_candidate().node,
            solution.backward_candidate().node
        );
        assert_eq!(solution.weight(), 4.0);
    }

    #[test]
    fn single_edge() {
        let graph = graph(&[("s", "t", 2.5)]);
        let path = BidirectionalDijkstra { graph: &graph }
            .shortest_path("s", "t")
            .unwrap();

        assert_eq!(nodes(&path), vec!["s", "t"]);
        assert_eq!(path.weight(), 2.5);
    }

    #[test]
    fn source_equals_destination() {
        let graph = graph(&[("s", "a", 1.0), ("a", "s", 1.0)]);
        let path = BidirectionalDijkstra { graph: &graph }
            .shortest_path("s", "s")
            .unwrap();

        assert_eq!(nodes(&path), vec!["s"]);
        assert_eq!(path.weight(), 0.0);
    }

    #[test]
    fn zero_weight_edges() {
        let graph = graph(&[
            ("s", "a", 0.0),
            ("a", "b", 0.0),
            ("b", "t", 0.0),
            ("s", "t", 1.0),
        ]);
        let path = BidirectionalDijkstra { graph: &graph }
            .shortest_path("s", "t")
            .unwrap();

        assert_eq!(nodes(&path), vec!["s", "a", "b", "t"]);
        assert_eq!(path.weight(), 0.0);
    }

    #[test]
    fn either_side_running_dry_means_unreachable() {
        let dry_source = graph(&[("a", "t", 1.0), ("b", "a", 1.0)]);
        assert_eq!(
            BidirectionalDijkstra { graph: &dry_source }
                .solve("s", "t")
                .unwrap_err(),
            SearchError::unreachable("s", "t")
        );

        let dry_destination = graph(&[("s", "a", 1.0), ("a", "b", 1.0), ("t", "s", 1.0)]);
        assert!(BidirectionalDijkstra {
            graph: &dry_destination
        }
        .shortest_path("s", "t")
        .is_none());
    }

    #[test]
    fn agrees_with_dijkstra_on_a_weighted_grid() {
        let mut edges = Vec::new();
        for row in 0..6u32 {
            for column in 0..6u32 {
                let node = format!("{}-{}", row, column);
                let weight = f64::from((row * 7 + column * 3) % 5 + 1);
                if column < 5 {
                    edges.push((node.clone(), format!("{}-{}", row, column + 1), weight));
                }
                if row < 5 {
                    edges.push((node.clone(), format!("{}-{}", row + 1, column), weight + 0.5));
                }
            }
        }
        let edges: Vec<_> = edges
            .iter()
            .map(|(tail, head, weight)| {
                DirectedWeightedEdge::new(tail.as_str(), head.as_str(), *weight).unwrap()
            })
            .collect();
        let graph = ReversibleHashGraph::from_edges(&edges);

        let bidirectional = BidirectionalDijkstra { graph: &graph };
        let dijkstra = Dijkstra { graph: &graph };
        for target in ["5-5", "3-4", "0-5", "5-0", "2-2"] {
            let expected = dijkstra.shortest_path_weight("0-0", target).unwrap();
            let weight = bidirectional.shortest_path_weight("0-0", target).unwrap();
            assert!((expected - weight).abs() < 1e-9, "{} vs {}", expected, weight);
        }
    }
}
