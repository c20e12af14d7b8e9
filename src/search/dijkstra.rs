use log::{debug, trace};

use super::{frontier::Frontier, CandidateSolution, PathFinding, SearchError};
use crate::{graphs::Graph, path::Path};

/// Single-direction Dijkstra over the successors of the source.
pub struct Dijkstra<'a> {
    pub graph: &'a dyn Graph,
}

impl<'a> PathFinding for Dijkstra<'a> {
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

impl<'a> Dijkstra<'a> {
    /// Expands nodes in order of their distance from `source` until
    /// `destination` is closed.
    pub fn solve(&self, source: &str, destination: &str) -> Result<CandidateSolution, SearchError> {
        let mut frontier = Frontier::new(source);

        loop {
            let candidate = frontier
                .pop()
                .map_err(|_| SearchError::unreachable(source, destination))?;
            frontier.close(candidate);

            let tail = frontier.candidate(candidate).node.clone();
            trace!(
                "forward expands {} at {}",
                tail,
                frontier.candidate(candidate).weight
            );

            if tail == destination {
                debug!(
                    "dijkstra {} -> {}: weight {}, {} nodes expanded",
                    source,
                    destination,
                    frontier.candidate(candidate).weight,
                    frontier.search_space_size()
                );
                return Ok(CandidateSolution::unidirectional(
                    frontier.into_tree(),
                    candidate,
                ));
            }

            self.graph.successors(&tail).for_each(|connection| {
                frontier.relax(candidate, &connection);
            });
        }
    }
}
