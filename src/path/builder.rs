use super::{Path, PathElement};
use crate::search::{candidate::Candidate, CandidateSolution};

impl From<&Candidate> for PathElement {
    fn from(candidate: &Candidate) -> Self {
        PathElement {
            node: candidate.node.clone(),
            weight: candidate.weight,
        }
    }
}

impl Path {
    /// Stitches the two candidate trees of `solution` into one path.
    ///
    /// The forward half keeps its weights. Every candidate `dc` behind the
    /// backward meeting candidate is measured from the destination, so it is
    /// moved onto the forward scale as
    /// `forward_meeting + (backward_meeting - dc.weight)`.
    pub fn from_candidate_solution(solution: &CandidateSolution, start: &str, end: &str) -> Path {
        let mut elements: Vec<PathElement> = solution
            .forward_tree
            .ancestors(solution.forward)
            .map(PathElement::from)
            .collect();
        elements.reverse();

        let forward_weight = solution.forward_candidate().weight;
        let backward_weight = solution.backward_candidate().weight;

        // the meeting node itself is already part of the forward half
        elements.extend(
            solution
                .backward_tree
                .ancestors(solution.backward)
                .skip(1)
                .map(|candidate| PathElement {
                    node: candidate.node.clone(),
                    weight: forward_weight + (backward_weight - candidate.weight),
                }),
        );

        debug_assert_eq!(elements.first().map(|element| element.node.as_str()), Some(start));
        debug_assert_eq!(elements.last().map(|element| element.node.as_str()), Some(end));

        Path::from_elements(elements, start, end)
    }
}
