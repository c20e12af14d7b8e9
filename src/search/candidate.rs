use crate::graphs::{NodeId, Weight};

/// Handle of a candidate inside its [`CandidateTree`].
pub type CandidateId = usize;

/// A node reached by a search together with its cumulative weight from the
/// root of the tree and the candidate it was reached from.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    pub node: NodeId,
    pub weight: Weight,
    pub parent: Option<CandidateId>,
}

/// Arena owning every candidate created by one search direction.
///
/// Candidates are never removed, so handles stay valid for the lifetime of the
/// tree. The root always has the handle `CandidateTree::ROOT`.
#[derive(Clone, Debug)]
pub struct CandidateTree {
    candidates: Vec<Candidate>,
}

impl CandidateTree {
    pub const ROOT: CandidateId = 0;

    pub fn new(root: &str) -> CandidateTree {
        CandidateTree {
            candidates: vec![Candidate {
                node: root.to_string(),
                weight: 0.0,
                parent: None,
            }],
        }
    }

    /// Adds a child of `parent`. Its weight must not be smaller than the
    /// parent's.
    pub fn push(&mut self, node: &str, weight: Weight, parent: CandidateId) -> CandidateId {
        debug_assert!(weight >= self.candidates[parent].weight);
        self.candidates.push(Candidate {
            node: node.to_string(),
            weight,
            parent: Some(parent),
        });
        self.candidates.len() - 1
    }

    pub fn get(&self, candidate: CandidateId) -> &Candidate {
        &self.candidates[candidate]
    }

    /// Walks from `candidate` towards the root, yielding `candidate` first.
    pub fn ancestors(&self, candidate: CandidateId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: Some(candidate),
        }
    }
}

pub struct Ancestors<'a> {
    tree: &'a CandidateTree,
    next: Option<CandidateId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        let candidate = self.tree.get(self.next?);
        self.next = candidate.parent;
        Some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ancestors_walk_back_to_the_root() {
        let mut tree = CandidateTree::new("s");
        let a = tree.push("a", 1.0, CandidateTree::ROOT);
        let b = tree.push("b", 3.0, a);
        let sibling = tree.push("c", 2.0, a);

        let chain: Vec<_> = tree
            .ancestors(b)
            .map(|candidate| (candidate.node.as_str(), candidate.weight))
            .collect();
        assert_eq!(chain, vec![("b", 3.0), ("a", 1.0), ("s", 0.0)]);
        assert_eq!(tree.get(sibling).parent, Some(a));
        assert_eq!(tree.ancestors(sibling).count(), 3);
    }

    #[test]
    fn root_has_no_parent() {
        let tree = CandidateTree::new("s");
        let root = tree.get(CandidateTree::ROOT);
        assert_eq!(root.node, "s");
        assert_eq!(root.parent, None);
        assert_eq!(root.weight, 0.0);
        assert_eq!(tree.ancestors(CandidateTree::ROOT).count(), 1);
    }
}
