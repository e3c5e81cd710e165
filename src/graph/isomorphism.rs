//! Bounded vertex-matching test for structural graph equivalence.

use std::error;
use std::fmt;

use crate::graph::Graph;

/// Upper bound on live partial assignments during the matching search.
pub const SEARCH_SPACE_LIMIT: usize = 100_000;

/// Error raised when the matching search exceeds [`SEARCH_SPACE_LIMIT`].
///
/// This is a failure of the method, not evidence of non-isomorphism; callers
/// must not conflate it with a `false` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsomorphismError {
    SearchSpaceExceeded { live_assignments: usize },
}

impl fmt::Display for IsomorphismError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SearchSpaceExceeded { live_assignments } => write!(
                f,
                "isomorphism search space exceeded: {live_assignments} live assignments (limit {SEARCH_SPACE_LIMIT})"
            ),
        }
    }
}

impl error::Error for IsomorphismError {}

/// Decide, within a bounded search, whether relabeling `g2`'s vertices can
/// reproduce `g1`'s edge sequence.
///
/// The comparison is positional: a candidate relabeling succeeds only when
/// the relabeled edge at every position `i` equals `g1`'s edge at position
/// `i`. That is stricter than classical graph isomorphism, which ignores
/// edge order, but it is exactly the oracle the codecs' round-trip checks
/// rely on (decoders keep edge order even when they renumber vertices).
///
/// Only a private working copy of `g2`'s edges is relabeled; neither input
/// graph is ever mutated.
pub fn is_isomorphic(g1: &Graph, g2: &Graph) -> Result<bool, IsomorphismError> {
    if g1.edge_count() != g2.edge_count() || g1.vertex_count() != g2.vertex_count() {
        return Ok(false);
    }

    let reference = g1.to_string();
    if reference == g2.to_string() {
        return Ok(true);
    }

    let n = g1.vertex_count();
    if g1
        .edges()
        .iter()
        .chain(g2.edges())
        .any(|&(s, t)| s >= n || t >= n)
    {
        // Non-dense vertex references cannot be matched by relabeling.
        return Ok(false);
    }

    let g1_frequencies = g1.degree_frequencies();
    let g2_frequencies = g2.degree_frequencies();

    // For every g2 vertex, the g1 vertices sharing its frequency.
    let candidates: Vec<Vec<usize>> = g2_frequencies
        .iter()
        .map(|frequency| {
            g1_frequencies
                .iter()
                .enumerate()
                .filter(|(_, f)| *f == frequency)
                .map(|(vertex, _)| vertex)
                .collect()
        })
        .collect();
    if candidates.iter().any(|options: &Vec<usize>| options.is_empty()) {
        return Ok(false);
    }

    // Breadth-first extension of injective partial assignments, one g2
    // vertex at a time.
    let mut assignments: Vec<Vec<usize>> = vec![Vec::new()];
    for options in &candidates {
        let mut extended = Vec::new();
        for assignment in &assignments {
            for &target in options {
                if !assignment.contains(&target) {
                    let mut next = assignment.clone();
                    next.push(target);
                    extended.push(next);
                }
            }
        }
        if extended.len() > SEARCH_SPACE_LIMIT {
            return Err(IsomorphismError::SearchSpaceExceeded {
                live_assignments: extended.len(),
            });
        }
        if extended.is_empty() {
            return Ok(false);
        }
        assignments = extended;
    }

    for assignment in &assignments {
        let relabeled: Vec<(usize, usize)> = g2
            .edges()
            .iter()
            .map(|&(source, target)| (assignment[source], assignment[target]))
            .collect();
        let candidate = Graph::from_parts(g2.vertices().to_vec(), relabeled);
        if candidate.to_string() == reference {
            return Ok(true);
        }
    }

    Ok(false)
}

impl Graph {
    /// See [`is_isomorphic`].
    pub fn is_isomorphic_to(&self, other: &Graph) -> Result<bool, IsomorphismError> {
        is_isomorphic(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graphs_are_isomorphic() {
        assert_eq!(is_isomorphic(&Graph::new(), &Graph::new()), Ok(true));
    }

    #[test]
    fn test_count_mismatch_is_false() {
        let g1 = Graph::from_parts(vec![0, 1], vec![(0, 1)]);
        let g2 = Graph::from_parts(vec![0, 1, 2], vec![(0, 1)]);
        assert_eq!(is_isomorphic(&g1, &g2), Ok(false));

        let g3 = Graph::from_parts(vec![0, 1], vec![(0, 1), (1, 0)]);
        assert_eq!(is_isomorphic(&g1, &g3), Ok(false));
    }

    #[test]
    fn test_identical_graphs_take_fast_path() {
        let g = Graph::from_parts(vec![0, 1, 2], vec![(0, 1), (1, 2), (2, 0)]);
        assert_eq!(is_isomorphic(&g, &g.clone()), Ok(true));
    }

    #[test]
    fn test_relabeled_graph_is_isomorphic() {
        // g2 is g1 with vertices 0 and 2 swapped, edges in matching order
        let g1 = Graph::from_parts(vec![0, 1, 2], vec![(0, 1), (0, 2), (1, 1)]);
        let g2 = Graph::from_parts(vec![0, 1, 2], vec![(2, 1), (2, 0), (1, 1)]);
        assert_eq!(is_isomorphic(&g1, &g2), Ok(true));
    }

    #[test]
    fn test_comparison_is_positional() {
        // Same edge set, different order: no relabeling lines the sequences
        // up position for position, so the check reports false.
        let g1 = Graph::from_parts(vec![0, 1, 2], vec![(0, 1), (1, 2)]);
        let g2 = Graph::from_parts(vec![0, 1, 2], vec![(1, 2), (0, 1)]);
        assert_eq!(is_isomorphic(&g1, &g2), Ok(false));
    }

    #[test]
    fn test_structurally_different_is_false() {
        let g1 = Graph::from_parts(vec![0, 1, 2], vec![(0, 1), (1, 2)]);
        let g2 = Graph::from_parts(vec![0, 1, 2], vec![(0, 1), (1, 0)]);
        assert_eq!(is_isomorphic(&g1, &g2), Ok(false));
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let g1 = Graph::from_parts(vec![0, 1, 2], vec![(0, 1), (0, 2), (1, 1)]);
        let g2 = Graph::from_parts(vec![0, 1, 2], vec![(2, 1), (2, 0), (1, 1)]);
        let g1_before = g1.clone();
        let g2_before = g2.clone();
        let _ = is_isomorphic(&g1, &g2);
        assert_eq!(g1, g1_before);
        assert_eq!(g2, g2_before);
    }

    #[test]
    fn test_search_space_exceeded() {
        // Two 10-cycles listed so their renders differ: every vertex has
        // frequency 2, so each of the 10 vertices has 10 candidates and the
        // injective extension blows past the limit before completing.
        let n = 10;
        let vertices: Vec<usize> = (0..n).collect();
        let g1_edges: Vec<(usize, usize)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
        let g2_edges: Vec<(usize, usize)> = (0..n).map(|i| ((i + 1) % n, i)).collect();
        let g1 = Graph::from_parts(vertices.clone(), g1_edges);
        let g2 = Graph::from_parts(vertices, g2_edges);
        assert!(matches!(
            is_isomorphic(&g1, &g2),
            Err(IsomorphismError::SearchSpaceExceeded { .. })
        ));
    }
}
