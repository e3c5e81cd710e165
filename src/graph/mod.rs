//! The graph data model shared by every codec and the isomorphism checker.

mod isomorphism;

pub use isomorphism::{is_isomorphic, IsomorphismError, SEARCH_SPACE_LIMIT};

use std::fmt;

use serde::{Deserialize, Serialize};

/// A small labeled graph: an ordered vertex sequence and an ordered sequence
/// of directed edges.
///
/// The live vertex set is expected to be dense and zero-based
/// (`{0..n-1}`). Self-loops and parallel edges are permitted, and edge order
/// is significant: order-preserving codecs reproduce edges position for
/// position, order-discarding codecs only guarantee the relabeled edge
/// multiset.
///
/// `Display` renders the canonical natural form
/// `G=({v0,v1,...},{(s0,t0),(s1,t1),...})`, which doubles as the equality
/// oracle used by [`is_isomorphic`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    vertices: Vec<usize>,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph from explicit vertex and edge sequences.
    pub fn from_parts(vertices: Vec<usize>, edges: Vec<(usize, usize)>) -> Self {
        Self { vertices, edges }
    }

    /// The vertex identifiers, in sequence order.
    #[inline]
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// The directed edges, in sequence order.
    #[inline]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when the graph has neither vertices nor edges.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    /// Per-vertex count of edge-endpoint occurrences (a self-loop counts
    /// twice). The result is indexed by vertex identifier; endpoints outside
    /// the dense vertex range are ignored.
    pub fn degree_frequencies(&self) -> Vec<usize> {
        let mut frequencies = vec![0; self.vertices.len()];
        for &(source, target) in &self.edges {
            if let Some(slot) = frequencies.get_mut(source) {
                *slot += 1;
            }
            if let Some(slot) = frequencies.get_mut(target) {
                *slot += 1;
            }
        }
        frequencies
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G=({{")?;
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{vertex}")?;
        }
        write!(f, "}},{{")?;
        for (i, (source, target)) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "({source},{target})")?;
        }
        write!(f, "}})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        assert_eq!(Graph::new().to_string(), "G=({},{})");
    }

    #[test]
    fn test_render_vertices_only() {
        let graph = Graph::from_parts(vec![0, 1, 2], vec![]);
        assert_eq!(graph.to_string(), "G=({0,1,2},{})");
    }

    #[test]
    fn test_render_full() {
        let graph = Graph::from_parts(vec![0, 1, 2], vec![(0, 1), (2, 2), (1, 0)]);
        assert_eq!(graph.to_string(), "G=({0,1,2},{(0,1),(2,2),(1,0)})");
    }

    #[test]
    fn test_degree_frequencies() {
        let graph = Graph::from_parts(vec![0, 1, 2], vec![(0, 1), (1, 1), (1, 2)]);
        // vertex 1: one endpoint in (0,1), two in the self-loop, one in (1,2)
        assert_eq!(graph.degree_frequencies(), vec![1, 4, 1]);
    }

    #[test]
    fn test_degree_frequencies_empty() {
        assert!(Graph::new().degree_frequencies().is_empty());
    }
}
