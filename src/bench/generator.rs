//! Random graph generators used by the benchmarking drivers.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::bench::BenchError;
use crate::graph::Graph;

/// Generate a graph with `vertex_count` vertices and `edge_count` edges
/// whose endpoints are drawn uniformly.
pub fn random_graph<R: Rng + ?Sized>(
    rng: &mut R,
    vertex_count: usize,
    edge_count: usize,
) -> Result<Graph, BenchError> {
    if vertex_count == 0 && edge_count > 0 {
        return Err(BenchError::InvalidParameter(
            "cannot place edges in a graph without vertices".into(),
        ));
    }
    let mut edges = Vec::with_capacity(edge_count);
    for _ in 0..edge_count {
        edges.push((
            rng.gen_range(0..vertex_count),
            rng.gen_range(0..vertex_count),
        ));
    }
    Ok(Graph::from_parts((0..vertex_count).collect(), edges))
}

/// Generate a graph whose edge endpoints are drawn from a normal
/// distribution, clamped into the vertex range. Skewed means concentrate
/// edges on few vertices, which is the interesting case for the
/// frequency-sensitive codecs.
pub fn random_graph_gaussian<R: Rng + ?Sized>(
    rng: &mut R,
    vertex_count: usize,
    edge_count: usize,
    mean: f64,
    std_dev: f64,
) -> Result<Graph, BenchError> {
    if vertex_count == 0 && edge_count > 0 {
        return Err(BenchError::InvalidParameter(
            "cannot place edges in a graph without vertices".into(),
        ));
    }
    let normal = Normal::new(mean, std_dev)
        .map_err(|e| BenchError::InvalidParameter(format!("bad endpoint distribution: {e}")))?;
    let limit = vertex_count as i64 - 1;
    let mut edges = Vec::with_capacity(edge_count);
    for _ in 0..edge_count {
        let source = (normal.sample(rng) as i64).clamp(0, limit) as usize;
        let target = (normal.sample(rng) as i64).clamp(0, limit) as usize;
        edges.push((source, target));
    }
    Ok(Graph::from_parts((0..vertex_count).collect(), edges))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_counts_and_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = random_graph(&mut rng, 12, 30).unwrap();
        assert_eq!(graph.vertex_count(), 12);
        assert_eq!(graph.edge_count(), 30);
        assert!(graph.edges().iter().all(|&(s, t)| s < 12 && t < 12));
    }

    #[test]
    fn test_gaussian_counts_and_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = random_graph_gaussian(&mut rng, 10, 40, 5.0, 2.5).unwrap();
        assert_eq!(graph.vertex_count(), 10);
        assert_eq!(graph.edge_count(), 40);
        assert!(graph.edges().iter().all(|&(s, t)| s < 10 && t < 10));
    }

    #[test]
    fn test_gaussian_clamps_out_of_range_samples() {
        let mut rng = StdRng::seed_from_u64(7);
        let low = random_graph_gaussian(&mut rng, 5, 20, -100.0, 0.5).unwrap();
        assert!(low.edges().iter().all(|&(s, t)| s == 0 && t == 0));
        let high = random_graph_gaussian(&mut rng, 5, 20, 100.0, 0.5).unwrap();
        assert!(high.edges().iter().all(|&(s, t)| s == 4 && t == 4));
    }

    #[test]
    fn test_empty_graph_allowed() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_graph(&mut rng, 0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_edges_without_vertices_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            random_graph(&mut rng, 0, 3),
            Err(BenchError::InvalidParameter(_))
        ));
        assert!(matches!(
            random_graph_gaussian(&mut rng, 0, 3, 0.0, 1.0),
            Err(BenchError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_negative_std_dev_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            random_graph_gaussian(&mut rng, 5, 5, 2.0, -1.0),
            Err(BenchError::InvalidParameter(_))
        ));
    }
}
