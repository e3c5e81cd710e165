//! Round-trip verification over random graphs and CSV sample reports.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::Rng;

use crate::bench::{random_graph, random_graph_gaussian, BenchError};
use crate::codec::CodecStrategy;
use crate::graph::{is_isomorphic, Graph};

const MAX_VERTICES: usize = 10;
const GRAPHS_PER_SIZE: usize = 10;

/// Check that random graphs survive an encode/decode round trip through
/// `strategy`, both order-preserving and order-discarding, up to
/// isomorphism. Exercises uniformly and normally distributed edge
/// endpoints. Returns `false` on the first graph that comes back
/// non-isomorphic.
pub fn verify_roundtrips<R: Rng + ?Sized>(
    strategy: CodecStrategy,
    rng: &mut R,
) -> Result<bool, BenchError> {
    for vertex_count in 1..MAX_VERTICES {
        let max_edges = vertex_count * vertex_count;
        for _ in 0..GRAPHS_PER_SIZE {
            let edge_count = rng.gen_range(0..max_edges);
            let graph = random_graph(rng, vertex_count, edge_count)?;
            if !roundtrip_isomorphic(strategy, &graph)? {
                return Ok(false);
            }
        }
    }
    for vertex_count in 1..MAX_VERTICES {
        let max_edges = vertex_count * vertex_count;
        let mean = vertex_count as f64 / 2.0;
        let std_dev = rng.gen::<f64>() * mean;
        for _ in 0..GRAPHS_PER_SIZE {
            let edge_count = rng.gen_range(0..max_edges);
            let graph = random_graph_gaussian(rng, vertex_count, edge_count, mean, std_dev)?;
            if !roundtrip_isomorphic(strategy, &graph)? {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

fn roundtrip_isomorphic(strategy: CodecStrategy, graph: &Graph) -> Result<bool, BenchError> {
    for preserve_order in [true, false] {
        let encoded = strategy.encode(graph, preserve_order)?;
        let decoded = strategy.decode(&encoded)?;
        if !is_isomorphic(graph, &decoded)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Write a `;`-delimited CSV comparing encoded lengths across strategies.
///
/// One row per vertex count from 1 to `max_vertices`, each over a random
/// graph with `ceil(n^2 / 4)` normally distributed edges: vertex count,
/// edge count, natural form, then the order-preserving and
/// order-discarding encoding per strategy.
pub fn write_sample_report<P: AsRef<Path>, R: Rng + ?Sized>(
    path: P,
    strategies: &[CodecStrategy],
    max_vertices: usize,
    rng: &mut R,
) -> Result<(), BenchError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write!(writer, "VerticesInGraph;EdgesInGraph;graphString")?;
    for strategy in strategies {
        write!(writer, ";preserveOrder-{strategy};noOrder-{strategy}")?;
    }
    writeln!(writer)?;

    for vertex_count in 1..=max_vertices {
        let edge_count = (vertex_count * vertex_count).div_ceil(4);
        let graph = random_graph_gaussian(
            rng,
            vertex_count,
            edge_count,
            vertex_count as f64 / 2.0,
            vertex_count as f64 * 0.25,
        )?;
        write!(writer, "{vertex_count};{edge_count};{graph}")?;
        for strategy in strategies {
            let preserved = strategy.encode(&graph, true)?;
            let reordered = strategy.encode(&graph, false)?;
            write!(writer, ";{preserved};{reordered}")?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}
