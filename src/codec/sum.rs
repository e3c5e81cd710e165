//! Codec built on a greedy weighted numeral system.
//!
//! Values are rendered by repeatedly subtracting the largest symbol weight
//! (`G` = 5, `C` = 2, `A` = 1) that keeps the remainder non-negative. The
//! greedy rendering is unique for every positive value; zero renders as the
//! empty string, which is why all vertex references go on the wire 1-based.

use std::collections::HashMap;

use crate::codec::error::CodecError;
use crate::codec::symbols::SEPARATOR;
use crate::codec::GraphCodec;
use crate::graph::Graph;

const WEIGHT_A: usize = 1;
const WEIGHT_C: usize = 2;
const WEIGHT_G: usize = 5;

/// Strategy: greedy weighted fields, `T`-terminated.
pub struct Sum;

/// Render `value` greedily over the weights `G=5`, `C=2`, `A=1`.
fn greedy(value: usize) -> String {
    let mut out = String::new();
    let mut rest = value;
    while rest > 0 {
        if rest >= WEIGHT_G {
            rest -= WEIGHT_G;
            out.push('G');
        } else if rest >= WEIGHT_C {
            rest -= WEIGHT_C;
            out.push('C');
        } else {
            rest -= WEIGHT_A;
            out.push('A');
        }
    }
    out
}

/// Sum the symbol weights of one field.
fn field_value(field: &str) -> Result<usize, CodecError> {
    let mut value = 0;
    for c in field.chars() {
        value += match c {
            'A' => WEIGHT_A,
            'C' => WEIGHT_C,
            'G' => WEIGHT_G,
            _ => return Err(CodecError::InvalidSymbol(c)),
        };
    }
    Ok(value)
}

/// Edge-touched vertices in order of first appearance across the edge
/// sequence (sources before targets within each edge).
fn touched_vertices(graph: &Graph) -> Vec<usize> {
    let mut touched = Vec::new();
    for &(source, target) in graph.edges() {
        if !touched.contains(&source) {
            touched.push(source);
        }
        if !touched.contains(&target) {
            touched.push(target);
        }
    }
    touched
}

impl GraphCodec for Sum {
    fn encode(&self, graph: &Graph, preserve_order: bool) -> Result<String, CodecError> {
        let renumbering: Option<HashMap<usize, usize>> = if preserve_order {
            None
        } else {
            Some(
                touched_vertices(graph)
                    .into_iter()
                    .enumerate()
                    .map(|(dense, vertex)| (vertex, dense))
                    .collect(),
            )
        };
        let reference = |vertex: usize| match &renumbering {
            Some(map) => map[&vertex] + 1,
            None => vertex + 1,
        };

        let mut out = greedy(graph.vertex_count());
        out.push(SEPARATOR);
        if graph.edges().is_empty() {
            out.push(SEPARATOR);
            return Ok(out);
        }
        for &(source, target) in graph.edges() {
            out.push_str(&greedy(reference(source)));
            out.push(SEPARATOR);
            out.push_str(&greedy(reference(target)));
            out.push(SEPARATOR);
        }
        Ok(out)
    }

    fn decode(&self, repr: &str) -> Result<Graph, CodecError> {
        let (count_field, rest) = repr
            .split_once(SEPARATOR)
            .ok_or_else(|| CodecError::MalformedList("missing separator".into()))?;
        let vertex_count = field_value(count_field)?;

        let mut fields: Vec<&str> = rest.split(SEPARATOR).collect();
        while fields.last() == Some(&"") {
            fields.pop();
        }
        if fields.len() % 2 != 0 {
            return Err(CodecError::Decode("dangling edge endpoint field".into()));
        }

        let mut edges = Vec::with_capacity(fields.len() / 2);
        for pair in fields.chunks(2) {
            let source = field_value(pair[0])?;
            let target = field_value(pair[1])?;
            if source == 0 || target == 0 {
                return Err(CodecError::Decode(
                    "vertex reference field decoded to zero".into(),
                ));
            }
            // References are 1-based, so the count field bounds them.
            if source > vertex_count || target > vertex_count {
                return Err(CodecError::Decode(format!(
                    "edge endpoint outside the declared {vertex_count}-vertex range"
                )));
            }
            edges.push((source - 1, target - 1));
        }

        Ok(Graph::from_parts((0..vertex_count).collect(), edges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greedy_rendering() {
        assert_eq!(greedy(0), "");
        assert_eq!(greedy(1), "A");
        assert_eq!(greedy(2), "C");
        assert_eq!(greedy(3), "CA");
        assert_eq!(greedy(4), "CC");
        assert_eq!(greedy(5), "G");
        assert_eq!(greedy(6), "GA");
        assert_eq!(greedy(12), "GGC");
    }

    #[test]
    fn test_greedy_inverts_cleanly() {
        for value in 0..500 {
            assert_eq!(field_value(&greedy(value)).unwrap(), value);
        }
    }

    #[test]
    fn test_encode_single_edge() {
        let graph = Graph::from_parts(vec![0, 1], vec![(0, 1)]);
        assert_eq!(Sum.encode(&graph, true).unwrap(), "CTATCT");
        assert_eq!(Sum.encode(&graph, false).unwrap(), "CTATCT");
    }

    #[test]
    fn test_decode_single_edge() {
        let graph = Sum.decode("CTATCT").unwrap();
        assert_eq!(graph.vertices(), &[0, 1]);
        assert_eq!(graph.edges(), &[(0, 1)]);
    }

    #[test]
    fn test_zero_edge_graph() {
        let graph = Graph::from_parts(vec![0, 1, 2], vec![]);
        let encoded = Sum.encode(&graph, true).unwrap();
        assert_eq!(encoded, "CATT");
        let decoded = Sum.decode(&encoded).unwrap();
        assert_eq!(decoded.vertices(), &[0, 1, 2]);
        assert!(decoded.edges().is_empty());
    }

    #[test]
    fn test_empty_graph() {
        let encoded = Sum.encode(&Graph::new(), true).unwrap();
        assert_eq!(encoded, "TT");
        assert!(Sum.decode(&encoded).unwrap().is_empty());
    }

    #[test]
    fn test_discard_order_renumbers_densely() {
        // Only vertices 4 and 2 touch edges; they become references 1 and 2.
        let graph = Graph::from_parts(vec![0, 1, 2, 3, 4], vec![(4, 2)]);
        assert_eq!(Sum.encode(&graph, false).unwrap(), "GTATCT");
        // Order-preserving keeps the originals, 1-based.
        assert_eq!(Sum.encode(&graph, true).unwrap(), "GTGTCAT");
    }

    #[test]
    fn test_preserve_round_trip_keeps_edge_sequence() {
        let graph = Graph::from_parts(
            vec![0, 1, 2],
            vec![(0, 1), (0, 2), (1, 1), (1, 2), (2, 1)],
        );
        let encoded = Sum.encode(&graph, true).unwrap();
        let decoded = Sum.decode(&encoded).unwrap();
        assert_eq!(decoded, graph);
    }

    #[test]
    fn test_decode_rejects_odd_field_run() {
        assert!(matches!(
            Sum.decode("CTAT"),
            Err(CodecError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_rejects_zero_reference() {
        // An interior empty field would mean vertex reference 0.
        assert!(matches!(
            Sum.decode("CTTTATAT"),
            Err(CodecError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_rejects_out_of_range_reference() {
        // One declared vertex, but both endpoint fields sum to 5.
        assert!(matches!(
            Sum.decode("ATGTGT"),
            Err(CodecError::Decode(_))
        ));
        // Endpoint exactly at the count is the largest legal reference.
        let decoded = Sum.decode("CATCATCAT").unwrap();
        assert_eq!(decoded.vertices(), &[0, 1, 2]);
        assert_eq!(decoded.edges(), &[(2, 2)]);
    }

    #[test]
    fn test_decode_rejects_foreign_symbol() {
        assert!(matches!(
            Sum.decode("CTXTAT"),
            Err(CodecError::InvalidSymbol('X'))
        ));
    }

    #[test]
    fn test_decode_missing_separator() {
        assert!(matches!(
            Sum.decode("ACG"),
            Err(CodecError::MalformedList(_))
        ));
    }
}
