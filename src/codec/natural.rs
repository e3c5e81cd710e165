//! Codec for the human-readable natural form, e.g. `G=({a,b,c},{(a,b),(a,c)})`.
//!
//! This is the I/O boundary to human-authored graphs: it is the only codec
//! that accepts arbitrary (non-integer, non-dense) vertex labels, mapping
//! each distinct label to a dense integer identifier in order of first
//! appearance.

use std::collections::HashMap;

use crate::codec::error::CodecError;
use crate::codec::GraphCodec;
use crate::graph::Graph;

/// Strategy: canonical textual form, vertices and edges in sequence order.
pub struct Natural;

impl GraphCodec for Natural {
    fn encode(&self, graph: &Graph, _preserve_order: bool) -> Result<String, CodecError> {
        Ok(graph.to_string())
    }

    fn decode(&self, repr: &str) -> Result<Graph, CodecError> {
        let (vertex_group, edge_group) = brace_groups(repr)?;

        let mut label_to_id: HashMap<&str, usize> = HashMap::new();
        let mut vertices = Vec::new();
        if !vertex_group.is_empty() {
            for label in vertex_group.split(',') {
                if !label_to_id.contains_key(label) {
                    let id = label_to_id.len();
                    label_to_id.insert(label, id);
                    vertices.push(id);
                }
            }
        }

        let mut edges = Vec::new();
        if !edge_group.is_empty() {
            let stripped: String = edge_group
                .chars()
                .filter(|&c| c != '(' && c != ')')
                .collect();
            let labels: Vec<&str> = stripped.split(',').collect();
            for pair in labels.chunks(2) {
                if pair.len() < 2 {
                    return Err(CodecError::Decode("dangling edge endpoint".into()));
                }
                let source = resolve(&label_to_id, pair[0])?;
                let target = resolve(&label_to_id, pair[1])?;
                edges.push((source, target));
            }
        }

        Ok(Graph::from_parts(vertices, edges))
    }
}

fn resolve(label_to_id: &HashMap<&str, usize>, label: &str) -> Result<usize, CodecError> {
    label_to_id
        .get(label)
        .copied()
        .ok_or_else(|| CodecError::UndeclaredVertex(label.to_string()))
}

/// Extract the two brace-delimited groups in a single scan. Nested braces
/// are not supported.
fn brace_groups(repr: &str) -> Result<(&str, &str), CodecError> {
    let mut groups = Vec::with_capacity(2);
    let mut start = None;
    for (i, c) in repr.char_indices() {
        match c {
            '{' => start = Some(i + 1),
            '}' => {
                if let Some(s) = start.take() {
                    groups.push(&repr[s..i]);
                }
            }
            _ => {}
        }
    }
    match groups.as_slice() {
        [vertex_group, edge_group, ..] => Ok((vertex_group, edge_group)),
        _ => Err(CodecError::Decode(
            "expected two brace-delimited groups".into(),
        )),
    }
}
