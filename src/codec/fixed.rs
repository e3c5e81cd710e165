//! Codec with fixed-width radix-4 vertex reference fields.
//!
//! The edge list is a run of `2w`-symbol chunks, where `w` is the number of
//! radix-4 digits needed for the largest 1-based reference. The all-`A`
//! field of width `w` can never be a real reference (those start at 1), so
//! it doubles as the edge-list terminator. A leading all-`A` run closed by
//! the literal `C` announces `w` itself.

use std::collections::HashMap;

use crate::codec::error::CodecError;
use crate::codec::symbols::{parse_dna, to_dna, to_dna_padded, RADIX_FULL};
use crate::codec::GraphCodec;
use crate::graph::Graph;

const HEADER_END: char = 'C';

/// Strategy: fixed-width adjacency fields with an all-zero sentinel.
pub struct FixedLength;

impl GraphCodec for FixedLength {
    fn encode(&self, graph: &Graph, preserve_order: bool) -> Result<String, CodecError> {
        if graph.vertices().is_empty() {
            return Ok(HEADER_END.to_string());
        }

        let mut used = Vec::new();
        for &(source, target) in graph.edges() {
            if !used.contains(&source) {
                used.push(source);
            }
            if !used.contains(&target) {
                used.push(target);
            }
        }
        if used.is_empty() {
            let mut out = HEADER_END.to_string();
            out.push_str(&to_dna(graph.vertex_count(), RADIX_FULL)?);
            return Ok(out);
        }

        // 1-based references in vertex sequence order. Order-discarding
        // encodes skip edge-free vertices entirely.
        let mut references: HashMap<usize, usize> = HashMap::new();
        let mut last_used_position = 0;
        for (position, &vertex) in graph.vertices().iter().enumerate() {
            if used.contains(&vertex) {
                references.insert(vertex, references.len() + 1);
                last_used_position = position;
            } else if preserve_order {
                references.insert(vertex, references.len() + 1);
            }
        }

        let reference_count = if preserve_order {
            graph.vertex_count()
        } else {
            used.len()
        };
        let width = to_dna(reference_count, RADIX_FULL)?.len();
        let sentinel = to_dna_padded(0, RADIX_FULL, width)?;

        let mut out = sentinel.clone();
        out.push(HEADER_END);
        for &(source, target) in graph.edges() {
            out.push_str(&to_dna_padded(references[&source], RADIX_FULL, width)?);
            out.push_str(&to_dna_padded(references[&target], RADIX_FULL, width)?);
        }
        out.push_str(&sentinel);
        let trailing = if preserve_order {
            graph.vertex_count() - last_used_position - 1
        } else {
            graph.vertex_count() - used.len()
        };
        out.push_str(&to_dna(trailing, RADIX_FULL)?);
        Ok(out)
    }

    fn decode(&self, repr: &str) -> Result<Graph, CodecError> {
        // Field boundaries below are byte offsets.
        if let Some(c) = repr.chars().find(|c| !c.is_ascii()) {
            return Err(CodecError::InvalidSymbol(c));
        }
        let width = repr.chars().take_while(|&c| c == 'A').count();
        let rest = match repr[width..].strip_prefix(HEADER_END) {
            Some(rest) => rest,
            None => return Err(CodecError::Decode("missing field width header".into())),
        };

        if width == 0 {
            if rest.is_empty() {
                return Ok(Graph::new());
            }
            let vertex_count = parse_dna(rest, RADIX_FULL)?;
            return Ok(Graph::from_parts((0..vertex_count).collect(), Vec::new()));
        }

        let sentinel: String = "A".repeat(width);
        let mut field_to_vertex: HashMap<&str, usize> = HashMap::new();
        let mut vertices = Vec::new();
        let mut edges = Vec::new();
        let mut max_vertex = 0;

        let mut i = 0;
        loop {
            if i + width > rest.len() {
                return Err(CodecError::Decode("missing edge list terminator".into()));
            }
            let first = &rest[i..i + width];
            if first == sentinel {
                i += width;
                break;
            }
            if i + 2 * width > rest.len() {
                return Err(CodecError::Decode("truncated edge field".into()));
            }
            let second = &rest[i + width..i + 2 * width];
            for field in [first, second] {
                if !field_to_vertex.contains_key(field) {
                    let reference = parse_dna(field, RADIX_FULL)?;
                    if reference == 0 {
                        // Only the terminating sentinel may be all-zero.
                        return Err(CodecError::Decode(
                            "vertex reference field decoded to zero".into(),
                        ));
                    }
                    let vertex = reference - 1;
                    field_to_vertex.insert(field, vertex);
                    vertices.push(vertex);
                    max_vertex = max_vertex.max(vertex);
                }
            }
            edges.push((field_to_vertex[first], field_to_vertex[second]));
            i += 2 * width;
        }

        // Fill identifier gaps below the largest reference, then append the
        // declared number of trailing edge-free vertices.
        let trailing = parse_dna(&rest[i..], RADIX_FULL)?;
        for vertex in 0..max_vertex {
            if !vertices.contains(&vertex) {
                vertices.push(vertex);
            }
        }
        for _ in 0..trailing {
            vertices.push(vertices.len());
        }
        vertices.sort_unstable();

        Ok(Graph::from_parts(vertices, edges))
    }
}
