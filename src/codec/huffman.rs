//! Codec built on a canonical 4-ary Huffman code over vertex references.
//!
//! Vertices that touch many edges get short codewords. Only the shape of
//! the code (how many leaves sit at each tree depth) goes on the wire; the
//! codeword table is regenerated canonically on both sides, so encoder and
//! decoder agree without transmitting the tree.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, HashMap};

use crate::codec::error::CodecError;
use crate::codec::symbols::{to_dna_padded, RADIX_FULL, SEPARATOR};
use crate::codec::wire::{read_list, write_list};
use crate::codec::GraphCodec;
use crate::graph::Graph;

/// Strategy: canonical 4-ary Huffman codewords per vertex.
pub struct Huffman;

/// Arena-allocated tree node; leaves carry a vertex identifier.
struct Node {
    frequency: usize,
    vertex: Option<usize>,
    children: Vec<usize>,
}

/// Build the 4-ary Huffman tree over one leaf per vertex. Ties in the
/// priority queue fall back to arena index, so equal-frequency leaves merge
/// in vertex order and the result is deterministic. `frequencies` must be
/// non-empty. Returns the arena and the root index.
fn build_tree(frequencies: &[usize]) -> (Vec<Node>, usize) {
    let mut arena: Vec<Node> = frequencies
        .iter()
        .enumerate()
        .map(|(vertex, &frequency)| Node {
            frequency,
            vertex: Some(vertex),
            children: Vec::new(),
        })
        .collect();
    let mut queue: BinaryHeap<Reverse<(usize, usize)>> = arena
        .iter()
        .enumerate()
        .map(|(index, node)| Reverse((node.frequency, index)))
        .collect();

    // A 4-ary tree only comes out even if the first merge absorbs the
    // remainder; afterwards every merge takes exactly four nodes.
    let initial = if queue.len() == 1 {
        1
    } else {
        2 + (queue.len() - 2) % 3
    };
    let mut root = merge(&mut arena, &mut queue, initial);
    while queue.len() > 1 {
        root = merge(&mut arena, &mut queue, 4);
    }
    (arena, root)
}

/// Pop the `count` least-frequent nodes and push their new parent.
fn merge(
    arena: &mut Vec<Node>,
    queue: &mut BinaryHeap<Reverse<(usize, usize)>>,
    count: usize,
) -> usize {
    let mut children = Vec::with_capacity(count);
    let mut frequency = 0;
    for _ in 0..count {
        if let Some(Reverse((child_frequency, index))) = queue.pop() {
            frequency += child_frequency;
            children.push(index);
        }
    }
    let parent = arena.len();
    arena.push(Node {
        frequency,
        vertex: None,
        children,
    });
    queue.push(Reverse((frequency, parent)));
    parent
}

/// Group leaf vertices by their depth (the root sits at depth 1). Slot
/// index equals depth, so the leading slots are always empty.
fn leaves_by_depth(arena: &[Node], root: usize) -> Vec<BTreeSet<usize>> {
    let mut slots: Vec<BTreeSet<usize>> = Vec::new();
    let mut stack = vec![(root, 1usize)];
    while let Some((index, depth)) = stack.pop() {
        let node = &arena[index];
        if let Some(vertex) = node.vertex {
            if slots.len() <= depth {
                slots.resize_with(depth + 1, BTreeSet::new);
            }
            slots[depth].insert(vertex);
        } else {
            for &child in &node.children {
                stack.push((child, depth + 1));
            }
        }
    }
    slots
}

/// Canonical codeword table: consecutive radix-4 integers, ascending vertex
/// within a slot, counter shifted by one digit between slots, every codeword
/// padded to its slot's width. Padding keeps the table prefix-free even when
/// the running counter would render short.
fn canonical_codewords(
    slots: &[BTreeSet<usize>],
) -> Result<HashMap<usize, String>, CodecError> {
    let mut codewords = HashMap::new();
    let mut code = 0usize;
    for (width, slot) in slots.iter().enumerate() {
        for &vertex in slot {
            codewords.insert(vertex, to_dna_padded(code, RADIX_FULL, width)?);
            code += 1;
        }
        code *= 4;
    }
    Ok(codewords)
}

fn codeword<'a>(
    codewords: &'a HashMap<usize, String>,
    vertex: usize,
) -> Result<&'a str, CodecError> {
    codewords
        .get(&vertex)
        .map(String::as_str)
        .ok_or_else(|| CodecError::UndeclaredVertex(vertex.to_string()))
}

impl GraphCodec for Huffman {
    fn encode(&self, graph: &Graph, preserve_order: bool) -> Result<String, CodecError> {
        if graph.vertex_count() == 0 {
            if graph.edge_count() > 0 {
                return Err(CodecError::UndeclaredVertex(
                    graph.edges()[0].0.to_string(),
                ));
            }
            // Marker plus empty list, nothing else to say.
            return Ok(if preserve_order { "TTT" } else { "TT" }.to_string());
        }

        let frequencies = graph.degree_frequencies();
        let (arena, root) = build_tree(&frequencies);
        let slots = leaves_by_depth(&arena, root);
        let codewords = canonical_codewords(&slots)?;

        let mut out = String::new();
        if preserve_order {
            out.push(SEPARATOR);
            let mut lengths = Vec::with_capacity(graph.vertex_count());
            for &vertex in graph.vertices() {
                lengths.push(codeword(&codewords, vertex)?.len());
            }
            write_list(&lengths, &mut out)?;
        } else {
            let counts: Vec<usize> = slots.iter().map(BTreeSet::len).collect();
            write_list(&counts, &mut out)?;
        }
        for &(source, target) in graph.edges() {
            out.push_str(codeword(&codewords, source)?);
            out.push_str(codeword(&codewords, target)?);
        }
        Ok(out)
    }

    fn decode(&self, repr: &str) -> Result<Graph, CodecError> {
        if repr == "TT" || repr == "TTT" {
            return Ok(Graph::new());
        }
        // Codeword boundaries below are byte offsets.
        if let Some(c) = repr.chars().find(|c| !c.is_ascii()) {
            return Err(CodecError::InvalidSymbol(c));
        }

        // A leading marker means the list holds per-vertex codeword lengths
        // in original vertex order; otherwise it holds per-depth counts.
        let (slots, vertex_count, rest) = if let Some(stripped) = repr.strip_prefix(SEPARATOR) {
            let (lengths, rest) = read_list(stripped)?;
            let vertex_count = lengths.len();
            let mut slots: Vec<BTreeSet<usize>> = Vec::new();
            for (vertex, &depth) in lengths.iter().enumerate() {
                // A tree over n leaves never reaches below depth n + 1, so
                // anything deeper is a forged header, not a codebook.
                if depth == 0 || depth > vertex_count + 1 {
                    return Err(CodecError::Decode(format!(
                        "implausible codeword length {depth} for {vertex_count} vertices"
                    )));
                }
                if slots.len() <= depth {
                    slots.resize_with(depth + 1, BTreeSet::new);
                }
                slots[depth].insert(vertex);
            }
            (slots, vertex_count, rest)
        } else {
            let (counts, rest) = read_list(repr)?;
            let mut slots = Vec::with_capacity(counts.len());
            let mut next = 0;
            for (depth, &count) in counts.iter().enumerate() {
                // Depth d holds at most 4^(d-1) leaves; depth 0 holds none.
                let capacity = match depth {
                    0 => 0,
                    d => 4usize.saturating_pow(d as u32 - 1),
                };
                if count > capacity {
                    return Err(CodecError::Decode(format!(
                        "depth {depth} cannot hold {count} leaves"
                    )));
                }
                slots.push((next..next + count).collect());
                next += count;
            }
            (slots, next, rest)
        };

        let codewords = canonical_codewords(&slots)?;
        let inverse: HashMap<&str, usize> = codewords
            .iter()
            .map(|(&vertex, code)| (code.as_str(), vertex))
            .collect();

        // Greedy growing-window scan; prefix-freedom makes the first match
        // at each position the only possible one.
        let mut edges = Vec::new();
        let mut pending: Option<usize> = None;
        let mut read = 0;
        for cursor in 1..=rest.len() {
            if let Some(&vertex) = inverse.get(&rest[read..cursor]) {
                read = cursor;
                match pending.take() {
                    None => pending = Some(vertex),
                    Some(source) => edges.push((source, vertex)),
                }
            }
        }
        if read != rest.len() {
            return Err(CodecError::Decode(
                "unmatched symbols in edge section".into(),
            ));
        }
        if pending.is_some() {
            return Err(CodecError::Decode("dangling edge source codeword".into()));
        }

        Ok(Graph::from_parts((0..vertex_count).collect(), edges))
    }
}
