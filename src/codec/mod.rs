//! Graph-to-DNA codecs.
//!
//! Four interchangeable strategies turn a [`Graph`] into a string over the
//! alphabet `A,C,G,T` and back. Order-preserving encodes reproduce the
//! original vertex and edge sequences exactly on decode; order-discarding
//! encodes trade that for shorter output and only promise a graph whose
//! relabeled edge sequence matches.

mod error;
mod fixed;
mod huffman;
mod natural;
mod sum;
pub(crate) mod symbols;
pub(crate) mod wire;

pub use error::CodecError;
pub use fixed::FixedLength;
pub use huffman::Huffman;
pub use natural::Natural;
pub use sum::Sum;

use serde::{Deserialize, Serialize};

use crate::graph::Graph;

/// Contract every codec strategy fulfils.
///
/// Both operations are pure and stateless; every call builds its own lookup
/// tables and never touches the input graph.
pub trait GraphCodec {
    fn encode(&self, graph: &Graph, preserve_order: bool) -> Result<String, CodecError>;
    fn decode(&self, repr: &str) -> Result<Graph, CodecError>;
}

/// Strategies for encoding graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodecStrategy {
    /// Human-readable natural form.
    Natural,
    /// Greedy weighted fields with `T` separators.
    Sum,
    /// Fixed-width radix-4 reference fields.
    FixedLength,
    /// Canonical 4-ary Huffman codewords.
    Huffman,
}

impl CodecStrategy {
    pub const ALL: [CodecStrategy; 4] = [
        CodecStrategy::Natural,
        CodecStrategy::Sum,
        CodecStrategy::FixedLength,
        CodecStrategy::Huffman,
    ];

    /// Encode using the selected strategy.
    pub fn encode(&self, graph: &Graph, preserve_order: bool) -> Result<String, CodecError> {
        match self {
            CodecStrategy::Natural => Natural.encode(graph, preserve_order),
            CodecStrategy::Sum => Sum.encode(graph, preserve_order),
            CodecStrategy::FixedLength => FixedLength.encode(graph, preserve_order),
            CodecStrategy::Huffman => Huffman.encode(graph, preserve_order),
        }
    }

    /// Decode using the selected strategy.
    pub fn decode(&self, repr: &str) -> Result<Graph, CodecError> {
        match self {
            CodecStrategy::Natural => Natural.decode(repr),
            CodecStrategy::Sum => Sum.decode(repr),
            CodecStrategy::FixedLength => FixedLength.decode(repr),
            CodecStrategy::Huffman => Huffman.decode(repr),
        }
    }
}

impl Default for CodecStrategy {
    fn default() -> Self {
        Self::Huffman
    }
}

impl std::fmt::Display for CodecStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Natural => write!(f, "natural"),
            Self::Sum => write!(f, "sum"),
            Self::FixedLength => write!(f, "fixed-length"),
            Self::Huffman => write!(f, "huffman"),
        }
    }
}

impl std::str::FromStr for CodecStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "natural" => Ok(Self::Natural),
            "sum" => Ok(Self::Sum),
            "fixed-length" => Ok(Self::FixedLength),
            "fixed" => Ok(Self::FixedLength), // Short alias.
            "huffman" => Ok(Self::Huffman),
            _ => Err(format!(
                "Unknown codec strategy: {s}. Available: natural, sum, fixed-length, huffman"
            )),
        }
    }
}

/// Trait-like access where a `&dyn GraphCodec` is wanted; enum dispatch is
/// preferred elsewhere.
impl GraphCodec for CodecStrategy {
    fn encode(&self, graph: &Graph, preserve_order: bool) -> Result<String, CodecError> {
        CodecStrategy::encode(self, graph, preserve_order)
    }

    fn decode(&self, repr: &str) -> Result<Graph, CodecError> {
        CodecStrategy::decode(self, repr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategies_round_trip() {
        let graph = Graph::from_parts(vec![0, 1, 2], vec![(0, 1), (1, 2), (2, 2)]);

        for strategy in CodecStrategy::ALL {
            let encoded = strategy.encode(&graph, true).unwrap();
            let decoded = strategy.decode(&encoded).unwrap();
            assert_eq!(decoded, graph, "strategy {strategy}");
        }
    }

    #[test]
    fn test_strategy_names_round_trip() {
        for strategy in CodecStrategy::ALL {
            assert_eq!(strategy.to_string().parse::<CodecStrategy>(), Ok(strategy));
        }
        assert_eq!("fixed".parse::<CodecStrategy>(), Ok(CodecStrategy::FixedLength));
        assert!("morse".parse::<CodecStrategy>().is_err());
    }
}
