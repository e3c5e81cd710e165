//! DNAGraph: encoding small graphs as DNA sequences.
//!
//! This library turns labeled graphs into strings over the nucleotide
//! alphabet `A,C,G,T` and back, through several interchangeable codec
//! strategies, and ships a bounded isomorphism checker to validate that a
//! round trip preserved graph structure.

pub mod base;
pub mod bench;
pub mod codec;
pub mod graph;

// Re-export commonly used types for convenient external access.
//
// These types form the public, stable surface that most consumers of the
// library will use: `dnagraph::Graph`, `dnagraph::CodecStrategy`, etc.
pub use base::Nucleotide;
pub use codec::{CodecError, CodecStrategy, GraphCodec};
pub use graph::{is_isomorphic, Graph, IsomorphismError};
