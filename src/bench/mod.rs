//! Random graph generation and codec benchmarking drivers.

mod generator;
mod report;

pub use generator::{random_graph, random_graph_gaussian};
pub use report::{verify_roundtrips, write_sample_report};

use thiserror::Error;

use crate::codec::CodecError;
use crate::graph::IsomorphismError;

/// Errors from the benchmarking drivers.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("codec failure: {0}")]
    Codec(#[from] CodecError),

    #[error("isomorphism check failed: {0}")]
    Isomorphism(#[from] IsomorphismError),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
