use thiserror::Error;

/// Error type for codec operations.
///
/// Every decode failure propagates as one of these; a codec never returns a
/// partially populated graph.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A character outside the active symbol mapping was decoded.
    #[error("invalid symbol '{0}' in DNA representation")]
    InvalidSymbol(char),
    /// Only radices 3 and 4 have symbol mappings.
    #[error("unsupported radix {0} (only 3 and 4 are used)")]
    UnsupportedRadix(u32),
    /// A list encoding is missing a separator or its body does not divide
    /// into fields of the declared width.
    #[error("malformed list encoding: {0}")]
    MalformedList(String),
    /// A natural-form edge references a label absent from the vertex group.
    #[error("edge references undeclared vertex '{0}'")]
    UndeclaredVertex(String),
    /// Any other framing problem in a symbol string.
    #[error("decoding error: {0}")]
    Decode(String),
}
