use std::error;
use std::fmt;

/// Error returned when attempting to convert an invalid character into a
/// `Nucleotide`.
///
/// The inner `char` is the original character that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidNucleotide(pub char);

impl fmt::Display for InvalidNucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid nucleotide character: '{}'", self.0)
    }
}

impl error::Error for InvalidNucleotide {}
