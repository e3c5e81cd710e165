//! Base types: the DNA alphabet and its conversion errors.

mod errors;
mod nucleotide;

pub use errors::InvalidNucleotide;
pub use nucleotide::Nucleotide;
