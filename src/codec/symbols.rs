//! Conversion between small integers and DNA strings in two sub-alphabets.
//!
//! Radix 4 maps digits 0-3 onto `A,C,G,T` and is used for vertex references
//! and Huffman codewords. Radix 3 maps digits 0-2 onto `A,C,G` only, leaving
//! `T` free as a separator that can never occur inside a field.

use crate::base::Nucleotide;
use crate::codec::error::CodecError;

/// Radix over the full alphabet `A,C,G,T`.
pub const RADIX_FULL: u32 = 4;
/// Radix over `A,C,G`; `T` is reserved as the separator.
pub const RADIX_LIST: u32 = 3;
/// The separator character excluded from the radix-3 alphabet.
pub const SEPARATOR: char = 'T';

fn check_radix(radix: u32) -> Result<(), CodecError> {
    if radix == RADIX_LIST || radix == RADIX_FULL {
        Ok(())
    } else {
        Err(CodecError::UnsupportedRadix(radix))
    }
}

/// Render `value` in the given radix as DNA symbols, most significant digit
/// first. Zero renders as `"A"`, never as the empty string.
pub fn to_dna(value: usize, radix: u32) -> Result<String, CodecError> {
    check_radix(radix)?;
    let radix = radix as usize;
    let mut digits = Vec::new();
    let mut rest = value;
    loop {
        digits.push((rest % radix) as u8);
        rest /= radix;
        if rest == 0 {
            break;
        }
    }
    Ok(digits
        .iter()
        .rev()
        .filter_map(|&d| Nucleotide::from_index(d))
        .map(Nucleotide::to_char)
        .collect())
}

/// Like [`to_dna`], left-padded with the zero symbol `A` to at least
/// `min_width` characters. Longer representations are never truncated.
pub fn to_dna_padded(value: usize, radix: u32, min_width: usize) -> Result<String, CodecError> {
    let repr = to_dna(value, radix)?;
    if repr.len() >= min_width {
        return Ok(repr);
    }
    let mut padded = String::with_capacity(min_width);
    for _ in 0..min_width - repr.len() {
        padded.push('A');
    }
    padded.push_str(&repr);
    Ok(padded)
}

/// Decode a DNA string back to an integer. Fails with
/// [`CodecError::InvalidSymbol`] if a character lies outside the mapping for
/// the given radix (in particular, `T` inside a radix-3 field).
pub fn parse_dna(text: &str, radix: u32) -> Result<usize, CodecError> {
    check_radix(radix)?;
    if text.is_empty() {
        return Err(CodecError::Decode("empty numeric field".into()));
    }
    let mut value: usize = 0;
    for c in text.chars() {
        let digit = Nucleotide::from_char(c)
            .map(|n| u32::from(n.to_index()))
            .filter(|&d| d < radix)
            .ok_or(CodecError::InvalidSymbol(c))?;
        value = value * radix as usize + digit as usize;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_dna_radix_4() {
        assert_eq!(to_dna(0, 4).unwrap(), "A");
        assert_eq!(to_dna(1, 4).unwrap(), "C");
        assert_eq!(to_dna(2, 4).unwrap(), "G");
        assert_eq!(to_dna(3, 4).unwrap(), "T");
        assert_eq!(to_dna(4, 4).unwrap(), "CA");
        assert_eq!(to_dna(5, 4).unwrap(), "CC");
        assert_eq!(to_dna(16, 4).unwrap(), "CAA");
    }

    #[test]
    fn test_to_dna_radix_3_never_emits_separator() {
        for value in 0..200 {
            let repr = to_dna(value, 3).unwrap();
            assert!(!repr.contains(SEPARATOR), "value {value} emitted T: {repr}");
        }
        assert_eq!(to_dna(3, 3).unwrap(), "CA");
        assert_eq!(to_dna(8, 3).unwrap(), "GG");
    }

    #[test]
    fn test_to_dna_padded() {
        assert_eq!(to_dna_padded(0, 4, 3).unwrap(), "AAA");
        assert_eq!(to_dna_padded(5, 4, 3).unwrap(), "ACC");
        // Never truncates
        assert_eq!(to_dna_padded(16, 4, 1).unwrap(), "CAA");
        assert_eq!(to_dna_padded(7, 3, 0).unwrap(), "GC");
    }

    #[test]
    fn test_parse_dna_round_trip() {
        for radix in [3, 4] {
            for value in 0..300 {
                let repr = to_dna(value, radix).unwrap();
                assert_eq!(parse_dna(&repr, radix).unwrap(), value);
                let padded = to_dna_padded(value, radix, 6).unwrap();
                assert_eq!(parse_dna(&padded, radix).unwrap(), value);
            }
        }
    }

    #[test]
    fn test_parse_dna_invalid_symbol() {
        assert!(matches!(
            parse_dna("ACX", 4),
            Err(CodecError::InvalidSymbol('X'))
        ));
        // T is a valid digit only in radix 4
        assert!(matches!(
            parse_dna("AT", 3),
            Err(CodecError::InvalidSymbol('T'))
        ));
        assert_eq!(parse_dna("AT", 4).unwrap(), 3);
    }

    #[test]
    fn test_unsupported_radix() {
        assert!(matches!(to_dna(5, 2), Err(CodecError::UnsupportedRadix(2))));
        assert!(matches!(
            parse_dna("A", 10),
            Err(CodecError::UnsupportedRadix(10))
        ));
    }

    #[test]
    fn test_parse_dna_empty_field() {
        assert!(matches!(parse_dna("", 4), Err(CodecError::Decode(_))));
    }
}
