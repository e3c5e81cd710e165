//! Self-describing wire format for a sequence of non-negative integers.
//!
//! Layout: a radix-3 header holding the field width `L` (the width of the
//! largest value), a `T` separator, every value as a fixed `L`-wide radix-3
//! field, and a closing `T`. Restricting fields to radix 3 means scanning
//! for `T` always finds the true boundary.

use crate::codec::error::CodecError;
use crate::codec::symbols::{parse_dna, to_dna, to_dna_padded, RADIX_LIST, SEPARATOR};

/// Append the wire encoding of `values` to `out`.
///
/// An empty slice degenerates to the immediately terminated form `"TT"`
/// (empty header, empty field run), which [`read_list`] reads back as the
/// empty list.
pub fn write_list(values: &[usize], out: &mut String) -> Result<(), CodecError> {
    let max = match values.iter().max() {
        Some(&max) => max,
        None => {
            out.push(SEPARATOR);
            out.push(SEPARATOR);
            return Ok(());
        }
    };
    let width = to_dna(max, RADIX_LIST)?.len();
    out.push_str(&to_dna(width, RADIX_LIST)?);
    out.push(SEPARATOR);
    for &value in values {
        out.push_str(&to_dna_padded(value, RADIX_LIST, width)?);
    }
    out.push(SEPARATOR);
    Ok(())
}

/// Read a list written by [`write_list`] from the beginning of `repr`.
///
/// Returns the parsed values and the unconsumed suffix.
pub fn read_list(repr: &str) -> Result<(Vec<usize>, &str), CodecError> {
    // Field boundaries below are byte offsets.
    if let Some(c) = repr.chars().find(|c| !c.is_ascii()) {
        return Err(CodecError::InvalidSymbol(c));
    }
    let (header, rest) = split_at_separator(repr)?;
    let width = if header.is_empty() {
        0
    } else {
        parse_dna(header, RADIX_LIST)?
    };
    let (body, rest) = split_at_separator(rest)?;
    if width == 0 {
        if body.is_empty() {
            return Ok((Vec::new(), rest));
        }
        return Err(CodecError::MalformedList(
            "zero field width with non-empty body".into(),
        ));
    }
    if body.len() % width != 0 {
        return Err(CodecError::MalformedList(format!(
            "body length {} is not a multiple of field width {width}",
            body.len()
        )));
    }
    let mut values = Vec::with_capacity(body.len() / width);
    for start in (0..body.len()).step_by(width) {
        values.push(parse_dna(&body[start..start + width], RADIX_LIST)?);
    }
    Ok((values, rest))
}

fn split_at_separator(repr: &str) -> Result<(&str, &str), CodecError> {
    repr.split_once(SEPARATOR)
        .ok_or_else(|| CodecError::MalformedList("missing separator".into()))
}
