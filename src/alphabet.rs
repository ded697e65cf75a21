//! Mapping between base-4 symbols and nucleotides
//!
//! Symbols follow the 2-bit nucleotide encoding used throughout [`bitnuc`]:
//!
//! | Symbol | Nucleotide |
//! | ------ | ---------- |
//! | 0      | A          |
//! | 1      | C          |
//! | 2      | G          |
//! | 3      | T          |
//!
//! Bulk conversions pack up to 32 symbols per `u64` (position `i` at bits `2i`)
//! and let `bitnuc` do the translation. Anything outside `ACGT`, including the
//! masking placeholder [`MASK`], is rejected here; callers that need to tolerate
//! masked bases must check with [`is_masked`] first.

use crate::{
    error::{DomainError, ParameterError},
    Result,
};

/// Nucleotides indexed by their symbol value
pub const NUCLEOTIDES: [u8; 4] = *b"ACGT";

/// Placeholder for an unreadable or discarded base
pub const MASK: u8 = b'N';

/// Number of 2-bit symbols that fit into one packed `u64`
const SYMBOLS_PER_WORD: usize = 32;

/// Returns the nucleotide for a base-4 symbol.
pub fn symbol_to_nucleotide(symbol: u8) -> Result<u8> {
    NUCLEOTIDES
        .get(symbol as usize)
        .copied()
        .ok_or_else(|| ParameterError::InvalidSymbol(symbol).into())
}

/// Returns the base-4 symbol for a nucleotide.
pub fn nucleotide_to_symbol(nucleotide: u8) -> Result<u8> {
    match nucleotide {
        b'A' => Ok(0),
        b'C' => Ok(1),
        b'G' => Ok(2),
        b'T' => Ok(3),
        _ => Err(DomainError::InvalidNucleotide(nucleotide as char).into()),
    }
}

/// True if the byte is one of the four unmasked nucleotides
#[inline]
pub fn is_nucleotide(byte: u8) -> bool {
    matches!(byte, b'A' | b'C' | b'G' | b'T')
}

/// True if any position carries something other than `A`, `C`, `G`, `T`.
pub fn is_masked(sequence: &[u8]) -> bool {
    sequence.iter().any(|&b| !is_nucleotide(b))
}

/// Converts a nucleotide sequence into its base-4 symbols.
pub fn to_symbols(sequence: &[u8]) -> Result<Vec<u8>> {
    if let Some(&invalid) = sequence.iter().find(|&&b| !is_nucleotide(b)) {
        return Err(DomainError::InvalidNucleotide(invalid as char).into());
    }
    let mut symbols = Vec::with_capacity(sequence.len());
    for chunk in sequence.chunks(SYMBOLS_PER_WORD) {
        let packed = bitnuc::as_2bit(chunk)?;
        symbols.extend((0..chunk.len()).map(|i| ((packed >> (2 * i)) & 0b11) as u8));
    }
    Ok(symbols)
}

/// Converts base-4 symbols into their nucleotide sequence.
pub fn to_nucleotides(symbols: &[u8]) -> Result<Vec<u8>> {
    let mut sequence = Vec::with_capacity(symbols.len());
    for chunk in symbols.chunks(SYMBOLS_PER_WORD) {
        let mut packed = 0u64;
        for (i, &symbol) in chunk.iter().enumerate() {
            if symbol > 3 {
                return Err(ParameterError::InvalidSymbol(symbol).into());
            }
            packed |= u64::from(symbol) << (2 * i);
        }
        bitnuc::from_2bit(packed, chunk.len(), &mut sequence)?;
    }
    Ok(sequence)
}

/// Fraction of `G` and `C` in a nucleotide sequence, rounded to two decimals.
///
/// Exact halves round to even, so `0.125` becomes `0.12`.
///
/// # Examples
///
/// ```
/// use hamstring::gc_fraction;
///
/// assert_eq!(gc_fraction(b"CCAACCG").unwrap(), 0.71);
/// assert!(gc_fraction(b"").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn gc_fraction(sequence: &[u8]) -> Result<f64> {
    if sequence.is_empty() {
        return Err(DomainError::EmptySequence.into());
    }
    let mut gc = 0usize;
    for &b in sequence {
        match b {
            b'G' | b'C' => gc += 1,
            b'A' | b'T' => {}
            _ => return Err(DomainError::InvalidNucleotide(b as char).into()),
        }
    }
    let fraction = gc as f64 / sequence.len() as f64;
    Ok((fraction * 100.0).round_ties_even() / 100.0)
}
