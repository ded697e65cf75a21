//! Parity layout shared by the encoder and decoder
//!
//! Codewords interleave parity and data symbols as `[p1, p2, d0, p3, d1, d2, d3]`,
//! optionally followed by an extended parity symbol `p4` covering the first seven.
//! Each of `p1..p3` guards the 1-based positions whose binary index has the
//! matching bit set, so a single nonzero-syndrome pattern names the position.

use std::{fmt, str::FromStr};

use crate::{error::ParameterError, Error};

/// Number of data symbols protected by every codeword
pub const DATA_LEN: usize = 4;

/// Length of the Hamming(7,4) part of every codeword
pub const HAMMING_LEN: usize = 7;

/// Longest supported codeword (Hamming 8,4)
pub const MAX_CODEWORD_LEN: usize = 8;

/// Codeword positions carrying the data word, in order
pub const DATA_POSITIONS: [usize; DATA_LEN] = [2, 4, 5, 6];

/// Codeword positions carrying `p1`, `p2`, `p3`
pub const PARITY_POSITIONS: [usize; 3] = [0, 1, 3];

/// Positions summed by each of the three Hamming parity checks
pub const CHECKS: [[usize; 4]; 3] = [[0, 2, 4, 6], [1, 2, 5, 6], [3, 4, 5, 6]];

/// Number of parity symbols appended to a data word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParityLength {
    /// Hamming(7,4)
    #[default]
    Three,
    /// Hamming(8,4), with an extended parity symbol over the whole word
    Four,
}
impl ParityLength {
    /// Number of parity symbols
    pub fn symbols(self) -> usize {
        match self {
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Number of symbols in a codeword of this parity length
    pub fn codeword_len(self) -> usize {
        DATA_LEN + self.symbols()
    }

    /// True for the extended Hamming(8,4) code
    pub fn is_extended(self) -> bool {
        matches!(self, Self::Four)
    }
}
impl TryFrom<usize> for ParityLength {
    type Error = ParameterError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            _ => Err(ParameterError::InvalidParityLength(value)),
        }
    }
}
impl FromStr for ParityLength {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s
            .trim()
            .parse()
            .map_err(|_| ParameterError::UnparsableParityLength(s.to_string()))?;
        Ok(Self::try_from(value)?)
    }
}
impl fmt::Display for ParityLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbols())
    }
}

/// Evaluates the three Hamming parity checks over a 7-symbol head.
///
/// All three are zero for a valid codeword.
pub fn hamming_syndromes(head: &[u8; HAMMING_LEN]) -> [u8; 3] {
    CHECKS.map(|check| (check.iter().map(|&i| u32::from(head[i])).sum::<u32>() % 4) as u8)
}

/// Evaluates the three Hamming parity checks over the first seven symbols.
///
/// Fails if fewer than seven symbols are given.
pub fn syndromes(symbols: &[u8]) -> Result<[u8; 3], ParameterError> {
    symbols
        .first_chunk::<HAMMING_LEN>()
        .map(hamming_syndromes)
        .ok_or(ParameterError::InvalidCodewordLength {
            expected: HAMMING_LEN,
            got: symbols.len(),
        })
}

/// Sum of every symbol modulo 4; zero for a valid extended codeword.
pub fn overall_parity(symbols: &[u8]) -> u8 {
    (symbols.iter().map(|&s| u32::from(s)).sum::<u32>() % 4) as u8
}

/// The symbol that brings `sum` to zero modulo 4
#[inline]
pub fn complement(sum: u8) -> u8 {
    (4 - sum % 4) % 4
}
