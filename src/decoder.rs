//! Quaternary Hamming decoder
//!
//! Decoding a received barcode is a single pass:
//!
//! 1. Any base outside `ACGT` makes the barcode unreadable: it is reported as
//!    [`CorrectionOutcome::Bad`] with a fully masked sequence.
//! 2. The three Hamming checks are evaluated. All zero means the barcode is
//!    intact (for the 8-symbol code a nonzero overall parity then points at the
//!    extended parity symbol itself).
//! 3. Otherwise the largest syndrome is the error magnitude, and the pattern of
//!    nonzero syndromes, read as binary `p3 p2 p1`, is the 1-based position.
//! 4. The symbol is corrected and every check is re-evaluated. A correction
//!    that does not produce a valid codeword means two or more bases were hit,
//!    which is also reported as [`CorrectionOutcome::Bad`].
//!
//! Uncorrectable barcodes are a normal outcome, not an error, so callers can
//! keep going through a file full of them.

use std::fmt;

use crate::{
    alphabet::{is_masked, to_nucleotides, to_symbols, MASK, NUCLEOTIDES},
    error::ParameterError,
    parity::{overall_parity, syndromes, ParityLength, HAMMING_LEN},
    Result,
};

/// The verdict on a received barcode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorrectionOutcome {
    /// Every parity check holds
    Ok,
    /// A single base was restored
    Corrected {
        /// Base the codeword originally carried, now restored
        original: u8,
        /// Base that was read at the errored position
        observed: u8,
        /// 1-based position of the corrected base
        pos: usize,
    },
    /// The barcode is unreadable or carries more than one error
    Bad,
}
impl CorrectionOutcome {
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    pub fn is_corrected(self) -> bool {
        matches!(self, Self::Corrected { .. })
    }

    pub fn is_bad(self) -> bool {
        matches!(self, Self::Bad)
    }
}
impl fmt::Display for CorrectionOutcome {
    /// Formats as `ok`, `bad`, or `A > T at pos 4` (original base, observed base)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Bad => write!(f, "bad"),
            Self::Corrected {
                original,
                observed,
                pos,
            } => write!(
                f,
                "{} > {} at pos {}",
                *original as char, *observed as char, pos
            ),
        }
    }
}

/// A decoded barcode and the verdict that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult {
    /// The received barcode, its corrected form, or a fully masked string
    pub nucleotide: String,
    pub outcome: CorrectionOutcome,
}
impl DecodeResult {
    fn ok(received: &[u8]) -> Result<Self> {
        Ok(Self {
            nucleotide: std::str::from_utf8(received)?.to_string(),
            outcome: CorrectionOutcome::Ok,
        })
    }

    fn bad(len: usize) -> Self {
        Self {
            nucleotide: char::from(MASK).to_string().repeat(len),
            outcome: CorrectionOutcome::Bad,
        }
    }

    /// The checksum message: `ok`, `bad`, or the correction performed
    pub fn chksum(&self) -> String {
        self.outcome.to_string()
    }
}

/// Decodes a received barcode, correcting at most one base.
///
/// Fails only when the barcode length does not match the parity length.
///
/// # Examples
///
/// ```
/// use hamstring::{decode, ParityLength};
///
/// let fixed = decode(b"CCATCCG", ParityLength::Three).unwrap();
/// assert_eq!(fixed.nucleotide, "CCAACCG");
/// assert_eq!(fixed.chksum(), "A > T at pos 4");
/// ```
pub fn decode(received: &[u8], parity: ParityLength) -> Result<DecodeResult> {
    let width = parity.codeword_len();
    if received.len() != width {
        return Err(ParameterError::InvalidCodewordLength {
            expected: width,
            got: received.len(),
        }
        .into());
    }

    if is_masked(received) {
        return Ok(DecodeResult::bad(width));
    }

    let mut symbols = to_symbols(received)?;
    let checks = syndromes(&symbols)?;
    let err_type = checks.iter().copied().max().unwrap_or(0);

    let pos = if err_type != 0 {
        error_position(checks)
    } else if parity.is_extended() && overall_parity(&symbols) != 0 {
        // the Hamming part is intact, so the extended parity symbol was hit
        width
    } else {
        return DecodeResult::ok(received);
    };

    if !(1..=width).contains(&pos) {
        return Ok(DecodeResult::bad(width));
    }

    let magnitude = if pos > HAMMING_LEN {
        overall_parity(&symbols)
    } else {
        err_type
    };
    let observed = symbols[pos - 1];
    let original = (observed + 4 - magnitude) % 4;
    symbols[pos - 1] = original;

    if !is_valid(&symbols, parity) {
        return Ok(DecodeResult::bad(width));
    }

    Ok(DecodeResult {
        nucleotide: String::from_utf8(to_nucleotides(&symbols)?).map_err(|e| e.utf8_error())?,
        outcome: CorrectionOutcome::Corrected {
            original: NUCLEOTIDES[original as usize],
            observed: NUCLEOTIDES[observed as usize],
            pos,
        },
    })
}

/// Reads the nonzero syndromes as the binary number `p3 p2 p1`.
fn error_position(checks: [u8; 3]) -> usize {
    checks
        .iter()
        .enumerate()
        .filter(|&(_, &s)| s != 0)
        .fold(0, |pos, (bit, _)| pos | (1 << bit))
}

/// True if every parity check of the codeword holds
fn is_valid(symbols: &[u8], parity: ParityLength) -> bool {
    let extended = if parity.is_extended() {
        overall_parity(symbols)
    } else {
        0
    };
    syndromes(symbols).is_ok_and(|checks| checks == [0, 0, 0]) && extended == 0
}
