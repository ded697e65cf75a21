//! Quaternary Hamming encoder
//!
//! Turns a four-symbol data word into a 7- or 8-symbol codeword and renders it
//! as base-4 digits, nucleotides, and GC content.

use std::fmt;

use crate::{
    alphabet::{gc_fraction, to_nucleotides},
    base4::encode_base4,
    error::ParameterError,
    parity::{
        complement, hamming_syndromes, overall_parity, ParityLength, DATA_LEN, DATA_POSITIONS,
        HAMMING_LEN, MAX_CODEWORD_LEN, PARITY_POSITIONS,
    },
    Result,
};

/// Four base-4 data symbols
pub type DataWord = [u8; DATA_LEN];

/// A valid codeword of either parity length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codeword {
    /// Symbols in codeword order; the tail past the codeword length is zero
    symbols: [u8; MAX_CODEWORD_LEN],

    /// Determines whether the trailing extended parity symbol is present
    parity: ParityLength,
}
impl Codeword {
    /// Builds the codeword protecting `data`.
    pub fn new(data: DataWord, parity: ParityLength) -> Self {
        let mut head = [0u8; HAMMING_LEN];
        for (&pos, &d) in DATA_POSITIONS.iter().zip(data.iter()) {
            head[pos] = d;
        }

        // parity slots are still zero, so each check sums only its data symbols
        let checks = hamming_syndromes(&head);
        for (&pos, &sum) in PARITY_POSITIONS.iter().zip(checks.iter()) {
            head[pos] = complement(sum);
        }

        let mut symbols = [0u8; MAX_CODEWORD_LEN];
        symbols[..HAMMING_LEN].copy_from_slice(&head);
        if parity.is_extended() {
            symbols[HAMMING_LEN] = complement(overall_parity(&head));
        }
        Self { symbols, parity }
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols[..self.parity.codeword_len()]
    }

    pub fn parity(&self) -> ParityLength {
        self.parity
    }

    /// The protected data word
    pub fn data(&self) -> DataWord {
        DATA_POSITIONS.map(|pos| self.symbols[pos])
    }

    /// Renders the codeword as a string of base-4 digits
    pub fn base4(&self) -> String {
        self.symbols()
            .iter()
            .map(|&s| char::from(b'0' + s))
            .collect()
    }

    /// Renders the codeword as nucleotides
    pub fn nucleotides(&self) -> Result<Vec<u8>> {
        to_nucleotides(self.symbols())
    }
}

/// An encoded barcode with all of its external renderings
#[derive(Debug, Clone, PartialEq)]
pub struct Barcode {
    pub codeword: Codeword,
    /// Codeword as base-4 digits, e.g. `1100112`
    pub base4: String,
    /// Codeword as nucleotides, e.g. `CCAACCG`
    pub nucleotide: String,
    /// GC fraction of `nucleotide`, rounded to two decimals
    pub gc: f64,
}
impl Barcode {
    fn from_codeword(codeword: Codeword) -> Result<Self> {
        let nucleotides = codeword.nucleotides()?;
        let gc = gc_fraction(&nucleotides)?;
        Ok(Self {
            codeword,
            base4: codeword.base4(),
            nucleotide: String::from_utf8(nucleotides).map_err(|e| e.utf8_error())?,
            gc,
        })
    }
}
impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:.2}", self.base4, self.nucleotide, self.gc)
    }
}

/// Encodes a data word of four base-4 symbols.
///
/// # Examples
///
/// ```
/// use hamstring::{encode, ParityLength};
///
/// let barcode = encode(&[0, 1, 1, 2], ParityLength::Three).unwrap();
/// assert_eq!(barcode.base4, "1100112");
/// assert_eq!(barcode.nucleotide, "CCAACCG");
/// assert_eq!(barcode.gc, 0.71);
/// ```
pub fn encode(data: &[u8], parity: ParityLength) -> Result<Barcode> {
    let data: DataWord = data
        .try_into()
        .map_err(|_| ParameterError::InvalidDataLength(data.len()))?;
    if let Some(&invalid) = data.iter().find(|&&d| d > 3) {
        return Err(ParameterError::InvalidSymbol(invalid).into());
    }
    Barcode::from_codeword(Codeword::new(data, parity))
}

/// Encodes the data word whose base-4 digits spell `index` (`0..256`).
pub fn encode_index(index: u64, parity: ParityLength) -> Result<Barcode> {
    let data = encode_base4(index, DATA_LEN)?;
    encode(&data, parity)
}

#[cfg(test)]
mod testing {
    use super::*;
    use crate::{DomainError, Error};

    #[test]
    fn test_known_barcodes() -> anyhow::Result<()> {
        let short = encode(&[0, 1, 1, 2], ParityLength::Three)?;
        assert_eq!(short.base4, "1100112");
        assert_eq!(short.nucleotide, "CCAACCG");
        assert_eq!(short.gc, 0.71);

        let long = encode(&[0, 1, 1, 2], ParityLength::Four)?;
        assert_eq!(long.base4, "11001122");
        assert_eq!(long.nucleotide, "CCAACCGG");
        assert_eq!(long.gc, 0.75);
        Ok(())
    }

    #[test]
    fn test_encode_index_matches_data_word() -> anyhow::Result<()> {
        assert_eq!(
            encode_index(22, ParityLength::Three)?,
            encode(&[0, 1, 1, 2], ParityLength::Three)?
        );
        assert!(matches!(
            encode_index(256, ParityLength::Three),
            Err(Error::DomainError(DomainError::IndexOverflow { .. }))
        ));
        Ok(())
    }

    #[test]
    fn test_every_codeword_checks_out() -> anyhow::Result<()> {
        for index in 0..256 {
            for parity in [ParityLength::Three, ParityLength::Four] {
                let barcode = encode_index(index, parity)?;
                let symbols = barcode.codeword.symbols();
                assert_eq!(symbols.len(), parity.codeword_len());
                assert_eq!(crate::parity::syndromes(symbols)?, [0, 0, 0]);
                if parity.is_extended() {
                    assert_eq!(overall_parity(symbols), 0);
                }
                assert_eq!(barcode.codeword.data().to_vec(), encode_base4(index, 4)?);
            }
        }
        Ok(())
    }

    #[test]
    fn test_parity_formulas() {
        let [d0, d1, d2, d3] = [3u8, 2, 1, 3];
        let codeword = Codeword::new([d0, d1, d2, d3], ParityLength::Four);
        let s = codeword.symbols();
        assert_eq!(s[0], (4 - (d0 + d1 + d3) % 4) % 4);
        assert_eq!(s[1], (4 - (d0 + d2 + d3) % 4) % 4);
        assert_eq!(s[3], (4 - (d1 + d2 + d3) % 4) % 4);
        let head: u8 = s[..7].iter().sum();
        assert_eq!(s[7], (4 - head % 4) % 4);
    }

    #[test]
    fn test_invalid_data_words() {
        assert!(matches!(
            encode(&[0, 1, 2], ParityLength::Three),
            Err(Error::ParameterError(ParameterError::InvalidDataLength(3)))
        ));
        assert!(matches!(
            encode(&[0, 1, 2, 3, 0], ParityLength::Four),
            Err(Error::ParameterError(ParameterError::InvalidDataLength(5)))
        ));
        assert!(matches!(
            encode(&[0, 1, 4, 3], ParityLength::Three),
            Err(Error::ParameterError(ParameterError::InvalidSymbol(4)))
        ));
    }

    #[test]
    fn test_display() -> anyhow::Result<()> {
        let barcode = encode(&[0, 1, 1, 2], ParityLength::Three)?;
        assert_eq!(barcode.to_string(), "1100112 CCAACCG 0.71");
        Ok(())
    }
}
