/// Custom Result type for hamstring operations, wrapping the custom [`Error`] type
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the hamstring library, encompassing all possible error cases
/// that can occur while encoding, decoding, and rewriting barcoded reads.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub enum Error {
    /// A caller-supplied parameter is outside its accepted range
    ParameterError(#[from] ParameterError),
    /// A value cannot be represented or measured in the requested domain
    DomainError(#[from] DomainError),
    /// Standard I/O errors from the Rust standard library
    IoError(#[from] std::io::Error),
    /// UTF-8 encoding/decoding errors
    Utf8Error(#[from] std::str::Utf8Error),
    /// Errors from the bitnuc nucleotide processing library
    BitnucError(#[from] bitnuc::Error),
    /// Malformed FASTQ input
    FastqError(#[from] seq_io::fastq::Error),
    /// Errors opening (possibly compressed) input files
    NifflerError(#[from] niffler::Error),
    /// Generic errors that can occur in any part of the system
    AnyhowError(#[from] anyhow::Error),
}

/// Invalid parameters passed to the codec or to the glue around it
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// The parity length is neither 3 (Hamming 7,4) nor 4 (Hamming 8,4)
    ///
    /// # Arguments
    /// * `usize` - The parity length that was requested
    #[error("Invalid parity length: {0}. Expected 3 or 4")]
    InvalidParityLength(usize),

    /// The parity length could not be parsed as an integer
    #[error("Unable to parse parity length from {0:?}. Expected 3 or 4")]
    UnparsableParityLength(String),

    /// A data word does not hold exactly four symbols
    #[error("Data word has {0} symbols. Expected 4")]
    InvalidDataLength(usize),

    /// A received codeword does not match the length implied by the parity length
    ///
    /// # Fields
    /// * `expected` - The codeword length implied by the parity length
    /// * `got` - The length of the received barcode
    #[error("Barcode length ({got}) does not match the codeword length ({expected})")]
    InvalidCodewordLength { expected: usize, got: usize },

    /// A data word carries a symbol value outside `0..4`
    #[error("Invalid base-4 symbol: {0}")]
    InvalidSymbol(u8),

    /// Base-4 conversion was asked for zero digits
    #[error("Base-4 width must be positive")]
    InvalidWidth,

    /// The simulated barcode panel cannot be drawn from the 256 available data words
    #[error("Invalid number of barcodes: {0}. Expected 1 to 256")]
    InvalidPanelSize(usize),

    /// The simulated error rate is not a probability
    #[error("Invalid error rate: {0}. Expected a value in [0, 1]")]
    InvalidErrorRate(f64),
}

/// Errors raised when a value falls outside the domain of a conversion or metric
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// GC content is undefined for an empty sequence
    #[error("Cannot compute GC content of an empty sequence")]
    EmptySequence,

    /// The byte is not one of `A`, `C`, `G`, `T`
    ///
    /// # Arguments
    /// * `char` - The offending character
    #[error("Invalid nucleotide: {0:?}")]
    InvalidNucleotide(char),

    /// The index needs more base-4 digits than requested
    ///
    /// # Fields
    /// * `index` - The decimal index to convert
    /// * `width` - The number of base-4 digits requested
    #[error("Index {index} does not fit in {width} base-4 digits")]
    IndexOverflow { index: u64, width: usize },
}
