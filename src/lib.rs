//! # hamstring
//!
//! Quaternary Hamming barcodes for sequencing reads.
//!
//! A four-symbol data word is protected by three parity symbols (Hamming 7,4)
//! or four (Hamming 8,4) and written over the nucleotide alphabet. Any single
//! substituted base can be located and corrected; two substitutions, or a base
//! that is already unreadable, are reported as `bad`.
//!
//! ```
//! use hamstring::{decode, encode, ParityLength};
//!
//! let barcode = encode(&[0, 1, 1, 2], ParityLength::Three).unwrap();
//! assert_eq!(barcode.nucleotide, "CCAACCG");
//!
//! let fixed = decode(b"CCATCCG", ParityLength::Three).unwrap();
//! assert_eq!(fixed.nucleotide, "CCAACCG");
//! assert_eq!(fixed.chksum(), "A > T at pos 4");
//!
//! let broken = decode(b"ACAAACG", ParityLength::Three).unwrap();
//! assert_eq!(broken.nucleotide, "NNNNNNN");
//! assert_eq!(broken.chksum(), "bad");
//! ```
//!
//! Around the codec sit the pieces needed to use it on real data: a registry
//! of known barcodes, a FASTQ scrubber that repairs barcodes at the start of
//! each read, a tagger that produces simulated barcoded reads, and the plain
//! text tables the command-line tool reads and writes.

pub mod alphabet;
pub mod base4;
pub mod decoder;
pub mod encoder;
mod error;
pub mod fastq;
pub mod parity;
pub mod read;
pub mod registry;
pub mod report;
pub mod scrub;
pub mod simulate;

pub use alphabet::{gc_fraction, nucleotide_to_symbol, symbol_to_nucleotide, MASK};
pub use base4::{decode_base4, encode_base4};
pub use decoder::{decode, CorrectionOutcome, DecodeResult};
pub use encoder::{encode, encode_index, Barcode, Codeword, DataWord};
pub use error::{DomainError, Error, ParameterError, Result};
pub use fastq::{FastqReader, FastqWriter};
pub use parity::ParityLength;
pub use read::FastqRead;
pub use registry::BarcodeRegistry;
pub use scrub::{ScrubAction, ScrubConfig, ScrubSummary, Scrubber};
pub use simulate::{TagConfig, TagSummary, Tagger};
