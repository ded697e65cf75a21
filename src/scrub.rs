//! Barcode correction for FASTQ reads
//!
//! Every read is expected to start with a Hamming barcode. The barcode is
//! decoded and the read is rewritten as follows:
//!
//! | Decode outcome | Corrected barcode known? | Action                         |
//! | -------------- | ------------------------ | ------------------------------ |
//! | `ok`           | -                        | left unchanged                 |
//! | corrected/bad  | yes                      | leading bases replaced         |
//! | corrected/bad  | no, strict mode          | leading bases masked with `N`  |
//! | corrected/bad  | no                       | left unchanged                 |
//!
//! Qualities are never modified.

use std::io::{Read, Write};

use log::{info, warn};

use crate::{
    alphabet::MASK,
    decoder::{decode, CorrectionOutcome},
    fastq::{FastqReader, FastqWriter},
    parity::ParityLength,
    read::{replace_prefix, FastqRead},
    registry::BarcodeRegistry,
    Result,
};

/// Settings for [`Scrubber`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrubConfig {
    /// Parity length of the barcodes; sets the barcode length
    pub parity: ParityLength,

    /// Mask barcodes that cannot be matched to the registry
    pub strict: bool,
}
impl ScrubConfig {
    pub fn new(parity: ParityLength, strict: bool) -> Self {
        Self { parity, strict }
    }

    #[must_use]
    pub fn parity(mut self, parity: ParityLength) -> Self {
        self.parity = parity;
        self
    }

    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// What happened to a single read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrubAction {
    /// The barcode checked out, or could not be matched outside strict mode
    Unchanged(CorrectionOutcome),
    /// The barcode was replaced by its corrected, known form
    Corrected(CorrectionOutcome),
    /// The barcode could not be matched and was masked
    Discarded(String),
    /// The read is shorter than a barcode
    TooShort,
}

/// Running tally of [`ScrubAction`]s
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrubSummary {
    pub reads: usize,
    /// Barcodes whose parity checks held
    pub ok: usize,
    pub corrected: usize,
    pub discarded: usize,
    /// Barcodes that failed their checks and were left as they were
    pub unmatched: usize,
    pub too_short: usize,
}
impl ScrubSummary {
    pub fn record(&mut self, action: &ScrubAction) {
        self.reads += 1;
        match action {
            ScrubAction::Unchanged(outcome) if outcome.is_ok() => self.ok += 1,
            ScrubAction::Unchanged(_) => self.unmatched += 1,
            ScrubAction::Corrected(_) => self.corrected += 1,
            ScrubAction::Discarded(_) => self.discarded += 1,
            ScrubAction::TooShort => self.too_short += 1,
        }
    }
}

/// Decodes read barcodes and rewrites them against a registry
#[derive(Debug, Clone)]
pub struct Scrubber<'a> {
    registry: &'a BarcodeRegistry,
    config: ScrubConfig,
}
impl<'a> Scrubber<'a> {
    pub fn new(registry: &'a BarcodeRegistry, config: ScrubConfig) -> Self {
        Self { registry, config }
    }

    /// Number of leading bases holding the barcode
    pub fn barcode_len(&self) -> usize {
        self.config.parity.codeword_len()
    }

    /// Decides what to do with one read and returns the rewritten read
    pub fn scrub(&self, read: &FastqRead) -> Result<(FastqRead, ScrubAction)> {
        let n = self.barcode_len();
        if read.len() < n {
            return Ok((read.clone(), ScrubAction::TooShort));
        }

        let barcode = &read.seq()[..n];
        let decoded = decode(barcode, self.config.parity)?;
        if decoded.outcome.is_ok() {
            return Ok((read.clone(), ScrubAction::Unchanged(decoded.outcome)));
        }

        if self.registry.contains(&decoded.nucleotide) {
            let fixed = replace_prefix(read, decoded.nucleotide.as_bytes());
            Ok((fixed, ScrubAction::Corrected(decoded.outcome)))
        } else if self.config.strict {
            let masked = replace_prefix(read, &vec![MASK; n]);
            let barcode = String::from_utf8_lossy(barcode).into_owned();
            Ok((masked, ScrubAction::Discarded(barcode)))
        } else {
            Ok((read.clone(), ScrubAction::Unchanged(decoded.outcome)))
        }
    }

    /// Scrubs every read of `reader` into `writer`
    pub fn scrub_fastq<R: Read, W: Write>(
        &self,
        reader: FastqReader<R>,
        writer: &mut FastqWriter<W>,
    ) -> Result<ScrubSummary> {
        let mut summary = ScrubSummary::default();
        for read in reader {
            let read = read?;
            let (scrubbed, action) = self.scrub(&read)?;
            match &action {
                ScrubAction::Corrected(outcome) => {
                    info!("corrected {} in read {}", outcome, read.id());
                }
                ScrubAction::Discarded(barcode) => {
                    info!("discarded barcode {} in read {}", barcode, read.id());
                }
                ScrubAction::TooShort => {
                    warn!(
                        "read {} is shorter than the {}bp barcode",
                        read.id(),
                        self.barcode_len()
                    );
                }
                ScrubAction::Unchanged(_) => {}
            }
            summary.record(&action);
            writer.write(&scrubbed)?;
        }
        writer.flush()?;
        Ok(summary)
    }
}
