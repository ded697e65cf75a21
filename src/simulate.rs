//! Barcode tagging for simulated test data
//!
//! A random panel of distinct barcodes is drawn from the 256 data words. Each
//! read is then prefixed with a barcode picked uniformly from the panel, which
//! with probability `error_rate` has one base swapped for a different one.

use std::io::{Read, Write};

use log::debug;
use rand::{
    rngs::SmallRng,
    seq::{index::sample, IndexedRandom},
    Rng, SeedableRng,
};

use crate::{
    alphabet::NUCLEOTIDES,
    encoder::{encode_index, Barcode},
    error::ParameterError,
    fastq::{FastqReader, FastqWriter},
    parity::{ParityLength, DATA_LEN},
    read::{prepend, FastqRead},
    Result,
};

/// Quality character given to every prepended barcode base
pub const TAG_QUALITY: u8 = b'H';

/// Default probability of a single-base barcode error
pub const DEFAULT_ERROR_RATE: f64 = 0.05;

/// Number of distinct data words, and so the largest possible panel
pub const NUM_DATA_WORDS: usize = 1 << (2 * DATA_LEN);

/// Create a random number generator, optionally seeded for reproducibility.
pub fn create_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_os_rng(),
    }
}

/// Settings for [`Tagger`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagConfig {
    /// Number of distinct barcodes in the panel
    pub num_barcodes: usize,

    /// Probability that a prepended barcode carries one substituted base
    pub error_rate: f64,

    pub parity: ParityLength,

    /// Seed for reproducible fixtures; `None` draws from OS entropy
    pub seed: Option<u64>,
}
impl Default for TagConfig {
    fn default() -> Self {
        Self {
            num_barcodes: 1,
            error_rate: DEFAULT_ERROR_RATE,
            parity: ParityLength::default(),
            seed: None,
        }
    }
}
impl TagConfig {
    pub fn new(num_barcodes: usize) -> Self {
        Self {
            num_barcodes,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn error_rate(mut self, error_rate: f64) -> Self {
        self.error_rate = error_rate;
        self
    }

    #[must_use]
    pub fn parity(mut self, parity: ParityLength) -> Self {
        self.parity = parity;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    fn validate(&self) -> Result<()> {
        if !(1..=NUM_DATA_WORDS).contains(&self.num_barcodes) {
            return Err(ParameterError::InvalidPanelSize(self.num_barcodes).into());
        }
        if !(0.0..=1.0).contains(&self.error_rate) {
            return Err(ParameterError::InvalidErrorRate(self.error_rate).into());
        }
        Ok(())
    }
}

/// Counts of tagged reads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagSummary {
    pub reads: usize,
    /// Reads whose barcode received a substitution
    pub mutated: usize,
}

/// Prefixes reads with barcodes from a random panel
#[derive(Debug, Clone)]
pub struct Tagger<R: Rng> {
    panel: Vec<Barcode>,
    error_rate: f64,
    rng: R,
}
impl Tagger<SmallRng> {
    pub fn new(config: &TagConfig) -> Result<Self> {
        Self::with_rng(config, create_rng(config.seed))
    }
}
impl<R: Rng> Tagger<R> {
    /// Draws the barcode panel with the provided random number generator
    pub fn with_rng(config: &TagConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let panel = sample(&mut rng, NUM_DATA_WORDS, config.num_barcodes)
            .into_iter()
            .map(|index| encode_index(index as u64, config.parity))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            "Drew {} barcodes with parity length {}",
            panel.len(),
            config.parity
        );
        Ok(Self {
            panel,
            error_rate: config.error_rate,
            rng,
        })
    }

    /// The barcodes reads are tagged with
    pub fn panel(&self) -> &[Barcode] {
        &self.panel
    }

    /// Picks a barcode from the panel, possibly with one substituted base.
    ///
    /// Returns the barcode and the 0-based position of the substitution, if any.
    pub fn draw_barcode(&mut self) -> (Vec<u8>, Option<usize>) {
        let mut barcode = match self.panel.choose(&mut self.rng) {
            Some(barcode) => barcode.nucleotide.as_bytes().to_vec(),
            None => return (Vec::new(), None),
        };
        if !self.rng.random_bool(self.error_rate) {
            return (barcode, None);
        }
        let pos = self.rng.random_range(0..barcode.len());
        let current = NUCLEOTIDES
            .iter()
            .position(|&b| b == barcode[pos])
            .unwrap_or(0);
        // a shift of 1..4 lands uniformly on one of the three other bases
        let shift = self.rng.random_range(1..NUCLEOTIDES.len());
        barcode[pos] = NUCLEOTIDES[(current + shift) % NUCLEOTIDES.len()];
        (barcode, Some(pos))
    }

    /// Prepends a drawn barcode (with [`TAG_QUALITY`] qualities) to the read
    pub fn tag(&mut self, read: &FastqRead) -> (FastqRead, Option<usize>) {
        let (barcode, mutation) = self.draw_barcode();
        let qual = vec![TAG_QUALITY; barcode.len()];
        (prepend(read, &barcode, &qual), mutation)
    }

    /// Tags every read of `reader` into `writer`
    pub fn tag_fastq<Rd: Read, W: Write>(
        &mut self,
        reader: FastqReader<Rd>,
        writer: &mut FastqWriter<W>,
    ) -> Result<TagSummary> {
        let mut summary = TagSummary::default();
        for read in reader {
            let (tagged, mutation) = self.tag(&read?);
            summary.reads += 1;
            if mutation.is_some() {
                summary.mutated += 1;
            }
            writer.write(&tagged)?;
        }
        writer.flush()?;
        Ok(summary)
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use crate::{decoder::decode, Error};
    use std::{collections::HashSet, io::Cursor};

    #[test]
    fn test_panel_is_distinct() -> anyhow::Result<()> {
        let config = TagConfig::new(NUM_DATA_WORDS).seed(Some(42));
        let tagger = Tagger::new(&config)?;
        let unique: HashSet<_> = tagger.panel().iter().map(|b| &b.nucleotide).collect();
        assert_eq!(unique.len(), NUM_DATA_WORDS);
        Ok(())
    }

    #[test]
    fn test_seeded_panels_are_reproducible() -> anyhow::Result<()> {
        let config = TagConfig::new(12).seed(Some(7));
        let first = Tagger::new(&config)?;
        let second = Tagger::new(&config)?;
        assert_eq!(first.panel(), second.panel());
        Ok(())
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Tagger::new(&TagConfig::new(0)),
            Err(Error::ParameterError(ParameterError::InvalidPanelSize(0)))
        ));
        assert!(matches!(
            Tagger::new(&TagConfig::new(257)),
            Err(Error::ParameterError(ParameterError::InvalidPanelSize(257)))
        ));
        assert!(matches!(
            Tagger::new(&TagConfig::new(4).error_rate(1.5)),
            Err(Error::ParameterError(ParameterError::InvalidErrorRate(_)))
        ));
    }

    #[test]
    fn test_error_free_tags() -> anyhow::Result<()> {
        let config = TagConfig::new(4).error_rate(0.0).seed(Some(1));
        let mut tagger = Tagger::new(&config)?;
        let read = FastqRead::new("r", "ACGT", "IIII");
        for _ in 0..50 {
            let (tagged, mutation) = tagger.tag(&read);
            assert!(mutation.is_none());
            assert_eq!(tagged.len(), 11);
            assert_eq!(&tagged.qual()[..7], b"HHHHHHH");
            assert_eq!(&tagged.seq()[7..], b"ACGT");
            let barcode = std::str::from_utf8(&tagged.seq()[..7])?;
            assert!(tagger.panel().iter().any(|b| b.nucleotide == barcode));
        }
        Ok(())
    }

    #[test]
    fn test_mutated_tags_are_correctable() -> anyhow::Result<()> {
        for parity in [ParityLength::Three, ParityLength::Four] {
            let config = TagConfig::new(8).error_rate(1.0).parity(parity).seed(Some(3));
            let mut tagger = Tagger::new(&config)?;
            for _ in 0..100 {
                let (barcode, mutation) = tagger.draw_barcode();
                let pos = mutation.expect("every barcode is mutated at rate 1");
                let decoded = decode(&barcode, parity)?;
                assert!(decoded.outcome.is_corrected());
                assert!(decoded.outcome.to_string().ends_with(&format!("pos {}", pos + 1)));
                assert!(tagger
                    .panel()
                    .iter()
                    .any(|b| b.nucleotide == decoded.nucleotide));
            }
        }
        Ok(())
    }

    #[test]
    fn test_tag_fastq() -> anyhow::Result<()> {
        let input = "@r1\nACGT\n+\nIIII\n@r2\nGG\n+\nII\n";
        let config = TagConfig::new(2).error_rate(0.0).seed(Some(11));
        let mut tagger = Tagger::new(&config)?;
        let mut writer = FastqWriter::new(Vec::new());
        let summary = tagger.tag_fastq(FastqReader::new(Cursor::new(input)), &mut writer)?;
        assert_eq!(summary, TagSummary { reads: 2, mutated: 0 });

        let output = writer.into_inner()?;
        let reads = FastqReader::new(Cursor::new(output)).collect::<Result<Vec<_>>>()?;
        assert_eq!(reads[0].seq().len(), 11);
        assert_eq!(reads[1].qual(), b"HHHHHHHII");
        Ok(())
    }
}
