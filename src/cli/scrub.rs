use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hamstring::{BarcodeRegistry, FastqReader, FastqWriter, ParityLength, ScrubConfig, Scrubber};
use log::info;

use super::Command;

/// Correct the barcode at the start of every FASTQ read.
///
/// Barcodes failing their parity checks are replaced by the corrected form
/// when it appears in the barcode list. In strict mode the ones that cannot
/// be matched are masked with `N`.
#[derive(Parser, Debug)]
pub struct Scrub {
    /// Known barcodes, one per line
    pub list: PathBuf,

    /// Input FASTQ (plain or compressed)
    pub input: PathBuf,

    /// Output FASTQ
    pub output: PathBuf,

    /// Mask barcodes that cannot be matched to the list
    #[arg(short, long)]
    pub strict: bool,

    /// Number of parity symbols (3 or 4)
    #[arg(short, long, default_value = "3")]
    pub parity: ParityLength,
}

impl Command for Scrub {
    fn execute(&self) -> Result<()> {
        let registry = BarcodeRegistry::from_path(&self.list)
            .with_context(|| format!("Failed to load barcodes from {}", self.list.display()))?;
        info!(
            "Loaded {} barcodes from {}",
            registry.len(),
            self.list.display()
        );

        let reader = FastqReader::from_path(&self.input)
            .with_context(|| format!("Failed to open {}", self.input.display()))?;
        let mut writer = FastqWriter::from_path(&self.output)
            .with_context(|| format!("Failed to create {}", self.output.display()))?;

        let config = ScrubConfig::new(self.parity, self.strict);
        let summary = Scrubber::new(&registry, config)
            .scrub_fastq(reader, &mut writer)
            .with_context(|| format!("Failed to scrub {}", self.input.display()))?;

        info!(
            "Scrubbed {} reads: {} ok, {} corrected, {} discarded, {} unmatched, {} too short",
            summary.reads,
            summary.ok,
            summary.corrected,
            summary.discarded,
            summary.unmatched,
            summary.too_short
        );
        Ok(())
    }
}
