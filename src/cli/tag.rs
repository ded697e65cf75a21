use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use hamstring::{
    simulate::DEFAULT_ERROR_RATE, FastqReader, FastqWriter, ParityLength, TagConfig, Tagger,
};
use log::info;

use super::Command;

/// Prefix FASTQ reads with barcodes from a random panel.
///
/// The panel is printed to standard output. Each prepended barcode has its
/// bases scored `H` and, at the given error rate, one substituted base.
#[derive(Parser, Debug)]
pub struct Tag {
    /// Number of distinct barcodes in the panel (1 to 256)
    pub num_barcodes: usize,

    /// Input FASTQ (plain or compressed)
    pub input: PathBuf,

    /// Output FASTQ
    pub output: PathBuf,

    /// Probability of one substituted base per barcode
    #[arg(short, long, default_value_t = DEFAULT_ERROR_RATE)]
    pub erate: f64,

    /// Number of parity symbols (3 or 4)
    #[arg(short, long, default_value = "3")]
    pub parity: ParityLength,

    /// Seed for a reproducible panel and error pattern
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Command for Tag {
    fn execute(&self) -> Result<()> {
        let config = TagConfig::new(self.num_barcodes)
            .error_rate(self.erate)
            .parity(self.parity)
            .seed(self.seed);
        let mut tagger = Tagger::new(&config)?;

        let reader = FastqReader::from_path(&self.input)
            .with_context(|| format!("Failed to open {}", self.input.display()))?;
        let mut writer = FastqWriter::from_path(&self.output)
            .with_context(|| format!("Failed to create {}", self.output.display()))?;

        {
            let mut out = io::stdout().lock();
            writeln!(out, "Barcodes:")?;
            for barcode in tagger.panel() {
                writeln!(out, "{}", barcode.nucleotide)?;
            }
            out.flush()?;
        }

        let summary = tagger
            .tag_fastq(reader, &mut writer)
            .with_context(|| format!("Failed to tag {}", self.input.display()))?;

        info!(
            "Tagged {} reads with {} barcodes, {} carry a substitution",
            summary.reads,
            tagger.panel().len(),
            summary.mutated
        );
        Ok(())
    }
}
