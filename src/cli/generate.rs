use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use hamstring::{report::write_barcode_table, ParityLength};
use log::info;

use super::Command;

/// Write every barcode of a parity length to a table.
///
/// One row per data word with its index, base-4 codeword, nucleotide
/// barcode and GC fraction.
#[derive(Parser, Debug)]
pub struct Generate {
    /// Output table
    pub output: PathBuf,

    /// Number of parity symbols (3 or 4)
    #[arg(short, long, default_value = "3")]
    pub parity: ParityLength,
}

impl Command for Generate {
    fn execute(&self) -> Result<()> {
        let mut writer = File::create(&self.output)
            .map(BufWriter::new)
            .with_context(|| format!("Failed to create {}", self.output.display()))?;
        let n = write_barcode_table(&mut writer, self.parity)?;
        info!(
            "Wrote {} barcodes of length {} to {}",
            n,
            self.parity.codeword_len(),
            self.output.display()
        );
        Ok(())
    }
}
