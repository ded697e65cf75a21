use std::{
    io::{self, BufReader, BufWriter},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use hamstring::{fastq::open_input, report::write_check_report, ParityLength};
use log::info;

use super::Command;

/// Decode a list of barcodes, one per line.
///
/// Prints a tab-separated report of the input, the corrected barcode and the
/// outcome (`ok`, a correction, or `bad`) to standard output.
#[derive(Parser, Debug)]
pub struct Check {
    /// Barcode list (plain or compressed)
    pub list: PathBuf,

    /// Number of parity symbols (3 or 4)
    #[arg(short, long, default_value = "3")]
    pub parity: ParityLength,
}

impl Command for Check {
    fn execute(&self) -> Result<()> {
        let handle = open_input(&self.list)
            .with_context(|| format!("Failed to open {}", self.list.display()))?;
        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        let summary = write_check_report(BufReader::new(handle), &mut writer, self.parity)
            .with_context(|| format!("Failed to check {}", self.list.display()))?;
        info!(
            "Checked {} barcodes: {} ok, {} corrected, {} bad",
            summary.total(),
            summary.ok,
            summary.corrected,
            summary.bad
        );
        Ok(())
    }
}
