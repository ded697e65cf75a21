//! Plain-text barcode tables
//!
//! Two formats are produced:
//!
//! - the generation table, space-separated with header
//!   `index base4 nucleotide gc` and one row per data word, and
//! - the check report, tab-separated with header `in fixed checksum` and one
//!   row per barcode read from a list.

use std::io::{BufRead, Write};

use crate::{
    decoder::decode,
    encoder::encode_index,
    parity::ParityLength,
    simulate::NUM_DATA_WORDS,
    Result,
};

/// Header line of the generation table
pub const TABLE_HEADER: &str = "index base4 nucleotide gc";

/// Header line of the check report
pub const CHECK_HEADER: &str = "in\tfixed\tchecksum";

/// Writes the generation table covering all 256 data words.
///
/// Returns the number of barcodes written.
pub fn write_barcode_table<W: Write>(writer: &mut W, parity: ParityLength) -> Result<usize> {
    let mut ibuf = itoa::Buffer::new();
    writeln!(writer, "{TABLE_HEADER}")?;
    for index in 0..NUM_DATA_WORDS {
        let barcode = encode_index(index as u64, parity)?;
        writer.write_all(ibuf.format(index).as_bytes())?;
        writeln!(writer, " {barcode}")?;
    }
    writer.flush()?;
    Ok(NUM_DATA_WORDS)
}

/// Counts of checked barcodes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub ok: usize,
    pub corrected: usize,
    pub bad: usize,
}
impl CheckSummary {
    pub fn total(&self) -> usize {
        self.ok + self.corrected + self.bad
    }
}

/// Decodes each non-blank line of `reader` and writes the check report.
///
/// A line whose length does not fit the parity length stops the report with
/// an error naming the line.
pub fn write_check_report<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    parity: ParityLength,
) -> Result<CheckSummary> {
    let mut summary = CheckSummary::default();
    writeln!(writer, "{CHECK_HEADER}")?;
    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        let barcode = line.trim_end();
        if barcode.is_empty() {
            continue;
        }
        let decoded = decode(barcode.as_bytes(), parity).map_err(|e| {
            anyhow::Error::new(e).context(format!(
                "Invalid barcode {barcode:?} on line {}",
                line_number + 1
            ))
        })?;
        match decoded.outcome {
            o if o.is_ok() => summary.ok += 1,
            o if o.is_corrected() => summary.corrected += 1,
            _ => summary.bad += 1,
        }
        writeln!(writer, "{}\t{}\t{}", barcode, decoded.nucleotide, decoded.outcome)?;
    }
    writer.flush()?;
    Ok(summary)
}
