//! The set of barcodes used in an experiment
//!
//! Loaded once per run from a plain list file (one barcode per line, optionally
//! compressed) and only queried afterwards.

use std::{
    collections::HashSet,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{fastq::open_input, Result};

/// Known barcodes, in file order, with constant-time membership checks
#[derive(Debug, Clone, Default)]
pub struct BarcodeRegistry {
    barcodes: Vec<String>,
    lookup: HashSet<String>,
}
impl BarcodeRegistry {
    /// Builds a registry from an in-memory list
    pub fn new<I, S>(barcodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::default();
        for barcode in barcodes {
            registry.insert(barcode.into());
        }
        registry
    }

    /// Reads one barcode per line, ignoring trailing whitespace and blank lines
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut registry = Self::default();
        for line in reader.lines() {
            let line = line?;
            let barcode = line.trim_end();
            if !barcode.is_empty() {
                registry.insert(barcode.to_string());
            }
        }
        Ok(registry)
    }

    /// Reads a (possibly compressed) barcode list file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(BufReader::new(open_input(path)?))
    }

    fn insert(&mut self, barcode: String) {
        if self.lookup.insert(barcode.clone()) {
            self.barcodes.push(barcode);
        }
    }

    /// True if `barcode` is one of the known barcodes
    pub fn contains(&self, barcode: &str) -> bool {
        self.lookup.contains(barcode)
    }

    pub fn len(&self) -> usize {
        self.barcodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.barcodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.barcodes.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_reader() -> anyhow::Result<()> {
        let list = "CCAACCG\r\nAAAAAAA  \n\nCCAACCG\nGTCAGTC\n";
        let registry = BarcodeRegistry::from_reader(Cursor::new(list))?;
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("CCAACCG"));
        assert!(registry.contains("AAAAAAA"));
        assert!(!registry.contains("CCAACC"));
        assert!(!registry.contains("NNNNNNN"));
        assert_eq!(
            registry.iter().collect::<Vec<_>>(),
            vec!["CCAACCG", "AAAAAAA", "GTCAGTC"]
        );
        Ok(())
    }

    #[test]
    fn test_empty_registry() -> anyhow::Result<()> {
        let registry = BarcodeRegistry::from_reader(Cursor::new(""))?;
        assert!(registry.is_empty());
        assert!(!registry.contains(""));
        Ok(())
    }

    #[test]
    fn test_from_empty_path() -> anyhow::Result<()> {
        let file = NamedTempFile::new()?;
        let registry = BarcodeRegistry::from_path(file.path())?;
        assert!(registry.is_empty());
        Ok(())
    }

    #[test]
    fn test_from_short_path() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"A\n")?;
        file.flush()?;
        let registry = BarcodeRegistry::from_path(file.path())?;
        assert_eq!(registry.iter().collect::<Vec<_>>(), vec!["A"]);
        Ok(())
    }

    #[test]
    fn test_in_memory() {
        let registry = BarcodeRegistry::new(["CCAACCG", "ACGTACG"]);
        assert!(registry.contains("ACGTACG"));
        assert_eq!(registry.len(), 2);
    }
}
