//! FASTQ input and output
//!
//! Records are parsed with [`seq_io`] from plain or compressed input (via
//! [`niffler`]) and written back as four-line records with a bare `+` separator.

use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
};

use seq_io::fastq::{Reader, Record};

use crate::{read::FastqRead, Result};

/// Opens a plain or compressed input file.
///
/// Files too short to carry a compression magic number are read as plain
/// text, so empty inputs open cleanly.
pub fn open_input<P: AsRef<Path>>(path: P) -> Result<Box<dyn Read>> {
    let path = path.as_ref();
    let handle: Box<dyn Read> = match niffler::from_path(path) {
        Ok((handle, _format)) => handle,
        Err(niffler::Error::FileTooShort) => Box::new(File::open(path)?),
        Err(e) => return Err(e.into()),
    };
    Ok(handle)
}

/// Streams [`FastqRead`]s out of any reader
pub struct FastqReader<R: Read> {
    inner: Reader<R>,
}
impl FastqReader<Box<dyn Read>> {
    /// Opens a FASTQ file, decompressing it if needed
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        open_input(path).map(Self::new)
    }
}
impl<R: Read> FastqReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner: Reader::new(inner),
        }
    }
}
impl<R: Read> Iterator for FastqReader<R> {
    type Item = Result<FastqRead>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.inner.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };
        Some(
            std::str::from_utf8(record.head())
                .map(|name| FastqRead::new(name, record.seq(), record.qual()))
                .map_err(Into::into),
        )
    }
}

/// Writes a single FASTQ record from its parts
pub fn write_fastq_parts<W: Write>(
    writer: &mut W,
    name: &[u8],
    sequence: &[u8],
    quality: &[u8],
) -> std::io::Result<()> {
    writer.write_all(b"@")?;
    writer.write_all(name)?;
    writer.write_all(b"\n")?;
    writer.write_all(sequence)?;
    writer.write_all(b"\n+\n")?;
    writer.write_all(quality)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Writes [`FastqRead`]s under their [`FastqRead::id`]
pub struct FastqWriter<W: Write> {
    /// Inner writer
    inner: W,

    /// Number of records written
    records_written: usize,
}
impl FastqWriter<BufWriter<File>> {
    /// Creates (or truncates) a FASTQ file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let handle = File::create(path).map(BufWriter::new)?;
        Ok(Self::new(handle))
    }
}
impl<W: Write> FastqWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            records_written: 0,
        }
    }

    pub fn write(&mut self, read: &FastqRead) -> Result<()> {
        write_fastq_parts(
            &mut self.inner,
            read.id().as_bytes(),
            read.seq(),
            read.qual(),
        )?;
        self.records_written += 1;
        Ok(())
    }

    pub fn records_written(&self) -> usize {
        self.records_written
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flushes and hands back the inner writer
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use std::io::Cursor;

    use tempfile::NamedTempFile;

    const FASTQ: &str = "@read1/1 extra\nACGTACGT\n+\nIIIIIIII\n@read2\nTTTT\n+read2\n#I#I\n";

    #[test]
    fn test_read_records() -> anyhow::Result<()> {
        let reads = FastqReader::new(Cursor::new(FASTQ)).collect::<Result<Vec<_>>>()?;
        assert_eq!(reads.len(), 2);
        assert_eq!(reads[0].name(), "read1/1 extra");
        assert_eq!(reads[0].seq(), b"ACGTACGT");
        assert_eq!(reads[0].qual(), b"IIIIIIII");
        assert_eq!(reads[1].name(), "read2");
        assert_eq!(reads[1].qual(), b"#I#I");
        Ok(())
    }

    #[test]
    fn test_empty_file() -> anyhow::Result<()> {
        let file = NamedTempFile::new()?;
        let reads = FastqReader::from_path(file.path())?.collect::<Result<Vec<_>>>()?;
        assert!(reads.is_empty());
        Ok(())
    }

    #[test]
    fn test_tiny_plain_file() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"A\n")?;
        file.flush()?;
        let mut text = String::new();
        open_input(file.path())?.read_to_string(&mut text)?;
        assert_eq!(text, "A\n");
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            open_input("/nonexistent/reads.fq"),
            Err(crate::Error::NifflerError(_) | crate::Error::IoError(_))
        ));
    }

    #[test]
    fn test_malformed_record() {
        let headless = "read1\nACGT\n+\nIIII\n";
        let mut reader = FastqReader::new(Cursor::new(headless));
        assert!(matches!(reader.next(), Some(Err(_))));
    }

    #[test]
    fn test_write_records() -> anyhow::Result<()> {
        let mut writer = FastqWriter::new(Vec::new());
        writer.write(&FastqRead::new("read1/1 extra", "ACGT", "IIII"))?;
        writer.write(&FastqRead::new("read2", "", ""))?;
        writer.write(&FastqRead::new("read3 sample=1", "A", "I"))?;
        assert_eq!(writer.records_written(), 3);
        let bytes = writer.into_inner()?;
        assert_eq!(
            String::from_utf8(bytes)?,
            "@read1\nACGT\n+\nIIII\n@read2\n\n+\n\n@read3\nA\n+\nI\n"
        );
        Ok(())
    }

    #[test]
    fn test_rewrite_preserves_records() -> anyhow::Result<()> {
        let mut writer = FastqWriter::new(Vec::new());
        for read in FastqReader::new(Cursor::new(FASTQ)) {
            writer.write(&read?)?;
        }
        let bytes = writer.into_inner()?;
        let reads = FastqReader::new(Cursor::new(bytes)).collect::<Result<Vec<_>>>()?;
        assert_eq!(reads[0].name(), "read1");
        assert_eq!(reads[1].seq(), b"TTTT");
        Ok(())
    }
}
