//! Immutable FASTQ reads
//!
//! Sequence edits never touch a read in place; every function here returns a
//! new [`FastqRead`] and keeps the quality string aligned with the sequence.

use std::ops::Range;

/// A single FASTQ record: name (without `@`), sequence, and quality string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRead {
    name: String,
    seq: Vec<u8>,
    qual: Vec<u8>,
}
impl FastqRead {
    pub fn new(name: impl Into<String>, seq: impl Into<Vec<u8>>, qual: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            seq: seq.into(),
            qual: qual.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// First word of the name, cut at any `/` mate suffix
    pub fn id(&self) -> &str {
        self.name
            .split(|c: char| c == '/' || c.is_whitespace())
            .next()
            .unwrap_or_default()
    }

    pub fn seq(&self) -> &[u8] {
        &self.seq
    }

    pub fn qual(&self) -> &[u8] {
        &self.qual
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    fn with_parts(&self, seq: Vec<u8>, qual: Vec<u8>) -> Self {
        Self {
            name: self.name.clone(),
            seq,
            qual,
        }
    }
}

/// Complement of a single base; `N` and unknown bytes are left alone
#[inline]
pub fn complement_base(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'C' => b'G',
        b'G' => b'C',
        b'T' => b'A',
        _ => base,
    }
}

/// Reverses sequence and qualities
pub fn reverse(read: &FastqRead) -> FastqRead {
    read.with_parts(
        read.seq.iter().rev().copied().collect(),
        read.qual.iter().rev().copied().collect(),
    )
}

/// Complements the sequence, leaving qualities in place
pub fn complement(read: &FastqRead) -> FastqRead {
    read.with_parts(
        read.seq.iter().map(|&b| complement_base(b)).collect(),
        read.qual.clone(),
    )
}

/// Reverse complement of the sequence with reversed qualities
pub fn reverse_complement(read: &FastqRead) -> FastqRead {
    read.with_parts(
        read.seq.iter().rev().map(|&b| complement_base(b)).collect(),
        read.qual.iter().rev().copied().collect(),
    )
}

/// Keeps the first `start` bases, trimming everything 3' of an adapter hit
pub fn trim3(read: &FastqRead, start: usize) -> FastqRead {
    trim53(read, 0..start)
}

/// Drops the first `end` bases, trimming everything 5' of an adapter hit
pub fn trim5(read: &FastqRead, end: usize) -> FastqRead {
    trim53(read, end..read.len())
}

/// Keeps the bases in `range`; bounds past the end of the read are clamped
pub fn trim53(read: &FastqRead, range: Range<usize>) -> FastqRead {
    let end = range.end.min(read.seq.len());
    let start = range.start.min(end);
    read.with_parts(
        read.seq[start..end].to_vec(),
        read.qual[start.min(read.qual.len())..end.min(read.qual.len())].to_vec(),
    )
}

/// Adds `seq` and `qual` in front of the read
pub fn prepend(read: &FastqRead, seq: &[u8], qual: &[u8]) -> FastqRead {
    read.with_parts(
        [seq, &read.seq].concat(),
        [qual, &read.qual].concat(),
    )
}

/// Overwrites the leading bases with `prefix`, keeping the qualities
///
/// A prefix longer than the read is cut to the read length.
pub fn replace_prefix(read: &FastqRead, prefix: &[u8]) -> FastqRead {
    let n = prefix.len().min(read.seq.len());
    let mut seq = read.seq.clone();
    seq[..n].copy_from_slice(&prefix[..n]);
    read.with_parts(seq, read.qual.clone())
}

#[cfg(test)]
mod testing {
    use super::*;

    fn read() -> FastqRead {
        FastqRead::new("read1/1", "ACGTN", "ABCDE")
    }

    #[test]
    fn test_accessors() {
        let read = read();
        assert_eq!(read.name(), "read1/1");
        assert_eq!(read.id(), "read1");
        assert_eq!(FastqRead::new("r1 desc", "", "").id(), "r1");
        assert_eq!(FastqRead::new("r1/1 desc", "", "").id(), "r1");
        assert_eq!(FastqRead::new("r1\tlane=2", "", "").id(), "r1");
        assert_eq!(read.len(), 5);
        assert!(!read.is_empty());
    }

    #[test]
    fn test_reverse_and_complement() {
        let read = read();
        assert_eq!(reverse(&read), FastqRead::new("read1/1", "NTGCA", "EDCBA"));
        assert_eq!(complement(&read), FastqRead::new("read1/1", "TGCAN", "ABCDE"));
        assert_eq!(
            reverse_complement(&read),
            FastqRead::new("read1/1", "NACGT", "EDCBA")
        );
        // the original is untouched
        assert_eq!(read.seq(), b"ACGTN");
    }

    #[test]
    fn test_trims() {
        let read = read();
        assert_eq!(trim3(&read, 2), FastqRead::new("read1/1", "AC", "AB"));
        assert_eq!(trim5(&read, 2), FastqRead::new("read1/1", "GTN", "CDE"));
        assert_eq!(trim53(&read, 1..4), FastqRead::new("read1/1", "CGT", "BCD"));
        assert_eq!(trim53(&read, 3..99), FastqRead::new("read1/1", "TN", "DE"));
        assert!(trim53(&read, 4..2).is_empty());
        assert!(trim5(&read, 10).is_empty());
    }

    #[test]
    fn test_prefix_edits() {
        let read = read();
        assert_eq!(
            prepend(&read, b"GG", b"HH"),
            FastqRead::new("read1/1", "GGACGTN", "HHABCDE")
        );
        assert_eq!(
            replace_prefix(&read, b"NNN"),
            FastqRead::new("read1/1", "NNNTN", "ABCDE")
        );
        assert_eq!(
            replace_prefix(&read, b"TTTTTTT"),
            FastqRead::new("read1/1", "TTTTT", "ABCDE")
        );
    }
}
