//! Subcommands of the `hamstring` binary
//!
//! - [`generate`] writes the table of all 256 barcodes
//! - [`check`] decodes a list of barcodes and reports each outcome
//! - [`scrub`] corrects the barcodes at the start of FASTQ reads
//! - [`tag`] prefixes FASTQ reads with simulated barcodes

pub mod check;
pub mod command;
pub mod generate;
pub mod scrub;
pub mod tag;

pub use check::Check;
pub use command::Command;
pub use generate::Generate;
pub use scrub::Scrub;
pub use tag::Tag;
