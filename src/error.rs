//! Crate-wide error type.
//!
//! Every fallible operation in the library returns [`Result`]. The variants map
//! onto the failure classes the driver treats differently: primer and
//! parameter errors are fatal before scanning starts, sequence errors skip one
//! FASTA entry, and file errors skip one input path.
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while running an in-silico PCR.
#[derive(Error, Debug)]
pub enum Error {
    /// The primer contains a character outside the 15-symbol IUPAC alphabet (or is empty).
    #[error("invalid {role} primer {primer:?}: {reason}")]
    InvalidPrimer {
        role: &'static str,
        primer: String,
        reason: String,
    },

    /// A FASTA entry contains a character that is not a nucleotide or ambiguity code.
    #[error("invalid sequence {name}: unexpected character {found:?} at position {position}")]
    InvalidSequence {
        name: String,
        /// 1-based position of the offending character.
        position: usize,
        found: char,
    },

    /// The input path could not be opened.
    #[error("cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The FASTA parser rejected the file contents.
    #[error("malformed FASTA in {}: {message}", path.display())]
    Fasta { path: PathBuf, message: String },

    #[error("{name} must not be negative (got {value})")]
    NegativeLength { name: &'static str, value: i64 },

    #[error("minimum length ({min}) cannot be greater than maximum length ({max})")]
    InvertedRange { min: i64, max: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("output error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
