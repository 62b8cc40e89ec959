//! Sequence IO for **FASTA / FASTA.GZ** input.
//!
//! ### Design
//! - Parsing is done by `needletail`, which sniffs the first bytes of the
//!   stream and decompresses gzip transparently; the file extension is not
//!   consulted.
//! - Records are handed to the callback one at a time, in file order. Nothing
//!   is retained between records.
//! - FASTQ input parses too and is handled identically (qualities are ignored).
//!
//! ### Errors
//! - [`Error::FileAccess`] when the path cannot be opened.
//! - [`Error::Fasta`] when the parser rejects the content. Records before the
//!   bad one have already been delivered.
//! - Any error returned by the callback stops iteration and is passed through.
//!
//! ### Example
//! ```no_run
//! use amplifu::seqio;
//! let n = seqio::for_each_record("genomes.fa.gz", |rec| {
//!     println!("{} {}", rec.name, rec.seq.len());
//!     Ok(())
//! }).unwrap();
//! println!("read {n} records");
//! ```
use std::fs::File;
use std::path::Path;

use needletail::errors::ParseErrorKind;
use needletail::parse_fastx_reader;

use crate::error::{Error, Result};

/// A FASTA entry: name (first word of the header) and sequence with line breaks removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub name: String,
    pub seq: Vec<u8>,
}

/// First whitespace-delimited token of a header line.
fn header_name(id: &[u8]) -> String {
    let id = String::from_utf8_lossy(id);
    id.split_whitespace().next().unwrap_or("").to_string()
}

/// Iterate the records of `path`, invoking `on_record` for each. Returns the record count.
pub fn for_each_record<P, F>(path: P, mut on_record: F) -> Result<usize>
where
    P: AsRef<Path>,
    F: FnMut(SeqRecord) -> Result<()>,
{
    let p = path.as_ref();
    let file = File::open(p).map_err(|source| Error::FileAccess { path: p.to_path_buf(), source })?;
    let fasta_err = |e: needletail::errors::ParseError| Error::Fasta { path: p.to_path_buf(), message: e.to_string() };

    let mut reader = match parse_fastx_reader(file) {
        Ok(r) => r,
        Err(e) if matches!(e.kind, ParseErrorKind::EmptyFile) => return Ok(0),
        Err(e) => return Err(fasta_err(e)),
    };

    let mut n = 0usize;
    while let Some(record) = reader.next() {
        let rec = record.map_err(fasta_err)?;
        let name = header_name(rec.id());
        let seq = rec.seq().to_vec();
        on_record(SeqRecord { name, seq })?;
        n += 1;
    }
    Ok(n)
}
