//! Record emitter: turn accepted amplicons into tab-separated rows.
//!
//! Columns, in order: `FileName SeqName StartPosition EndPosition FirstPrimer
//! SecondPrimer AmpliconLength AmpliconSequence`. Start/end are the insert
//! bounds as computed by [`crate::model::Amplicon`]; `end - start` always
//! equals the length column.
use std::io::Write;

use crate::error::{Error, Result};
use crate::model::{Amplicon, Orientation};

/// Header row of the output table.
pub const HEADER: [&str; 8] = [
    "FileName",
    "SeqName",
    "StartPosition",
    "EndPosition",
    "FirstPrimer",
    "SecondPrimer",
    "AmpliconLength",
    "AmpliconSequence",
];

/// One output row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AmpliconRecord {
    pub file_name: String,
    pub seq_name: String,
    pub start: usize,
    pub end: usize,
    pub first: Orientation,
    pub second: Orientation,
    pub length: usize,
    pub sequence: Vec<u8>,
}

impl AmpliconRecord {
    /// Extract the insert from `seq` (plus strand). With `forward_strand`, the
    /// `reverse_plus / forward_minus` case is reverse-complemented.
    pub fn new(file_name: &str, seq_name: &str, seq: &[u8], amp: &Amplicon, forward_strand: bool) -> Self {
        let slice = &seq[amp.insert()];
        let sequence = if forward_strand && amp.is_reverse_first() {
            bio::alphabets::dna::revcomp(slice)
        } else {
            slice.to_vec()
        };
        AmpliconRecord {
            file_name: file_name.to_string(),
            seq_name: seq_name.to_string(),
            start: amp.start(),
            end: amp.end(),
            first: amp.first.orientation,
            second: amp.second.orientation,
            length: amp.len(),
            sequence,
        }
    }
}

/// TSV writer; the header is written on construction.
pub struct RecordWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(out: W) -> Result<Self> {
        let mut inner = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Never)
            .terminator(csv::Terminator::Any(b'\n'))
            .has_headers(false)
            .from_writer(out);
        inner.write_record(HEADER)?;
        Ok(Self { inner })
    }

    pub fn write(&mut self, r: &AmpliconRecord) -> Result<()> {
        let start = r.start.to_string();
        let end = r.end.to_string();
        let length = r.length.to_string();
        self.inner.write_record([
            r.file_name.as_bytes(),
            r.seq_name.as_bytes(),
            start.as_bytes(),
            end.as_bytes(),
            r.first.as_str().as_bytes(),
            r.second.as_str().as_bytes(),
            length.as_bytes(),
            r.sequence.as_slice(),
        ])?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| Error::Io(std::io::Error::new(e.error().kind(), e.error().to_string())))
    }
}
