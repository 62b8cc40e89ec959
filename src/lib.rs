#![forbid(unsafe_code)]
//! # amplifu
//!
//! In-silico PCR over FASTA files: find every region flanked by a forward
//! primer site and a reverse primer site on opposite strands, within a
//! length window, and report it as a tab-separated row.
//!
//! ## Highlights
//! - 🧬 **Degenerate primers**: all 15 IUPAC symbols, case-insensitive.
//! - 🔁 **Both strands**: each primer is searched on the plus strand and its reverse complement.
//! - 📦 **Gzip transparent**: `.fa` and `.fa.gz` give identical output.
//! - 🧭 **Deterministic**: files in argument order, records in file order, amplicons by position.
//!
//! ## Pipeline
//! FASTA record → [`strand::reverse_complement`] → [`scan::HitSet::collect`]
//! (four scans) → [`pair::pair_hits`] → [`emit::AmpliconRecord`] → [`emit::RecordWriter`].
//!
//! ## Examples
//! ```rust
//! use amplifu::{amplify_sequence, config::{LengthRange, PcrConfig}, seqio::SeqRecord};
//! let cfg = PcrConfig {
//!     forward_primer: "CAGATA".into(),
//!     reverse_primer: "CCAAACC".into(),
//!     range: LengthRange::new(10, 10_000).unwrap(),
//!     ..Default::default()
//! };
//! let primers = cfg.compile().unwrap();
//! let rec = SeqRecord {
//!     name: "Ampli1_10".into(),
//!     seq: b"NNNNNNNNNNNCAGATANNNNNNNNNNGGTTTGGNNNNNNNNNN".to_vec(),
//! };
//! let rows = amplify_sequence(&primers, &cfg, "test.fa", &rec).unwrap();
//! assert_eq!((rows[0].start, rows[0].end, rows[0].length), (17, 27, 10));
//! ```

pub mod config;
pub mod emit;
pub mod error;
pub mod iupac;
pub mod model;
pub mod pair;
pub mod scan;
pub mod seqio;
pub mod strand;

use std::io::Write;
use std::path::Path;

use log::{debug, info, warn};

use config::{PcrConfig, Primers};
use emit::{AmpliconRecord, RecordWriter};
use scan::HitSet;
use seqio::SeqRecord;

pub use error::{Error, Result};

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Find and format every accepted amplicon of one FASTA entry.
///
/// Fails with [`Error::InvalidSequence`] if the entry contains a non-IUPAC
/// character; in that case nothing is produced for it.
pub fn amplify_sequence(
    primers: &Primers,
    cfg: &PcrConfig,
    file_name: &str,
    rec: &SeqRecord,
) -> Result<Vec<AmpliconRecord>> {
    let minus = strand::reverse_complement(&rec.name, &rec.seq)?;
    let hits = HitSet::collect(primers, &rec.seq, &minus);
    let amplicons = pair::pair_hits(&hits, rec.seq.len(), cfg.range);
    debug!("{}: {} primer hits, {} amplicons", rec.name, hits.total(), amplicons.len());
    Ok(amplicons
        .iter()
        .map(|a| AmpliconRecord::new(file_name, &rec.name, &rec.seq, a, cfg.forward_strand))
        .collect())
}

/// Counters reported at the end of a [`run`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_processed: usize,
    pub files_failed: usize,
    pub sequences: usize,
    pub sequences_skipped: usize,
    pub amplicons: usize,
}

/// Basename of `path`, as shown in the FileName column.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Run the whole pipeline over `paths`, writing the table (header first) to `out`.
///
/// Invalid primers and parameters fail before anything is written. A record with
/// an invalid character is skipped with a warning; an unreadable or malformed
/// file is reported and the next file is processed. Errors writing `out` abort.
pub fn run<P, W>(cfg: &PcrConfig, paths: &[P], out: W) -> Result<RunSummary>
where
    P: AsRef<Path>,
    W: Write,
{
    let primers = cfg.compile()?;
    let mut writer = RecordWriter::new(out)?;
    let mut summary = RunSummary::default();

    for path in paths {
        let path = path.as_ref();
        let file_name = display_name(path);
        info!("Processing {}", path.display());

        let mut found = 0usize;
        let mut skipped = 0usize;
        let result = seqio::for_each_record(path, |rec| {
            match amplify_sequence(&primers, cfg, &file_name, &rec) {
                Ok(rows) => {
                    if !rows.is_empty() {
                        info!("Found {} amplicons for {}", rows.len(), rec.name);
                    }
                    for r in &rows {
                        writer.write(r)?;
                    }
                    found += rows.len();
                }
                Err(e @ Error::InvalidSequence { .. }) => {
                    warn!("skipping record in {}: {}", file_name, e);
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
            Ok(())
        });

        summary.amplicons += found;
        summary.sequences_skipped += skipped;
        match result {
            Ok(n) => {
                info!("{}: {} sequences, {} amplicons", file_name, n, found);
                summary.files_processed += 1;
                summary.sequences += n;
            }
            Err(e @ (Error::FileAccess { .. } | Error::Fasta { .. })) => {
                warn!("{}", e);
                summary.files_failed += 1;
            }
            Err(e) => return Err(e),
        }
    }

    writer.flush()?;
    Ok(summary)
}
