use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use log::{info, LevelFilter};

use amplifu::config::{self, LengthRange, PcrConfig};

/// amplifu CLI
#[derive(Parser, Debug)]
#[command(name = "amplifu")]
#[command(version)]
#[command(about = "In silico PCR: report amplicons flanked by a primer pair in FASTA/FASTA.GZ files", long_about = None)]
struct Cli {
    /// Input FASTA files (gzip supported)
    #[arg(required = true)]
    fasta_files: Vec<PathBuf>,

    /// Forward primer sequence (IUPAC)
    #[arg(short = 'f', long, default_value = config::DEFAULT_FWD_PRIMER)]
    fwd_primer: String,

    /// Reverse primer sequence (IUPAC)
    #[arg(short = 'r', long, default_value = config::DEFAULT_REV_PRIMER)]
    rev_primer: String,

    /// Minimum amplicon length (inclusive)
    #[arg(short = 'm', long, default_value_t = config::DEFAULT_MIN_LEN as i64, allow_negative_numbers = true)]
    min_len: i64,

    /// Maximum amplicon length (inclusive)
    #[arg(short = 'x', long, default_value_t = config::DEFAULT_MAX_LEN as i64, allow_negative_numbers = true)]
    max_len: i64,

    /// Output the sequence in the forward strand
    #[arg(short = 's', long)]
    forward_strand: bool,

    /// Print progress to stderr
    #[arg(long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Info } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "# [{}] {}", record.level(), record.args()))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = PcrConfig {
        forward_primer: cli.fwd_primer,
        reverse_primer: cli.rev_primer,
        range: LengthRange::new(cli.min_len, cli.max_len)?,
        forward_strand: cli.forward_strand,
    };
    info!(
        "amplifu {}: fwd={} rev={} len={}..={}",
        amplifu::VERSION,
        cfg.forward_primer,
        cfg.reverse_primer,
        cfg.range.min(),
        cfg.range.max()
    );

    let stdout = io::stdout();
    let out = io::BufWriter::new(stdout.lock());
    let summary = amplifu::run(&cfg, &cli.fasta_files, out).context("in silico PCR failed")?;

    info!(
        "{} files, {} sequences ({} skipped), {} amplicons",
        summary.files_processed, summary.sequences, summary.sequences_skipped, summary.amplicons
    );
    if summary.files_failed > 0 {
        bail!("{} of {} input files could not be processed", summary.files_failed, cli.fasta_files.len());
    }
    Ok(())
}
