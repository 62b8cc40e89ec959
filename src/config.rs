//! Run configuration.
//!
//! The CLI maps its flags onto a [`PcrConfig`]; the library never reads
//! global state, so tests build configurations directly.
use crate::error::{Error, Result};
use crate::iupac::PrimerPattern;

/// Default forward primer (16S V3-V4, 341F).
pub const DEFAULT_FWD_PRIMER: &str = "CCTACGGGNGGCWGCAG";
/// Default reverse primer (16S V3-V4, 805R).
pub const DEFAULT_REV_PRIMER: &str = "GGACTACHVGGGTATCTAATCC";
pub const DEFAULT_MIN_LEN: usize = 100;
pub const DEFAULT_MAX_LEN: usize = 10_000;

/// Inclusive amplicon length bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

impl LengthRange {
    /// Build a range from user-supplied bounds, rejecting negatives and `min > max`.
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if min < 0 {
            return Err(Error::NegativeLength { name: "min-len", value: min });
        }
        if max < 0 {
            return Err(Error::NegativeLength { name: "max-len", value: max });
        }
        if min > max {
            return Err(Error::InvertedRange { min, max });
        }
        Ok(Self { min: min as usize, max: max as usize })
    }

    pub fn min(&self) -> usize { self.min }
    pub fn max(&self) -> usize { self.max }

    #[inline]
    pub fn contains(&self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }
}

impl Default for LengthRange {
    fn default() -> Self { Self { min: DEFAULT_MIN_LEN, max: DEFAULT_MAX_LEN } }
}

/// Everything the scanner, pairer and emitter need for one run.
#[derive(Clone, Debug)]
pub struct PcrConfig {
    pub forward_primer: String,
    pub reverse_primer: String,
    pub range: LengthRange,
    /// Reverse-complement `reverse_plus / forward_minus` amplicons on output.
    pub forward_strand: bool,
}

impl Default for PcrConfig {
    fn default() -> Self {
        Self {
            forward_primer: DEFAULT_FWD_PRIMER.to_string(),
            reverse_primer: DEFAULT_REV_PRIMER.to_string(),
            range: LengthRange::default(),
            forward_strand: false,
        }
    }
}

impl PcrConfig {
    /// Compile both primers; an invalid primer is fatal for the whole run.
    pub fn compile(&self) -> Result<Primers> {
        Ok(Primers {
            forward: PrimerPattern::compile("forward", &self.forward_primer)?,
            reverse: PrimerPattern::compile("reverse", &self.reverse_primer)?,
        })
    }
}

/// Compiled primer pair.
#[derive(Clone, Debug)]
pub struct Primers {
    pub forward: PrimerPattern,
    pub reverse: PrimerPattern,
}
