//! Primer scanner: exact-length, degenerate-aware sliding window.
//!
//! Every offset is tested and overlapping hits are all kept. A sequence is
//! scanned four times, {forward, reverse} × {plus, minus}, and the four
//! streams are collected into a [`HitSet`] for the pairer.
//!
//! # Examples
//! ```
//! use amplifu::iupac::PrimerPattern;
//! use amplifu::scan::find_iter;
//! let p = PrimerPattern::compile("forward", "AA").unwrap();
//! assert_eq!(find_iter(&p, b"AAAxAA").collect::<Vec<_>>(), vec![0, 1, 4]);
//! ```
use crate::config::Primers;
use crate::iupac::PrimerPattern;
use crate::model::{PrimerHit, PrimerRole, Strand};

/// Offsets `i` (0-based) at which `pattern` matches `text[i..i + pattern.len()]`.
pub fn find_iter<'a>(pattern: &'a PrimerPattern, text: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
    let n = pattern.len();
    let last = if n == 0 { None } else { text.len().checked_sub(n) };
    last.into_iter()
        .flat_map(|last| 0..=last)
        .filter(move |&i| pattern.matches(&text[i..i + n]))
}

/// Lazily scan one strand with one primer, tagging each hit.
pub fn scan<'a>(
    pattern: &'a PrimerPattern,
    role: PrimerRole,
    strand: Strand,
    text: &'a [u8],
) -> impl Iterator<Item = PrimerHit> + 'a {
    let len = pattern.len();
    find_iter(pattern, text).map(move |start| PrimerHit { role, strand, start, len })
}

/// The four hit streams of one sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HitSet {
    pub forward_plus: Vec<PrimerHit>,
    pub forward_minus: Vec<PrimerHit>,
    pub reverse_plus: Vec<PrimerHit>,
    pub reverse_minus: Vec<PrimerHit>,
}

impl HitSet {
    /// Run both primers over `plus` and its reverse complement `minus`.
    pub fn collect(primers: &Primers, plus: &[u8], minus: &[u8]) -> Self {
        use PrimerRole::{Forward, Reverse};
        use Strand::{Minus, Plus};
        HitSet {
            forward_plus: scan(&primers.forward, Forward, Plus, plus).collect(),
            forward_minus: scan(&primers.forward, Forward, Minus, minus).collect(),
            reverse_plus: scan(&primers.reverse, Reverse, Plus, plus).collect(),
            reverse_minus: scan(&primers.reverse, Reverse, Minus, minus).collect(),
        }
    }

    pub fn total(&self) -> usize {
        self.forward_plus.len() + self.forward_minus.len() + self.reverse_plus.len() + self.reverse_minus.len()
    }
}
