//! Core types for **primers**, **strands**, **hits** and **amplicons**.
//!
//! Hits carry strand-local offsets exactly as the scanner found them; the
//! conversion into plus-strand coordinates happens once, when the pairer
//! builds an [`Amplicon`]. Everything downstream of the pairer works in plus
//! coordinates only.
use core::fmt;
use core::ops::Range;

/// Which primer of the pair produced a hit.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PrimerRole {
    Forward,
    Reverse,
}

impl PrimerRole {
    pub fn as_str(self) -> &'static str {
        match self {
            PrimerRole::Forward => "forward",
            PrimerRole::Reverse => "reverse",
        }
    }
}

/// Strand a hit was found on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Strand {
    /// The sequence as given in the input.
    Plus,
    /// The reverse complement of the input.
    Minus,
}

impl Strand {
    pub fn as_str(self) -> &'static str {
        match self {
            Strand::Plus => "plus",
            Strand::Minus => "minus",
        }
    }
}

/// Output label of one primer site: role and strand joined, e.g. `forward_plus`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Orientation {
    ForwardPlus,
    ReverseMinus,
    ReversePlus,
    ForwardMinus,
}

impl Orientation {
    pub fn of(role: PrimerRole, strand: Strand) -> Self {
        match (role, strand) {
            (PrimerRole::Forward, Strand::Plus) => Orientation::ForwardPlus,
            (PrimerRole::Reverse, Strand::Minus) => Orientation::ReverseMinus,
            (PrimerRole::Reverse, Strand::Plus) => Orientation::ReversePlus,
            (PrimerRole::Forward, Strand::Minus) => Orientation::ForwardMinus,
        }
    }

    /// Stable label written to the output table.
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::ForwardPlus => "forward_plus",
            Orientation::ReverseMinus => "reverse_minus",
            Orientation::ReversePlus => "reverse_plus",
            Orientation::ForwardMinus => "forward_minus",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// A match of one primer on one strand. `start` is 0-based on *that* strand.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PrimerHit {
    pub role: PrimerRole,
    pub strand: Strand,
    pub start: usize,
    /// Always the primer's length.
    pub len: usize,
}

impl PrimerHit {
    /// Half-open span of the hit in plus-strand coordinates, for a sequence of `seq_len` bases.
    pub fn plus_span(&self, seq_len: usize) -> Range<usize> {
        match self.strand {
            Strand::Plus => self.start..self.start + self.len,
            Strand::Minus => {
                let start = seq_len - self.start - self.len;
                start..start + self.len
            }
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.role, self.strand)
    }
}

/// A primer site projected onto the plus strand.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Site {
    pub orientation: Orientation,
    pub start: usize,
    pub end: usize,
}

/// Two compatible primer sites: `first` is the 5′-most on the plus strand.
///
/// The reported region is the insert between the sites, i.e.
/// `first.end..second.start`; [`Amplicon::outer`] gives the primer-inclusive span.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Amplicon {
    pub first: Site,
    pub second: Site,
}

impl Amplicon {
    /// 0-based start of the insert (first base after the first primer).
    pub fn start(&self) -> usize { self.first.end }

    /// Exclusive end of the insert (first base of the second primer).
    pub fn end(&self) -> usize { self.second.start }

    /// Insert length; this is the value the length filter applies to.
    pub fn len(&self) -> usize { self.end() - self.start() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn insert(&self) -> Range<usize> { self.start()..self.end() }

    /// Span from the start of the first primer to the end of the second one.
    pub fn outer(&self) -> Range<usize> { self.first.start..self.second.end }

    /// `true` for the `reverse_plus / forward_minus` pairing.
    pub fn is_reverse_first(&self) -> bool {
        self.first.orientation == Orientation::ReversePlus
    }
}
