//! IUPAC degenerate-base handling and the primer **pattern compiler**.
//!
//! Each IUPAC symbol is stored as a 4-bit base mask (`A=1`, `C=2`, `G=4`,
//! `T=8`) looked up from a static 256-entry table, so testing a window is a
//! single `AND` per position. Degeneracy is honoured on the primer side only:
//! a genomic `N` (or any other ambiguity code, or a gap) never matches.
//!
//! # Examples
//! ```
//! use amplifu::iupac::PrimerPattern;
//! let p = PrimerPattern::compile("forward", "ACNT").unwrap();
//! assert!(p.matches(b"ACGT"));
//! assert!(p.matches(b"acct"));
//! assert!(!p.matches(b"ACNT"));
//! ```
use crate::error::{Error, Result};

/// The 15 symbols accepted in primers and sequences (upper case; lower case is also accepted).
pub const IUPAC_SYMBOLS: &[u8; 15] = b"ACGTRYSWKMBDHVN";

const A: u8 = 0b0001;
const C: u8 = 0b0010;
const G: u8 = 0b0100;
const T: u8 = 0b1000;

static MASKS: [u8; 256] = {
    let mut t = [0u8; 256];
    let table: [(u8, u8); 15] = [
        (b'A', A),
        (b'C', C),
        (b'G', G),
        (b'T', T),
        (b'R', A | G),
        (b'Y', C | T),
        (b'S', G | C),
        (b'W', A | T),
        (b'K', G | T),
        (b'M', A | C),
        (b'B', C | G | T),
        (b'D', A | G | T),
        (b'H', A | C | T),
        (b'V', A | C | G),
        (b'N', A | C | G | T),
    ];
    let mut i = 0;
    while i < table.len() {
        let (sym, mask) = table[i];
        t[sym as usize] = mask;
        t[sym.to_ascii_lowercase() as usize] = mask;
        i += 1;
    }
    t
};

/// Base set denoted by an IUPAC symbol, or `None` for anything outside the alphabet.
#[inline]
pub fn base_mask(symbol: u8) -> Option<u8> {
    match MASKS[symbol as usize] {
        0 => None,
        m => Some(m),
    }
}

/// `true` if `symbol` is one of the 15 IUPAC nucleotide symbols (either case).
#[inline]
pub fn is_iupac(symbol: u8) -> bool {
    MASKS[symbol as usize] != 0
}

/// Mask of a concrete genomic base; degenerate codes and gaps yield `0`.
#[inline]
fn concrete_mask(base: u8) -> u8 {
    match base {
        b'A' | b'a' => A,
        b'C' | b'c' => C,
        b'G' | b'g' => G,
        b'T' | b't' => T,
        _ => 0,
    }
}

/// Check that every character of `seq` belongs to the nucleotide/ambiguity alphabet.
pub fn validate_sequence(name: &str, seq: &[u8]) -> Result<()> {
    match seq.iter().position(|&b| !is_iupac(b)) {
        None => Ok(()),
        Some(i) => Err(Error::InvalidSequence {
            name: name.to_string(),
            position: i + 1,
            found: seq[i] as char,
        }),
    }
}

/// A compiled primer: one base mask per position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimerPattern {
    text: String,
    masks: Vec<u8>,
}

impl PrimerPattern {
    /// Compile `primer` into a matcher. `role` only labels the error message.
    pub fn compile(role: &'static str, primer: &str) -> Result<Self> {
        if primer.is_empty() {
            return Err(Error::InvalidPrimer {
                role,
                primer: primer.to_string(),
                reason: "primer is empty".to_string(),
            });
        }
        let mut masks = Vec::with_capacity(primer.len());
        for (i, c) in primer.chars().enumerate() {
            let mask = u8::try_from(c).ok().and_then(base_mask).ok_or_else(|| Error::InvalidPrimer {
                role,
                primer: primer.to_string(),
                reason: format!("character {:?} at position {} is not an IUPAC symbol", c, i + 1),
            })?;
            masks.push(mask);
        }
        Ok(Self { text: primer.to_ascii_uppercase(), masks })
    }

    /// Primer length in bases.
    #[inline]
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    /// Upper-cased primer text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// `true` iff `window` has the primer's length and each base is allowed by the
    /// corresponding primer symbol.
    #[inline]
    pub fn matches(&self, window: &[u8]) -> bool {
        window.len() == self.masks.len()
            && window
                .iter()
                .zip(&self.masks)
                .all(|(&b, &m)| concrete_mask(b) & m != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: [(u8, &[u8]); 15] = [
        (b'A', b"A"),
        (b'C', b"C"),
        (b'G', b"G"),
        (b'T', b"T"),
        (b'R', b"AG"),
        (b'Y', b"CT"),
        (b'S', b"CG"),
        (b'W', b"AT"),
        (b'K', b"GT"),
        (b'M', b"AC"),
        (b'B', b"CGT"),
        (b'D', b"AGT"),
        (b'H', b"ACT"),
        (b'V', b"ACG"),
        (b'N', b"ACGT"),
    ];

    #[test]
    fn every_symbol_accepts_exactly_its_base_set() {
        for (sym, allowed) in EXPECTED {
            for case in [sym, sym.to_ascii_lowercase()] {
                let p = PrimerPattern::compile("forward", &(case as char).to_string()).unwrap();
                for base in *b"ACGTacgt" {
                    let want = allowed.contains(&base.to_ascii_uppercase());
                    assert_eq!(p.matches(&[base]), want, "symbol {} vs base {}", case as char, base as char);
                }
            }
        }
    }

    #[test]
    fn n_does_not_match_gap_or_degenerate_template() {
        let p = PrimerPattern::compile("forward", "N").unwrap();
        assert!(!p.matches(b"-"));
        assert!(!p.matches(b"."));
        assert!(!p.matches(b"N"));
        assert!(!p.matches(b"R"));
    }

    #[test]
    fn window_length_must_equal_primer_length() {
        let p = PrimerPattern::compile("forward", "ACG").unwrap();
        assert!(!p.matches(b"AC"));
        assert!(!p.matches(b"ACGT"));
        assert!(p.matches(b"ACG"));
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        for bad in ["ACGU", "AC-T", "ACXT", "ACGT ", "ACGTé"] {
            match PrimerPattern::compile("reverse", bad) {
                Err(Error::InvalidPrimer { role, .. }) => assert_eq!(role, "reverse"),
                other => panic!("expected InvalidPrimer for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_empty_primer() {
        assert!(matches!(PrimerPattern::compile("forward", ""), Err(Error::InvalidPrimer { .. })));
    }

    #[test]
    fn compiled_text_is_uppercased() {
        let p = PrimerPattern::compile("forward", "cctacgggnggcwgcag").unwrap();
        assert_eq!(p.as_str(), "CCTACGGGNGGCWGCAG");
        assert_eq!(p.len(), 17);
    }

    #[test]
    fn validate_sequence_reports_first_bad_position() {
        assert!(validate_sequence("ok", b"ACGTNacgtnRYSWKMBDHV").is_ok());
        match validate_sequence("bad", b"ACG-T") {
            Err(Error::InvalidSequence { position, found, .. }) => {
                assert_eq!(position, 4);
                assert_eq!(found, '-');
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn alphabet_constant_agrees_with_table() {
        assert!(IUPAC_SYMBOLS.iter().all(|&s| is_iupac(s) && is_iupac(s.to_ascii_lowercase())));
        assert_eq!((0u8..=255).filter(|&b| is_iupac(b)).count(), 30);
    }
}
