//! Strand generator: the minus strand is the reverse complement of the plus strand.
//!
//! Complementation is delegated to [`bio::alphabets::dna::revcomp`], which covers
//! the full ambiguity alphabet (R↔Y, K↔M, B↔V, D↔H; S, W and N map to
//! themselves) and keeps each character's case at its mirrored position.
use crate::error::Result;
use crate::iupac::validate_sequence;

/// Reverse-complement `seq` after checking its alphabet.
///
/// `name` is only used to label an [`crate::Error::InvalidSequence`].
///
/// # Examples
/// ```
/// let rc = amplifu::strand::reverse_complement("s", b"AAcgRN").unwrap();
/// assert_eq!(rc, b"NYcgTT");
/// ```
pub fn reverse_complement(name: &str, seq: &[u8]) -> Result<Vec<u8>> {
    validate_sequence(name, seq)?;
    Ok(bio::alphabets::dna::revcomp(seq))
}
