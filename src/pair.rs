//! Amplicon pairer.
//!
//! Two pairings produce an amplicon:
//! - `forward_plus` followed downstream by `reverse_minus`;
//! - `reverse_plus` followed downstream by `forward_minus`.
//!
//! Every combination of the two relevant hit streams is tried, so repeated
//! primer sites yield nested or overlapping amplicons. Nothing is
//! deduplicated.
use crate::config::LengthRange;
use crate::model::{Amplicon, PrimerHit, Site};
use crate::scan::HitSet;

fn site(hit: &PrimerHit, seq_len: usize) -> Site {
    let span = hit.plus_span(seq_len);
    Site { orientation: hit.orientation(), start: span.start, end: span.end }
}

fn pair_streams(
    firsts: &[PrimerHit],
    seconds: &[PrimerHit],
    seq_len: usize,
    range: LengthRange,
    out: &mut Vec<Amplicon>,
) {
    for a in firsts {
        let first = site(a, seq_len);
        for b in seconds {
            let second = site(b, seq_len);
            // Primer sites must not overlap or abut.
            if first.end >= second.start { continue; }
            let amp = Amplicon { first, second };
            if range.contains(amp.len()) {
                out.push(amp);
            }
        }
    }
}

/// All length-accepted amplicons of one sequence of `seq_len` bases.
///
/// Results are ordered by first-primer start then second-primer start; on
/// ties the `forward_plus` pairing comes first.
///
/// # Examples
/// ```
/// use amplifu::config::{LengthRange, PcrConfig};
/// use amplifu::pair::pair_hits;
/// use amplifu::scan::HitSet;
/// use amplifu::strand::reverse_complement;
///
/// let cfg = PcrConfig { forward_primer: "CAGATA".into(), reverse_primer: "CCAAACC".into(), ..Default::default() };
/// let primers = cfg.compile().unwrap();
/// let plus = b"CAGATAAAAAAGGTTTGG";
/// let minus = reverse_complement("demo", plus).unwrap();
/// let hits = HitSet::collect(&primers, plus, &minus);
/// let amps = pair_hits(&hits, plus.len(), LengthRange::new(1, 100).unwrap());
/// assert_eq!(amps.len(), 1);
/// assert_eq!(amps[0].insert(), 6..11);
/// ```
pub fn pair_hits(hits: &HitSet, seq_len: usize, range: LengthRange) -> Vec<Amplicon> {
    let mut out = Vec::new();
    pair_streams(&hits.forward_plus, &hits.reverse_minus, seq_len, range, &mut out);
    pair_streams(&hits.reverse_plus, &hits.forward_minus, seq_len, range, &mut out);
    out.sort_by_key(|a| (a.first.start, a.second.start));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Orientation, PrimerRole, Strand};

    fn hit(role: PrimerRole, strand: Strand, start: usize, len: usize) -> PrimerHit {
        PrimerHit { role, strand, start, len }
    }

    #[test]
    fn pairs_forward_plus_with_reverse_minus() {
        // 44 bp: fwd (6) at 11, rev site (7) at 27 on plus == offset 10 on minus.
        let hits = HitSet {
            forward_plus: vec![hit(PrimerRole::Forward, Strand::Plus, 11, 6)],
            reverse_minus: vec![hit(PrimerRole::Reverse, Strand::Minus, 10, 7)],
            ..HitSet::default()
        };
        let amps = pair_hits(&hits, 44, LengthRange::new(10, 10_000).unwrap());
        assert_eq!(amps.len(), 1);
        let a = amps[0];
        assert_eq!((a.start(), a.end(), a.len()), (17, 27, 10));
        assert_eq!(a.first.orientation, Orientation::ForwardPlus);
        assert_eq!(a.second.orientation, Orientation::ReverseMinus);
        assert_eq!(a.outer(), 11..34);
    }

    #[test]
    fn pairs_reverse_plus_with_forward_minus() {
        // 48 bp: rev (7) at 15, fwd site (6) at 32 on plus == offset 10 on minus.
        let hits = HitSet {
            reverse_plus: vec![hit(PrimerRole::Reverse, Strand::Plus, 15, 7)],
            forward_minus: vec![hit(PrimerRole::Forward, Strand::Minus, 10, 6)],
            ..HitSet::default()
        };
        let amps = pair_hits(&hits, 48, LengthRange::new(10, 10_000).unwrap());
        assert_eq!(amps.len(), 1);
        assert_eq!((amps[0].start(), amps[0].end(), amps[0].len()), (22, 32, 10));
        assert!(amps[0].is_reverse_first());
    }

    #[test]
    fn upstream_or_overlapping_partners_are_not_paired() {
        // reverse site entirely upstream of the forward primer
        let hits = HitSet {
            forward_plus: vec![hit(PrimerRole::Forward, Strand::Plus, 30, 6)],
            reverse_minus: vec![hit(PrimerRole::Reverse, Strand::Minus, 30, 7)],
            ..HitSet::default()
        };
        assert!(pair_hits(&hits, 50, LengthRange::new(0, 100).unwrap()).is_empty());
        // abutting sites leave an empty insert
        let hits = HitSet {
            forward_plus: vec![hit(PrimerRole::Forward, Strand::Plus, 0, 6)],
            reverse_minus: vec![hit(PrimerRole::Reverse, Strand::Minus, 0, 7)],
            ..HitSet::default()
        };
        assert!(pair_hits(&hits, 13, LengthRange::new(0, 100).unwrap()).is_empty());
    }

    #[test]
    fn every_combination_is_kept_and_sorted() {
        // two forward sites, two reverse sites -> four nested/overlapping amplicons
        let hits = HitSet {
            forward_plus: vec![
                hit(PrimerRole::Forward, Strand::Plus, 20, 5),
                hit(PrimerRole::Forward, Strand::Plus, 0, 5),
            ],
            reverse_minus: vec![
                hit(PrimerRole::Reverse, Strand::Minus, 0, 5),  // plus 95..100
                hit(PrimerRole::Reverse, Strand::Minus, 40, 5), // plus 55..60
            ],
            ..HitSet::default()
        };
        let amps = pair_hits(&hits, 100, LengthRange::new(0, 1000).unwrap());
        let spans: Vec<_> = amps.iter().map(|a| (a.start(), a.end())).collect();
        assert_eq!(spans, vec![(5, 55), (5, 95), (25, 55), (25, 95)]);
    }

    #[test]
    fn length_filter_is_inclusive_and_drops_the_rest() {
        let hits = HitSet {
            forward_plus: vec![
                hit(PrimerRole::Forward, Strand::Plus, 0, 5),
                hit(PrimerRole::Forward, Strand::Plus, 1, 5),
                hit(PrimerRole::Forward, Strand::Plus, 2, 5),
            ],
            reverse_minus: vec![hit(PrimerRole::Reverse, Strand::Minus, 0, 5)], // plus 25..30
            ..HitSet::default()
        };
        // inserts: 5..25 (20), 6..25 (19), 7..25 (18)
        let amps = pair_hits(&hits, 30, LengthRange::new(19, 19).unwrap());
        assert_eq!(amps.len(), 1);
        assert_eq!(amps[0].len(), 19);
        for (min, max) in [(0, 17), (18, 20), (20, 1000), (21, 1000)] {
            let r = LengthRange::new(min, max).unwrap();
            assert!(pair_hits(&hits, 30, r).iter().all(|a| r.contains(a.len())));
        }
        assert_eq!(pair_hits(&hits, 30, LengthRange::new(18, 20).unwrap()).len(), 3);
        assert!(pair_hits(&hits, 30, LengthRange::new(21, 1000).unwrap()).is_empty());
    }

    #[test]
    fn cross_orientation_hits_are_never_paired() {
        let hits = HitSet {
            forward_plus: vec![hit(PrimerRole::Forward, Strand::Plus, 0, 5)],
            forward_minus: vec![hit(PrimerRole::Forward, Strand::Minus, 0, 5)],
            ..HitSet::default()
        };
        assert!(pair_hits(&hits, 50, LengthRange::new(0, 100).unwrap()).is_empty());
    }
}
