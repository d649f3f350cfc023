//! Bounded-offset equivalence testing between sequences and read pairs.
//!
//! Deliberately not an alignment: duplicates of the same fragment differ only
//! by small positional shifts and sequencing errors, so testing a fixed band
//! of offsets with a Hamming count is sufficient and far cheaper than dynamic
//! programming.

use crate::params::{DedupParams, Orientation};
use crate::read_pair::ReadPair;

/// Hamming mismatches over the overlap of the two slices (shorter length).
fn mismatch_count(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count()
}

/// Tests one direction of shift: `a` advanced by `shift` bases against `b`.
/// Each base of shift is charged as one mismatch.
fn shifted_match(a: &[u8], b: &[u8], shift: usize, max_error_frac: f64) -> bool {
    if shift >= a.len() {
        return false;
    }
    let overlap = (a.len() - shift).min(b.len());
    if overlap == 0 {
        return false;
    }
    let mismatches = mismatch_count(&a[shift..], b);
    (shift + mismatches) as f64 <= max_error_frac * overlap as f64
}

/// True iff some offset in `[-max_offset, max_offset]` aligns `a` against `b`
/// with `|offset| + mismatches <= max_error_frac * overlap`. Offsets yielding
/// no overlap are skipped.
pub fn sequences_match(a: &[u8], b: &[u8], params: &DedupParams) -> bool {
    for offset in 0..=params.max_offset() {
        if shifted_match(a, b, offset, params.max_error_frac()) {
            return true;
        }
        // Negative offsets shift b instead; offset 0 needs only one test
        if offset > 0 && shifted_match(b, a, offset, params.max_error_frac()) {
            return true;
        }
    }
    false
}

/// Tests whether two read pairs are duplicates of each other.
///
/// Standard orientation requires fwd1/fwd2 and rev1/rev2 to match. Tolerant
/// orientation additionally accepts the mates captured in swapped order
/// (fwd1/rev2 and rev1/fwd2); strict never tests the swap.
pub fn read_pairs_equivalent(rp1: &ReadPair, rp2: &ReadPair, params: &DedupParams) -> bool {
    let fwd1 = rp1.fwd_seq.as_bytes();
    let rev1 = rp1.rev_seq.as_bytes();
    let fwd2 = rp2.fwd_seq.as_bytes();
    let rev2 = rp2.rev_seq.as_bytes();

    if sequences_match(fwd1, fwd2, params) && sequences_match(rev1, rev2, params) {
        return true;
    }

    if params.orientation() == Orientation::Tolerant
        && sequences_match(fwd1, rev2, params)
        && sequences_match(rev1, fwd2, params)
    {
        return true;
    }

    false
}
