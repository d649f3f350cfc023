//! Candidate-duplicate bucket assignment.
//!
//! A read pair is registered under every `(fwd_hash, rev_hash)` cross pair of
//! its per-window minimizers. Duplicate read pairs share most of their
//! sequence, so even with a few windows corrupted by sequencing error they
//! collide in at least one bucket with high probability, which bounds the
//! candidate search far below all-pairs.

use crate::minimizer::extract_minimizer;
use crate::params::{MinimizerParams, Orientation};
use crate::read_pair::ReadPair;
use std::collections::{HashMap, HashSet};

/// Bucket key: minimizer hash of a forward window paired with one of a
/// reverse window.
pub type BucketKey = (u64, u64);

/// Per-key lists of read indices, transient between assignment and graph
/// construction.
pub type Buckets = HashMap<BucketKey, Vec<usize>>;

/// Computes the set of bucket keys for one read pair: all
/// `num_windows * num_windows` cross pairs, plus the swapped keys in
/// tolerant orientation so mate-swapped duplicates still collide.
pub fn bucket_keys(
    read_pair: &ReadPair,
    params: &MinimizerParams,
    orientation: Orientation,
) -> HashSet<BucketKey> {
    let fwd = read_pair.fwd_seq.as_bytes();
    let rev = read_pair.rev_seq.as_bytes();

    let fwd_hashes: Vec<u64> = (0..params.num_windows())
        .map(|i| extract_minimizer(fwd, i, params))
        .collect();
    let rev_hashes: Vec<u64> = (0..params.num_windows())
        .map(|i| extract_minimizer(rev, i, params))
        .collect();

    let mut keys = HashSet::with_capacity(fwd_hashes.len() * rev_hashes.len() * 2);
    for &fh in &fwd_hashes {
        for &rh in &rev_hashes {
            keys.insert((fh, rh));
            if orientation == Orientation::Tolerant {
                keys.insert((rh, fh));
            }
        }
    }

    keys
}

/// Registers an already-indexed read pair into the bucket map.
pub fn register(
    buckets: &mut Buckets,
    idx: usize,
    read_pair: &ReadPair,
    params: &MinimizerParams,
    orientation: Orientation,
) {
    for key in bucket_keys(read_pair, params, orientation) {
        buckets.entry(key).or_insert_with(Vec::new).push(idx);
    }
}
