//! Strand-canonical minimizer fingerprints.
//!
//! Each window of a read is summarised by the smallest CRC-32 over the
//! canonical forms of its k-mers. CRC-32 is cheap and, unlike the default
//! `std` hasher, stable run-to-run and machine-to-machine, which downstream
//! exemplar selection requires for reproducibility.

use crate::params::MinimizerParams;
use bio::alphabets::dna;

/// Reserved hash for windows that are shorter than the k-mer length or
/// contain no k-mer free of `N`. CRC-32 values occupy the low 32 bits, so
/// this value can never collide with a real hash (asserted in tests).
pub const EMPTY_WINDOW_SENTINEL: u64 = u64::MAX;

/// Hashes the canonical form of a k-mer: the lexicographically smaller of
/// the k-mer and its reverse complement, so both strands of the same
/// fragment produce the same fingerprint.
fn hash_canonical_kmer(kmer: &[u8]) -> u64 {
    let rc = dna::revcomp(kmer);
    if rc.as_slice() < kmer {
        u64::from(crc32fast::hash(&rc))
    } else {
        u64::from(crc32fast::hash(kmer))
    }
}

/// Extracts the minimizer hash for one window of `seq`.
///
/// The window spans `[window_idx * window_len, window_idx * window_len +
/// window_len)`, clamped to the sequence. K-mers containing `N` are skipped.
/// Returns [`EMPTY_WINDOW_SENTINEL`] when no valid k-mer exists.
pub fn extract_minimizer(seq: &[u8], window_idx: usize, params: &MinimizerParams) -> u64 {
    let start = window_idx * params.window_len();
    let end = (start + params.window_len()).min(seq.len());

    if start >= seq.len() || end - start < params.kmer_len() {
        return EMPTY_WINDOW_SENTINEL;
    }

    let mut min_hash = EMPTY_WINDOW_SENTINEL;
    for kmer in seq[start..end].windows(params.kmer_len()) {
        if kmer.contains(&b'N') {
            continue;
        }
        let h = hash_canonical_kmer(kmer);
        if h < min_hash {
            min_hash = h;
        }
    }

    min_hash
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(num_windows: usize, window_len: usize, kmer_len: usize) -> MinimizerParams {
        MinimizerParams::new(num_windows, window_len, kmer_len).unwrap()
    }

    #[test]
    fn sentinel_cannot_collide_with_crc32() {
        assert!(EMPTY_WINDOW_SENTINEL > u64::from(u32::MAX));
    }

    #[test]
    fn extraction_is_deterministic_per_window() {
        let p = params(2, 20, 7);
        let seq = [b'A'; 20]
            .iter()
            .chain([b'C'; 20].iter())
            .cloned()
            .collect::<Vec<u8>>();

        assert_eq!(extract_minimizer(&seq, 0, &p), extract_minimizer(&seq, 0, &p));
        // Poly-A and poly-C windows fingerprint differently
        assert_ne!(extract_minimizer(&seq, 0, &p), extract_minimizer(&seq, 1, &p));
    }

    #[test]
    fn kmers_with_n_are_skipped() {
        let p = params(1, 10, 3);
        // Only the leading AAA avoids an N; every other k-mer is tainted
        let with_n = b"AAANGGNNNN";
        let clean = b"AAAAAAAAAA";
        assert_eq!(extract_minimizer(with_n, 0, &p), extract_minimizer(clean, 0, &p));
    }

    #[test]
    fn all_n_window_returns_sentinel() {
        let p = params(1, 10, 3);
        assert_eq!(extract_minimizer(b"NNNNNNNNNN", 0, &p), EMPTY_WINDOW_SENTINEL);
    }

    #[test]
    fn short_window_returns_sentinel() {
        let p = params(2, 10, 7);
        // Second window holds only 4 bases, too short for a 7-mer
        assert_eq!(extract_minimizer(b"ACGTACGTACGTAC", 1, &p), EMPTY_WINDOW_SENTINEL);
        // Window past the end of the sequence
        assert_eq!(extract_minimizer(b"ACGT", 1, &p), EMPTY_WINDOW_SENTINEL);
    }

    #[test]
    fn fingerprint_is_strand_canonical() {
        let p = params(1, 12, 5);
        let seq = b"ACGGTTCAGCAT";
        let rc = dna::revcomp(&seq[..]);
        assert_eq!(
            extract_minimizer(seq, 0, &p),
            extract_minimizer(&rc, 0, &p)
        );
    }

    #[test]
    fn minimizer_is_smallest_kmer_hash() {
        let p = params(1, 6, 3);
        let seq = b"ACGTGA";
        let mut expected = EMPTY_WINDOW_SENTINEL;
        for kmer in seq.windows(3) {
            let h = super::hash_canonical_kmer(kmer);
            if h < expected {
                expected = h;
            }
        }
        assert_eq!(extract_minimizer(seq, 0, &p), expected);
    }
}
