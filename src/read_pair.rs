//! The read-pair entity fed to the engine.

/// A normalized paired-end read record.
///
/// Sequences are upper-cased on construction (`N` is permitted for ambiguous
/// bases). Quality strings are consumed to compute the mean Phred score once
/// and are not retained; for millions of reads the raw strings would dominate
/// memory while only the mean is ever used downstream.
#[derive(Debug, Clone)]
pub struct ReadPair {
    /// Read identifier, unique within one deduplication call
    pub read_id: String,
    /// Forward mate sequence, upper-cased
    pub fwd_seq: String,
    /// Reverse mate sequence, upper-cased
    pub rev_seq: String,
    mean_q: f64,
}

impl ReadPair {
    /// Creates a read pair, normalizing case and pre-computing the mean
    /// Phred+33 quality across both mates.
    pub fn new(read_id: &str, fwd_seq: &str, rev_seq: &str, fwd_qual: &str, rev_qual: &str) -> Self {
        let count = fwd_qual.len() + rev_qual.len();
        let mean_q = if count == 0 {
            0.0
        } else {
            let total: u64 = fwd_qual
                .bytes()
                .chain(rev_qual.bytes())
                .map(|b| u64::from(b.saturating_sub(33)))
                .sum();
            total as f64 / count as f64
        };

        Self {
            read_id: read_id.to_string(),
            fwd_seq: fwd_seq.to_ascii_uppercase(),
            rev_seq: rev_seq.to_ascii_uppercase(),
            mean_q,
        }
    }

    /// Mean Phred+33 quality over both mates, 0.0 for empty qualities
    pub fn mean_qual(&self) -> f64 {
        self.mean_q
    }

    /// Combined forward plus reverse sequence length
    pub fn total_len(&self) -> usize {
        self.fwd_seq.len() + self.rev_seq.len()
    }
}
