//! Batch and streaming deduplication orchestrators.

use crate::bucket::{register, Buckets};
use crate::cluster::{connected_components, select_exemplar};
use crate::graph::build_graph;
use crate::params::{DedupParams, MinimizerParams};
use crate::read_pair::ReadPair;
use log::info;
use std::collections::HashMap;

/// Diagnostic counters for one deduplication call, returned with the result
/// rather than written to any ambient state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DedupSummary {
    /// Reads consumed
    pub n_reads: usize,
    /// Distinct bucket keys registered
    pub n_buckets: usize,
    /// Distinct pairwise equivalence tests performed
    pub n_comparisons: usize,
    /// Equivalence edges found
    pub n_edges: usize,
    /// Connected components (duplicate clusters plus singletons)
    pub n_components: usize,
}

/// Outcome of one deduplication call.
#[derive(Debug, Clone)]
pub struct DedupResult {
    /// Maps every input read id to its exemplar id; a read that is not a
    /// duplicate of anything maps to its own id.
    pub exemplars: HashMap<String, String>,
    /// Diagnostic counters
    pub summary: DedupSummary,
}

/// Incremental deduplication engine: feed reads with [`push`], then call
/// [`finish`] once the source is exhausted. Both orchestrator functions are
/// thin wrappers over this type, which is what guarantees they produce
/// identical mappings for the same logical input.
///
/// [`push`]: Deduplicator::push
/// [`finish`]: Deduplicator::finish
#[derive(Debug)]
pub struct Deduplicator {
    dedup_params: DedupParams,
    minimizer_params: MinimizerParams,
    read_pairs: Vec<ReadPair>,
    buckets: Buckets,
}

impl Deduplicator {
    /// Creates an empty engine for the given parameters.
    pub fn new(dedup_params: DedupParams, minimizer_params: MinimizerParams) -> Self {
        Self {
            dedup_params,
            minimizer_params,
            read_pairs: Vec::new(),
            buckets: Buckets::new(),
        }
    }

    /// Consumes one read pair, registering it into its candidate buckets.
    pub fn push(&mut self, read_pair: ReadPair) {
        let idx = self.read_pairs.len();
        register(
            &mut self.buckets,
            idx,
            &read_pair,
            &self.minimizer_params,
            self.dedup_params.orientation(),
        );
        self.read_pairs.push(read_pair);
    }

    /// Builds the equivalence graph, clusters it, and selects exemplars.
    ///
    /// The bucket index is dropped as soon as the graph is built; it is the
    /// largest transient structure and is not needed during clustering.
    pub fn finish(self) -> DedupResult {
        let Deduplicator {
            dedup_params,
            read_pairs,
            buckets,
            ..
        } = self;

        if read_pairs.is_empty() {
            return DedupResult {
                exemplars: HashMap::new(),
                summary: DedupSummary::default(),
            };
        }

        let n_buckets = buckets.len();
        let (graph, n_comparisons) = build_graph(&read_pairs, &buckets, &dedup_params);
        drop(buckets);

        let components = connected_components(&graph);
        let mut exemplars = HashMap::with_capacity(read_pairs.len());
        for component in &components {
            let exemplar_idx = select_exemplar(component, &graph, &read_pairs);
            let exemplar_id = &read_pairs[exemplar_idx].read_id;
            for &idx in component {
                exemplars.insert(read_pairs[idx].read_id.clone(), exemplar_id.clone());
            }
        }

        let summary = DedupSummary {
            n_reads: read_pairs.len(),
            n_buckets,
            n_comparisons,
            n_edges: graph.n_edges(),
            n_components: components.len(),
        };
        info!(
            "deduplication: {} reads, {} buckets, {} comparisons, {} edges, {} components",
            summary.n_reads,
            summary.n_buckets,
            summary.n_comparisons,
            summary.n_edges,
            summary.n_components
        );

        DedupResult { exemplars, summary }
    }
}

/// Deduplicates a finite, in-memory list of read pairs.
///
/// Every input read id appears exactly once as a key of the returned map;
/// its value is either its own id or the id of the chosen cluster exemplar.
///
/// # Example
///
/// ```
/// use simdup::{deduplicate_read_pairs, DedupParams, MinimizerParams, ReadPair};
///
/// // Production-scale geometry: 4 windows, 15-mers
/// let minimizer_params = MinimizerParams::new(4, 25, 15).unwrap();
/// let reads = vec![
///     ReadPair::new("r1", "ACGTACGTACGTACGTACGTACGTACGT", "TTGGCCAATTGGCCAATTGGCCAATTGG", "", ""),
///     ReadPair::new("r2", "ACGTACGTACGTACGTACGTACGTACGT", "TTGGCCAATTGGCCAATTGGCCAATTGG", "", ""),
/// ];
/// let result = deduplicate_read_pairs(reads, &DedupParams::default(), &minimizer_params);
/// assert_eq!(result.exemplars["r1"], result.exemplars["r2"]);
/// ```
pub fn deduplicate_read_pairs(
    read_pairs: Vec<ReadPair>,
    dedup_params: &DedupParams,
    minimizer_params: &MinimizerParams,
) -> DedupResult {
    deduplicate_read_pairs_streaming(read_pairs, dedup_params, minimizer_params)
}

/// Deduplicates a lazy source of read pairs without requiring the caller to
/// materialize it first. Buckets are built as records arrive; graph
/// construction and clustering are deferred until the source is exhausted.
/// Produces exactly the same mapping as [`deduplicate_read_pairs`] for the
/// same logical input.
pub fn deduplicate_read_pairs_streaming<I>(
    read_pairs: I,
    dedup_params: &DedupParams,
    minimizer_params: &MinimizerParams,
) -> DedupResult
where
    I: IntoIterator<Item = ReadPair>,
{
    let mut engine = Deduplicator::new(dedup_params.clone(), minimizer_params.clone());
    for rp in read_pairs {
        engine.push(rp);
    }
    engine.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gives_empty_result() {
        let result =
            deduplicate_read_pairs(Vec::new(), &DedupParams::default(), &MinimizerParams::default());
        assert!(result.exemplars.is_empty());
        assert_eq!(result.summary, DedupSummary::default());
    }

    #[test]
    fn single_read_is_its_own_exemplar() {
        let reads = vec![ReadPair::new("read1", "AAAA", "TTTT", "IIII", "IIII")];
        let result =
            deduplicate_read_pairs(reads, &DedupParams::default(), &MinimizerParams::default());
        assert_eq!(result.exemplars.len(), 1);
        assert_eq!(result.exemplars["read1"], "read1");
        assert_eq!(result.summary.n_reads, 1);
        assert_eq!(result.summary.n_components, 1);
    }

    #[test]
    fn summary_counts_are_consistent() {
        let fwd = "ACGGTTCAGCATGGACTCAGGTTACACGGTTCAGCATGGACTCAGGTTAC";
        let rev = "TGGACTCAGGTTACACGGTTCAGCATGGACTCAGGTTACACGGTTCAGCA";
        let reads = vec![
            ReadPair::new("a", fwd, rev, &"I".repeat(50), &"I".repeat(50)),
            ReadPair::new("b", fwd, rev, &"I".repeat(50), &"I".repeat(50)),
            ReadPair::new("c", "GGGGGAAAAACCCCCTTTTTGGGGGAAAAA", "CCCCCTTTTTGGGGGAAAAACCCCCTTTTT", "", ""),
        ];
        let result =
            deduplicate_read_pairs(reads, &DedupParams::default(), &MinimizerParams::default());
        assert_eq!(result.summary.n_reads, 3);
        assert_eq!(result.summary.n_edges, 1);
        assert_eq!(result.summary.n_components, 2);
        assert!(result.summary.n_buckets > 0);
        assert!(result.summary.n_comparisons >= 1);
        assert_eq!(result.exemplars["a"], result.exemplars["b"]);
        assert_eq!(result.exemplars["c"], "c");
    }
}
