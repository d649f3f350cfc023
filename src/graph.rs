//! Equivalence graph construction over bucketed candidates.

use crate::bucket::Buckets;
use crate::equivalence::read_pairs_equivalent;
use crate::params::DedupParams;
use crate::read_pair::ReadPair;
use log::debug;
use std::collections::HashSet;

/// Undirected graph over read indices; an edge means the two read pairs were
/// judged equivalent. Built once per deduplication call and not persisted.
#[derive(Debug)]
pub struct EquivalenceGraph {
    adj: Vec<Vec<usize>>,
    n_edges: usize,
}

impl EquivalenceGraph {
    fn new(n_nodes: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n_nodes],
            n_edges: 0,
        }
    }

    fn add_edge(&mut self, i: usize, j: usize) {
        self.adj[i].push(j);
        self.adj[j].push(i);
        self.n_edges += 1;
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.adj.len()
    }

    /// True when the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Neighbours of node `i`
    pub fn neighbours(&self, i: usize) -> &[usize] {
        &self.adj[i]
    }

    /// Number of undirected edges
    pub fn n_edges(&self) -> usize {
        self.n_edges
    }
}

/// Compares every unordered pair of indices that co-occur in some bucket and
/// records an edge per positive equivalence test. A global seen-set keeps a
/// pair that shares several buckets from being compared more than once.
/// Returns the graph together with the number of distinct comparisons.
pub fn build_graph(
    read_pairs: &[ReadPair],
    buckets: &Buckets,
    params: &DedupParams,
) -> (EquivalenceGraph, usize) {
    let mut graph = EquivalenceGraph::new(read_pairs.len());
    let mut compared: HashSet<(usize, usize)> = HashSet::new();

    for indices in buckets.values() {
        let mut indices = indices.clone();
        indices.sort_unstable();

        for (a, &i) in indices.iter().enumerate() {
            for &j in &indices[a + 1..] {
                // (i, j) is already sorted since indices are
                if !compared.insert((i, j)) {
                    continue;
                }
                if read_pairs_equivalent(&read_pairs[i], &read_pairs[j], params) {
                    graph.add_edge(i, j);
                }
            }
        }
    }

    debug!(
        "graph: {} nodes, {} edges, {} comparisons across {} buckets",
        graph.len(),
        graph.n_edges(),
        compared.len(),
        buckets.len()
    );

    (graph, compared.len())
}
