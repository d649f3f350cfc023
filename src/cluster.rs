//! Connected components and exemplar selection.
//!
//! Components come from a union-find over the equivalence edges; the exemplar
//! of a multi-member component is its most central member, measured by
//! eccentricity (maximum BFS distance to any other member). Eccentricity is
//! computed by one BFS per member, O(k * (k + e)) for a component of size k,
//! which can get expensive for pathologically large clusters such as a
//! run-wide contaminant sequence. No size cap is imposed; callers seeing such
//! clusters should pre-partition their input.

use crate::graph::EquivalenceGraph;
use crate::read_pair::ReadPair;
use std::cmp::Ordering;
use std::collections::VecDeque;

/// Union-find with path compression over read indices.
#[derive(Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Finds the representative of `x`, compressing the path walked.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets containing `x` and `y`.
    pub fn union(&mut self, x: usize, y: usize) {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx != ry {
            self.parent[rx.max(ry)] = rx.min(ry);
        }
    }
}

/// Groups graph nodes into connected components, each sorted by index.
/// Singletons are included. Components are ordered by their smallest member
/// so iteration order is deterministic.
pub fn connected_components(graph: &EquivalenceGraph) -> Vec<Vec<usize>> {
    let n = graph.len();
    let mut uf = UnionFind::new(n);
    for i in 0..n {
        for &j in graph.neighbours(i) {
            uf.union(i, j);
        }
    }

    let mut components: Vec<Vec<usize>> = vec![Vec::new(); n];
    for i in 0..n {
        let root = uf.find(i);
        components[root].push(i);
    }
    components.retain(|c| !c.is_empty());
    components
}

/// BFS distances from `start`; members outside its component keep
/// `usize::MAX`.
fn bfs_distances(graph: &EquivalenceGraph, start: usize, dist: &mut Vec<usize>) {
    dist.clear();
    dist.resize(graph.len(), usize::MAX);
    dist[start] = 0;
    let mut queue = VecDeque::new();
    queue.push_back(start);
    while let Some(node) = queue.pop_front() {
        for &next in graph.neighbours(node) {
            if dist[next] == usize::MAX {
                dist[next] = dist[node] + 1;
                queue.push_back(next);
            }
        }
    }
}

/// Selects the exemplar of one component by the deterministic priority
/// ladder: lowest eccentricity, then highest mean quality, then longest
/// combined sequence, then lexicographically smallest read id.
pub fn select_exemplar(
    component: &[usize],
    graph: &EquivalenceGraph,
    read_pairs: &[ReadPair],
) -> usize {
    debug_assert!(!component.is_empty());
    if component.len() == 1 {
        return component[0];
    }

    let mut dist = Vec::new();
    let mut best: Option<(usize, usize)> = None; // (eccentricity, index)

    for &idx in component {
        bfs_distances(graph, idx, &mut dist);
        let eccentricity = component
            .iter()
            .map(|&other| dist[other])
            .max()
            .unwrap_or(0);

        let better = match best {
            None => true,
            // Quality and length are finite, so partial_cmp is total here
            Some((best_ecc, best_idx)) => {
                rank(eccentricity, &read_pairs[idx])
                    .partial_cmp(&rank(best_ecc, &read_pairs[best_idx]))
                    == Some(Ordering::Less)
            }
        };
        if better {
            best = Some((eccentricity, idx));
        }
    }

    best.map(|(_, idx)| idx).unwrap_or(component[0])
}

/// Selection key; lower wins on every field.
fn rank(eccentricity: usize, rp: &ReadPair) -> (usize, f64, f64, &str) {
    (
        eccentricity,
        -rp.mean_qual(),
        -(rp.total_len() as f64),
        rp.read_id.as_str(),
    )
}
