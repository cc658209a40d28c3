//! Maximum-probability path on an undirected graph (Dijkstra with multiplicative weights).
//!
//! Each edge \(e=\{a,b\}\) carries an independent success probability
//! \(p_e \in [0,1]\). The **path probability** of a traversal sequence is the
//! product of its edge probabilities, and the operator computes
//! \[
//! P^\star(s \to t) = \max_{\pi \in \mathcal{P}(s \to t)} \prod_{e \in \pi} p_e,
//! \]
//! with \(P^\star = 1\) when \(s = t\) (the empty path) and \(P^\star = 0\)
//! when no path exists.
//!
//! This is Dijkstra's algorithm under the monoid \(([0,1], \times, \max)\)
//! instead of \((\mathbb{R}_{\ge 0}, +, \min)\): because every factor is
//! \(\le 1\), path probability is non-increasing in path length, so once a
//! node is settled with probability \(P\) no extension through unsettled
//! nodes can reach it with more than \(P\). That is the multiplicative
//! analogue of the non-negative-edge-weight precondition, and it makes the
//! greedy "settle the most probable unsettled node" step safe.
//!
//! Selection uses a max-heap with lazy deletion of stale entries rather than
//! a linear scan, giving \(O((V+E)\log V)\). Termination is structural (the
//! heap empties or the target is popped); no floating-point equality tests
//! are involved.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Errors for maximum-probability path operators.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Graph must have at least 1 node.
    #[error("graph must have at least 1 node")]
    NoNodes,
    /// Edge endpoint out of bounds.
    #[error("edge endpoint out of bounds: edge {edge_idx} has {{{a},{b}}} for n={n}")]
    EdgeOutOfBounds {
        /// Index of the offending edge in the provided slice.
        edge_idx: usize,
        /// One endpoint of that edge.
        a: usize,
        /// The other endpoint of that edge.
        b: usize,
        /// Number of nodes in the graph.
        n: usize,
    },
    /// Edge probability outside the unit interval (or non-finite).
    #[error("edge probability must lie in [0,1]: edge {edge_idx} has {prob}")]
    InvalidProbability {
        /// Index of the offending edge in the provided slice.
        edge_idx: usize,
        /// The offending probability value.
        prob: f64,
    },
    /// Parallel `pairs`/`succ_prob` sequences of unequal length.
    #[error("edges and succ_prob must have equal length: {edges} vs {probs}")]
    LengthMismatch {
        /// Number of endpoint pairs provided.
        edges: usize,
        /// Number of probabilities provided.
        probs: usize,
    },
    /// Query node (`start` or `end`) out of bounds.
    #[error("node {node} out of bounds for n={n}")]
    NodeOutOfBounds {
        /// The offending node id.
        node: usize,
        /// Number of nodes in the graph.
        n: usize,
    },
}

/// Convenience result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Undirected edge with a traversal-success probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// One endpoint (node id in `[0, n)`).
    pub a: usize,
    /// The other endpoint (node id in `[0, n)`).
    pub b: usize,
    /// Probability in `[0, 1]` that traversing this edge succeeds.
    pub prob: f64,
}

/// Heap entry: a candidate probability for reaching `node`.
///
/// Ordered by probability so `BinaryHeap` pops the most probable candidate
/// first. Probabilities are validated finite before any entry is created,
/// so `total_cmp` agrees with the usual order.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    prob: f64,
    node: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.prob
            .total_cmp(&other.prob)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn validate(n: usize, edges: &[Edge], start: usize, end: usize) -> Result<()> {
    if n == 0 {
        return Err(Error::NoNodes);
    }
    for (k, e) in edges.iter().enumerate() {
        if e.a >= n || e.b >= n {
            return Err(Error::EdgeOutOfBounds {
                edge_idx: k,
                a: e.a,
                b: e.b,
                n,
            });
        }
        if !e.prob.is_finite() || e.prob < 0.0 || e.prob > 1.0 {
            return Err(Error::InvalidProbability {
                edge_idx: k,
                prob: e.prob,
            });
        }
    }
    for node in [start, end] {
        if node >= n {
            return Err(Error::NodeOutOfBounds { node, n });
        }
    }
    Ok(())
}

fn adjacency(n: usize, edges: &[Edge]) -> Vec<Vec<(usize, f64)>> {
    let mut adj: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
    for e in edges {
        adj[e.a].push((e.b, e.prob));
        adj[e.b].push((e.a, e.prob));
    }
    adj
}

/// Shared Dijkstra core: best probabilities from `start`, with predecessor
/// recording, stopping as soon as `end` is settled.
fn run(n: usize, edges: &[Edge], start: usize, end: usize) -> (Vec<f64>, Vec<usize>) {
    let adj = adjacency(n, edges);

    let mut best = vec![0.0f64; n];
    let mut prev = vec![usize::MAX; n];
    best[start] = 1.0;

    let mut heap = BinaryHeap::new();
    heap.push(Candidate {
        prob: 1.0,
        node: start,
    });

    while let Some(Candidate { prob, node }) = heap.pop() {
        if node == end {
            break;
        }
        // Stale entry: a better probability was already settled for `node`.
        if prob < best[node] {
            continue;
        }
        for &(to, edge_prob) in &adj[node] {
            let cand = prob * edge_prob;
            if cand > best[to] {
                best[to] = cand;
                prev[to] = node;
                heap.push(Candidate {
                    prob: cand,
                    node: to,
                });
            }
        }
    }

    (best, prev)
}

/// Maximum probability of a successful traversal from `start` to `end`.
///
/// Returns 1.0 when `start == end`, and 0.0 when `end` is unreachable
/// ("no path" is a defined outcome, not an error). Parallel edges are
/// allowed (the better one wins) and self-loops cannot affect the result.
pub fn max_probability(n: usize, edges: &[Edge], start: usize, end: usize) -> Result<f64> {
    validate(n, edges, start, end)?;
    let (best, _prev) = run(n, edges, start, end);
    Ok(best[end])
}

/// [`max_probability`] over the parallel-sequence calling convention:
/// `pairs[i]` is an undirected endpoint pair and `succ_prob[i]` its
/// traversal-success probability.
pub fn max_probability_pairs(
    n: usize,
    pairs: &[[usize; 2]],
    succ_prob: &[f64],
    start: usize,
    end: usize,
) -> Result<f64> {
    if pairs.len() != succ_prob.len() {
        return Err(Error::LengthMismatch {
            edges: pairs.len(),
            probs: succ_prob.len(),
        });
    }
    let edges: Vec<Edge> = pairs
        .iter()
        .zip(succ_prob)
        .map(|(&[a, b], &prob)| Edge { a, b, prob })
        .collect();
    max_probability(n, &edges, start, end)
}

/// Maximum traversal probability together with one optimal path.
///
/// Returns `(value, path)` where `path` lists node ids from `start` to `end`
/// inclusive. The path is empty exactly when the value is 0.0, and is
/// `[start]` when `start == end`.
pub fn max_probability_with_path(
    n: usize,
    edges: &[Edge],
    start: usize,
    end: usize,
) -> Result<(f64, Vec<usize>)> {
    validate(n, edges, start, end)?;
    let (best, prev) = run(n, edges, start, end);

    let value = best[end];
    if value <= 0.0 {
        return Ok((0.0, Vec::new()));
    }

    let mut path = vec![end];
    let mut node = end;
    while node != start {
        node = prev[node];
        path.push(node);
    }
    path.reverse();
    Ok((value, path))
}
