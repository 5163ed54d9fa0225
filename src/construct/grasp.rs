use log::{debug, trace};
use rand::Rng;
use std::cmp::Ordering;

use crate::cover::Cover;
use crate::graph::Graph;

/// Tolerance keeping candidates that sit exactly on the RCL threshold.
pub const RCL_EPSILON: f64 = 1e-9;

/// A vertex eligible to enter the cover, with its ranking metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub vertex: usize,
    pub score: f64,
    pub residual: usize,
}

impl Candidate {
    /// Descending by score, then by residual degree.
    fn rank(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.residual.cmp(&self.residual))
    }
}

/// Sorts `candidates` best first and returns the restricted candidate list:
/// the prefix whose score is at least `c_min + alpha * (c_max - c_min)`.
///
/// The returned slice is empty only when `candidates` is.
pub fn restricted_candidate_list(candidates: &mut [Candidate], alpha: f64) -> &[Candidate] {
    candidates.sort_by(Candidate::rank);
    let (Some(best), Some(worst)) = (candidates.first(), candidates.last()) else {
        return candidates;
    };
    let threshold = worst.score + alpha * (best.score - worst.score) - RCL_EPSILON;
    let len = candidates
        .iter()
        .take_while(|candidate| candidate.score >= threshold)
        .count();
    &candidates[..len]
}

/// Randomized greedy construction ranking candidates by residual degree.
///
/// # Arguments
/// * `graph` - The instance graph
/// * `alpha` - RCL greediness in `[0, 1]`; 1 always takes a maximum residual
///   degree vertex, 0 picks uniformly among all candidates
/// * `rng` - Random stream used for the RCL draws
///
/// # Examples
/// ```
/// use grasp_cover::construct::grasp_deg;
/// use grasp_cover::Graph;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let graph = Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let cover = grasp_deg(&graph, 1.0, &mut rng);
/// assert_eq!(cover.len(), 2);
/// ```
///
/// # Complexity
/// * Time: O(V² log V)
/// * Space: O(V)
pub fn grasp_deg<R: Rng + ?Sized>(graph: &Graph, alpha: f64, rng: &mut R) -> Cover {
    greedy_randomized(graph, alpha, rng, |_, v, residual| residual[v] as f64)
}

/// Randomized greedy construction ranking candidates by weighted degree.
///
/// The weighted degree of `v` is its residual degree divided by the sum of the
/// residual degrees of its neighbours. Ties fall back to plain residual degree.
///
/// # Complexity
/// * Time: O(V³) in the worst case
/// * Space: O(V)
pub fn grasp_weideg<R: Rng + ?Sized>(graph: &Graph, alpha: f64, rng: &mut R) -> Cover {
    greedy_randomized(graph, alpha, rng, weighted_degree)
}

/// `residual[v]` over the residual degrees of `v`'s neighbours.
///
/// Only called for candidates, whose positive residual degree guarantees a
/// neighbour with positive residual degree.
fn weighted_degree(graph: &Graph, v: usize, residual: &[usize]) -> f64 {
    let pressure: usize = graph.neighbors(v).iter().map(|&u| residual[u]).sum();
    residual[v] as f64 / pressure as f64
}

/// The shared RCL construction loop.
///
/// Invariant: `to_cover` is the number of edges with no endpoint in the
/// cover, and `residual[v]` the number of those edges incident to `v`.
fn greedy_randomized<R, F>(graph: &Graph, alpha: f64, rng: &mut R, metric: F) -> Cover
where
    R: Rng + ?Sized,
    F: Fn(&Graph, usize, &[usize]) -> f64,
{
    let n = graph.num_vertices();
    let mut residual: Vec<usize> = (0..n).map(|v| graph.degree(v)).collect();
    let mut to_cover = graph.num_edges();
    let mut cover = Cover::new(n);
    let mut candidates = Vec::with_capacity(n);

    while to_cover > 0 {
        candidates.clear();
        candidates.extend(
            (0..n)
                .filter(|&v| !cover.contains(v) && residual[v] > 0)
                .map(|v| Candidate {
                    vertex: v,
                    score: metric(graph, v, &residual),
                    residual: residual[v],
                }),
        );

        let pool = candidates.len();
        let rcl = restricted_candidate_list(&mut candidates, alpha);
        assert!(
            !rcl.is_empty(),
            "no candidate left while {to_cover} edges remain uncovered"
        );
        let chosen = rcl[rng.gen_range(0..rcl.len())].vertex;
        trace!(
            "picked vertex {chosen} from an RCL of {} (of {pool} candidates)",
            rcl.len()
        );

        cover.insert(chosen);
        for &w in graph.neighbors(chosen) {
            if !cover.contains(w) {
                residual[w] -= 1;
                to_cover -= 1;
            }
        }
        residual[chosen] = 0;
    }

    debug!("greedy construction built a cover of size {}", cover.len());
    cover
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn candidate(vertex: usize, score: f64, residual: usize) -> Candidate {
        Candidate {
            vertex,
            score,
            residual,
        }
    }

    fn triangle() -> Graph {
        Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap()
    }

    /// Two disjoint stars with centres 0 (three leaves) and 4 (two leaves).
    fn double_star() -> Graph {
        Graph::from_edges(7, &[(0, 1), (0, 2), (0, 3), (4, 5), (4, 6)]).unwrap()
    }

    #[test]
    fn test_rcl_greedy_keeps_only_best() {
        let mut candidates = vec![candidate(0, 1.0, 1), candidate(1, 3.0, 3), candidate(2, 2.0, 2)];
        let rcl = restricted_candidate_list(&mut candidates, 1.0);
        assert_eq!(rcl, &[candidate(1, 3.0, 3)]);
    }

    #[test]
    fn test_rcl_random_keeps_everything() {
        let mut candidates = vec![candidate(0, 1.0, 1), candidate(1, 3.0, 3), candidate(2, 2.0, 2)];
        let rcl = restricted_candidate_list(&mut candidates, 0.0);
        let vertices: Vec<_> = rcl.iter().map(|c| c.vertex).collect();
        assert_eq!(vertices, vec![1, 2, 0]);
    }

    #[test]
    fn test_rcl_threshold_is_inclusive() {
        // threshold = 1 + 0.5 * (3 - 1) = 2, which must admit the score 2 candidate.
        let mut candidates = vec![candidate(0, 1.0, 1), candidate(1, 3.0, 3), candidate(2, 2.0, 2)];
        let rcl = restricted_candidate_list(&mut candidates, 0.5);
        assert_eq!(rcl.len(), 2);

        // 0.1 + 0.2 style rounding must not drop a boundary candidate.
        let mut candidates = vec![candidate(0, 0.0, 1), candidate(1, 0.3, 1), candidate(2, 0.1 + 0.2, 1)];
        let rcl = restricted_candidate_list(&mut candidates, 1.0);
        assert_eq!(rcl.len(), 2);
    }

    #[test]
    fn test_rcl_ties_break_on_residual() {
        let mut candidates = vec![candidate(0, 0.5, 1), candidate(1, 0.5, 4)];
        let rcl = restricted_candidate_list(&mut candidates, 1.0);
        assert_eq!(rcl[0].vertex, 1);
        assert_eq!(rcl.len(), 2);
    }

    #[test]
    fn test_rcl_empty() {
        let mut candidates: Vec<Candidate> = Vec::new();
        assert!(restricted_candidate_list(&mut candidates, 0.5).is_empty());
    }

    #[test]
    fn test_triangle_greedy_size_two() {
        let graph = triangle();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for _ in 0..50 {
            let cover = grasp_deg(&graph, 1.0, &mut rng);
            assert!(graph.is_cover(&cover));
            assert_eq!(cover.len(), 2);
        }
    }

    #[test]
    fn test_greedy_is_deterministic_without_ties() {
        let graph = double_star();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..20 {
            let cover = grasp_deg(&graph, 1.0, &mut rng);
            assert_eq!(cover.iter().collect::<Vec<_>>(), vec![0, 4]);
            let cover = grasp_weideg(&graph, 1.0, &mut rng);
            assert_eq!(cover.len(), 2);
            assert!(graph.is_cover(&cover));
        }
    }

    #[test]
    fn test_alpha_zero_terminates_with_valid_cover() {
        let graph = double_star();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..50 {
            let cover = grasp_deg(&graph, 0.0, &mut rng);
            assert!(graph.is_cover(&cover));
            assert!(cover.len() <= graph.num_vertices());
            let cover = grasp_weideg(&graph, 0.0, &mut rng);
            assert!(graph.is_cover(&cover));
        }
    }

    #[test]
    fn test_edgeless_graph_gives_empty_cover() {
        let graph = Graph::new(5);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(grasp_deg(&graph, 0.5, &mut rng).is_empty());
        assert!(grasp_weideg(&graph, 0.5, &mut rng).is_empty());
    }

    #[test]
    fn test_weighted_degree() {
        // Path 0-1-2: vertex 1 has residual 2 against neighbour pressure 2.
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        let residual = vec![1, 2, 1];
        assert_eq!(weighted_degree(&graph, 1, &residual), 1.0);
        assert_eq!(weighted_degree(&graph, 0, &residual), 0.5);
    }

    #[test]
    fn test_same_seed_same_cover() {
        let graph = Graph::from_edges(
            8,
            &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7), (7, 0), (0, 4), (2, 6)],
        )
        .unwrap();
        let a = grasp_deg(&graph, 0.4, &mut ChaCha8Rng::seed_from_u64(99));
        let b = grasp_deg(&graph, 0.4, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
