//! Swap-based local search over vertex covers.
//!
//! Two moves are tried, scanning vertices in id order and restarting the scan
//! after every accepted move (first improvement):
//!
//! - **drop**: a cover vertex whose neighbours are all in the cover is removed.
//! - **swap**: a vertex `v` outside the cover enters it, then each neighbour
//!   `u` of `v` leaves the tentative cover if every neighbour of `u` is in the
//!   tentative cover at that point. The move is accepted only when the
//!   tentative cover is strictly smaller.
//!
//! Neighbours are examined one after another against the tentative cover as
//! it shrinks, so a neighbour adjacent to an already dropped one is kept and
//! every accepted cover stays valid.

use log::debug;

use crate::cover::Cover;
use crate::graph::Graph;

/// Refines `cover` until neither move shrinks it.
///
/// `cover` must be a valid cover of `graph`. The result is a valid cover no
/// larger than the input, and applying the search to it again changes nothing.
///
/// # Examples
/// ```
/// use grasp_cover::{local_search_ma, Cover, Graph};
///
/// let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
/// let cover = local_search_ma(&graph, Cover::from_vertices(4, &[0, 1, 2]));
/// assert_eq!(cover.len(), 2);
/// ```
///
/// # Complexity
/// * Time: O(V) moves, each found by an O(V + E · Δ) scan
/// * Space: O(V)
pub fn local_search_ma(graph: &Graph, mut cover: Cover) -> Cover {
    debug_assert!(graph.is_cover(&cover), "local search needs a valid cover");
    let initial = cover.len();
    let mut moves = 0;

    while let Some(improved) = first_improvement(graph, &cover) {
        cover = improved;
        moves += 1;
    }

    debug!(
        "local search: {initial} -> {} after {moves} improving moves",
        cover.len()
    );
    cover
}

fn first_improvement(graph: &Graph, cover: &Cover) -> Option<Cover> {
    (0..graph.num_vertices()).find_map(|v| {
        if cover.contains(v) {
            drop_move(graph, cover, v)
        } else {
            swap_move(graph, cover, v)
        }
    })
}

fn drop_move(graph: &Graph, cover: &Cover, v: usize) -> Option<Cover> {
    if !graph.neighbors(v).iter().all(|&u| cover.contains(u)) {
        return None;
    }
    let mut smaller = cover.clone();
    smaller.remove(v);
    Some(smaller)
}

fn swap_move(graph: &Graph, cover: &Cover, v: usize) -> Option<Cover> {
    let neighbors = graph.neighbors(v);
    // Entering costs one vertex, so at least two neighbours must leave.
    if neighbors.len() < 2 || !neighbors.iter().all(|&u| cover.contains(u)) {
        return None;
    }

    let mut tentative = cover.clone();
    tentative.insert(v);
    for &u in neighbors {
        let needed = graph.neighbors(u).iter().any(|&w| !tentative.contains(w));
        if !needed {
            tentative.remove(u);
        }
    }

    (tentative.len() < cover.len()).then_some(tentative)
}
