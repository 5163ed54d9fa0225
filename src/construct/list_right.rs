use bitvec::prelude::*;
use log::debug;

use crate::cover::Cover;
use crate::graph::Graph;

/// Builds a vertex cover with the List Right heuristic.
///
/// The vertices are sorted by ascending degree and scanned from the right end
/// of that list, so high-degree vertices are visited first. A vertex joins the
/// cover when one of its neighbours has already been visited and was left out
/// of the cover. The result is deterministic for a given graph.
///
/// # Examples
/// ```
/// use grasp_cover::construct::list_right;
/// use grasp_cover::Graph;
///
/// // Star with centre 0.
/// let graph = Graph::from_edges(4, &[(0, 1), (0, 2), (0, 3)]).unwrap();
/// let cover = list_right(&graph);
/// assert!(graph.is_cover(&cover));
/// ```
///
/// # Complexity
/// * Time: O(V log V + E)
/// * Space: O(V)
pub fn list_right(graph: &Graph) -> Cover {
    let n = graph.num_vertices();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&v| graph.degree(v));

    let mut cover = Cover::new(n);
    let mut seen = bitvec![0; n];
    for &u in order.iter().rev() {
        if graph
            .neighbors(u)
            .iter()
            .any(|&w| seen[w] && !cover.contains(w))
        {
            cover.insert(u);
        }
        seen.set(u, true);
    }

    debug!("list_right built a cover of size {}", cover.len());
    cover
}
