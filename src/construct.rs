//! Construction heuristics producing an initial vertex cover.
//!
//! Three strategies are available:
//! - `list_right`: deterministic scan of the vertices in decreasing degree order
//! - `grasp_deg`: randomized greedy on residual degree
//! - `grasp_weideg`: randomized greedy on residual degree weighted against the
//!   neighbourhood's residual degree
//!
//! Every strategy returns a valid cover of the instance graph.

pub mod grasp;
pub mod list_right;

use rand::Rng;
use std::fmt;
use std::str::FromStr;

use crate::cover::Cover;
use crate::error::Error;
use crate::instance::InstanceInfo;
use crate::local_search::local_search_ma;

pub use grasp::{grasp_deg, grasp_weideg};
pub use list_right::list_right;

/// The available construction strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    ListRight,
    GraspDeg,
    GraspWeideg,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::ListRight, Strategy::GraspDeg, Strategy::GraspWeideg];

    /// Identifier used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::ListRight => "list_right",
            Strategy::GraspDeg => "grasp_deg",
            Strategy::GraspWeideg => "grasp_weideg",
        }
    }

    /// Human readable name used in reports.
    pub fn display_name(self) -> &'static str {
        match self {
            Strategy::ListRight => "List Right",
            Strategy::GraspDeg => "GRASP (degree)",
            Strategy::GraspWeideg => "GRASP (weighted degree)",
        }
    }

    /// Whether the strategy draws from the random stream. Only randomized
    /// strategies use `alpha` and benefit from repetition.
    pub fn is_randomized(self) -> bool {
        !matches!(self, Strategy::ListRight)
    }

    /// Builds an initial cover. `alpha` is ignored by `ListRight`.
    pub fn construct<R: Rng + ?Sized>(
        self,
        instance: &InstanceInfo,
        alpha: f64,
        rng: &mut R,
    ) -> Cover {
        match self {
            Strategy::ListRight => list_right(&instance.graph),
            Strategy::GraspDeg => grasp_deg(&instance.graph, alpha, rng),
            Strategy::GraspWeideg => grasp_weideg(&instance.graph, alpha, rng),
        }
    }

    /// One full run: construction, then local search for the randomized
    /// strategies. `ListRight` is returned unrefined.
    pub fn solve<R: Rng + ?Sized>(self, instance: &InstanceInfo, alpha: f64, rng: &mut R) -> Cover {
        let cover = self.construct(instance, alpha, rng);
        if self.is_randomized() {
            local_search_ma(&instance.graph, cover)
        } else {
            cover
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| Error::UnknownStrategy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn random_instance(n: usize, p: f64, seed: u64) -> InstanceInfo {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut graph = Graph::new(n);
        for u in 0..n {
            for v in u + 1..n {
                if rng.gen_bool(p) {
                    graph.add_edge(u, v).unwrap();
                }
            }
        }
        InstanceInfo::from_graph(graph)
    }

    #[test]
    fn test_strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
            assert_eq!(strategy.to_string(), strategy.name());
        }
        assert!(matches!(
            "grasp".parse::<Strategy>(),
            Err(Error::UnknownStrategy(name)) if name == "grasp"
        ));
    }

    #[test]
    fn test_every_strategy_yields_valid_cover() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for seed in 0..5 {
            let instance = random_instance(30, 0.2, seed);
            for strategy in Strategy::ALL {
                for alpha in [0.0, 0.25, 0.5, 0.75, 1.0] {
                    let constructed = strategy.construct(&instance, alpha, &mut rng);
                    assert!(instance.graph.is_cover(&constructed), "{strategy} alpha={alpha}");
                    let solved = strategy.solve(&instance, alpha, &mut rng);
                    assert!(instance.graph.is_cover(&solved), "{strategy} alpha={alpha}");
                }
            }
        }
    }

    #[test]
    fn test_solve_never_worse_than_construction() {
        let instance = random_instance(25, 0.3, 9);
        for strategy in [Strategy::GraspDeg, Strategy::GraspWeideg] {
            let constructed = strategy.construct(&instance, 0.3, &mut ChaCha8Rng::seed_from_u64(1));
            let solved = strategy.solve(&instance, 0.3, &mut ChaCha8Rng::seed_from_u64(1));
            assert!(solved.len() <= constructed.len());
        }
    }

    #[test]
    fn test_list_right_ignores_rng() {
        let instance = random_instance(20, 0.25, 3);
        let a = Strategy::ListRight.solve(&instance, 0.0, &mut ChaCha8Rng::seed_from_u64(1));
        let b = Strategy::ListRight.solve(&instance, 1.0, &mut ChaCha8Rng::seed_from_u64(2));
        assert_eq!(a, b);
    }
}
