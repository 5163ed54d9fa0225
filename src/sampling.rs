//! Repeated runs of a construction strategy.
//!
//! Each repetition draws from its own ChaCha stream: the base seed selects the
//! key and the repetition index selects the stream. Repetitions are therefore
//! independent of execution order, and a sequential and a parallel run with
//! the same seed produce the same sample.

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::config::GraspConfig;
use crate::construct::Strategy;
use crate::cover::Cover;
use crate::error::{Error, Result};
use crate::instance::InstanceInfo;
use crate::stats::Summary;

/// Outcome of sampling a strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRun {
    pub strategy: Strategy,
    /// Cover size of every repetition, in repetition order
    pub sizes: Vec<f64>,
    /// A smallest cover found, from the earliest repetition reaching it
    pub best: Cover,
    /// Base seed of the random streams
    pub seed: u64,
}

impl SampleRun {
    pub fn summary(&self) -> Result<Summary<f64>> {
        Summary::of(&self.sizes)
    }
}

/// The random stream owned by repetition `repetition` under `seed`.
pub fn stream(seed: u64, repetition: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(repetition as u64);
    rng
}

/// Runs `strategy` on `instance` `config.repetitions` times.
///
/// Deterministic strategies run once regardless of the requested count.
///
/// # Errors
/// `AlphaOutOfRange` or `RepetitionsOutOfRange` when `config` is invalid.
///
/// # Examples
/// ```
/// use grasp_cover::{instance::InstanceInfo, sample, GraspConfig, Graph, Strategy};
///
/// let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
/// let instance = InstanceInfo::from_graph(graph);
/// let config = GraspConfig::new(0.5, 10).unwrap().with_seed(1);
///
/// let run = sample(Strategy::GraspDeg, &instance, &config).unwrap();
/// assert_eq!(run.sizes.len(), 10);
/// assert_eq!(run.best.len(), 2);
/// ```
pub fn sample(strategy: Strategy, instance: &InstanceInfo, config: &GraspConfig) -> Result<SampleRun> {
    config.validate()?;
    let repetitions = if strategy.is_randomized() {
        config.repetitions
    } else {
        1
    };
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        "sampling {strategy} on {} vertices / {} edges: {repetitions} repetitions, alpha {}, seed {seed}{}",
        instance.num_vertices,
        instance.num_edges,
        config.alpha,
        if config.parallel { ", parallel" } else { "" }
    );

    let run = |repetition: usize| {
        strategy
            .solve(instance, config.alpha, &mut stream(seed, repetition))
            .len() as f64
    };
    let sizes: Vec<f64> = if config.parallel {
        (0..repetitions).into_par_iter().map(run).collect()
    } else {
        (0..repetitions).map(run).collect()
    };

    // Streams are reproducible, so the best repetition is replayed instead of
    // keeping every cover alive.
    let best_repetition = sizes
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(repetition, _)| repetition)
        .ok_or(Error::EmptySample)?;
    let best = strategy.solve(instance, config.alpha, &mut stream(seed, best_repetition));
    info!(
        "best cover of size {} found at repetition {best_repetition}",
        best.len()
    );

    Ok(SampleRun {
        strategy,
        sizes,
        best,
        seed,
    })
}
