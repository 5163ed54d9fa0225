use crate::error::{Error, Result};

/// Smallest accepted repetition count.
pub const MIN_REPETITIONS: usize = 1;
/// Largest accepted repetition count.
pub const MAX_REPETITIONS: usize = 100_000;

/// Parameters for sampling a GRASP strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct GraspConfig {
    /// Greediness of the restricted candidate list: 1 is pure greedy, 0 is
    /// uniformly random.
    pub alpha: f64,
    /// Number of independent construction + local search runs
    pub repetitions: usize,
    /// Base seed for the per-repetition random streams. `None` draws one
    /// from the operating system.
    pub seed: Option<u64>,
    /// Run repetitions on the rayon thread pool
    pub parallel: bool,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            repetitions: 30,
            seed: None,
            parallel: false,
        }
    }
}

impl GraspConfig {
    pub fn new(alpha: f64, repetitions: usize) -> Result<Self> {
        let config = Self {
            alpha,
            repetitions,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks that `alpha` lies in `[0, 1]` and `repetitions` in
    /// `[MIN_REPETITIONS, MAX_REPETITIONS]`.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(Error::AlphaOutOfRange(self.alpha));
        }
        if !(MIN_REPETITIONS..=MAX_REPETITIONS).contains(&self.repetitions) {
            return Err(Error::RepetitionsOutOfRange(self.repetitions));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GraspConfig::default().validate().is_ok());
    }

    #[test]
    fn test_alpha_bounds() {
        assert!(GraspConfig::new(0.0, 1).is_ok());
        assert!(GraspConfig::new(1.0, 1).is_ok());
        assert!(matches!(
            GraspConfig::new(1.5, 1),
            Err(Error::AlphaOutOfRange(_))
        ));
        assert!(matches!(
            GraspConfig::new(-0.1, 1),
            Err(Error::AlphaOutOfRange(_))
        ));
        assert!(matches!(
            GraspConfig::new(f64::NAN, 1),
            Err(Error::AlphaOutOfRange(_))
        ));
    }

    #[test]
    fn test_repetition_bounds() {
        assert!(GraspConfig::new(0.5, MAX_REPETITIONS).is_ok());
        assert!(matches!(
            GraspConfig::new(0.5, 0),
            Err(Error::RepetitionsOutOfRange(0))
        ));
        assert!(matches!(
            GraspConfig::new(0.5, MAX_REPETITIONS + 1),
            Err(Error::RepetitionsOutOfRange(_))
        ));
    }

    #[test]
    fn test_builders() {
        let config = GraspConfig::default().with_seed(7).with_parallel(true);
        assert_eq!(config.seed, Some(7));
        assert!(config.parallel);
    }
}
