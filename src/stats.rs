//! Summary statistics over a sample of cover sizes.

use num_traits::Float;
use std::fmt::{self, Debug};

use crate::error::{Error, Result};

/// Arithmetic mean of `sample`.
pub fn mean<T>(sample: &[T]) -> Result<T>
where
    T: Float + Debug,
{
    if sample.is_empty() {
        return Err(Error::EmptySample);
    }
    let sum = sample.iter().fold(T::zero(), |acc, &x| acc + x);
    Ok(sum / count(sample))
}

/// Population standard deviation of `sample` (divides by N).
pub fn deviation<T>(sample: &[T]) -> Result<T>
where
    T: Float + Debug,
{
    let mean = mean(sample)?;
    let squares = sample
        .iter()
        .fold(T::zero(), |acc, &x| acc + (x - mean) * (x - mean));
    Ok((squares / count(sample)).sqrt())
}

pub fn min<T>(sample: &[T]) -> Result<T>
where
    T: Float + Debug,
{
    sample
        .iter()
        .copied()
        .reduce(T::min)
        .ok_or(Error::EmptySample)
}

pub fn max<T>(sample: &[T]) -> Result<T>
where
    T: Float + Debug,
{
    sample
        .iter()
        .copied()
        .reduce(T::max)
        .ok_or(Error::EmptySample)
}

fn count<T: Float>(sample: &[T]) -> T {
    T::from(sample.len()).unwrap_or_else(T::infinity)
}

/// Mean, deviation and range of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary<T> {
    pub count: usize,
    pub mean: T,
    pub deviation: T,
    pub min: T,
    pub max: T,
}

impl<T> Summary<T>
where
    T: Float + Debug,
{
    pub fn of(sample: &[T]) -> Result<Self> {
        Ok(Self {
            count: sample.len(),
            mean: mean(sample)?,
            deviation: deviation(sample)?,
            min: min(sample)?,
            max: max(sample)?,
        })
    }
}

impl<T> fmt::Display for Summary<T>
where
    T: Float + Debug + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean {:.4}, std dev {:.4}, min {}, max {} over {} runs",
            self.mean, self.deviation, self.min, self.max, self.count
        )
    }
}
