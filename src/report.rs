use std::fmt;

use crate::error::Result;
use crate::instance::InstanceInfo;
use crate::sampling::SampleRun;
use crate::stats::Summary;

/// Human readable result of one sampling session.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub instance: String,
    pub num_vertices: usize,
    pub num_edges: usize,
    pub strategy: &'static str,
    /// `None` for strategies that ignore alpha
    pub alpha: Option<f64>,
    pub seed: u64,
    pub summary: Summary<f64>,
}

impl Report {
    pub fn new(label: impl Into<String>, instance: &InstanceInfo, run: &SampleRun, alpha: f64) -> Result<Self> {
        Ok(Self {
            instance: label.into(),
            num_vertices: instance.num_vertices,
            num_edges: instance.num_edges,
            strategy: run.strategy.display_name(),
            alpha: run.strategy.is_randomized().then_some(alpha),
            seed: run.seed,
            summary: run.summary()?,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Instance: {}", self.instance)?;
        writeln!(f, "Vertices: {}", self.num_vertices)?;
        writeln!(f, "Edges: {}", self.num_edges)?;
        writeln!(f, "Strategy: {}", self.strategy)?;
        match self.alpha {
            Some(alpha) => {
                writeln!(f, "Alpha: {alpha}")?;
                writeln!(f, "Seed: {}", self.seed)?;
                writeln!(f, "Repetitions: {}", self.summary.count)?;
                writeln!(f, "Best: {}", self.summary.min)?;
                writeln!(f, "Mean: {:.4}", self.summary.mean)?;
                write!(f, "Std dev: {:.4}", self.summary.deviation)
            }
            None => write!(f, "Cover size: {}", self.summary.min),
        }
    }
}
