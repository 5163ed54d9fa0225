//! GRASP heuristics for Minimum Vertex Cover.
//!
//! A run builds a cover with a construction heuristic, refines it with
//! [`local_search_ma`], and the [`sampling`] harness repeats runs to collect
//! cover sizes for [`stats`].
//!
//! ```
//! use grasp_cover::{instance, sample, GraspConfig, Strategy};
//!
//! let text = "p edge 4 3\ne 1 2\ne 2 3\ne 3 4\n";
//! let instance = instance::parse(text.as_bytes()).unwrap();
//!
//! let config = GraspConfig::new(0.8, 20).unwrap().with_seed(42);
//! let run = sample(Strategy::GraspWeideg, &instance, &config).unwrap();
//! let summary = run.summary().unwrap();
//! assert_eq!(summary.min, 2.0);
//! ```

pub mod config;
pub mod construct;
pub mod cover;
pub mod error;
pub mod graph;
pub mod instance;
pub mod local_search;
pub mod report;
pub mod sampling;
pub mod stats;

pub use config::GraspConfig;
pub use construct::Strategy;
pub use cover::Cover;
pub use error::{Error, Result};
pub use graph::{Graph, Vertex};
pub use local_search::local_search_ma;
pub use sampling::{sample, SampleRun};
