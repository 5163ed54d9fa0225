use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the graph model and the collaborators around the solver.
#[derive(Debug, Error)]
pub enum Error {
    /// A vertex id outside `0..n` was passed to a checked graph query.
    #[error("vertex {0} not found in graph")]
    VertexNotFound(usize),

    #[error("self-loop on vertex {0} is not allowed")]
    SelfLoop(usize),

    #[error("unknown strategy `{0}` (expected list_right, grasp_deg or grasp_weideg)")]
    UnknownStrategy(String),

    #[error("alpha must lie in [0, 1], got {0}")]
    AlphaOutOfRange(f64),

    #[error("repetitions must lie in [1, 100000], got {0}")]
    RepetitionsOutOfRange(usize),

    #[error("cannot read instance file {}: {source}", .path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed instance at line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("statistics require a non-empty sample")]
    EmptySample,

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedLine {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
