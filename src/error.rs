//! Error types for fixture construction and benchmark execution.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("invalid fixture: {0}")]
    InvalidFixture(String),

    #[error("{op}: shape mismatch between {left:?} and {right:?}")]
    ShapeMismatch {
        op: &'static str,
        left: Vec<usize>,
        right: Vec<usize>,
    },

    #[error("benchmark '{name}' must run at least one iteration")]
    InvalidIterations { name: String },

    #[error("benchmark '{name}' failed: {source}")]
    Benchmark {
        name: String,
        #[source]
        source: Box<HarnessError>,
    },

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type HarnessResult<T> = Result<T, HarnessError>;
