use thiserror::Error;

/// Errors returned by clustering and scoring functions in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Input slice is empty (no points, or no clusters to score).
    #[error("empty input")]
    EmptyInput,

    /// A cluster handed to a metric has no points.
    #[error("cluster {index} is empty")]
    EmptyCluster {
        /// Position of the offending cluster.
        index: usize,
    },

    /// A metric needs more clusters than it was given.
    #[error("too few clusters: need at least {required}, found {found}")]
    TooFewClusters {
        /// Minimum number of clusters the metric accepts.
        required: usize,
        /// Number of clusters supplied.
        found: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Points in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// A dataset line could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// Reading a dataset file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Coarse classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty or structurally unusable input.
    InvalidInput,
    /// A parameter is out of range.
    InvalidParameter,
    /// Vectors of different lengths were compared or averaged.
    DimensionalityMismatch,
    /// The operating system reported a failure.
    Io,
}

impl Error {
    /// The kind this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyInput
            | Error::EmptyCluster { .. }
            | Error::TooFewClusters { .. }
            | Error::Parse { .. } => ErrorKind::InvalidInput,
            Error::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            Error::DimensionMismatch { .. } => ErrorKind::DimensionalityMismatch,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
