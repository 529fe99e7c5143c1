use thiserror::Error;

/// The broad category of a sampling failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    MalformedInput,
}

/// Precondition failures reported by the farthest point sampler. All of these are detected
/// before any selection work begins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    #[error("invalid argument: empty input")]
    EmptyInput,

    #[error("invalid argument: target count {k} out of range, expected 1 to {n}")]
    TargetCountOutOfRange { k: usize, n: usize },

    #[error("invalid argument: seed index {index} out of range for {n} points")]
    SeedIndexOutOfRange { index: usize, n: usize },

    #[error("malformed input: non-finite coordinate in point {index}")]
    NonFiniteCoordinate { index: usize },
}

impl SampleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SampleError::EmptyInput
            | SampleError::TargetCountOutOfRange { .. }
            | SampleError::SeedIndexOutOfRange { .. } => ErrorKind::InvalidArgument,
            SampleError::NonFiniteCoordinate { .. } => ErrorKind::MalformedInput,
        }
    }
}
