use std::io;

/// Errors that can occur while writing or reading a matrix fixture
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// Underlying I/O failure, passed through unchanged.
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Encoding failed: {0}")]
    Encode(String),

    #[error("Decoding failed: {0}")]
    Decode(String),

    #[error("Size mismatch: expected {expected} bytes, file has {actual} bytes")]
    SizeMismatch { expected: u64, actual: u64 },

    #[error("File of {bytes} bytes does not hold a square f32 matrix")]
    NotSquare { bytes: u64 },

    #[error("Matrix size {size} is too large to address")]
    TooLarge { size: usize },

    #[error("Invalid partition: rank {rank} of {ranks}")]
    InvalidPartition { rank: usize, ranks: usize },
}

impl From<bincode::error::EncodeError> for FixtureError {
    fn from(err: bincode::error::EncodeError) -> Self {
        match err {
            bincode::error::EncodeError::Io { inner, .. } => FixtureError::Io(inner),
            other => FixtureError::Encode(other.to_string()),
        }
    }
}

impl From<bincode::error::DecodeError> for FixtureError {
    fn from(err: bincode::error::DecodeError) -> Self {
        match err {
            bincode::error::DecodeError::Io { inner, .. } => FixtureError::Io(inner),
            other => FixtureError::Decode(other.to_string()),
        }
    }
}

pub type Result<T, E = FixtureError> = std::result::Result<T, E>;
