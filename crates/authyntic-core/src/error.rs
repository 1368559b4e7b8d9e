use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Invalid digest length {0}: expected 1..=64 bytes")]
    InvalidDigestLength(usize),

    #[error("Digest length mismatch for {algorithm}: expected {expected} bytes, got {actual}")]
    DigestLengthMismatch {
        algorithm: String,
        expected: usize,
        actual: usize,
    },

    #[error("Leaf at index {index} does not match the tree")]
    LeafMismatch { index: usize },

    #[error("Invalid key length {0}: expected at most 64 bytes")]
    InvalidKeyLength(usize),

    #[error("Index {index} out of range for {len} leaves")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Leaf count mismatch: tree has {expected} leaves, got {actual}")]
    LeafCountMismatch { expected: usize, actual: usize },

    #[error("Cannot commit an empty leaf set")]
    EmptyCommitment,
}

pub type Result<T> = std::result::Result<T, Error>;
