//! Core types and errors for the Authyntic toolkit.
//!
//! This crate defines the data structures shared by the hashing and Merkle
//! crates: algorithm identifiers, digests, leaves, inclusion proofs and batch
//! commitments. It contains no hashing logic.

pub mod algorithm;
pub mod digest;
pub mod error;
pub mod merkle;

pub use algorithm::HashAlgorithm;
pub use digest::Digest;
pub use error::{Error, Result};
pub use merkle::{BatchCommitment, InclusionProof, MerkleLeaf, MerkleLevel, Position};
