//! Authyntic: content hashing and Merkle batch commitments.
//!
//! This is the main entry point for user applications. It re-exports the core
//! types and the hashing and Merkle crates.
//!
//! ```
//! use authyntic::prelude::*;
//!
//! let frames: Vec<MerkleLeaf> = ["f0", "f1", "f2"]
//!     .iter()
//!     .map(|id| leaf_from_content(*id, id.as_bytes()))
//!     .collect();
//!
//! let batch = commit(&frames, &[0, 2]).unwrap();
//! assert!(verify_all(&batch));
//! ```

pub use authyntic_core as core;
pub use authyntic_hash as hash;
pub use authyntic_merkle as merkle;

pub use authyntic_core::{Error, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        BatchCommitment, Digest, HashAlgorithm, InclusionProof, MerkleLeaf, MerkleLevel, Position,
    };
    pub use crate::hash::{digest, multi_digest, multi_digest_named, verify_digest};
    pub use crate::merkle::{
        commit, commit_all, derive_root, leaf_from_content, prove_index, verify, verify_all,
        MerkleTree,
    };
    pub use crate::{Error, Result};
}
