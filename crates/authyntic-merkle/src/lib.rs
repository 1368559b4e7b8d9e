//! Merkle batch commitments with inclusion proofs.
//!
//! A batch of ordered leaves is committed to a single root; each leaf of
//! interest gets a sibling path that proves its membership without exposing
//! the other leaves.
//!
//! # Main Components
//!
//! - [`tree::MerkleTree`] - level-by-level tree with carry-forward on odd levels
//! - [`proof`] - inclusion proof generation and verification
//! - [`batch`] - one root, many proofs, all-or-nothing
//! - [`leaf`] - leaves from raw content

pub mod batch;
pub mod leaf;
pub mod proof;
pub mod tree;

pub use batch::{commit, commit_all, verify_all};
pub use leaf::leaf_from_content;
pub use proof::{prove_index, verify};
pub use tree::{derive_root, hash_pair, MerkleTree, ProofPath};
