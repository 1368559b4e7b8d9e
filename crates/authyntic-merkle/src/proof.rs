//! Inclusion proof generation and verification.

use authyntic_core::{Error, InclusionProof, MerkleLeaf, Result};

use crate::tree::{fold_path, MerkleTree};

/// Prove that the leaf at `index` is committed under `tree`'s root.
///
/// `leaves` must be the leaf set the tree was built from. A leaf set of a
/// different length fails with `LeafCountMismatch`; a leaf at `index` whose
/// hash differs from the tree's fails with `LeafMismatch`.
pub fn prove_index(tree: &MerkleTree, leaves: &[MerkleLeaf], index: usize) -> Result<InclusionProof> {
    if leaves.len() != tree.leaf_count() {
        return Err(Error::LeafCountMismatch {
            expected: tree.leaf_count(),
            actual: leaves.len(),
        });
    }

    let path = tree.path(index)?;
    let leaf = &leaves[index];
    if tree.levels()[0][index] != leaf.hash {
        return Err(Error::LeafMismatch { index });
    }
    let root = tree
        .root()
        .map(str::to_string)
        .ok_or(Error::IndexOutOfRange { index, len: 0 })?;

    tracing::debug!(index, siblings = path.siblings.len(), "generated inclusion proof");

    Ok(InclusionProof {
        leaf: leaf.clone(),
        siblings: path.siblings,
        positions: path.positions,
        root,
    })
}

/// Recompute the root from the proof's leaf and sibling path.
///
/// Returns `false` for a tampered or misaligned proof; never errors.
pub fn verify(proof: &InclusionProof) -> bool {
    fold_path(&proof.leaf.hash, &proof.siblings, &proof.positions)
        .is_some_and(|computed| computed == proof.root)
}
