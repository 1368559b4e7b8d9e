//! Batch commitments: one root, many proofs.

use authyntic_core::{BatchCommitment, Error, MerkleLeaf, Result};

use crate::proof::{prove_index, verify};
use crate::tree::MerkleTree;

/// Commit `leaves` once and prove each of `indices` against the shared root.
///
/// All-or-nothing: any out-of-range index fails the whole batch with
/// `IndexOutOfRange`.
pub fn commit(leaves: &[MerkleLeaf], indices: &[usize]) -> Result<BatchCommitment> {
    if leaves.is_empty() {
        return Err(Error::EmptyCommitment);
    }
    if let Some(&index) = indices.iter().find(|&&index| index >= leaves.len()) {
        return Err(Error::IndexOutOfRange {
            index,
            len: leaves.len(),
        });
    }

    let tree = MerkleTree::from_leaves(leaves);
    let root = tree.root().map(str::to_string).ok_or(Error::EmptyCommitment)?;

    let proofs = indices
        .iter()
        .map(|&index| prove_index(&tree, leaves, index))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        leaves = leaves.len(),
        proofs = proofs.len(),
        root = %root,
        "committed batch"
    );

    Ok(BatchCommitment {
        leaves: indices.iter().map(|&index| leaves[index].clone()).collect(),
        root,
        proofs,
    })
}

/// Commit `leaves` and prove every one of them.
pub fn commit_all(leaves: &[MerkleLeaf]) -> Result<BatchCommitment> {
    let indices: Vec<usize> = (0..leaves.len()).collect();
    commit(leaves, &indices)
}

/// True iff every proof verifies and every proof shares the batch root.
pub fn verify_all(batch: &BatchCommitment) -> bool {
    for (i, proof) in batch.proofs.iter().enumerate() {
        if proof.root != batch.root {
            tracing::warn!(proof = i, leaf = %proof.leaf.id, "proof root differs from batch root");
            return false;
        }
        if !verify(proof) {
            tracing::warn!(proof = i, leaf = %proof.leaf.id, "inclusion proof failed");
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use authyntic_hash::sha256_hex;

    fn make_leaves(names: &[&str]) -> Vec<MerkleLeaf> {
        names
            .iter()
            .map(|name| MerkleLeaf::new(*name, sha256_hex(name.as_bytes())))
            .collect()
    }

    #[test]
    fn test_commit_and_verify_all() {
        let leaves = make_leaves(&["a", "b", "c"]);
        let batch = commit(&leaves, &[0, 1, 2]).unwrap();

        assert_eq!(
            batch.root,
            "0bdf27bf7ec894ca7cadfe491ec1a3ece840f117989e8c5e9bd7086467bf6c38"
        );
        assert_eq!(batch.proofs.len(), 3);
        assert_eq!(batch.leaves, leaves);
        assert!(batch.proofs.iter().all(|p| p.root == batch.root));
        assert!(verify_all(&batch));
    }

    #[test]
    fn test_subset_keeps_request_order() {
        let leaves = make_leaves(&["a", "b", "c", "d", "e"]);
        let batch = commit(&leaves, &[4, 1]).unwrap();

        assert_eq!(batch.leaves, vec![leaves[4].clone(), leaves[1].clone()]);
        assert_eq!(batch.proofs[0].leaf, leaves[4]);
        assert_eq!(batch.proofs[1].leaf, leaves[1]);
        assert!(verify_all(&batch));
    }

    #[test]
    fn test_out_of_range_aborts_batch() {
        let leaves = make_leaves(&["a", "b", "c"]);
        assert_eq!(
            commit(&leaves, &[0, 3, 1]),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_empty_leaf_set() {
        assert_eq!(commit(&[], &[]), Err(Error::EmptyCommitment));
        assert_eq!(commit_all(&[]), Err(Error::EmptyCommitment));
    }

    #[test]
    fn test_no_indices() {
        let leaves = make_leaves(&["a", "b"]);
        let batch = commit(&leaves, &[]).unwrap();
        assert!(batch.proofs.is_empty());
        assert!(batch.leaves.is_empty());
        assert!(verify_all(&batch));
    }

    #[test]
    fn test_commit_all() {
        let leaves = make_leaves(&["a", "b", "c", "d", "e", "f", "g"]);
        let batch = commit_all(&leaves).unwrap();
        assert_eq!(batch.proofs.len(), leaves.len());
        assert!(verify_all(&batch));
    }

    #[test]
    fn test_verify_all_detects_tampered_proof() {
        let leaves = make_leaves(&["a", "b", "c"]);
        let mut batch = commit(&leaves, &[0, 1, 2]).unwrap();
        batch.proofs[1].leaf.hash = sha256_hex(b"not b");
        assert!(!verify_all(&batch));
    }

    #[test]
    fn test_verify_all_detects_foreign_root() {
        let leaves = make_leaves(&["a", "b", "c"]);
        let other = make_leaves(&["x", "y"]);

        let mut batch = commit(&leaves, &[0, 1]).unwrap();
        let foreign = commit(&other, &[0]).unwrap();

        // The foreign proof verifies on its own, but not against this root.
        assert!(crate::proof::verify(&foreign.proofs[0]));
        batch.proofs.push(foreign.proofs[0].clone());
        assert!(!verify_all(&batch));
    }

    #[test]
    fn test_same_leaves_same_root() {
        let leaves = make_leaves(&["a", "b", "c", "d"]);
        let first = commit(&leaves, &[0]).unwrap();
        let second = commit(&leaves, &[3, 2]).unwrap();
        assert_eq!(first.root, second.root);
    }
}
