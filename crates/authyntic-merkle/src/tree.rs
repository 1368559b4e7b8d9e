//! Level-by-level Merkle tree construction.
//!
//! Parents are `SHA256(left_hex || right_hex)` over the hex *text* of the
//! children. An unmatched last node on an odd-length level is paired with
//! itself (carry-forward), never with a padding value.

use authyntic_core::{Error, MerkleLeaf, MerkleLevel, Position, Result};
use authyntic_hash::sha256_hex;

/// Hash two child nodes into their parent.
pub fn hash_pair(left: &str, right: &str) -> String {
    let mut data = Vec::with_capacity(left.len() + right.len());
    data.extend_from_slice(left.as_bytes());
    data.extend_from_slice(right.as_bytes());
    sha256_hex(&data)
}

/// An immutable Merkle tree stored as its levels, leaves first.
///
/// Invariant: `levels[k + 1].len() == levels[k].len().div_ceil(2)` and the
/// last level holds exactly the root. An empty tree has no levels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MerkleTree {
    levels: Vec<MerkleLevel>,
}

impl MerkleTree {
    /// Build a tree over ordered leaf hashes. Level 0 is the input verbatim.
    pub fn build(leaf_hashes: Vec<String>) -> MerkleTree {
        if leaf_hashes.is_empty() {
            return MerkleTree::default();
        }

        let mut levels = vec![leaf_hashes];
        while let Some(level) = levels.last().filter(|level| level.len() > 1) {
            let next: MerkleLevel = level
                .chunks(2)
                .map(|pair| {
                    let left = &pair[0];
                    let right = pair.get(1).unwrap_or(left);
                    hash_pair(left, right)
                })
                .collect();
            levels.push(next);
        }

        let tree = MerkleTree { levels };
        tracing::debug!(
            leaves = tree.leaf_count(),
            depth = tree.depth(),
            "built merkle tree"
        );
        tree
    }

    /// Build a tree over the hashes of `leaves`, in order.
    pub fn from_leaves(leaves: &[MerkleLeaf]) -> MerkleTree {
        Self::build(leaves.iter().map(|leaf| leaf.hash.clone()).collect())
    }

    /// The root hash, or `None` for an empty tree.
    pub fn root(&self) -> Option<&str> {
        self.levels
            .last()
            .and_then(|level| level.first())
            .map(String::as_str)
    }

    pub fn levels(&self) -> &[MerkleLevel] {
        &self.levels
    }

    pub fn level(&self, k: usize) -> Option<&MerkleLevel> {
        self.levels.get(k)
    }

    pub fn leaf_count(&self) -> usize {
        self.levels.first().map_or(0, Vec::len)
    }

    /// Number of levels above the leaves (0 for a single leaf).
    pub fn depth(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Sibling path from leaf `index` up to (but excluding) the root.
    ///
    /// Even indices take their partner from the right, odd ones from the
    /// left. A node carried forward on an odd-length level is its own
    /// sibling.
    pub fn path(&self, index: usize) -> Result<ProofPath> {
        let len = self.leaf_count();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        let mut siblings = Vec::with_capacity(self.depth());
        let mut positions = Vec::with_capacity(self.depth());
        let mut idx = index;

        for level in &self.levels[..self.depth()] {
            let (partner, position) = if idx % 2 == 1 {
                (idx - 1, Position::Left)
            } else {
                (idx + 1, Position::Right)
            };
            let sibling = level.get(partner).unwrap_or(&level[idx]);
            siblings.push(sibling.clone());
            positions.push(position);
            idx /= 2;
        }

        Ok(ProofPath {
            siblings,
            positions,
        })
    }
}

/// Sibling hashes and their sides, bottom-up.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProofPath {
    pub siblings: Vec<String>,
    pub positions: Vec<Position>,
}

impl ProofPath {
    /// Fold `leaf_hash` up the path.
    ///
    /// Returns `None` when siblings and positions are not aligned.
    pub fn compute_root(&self, leaf_hash: &str) -> Option<String> {
        fold_path(leaf_hash, &self.siblings, &self.positions)
    }
}

pub(crate) fn fold_path(
    leaf_hash: &str,
    siblings: &[String],
    positions: &[Position],
) -> Option<String> {
    if siblings.len() != positions.len() {
        return None;
    }

    let mut running = leaf_hash.to_string();
    for (sibling, position) in siblings.iter().zip(positions) {
        running = match position {
            Position::Right => hash_pair(&running, sibling),
            Position::Left => hash_pair(sibling, &running),
        };
    }
    Some(running)
}

/// Root of the tree over `leaves`, or `None` when there are none.
pub fn derive_root(leaves: &[MerkleLeaf]) -> Option<String> {
    MerkleTree::from_leaves(leaves).root().map(str::to_string)
}
