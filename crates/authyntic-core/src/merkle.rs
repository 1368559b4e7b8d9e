//! Merkle commitment types.
//!
//! These are plain data: tree construction and proof checking live in
//! `authyntic-merkle`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One level of a Merkle tree, as lowercase hex hashes.
pub type MerkleLevel = Vec<String>;

/// The smallest committed unit: one piece of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerkleLeaf {
    /// Opaque identifier chosen by the caller
    pub id: String,
    /// Hex hash of the content
    pub hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, Value>>,
}

impl MerkleLeaf {
    pub fn new(id: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            hash: hash.into(),
            metadata: None,
        }
    }

    /// Attach a metadata entry, replacing any previous value for `key`.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Side on which a sibling hash sits relative to the running hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Left,
    Right,
}

/// Sibling path proving that `leaf` is committed under `root`.
///
/// Whether the proof holds is always recomputed; it is never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InclusionProof {
    pub leaf: MerkleLeaf,
    pub siblings: Vec<String>,
    /// Aligned with `siblings`
    pub positions: Vec<Position>,
    pub root: String,
}

/// One root covering a leaf set, with a proof per leaf of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchCommitment {
    /// Leaves of the requested indices, in request order
    pub leaves: Vec<MerkleLeaf>,
    pub root: String,
    pub proofs: Vec<InclusionProof>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_without_metadata_omits_field() {
        let leaf = MerkleLeaf::new("frame-0", "ab");
        let json = serde_json::to_string(&leaf).unwrap();
        assert_eq!(json, r#"{"id":"frame-0","hash":"ab"}"#);

        let back: MerkleLeaf = serde_json::from_str(&json).unwrap();
        assert_eq!(back, leaf);
    }

    #[test]
    fn test_leaf_metadata() {
        let leaf = MerkleLeaf::new("clip", "00")
            .with_metadata("size", 42)
            .with_metadata("source", "camera-3");
        let metadata = leaf.metadata.as_ref().unwrap();
        assert_eq!(metadata.get("size"), Some(&Value::from(42)));
        assert_eq!(metadata.get("source"), Some(&Value::from("camera-3")));
    }

    #[test]
    fn test_position_serde() {
        let json = serde_json::to_string(&[Position::Left, Position::Right]).unwrap();
        assert_eq!(json, r#"["left","right"]"#);
    }
}
