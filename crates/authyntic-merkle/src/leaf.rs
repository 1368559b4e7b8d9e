//! Leaves built from raw content.

use authyntic_core::MerkleLeaf;
use authyntic_hash::sha256_hex;

/// Build a leaf whose hash is the SHA-256 of `content`.
pub fn leaf_from_content(id: impl Into<String>, content: &[u8]) -> MerkleLeaf {
    MerkleLeaf::new(id, sha256_hex(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_from_content() {
        let leaf = leaf_from_content("greeting", b"abc");
        assert_eq!(leaf.id, "greeting");
        assert_eq!(
            leaf.hash,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert!(leaf.metadata.is_none());
    }

    #[test]
    fn test_same_content_same_hash() {
        let a = leaf_from_content("a", b"payload");
        let b = leaf_from_content("b", b"payload");
        assert_eq!(a.hash, b.hash);
        assert_ne!(a, b);
    }
}
